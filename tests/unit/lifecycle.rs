//! Scenario 2: empty and single-item indices never need a rebuild and every
//! read operation degrades to an empty/absent answer instead of panicking.

use noema::{DefaultTokenizer, LsiIndex, Query};

#[test]
fn empty_index_reads_are_empty() {
    let index: LsiIndex<String> = LsiIndex::new(false);
    assert!(!index.needs_rebuild());
    assert!(index.search("anything", 3, &DefaultTokenizer).is_empty());
    assert_eq!(
        index
            .classify(Query::text("anything"), 0.5, &DefaultTokenizer)
            .unwrap(),
        None
    );
    assert!(index.highest_relative_content(3).is_empty());
    assert!(index.items().is_empty());
}

#[test]
fn single_item_index_never_needs_rebuild_and_classifies_to_its_own_category() {
    let mut index: LsiIndex<String> = LsiIndex::new(false);
    index.add_item(
        "solo".to_string(),
        "a lone document about dogs",
        vec!["Dog".to_string()],
        &DefaultTokenizer,
    );
    assert!(!index.needs_rebuild());

    let winner = index
        .classify(Query::text("dogs again"), 0.5, &DefaultTokenizer)
        .unwrap();
    assert_eq!(winner, Some("Dog".to_string()));

    let hits = index.search("dogs", 3, &DefaultTokenizer);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, "solo");
}

#[test]
fn removing_the_only_item_returns_to_empty() {
    let mut index: LsiIndex<String> = LsiIndex::new(false);
    index.add_item("solo".to_string(), "text", vec![], &DefaultTokenizer);
    assert!(index.remove_item(&"solo".to_string()));
    assert!(index.items().is_empty());
    assert!(!index.needs_rebuild());
    assert!(index.search("text", 3, &DefaultTokenizer).is_empty());
}
