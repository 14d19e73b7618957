//! Scenario 1: five documents across three topics cluster the way raw word
//! overlap would not - `doc1` and `doc2` share no content words besides
//! "dogs", yet LSI should still rank them nearest each other.

use crate::common::make_built_animal_index;
use noema::{DefaultTokenizer, Query};

#[test]
fn dog_text_classifies_as_dog() {
    let index = make_built_animal_index(0.5);
    let winner = index
        .classify(
            Query::text("This text revolves around dogs."),
            0.3,
            &DefaultTokenizer,
        )
        .unwrap();
    assert_eq!(winner, Some("Dog".to_string()));
}

#[test]
fn doc1_finds_doc2_as_its_nearest_relative() {
    let index = make_built_animal_index(0.5);
    let related = index.find_related(Query::known("doc1"), 3, &DefaultTokenizer);
    assert!(!related.is_empty());
    assert_eq!(related[0].0, "doc2");
    assert!(related.iter().all(|(item, _)| *item != "doc1"));
}

#[test]
fn search_for_birds_surfaces_the_bird_document_first() {
    let index = make_built_animal_index(0.5);
    let hits = index.search("birds chirping at dawn", 1, &DefaultTokenizer);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, "doc5");
}
