//! Round-tripping the full animal corpus through `save`/`load`, rather than
//! the minimal two-document fixture already covered inline in `persist.rs`.

use crate::common::animal_corpus;
use noema::{load, save, DefaultTokenizer, LsiIndex, Query};
use std::io::Write;

fn seeded() -> LsiIndex<String> {
    let mut index: LsiIndex<String> = LsiIndex::new(false);
    for (item, text, category) in animal_corpus() {
        index.add_item(
            item.to_string(),
            text,
            vec![category.to_string()],
            &DefaultTokenizer,
        );
    }
    index.build_index(0.5).unwrap();
    index
}

#[test]
fn full_corpus_round_trip_preserves_search_and_classification() {
    let index = seeded();
    let json = save(&index).unwrap();
    let reloaded: LsiIndex<String> = load(&json).unwrap();

    assert_eq!(index.items().len(), reloaded.items().len());

    let before = index
        .classify(Query::text("dogs here"), 0.5, &DefaultTokenizer)
        .unwrap();
    let after = reloaded
        .classify(Query::text("dogs here"), 0.5, &DefaultTokenizer)
        .unwrap();
    assert_eq!(before, after);

    let before_hits: Vec<String> = index
        .search("birds chirping", 2, &DefaultTokenizer)
        .into_iter()
        .map(|(item, _)| item)
        .collect();
    let after_hits: Vec<String> = reloaded
        .search("birds chirping", 2, &DefaultTokenizer)
        .into_iter()
        .map(|(item, _)| item)
        .collect();
    assert_eq!(before_hits, after_hits);
}

#[test]
fn round_trip_through_a_file_on_disk() {
    let index = seeded();
    let json = save(&index).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let read_back = std::fs::read_to_string(file.path()).unwrap();
    let reloaded: LsiIndex<String> = load(&read_back).unwrap();
    assert_eq!(reloaded.items().len(), index.items().len());
}
