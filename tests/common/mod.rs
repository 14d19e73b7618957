//! Shared test utilities and fixtures.

#![allow(dead_code)]

pub use noema::testing::{animal_corpus, make_animal_index, make_built_animal_index};

use noema::{DefaultTokenizer, LsiIndex};

/// Build an index over `docs` (item, text, categories), unbuilt.
pub fn build_test_index(docs: &[(&str, &str, &[&str])]) -> LsiIndex<String> {
    let mut index: LsiIndex<String> = LsiIndex::new(false);
    for (item, text, categories) in docs {
        let categories = categories.iter().map(|c| c.to_string()).collect();
        index.add_item(item.to_string(), text, categories, &DefaultTokenizer);
    }
    index
}
