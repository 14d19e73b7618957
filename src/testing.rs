//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It
//! provides canonical fixture builders so individual test modules don't
//! each hand-roll their own small animal-clustering corpus.

#![doc(hidden)]

use crate::index::LsiIndex;
use crate::tokenize::DefaultTokenizer;

/// The five-document animal-clustering fixture used by the testable
/// scenarios: two dog documents, two cat documents, one bird document.
pub fn animal_corpus() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("doc1", "This text deals with dogs. Dogs.", "Dog"),
        ("doc2", "This text involves dogs too. Dogs!", "Dog"),
        ("doc3", "This text revolves around cats. Cats.", "Cat"),
        ("doc4", "This text also involves cats. Cats!", "Cat"),
        ("doc5", "This text involves birds. Birds.", "Bird"),
    ]
}

/// Build an `LsiIndex` from `animal_corpus` with the default tokenizer,
/// without building it.
pub fn make_animal_index(auto_rebuild: bool) -> LsiIndex<&'static str> {
    let mut index = LsiIndex::new(auto_rebuild);
    for (item, text, category) in animal_corpus() {
        index.add_item(item, text, vec![category.to_string()], &DefaultTokenizer);
    }
    index
}

/// As `make_animal_index`, already built with `cutoff`.
pub fn make_built_animal_index(cutoff: f64) -> LsiIndex<&'static str> {
    let mut index = make_animal_index(false);
    index.build_index(cutoff).expect("fixture cutoff is valid");
    index
}
