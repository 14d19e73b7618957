//! Cutoff monotonicity: a larger `build_index` cutoff keeps at least as many
//! singular values as a smaller one, since the cutoff index is a
//! non-decreasing function of the cutoff fraction.

use noema::{DefaultTokenizer, LsiIndex};
use proptest::prelude::*;

const VOCAB: &[&str] = &["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..VOCAB.len(), 1..6), 4..8)
}

fn build(corpus: &[Vec<usize>], cutoff: f64) -> LsiIndex<String> {
    let mut index: LsiIndex<String> = LsiIndex::new(false);
    for (i, word_indices) in corpus.iter().enumerate() {
        let text = word_indices.iter().map(|&w| VOCAB[w]).collect::<Vec<_>>().join(" ");
        index.add_item(format!("doc{i}"), &text, vec![], &DefaultTokenizer);
    }
    index.build_index(cutoff).unwrap();
    index
}

fn nonzero_count(index: &LsiIndex<String>) -> usize {
    index
        .singular_value_spectrum()
        .unwrap()
        .iter()
        .filter(|entry| entry.value > 0.0)
        .count()
}

proptest! {
    #[test]
    fn a_larger_cutoff_never_keeps_fewer_singular_values(
        corpus in corpus_strategy(),
        low in 0.1..0.4f64,
        high in 0.6..0.9f64,
    ) {
        let low_index = build(&corpus, low);
        let high_index = build(&corpus, high);
        prop_assert!(nonzero_count(&high_index) >= nonzero_count(&low_index));
    }
}
