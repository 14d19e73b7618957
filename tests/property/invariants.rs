//! Property-based tests verifying invariants that must hold across any
//! corpus, not just the fixed fixtures used by the scenario tests.

use noema::{DefaultTokenizer, Error, LsiIndex, Query};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

/// A strategy producing between 2 and 8 documents, each a handful of words
/// drawn from a small shared vocabulary so documents actually overlap.
fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(
        prop::collection::vec(0..VOCAB.len(), 1..6),
        2..8,
    )
}

fn build(corpus: &[Vec<usize>]) -> LsiIndex<String> {
    let mut index: LsiIndex<String> = LsiIndex::new(false);
    for (i, word_indices) in corpus.iter().enumerate() {
        let text = word_indices.iter().map(|&w| VOCAB[w]).collect::<Vec<_>>().join(" ");
        index.add_item(format!("doc{i}"), &text, vec![], &DefaultTokenizer);
    }
    index
}

proptest! {
    /// Every item that survives a successful build has a populated LSI
    /// vector - `highest_ranked_stems` only ever fails with `NotIndexed`
    /// before a build, never after.
    #[test]
    fn every_item_has_an_lsi_vector_after_build(corpus in corpus_strategy()) {
        let mut index = build(&corpus);
        index.build_index(0.75).unwrap();
        prop_assert!(!index.needs_rebuild());
        for item in index.items() {
            let result = index.highest_ranked_stems(&item, 1);
            prop_assert!(!matches!(result, Err(Error::NotIndexed)));
        }
    }

    /// A document is always at least as similar to itself as to the median
    /// of its cosine-ranked neighborhood: it must land within the top half
    /// of `proximity_norms_for_content` run against its own known key.
    #[test]
    fn a_document_ranks_itself_within_the_top_half_of_its_own_neighborhood(corpus in corpus_strategy()) {
        let mut index = build(&corpus);
        index.build_index(0.75).unwrap();
        let total = index.items().len();

        for item in index.items() {
            let ranked = index.proximity_norms_for_content(Query::known(item.clone()), &DefaultTokenizer);
            if ranked.is_empty() {
                continue;
            }
            let position = ranked.iter().position(|(k, _)| *k == item);
            if let Some(position) = position {
                prop_assert!(position < total.div_ceil(2).max(1));
            }
        }
    }
}
