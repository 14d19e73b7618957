// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! The LSI index: the engine that ties the linear-algebra kernel, the word
//! list, and per-document content nodes together into add/build/search.
//!
//! # Lifecycle
//!
//! An `LsiIndex` is always in one of three states:
//!
//! - **Empty**: no items.
//! - **Dirty**: items have been added/removed/re-added since the last
//!   successful `build_index`, so `version != built_at_version`.
//! - **Built**: `build_index` has run since the last mutation.
//!
//! Read operations (`search`, `classify`, `find_related`,
//! `highest_relative_content`) return empty results in Empty/Dirty rather
//! than raising - only `build_index` itself can fail, and only on a bad
//! cutoff. `needs_rebuild` is the caller-visible way to check before relying
//! on LSI-quality results; with fewer than two items there is nothing for an
//! SVD to do, so `needs_rebuild` is also false whenever `items().len() <= 1`.

mod spectrum;

pub use spectrum::SpectrumEntry;

use crate::content::{ContentNode, TokenMultiset};
use crate::error::{Error, Result};
use crate::incremental::ThinSvdState;
use crate::linalg::{jacobi_svd, reconstruct, JacobiConfig, Matrix, Vector};
use crate::token::Token;
use crate::tokenize::Tokenizer;
use crate::wordlist::WordList;
use std::collections::HashMap;
use std::hash::Hash;

/// Default fraction of the singular spectrum kept by `build_index` when the
/// caller doesn't have a better number in mind.
pub const DEFAULT_BUILD_CUTOFF: f64 = 0.75;
/// Default fraction of the neighborhood vote `classify` consults.
pub const DEFAULT_CLASSIFY_CUTOFF: f64 = 0.30;
/// Default neighbor count for `search`/`find_related`.
pub const DEFAULT_MAX_NEAREST: usize = 3;

/// A document reference used by operations that compare "a document" to the
/// rest of the index. `Known` reuses the stored vectors of an already
/// indexed item (LSI-projected, if the index has been built); `Text` builds
/// an ephemeral, un-indexed node from fresh text and only ever gets a raw
/// term vector. Modeled as a tagged sum rather than a trait object: there
/// are exactly two shapes of "a document" here, and dynamic dispatch would
/// buy nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<K> {
    Known(K),
    Text(String),
}

impl<K> Query<K> {
    pub fn known(item: K) -> Self {
        Query::Known(item)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Query::Text(text.into())
    }
}

fn validate_cutoff(cutoff: f64) -> Result<()> {
    if cutoff > 0.0 && cutoff < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidCutoff { cutoff })
    }
}

/// The LSI index over items keyed by `K`.
///
/// `K` only needs to be `Clone + Eq + Hash` to key the internal maps; the
/// `Send + Sync + 'static` bound exists solely so the `parallel` feature can
/// run `recompute_raw` across documents with rayon during `build_index`.
#[derive(Debug, Clone)]
pub struct LsiIndex<K>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
{
    order: Vec<K>,
    nodes: HashMap<K, ContentNode>,
    word_list: WordList,
    version: u64,
    built_at_version: u64,
    auto_rebuild: bool,
    jacobi_config: JacobiConfig,
    singular_values: Option<Vec<f64>>,
    /// `U` from the last successful build, with columns permuted to match
    /// the descending order of `singular_values` - the pair bootstraps a
    /// `ThinSvdState` for incremental updates (see `bootstrap_incremental`).
    u: Option<Matrix>,
}

impl<K> LsiIndex<K>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
{
    /// A fresh, empty index. When `auto_rebuild` is set, every mutating call
    /// (`add_item`, `remove_item`) immediately triggers a `build_index` with
    /// `DEFAULT_BUILD_CUTOFF`, trading per-call latency for always-fresh
    /// reads.
    pub fn new(auto_rebuild: bool) -> Self {
        Self::with_jacobi_config(auto_rebuild, JacobiConfig::default())
    }

    /// As `new`, with an explicit Jacobi sweep budget (see
    /// `JacobiConfig::max_sweeps`) - useful for trading SVD accuracy for
    /// speed on larger corpora.
    pub fn with_jacobi_config(auto_rebuild: bool, jacobi_config: JacobiConfig) -> Self {
        Self {
            order: Vec::new(),
            nodes: HashMap::new(),
            word_list: WordList::new(),
            version: 0,
            built_at_version: 0,
            auto_rebuild,
            jacobi_config,
            singular_values: None,
            u: None,
        }
    }

    /// Add (or replace) an item from already-fetched text.
    pub fn add_item(
        &mut self,
        item: K,
        text: &str,
        categories: Vec<String>,
        tokenizer: &dyn Tokenizer,
    ) {
        let tokens = tokenizer.tokenize(text);
        let mut node = ContentNode::new(tokens);
        *node.categories_mut() = categories;
        if !self.nodes.contains_key(&item) {
            self.order.push(item.clone());
        }
        self.nodes.insert(item, node);
        self.version += 1;
        self.maybe_auto_rebuild();
        self.maybe_populate_solo_raw_vector();
    }

    /// Add (or replace) an item from an already-tokenized multiset,
    /// bypassing the `Tokenizer` step entirely. Used by persistence's
    /// `load`, where the stored `word_hash` already *is* the token
    /// multiset.
    pub fn add_item_tokens(&mut self, item: K, tokens: TokenMultiset, categories: Vec<String>) {
        let mut node = ContentNode::new(tokens);
        *node.categories_mut() = categories;
        if !self.nodes.contains_key(&item) {
            self.order.push(item.clone());
        }
        self.nodes.insert(item, node);
        self.version += 1;
        self.maybe_auto_rebuild();
        self.maybe_populate_solo_raw_vector();
    }

    /// As `add_item`, but the document body is fetched lazily from `item`
    /// via `fetch_body` instead of being supplied directly - useful when the
    /// caller only has a lightweight key (a URL, a row id) and loading the
    /// body is itself expensive.
    pub fn add_item_with_fetch<F>(
        &mut self,
        item: K,
        categories: Vec<String>,
        tokenizer: &dyn Tokenizer,
        fetch_body: F,
    ) where
        F: FnOnce(&K) -> String,
    {
        let text = fetch_body(&item);
        self.add_item(item, &text, categories, tokenizer);
    }

    /// Remove an item. Returns whether it was present.
    pub fn remove_item(&mut self, item: &K) -> bool {
        if self.nodes.remove(item).is_some() {
            self.order.retain(|k| k != item);
            self.version += 1;
            self.maybe_auto_rebuild();
            self.maybe_populate_solo_raw_vector();
            true
        } else {
            false
        }
    }

    fn maybe_auto_rebuild(&mut self) {
        if self.auto_rebuild {
            // DEFAULT_BUILD_CUTOFF is a crate constant in (0, 1), so
            // build_index's only failure mode (InvalidCutoff) can't happen
            // here.
            debug_assert!(DEFAULT_BUILD_CUTOFF > 0.0 && DEFAULT_BUILD_CUTOFF < 1.0);
            self.build_index(DEFAULT_BUILD_CUTOFF)
                .expect("DEFAULT_BUILD_CUTOFF is always in (0, 1)");
        }
    }

    /// When the corpus has exactly one item, give it a raw vector right
    /// away. `needs_rebuild()` never reports `true` for a single document
    /// (there's no SVD truncation to decide), so without this a
    /// never-explicitly-built, `auto_rebuild = false` solo item would sit
    /// with `raw_vector() == None` forever - invisible to `search`/
    /// `classify` even though nothing is "dirty" about it. Unlike
    /// `build_index`, this never touches `built_at_version`, `lsi_vector`,
    /// or the stored `U`/spectrum: those stay exactly as `build_index`
    /// leaves them, so `highest_ranked_stems` (which requires an LSI
    /// projection) still reports `NotIndexed` until a real build runs.
    fn maybe_populate_solo_raw_vector(&mut self) {
        if self.order.len() != 1 {
            return;
        }
        let Some(key) = self.order.first().cloned() else {
            return;
        };
        let mut word_list = WordList::new();
        if let Some(node) = self.nodes.get(&key) {
            for token in node.tokens().keys() {
                word_list.add(token.clone());
            }
        }
        self.word_list = word_list;
        if let Some(node) = self.nodes.get_mut(&key) {
            node.recompute_raw(&self.word_list);
        }
    }

    /// Every indexed item, in insertion order.
    pub fn items(&self) -> Vec<K> {
        self.order.clone()
    }

    /// Mutable access to an item's categories. Mutating the returned `Vec`
    /// does not bump `version` - categories are metadata, not inputs to the
    /// term-document matrix, so touching them never forces a rebuild.
    pub fn categories_for(&mut self, item: &K) -> Option<&mut Vec<String>> {
        self.nodes.get_mut(item).map(|n| n.categories_mut())
    }

    /// Read-only view of an item's categories, for persistence and display.
    pub fn categories_of(&self, item: &K) -> Option<&[String]> {
        self.nodes.get(item).map(|n| n.categories())
    }

    /// Read-only view of an item's token multiset, for persistence.
    pub fn tokens_of(&self, item: &K) -> Option<&TokenMultiset> {
        self.nodes.get(item).map(|n| n.tokens())
    }

    pub fn auto_rebuild(&self) -> bool {
        self.auto_rebuild
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn built_at_version(&self) -> u64 {
        self.built_at_version
    }

    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    /// `true` when a successful `build_index` would change the answers
    /// `search`/`classify`/`find_related` give. Always `false` with fewer
    /// than two items: there's nothing for an SVD to decompose.
    pub fn needs_rebuild(&self) -> bool {
        self.order.len() > 1 && self.version != self.built_at_version
    }

    /// Rebuild the word list, term-document matrix, SVD, and every
    /// document's LSI projection from scratch.
    ///
    /// `cutoff` must lie in the open interval `(0, 1)`; it controls how much
    /// of the singular spectrum survives truncation - see the module-level
    /// cutoff-index formula in step 6 below.
    ///
    /// A no-op (returns `Ok(())` immediately) when nothing has changed since
    /// the last build (`version == built_at_version`), so calling this
    /// unconditionally after every mutation (as `auto_rebuild` does) never
    /// does redundant work. Note this is *not* the same gate as the public
    /// `needs_rebuild()`, which also reports `false` for a one-item corpus:
    /// the body below still has to run once for that lone document, to
    /// populate its raw vectors - without it, `search`/`classify` would
    /// never see a single-item index's only document.
    pub fn build_index(&mut self, cutoff: f64) -> Result<()> {
        validate_cutoff(cutoff)?;
        if self.version == self.built_at_version {
            return Ok(());
        }

        // 1. Rebuild the word list from scratch; old indices are never
        // reused across a rebuild.
        let mut word_list = WordList::new();
        for key in &self.order {
            if let Some(node) = self.nodes.get(key) {
                for token in node.tokens().keys() {
                    word_list.add(token.clone());
                }
            }
        }
        self.word_list = word_list;

        // 2. Recompute every document's raw term vector against the new
        // word list, optionally in parallel.
        self.recompute_all_raw_vectors();

        // 3. Assemble the vocabulary x documents matrix, one column per
        // document in insertion order.
        let vocab_size = self.word_list.size();
        let doc_count = self.order.len();
        let mut a = Matrix::zeros(vocab_size, doc_count);
        for (col, key) in self.order.iter().enumerate() {
            if let Some(raw) = self.nodes.get(key).and_then(|n| n.raw_vector()) {
                a.set_column(col, raw);
            }
        }

        // 4. SVD.
        let result = jacobi_svd(&a, self.jacobi_config);

        // 5. A column permutation sorting `result.s` descending - used for
        // the spectrum (`sorted_s`) and, further down, to keep the stored
        // term-space `U` in the same order, so `bootstrap_incremental` can
        // hand out a `(U, s)` pair that already satisfies `ThinSvdState`'s
        // "s sorted descending, U's columns matching" invariant.
        let mut order_idx: Vec<usize> = (0..result.s.len()).collect();
        order_idx.sort_by(|&i, &j| {
            result
                .s
                .get(j)
                .unwrap_or(0.0)
                .partial_cmp(&result.s.get(i).unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let sorted_s: Vec<f64> = order_idx.iter().map(|&i| result.s.get(i).unwrap_or(0.0)).collect();

        // 6. Cutoff index k = max(round(|s| * cutoff) - 1, 0); threshold is
        // the singular value at that rank in the sorted spectrum. Applying
        // the threshold to the *unsorted* `s` (rather than sorting s itself)
        // avoids having to permute U/V's columns to match: "zero out values
        // below tau" is a pointwise operation independent of ordering.
        let count = sorted_s.len();
        let k = ((count as f64 * cutoff).round() as i64 - 1).max(0) as usize;
        let threshold = sorted_s.get(k).copied().unwrap_or(0.0);
        let mut truncated_s = result.s.clone();
        for i in 0..truncated_s.len() {
            if truncated_s.get(i).unwrap_or(0.0) < threshold {
                truncated_s.set(i, 0.0);
            }
        }

        // 7. Reconstruct the denoised term-document matrix.
        let reconstructed = reconstruct(&result.u, &truncated_s, &result.v, result.transposed);

        // 8. Install each document's LSI projection: column `col` of the
        // reconstruction.
        for (col, key) in self.order.iter().enumerate() {
            if let Some(node) = self.nodes.get_mut(key) {
                node.set_lsi_vector(reconstructed.column(col));
            }
        }

        // 9. Store the term-space `(U, s)` pair, sorted descending, as the
        // bootstrap input for incremental updates (`bootstrap_incremental`).
        // `result.u`'s rows are indexed by vocabulary only when the SVD
        // wasn't run on the transposed matrix; when it was, the term-space
        // basis is `result.v` instead (see `linalg::svd`'s module doc).
        let term_basis = if result.transposed { &result.v } else { &result.u };
        let mut sorted_u = Matrix::zeros(term_basis.rows(), term_basis.cols());
        for (new_col, &old_col) in order_idx.iter().enumerate() {
            sorted_u.set_column(new_col, &term_basis.column(old_col));
        }
        self.u = Some(sorted_u);

        self.singular_values = Some(sorted_s);
        self.built_at_version = self.version;
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn recompute_all_raw_vectors(&mut self) {
        use rayon::prelude::*;
        let word_list = &self.word_list;
        self.nodes
            .par_iter_mut()
            .for_each(|(_, node)| node.recompute_raw(word_list));
    }

    #[cfg(not(feature = "parallel"))]
    fn recompute_all_raw_vectors(&mut self) {
        let word_list = &self.word_list;
        for node in self.nodes.values_mut() {
            node.recompute_raw(word_list);
        }
    }

    /// The descending singular-value spectrum from the last successful
    /// build, annotated with each dimension's share of the total mass.
    /// `None` before the first successful `build_index`.
    pub fn singular_value_spectrum(&self) -> Option<Vec<SpectrumEntry>> {
        self.singular_values
            .as_ref()
            .map(|values| spectrum::spectrum_from_sorted(values))
    }

    /// The term-space `U` from the last successful `build_index`, with
    /// columns already sorted to match `singular_value_spectrum`'s
    /// descending order. `None` before the first successful build. This is
    /// the bootstrap input `bootstrap_incremental` hands to `ThinSvdState`.
    pub fn last_build_u(&self) -> Option<&Matrix> {
        self.u.as_ref()
    }

    /// Seed a `ThinSvdState` from this index's last successful build,
    /// keeping at most `max_rank` singular values/vectors. `None` before the
    /// first successful `build_index`.
    pub fn bootstrap_incremental(&self, max_rank: usize) -> Option<ThinSvdState> {
        let u = self.u.clone()?;
        let s = self.singular_values.clone()?;
        Some(ThinSvdState::new(u, Vector::from_vec(s), max_rank, self.word_list.size()))
    }

    /// Add one document against an existing `ThinSvdState` rather than
    /// through a full `build_index`. `state` is updated in place via
    /// Brand's rank-1 update (`ThinSvdState::update_with_column`); if the
    /// vocabulary has grown past `vocab_growth_threshold` relative to
    /// `state`'s last full build, this instead performs a full rebuild and
    /// re-seeds `state` from it (see `ThinSvdState::vocabulary_growth_exceeds`).
    ///
    /// `state` should ordinarily come from this same index's
    /// `bootstrap_incremental` - passing one seeded from a different index or
    /// word list produces meaningless projections, not an error, since
    /// dimensions alone can't distinguish the two cases.
    pub fn try_add_item_incremental(
        &mut self,
        item: K,
        text: &str,
        categories: Vec<String>,
        tokenizer: &dyn Tokenizer,
        state: &mut ThinSvdState,
        vocab_growth_threshold: f64,
    ) -> Result<()> {
        let tokens = tokenizer.tokenize(text);
        for token in tokens.keys() {
            self.word_list.add(token.clone());
        }
        let vocab_size = self.word_list.size();

        let mut node = ContentNode::new(tokens);
        *node.categories_mut() = categories;
        if !self.nodes.contains_key(&item) {
            self.order.push(item.clone());
        }
        self.version += 1;

        if state.vocabulary_growth_exceeds(vocab_size, vocab_growth_threshold) {
            self.nodes.insert(item, node);
            self.build_index(DEFAULT_BUILD_CUTOFF)?;
            if let Some(bootstrapped) = self.bootstrap_incremental(state.max_rank()) {
                *state = bootstrapped;
            }
            return Ok(());
        }

        state.grow_to_vocab(vocab_size);
        node.recompute_raw(&self.word_list);
        let raw = node.raw_vector().cloned().unwrap_or_else(|| Vector::zeros(vocab_size));
        state.update_with_column(&raw)?;
        let projected = state
            .project_batch(std::slice::from_ref(&raw))?
            .pop()
            .expect("project_batch returns one vector per input column");
        node.set_lsi_vector(projected);
        self.nodes.insert(item, node);
        self.built_at_version = self.version;
        Ok(())
    }

    fn vector_for(node: &ContentNode, normalized: bool) -> Option<&Vector> {
        if normalized {
            node.search_norm()
        } else {
            node.search_vector()
        }
    }

    fn resolve_query_vector(&self, doc: &Query<K>, tokenizer: &dyn Tokenizer, normalized: bool) -> Option<Vector> {
        match doc {
            Query::Known(key) => self
                .nodes
                .get(key)
                .and_then(|n| Self::vector_for(n, normalized))
                .cloned(),
            Query::Text(text) => {
                let tokens = tokenizer.tokenize(text);
                let mut node = ContentNode::new(tokens);
                node.recompute_raw(&self.word_list);
                Self::vector_for(&node, normalized).cloned()
            }
        }
    }

    fn proximity(&self, doc: Query<K>, tokenizer: &dyn Tokenizer, normalized: bool) -> Vec<(K, f64)> {
        if self.needs_rebuild() {
            return Vec::new();
        }
        let Some(query_vec) = self.resolve_query_vector(&doc, tokenizer, normalized) else {
            return Vec::new();
        };
        let mut scored: Vec<(K, f64)> = self
            .order
            .iter()
            .filter_map(|key| {
                let node = self.nodes.get(key)?;
                let v = Self::vector_for(node, normalized)?;
                let score = v.dot(&query_vec).ok()?;
                Some((key.clone(), score))
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }

    /// Every item, ranked by raw (unnormalized) dot product against `doc`.
    /// Empty whenever `needs_rebuild()`, or when `doc` resolves to nothing
    /// (an unknown `Query::Known` key, or text with no tokens known to the
    /// current word list).
    pub fn proximity_array_for_content(&self, doc: Query<K>, tokenizer: &dyn Tokenizer) -> Vec<(K, f64)> {
        self.proximity(doc, tokenizer, false)
    }

    /// As `proximity_array_for_content`, but ranked by cosine similarity
    /// (dot product of normalized vectors).
    pub fn proximity_norms_for_content(&self, doc: Query<K>, tokenizer: &dyn Tokenizer) -> Vec<(K, f64)> {
        self.proximity(doc, tokenizer, true)
    }

    /// The top `max_nearest` items by cosine similarity to `query`.
    pub fn search(&self, query: &str, max_nearest: usize, tokenizer: &dyn Tokenizer) -> Vec<(K, f64)> {
        let mut results = self.proximity_norms_for_content(Query::Text(query.to_string()), tokenizer);
        results.truncate(max_nearest);
        results
    }

    /// As `search`, but against an existing document (or fresh text) rather
    /// than a bare query string, ranked by `proximity_array_for_content`
    /// (unnormalized dot product, not cosine similarity), and with the
    /// document itself excluded from its own results when `doc` is
    /// `Query::Known`.
    pub fn find_related(&self, doc: Query<K>, max_nearest: usize, tokenizer: &dyn Tokenizer) -> Vec<(K, f64)> {
        let exclude = if let Query::Known(key) = &doc { Some(key.clone()) } else { None };
        let mut results = self.proximity_array_for_content(doc, tokenizer);
        if let Some(key) = exclude {
            results.retain(|(item, _)| *item != key);
        }
        results.truncate(max_nearest);
        results
    }

    /// Cosine-neighborhood category vote. Takes the top
    /// `round(|items| * cutoff)` entries of `proximity_array_for_content`
    /// and sums each entry's score into every category it carries; the
    /// category with the highest tally wins, ties broken in favor of the
    /// category that was first encountered while tallying.
    pub fn classify(&self, doc: Query<K>, cutoff: f64, tokenizer: &dyn Tokenizer) -> Result<Option<String>> {
        Ok(self
            .classify_with_confidence(doc, cutoff, tokenizer)?
            .map(|(label, _)| label))
    }

    /// As `classify`, but also returns the winning category's share of the
    /// total tallied score. `None` when there's nothing to tally (empty
    /// index, unresolved query, or every neighbor has no categories).
    pub fn classify_with_confidence(
        &self,
        doc: Query<K>,
        cutoff: f64,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Option<(String, f64)>> {
        validate_cutoff(cutoff)?;
        let count = (self.order.len() as f64 * cutoff).round() as usize;
        let entries = self.proximity_array_for_content(doc, tokenizer);

        let mut seen_order: Vec<String> = Vec::new();
        let mut tallies: HashMap<String, f64> = HashMap::new();
        for (item, score) in entries.into_iter().take(count) {
            let Some(node) = self.nodes.get(&item) else {
                continue;
            };
            for category in node.categories() {
                if !tallies.contains_key(category) {
                    seen_order.push(category.clone());
                }
                *tallies.entry(category.clone()).or_insert(0.0) += score;
            }
        }

        let total: f64 = tallies.values().sum();
        if total == 0.0 {
            return Ok(None);
        }

        let mut best: Option<(String, f64)> = None;
        for label in &seen_order {
            let score = tallies[label];
            let better = match &best {
                None => true,
                Some((_, best_score)) => score > *best_score,
            };
            if better {
                best = Some((label.clone(), score));
            }
        }
        Ok(best.map(|(label, score)| (label, score / total)))
    }

    /// The `max_chunks` items with the greatest total unnormalized
    /// similarity to every other item - a crude "most central" heuristic,
    /// not a clustering algorithm. Empty while `needs_rebuild()`.
    pub fn highest_relative_content(&self, max_chunks: usize) -> Vec<(K, f64)> {
        if self.needs_rebuild() {
            return Vec::new();
        }
        let mut totals: Vec<(K, f64)> = Vec::new();
        for i in &self.order {
            let Some(vi) = self.nodes.get(i).and_then(|n| n.search_vector()) else {
                continue;
            };
            let mut total = 0.0;
            for j in &self.order {
                if i == j {
                    continue;
                }
                if let Some(vj) = self.nodes.get(j).and_then(|n| n.search_vector()) {
                    if let Ok(score) = vi.dot(vj) {
                        total += score;
                    }
                }
            }
            totals.push((i.clone(), total));
        }
        totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        totals.truncate(max_chunks);
        totals
    }

    /// The `count` word-list tokens with the largest LSI-vector components
    /// for `item` - a rough "what this document is about" summary.
    /// `Error::NotIndexed` when `item` isn't in the index or hasn't been
    /// through a successful `build_index`.
    pub fn highest_ranked_stems(&self, item: &K, count: usize) -> Result<Vec<Token>> {
        let node = self.nodes.get(item).ok_or(Error::NotIndexed)?;
        let lsi = node.lsi_vector().ok_or(Error::NotIndexed)?;
        let mut ranked: Vec<(usize, f64)> = lsi.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Ok(ranked
            .into_iter()
            .take(count)
            .filter_map(|(i, _)| self.word_list.token_for(i).cloned())
            .collect())
    }
}
