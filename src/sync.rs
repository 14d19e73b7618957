// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! A thread-safe wrapper around `LsiIndex`, matching the concurrency
//! contract of §5: single-writer discipline, at most one operation in
//! flight conceptually, reads never block each other.
//!
//! `parking_lot::RwLock` rather than the standard library's: no poisoning
//! to thread through every call site, and a smaller/faster lock for the
//! read-heavy access pattern (search/classify/find_related dominate
//! add_item/build_index in a typical workload).
//!
//! `add_item_with_fetch` calls the caller-supplied `fetch_body` *before*
//! acquiring the write lock, so a slow or blocking fetch never holds up
//! concurrent reads.

use crate::error::Result;
use crate::index::{LsiIndex, Query, SpectrumEntry};
use crate::token::Token;
use crate::tokenize::Tokenizer;
use parking_lot::RwLock;
use std::hash::Hash;
use std::sync::Arc;

/// A clonable, thread-safe handle to an `LsiIndex`. Cloning shares the same
/// underlying index (via `Arc`); it does not copy it.
pub struct SharedIndex<K>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
{
    inner: Arc<RwLock<LsiIndex<K>>>,
}

impl<K> SharedIndex<K>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
{
    pub fn new(index: LsiIndex<K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn add_item(&self, item: K, text: &str, categories: Vec<String>, tokenizer: &dyn Tokenizer) {
        self.inner.write().add_item(item, text, categories, tokenizer);
    }

    /// `fetch_body` runs with no lock held, so a slow body fetch never
    /// blocks concurrent reads of the index.
    pub fn add_item_with_fetch<F>(
        &self,
        item: K,
        categories: Vec<String>,
        tokenizer: &dyn Tokenizer,
        fetch_body: F,
    ) where
        F: FnOnce(&K) -> String,
    {
        let text = fetch_body(&item);
        self.inner.write().add_item(item, &text, categories, tokenizer);
    }

    pub fn remove_item(&self, item: &K) -> bool {
        self.inner.write().remove_item(item)
    }

    pub fn build_index(&self, cutoff: f64) -> Result<()> {
        self.inner.write().build_index(cutoff)
    }

    pub fn needs_rebuild(&self) -> bool {
        self.inner.read().needs_rebuild()
    }

    pub fn items(&self) -> Vec<K> {
        self.inner.read().items()
    }

    /// Apply `f` to an item's live category list under the write lock.
    /// Mirrors `LsiIndex::categories_for`'s "does not bump version"
    /// contract - this still takes the write lock (categories are shared
    /// mutable state) but never forces a rebuild.
    pub fn categories_for<R>(&self, item: &K, f: impl FnOnce(&mut Vec<String>) -> R) -> Option<R> {
        self.inner.write().categories_for(item).map(f)
    }

    pub fn search(&self, query: &str, max_nearest: usize, tokenizer: &dyn Tokenizer) -> Vec<(K, f64)> {
        self.inner.read().search(query, max_nearest, tokenizer)
    }

    pub fn find_related(&self, doc: Query<K>, max_nearest: usize, tokenizer: &dyn Tokenizer) -> Vec<(K, f64)> {
        self.inner.read().find_related(doc, max_nearest, tokenizer)
    }

    pub fn classify(&self, doc: Query<K>, cutoff: f64, tokenizer: &dyn Tokenizer) -> Result<Option<String>> {
        self.inner.read().classify(doc, cutoff, tokenizer)
    }

    pub fn classify_with_confidence(
        &self,
        doc: Query<K>,
        cutoff: f64,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Option<(String, f64)>> {
        self.inner.read().classify_with_confidence(doc, cutoff, tokenizer)
    }

    pub fn highest_relative_content(&self, max_chunks: usize) -> Vec<(K, f64)> {
        self.inner.read().highest_relative_content(max_chunks)
    }

    pub fn highest_ranked_stems(&self, item: &K, count: usize) -> Result<Vec<Token>> {
        self.inner.read().highest_ranked_stems(item, count)
    }

    pub fn singular_value_spectrum(&self) -> Option<Vec<SpectrumEntry>> {
        self.inner.read().singular_value_spectrum()
    }
}

impl<K> Clone for SharedIndex<K>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
