// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-document state and the term-frequency-to-vector transform.
//!
//! # The term-weight transform
//!
//! Given a token multiset and a `WordList`, `raw_vector_for` builds a dense
//! vector whose `i`-th component is the raw count of the token at dimension
//! `i` (zero for tokens not in the document). For non-trivial documents
//! (total mass `> 1` and more than one distinct token) it then applies a
//! first-order, log-entropy-like reweighting:
//!
//! ```text
//! H = sum_{v[i] > 0} (v[i]/T) * log(v[i]/T)          (H <= 0)
//! D = sign(H) * max(|H|, EPSILON)
//! v[i] <- log(v[i] + 1) / D
//! ```
//!
//! `H` is non-positive by construction (it's a sum of `p * log(p)` terms for
//! probabilities `p` in `(0, 1]`), so `D` is negative and dividing by it
//! flips the sign back to positive. This is a legacy artifact from the
//! system this crate's behavior is ported from, not a textbook TF-IDF
//! formula - ported exactly because test fixtures are calibrated against it.
//! A reimplementer swapping in standard TF-IDF would get numerically
//! different (if qualitatively similar) document vectors.

use crate::linalg::vector::{Vector, EPSILON};
use crate::token::Token;
use crate::wordlist::WordList;
use std::collections::HashMap;

/// A token -> occurrence-count multiset, as produced by tokenization.
pub type TokenMultiset = HashMap<Token, usize>;

/// Compute the raw term-weight vector for `tokens` against `wordlist`.
///
/// Tokens not present in `wordlist` are silently ignored (this happens for
/// query-time documents built against a stale `WordList`, or when a
/// document is scored against a word list it didn't contribute to).
pub fn raw_vector_for(tokens: &TokenMultiset, wordlist: &WordList) -> Vector {
    let mut v = Vector::zeros(wordlist.size());
    for (token, &count) in tokens {
        if let Some(i) = wordlist.index_of(token) {
            v.set(i, count as f64);
        }
    }
    reweight(v)
}

fn reweight(mut v: Vector) -> Vector {
    let total: f64 = v.iter().sum();
    let distinct = v.iter().filter(|x| **x > 0.0).count();

    if total <= 1.0 || distinct <= 1 {
        return v;
    }

    let h: f64 = v
        .iter()
        .filter(|x| **x > 0.0)
        .map(|x| {
            let p = x / total;
            p * p.ln()
        })
        .sum();
    let divisor = h.signum() * h.abs().max(EPSILON);

    for i in 0..v.len() {
        let x = v.get(i).unwrap_or(0.0);
        if x > 0.0 {
            v.set(i, (x + 1.0).ln() / divisor);
        }
    }
    v
}

/// Per-document state: the token multiset plus every vector derived from it.
#[derive(Debug, Clone)]
pub struct ContentNode {
    tokens: TokenMultiset,
    categories: Vec<String>,
    raw_vector: Option<Vector>,
    raw_norm: Option<Vector>,
    lsi_vector: Option<Vector>,
    lsi_norm: Option<Vector>,
}

impl ContentNode {
    pub fn new(tokens: TokenMultiset) -> Self {
        Self {
            tokens,
            categories: Vec::new(),
            raw_vector: None,
            raw_norm: None,
            lsi_vector: None,
            lsi_norm: None,
        }
    }

    pub fn tokens(&self) -> &TokenMultiset {
        &self.tokens
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Live, mutable access to this document's categories. Mutating the
    /// returned list does not bump the owning index's `version`: categories
    /// are metadata, not inputs to the term-document matrix.
    pub fn categories_mut(&mut self) -> &mut Vec<String> {
        &mut self.categories
    }

    /// Recompute `raw_vector`/`raw_norm` against a (possibly new) word list.
    /// Called by `build_index` for every document on every rebuild.
    pub fn recompute_raw(&mut self, wordlist: &WordList) {
        let raw = raw_vector_for(&self.tokens, wordlist);
        self.raw_norm = Some(raw.normalize());
        self.raw_vector = Some(raw);
    }

    pub fn raw_vector(&self) -> Option<&Vector> {
        self.raw_vector.as_ref()
    }

    pub fn raw_norm(&self) -> Option<&Vector> {
        self.raw_norm.as_ref()
    }

    pub fn lsi_vector(&self) -> Option<&Vector> {
        self.lsi_vector.as_ref()
    }

    pub fn lsi_norm(&self) -> Option<&Vector> {
        self.lsi_norm.as_ref()
    }

    /// Install a freshly-projected LSI vector (and its normalized form),
    /// as the last step of a successful `build_index`.
    pub fn set_lsi_vector(&mut self, v: Vector) {
        self.lsi_norm = Some(v.normalize());
        self.lsi_vector = Some(v);
    }

    /// Drop the LSI projection, e.g. when a rebuild is starting and the old
    /// projection would otherwise look valid but stale.
    pub fn clear_lsi(&mut self) {
        self.lsi_vector = None;
        self.lsi_norm = None;
    }

    /// The best vector available: the LSI projection if the document has
    /// been through a successful build, otherwise the raw term vector. This
    /// is the polymorphism that lets search/classify/find_related treat an
    /// indexed document and a fresh, unindexed query the same way.
    pub fn search_vector(&self) -> Option<&Vector> {
        self.lsi_vector.as_ref().or(self.raw_vector.as_ref())
    }

    /// Normalized counterpart of `search_vector`.
    pub fn search_norm(&self) -> Option<&Vector> {
        self.lsi_norm.as_ref().or(self.raw_norm.as_ref())
    }
}
