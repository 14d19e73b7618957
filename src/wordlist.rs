// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! The stable injective mapping from tokens to dense dimension indices.
//!
//! # Invariant
//!
//! Once a token has an index in a given `WordList`, that index never changes
//! for the lifetime of the instance - `add` is idempotent, and insertion
//! order monotonically assigns the next free index. A rebuild (§4.5,
//! `build_index`) always constructs a brand new `WordList`; any vectors
//! computed against the old one are stale and must be recomputed, never
//! reinterpreted against the new mapping.

use crate::token::Token;
use std::collections::HashMap;

/// An ordered injective mapping from `Token` to a dense index in `[0, N)`.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    index_of: HashMap<Token, usize>,
    token_at: Vec<Token>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the existing index for `token` if present, otherwise assign
    /// and return the next index. Idempotent.
    pub fn add(&mut self, token: Token) -> usize {
        if let Some(&i) = self.index_of.get(&token) {
            return i;
        }
        let i = self.token_at.len();
        self.token_at.push(token.clone());
        self.index_of.insert(token, i);
        i
    }

    /// `O(1)` average lookup.
    pub fn index_of(&self, token: &Token) -> Option<usize> {
        self.index_of.get(token).copied()
    }

    /// `O(n)` reverse scan; only used for diagnostics, never on a hot path.
    pub fn token_for(&self, index: usize) -> Option<&Token> {
        self.token_at.get(index)
    }

    pub fn size(&self) -> usize {
        self.token_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_at.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.token_at.iter()
    }
}
