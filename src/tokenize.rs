// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! The tokenization seam.
//!
//! The distilled spec this crate implements treats `tokenize(text) -> multiset
//! of stem tokens` as an external pure function - stemming and language-aware
//! splitting are peripheral concerns, not core LSI engineering. `noema` ships
//! a conservative default (Unicode word splitting, ASCII lowercasing, no
//! stemming at all) behind the `Tokenizer` trait so a caller can plug in a
//! real stemmer (Porter, Snowball, whatever fits their corpus) without
//! touching `LsiIndex`.

use crate::content::TokenMultiset;
use crate::token::Token;

/// `text -> multiset of stem tokens`.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> TokenMultiset;
}

/// Splits on non-alphanumeric boundaries and lowercases ASCII letters. No
/// stemming: "dogs" and "dog" are distinct tokens under this tokenizer. Good
/// enough to exercise the LSI engine; a production caller will usually want
/// to supply their own `Tokenizer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    fn tokenize(&self, text: &str) -> TokenMultiset {
        let mut counts = TokenMultiset::new();
        for word in text.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            let lower = word.to_lowercase();
            *counts.entry(Token::from(lower)).or_insert(0) += 1;
        }
        counts
    }
}
