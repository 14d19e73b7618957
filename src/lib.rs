// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! Latent Semantic Indexing: a from-scratch dense linear-algebra kernel, a
//! one-sided Jacobi SVD, and the term-document machinery that turns a pile
//! of tagged text into a searchable, classifiable, reduced-rank index.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌──────────────┐
//! │  linalg::     │────▶│  linalg::svd │
//! │  vector/matrix│     │  (Jacobi)    │
//! └───────────────┘     └──────┬───────┘
//!         │                    │
//!         ▼                    ▼
//! ┌───────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   wordlist    │────▶│   content    │────▶│    index    │
//! │ (token→dim)   │     │ (ContentNode)│     │  (LsiIndex) │
//! └───────────────┘     └──────────────┘     └──────┬──────┘
//!                                                    │
//!                              ┌─────────────────────┼─────────────────┐
//!                              ▼                      ▼                 ▼
//!                        incremental             persist              sync
//!                     (Brand rank-1 update)   (JSON save/load)  (SharedIndex)
//! ```
//!
//! `tokenize` sits outside this chain: it's the pluggable `text -> tokens`
//! seam every other module consumes through the `Tokenizer` trait.
//!
//! # Usage
//!
//! ```
//! use noema::{DefaultTokenizer, LsiIndex, Query};
//!
//! let mut index: LsiIndex<&str> = LsiIndex::new(false);
//! index.add_item("doc1", "dogs bark at the mail carrier", vec!["Dog".into()], &DefaultTokenizer);
//! index.add_item("doc2", "cats nap on the windowsill", vec!["Cat".into()], &DefaultTokenizer);
//! index.build_index(0.5).unwrap();
//!
//! let winner = index.classify(Query::text("a dog barked"), 0.5, &DefaultTokenizer).unwrap();
//! assert_eq!(winner, Some("Dog".to_string()));
//! ```

pub mod content;
pub mod error;
pub mod incremental;
pub mod index;
pub mod linalg;
pub mod persist;
#[cfg(feature = "parallel")]
pub mod sync;
pub mod testing;
pub mod token;
pub mod tokenize;
pub mod wordlist;

pub use content::{raw_vector_for, ContentNode, TokenMultiset};
pub use error::{Error, Result};
pub use incremental::{ThinSvdState, DEFAULT_VOCAB_GROWTH_THRESHOLD};
pub use index::{
    LsiIndex, Query, SpectrumEntry, DEFAULT_BUILD_CUTOFF, DEFAULT_CLASSIFY_CUTOFF,
    DEFAULT_MAX_NEAREST,
};
pub use linalg::{jacobi_svd, reconstruct, JacobiConfig, Matrix, SvdResult, Vector, EPSILON};
pub use persist::{load, save, PERSIST_TYPE, PERSIST_VERSION};
#[cfg(feature = "parallel")]
pub use sync::SharedIndex;
pub use token::Token;
pub use tokenize::{DefaultTokenizer, Tokenizer};
pub use wordlist::WordList;
