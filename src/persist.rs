// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! JSON persistence of an `LsiIndex`'s *source* state.
//!
//! Only the inputs to the term-document matrix are serialized - each item's
//! token multiset and categories. Every derived vector (`raw_vector`,
//! `lsi_vector`, and their normalized forms) is recomputed by `load` calling
//! `build_index` once, rather than round-tripped: they're a pure function of
//! the source state plus the Jacobi SVD, and shipping them would just be
//! redundant bytes that could drift out of sync with a future rebuild.
//!
//! ```json
//! { "version": 1,
//!   "type": "lsi",
//!   "auto_rebuild": false,
//!   "items": {
//!     "<item-key>": {
//!       "word_hash": { "<stem>": <count>, ... },
//!       "categories": [ "<string>", ... ]
//!     }
//!   }
//! }
//! ```

use crate::error::{Error, Result};
use crate::index::{LsiIndex, DEFAULT_BUILD_CUTOFF};
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::Hash;
use std::str::FromStr;

/// The `version` field this crate writes and accepts.
pub const PERSIST_VERSION: u32 = 1;
/// The `type` tag identifying an LSI payload.
pub const PERSIST_TYPE: &str = "lsi";

#[derive(Debug, Serialize, Deserialize)]
struct PersistedItem {
    word_hash: BTreeMap<String, usize>,
    categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedIndex {
    version: u32,
    #[serde(rename = "type")]
    kind: String,
    auto_rebuild: bool,
    items: BTreeMap<String, PersistedItem>,
}

/// Serialize `index`'s source state to a JSON string. `K` must round-trip
/// through `ToString`/`FromStr` since JSON object keys are strings.
pub fn save<K>(index: &LsiIndex<K>) -> Result<String>
where
    K: Clone + Eq + Hash + Send + Sync + 'static + ToString,
{
    let mut items = BTreeMap::new();
    for key in index.items() {
        let tokens = index
            .tokens_of(&key)
            .expect("key came from items(), so it has a ContentNode");
        let categories = index
            .categories_of(&key)
            .expect("key came from items(), so it has a ContentNode");
        let word_hash = tokens
            .iter()
            .map(|(token, count)| (token.as_str().to_string(), *count))
            .collect();
        items.insert(
            key.to_string(),
            PersistedItem {
                word_hash,
                categories: categories.to_vec(),
            },
        );
    }

    let payload = PersistedIndex {
        version: PERSIST_VERSION,
        kind: PERSIST_TYPE.to_string(),
        auto_rebuild: index.auto_rebuild(),
        items,
    };
    serde_json::to_string_pretty(&payload)
        .map_err(|e| Error::InvalidPayload { reason: e.to_string() })
}

/// Deserialize a JSON payload produced by `save` and rebuild the index.
/// Rejects any payload whose `type` isn't `"lsi"`. After every item is
/// restored, runs `build_index` once with `DEFAULT_BUILD_CUTOFF` regardless
/// of `auto_rebuild` - derived vectors are never stored, so the reloaded
/// index always needs at least one build before reads are meaningful.
pub fn load<K>(json: &str) -> Result<LsiIndex<K>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static + FromStr,
{
    let payload: PersistedIndex =
        serde_json::from_str(json).map_err(|e| Error::InvalidPayload { reason: e.to_string() })?;

    if payload.kind != PERSIST_TYPE {
        return Err(Error::InvalidPayload {
            reason: format!("unexpected type {:?}, expected \"{PERSIST_TYPE}\"", payload.kind),
        });
    }

    let mut index = LsiIndex::new(payload.auto_rebuild);
    for (key_str, item) in payload.items {
        let key = K::from_str(&key_str).map_err(|_| Error::InvalidPayload {
            reason: format!("item key {key_str:?} does not parse into the target key type"),
        })?;
        let tokens = item
            .word_hash
            .into_iter()
            .map(|(stem, count)| (Token::from(stem), count))
            .collect();
        index.add_item_tokens(key, tokens, item.categories);
    }
    index.build_index(DEFAULT_BUILD_CUTOFF)?;
    Ok(index)
}
