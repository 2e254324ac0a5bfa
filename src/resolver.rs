// Copyright 2024 Saorsa Labs Limited
//
// This software is dual-licensed under:
// - GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later)
// - Commercial License
//
// For AGPL-3.0 license, see LICENSE-AGPL-3.0
// For commercial licensing, contact: saorsalabs@gmail.com
//
// Unless required by applicable law or agreed to in writing, software
// distributed under these licenses is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.

//! # Lexicon Resolver
//!
//! Aligns a token stream against a key to recover one factor per table.
//!
//! The scan is forward-only and greedy. A shared cursor walks the tokens;
//! for each table in key order the entries are tried at the cursor in table
//! order, and the first entry whose words match consumes those tokens.
//! When nothing matches, the token under the cursor is treated as filler
//! ("and", "in the", a stray word) and the same table is retried one token
//! later. Resolved tables are never revisited, so a missing or misordered
//! word fails the whole decode.
//!
//! Variant detection is a heuristic: a stream is IPv4 if any token appears
//! in the first IPv4 table, otherwise IPv6. Text that mixes vocabularies
//! can be misclassified; this is accepted behavior, not validated here.

use crate::error::DecodeError;
use crate::lexicon::{Key, Lexicon};
use crate::variant::AddressVariant;
use tracing::trace;

/// Guess the variant a token stream was encoded with
pub fn detect_variant<S: AsRef<str>>(tokens: &[S], lexicon: &Lexicon) -> AddressVariant {
    let key = lexicon.key(AddressVariant::V4);
    let Some(first) = key.tables().first() else {
        return AddressVariant::V6;
    };

    if tokens.iter().any(|t| first.contains_token(t.as_ref())) {
        AddressVariant::V4
    } else {
        AddressVariant::V6
    }
}

/// Recover one factor per key table from the token stream
pub fn resolve<S: AsRef<str>>(tokens: &[S], key: &Key<'_>) -> Result<Vec<usize>, DecodeError> {
    let mut factors = Vec::with_capacity(key.len());
    let mut cursor = 0;

    for (position, table) in key.tables().iter().enumerate() {
        loop {
            if cursor >= tokens.len() {
                return Err(DecodeError::MissingWord {
                    table: table.name().to_string().into(),
                    position,
                });
            }

            if let Some((index, width)) = table.match_at(tokens, cursor) {
                factors.push(index);
                cursor += width;
                break;
            }

            trace!(
                token = tokens[cursor].as_ref(),
                table = table.name(),
                "skipping filler token"
            );
            cursor += 1;
        }
    }

    Ok(factors)
}
