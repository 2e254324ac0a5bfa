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

//! Haiku text tokenizer.
//!
//! Strips rendering noise so the resolver sees a flat, lowercase word list:
//! newlines become spaces, everything that is not `a-z`, a space or a hyphen
//! is dropped, and the rest is split on spaces. Hyphens survive so entries
//! like `wind-swept` stay one token.

use crate::error::{HaikuError, HaikuResult};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"[^a-z -]"));

/// Lowercase, punctuation-free tokens in text order
pub type TokenStream = Vec<String>;

/// Split haiku text into tokens
pub fn tokenize(text: &str) -> HaikuResult<TokenStream> {
    let pattern = NON_WORD
        .as_ref()
        .map_err(|e| HaikuError::internal(format!("tokenizer pattern: {e}")))?;

    let lowered = text.to_lowercase().replace('\n', " ");
    let cleaned = pattern.replace_all(&lowered, "");

    Ok(cleaned
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect())
}
