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

//! # Lexicon
//!
//! A lexicon is a set of named word tables plus one [`Key`] per address
//! variant. A key is the ordered list of tables used for each factor
//! position; encode looks a factor up in the table at its position and
//! decode recovers the factor by finding the entry again.
//!
//! Lexicons are validated once, when they are built:
//!
//! - every entry is lowercase ASCII letters and hyphens, with words joined by
//!   single spaces, and entries are unique within their table
//! - every key has one table per factor and per schema word slot
//! - every table a key references holds at least `divisor` entries, so any
//!   factor value is addressable
//!
//! The built-in lexicon is constructed lazily on first use and shared
//! read-only for the life of the process.

mod file;
pub mod words;

pub use file::{KeyFile, LexiconFile, TableFile};

use crate::error::{HaikuError, HaikuResult, LexiconError};
use crate::schema::Schema;
use crate::variant::AddressVariant;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

/// Names of the built-in tables referenced by the IPv4 key, in key order
pub const IPV4_KEY: [&str; 8] = [
    "animal_adjectives",
    "animal_colors",
    "animal_nouns",
    "animal_verbs",
    "nature_adjectives",
    "nature_nouns",
    "plant_nouns",
    "plant_verbs",
];

/// Names of the built-in tables referenced by the IPv6 key, in key order
pub const IPV6_KEY: [&str; 16] = [
    "adjectives",
    "nouns",
    "adjectives",
    "nouns",
    "verbs",
    "adjectives",
    "adjectives",
    "adjectives",
    "adjectives",
    "adjectives",
    "nouns",
    "adjectives",
    "nouns",
    "verbs",
    "adjectives",
    "nouns",
];

static ENTRY_PATTERN: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[a-z-]+( [a-z-]+)*$"));

static BUILTIN: Lazy<Result<Arc<Lexicon>, LexiconError>> =
    Lazy::new(|| Lexicon::from_static().map(Arc::new));

/// One table entry: a word or a fixed space-joined phrase
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    text: Cow<'static, str>,
    word_count: usize,
}

impl Entry {
    fn new(text: Cow<'static, str>) -> Self {
        let word_count = text.split(' ').count();
        Self { text, word_count }
    }

    /// Whether `window` spells out this entry, one token per word
    fn matches<S: AsRef<str>>(&self, window: &[S]) -> bool {
        window.len() == self.word_count
            && self
                .text
                .split(' ')
                .zip(window)
                .all(|(word, token)| word.eq_ignore_ascii_case(token.as_ref()))
    }
}

/// An ordered, index-addressable list of words or phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconTable {
    name: Cow<'static, str>,
    entries: Vec<Entry>,
}

impl LexiconTable {
    /// Build a table, validating entry shape and uniqueness
    pub fn new<N, I, E>(name: N, entries: I) -> Result<Self, LexiconError>
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = E>,
        E: Into<Cow<'static, str>>,
    {
        let name = name.into();
        let pattern = ENTRY_PATTERN
            .as_ref()
            .map_err(|e| LexiconError::ParseError(e.to_string().into()))?;

        let mut seen = HashSet::new();
        let mut validated = Vec::new();
        for entry in entries {
            let text = entry.into();
            if !pattern.is_match(&text) {
                return Err(LexiconError::InvalidEntry {
                    table: name.clone(),
                    entry: text.into_owned(),
                });
            }
            if !seen.insert(text.clone()) {
                return Err(LexiconError::DuplicateEntry {
                    table: name.clone(),
                    entry: text.into_owned(),
                });
            }
            validated.push(Entry::new(text));
        }

        Ok(Self {
            name,
            entries: validated,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry text at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.text.as_ref())
    }

    /// Iterate entries in table order
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_ref())
    }

    /// Case-insensitive membership test for a single token
    pub fn contains_token(&self, token: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.text.eq_ignore_ascii_case(token))
    }

    /// Find the first entry, in table order, spelled out by the tokens
    /// starting at `cursor`
    ///
    /// Returns the entry index and the number of tokens it spans. Entries
    /// longer than the remaining tokens are skipped.
    pub fn match_at<S: AsRef<str>>(&self, tokens: &[S], cursor: usize) -> Option<(usize, usize)> {
        self.entries.iter().enumerate().find_map(|(index, entry)| {
            let end = cursor.checked_add(entry.word_count)?;
            let window = tokens.get(cursor..end)?;
            entry.matches(window).then_some((index, entry.word_count))
        })
    }
}

/// The ordered table sequence for one variant, one table per factor position
#[derive(Debug, Clone)]
pub struct Key<'a> {
    variant: AddressVariant,
    tables: Vec<&'a LexiconTable>,
}

impl<'a> Key<'a> {
    pub fn variant(&self) -> AddressVariant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn tables(&self) -> &[&'a LexiconTable] {
        &self.tables
    }

    /// Map each factor to the word at its position
    ///
    /// An out-of-range factor means the lexicon and the factoring disagree,
    /// which validation rules out; it is reported as an internal error.
    pub fn words_for(&self, factors: &[u8]) -> HaikuResult<Vec<&'a str>> {
        if factors.len() != self.tables.len() {
            return Err(HaikuError::internal(format!(
                "{} factors for a {}-table {} key",
                factors.len(),
                self.tables.len(),
                self.variant
            )));
        }

        self.tables
            .iter()
            .copied()
            .zip(factors)
            .map(|(table, &factor)| {
                table.get(usize::from(factor)).ok_or_else(|| {
                    HaikuError::internal(format!(
                        "factor {} out of bounds for table {} ({} entries)",
                        factor,
                        table.name(),
                        table.len()
                    ))
                })
            })
            .collect()
    }
}

/// Named word tables plus the IPv4 and IPv6 keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    tables: Vec<LexiconTable>,
    ipv4_key: Vec<usize>,
    ipv6_key: Vec<usize>,
}

impl Lexicon {
    /// Assemble and validate a lexicon
    pub fn new<S: AsRef<str>>(
        tables: Vec<LexiconTable>,
        ipv4_key: &[S],
        ipv6_key: &[S],
    ) -> Result<Self, LexiconError> {
        let mut names = HashSet::new();
        for table in &tables {
            if !names.insert(table.name()) {
                return Err(LexiconError::DuplicateTable(table.name().to_string().into()));
            }
        }

        let ipv4_key = resolve_key(&tables, ipv4_key, AddressVariant::V4)?;
        let ipv6_key = resolve_key(&tables, ipv6_key, AddressVariant::V6)?;

        Ok(Self {
            tables,
            ipv4_key,
            ipv6_key,
        })
    }

    /// The shared built-in lexicon
    pub fn builtin() -> Result<Arc<Lexicon>, LexiconError> {
        BUILTIN.as_ref().map(Arc::clone).map_err(|e| e.clone())
    }

    fn from_static() -> Result<Self, LexiconError> {
        let tables = vec![
            LexiconTable::new("animal_adjectives", words::ANIMAL_ADJECTIVES)?,
            LexiconTable::new("animal_colors", words::ANIMAL_COLORS)?,
            LexiconTable::new("animal_nouns", words::ANIMAL_NOUNS)?,
            LexiconTable::new("animal_verbs", words::ANIMAL_VERBS)?,
            LexiconTable::new("nature_adjectives", words::NATURE_ADJECTIVES)?,
            LexiconTable::new("nature_nouns", words::NATURE_NOUNS)?,
            LexiconTable::new("plant_nouns", words::PLANT_NOUNS)?,
            LexiconTable::new("plant_verbs", words::PLANT_VERBS)?,
            LexiconTable::new("adjectives", words::ADJECTIVES)?,
            LexiconTable::new("nouns", words::NOUNS)?,
            LexiconTable::new("verbs", words::VERBS)?,
        ];
        Self::new(tables, &IPV4_KEY, &IPV6_KEY)
    }

    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&LexiconTable> {
        self.tables.iter().find(|t| t.name() == name)
    }

    pub fn tables(&self) -> &[LexiconTable] {
        &self.tables
    }

    /// The key for a variant
    pub fn key(&self, variant: AddressVariant) -> Key<'_> {
        let indices = match variant {
            AddressVariant::V4 => &self.ipv4_key,
            AddressVariant::V6 => &self.ipv6_key,
        };
        Key {
            variant,
            tables: indices.iter().map(|&i| &self.tables[i]).collect(),
        }
    }
}

fn resolve_key<S: AsRef<str>>(
    tables: &[LexiconTable],
    names: &[S],
    variant: AddressVariant,
) -> Result<Vec<usize>, LexiconError> {
    let expected = variant.factor_count();
    if names.len() != expected {
        return Err(LexiconError::KeyLength {
            variant,
            expected,
            actual: names.len(),
        });
    }

    let slots = Schema::for_variant(variant).word_slots();
    if slots != names.len() {
        return Err(LexiconError::SchemaMismatch {
            variant,
            slots,
            key_len: names.len(),
        });
    }

    let required = variant.divisor() as usize;
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let index = tables
                .iter()
                .position(|t| t.name() == name)
                .ok_or_else(|| LexiconError::UnknownTable {
                    variant,
                    name: name.to_string().into(),
                })?;
            let table = &tables[index];
            if table.len() < required {
                return Err(LexiconError::TableTooSmall {
                    table: name.to_string().into(),
                    variant,
                    len: table.len(),
                    required,
                });
            }
            Ok(index)
        })
        .collect()
}
