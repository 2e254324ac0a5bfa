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

//! # Haiku Schemas
//!
//! A schema is the fixed template a variant's words are poured into: an
//! ordered list of literal slots (words, punctuation, line breaks) and word
//! placeholders. Rendering fills placeholders in order, then applies the
//! spacing and capitalization rules:
//!
//! - a single space goes before every slot except the first, a line break,
//!   a period, or a slot directly after a line break
//! - the first slot is capitalized, as is the slot two positions after each
//!   period (the word that starts the next line)

use crate::error::{HaikuError, HaikuResult};
use crate::variant::AddressVariant;
use std::borrow::Cow;

const NEWLINE: &str = "\n";
const PERIOD: &str = ".";
const SPACE: &str = " ";

/// One position in a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Emitted as-is
    Literal(&'static str),
    /// Filled with the next encoded word
    Word,
}

use Slot::{Literal, Word};

/// The template for one variant
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    variant: AddressVariant,
    slots: &'static [Slot],
}

static IPV4_SCHEMA: Schema = Schema {
    variant: AddressVariant::V4,
    slots: &[
        Literal("The"),
        Word,
        Word,
        Word,
        Literal(NEWLINE),
        Word,
        Literal("in the"),
        Word,
        Word,
        Literal(PERIOD),
        Literal(NEWLINE),
        Word,
        Word,
        Literal(PERIOD),
    ],
};

static IPV6_SCHEMA: Schema = Schema {
    variant: AddressVariant::V6,
    slots: &[
        Word,
        Word,
        Literal("and"),
        Word,
        Word,
        Literal(NEWLINE),
        Word,
        Word,
        Word,
        Word,
        Word,
        Word,
        Word,
        Literal(PERIOD),
        Literal(NEWLINE),
        Word,
        Word,
        Word,
        Word,
        Word,
        Literal(PERIOD),
    ],
};

impl Schema {
    pub fn for_variant(variant: AddressVariant) -> &'static Schema {
        match variant {
            AddressVariant::V4 => &IPV4_SCHEMA,
            AddressVariant::V6 => &IPV6_SCHEMA,
        }
    }

    pub fn variant(&self) -> AddressVariant {
        self.variant
    }

    pub fn slots(&self) -> &'static [Slot] {
        self.slots
    }

    /// Number of word placeholders
    pub fn word_slots(&self) -> usize {
        self.slots.iter().filter(|s| **s == Word).count()
    }

    /// Render words into haiku text
    ///
    /// `words` must supply exactly one word per placeholder.
    pub fn render(&self, words: &[&str]) -> HaikuResult<String> {
        let expected = self.word_slots();
        if words.len() != expected {
            return Err(HaikuError::internal(format!(
                "{} schema has {} word slots, got {} words",
                self.variant,
                expected,
                words.len()
            )));
        }

        let mut words = words.iter();
        let filled: Vec<&str> = self
            .slots
            .iter()
            .map(|slot| match slot {
                Literal(text) => *text,
                // Counts were checked above
                Word => words.next().copied().unwrap_or_default(),
            })
            .collect();

        let mut pieces: Vec<Cow<'_, str>> = Vec::with_capacity(filled.len() * 2);
        for (i, piece) in filled.iter().enumerate() {
            let breaks_line = matches!(*piece, NEWLINE | PERIOD | SPACE);
            if i > 0 && !breaks_line && filled[i - 1] != NEWLINE {
                pieces.push(Cow::Borrowed(SPACE));
            }
            pieces.push(Cow::Borrowed(*piece));
        }

        capitalize_sentences(&mut pieces);
        Ok(pieces.concat())
    }
}

fn capitalize_sentences(pieces: &mut [Cow<'_, str>]) {
    if let Some(first) = pieces.first_mut() {
        *first = Cow::Owned(capitalize(first.as_ref()));
    }
    for i in 1..pieces.len() {
        if pieces[i] == PERIOD && i + 2 < pieces.len() {
            pieces[i + 2] = Cow::Owned(capitalize(&pieces[i + 2]));
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render words with the schema for `variant`
pub fn render(variant: AddressVariant, words: &[&str]) -> HaikuResult<String> {
    Schema::for_variant(variant).render(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_slots_match_factor_count() {
        for variant in [AddressVariant::V4, AddressVariant::V6] {
            assert_eq!(
                Schema::for_variant(variant).word_slots(),
                variant.factor_count()
            );
        }
    }

    #[test]
    fn test_render_ipv4_scenario() {
        let words = [
            "silent",
            "beige",
            "owl",
            "jumps",
            "ancient",
            "clearing",
            "autumn colors",
            "crunch",
        ];
        let text = render(AddressVariant::V4, &words).unwrap();
        assert_eq!(
            text,
            "The silent beige owl\njumps in the ancient clearing.\nAutumn colors crunch."
        );
    }

    #[test]
    fn test_render_ipv6_capitalization() {
        let words = [
            "chilled", "apes", "blunt", "seas", "aid", "ace", "ace", "ace", "ace", "ace", "ants",
            "ace", "ants", "aid", "ace", "apes",
        ];
        let text = render(AddressVariant::V6, &words).unwrap();
        assert_eq!(
            text,
            "Chilled apes and blunt seas\naid ace ace ace ace ace ants.\nAce ants aid ace apes."
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let words = ["a"; 16];
        let first = render(AddressVariant::V6, &words).unwrap();
        let second = render(AddressVariant::V6, &words).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_wrong_word_count() {
        let err = render(AddressVariant::V4, &["only", "three", "words"]).unwrap_err();
        assert!(matches!(err, HaikuError::Internal(_)));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("autumn colors"), "Autumn colors");
        assert_eq!(capitalize("wind-swept"), "Wind-swept");
        assert_eq!(capitalize(""), "");
    }
}
