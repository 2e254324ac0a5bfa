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

//! Error handling for the haiku codec
//!
//! Every fallible operation returns [`HaikuResult`]. Errors are grouped by
//! concern so callers can tell malformed user input ([`FormatError`],
//! [`DecodeError`]) apart from a broken lexicon or configuration.
//!
//! ```rust
//! use saorsa_haiku::{HaikuError, error::FormatError};
//!
//! match saorsa_haiku::encode("10.0.0") {
//!     Err(HaikuError::Format(FormatError::GroupCount { actual, .. })) => assert_eq!(actual, 3),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use crate::variant::AddressVariant;
use std::borrow::Cow;
use thiserror::Error;

/// Core error type for the haiku codec
#[derive(Debug, Error)]
pub enum HaikuError {
    // Malformed address on encode
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    // Haiku text that cannot be aligned on decode
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    // Lexicon failed load-time validation
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Broken invariant inside the codec
    #[error("Internal error: {0}")]
    Internal(Cow<'static, str>),
}

/// Address input errors raised while encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("address contains no recognized separator")]
    NoSeparator,

    #[error("{variant} address has {actual} groups, expected {expected}")]
    GroupCount {
        variant: AddressVariant,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {variant} group {group:?}: {reason}")]
    InvalidGroup {
        variant: AddressVariant,
        group: String,
        reason: Cow<'static, str>,
    },
}

/// Haiku text errors raised while decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("dictionary word missing from input (table {table} at key position {position})")]
    MissingWord {
        table: Cow<'static, str>,
        position: usize,
    },

    #[error("factor {factor} is outside divisor {divisor}")]
    FactorOutOfRange { factor: usize, divisor: u32 },

    #[error("input of {len} bytes exceeds limit of {max} bytes")]
    InputTooLarge { len: usize, max: usize },
}

/// Lexicon validation errors, raised when a lexicon is loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("unknown table referenced by {variant} key: {name}")]
    UnknownTable {
        variant: AddressVariant,
        name: Cow<'static, str>,
    },

    #[error("{variant} key has {actual} tables, expected {expected}")]
    KeyLength {
        variant: AddressVariant,
        expected: usize,
        actual: usize,
    },

    #[error("table {table} has {len} entries but {variant} needs at least {required}")]
    TableTooSmall {
        table: Cow<'static, str>,
        variant: AddressVariant,
        len: usize,
        required: usize,
    },

    #[error("table {table} contains duplicate entry {entry:?}")]
    DuplicateEntry {
        table: Cow<'static, str>,
        entry: String,
    },

    #[error("table {table} contains malformed entry {entry:?}")]
    InvalidEntry {
        table: Cow<'static, str>,
        entry: String,
    },

    #[error("duplicate table name: {0}")]
    DuplicateTable(Cow<'static, str>),

    #[error("{variant} schema has {slots} word slots but key has {key_len} tables")]
    SchemaMismatch {
        variant: AddressVariant,
        slots: usize,
        key_len: usize,
    },

    #[error("Parse error: {0}")]
    ParseError(Cow<'static, str>),

    #[error("IO error for {path}: {reason}")]
    Io {
        path: Cow<'static, str>,
        reason: Cow<'static, str>,
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        field: Cow<'static, str>,
        reason: Cow<'static, str>,
    },

    #[error("Parse error: {0}")]
    ParseError(Cow<'static, str>),

    #[error("IO error for {path}: {source}")]
    IoError {
        path: Cow<'static, str>,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for codec operations
pub type HaikuResult<T> = Result<T, HaikuError>;

impl HaikuError {
    /// Create an internal error
    pub fn internal(msg: impl Into<Cow<'static, str>>) -> Self {
        HaikuError::Internal(msg.into())
    }

    /// Whether the error was caused by the caller's input rather than by
    /// the lexicon, configuration or the codec itself
    pub fn is_input_error(&self) -> bool {
        matches!(self, HaikuError::Format(_) | HaikuError::Decode(_))
    }

    /// Short name of the error category, for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            HaikuError::Format(_) => "Format",
            HaikuError::Decode(_) => "Decode",
            HaikuError::Lexicon(_) => "Lexicon",
            HaikuError::Config(_) => "Config",
            HaikuError::Internal(_) => "Internal",
        }
    }

    /// Log error with appropriate level
    ///
    /// The codec never logs its own failures; this is for callers that want
    /// to report an error they are about to discard.
    pub fn log(&self) {
        if self.is_input_error() {
            tracing::warn!(kind = self.kind(), "{}", self);
        } else {
            tracing::error!(kind = self.kind(), "{}", self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HaikuError::from(FormatError::NoSeparator);
        assert_eq!(
            err.to_string(),
            "Format error: address contains no recognized separator"
        );
    }

    #[test]
    fn test_group_count_display() {
        let err = HaikuError::from(FormatError::GroupCount {
            variant: AddressVariant::V4,
            expected: 4,
            actual: 3,
        });
        assert_eq!(
            err.to_string(),
            "Format error: IPv4 address has 3 groups, expected 4"
        );
    }

    #[test]
    fn test_missing_word_display() {
        let err = HaikuError::from(DecodeError::MissingWord {
            table: "animal_nouns".into(),
            position: 2,
        });
        assert!(err.to_string().contains("dictionary word missing from input"));
        assert!(err.to_string().contains("animal_nouns"));
    }

    #[test]
    fn test_error_classification() {
        assert!(HaikuError::from(FormatError::NoSeparator).is_input_error());
        assert!(
            HaikuError::from(DecodeError::InputTooLarge { len: 10, max: 5 }).is_input_error()
        );
        assert!(!HaikuError::internal("broken").is_input_error());
        assert!(!HaikuError::from(LexiconError::DuplicateTable("nouns".into())).is_input_error());

        assert_eq!(HaikuError::internal("broken").kind(), "Internal");
        assert_eq!(
            HaikuError::from(LexiconError::ParseError("bad".into())).kind(),
            "Lexicon"
        );
    }

    #[test]
    fn test_log_does_not_panic_without_subscriber() {
        HaikuError::from(FormatError::NoSeparator).log();
        HaikuError::internal("broken").log();
    }
}
