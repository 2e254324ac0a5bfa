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

//! TOML representation of a lexicon.
//!
//! ```toml
//! [keys]
//! ipv4 = ["animal_adjectives", "animal_colors", ...]
//! ipv6 = ["adjectives", "nouns", ...]
//!
//! [[tables]]
//! name = "animal_adjectives"
//! entries = ["agile", "bashful", ...]
//! ```

use super::{Lexicon, LexiconTable};
use crate::error::LexiconError;
use crate::variant::AddressVariant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk lexicon layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconFile {
    pub keys: KeyFile,
    pub tables: Vec<TableFile>,
}

/// Table names making up each variant's key, in key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFile {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

/// One named word table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFile {
    pub name: String,
    pub entries: Vec<String>,
}

impl TryFrom<LexiconFile> for Lexicon {
    type Error = LexiconError;

    fn try_from(file: LexiconFile) -> Result<Self, Self::Error> {
        let tables = file
            .tables
            .into_iter()
            .map(|t| LexiconTable::new(t.name, t.entries))
            .collect::<Result<Vec<_>, _>>()?;
        Lexicon::new(tables, &file.keys.ipv4, &file.keys.ipv6)
    }
}

impl From<&Lexicon> for LexiconFile {
    fn from(lexicon: &Lexicon) -> Self {
        let key_names = |variant: AddressVariant| -> Vec<String> {
            lexicon
                .key(variant)
                .tables()
                .iter()
                .map(|t| t.name().to_string())
                .collect()
        };

        LexiconFile {
            keys: KeyFile {
                ipv4: key_names(AddressVariant::V4),
                ipv6: key_names(AddressVariant::V6),
            },
            tables: lexicon
                .tables()
                .iter()
                .map(|t| TableFile {
                    name: t.name().to_string(),
                    entries: t.entries().map(str::to_string).collect(),
                })
                .collect(),
        }
    }
}

impl Lexicon {
    /// Parse and validate a lexicon from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile =
            toml::from_str(content).map_err(|e| LexiconError::ParseError(e.to_string().into()))?;
        Lexicon::try_from(file)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String, LexiconError> {
        toml::to_string_pretty(&LexiconFile::from(self))
            .map_err(|e| LexiconError::ParseError(e.to_string().into()))
    }

    /// Load and validate a lexicon file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LexiconError::Io {
            path: path.to_string_lossy().to_string().into(),
            reason: e.to_string().into(),
        })?;

        let lexicon = Self::from_toml_str(&content)?;
        info!(
            "Loaded lexicon from {} ({} tables)",
            path.display(),
            lexicon.tables().len()
        );
        Ok(lexicon)
    }

    /// Save to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LexiconError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| LexiconError::Io {
            path: path.to_string_lossy().to_string().into(),
            reason: e.to_string().into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_survives_toml() {
        let builtin = Lexicon::builtin().unwrap();
        let text = builtin.to_toml_string().unwrap();
        let parsed = Lexicon::from_toml_str(&text).unwrap();
        assert_eq!(&parsed, builtin.as_ref());
    }

    #[test]
    fn test_parse_error() {
        let err = Lexicon::from_toml_str("keys = 3").unwrap_err();
        assert!(matches!(err, LexiconError::ParseError(_)));
    }

    #[test]
    fn test_validation_runs_on_load() {
        let builtin = Lexicon::builtin().unwrap();
        let mut file = LexiconFile::from(builtin.as_ref());
        for table in &mut file.tables {
            if table.name == "animal_nouns" {
                table.entries.truncate(10);
            }
        }
        let err = Lexicon::try_from(file).unwrap_err();
        assert_eq!(
            err,
            LexiconError::TableTooSmall {
                table: "animal_nouns".into(),
                variant: AddressVariant::V4,
                len: 10,
                required: 16,
            }
        );
    }

    #[test]
    fn test_missing_file() {
        let err = Lexicon::load_from_file("/nonexistent/lexicon.toml").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
