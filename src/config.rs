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

//! # Configuration
//!
//! Layered codec configuration: defaults, then a TOML file, then
//! environment variables, validated once at the end.
//!
//! ```toml
//! [lexicon]
//! path = "/etc/saorsa/lexicon.toml"
//!
//! [decode]
//! max_input_len = 65536
//! ```
//!
//! ## Environment
//! - `SAORSA_HAIKU_LEXICON_PATH`: custom lexicon file
//! - `SAORSA_HAIKU_MAX_INPUT_LEN`: decode input limit in bytes

use crate::codec::DEFAULT_MAX_INPUT_LEN;
use crate::error::{ConfigError, HaikuResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Largest accepted `decode.max_input_len`
pub const MAX_INPUT_LEN_CEILING: usize = 16 * 1024 * 1024;

const DEFAULT_LOCATIONS: [&str; 3] = ["saorsa-haiku.toml", "haiku.toml", "/etc/saorsa/haiku.toml"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lexicon selection
    pub lexicon: LexiconConfig,
    /// Decode limits
    pub decode: DecodeConfig,
}

/// Lexicon configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Custom lexicon file; the built-in lexicon is used when unset
    pub path: Option<PathBuf>,
}

/// Decode configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Longest haiku text accepted, in bytes
    pub max_input_len: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl Config {
    /// Load configuration from default locations and the environment
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use saorsa_haiku::config::Config;
    ///
    /// let config = Config::load()?;
    /// println!("Decode limit: {}", config.decode.max_input_len);
    /// # Ok::<(), saorsa_haiku::HaikuError>(())
    /// ```
    pub fn load() -> HaikuResult<Self> {
        Self::load_with_path::<&str>(None)
    }

    /// Load configuration with a specific config file path
    pub fn load_with_path<P: AsRef<Path>>(path: Option<P>) -> HaikuResult<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            config = Self::load_from_file(path)?;
        } else {
            for location in &DEFAULT_LOCATIONS {
                if Path::new(location).exists() {
                    info!("Loading config from: {}", location);
                    config = Self::load_from_file(location)?;
                    break;
                }
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HaikuResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.as_ref().to_string_lossy().to_string().into(),
            source: e,
        })?;

        Ok(toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string().into()))?)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> HaikuResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string().into()))?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            path: path.as_ref().to_string_lossy().to_string().into(),
            source: e,
        })?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) -> HaikuResult<()> {
        if let Ok(val) = env::var("SAORSA_HAIKU_LEXICON_PATH") {
            self.lexicon.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = env::var("SAORSA_HAIKU_MAX_INPUT_LEN") {
            self.decode.max_input_len = val.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "max_input_len".into(),
                reason: format!("'{val}' is not a byte count").into(),
            })?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> HaikuResult<()> {
        let max = self.decode.max_input_len;
        if max == 0 || max > MAX_INPUT_LEN_CEILING {
            return Err(ConfigError::InvalidValue {
                field: "max_input_len".into(),
                reason: format!("{max} is outside 1..={MAX_INPUT_LEN_CEILING}").into(),
            }
            .into());
        }

        if let Some(path) = &self.lexicon.path
            && path.as_os_str().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                field: "lexicon.path".into(),
                reason: "path is empty".into(),
            }
            .into());
        }

        Ok(())
    }
}
