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

//! Prelude module for convenient imports
//!
//! # Example
//!
//! ```rust
//! use saorsa_haiku::prelude::*;
//!
//! let codec = HaikuCodec::new()?;
//! let haiku = codec.encode("10.0.0.1")?;
//! assert_eq!(codec.decode(&haiku)?, "10.0.0.1");
//! # Ok::<(), HaikuError>(())
//! ```

// ============================================================================
// Core Types & Results
// ============================================================================

/// Core error type and result alias
pub use crate::error::{
    ConfigError, DecodeError, FormatError, HaikuError, HaikuResult as Result, LexiconError,
};

/// Address variants and parsed addresses
pub use crate::address::ParsedAddress;
pub use crate::variant::AddressVariant;

// ============================================================================
// Codec & Lexicon
// ============================================================================

/// Encoder/decoder
pub use crate::codec::HaikuCodec;

/// Word tables
pub use crate::lexicon::{Key, Lexicon, LexiconFile, LexiconTable};

/// Templates
pub use crate::schema::{Schema, Slot};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{Config, DecodeConfig, LexiconConfig};
