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

// Enforce no unwrap/expect/panic in production code only (tests can use them)
#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![cfg_attr(not(test), warn(clippy::expect_used))]
#![cfg_attr(not(test), warn(clippy::panic))]

//! # Saorsa Haiku
//!
//! Reversible encoding of IPv4 and IPv6 addresses as haiku.
//!
//! Every group of an address is split into two factors, each factor picks a
//! word from a fixed dictionary table, and the words are poured into a
//! three-line template. Decoding scans the text for dictionary words in
//! order, tolerating extra words and punctuation, and rebuilds the address.
//!
//! ## Features
//!
//! - IPv4 (`192.168.1.1`) and IPv6, including `::` abbreviations
//! - Tolerant decoding: case, punctuation and filler words are ignored
//! - Custom lexicons loaded from TOML and validated up front
//! - Layered configuration (file and environment)
//!
//! ## Example
//!
//! ```rust
//! let haiku = saorsa_haiku::encode("192.168.1.1")?;
//! assert_eq!(
//!     haiku,
//!     "The silent beige owl\njumps in the ancient clearing.\nAutumn colors crunch."
//! );
//! assert_eq!(saorsa_haiku::decode(&haiku)?, "192.168.1.1");
//! # Ok::<(), saorsa_haiku::HaikuError>(())
//! ```

#![allow(missing_docs)]
#![warn(rust_2018_idioms)]

/// Prelude module for convenient imports
///
/// Use `use saorsa_haiku::prelude::*;` to import commonly used types.
pub mod prelude;

/// Address parsing and formatting
pub mod address;

/// Encode/decode pipeline
pub mod codec;

/// Configuration management
pub mod config;

/// Error types
pub mod error;

/// Group factoring and reconstruction
pub mod factor;

/// Word tables and keys
pub mod lexicon;

/// Token-to-factor resolution
pub mod resolver;

/// Haiku templates and rendering
pub mod schema;

/// Haiku text tokenizer
pub mod tokenizer;

/// Address variants
pub mod variant;

pub use codec::HaikuCodec;
pub use config::Config;
pub use error::{HaikuError, HaikuResult};
pub use lexicon::Lexicon;
pub use variant::AddressVariant;

/// Saorsa Haiku version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode an IPv4 or IPv6 address with the built-in lexicon
pub fn encode(address: &str) -> HaikuResult<String> {
    HaikuCodec::new()?.encode(address)
}

/// Decode a haiku produced by [`encode`] back into a canonical address
///
/// IPv4 addresses come back in dotted decimal, IPv6 addresses as eight
/// lowercase hexadecimal groups without zero compression.
pub fn decode(haiku: &str) -> HaikuResult<String> {
    HaikuCodec::new()?.decode(haiku)
}
