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

//! # Haiku Codec
//!
//! Composes the encode and decode pipelines over a shared, read-only
//! lexicon.
//!
//! ```text
//! encode: address -> groups -> factors -> words -> haiku
//! decode: haiku -> tokens -> variant -> factors -> groups -> address
//! ```
//!
//! A codec holds no mutable state, so one instance can be shared freely
//! across threads.

use crate::address::{self, ParsedAddress};
use crate::config::Config;
use crate::error::{DecodeError, HaikuError, HaikuResult};
use crate::factor;
use crate::lexicon::Lexicon;
use crate::resolver;
use crate::schema;
use crate::tokenizer;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Default upper bound on haiku text accepted by [`HaikuCodec::decode`]
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

/// Encoder/decoder bound to one lexicon
#[derive(Debug, Clone)]
pub struct HaikuCodec {
    lexicon: Arc<Lexicon>,
    max_input_len: usize,
}

impl HaikuCodec {
    /// Codec over the built-in lexicon
    pub fn new() -> HaikuResult<Self> {
        Ok(Self {
            lexicon: Lexicon::builtin()?,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        })
    }

    /// Codec over a custom, already validated lexicon
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Replace the decode input limit
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Build a codec from configuration
    ///
    /// Loads the configured lexicon file, or falls back to the built-in
    /// lexicon when none is set.
    pub fn from_config(config: &Config) -> HaikuResult<Self> {
        config.validate()?;

        let codec = match &config.lexicon.path {
            Some(path) => Self::with_lexicon(Lexicon::load_from_file(path)?),
            None => Self::new()?,
        };
        Ok(codec.with_max_input_len(config.decode.max_input_len))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    /// Encode a textual IPv4 or IPv6 address as a haiku
    pub fn encode(&self, address: &str) -> HaikuResult<String> {
        let parsed = address::parse_address(address)?;
        self.encode_parsed(&parsed)
    }

    /// Encode an already parsed address
    ///
    /// IPv6 addresses use their full eight-group form, so no textual
    /// abbreviation handling is involved.
    pub fn encode_ip(&self, ip: IpAddr) -> HaikuResult<String> {
        self.encode_parsed(&ParsedAddress::from(ip))
    }

    fn encode_parsed(&self, parsed: &ParsedAddress) -> HaikuResult<String> {
        let factors = factor::factor_groups(&parsed.groups, parsed.variant);
        let key = self.lexicon.key(parsed.variant);
        let words = key.words_for(&factors)?;
        let haiku = schema::render(parsed.variant, &words)?;

        debug!(
            variant = %parsed.variant,
            words = words.len(),
            "encoded address"
        );
        Ok(haiku)
    }

    /// Decode haiku text back into a canonical address string
    pub fn decode(&self, haiku: &str) -> HaikuResult<String> {
        if haiku.len() > self.max_input_len {
            return Err(DecodeError::InputTooLarge {
                len: haiku.len(),
                max: self.max_input_len,
            }
            .into());
        }

        let tokens = tokenizer::tokenize(haiku)?;
        let variant = resolver::detect_variant(&tokens, &self.lexicon);
        let factors = resolver::resolve(&tokens, &self.lexicon.key(variant))?;
        let groups = factor::reconstruct_groups(&factors, variant)?;

        debug!(
            %variant,
            tokens = tokens.len(),
            "decoded haiku"
        );
        Ok(address::format_address(&groups, variant))
    }

    /// Decode haiku text into an [`IpAddr`]
    pub fn decode_ip(&self, haiku: &str) -> HaikuResult<IpAddr> {
        let text = self.decode(haiku)?;
        text.parse()
            .map_err(|e| HaikuError::internal(format!("decoded address {text} is not valid: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::lexicon::LexiconFile;
    use std::net::{Ipv4Addr, Ipv6Addr};

    const HOME_HAIKU: &str =
        "The silent beige owl\njumps in the ancient clearing.\nAutumn colors crunch.";

    #[test]
    fn test_encode_ipv4() {
        let codec = HaikuCodec::new().unwrap();
        assert_eq!(codec.encode("192.168.1.1").unwrap(), HOME_HAIKU);
    }

    #[test]
    fn test_decode_ipv4() {
        let codec = HaikuCodec::new().unwrap();
        assert_eq!(codec.decode(HOME_HAIKU).unwrap(), "192.168.1.1");
    }

    #[test]
    fn test_ipv6_round_trip() {
        let codec = HaikuCodec::new().unwrap();
        let haiku = codec.encode("2001:db8::1").unwrap();
        assert_eq!(
            haiku,
            "Chilled apes and blunt seas\naid ace ace ace ace ace ants.\nAce ants aid ace apes."
        );
        assert_eq!(codec.decode(&haiku).unwrap(), "2001:db8:0:0:0:0:0:1");
    }

    #[test]
    fn test_encode_ip_matches_text() {
        let codec = HaikuCodec::new().unwrap();
        let v4 = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(codec.encode_ip(v4).unwrap(), HOME_HAIKU);

        let v6 = IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1));
        assert_eq!(
            codec.encode_ip(v6).unwrap(),
            codec.encode("2001:db8::1").unwrap()
        );
    }

    #[test]
    fn test_decode_ip() {
        let codec = HaikuCodec::new().unwrap();
        let ip = codec.decode_ip(HOME_HAIKU).unwrap();
        assert_eq!(ip, IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)));
    }

    #[test]
    fn test_encode_errors() {
        let codec = HaikuCodec::new().unwrap();
        assert!(matches!(
            codec.encode("localhost"),
            Err(HaikuError::Format(FormatError::NoSeparator))
        ));
        assert!(matches!(
            codec.encode("10.0.0"),
            Err(HaikuError::Format(FormatError::GroupCount { .. }))
        ));
    }

    #[test]
    fn test_decode_input_limit() {
        let codec = HaikuCodec::new().unwrap().with_max_input_len(16);
        let err = codec.decode(HOME_HAIKU).unwrap_err();
        assert!(matches!(
            err,
            HaikuError::Decode(DecodeError::InputTooLarge { max: 16, .. })
        ));
    }

    #[test]
    fn test_decode_missing_word() {
        let codec = HaikuCodec::new().unwrap();
        let err = codec.decode("nothing to see here").unwrap_err();
        assert!(matches!(
            err,
            HaikuError::Decode(DecodeError::MissingWord { .. })
        ));
    }

    #[test]
    fn test_custom_lexicon() {
        let builtin = Lexicon::builtin().unwrap();
        let mut file = LexiconFile::from(builtin.as_ref());
        for table in &mut file.tables {
            if table.name == "plant_verbs" {
                table.entries.reverse();
            }
        }
        let codec = HaikuCodec::with_lexicon(Lexicon::try_from(file).unwrap());

        let haiku = codec.encode("192.168.1.1").unwrap();
        // plant_verbs index 1 is now the second-to-last builtin entry
        assert!(haiku.ends_with("Autumn colors turn."));
        assert_eq!(codec.decode(&haiku).unwrap(), "192.168.1.1");
    }

    #[test]
    fn test_from_default_config() {
        let codec = HaikuCodec::from_config(&Config::default()).unwrap();
        assert_eq!(codec.max_input_len(), DEFAULT_MAX_INPUT_LEN);
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HaikuCodec>();
    }
}
