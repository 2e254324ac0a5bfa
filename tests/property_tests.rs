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

//! Property-based tests for the haiku codec
//!
//! These check the invariants that must hold for every address, not just
//! the handful of fixed scenarios in the integration tests.

use proptest::prelude::*;
use saorsa_haiku::address::format_address;
use saorsa_haiku::factor::{factor, factor_groups, reconstruct_groups};
use saorsa_haiku::resolver::resolve;
use saorsa_haiku::schema::render;
use saorsa_haiku::tokenizer::tokenize;
use saorsa_haiku::{AddressVariant, HaikuCodec, Lexicon};
use std::net::{IpAddr, Ipv6Addr};

fn ipv4_strategy() -> impl Strategy<Value = [u8; 4]> {
    prop::array::uniform4(any::<u8>())
}

fn ipv6_strategy() -> impl Strategy<Value = [u16; 8]> {
    prop::array::uniform8(any::<u16>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_ipv4_round_trip(octets in ipv4_strategy()) {
        let codec = HaikuCodec::new().unwrap();
        let address = octets.map(|o| o.to_string()).join(".");

        let haiku = codec.encode(&address).unwrap();
        prop_assert_eq!(codec.decode(&haiku).unwrap(), address);
    }

    #[test]
    fn prop_ipv6_round_trip(segments in ipv6_strategy()) {
        let codec = HaikuCodec::new().unwrap();
        let address = format_address(&segments, AddressVariant::V6);

        let haiku = codec.encode(&address).unwrap();
        prop_assert_eq!(codec.decode(&haiku).unwrap(), address);
    }

    #[test]
    fn prop_ip_addr_round_trip(segments in ipv6_strategy()) {
        let codec = HaikuCodec::new().unwrap();
        let ip = IpAddr::V6(Ipv6Addr::from(segments));

        let haiku = codec.encode_ip(ip).unwrap();
        prop_assert_eq!(codec.decode_ip(&haiku).unwrap(), ip);
    }

    #[test]
    fn prop_factor_invariant(value in any::<u16>()) {
        for (divisor, max) in [(16u32, 255u16), (256, u16::MAX)] {
            if value > max {
                continue;
            }
            let pair = factor(value, divisor);
            prop_assert!(u32::from(pair.high) < divisor);
            prop_assert!(u32::from(pair.low) < divisor);
            prop_assert_eq!(pair.value(divisor), u32::from(value));
        }
    }

    #[test]
    fn prop_factors_reconstruct(segments in ipv6_strategy()) {
        let factors: Vec<usize> = factor_groups(&segments, AddressVariant::V6)
            .into_iter()
            .map(usize::from)
            .collect();
        prop_assert_eq!(factors.len(), 16);
        prop_assert_eq!(reconstruct_groups(&factors, AddressVariant::V6).unwrap(), segments.to_vec());
    }

    #[test]
    fn prop_render_is_deterministic(octets in ipv4_strategy()) {
        let lexicon = Lexicon::builtin().unwrap();
        let groups: Vec<u16> = octets.iter().map(|&o| u16::from(o)).collect();
        let factors = factor_groups(&groups, AddressVariant::V4);
        let words = lexicon.key(AddressVariant::V4).words_for(&factors).unwrap();

        let first = render(AddressVariant::V4, &words).unwrap();
        let second = render(AddressVariant::V4, &words).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_resolver_is_deterministic(text in "[a-zA-Z .\n-]{0,200}") {
        let lexicon = Lexicon::builtin().unwrap();
        let tokens = tokenize(&text).unwrap();
        for variant in [AddressVariant::V4, AddressVariant::V6] {
            let key = lexicon.key(variant);
            prop_assert_eq!(resolve(&tokens, &key), resolve(&tokens, &key));
        }
    }

    #[test]
    fn prop_decode_never_panics(text in any::<String>()) {
        let codec = HaikuCodec::new().unwrap();
        let _ = codec.decode(&text);
    }

    #[test]
    fn prop_tokens_are_clean(text in any::<String>()) {
        for token in tokenize(&text).unwrap() {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }
}
