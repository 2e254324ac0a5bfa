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

//! Group factoring.
//!
//! Each group value `v` is split under the variant divisor `d` into
//! `(high, low)` with `v == high * d + low` and both parts below `d`.
//! IPv4 octets use `d = 16`, IPv6 groups `d = 256`, so every factor fits a
//! byte and indexes one lexicon table.

use crate::error::DecodeError;
use crate::variant::AddressVariant;

/// The (high, low) decomposition of one group value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactorPair {
    pub high: u8,
    pub low: u8,
}

impl FactorPair {
    /// Recombine into the group value
    pub fn value(self, divisor: u32) -> u32 {
        u32::from(self.high) * divisor + u32::from(self.low)
    }
}

/// Split a group value under `divisor`
///
/// Callers guarantee `value < divisor * divisor` and `divisor <= 256`; the
/// address parser enforces this for every group it produces.
pub fn factor(value: u16, divisor: u32) -> FactorPair {
    let value = u32::from(value);
    let low = value % divisor;
    let high = (value - low) / divisor;
    FactorPair {
        high: high as u8,
        low: low as u8,
    }
}

/// Factor every group, flattened in (high, low) order
pub fn factor_groups(groups: &[u16], variant: AddressVariant) -> Vec<u8> {
    groups
        .iter()
        .flat_map(|&group| {
            let pair = factor(group, variant.divisor());
            [pair.high, pair.low]
        })
        .collect()
}

/// Recombine a flat factor sequence into group values, two factors at a time
///
/// Factors come from lexicon entry indices; any index at or above the
/// divisor cannot have been produced by the encoder. A trailing unpaired
/// factor is ignored.
pub fn reconstruct_groups(
    factors: &[usize],
    variant: AddressVariant,
) -> Result<Vec<u16>, DecodeError> {
    let divisor = variant.divisor();
    let to_byte = |factor: usize| -> Result<u8, DecodeError> {
        if factor >= divisor as usize {
            return Err(DecodeError::FactorOutOfRange { factor, divisor });
        }
        u8::try_from(factor).map_err(|_| DecodeError::FactorOutOfRange { factor, divisor })
    };

    factors
        .chunks_exact(2)
        .map(|chunk| {
            let pair = FactorPair {
                high: to_byte(chunk[0])?,
                low: to_byte(chunk[1])?,
            };
            // high, low < divisor <= 256, so the value fits a u16
            Ok(pair.value(divisor) as u16)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_ipv4() {
        assert_eq!(factor(192, 16), FactorPair { high: 12, low: 0 });
        assert_eq!(factor(168, 16), FactorPair { high: 10, low: 8 });
        assert_eq!(factor(1, 16), FactorPair { high: 0, low: 1 });
    }

    #[test]
    fn test_factor_boundaries() {
        assert_eq!(factor(0, 16), FactorPair { high: 0, low: 0 });
        assert_eq!(factor(255, 16), FactorPair { high: 15, low: 15 });
        assert_eq!(factor(0, 256), FactorPair { high: 0, low: 0 });
        assert_eq!(factor(65535, 256), FactorPair { high: 255, low: 255 });
    }

    #[test]
    fn test_factor_groups_order() {
        let factors = factor_groups(&[192, 168, 1, 1], AddressVariant::V4);
        assert_eq!(factors, vec![12, 0, 10, 8, 0, 1, 0, 1]);

        let factors = factor_groups(&[0x2001, 0x0db8], AddressVariant::V6);
        assert_eq!(factors, vec![0x20, 0x01, 0x0d, 0xb8]);
    }

    #[test]
    fn test_reconstruct_groups() {
        let groups = reconstruct_groups(&[12, 0, 10, 8, 0, 1, 0, 1], AddressVariant::V4).unwrap();
        assert_eq!(groups, vec![192, 168, 1, 1]);

        let groups = reconstruct_groups(&[255, 255, 0, 0], AddressVariant::V6).unwrap();
        assert_eq!(groups, vec![65535, 0]);
    }

    #[test]
    fn test_reconstruct_rejects_out_of_range() {
        assert_eq!(
            reconstruct_groups(&[16, 0], AddressVariant::V4),
            Err(DecodeError::FactorOutOfRange {
                factor: 16,
                divisor: 16
            })
        );
        assert!(reconstruct_groups(&[0, 256], AddressVariant::V6).is_err());
    }

    #[test]
    fn test_factor_invariant_exhaustive_ipv4() {
        for value in 0..=255u16 {
            let pair = factor(value, 16);
            assert!(pair.high < 16 && pair.low < 16);
            assert_eq!(pair.value(16), u32::from(value));
        }
    }
}
