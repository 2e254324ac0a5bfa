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

//! Address variants and their encoding constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IPv4 or IPv6 classification of an address or haiku
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressVariant {
    /// Four decimal octets separated by `.`
    V4,
    /// Eight hexadecimal groups separated by `:`
    V6,
}

impl AddressVariant {
    /// Group separator in the textual address form
    pub const fn separator(self) -> char {
        match self {
            AddressVariant::V4 => '.',
            AddressVariant::V6 => ':',
        }
    }

    /// Number of groups in a fully expanded address
    pub const fn group_count(self) -> usize {
        match self {
            AddressVariant::V4 => 4,
            AddressVariant::V6 => 8,
        }
    }

    /// Divisor used to split each group into a (high, low) factor pair
    pub const fn divisor(self) -> u32 {
        match self {
            AddressVariant::V4 => 16,
            AddressVariant::V6 => 256,
        }
    }

    /// Radix of a group in the textual address form
    pub const fn radix(self) -> u32 {
        match self {
            AddressVariant::V4 => 10,
            AddressVariant::V6 => 16,
        }
    }

    /// Largest valid group value
    pub const fn max_group(self) -> u32 {
        self.divisor() * self.divisor() - 1
    }

    /// Number of factors (and therefore key tables and word slots)
    pub const fn factor_count(self) -> usize {
        self.group_count() * 2
    }
}

impl fmt::Display for AddressVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressVariant::V4 => write!(f, "IPv4"),
            AddressVariant::V6 => write!(f, "IPv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_constants() {
        assert_eq!(AddressVariant::V4.separator(), '.');
        assert_eq!(AddressVariant::V6.separator(), ':');
        assert_eq!(AddressVariant::V4.factor_count(), 8);
        assert_eq!(AddressVariant::V6.factor_count(), 16);
        assert_eq!(AddressVariant::V4.max_group(), 255);
        assert_eq!(AddressVariant::V6.max_group(), 65535);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(AddressVariant::V4.to_string(), "IPv4");
        assert_eq!(AddressVariant::V6.to_string(), "IPv6");
    }
}
