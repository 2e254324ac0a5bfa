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

//! # Address Parsing
//!
//! Turns a textual IPv4/IPv6 address into its variant and group values, and
//! renders group values back into the canonical textual form.
//!
//! IPv6 abbreviation handling is deliberately simple: at most one collapsed
//! run is expected, and every blank group is expanded in place. This is not
//! an RFC 5952 parser and does not reject every malformed abbreviation.

use crate::error::FormatError;
use crate::variant::AddressVariant;
use std::net::IpAddr;

/// An address split into its variant and ordered group values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub variant: AddressVariant,
    pub groups: Vec<u16>,
}

impl From<IpAddr> for ParsedAddress {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self {
                variant: AddressVariant::V4,
                groups: v4.octets().iter().map(|&o| u16::from(o)).collect(),
            },
            IpAddr::V6(v6) => Self {
                variant: AddressVariant::V6,
                groups: v6.segments().to_vec(),
            },
        }
    }
}

/// Classify an address by its separator
///
/// `:` wins over `.`, so IPv4-mapped IPv6 text is treated as IPv6.
pub fn detect_variant(address: &str) -> Result<AddressVariant, FormatError> {
    if address.contains(':') {
        Ok(AddressVariant::V6)
    } else if address.contains('.') {
        Ok(AddressVariant::V4)
    } else {
        Err(FormatError::NoSeparator)
    }
}

/// Parse an address into ordered group values
pub fn parse_address(address: &str) -> Result<ParsedAddress, FormatError> {
    let variant = detect_variant(address)?;

    let compact: String = address.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens: Vec<&str> = compact.split(variant.separator()).collect();

    let expected = variant.group_count();
    if tokens.len() < expected && variant == AddressVariant::V6 {
        tokens = expand_collapsed(tokens, expected);
    }
    if tokens.len() != expected {
        return Err(FormatError::GroupCount {
            variant,
            expected,
            actual: tokens.len(),
        });
    }

    let groups = tokens
        .iter()
        .map(|token| parse_group(token, variant))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedAddress { variant, groups })
}

/// Expand a collapsed IPv6 run by inserting zero groups where blanks occur
///
/// Leading and trailing blanks become a single zero first; every blank that
/// remains is replaced by itself plus the number of missing groups.
fn expand_collapsed(mut tokens: Vec<&str>, expected: usize) -> Vec<&str> {
    let missing = expected - tokens.len();

    if let Some(first) = tokens.first_mut()
        && first.is_empty()
    {
        *first = "0";
    }
    if let Some(last) = tokens.last_mut()
        && last.is_empty()
    {
        *last = "0";
    }

    let mut expanded = Vec::with_capacity(expected);
    for token in tokens {
        if token.is_empty() {
            expanded.extend(std::iter::repeat_n("0", missing + 1));
        } else {
            expanded.push(token);
        }
    }
    expanded
}

fn parse_group(token: &str, variant: AddressVariant) -> Result<u16, FormatError> {
    let invalid = |reason: String| FormatError::InvalidGroup {
        variant,
        group: token.to_string(),
        reason: reason.into(),
    };

    let value = u32::from_str_radix(token, variant.radix()).map_err(|e| invalid(e.to_string()))?;
    if value > variant.max_group() {
        return Err(invalid(format!(
            "value exceeds maximum {}",
            variant.max_group()
        )));
    }
    u16::try_from(value).map_err(|e| invalid(e.to_string()))
}

/// Render one group value in the variant's textual radix
pub fn format_group(value: u16, variant: AddressVariant) -> String {
    match variant {
        AddressVariant::V4 => value.to_string(),
        AddressVariant::V6 => format!("{value:x}"),
    }
}

/// Join group values into the canonical address string
///
/// IPv6 output is lowercase hexadecimal with every group present; zero runs
/// are never collapsed.
pub fn format_address(groups: &[u16], variant: AddressVariant) -> String {
    groups
        .iter()
        .map(|&g| format_group(g, variant))
        .collect::<Vec<_>>()
        .join(&variant.separator().to_string())
}
