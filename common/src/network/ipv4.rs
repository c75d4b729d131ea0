//! # IPv4 Helpers
//!
//! String level validation and integer packing of dotted-decimal IPv4 addresses.
//!
//! [`is_valid_ipv4`] is the strict check. [`ip_to_int`] is deliberately lenient:
//! it only fails when a segment is not a number, so callers that care about
//! segment count or octet range must validate first (or parse an [`Ipv4Address`]).

use std::fmt;
use std::net::Ipv4Addr;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("segment {position} ({segment:?}) is not a decimal integer")]
pub struct FormatError {
    pub position: usize,
    pub segment: String,
    #[source]
    pub source: ParseIntError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid IPv4 address: {0:?}")]
    Invalid(String),
}

/// Returns `true` if `text` is exactly four dot-separated octets in `0..=255`.
///
/// One and two digit groups may carry a leading zero (`"01"`), three digit
/// groups may not (`"012"` is rejected).
pub fn is_valid_ipv4(text: &str) -> bool {
    let mut groups: usize = 0;
    for group in text.split('.') {
        groups += 1;
        if groups > 4 || !is_valid_octet(group) {
            return false;
        }
    }
    groups == 4
}

fn is_valid_octet(group: &str) -> bool {
    let bytes: &[u8] = group.as_bytes();
    if !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    matches!(
        bytes,
        [_] | [_, _] | [b'1', _, _] | [b'2', b'0'..=b'4', _] | [b'2', b'5', b'0'..=b'5']
    )
}

/// Packs a dotted address into an integer, big-endian.
///
/// Segment `i` contributes `(value % 256) * 256^(3 - i)`. Segments past the
/// fourth are still parsed but weigh nothing, trailing empty segments are
/// ignored, and a short address like `"1.2.3"` is packed from the left.
pub fn ip_to_int(addr: &str) -> Result<u32, FormatError> {
    let mut segments: Vec<&str> = addr.split('.').collect();
    while segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    let mut num: u32 = 0;
    for (position, segment) in segments.into_iter().enumerate() {
        let value: u32 = segment.parse().map_err(|source| FormatError {
            position,
            segment: segment.to_string(),
            source,
        })?;
        if position <= 3 {
            num += (value % 256) << (8 * (3 - position));
        }
    }
    Ok(num)
}

/// A validated IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address([u8; 4]);

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_ipv4(s) {
            return Err(AddressError::Invalid(s.to_string()));
        }

        let mut octets = [0u8; 4];
        for (octet, group) in octets.iter_mut().zip(s.split('.')) {
            *octet = group
                .parse()
                .map_err(|_| AddressError::Invalid(s.to_string()))?;
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<u32> for Ipv4Address {
    fn from(n: u32) -> Self {
        Self([
            ((n >> 24) & 0xFF) as u8,
            ((n >> 16) & 0xFF) as u8,
            ((n >> 8) & 0xFF) as u8,
            (n & 0xFF) as u8,
        ])
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> Self {
        addr.0
            .iter()
            .fold(0u32, |acc, &octet| (acc << 8) | u32::from(octet))
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
