//! # Raw Network Descriptor
//!
//! Snapshot of a single network as reported by the operating system.
//!
//! Descriptors are produced fresh by a [`crate::connectivity::ConnectivityProvider`]
//! on every query and are never cached.

use std::fmt;

/// Coarse link family of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorType {
    WiFi,
    Mobile,
    /// Ethernet, VPN, bridges and everything else.
    Other,
}

impl MajorType {
    pub fn name(&self) -> &'static str {
        match self {
            MajorType::WiFi => "WIFI",
            MajorType::Mobile => "MOBILE",
            MajorType::Other => "OTHER",
        }
    }
}

impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Radio access technology codes for mobile networks.
///
/// These follow the standard telephony numbering, so values coming from
/// other systems must be translated before they land in a descriptor.
pub mod subtype {
    pub const UNKNOWN: i32 = 0;
    pub const GPRS: i32 = 1;
    pub const EDGE: i32 = 2;
    pub const UMTS: i32 = 3;
    pub const CDMA: i32 = 4;
    pub const EVDO_0: i32 = 5;
    pub const EVDO_A: i32 = 6;
    pub const ONE_X_RTT: i32 = 7;
    pub const HSDPA: i32 = 8;
    pub const HSUPA: i32 = 9;
    pub const HSPA: i32 = 10;
    pub const IDEN: i32 = 11;
    pub const EVDO_B: i32 = 12;
    pub const LTE: i32 = 13;
    pub const EHRPD: i32 = 14;
    pub const HSPAP: i32 = 15;
    pub const GSM: i32 = 16;
    pub const NR: i32 = 20;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawNetworkDescriptor {
    pub connected_or_connecting: bool,
    pub major_type: MajorType,
    /// One of the [`subtype`] codes. Only meaningful for [`MajorType::Mobile`].
    pub subtype: i32,
}

impl RawNetworkDescriptor {
    pub fn new(connected_or_connecting: bool, major_type: MajorType, subtype: i32) -> Self {
        Self {
            connected_or_connecting,
            major_type,
            subtype,
        }
    }

    pub fn wifi(connected_or_connecting: bool) -> Self {
        Self::new(connected_or_connecting, MajorType::WiFi, subtype::UNKNOWN)
    }

    pub fn mobile(connected_or_connecting: bool, subtype: i32) -> Self {
        Self::new(connected_or_connecting, MajorType::Mobile, subtype)
    }

    pub fn other(connected_or_connecting: bool) -> Self {
        Self::new(connected_or_connecting, MajorType::Other, subtype::UNKNOWN)
    }
}
