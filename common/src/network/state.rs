//! # Network Classification
//!
//! Maps a [`RawNetworkDescriptor`] onto a coarse network generation.

use std::fmt;

use crate::network::descriptor::{MajorType, RawNetworkDescriptor, subtype};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkClassification {
    /// Nothing is connected or connecting.
    #[default]
    None,
    Cellular2G,
    Cellular3G,
    Cellular4G,
    WiFi,
    Unknown,
}

impl fmt::Display for NetworkClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NetworkClassification::None => "none",
            NetworkClassification::Cellular2G => "2g",
            NetworkClassification::Cellular3G => "3g",
            NetworkClassification::Cellular4G => "4g",
            NetworkClassification::WiFi => "wifi",
            NetworkClassification::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Classifies a network. Total over every input.
pub fn classify(descriptor: &RawNetworkDescriptor) -> NetworkClassification {
    if !descriptor.connected_or_connecting {
        return NetworkClassification::None;
    }

    match descriptor.major_type {
        MajorType::WiFi => NetworkClassification::WiFi,
        MajorType::Mobile => classify_mobile(descriptor.subtype),
        MajorType::Other => NetworkClassification::Unknown,
    }
}

fn classify_mobile(code: i32) -> NetworkClassification {
    match code {
        subtype::GPRS | subtype::CDMA | subtype::EDGE | subtype::ONE_X_RTT | subtype::IDEN => {
            NetworkClassification::Cellular2G
        }
        subtype::EVDO_A
        | subtype::UMTS
        | subtype::EVDO_0
        | subtype::HSDPA
        | subtype::HSUPA
        | subtype::HSPA
        | subtype::EVDO_B
        | subtype::EHRPD
        | subtype::HSPAP => NetworkClassification::Cellular3G,
        subtype::LTE => NetworkClassification::Cellular4G,
        _ => NetworkClassification::Unknown,
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
