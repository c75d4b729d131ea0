#![cfg(test)]
use std::net::Ipv4Addr;

use netsense_common::network::ipv4::{self, Ipv4Address};

#[test]
fn documented_examples() {
    assert!(ipv4::is_valid_ipv4("192.168.1.1"));
    assert!(!ipv4::is_valid_ipv4("256.1.1.1"));
    assert!(!ipv4::is_valid_ipv4("1.2.3"));
    assert!(!ipv4::is_valid_ipv4("abc.1.1.1"));

    assert_eq!(ipv4::ip_to_int("0.0.0.1"), Ok(1));
    assert_eq!(ipv4::ip_to_int("255.255.255.255"), Ok(4294967295));
    assert_eq!(ipv4::ip_to_int("1.2.3.4"), Ok(16909060));
}

#[test]
fn validator_agrees_with_std_on_canonical_addresses() {
    for n in (0..=u32::MAX).step_by(16_777_259) {
        let text = Ipv4Addr::from(n).to_string();
        assert!(ipv4::is_valid_ipv4(&text), "{text}");
        assert_eq!(ipv4::ip_to_int(&text), Ok(n), "{text}");
        assert_eq!(text.parse::<Ipv4Address>().map(u32::from), Ok(n));
    }
}

#[test]
fn packed_value_unpacks_to_the_same_octets() {
    for text in ["10.0.0.1", "172.31.255.254", "192.0.2.77", "01.02.3.4"] {
        let n = ipv4::ip_to_int(text).unwrap();
        let unpacked = [
            ((n >> 24) & 0xFF) as u8,
            ((n >> 16) & 0xFF) as u8,
            ((n >> 8) & 0xFF) as u8,
            (n & 0xFF) as u8,
        ];
        let parsed: Ipv4Address = text.parse().unwrap();
        assert_eq!(unpacked, parsed.octets(), "{text}");
    }
}

#[test]
fn lenient_encoder_needs_validation_first() {
    // Both succeed, neither is a real address.
    for text in ["1.2.3", "300.2.3.4"] {
        assert!(!ipv4::is_valid_ipv4(text));
        assert!(ipv4::ip_to_int(text).is_ok());
        assert!(text.parse::<Ipv4Address>().is_err());
    }
    assert_ne!(ipv4::ip_to_int("1.2.3"), ipv4::ip_to_int("0.1.2.3"));
}

#[test]
fn from_int_prints_canonical_form() {
    assert_eq!(Ipv4Address::from(16909060).to_string(), "1.2.3.4");
    assert_eq!(Ipv4Address::from(0).to_string(), "0.0.0.0");
    assert_eq!(Ipv4Address::from(u32::MAX).to_string(), "255.255.255.255");
}
