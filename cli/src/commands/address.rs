use colored::*;
use netsense_common::config::Config;
use netsense_common::network::ipv4::{self, Ipv4Address};
use tracing::warn;

use crate::terminal::{colors, print};

pub fn check(address: &str, cfg: &Config) -> anyhow::Result<()> {
    if !ipv4::is_valid_ipv4(address) {
        anyhow::bail!("{address:?} is not a valid IPv4 address");
    }

    match cfg.quiet {
        0 | 1 => print::aligned_line(address, "valid".green()),
        _ => print::print(address),
    }
    Ok(())
}

pub fn to_int(address: &str, cfg: &Config) -> anyhow::Result<()> {
    if !ipv4::is_valid_ipv4(address) {
        warn!("{address:?} is not a valid IPv4 address, the packed value is not meaningful");
    }
    let packed: u32 = ipv4::ip_to_int(address)?;

    match cfg.quiet {
        0 | 1 => print::aligned_line(address, packed.to_string().color(colors::NUMBER)),
        _ => print::print(&packed.to_string()),
    }
    Ok(())
}

pub fn from_int(value: u32, cfg: &Config) {
    let address: Ipv4Address = Ipv4Address::from(value);

    match cfg.quiet {
        0 | 1 => print::aligned_line(&value.to_string(), address.to_string().color(colors::IPV4_ADDR)),
        _ => print::print(&address.to_string()),
    }
}
