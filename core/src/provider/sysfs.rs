use std::fs;
use std::path::{Path, PathBuf};

use netsense_common::config::Config;
use netsense_common::connectivity::{ConnectivityProvider, ProviderError, ProviderResult};
use netsense_common::network::descriptor::{MajorType, RawNetworkDescriptor, subtype};
use pnet::datalink::{self, NetworkInterface};
use tracing::debug;

const RTF_UP: u32 = 0x0001;

/// Reads interface kinds from sysfs and the default route from procfs.
///
/// Radio generation is not exposed by the kernel, so mobile descriptors always
/// carry [`subtype::UNKNOWN`].
pub struct SysfsProvider {
    sysfs_root: PathBuf,
    procfs_root: PathBuf,
    interfaces: fn() -> Vec<NetworkInterface>,
}

impl SysfsProvider {
    pub fn new(cfg: &Config) -> Self {
        Self {
            sysfs_root: cfg.sysfs_root.clone(),
            procfs_root: cfg.procfs_root.clone(),
            interfaces: datalink::interfaces,
        }
    }

    /// Replaces the interface enumeration, mostly useful for tests.
    pub fn with_interface_source(mut self, interfaces: fn() -> Vec<NetworkInterface>) -> Self {
        self.interfaces = interfaces;
        self
    }

    fn candidate_interfaces(&self) -> Vec<NetworkInterface> {
        (self.interfaces)()
            .into_iter()
            .filter(|interface| !interface.is_loopback())
            .collect()
    }

    fn kind_of(&self, interface: &NetworkInterface) -> MajorType {
        let device_dir: PathBuf = self.sysfs_root.join(&interface.name);
        if let Ok(uevent) = fs::read_to_string(device_dir.join("uevent")) {
            if let Some(kind) = kind_from_uevent(&uevent) {
                return kind;
            }
        }
        if is_wireless(&device_dir) {
            MajorType::WiFi
        } else {
            MajorType::Other
        }
    }

    fn describe(&self, interface: &NetworkInterface) -> RawNetworkDescriptor {
        RawNetworkDescriptor::new(
            is_connected(interface),
            self.kind_of(interface),
            subtype::UNKNOWN,
        )
    }
}

impl ConnectivityProvider for SysfsProvider {
    fn name(&self) -> &'static str {
        "sysfs"
    }

    fn active_network(&self) -> ProviderResult<Option<RawNetworkDescriptor>> {
        let route_path: PathBuf = self.procfs_root.join("net").join("route");
        let routes: String = fs::read_to_string(&route_path).map_err(|e| {
            ProviderError::Unavailable(format!("{}: {e}", route_path.display()))
        })?;

        let Some(name) = default_route_interface(&routes) else {
            debug!("no default route");
            return Ok(None);
        };
        debug!("default route goes through {name}");

        Ok(self
            .candidate_interfaces()
            .iter()
            .find(|interface| interface.name == name)
            .map(|interface| self.describe(interface)))
    }

    fn network(&self, kind: MajorType) -> ProviderResult<Option<RawNetworkDescriptor>> {
        let matching: Vec<RawNetworkDescriptor> = self
            .candidate_interfaces()
            .iter()
            .map(|interface| self.describe(interface))
            .filter(|descriptor| descriptor.major_type == kind)
            .collect();

        Ok(matching
            .iter()
            .find(|descriptor| descriptor.connected_or_connecting)
            .or(matching.first())
            .copied())
    }

    fn mobile_data_connected(&self) -> ProviderResult<bool> {
        Ok(self
            .network(MajorType::Mobile)?
            .is_some_and(|mobile| mobile.connected_or_connecting))
    }

    fn gps_enabled(&self) -> ProviderResult<bool> {
        Err(ProviderError::Unsupported("gps"))
    }
}

fn is_connected(interface: &NetworkInterface) -> bool {
    interface.is_up() && !interface.ips.is_empty()
}

fn is_wireless(device_dir: &Path) -> bool {
    device_dir.join("wireless").exists()
}

fn kind_from_uevent(uevent: &str) -> Option<MajorType> {
    uevent
        .lines()
        .find_map(|line| line.strip_prefix("DEVTYPE="))
        .and_then(|devtype| match devtype.trim() {
            "wlan" => Some(MajorType::WiFi),
            "wwan" => Some(MajorType::Mobile),
            _ => None,
        })
}

/// Name of the interface carrying the lowest-metric default route.
fn default_route_interface(routes: &str) -> Option<String> {
    routes
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [iface, destination, _gateway, flags, _refcnt, _use, metric, mask, ..] =
                fields.as_slice()
            else {
                return None;
            };
            let flags = u32::from_str_radix(flags, 16).ok()?;
            let metric: u32 = metric.parse().ok()?;
            let is_default = *destination == "00000000" && *mask == "00000000";
            (is_default && flags & RTF_UP != 0).then(|| (metric, iface.to_string()))
        })
        .min_by_key(|(metric, _)| *metric)
        .map(|(_, iface)| iface)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
