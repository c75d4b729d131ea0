use std::collections::HashMap;

use netsense_common::connectivity::{ConnectivityProvider, ProviderError, ProviderResult};
use netsense_common::network::descriptor::{MajorType, RawNetworkDescriptor, subtype};
use tracing::debug;
use zbus::blocking::{Connection, Proxy};
use zbus::zvariant::{OwnedObjectPath, OwnedValue};

pub mod nm_consts {
    pub const BUS_NAME: &str = "org.freedesktop.NetworkManager";
    pub const OBJECT_PATH: &str = "/org/freedesktop/NetworkManager";
    pub const INTERFACE: &str = "org.freedesktop.NetworkManager";
    pub const DEVICE_INTERFACE: &str = "org.freedesktop.NetworkManager.Device";
    pub const ACTIVE_CONNECTION_INTERFACE: &str = "org.freedesktop.NetworkManager.Connection.Active";

    pub const DEVICE_TYPE_ETHERNET: u32 = 1;
    pub const DEVICE_TYPE_WIFI: u32 = 2;
    pub const DEVICE_TYPE_MODEM: u32 = 8;
}

pub mod mm_consts {
    pub const BUS_NAME: &str = "org.freedesktop.ModemManager1";
    pub const OBJECT_PATH: &str = "/org/freedesktop/ModemManager1";
    pub const MODEM_PATH_PREFIX: &str = "/org/freedesktop/ModemManager1/Modem/";
    pub const MODEM_INTERFACE: &str = "org.freedesktop.ModemManager1.Modem";
    pub const LOCATION_INTERFACE: &str = "org.freedesktop.ModemManager1.Modem.Location";
    pub const OBJECT_MANAGER_INTERFACE: &str = "org.freedesktop.DBus.ObjectManager";

    pub const MODEM_STATE_CONNECTED: i32 = 11;

    pub const LOCATION_GPS_RAW: u32 = 1 << 1;
    pub const LOCATION_GPS_NMEA: u32 = 1 << 2;
    pub const LOCATION_GPS_UNMANAGED: u32 = 1 << 4;
}

const ACCESS_DENIED: &str = "org.freedesktop.DBus.Error.AccessDenied";

/// ModemManager access technology bits, most advanced first.
const ACCESS_TECHNOLOGIES: [(u32, i32); 17] = [
    (1 << 15, subtype::NR),
    (1 << 14, subtype::LTE),
    (1 << 16, subtype::LTE),
    (1 << 17, subtype::LTE),
    (1 << 9, subtype::HSPAP),
    (1 << 13, subtype::EVDO_B),
    (1 << 12, subtype::EVDO_A),
    (1 << 11, subtype::EVDO_0),
    (1 << 8, subtype::HSPA),
    (1 << 7, subtype::HSUPA),
    (1 << 6, subtype::HSDPA),
    (1 << 5, subtype::UMTS),
    (1 << 10, subtype::ONE_X_RTT),
    (1 << 4, subtype::EDGE),
    (1 << 3, subtype::GPRS),
    (1 << 2, subtype::GSM),
    (1 << 1, subtype::GSM),
];

type ManagedObjects = HashMap<OwnedObjectPath, HashMap<String, HashMap<String, OwnedValue>>>;

/// Queries NetworkManager on the system bus, and ModemManager for radio details.
pub struct NetworkManagerProvider {
    conn: Connection,
}

impl NetworkManagerProvider {
    /// Connects to the system bus and checks that NetworkManager answers.
    pub fn connect() -> ProviderResult<Self> {
        let conn = Connection::system().map_err(bus_error)?;
        let provider = Self { conn };

        let version: String = provider
            .nm_proxy()?
            .get_property("Version")
            .map_err(bus_error)?;
        debug!("NetworkManager {version} is reachable");

        Ok(provider)
    }

    fn proxy<'a>(
        &'a self,
        destination: &'a str,
        path: &'a str,
        interface: &'a str,
    ) -> ProviderResult<Proxy<'a>> {
        Proxy::new(&self.conn, destination, path, interface).map_err(bus_error)
    }

    fn nm_proxy(&self) -> ProviderResult<Proxy<'_>> {
        self.proxy(nm_consts::BUS_NAME, nm_consts::OBJECT_PATH, nm_consts::INTERFACE)
    }

    fn device_proxy<'a>(&'a self, path: &'a OwnedObjectPath) -> ProviderResult<Proxy<'a>> {
        self.proxy(nm_consts::BUS_NAME, path.as_str(), nm_consts::DEVICE_INTERFACE)
    }

    fn first_device(&self, device_type: u32) -> ProviderResult<Option<OwnedObjectPath>> {
        let devices: Vec<OwnedObjectPath> = self
            .nm_proxy()?
            .call("GetDevices", &())
            .map_err(bus_error)?;

        for path in devices {
            let current: u32 = self
                .device_proxy(&path)?
                .get_property("DeviceType")
                .map_err(bus_error)?;
            if current == device_type {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    /// ModemManager object path backing a NetworkManager modem device.
    fn modem_path(&self, device: &OwnedObjectPath) -> ProviderResult<Option<String>> {
        let udi: String = self
            .device_proxy(device)?
            .get_property("Udi")
            .map_err(bus_error)?;
        Ok(udi.starts_with(mm_consts::MODEM_PATH_PREFIX).then_some(udi))
    }

    fn access_technologies(&self, device: &OwnedObjectPath) -> ProviderResult<u32> {
        let Some(path) = self.modem_path(device)? else {
            return Ok(0);
        };
        let modem = self.proxy(mm_consts::BUS_NAME, &path, mm_consts::MODEM_INTERFACE)?;
        modem.get_property("AccessTechnologies").map_err(bus_error)
    }

    fn modem_subtype(&self, device: &OwnedObjectPath) -> i32 {
        match self.access_technologies(device) {
            Ok(mask) => subtype_for_access_technologies(mask),
            Err(e) => {
                debug!("no radio details for {}: {e}", device.as_str());
                subtype::UNKNOWN
            }
        }
    }
}

impl ConnectivityProvider for NetworkManagerProvider {
    fn name(&self) -> &'static str {
        "NetworkManager"
    }

    fn active_network(&self) -> ProviderResult<Option<RawNetworkDescriptor>> {
        let primary: OwnedObjectPath = self
            .nm_proxy()?
            .get_property("PrimaryConnection")
            .map_err(bus_error)?;
        if primary.as_str() == "/" {
            debug!("no primary connection");
            return Ok(None);
        }

        let active = self.proxy(
            nm_consts::BUS_NAME,
            primary.as_str(),
            nm_consts::ACTIVE_CONNECTION_INTERFACE,
        )?;
        let connection_type: String = active.get_property("Type").map_err(bus_error)?;
        let state: u32 = active.get_property("State").map_err(bus_error)?;
        debug!("primary connection is {connection_type} in state {state}");

        let major_type = major_type_for_connection(&connection_type);
        let subtype = match major_type {
            MajorType::Mobile => match self.first_device(nm_consts::DEVICE_TYPE_MODEM)? {
                Some(device) => self.modem_subtype(&device),
                None => subtype::UNKNOWN,
            },
            _ => subtype::UNKNOWN,
        };

        Ok(Some(RawNetworkDescriptor::new(
            active_connection_is_up(state),
            major_type,
            subtype,
        )))
    }

    fn network(&self, kind: MajorType) -> ProviderResult<Option<RawNetworkDescriptor>> {
        let device_type = match kind {
            MajorType::WiFi => nm_consts::DEVICE_TYPE_WIFI,
            MajorType::Mobile => nm_consts::DEVICE_TYPE_MODEM,
            MajorType::Other => nm_consts::DEVICE_TYPE_ETHERNET,
        };
        let Some(device) = self.first_device(device_type)? else {
            debug!("no {kind} device");
            return Ok(None);
        };

        let state: u32 = self
            .device_proxy(&device)?
            .get_property("State")
            .map_err(bus_error)?;
        let subtype = match kind {
            MajorType::Mobile => self.modem_subtype(&device),
            _ => subtype::UNKNOWN,
        };

        Ok(Some(RawNetworkDescriptor::new(device_is_up(state), kind, subtype)))
    }

    fn mobile_data_connected(&self) -> ProviderResult<bool> {
        let Some(device) = self.first_device(nm_consts::DEVICE_TYPE_MODEM)? else {
            return Ok(false);
        };
        let Some(path) = self.modem_path(&device)? else {
            return Ok(false);
        };

        let state: i32 = self
            .proxy(mm_consts::BUS_NAME, &path, mm_consts::MODEM_INTERFACE)?
            .get_property("State")
            .map_err(bus_error)?;
        Ok(state == mm_consts::MODEM_STATE_CONNECTED)
    }

    fn gps_enabled(&self) -> ProviderResult<bool> {
        let objects: ManagedObjects = self
            .proxy(
                mm_consts::BUS_NAME,
                mm_consts::OBJECT_PATH,
                mm_consts::OBJECT_MANAGER_INTERFACE,
            )?
            .call("GetManagedObjects", &())
            .map_err(bus_error)?;

        for (path, interfaces) in &objects {
            if !interfaces.contains_key(mm_consts::LOCATION_INTERFACE) {
                continue;
            }
            let enabled: u32 = self
                .proxy(mm_consts::BUS_NAME, path.as_str(), mm_consts::LOCATION_INTERFACE)?
                .get_property("Enabled")
                .map_err(bus_error)?;
            if gps_source_enabled(enabled) {
                debug!("GPS enabled on {}", path.as_str());
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn bus_error(e: zbus::Error) -> ProviderError {
    match &e {
        zbus::Error::MethodError(name, _, _) if name.as_str() == ACCESS_DENIED => {
            ProviderError::PermissionDenied
        }
        _ => ProviderError::Unavailable(e.to_string()),
    }
}

fn major_type_for_connection(connection_type: &str) -> MajorType {
    match connection_type {
        "802-11-wireless" => MajorType::WiFi,
        "gsm" | "cdma" => MajorType::Mobile,
        _ => MajorType::Other,
    }
}

/// Activating (1) or activated (2).
fn active_connection_is_up(state: u32) -> bool {
    matches!(state, 1 | 2)
}

/// Anything from `PREPARE` (40) up to `ACTIVATED` (100).
fn device_is_up(state: u32) -> bool {
    (40..=100).contains(&state)
}

fn subtype_for_access_technologies(mask: u32) -> i32 {
    ACCESS_TECHNOLOGIES
        .iter()
        .find(|(bit, _)| mask & bit != 0)
        .map(|&(_, code)| code)
        .unwrap_or(subtype::UNKNOWN)
}

fn gps_source_enabled(enabled: u32) -> bool {
    let gps = mm_consts::LOCATION_GPS_RAW
        | mm_consts::LOCATION_GPS_NMEA
        | mm_consts::LOCATION_GPS_UNMANAGED;
    enabled & gps != 0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
