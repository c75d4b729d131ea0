//! # Connectivity Queries
//!
//! [`ConnectivityProvider`] is the boundary to the operating system. Everything
//! in this module asks a provider for fresh descriptors on every call and
//! answers a single yes/no or classification question from them.

use thiserror::Error;
use tracing::debug;

use crate::network::descriptor::{MajorType, RawNetworkDescriptor};
use crate::network::state::{self, NetworkClassification};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("connectivity service unavailable: {0}")]
    Unavailable(String),
    #[error("{0} is not supported by this provider")]
    Unsupported(&'static str),
    #[error("permission denied")]
    PermissionDenied,
}

pub type ProviderResult<T> = Result<T, ProviderError>;

pub trait ConnectivityProvider {
    fn name(&self) -> &'static str;

    /// The network the system routes through by default, if any.
    fn active_network(&self) -> ProviderResult<Option<RawNetworkDescriptor>>;

    /// The first network of the given kind, active or not.
    fn network(&self, kind: MajorType) -> ProviderResult<Option<RawNetworkDescriptor>>;

    fn mobile_data_connected(&self) -> ProviderResult<bool>;

    fn gps_enabled(&self) -> ProviderResult<bool>;
}

/// Whether a Wi-Fi network is up, or a mobile network is up with its data bearer connected.
///
/// Provider failures count as "not available".
pub fn is_network_available(provider: &dyn ConnectivityProvider) -> bool {
    match network_available(provider) {
        Ok(available) => available,
        Err(e) => {
            debug!("{} could not answer availability: {e}", provider.name());
            false
        }
    }
}

fn network_available(provider: &dyn ConnectivityProvider) -> ProviderResult<bool> {
    if let Some(wifi) = provider.network(MajorType::WiFi)? {
        if wifi.connected_or_connecting {
            debug!("Wi-Fi connection is up");
            return Ok(true);
        }
    }
    debug!("Wi-Fi connection is down");

    if let Some(mobile) = provider.network(MajorType::Mobile)? {
        if mobile.connected_or_connecting && provider.mobile_data_connected()? {
            debug!("mobile data connection is up");
            return Ok(true);
        }
    }
    debug!("mobile data connection is down");

    Ok(false)
}

pub fn is_gps_enabled(provider: &dyn ConnectivityProvider) -> ProviderResult<bool> {
    provider.gps_enabled()
}

/// Whether the active network is Wi-Fi. Connection state is not consulted.
pub fn is_wifi(provider: &dyn ConnectivityProvider) -> ProviderResult<bool> {
    active_type_is(provider, MajorType::WiFi)
}

/// Whether the active network is a mobile one. Connection state is not consulted.
pub fn is_mobile(provider: &dyn ConnectivityProvider) -> ProviderResult<bool> {
    active_type_is(provider, MajorType::Mobile)
}

pub fn is_4g(provider: &dyn ConnectivityProvider) -> ProviderResult<bool> {
    Ok(current_state(provider)? == NetworkClassification::Cellular4G)
}

/// Whether the Wi-Fi network is connected or connecting, even when it is not the active one.
pub fn is_wifi_connected(provider: &dyn ConnectivityProvider) -> ProviderResult<bool> {
    Ok(provider
        .network(MajorType::WiFi)?
        .is_some_and(|wifi| wifi.connected_or_connecting))
}

pub fn current_state(provider: &dyn ConnectivityProvider) -> ProviderResult<NetworkClassification> {
    Ok(provider
        .active_network()?
        .map(|descriptor| state::classify(&descriptor))
        .unwrap_or(NetworkClassification::None))
}

fn active_type_is(provider: &dyn ConnectivityProvider, kind: MajorType) -> ProviderResult<bool> {
    Ok(provider
        .active_network()?
        .is_some_and(|active| active.major_type == kind))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
