use netsense_common::config::{Backend, Config};
use netsense_common::connectivity::ConnectivityProvider;
use tracing::{debug, info};

use crate::provider::{NetworkManagerProvider, SysfsProvider};

/// Builds the provider requested by `cfg.backend`.
///
/// `Backend::Auto` falls back to sysfs when NetworkManager cannot be reached,
/// an explicit `Backend::NetworkManager` turns that into an error instead.
pub fn select_provider(cfg: &Config) -> anyhow::Result<Box<dyn ConnectivityProvider>> {
    match cfg.backend {
        Backend::NetworkManager => {
            let provider = NetworkManagerProvider::connect()
                .map_err(|e| anyhow::anyhow!("NetworkManager backend requested: {e}"))?;
            Ok(Box::new(provider))
        }
        Backend::Sysfs => Ok(Box::new(SysfsProvider::new(cfg))),
        Backend::Auto => match NetworkManagerProvider::connect() {
            Ok(provider) => {
                info!("Using NetworkManager for connectivity");
                Ok(Box::new(provider))
            }
            Err(e) => {
                debug!("NetworkManager unavailable ({e}), falling back to sysfs");
                info!("Using sysfs for connectivity");
                Ok(Box::new(SysfsProvider::new(cfg)))
            }
        },
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
