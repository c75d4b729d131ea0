//! Concrete implementations of [`netsense_common::connectivity::ConnectivityProvider`].
//!
//! * [`network_manager`] asks NetworkManager (and ModemManager for radio details)
//!     over the system D-Bus. It knows the mobile generation and GPS state.
//! * [`sysfs`] reads the kernel's view of interfaces and routes. It works without
//!     any daemon but cannot tell 3G from LTE and knows nothing about GPS.
//!
//! Callers should go through [`crate::system::select_provider`] instead of
//! constructing these directly.

pub mod network_manager;
pub mod sysfs;

pub use network_manager::NetworkManagerProvider;
pub use sysfs::SysfsProvider;
