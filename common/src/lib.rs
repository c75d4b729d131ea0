//! # netsense common
//!
//! Domain types shared by every crate in the workspace.
//!
//! * **[`network`]**: network descriptors, the generation classifier and IPv4 helpers.
//!     Pure functions, no IO.
//! * **[`connectivity`]**: the [`connectivity::ConnectivityProvider`] seam and the
//!     query operations built on top of it.
//! * **[`config`]**: runtime configuration assembled by the CLI.

pub mod config;
pub mod connectivity;
pub mod network;
