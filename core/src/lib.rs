//! OS-backed connectivity providers and the logic that picks one.

pub mod provider;
pub mod system;
