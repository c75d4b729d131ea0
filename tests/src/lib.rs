//! Cross-crate tests for the netsense workspace.

mod address;
mod connectivity;
