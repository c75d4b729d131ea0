pub mod descriptor;
pub mod ipv4;
pub mod state;
