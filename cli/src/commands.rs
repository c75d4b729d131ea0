pub mod address;
pub mod status;

use clap::{ArgAction, Parser, Subcommand};
use netsense_common::config::Backend;

#[derive(Parser)]
#[command(name = "netsense")]
#[command(about = "Connectivity status and IPv4 address helpers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Where connectivity information comes from: auto, nm or sysfs
    #[arg(long, global = true, default_value = "auto")]
    pub backend: Backend,

    /// Print less. Repeat (-qq) for bare values only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current network state of this device
    #[command(alias = "s")]
    Status,
    /// Check whether an address is a valid dotted IPv4 address
    #[command(alias = "c")]
    Check { address: String },
    /// Pack a dotted IPv4 address into an integer
    #[command(alias = "t")]
    ToInt { address: String },
    /// Unpack an integer into a dotted IPv4 address
    #[command(alias = "f")]
    FromInt { value: u32 },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
