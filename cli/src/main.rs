mod commands;
mod terminal;

use commands::{CommandLine, Commands, address, status};
use netsense_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        backend: commands.backend,
        quiet: commands.quiet,
        ..Default::default()
    };

    match commands.command {
        Commands::Status => {
            print::header("connectivity", cfg.quiet);
            status::status(&cfg)
        }
        Commands::Check { address } => address::check(&address, &cfg),
        Commands::ToInt { address } => address::to_int(&address, &cfg),
        Commands::FromInt { value } => {
            address::from_int(value, &cfg);
            Ok(())
        }
    }
}
