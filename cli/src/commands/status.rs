use colored::*;
use netsense_common::config::Config;
use netsense_common::connectivity::{self, ConnectivityProvider, ProviderError, ProviderResult};
use netsense_common::network::state::NetworkClassification;
use netsense_core::system;
use tracing::warn;

use crate::terminal::{colors, print};

pub fn status(cfg: &Config) -> anyhow::Result<()> {
    let provider: Box<dyn ConnectivityProvider> = system::select_provider(cfg)?;
    let provider: &dyn ConnectivityProvider = provider.as_ref();

    let state: NetworkClassification = connectivity::current_state(provider)?;
    if cfg.quiet > 1 {
        print::print(&state.to_string());
        return Ok(());
    }

    print::GLOBAL_KEY_WIDTH.set(14);
    print::aligned_line("Provider", provider.name());
    print::aligned_line("State", state_label(state));
    print::aligned_line("Wi-Fi", answer(connectivity::is_wifi(provider)));
    print::aligned_line("Mobile", answer(connectivity::is_mobile(provider)));
    print::aligned_line("4G", answer(connectivity::is_4g(provider)));
    print::aligned_line("Wi-Fi linked", answer(connectivity::is_wifi_connected(provider)));
    print::aligned_line("Available", answer(Ok(connectivity::is_network_available(provider))));
    print::aligned_line("GPS", answer(connectivity::is_gps_enabled(provider)));
    print::end_of_program(cfg.quiet);

    Ok(())
}

fn state_label(state: NetworkClassification) -> ColoredString {
    let label: String = state.to_string().to_uppercase();
    match state {
        NetworkClassification::None => label.red().bold(),
        NetworkClassification::Unknown => label.yellow(),
        _ => label.color(colors::ACCENT).bold(),
    }
}

fn answer(result: ProviderResult<bool>) -> ColoredString {
    match result {
        Ok(true) => "yes".green(),
        Ok(false) => "no".red(),
        Err(ProviderError::Unsupported(_)) => "unsupported".dimmed(),
        Err(e) => {
            warn!("{e}");
            "unknown".yellow()
        }
    }
}
