//! Config CLI commands
//!
//! Show paths and settings, and change the persisted defaults.

use clap::Subcommand;
use tracing::info;

use crate::config::paths::PocketbookPaths;
use crate::config::settings::{Mode, Settings};
use crate::error::PocketbookResult;
use crate::models::CurrencySymbol;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Set the default currency symbol (e.g. "$", "€", "CHF")
    SetCurrency {
        /// Currency symbol
        symbol: String,
    },

    /// Set the mode the TUI opens in
    SetMode {
        #[arg(value_enum)]
        mode: Mode,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &PocketbookPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> PocketbookResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default mode:    {}", settings.default_mode);
            println!("  Log filter:      {}", settings.log_filter);
        }
        ConfigCommands::SetCurrency { symbol } => {
            settings.currency_symbol = CurrencySymbol::custom(&symbol)?;
            settings.save(paths)?;
            info!(currency = %settings.currency_symbol, "default currency changed");
            println!("Default currency set to {}", settings.currency_symbol);
        }
        ConfigCommands::SetMode { mode } => {
            settings.default_mode = mode;
            settings.save(paths)?;
            info!(%mode, "default mode changed");
            println!("Default mode set to {}", mode);
        }
    }

    Ok(())
}
