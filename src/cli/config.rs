//! `config` command

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;

/// Show the config location and the effective settings
pub fn handle_config_command(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<()> {
    println!("P&L Tracker Configuration");
    println!("=========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency:       {} ({})", settings.currency_code, settings.currency_symbol);
    println!("  Payers:         {}", settings.payers.join(", "));
    println!("  Default filter: {}", settings.default_filter.key());
    println!("  Categories:     {}", settings.categories.len());
    Ok(())
}
