//! `categories` command

use crate::config::Settings;
use crate::display::format_category_table;
use crate::error::TrackerResult;

/// Print the configured categories and their budgets
pub fn handle_categories_command(settings: &Settings) -> TrackerResult<()> {
    println!(
        "{}",
        format_category_table(&settings.categories, &settings.currency_code)
    );
    Ok(())
}
