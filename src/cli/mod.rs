//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod categories;
pub mod config;
pub mod overview;
pub mod range;

pub use categories::handle_categories_command;
pub use config::handle_config_command;
pub use overview::{handle_overview_command, OverviewArgs};
pub use range::{handle_range_command, RangeArgs};

use chrono::NaiveDate;

use crate::models::parse_date;

/// clap value parser for `YYYY-MM-DD` arguments
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
}
