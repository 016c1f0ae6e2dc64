//! Display formatting for terminal output
//!
//! Formats expenses, categories and budget summaries as plain-text tables
//! for the CLI.

pub mod category;
pub mod expense;
pub mod overview;

pub use category::format_category_table;
pub use expense::format_expense_table;
pub use overview::{format_budget_table, format_payer_table, format_totals};
