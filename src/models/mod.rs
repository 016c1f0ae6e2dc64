//! Core data models for the tracker
//!
//! Categories, expenses, money amounts and the date windows used to filter
//! them.

pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use category::{default_categories, Category, CategoryValidationError};
pub use expense::{parse_date, Expense, DATE_FORMAT};
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
pub use period::{DateFilter, DateRange, UnknownFilterError};
