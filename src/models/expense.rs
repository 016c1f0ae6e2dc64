//! Expense model
//!
//! An expense is recorded once and never edited afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// ISO date format used for every date the tracker reads or prints
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Name of the category this expense counts against
    pub category: String,

    /// Amount spent
    pub amount: Money,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Who paid
    pub paid_by: String,
}

impl Expense {
    pub fn new(
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        paid_by: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            amount,
            date,
            paid_by: paid_by.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount,
            self.paid_by
        )
    }
}

/// Parse an ISO `yyyy-mm-dd` date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let expense = Expense::new(
            "Groceries",
            Money::from_cents(1250),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "Eamon",
        );
        assert_eq!(expense.to_string(), "2024-03-01 Groceries $12.50 (Eamon)");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("01/03/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new(
            "Transport",
            Money::from_cents(320),
            NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            "Siang Nee",
        );
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"date\":\"2024-01-09\""));
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }
}
