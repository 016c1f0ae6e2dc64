//! Date windows for filtering expenses
//!
//! A [`DateFilter`] names a window relative to today; a [`DateRange`] is the
//! concrete, possibly half-open, pair of dates it resolves to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::expense::DATE_FORMAT;

/// Named date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFilter {
    /// Range is edited directly by the user
    #[default]
    #[serde(rename = "custom")]
    Custom,
    #[serde(rename = "mtd")]
    MonthToDate,
    #[serde(rename = "lastMonth")]
    LastMonth,
    #[serde(rename = "last3Months")]
    Last3Months,
    #[serde(rename = "last6Months")]
    Last6Months,
    #[serde(rename = "lastYear")]
    LastYear,
}

impl DateFilter {
    /// All filters in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Custom,
            Self::MonthToDate,
            Self::LastMonth,
            Self::Last3Months,
            Self::Last6Months,
            Self::LastYear,
        ]
    }

    /// Stable key used in config files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::MonthToDate => "mtd",
            Self::LastMonth => "lastMonth",
            Self::Last3Months => "last3Months",
            Self::Last6Months => "last6Months",
            Self::LastYear => "lastYear",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Custom => "Custom Date Range",
            Self::MonthToDate => "Month to Date",
            Self::LastMonth => "Last Month",
            Self::Last3Months => "Last 3 Months",
            Self::Last6Months => "Last 6 Months",
            Self::LastYear => "Last Year",
        }
    }

    /// Look up a filter by its exact key. Anything else yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.key() == key)
    }

    /// The next filter in menu order, wrapping around
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The previous filter in menu order, wrapping around
    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DateFilter {
    type Err = UnknownFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownFilterError(s.to_string()))
    }
}

/// Error for an unrecognized filter key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterError(pub String);

impl fmt::Display for UnknownFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = DateFilter::all().iter().map(|f| f.key()).collect();
        write!(
            f,
            "Unknown date filter '{}' (expected one of: {})",
            self.0,
            keys.join(", ")
        )
    }
}

impl std::error::Error for UnknownFilterError {}

/// Inclusive date range; either bound may be unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// A range with both bounds set
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// A range with no bounds
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether both bounds are set. Filtering only applies when this holds.
    pub fn is_bounded(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Check whether a date falls inside the range
    ///
    /// A range missing either bound contains every date. A bounded range with
    /// `from > to` contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => true,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_bound = |d: Option<NaiveDate>| {
            d.map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "…".to_string())
        };
        write!(f, "{} to {}", fmt_bound(self.from), fmt_bound(self.to))
    }
}
