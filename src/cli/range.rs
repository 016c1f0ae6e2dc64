//! `range` command
//!
//! Resolves a date filter against today (or `--today`) and prints the range.

use chrono::NaiveDate;
use clap::Args;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{DateFilter, UnknownFilterError};
use crate::services::{today, PeriodService};

/// Arguments for `pnl range`
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Filter key: mtd, lastMonth, last3Months, last6Months, lastYear
    pub filter: String,

    /// Resolve as if today were this date (YYYY-MM-DD)
    #[arg(long, value_parser = super::parse_date_arg)]
    pub today: Option<NaiveDate>,
}

/// Handle the range command
pub fn handle_range_command(args: &RangeArgs) -> TrackerResult<()> {
    println!("{}", resolve_range(args)?);
    Ok(())
}

/// Describe the range a filter stands for
pub fn resolve_range(args: &RangeArgs) -> TrackerResult<String> {
    let filter: DateFilter = args
        .filter
        .parse()
        .map_err(|e: UnknownFilterError| TrackerError::Validation(e.to_string()))?;

    let service = PeriodService::new(args.today.unwrap_or_else(today));
    match service.resolve(filter) {
        Some(range) => Ok(format!("{}: {}", filter.label(), range)),
        None => Ok(format!(
            "{}: set with --from and --to on the overview command",
            filter.label()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(filter: &str, today: Option<NaiveDate>) -> RangeArgs {
        RangeArgs {
            filter: filter.to_string(),
            today,
        }
    }

    #[test]
    fn test_last_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(
            resolve_range(&args("lastMonth", today)).unwrap(),
            "Last Month: 2024-02-01 to 2024-02-29"
        );
    }

    #[test]
    fn test_custom_has_no_range() {
        let text = resolve_range(&args("custom", None)).unwrap();
        assert!(text.starts_with("Custom Date Range"));
    }

    #[test]
    fn test_unknown_filter() {
        let err = resolve_range(&args("fortnight", None)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("lastYear"));
    }
}
