//! Date-range resolution
//!
//! Turns a named [`DateFilter`] into a concrete [`DateRange`] relative to a
//! "today" snapshot.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::models::{DateFilter, DateRange};

/// Service for resolving named date windows
#[derive(Debug, Clone, Copy)]
pub struct PeriodService {
    today: NaiveDate,
}

impl PeriodService {
    /// Create a period service anchored at `today`
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Resolve a filter to a concrete range
    ///
    /// Returns `None` for [`DateFilter::Custom`], whose range is edited
    /// directly, and leaves the caller's range untouched.
    pub fn resolve(&self, filter: DateFilter) -> Option<DateRange> {
        let this_month = first_of_month(self.today);

        let (from, to) = match filter {
            DateFilter::Custom => return None,
            DateFilter::MonthToDate => (this_month, self.today),
            DateFilter::LastMonth => (
                this_month.checked_sub_months(Months::new(1))?,
                this_month.pred_opt()?,
            ),
            DateFilter::Last3Months => (this_month.checked_sub_months(Months::new(3))?, self.today),
            DateFilter::Last6Months => (this_month.checked_sub_months(Months::new(6))?, self.today),
            DateFilter::LastYear => (this_month.checked_sub_months(Months::new(12))?, self.today),
        };

        Some(DateRange::new(from, to))
    }
}

/// The local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> PeriodService {
        PeriodService::new(date(2024, 3, 15))
    }

    #[test]
    fn test_custom_leaves_range_alone() {
        assert_eq!(service().resolve(DateFilter::Custom), None);
    }

    #[test]
    fn test_month_to_date() {
        assert_eq!(
            service().resolve(DateFilter::MonthToDate),
            Some(DateRange::new(date(2024, 3, 1), date(2024, 3, 15)))
        );
    }

    #[test]
    fn test_last_month_covers_leap_february() {
        assert_eq!(
            service().resolve(DateFilter::LastMonth),
            Some(DateRange::new(date(2024, 2, 1), date(2024, 2, 29)))
        );
    }

    #[test]
    fn test_last_month_across_year_boundary() {
        let service = PeriodService::new(date(2024, 1, 10));
        assert_eq!(
            service.resolve(DateFilter::LastMonth),
            Some(DateRange::new(date(2023, 12, 1), date(2023, 12, 31)))
        );
    }

    #[test]
    fn test_last_n_months() {
        assert_eq!(
            service().resolve(DateFilter::Last3Months),
            Some(DateRange::new(date(2023, 12, 1), date(2024, 3, 15)))
        );
        assert_eq!(
            service().resolve(DateFilter::Last6Months),
            Some(DateRange::new(date(2023, 9, 1), date(2024, 3, 15)))
        );
    }

    #[test]
    fn test_last_year_starts_same_month_previous_year() {
        assert_eq!(
            service().resolve(DateFilter::LastYear),
            Some(DateRange::new(date(2023, 3, 1), date(2024, 3, 15)))
        );
    }

    #[test]
    fn test_month_end_today() {
        let service = PeriodService::new(date(2024, 5, 31));
        assert_eq!(
            service.resolve(DateFilter::Last3Months),
            Some(DateRange::new(date(2024, 2, 1), date(2024, 5, 31)))
        );
        assert_eq!(
            service.resolve(DateFilter::LastMonth),
            Some(DateRange::new(date(2024, 4, 1), date(2024, 4, 30)))
        );
    }

    #[test]
    fn test_local_today_is_inside_month_to_date() {
        let local = today();
        let range = PeriodService::new(local).resolve(DateFilter::MonthToDate).unwrap();
        assert!(range.contains(local));
    }
}
