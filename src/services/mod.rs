//! Service layer for the tracker
//!
//! Services sit on top of the in-memory lists and compute derived values:
//! the date window a preset filter stands for, and what has been spent
//! against each category's budget inside that window.

pub mod budget;
pub mod period;

pub use budget::{
    filter_expenses, percentage, BudgetService, CategoryBudgetSummary, OverviewTotals,
    PayerSpending,
};
pub use period::{today, PeriodService};
