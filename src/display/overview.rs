//! Budget overview formatting
//!
//! Per-category spend with a text progress bar, the overall totals and the
//! split between payers.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::services::{CategoryBudgetSummary, OverviewTotals, PayerSpending};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Left")]
    remaining: String,
    #[tabled(rename = "Used")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Text progress bar, e.g. `[#####...............]`
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Format spend against each category's budget
pub fn format_budget_table(data: &[CategoryBudgetSummary]) -> String {
    if data.is_empty() {
        return "No categories found.".to_string();
    }

    let rows = data.iter().map(|d| BudgetRow {
        label: d.category.label(),
        spent: d.spent.format_plain(),
        budget: d.category.budget.format_plain(),
        remaining: d.remaining().format_plain(),
        percentage: if d.is_over_budget() {
            format!("{} !", d.percentage_label())
        } else {
            d.percentage_label()
        },
        bar: progress_bar(d.bar_ratio(), BAR_WIDTH),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..5)).with(Alignment::right()))
        .to_string()
}

/// One-line summary of total spend
pub fn format_totals(totals: &OverviewTotals, currency_symbol: &str) -> String {
    format!(
        "Total: {} of {} ({:.2}%)",
        totals.spent.format_with_symbol(currency_symbol),
        totals.budget.format_with_symbol(currency_symbol),
        totals.percentage
    )
}

#[derive(Tabled)]
struct PayerRow {
    #[tabled(rename = "Paid By")]
    payer: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Spent")]
    spent: String,
}

/// Format spend grouped by payer
pub fn format_payer_table(payers: &[PayerSpending]) -> String {
    if payers.is_empty() {
        return "No spending recorded.".to_string();
    }

    let rows = payers.iter().map(|p| PayerRow {
        payer: p.payer.clone(),
        count: p.expense_count,
        spent: p.spent.format_plain(),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..3)).with(Alignment::right()))
        .to_string()
}
