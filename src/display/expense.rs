//! Expense display formatting

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::models::{Expense, DATE_FORMAT};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Paid By")]
    paid_by: String,
}

/// Format expenses in recorded order
pub fn format_expense_table(expenses: &[&Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses in this date range.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        category: e.category.clone(),
        amount: e.amount.format_plain(),
        date: e.date.format(DATE_FORMAT).to_string(),
        paid_by: e.paid_by.clone(),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_expense_table() {
        let expense = Expense::new(
            "Groceries",
            Money::from_cents(1250),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "Eamon",
        );
        let table = format_expense_table(&[&expense]);
        assert!(table.contains("Paid By"));
        assert!(table.contains("12.50"));
        assert!(table.contains("2024-03-01"));
    }
}
