//! Category display formatting

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Color")]
    color: String,
}

/// Format categories with their monthly budgets
pub fn format_category_table(categories: &[Category], currency_code: &str) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        label: c.label(),
        budget: format!("{} {}", c.budget.format_plain(), currency_code),
        color: c.color.clone(),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}
