//! Budget aggregation
//!
//! Derives the visible expense subset for a date range and, per category,
//! the amount spent and the share of the budget it represents. Everything
//! here is recomputed on demand from the current lists.

use crate::models::{Category, DateRange, Expense, Money};

/// Spend against one category's budget
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBudgetSummary {
    /// The category (cloned at aggregation time)
    pub category: Category,
    /// Sum of filtered expenses in this category
    pub spent: Money,
    /// Number of filtered expenses in this category
    pub expense_count: usize,
    /// `100 * spent / budget`, unclamped. Non-finite for a zero budget.
    pub percentage: f64,
}

impl CategoryBudgetSummary {
    /// Fraction of the progress bar to fill, clamped to `[0, 1]`
    pub fn bar_ratio(&self) -> f64 {
        if self.percentage.is_nan() {
            0.0
        } else {
            (self.percentage / 100.0).clamp(0.0, 1.0)
        }
    }

    /// Percentage as displayed, e.g. "25.00%". Not clamped.
    pub fn percentage_label(&self) -> String {
        format!("{:.2}%", self.percentage)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.category.budget
    }

    /// Budget left to spend (negative once over budget)
    pub fn remaining(&self) -> Money {
        self.category.budget - self.spent
    }
}

/// Totals across every category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewTotals {
    pub spent: Money,
    pub budget: Money,
    pub percentage: f64,
}

/// Filtered spend attributed to one payer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayerSpending {
    pub payer: String,
    pub spent: Money,
    pub expense_count: usize,
}

/// Service for filtering and aggregating expenses
#[derive(Debug, Clone, Copy)]
pub struct BudgetService<'a> {
    categories: &'a [Category],
    expenses: &'a [Expense],
    range: DateRange,
}

impl<'a> BudgetService<'a> {
    /// Create a budget service over the given lists and range
    pub fn new(categories: &'a [Category], expenses: &'a [Expense], range: DateRange) -> Self {
        Self {
            categories,
            expenses,
            range,
        }
    }

    /// The range this service filters by
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Expenses inside the range, in recorded order
    pub fn filter_expenses(&self) -> Vec<&'a Expense> {
        filter_expenses(self.expenses, &self.range)
    }

    /// Spend and percentage for every category, in category order
    pub fn budget_data(&self) -> Vec<CategoryBudgetSummary> {
        let visible = self.filter_expenses();

        self.categories
            .iter()
            .map(|category| {
                let matching: Vec<&Expense> = visible
                    .iter()
                    .copied()
                    .filter(|e| e.category == category.name)
                    .collect();
                let spent: Money = matching.iter().map(|e| e.amount).sum();

                CategoryBudgetSummary {
                    category: category.clone(),
                    spent,
                    expense_count: matching.len(),
                    percentage: percentage(spent, category.budget),
                }
            })
            .collect()
    }

    /// Total spend and budget across categories
    ///
    /// Spend on expenses whose category no longer exists is not counted.
    pub fn overview_totals(&self) -> OverviewTotals {
        let data = self.budget_data();
        let spent: Money = data.iter().map(|d| d.spent).sum();
        let budget: Money = data.iter().map(|d| d.category.budget).sum();

        OverviewTotals {
            spent,
            budget,
            percentage: percentage(spent, budget),
        }
    }

    /// Filtered spend grouped by payer, in order of first appearance
    pub fn spending_by_payer(&self) -> Vec<PayerSpending> {
        let mut result: Vec<PayerSpending> = Vec::new();

        for expense in self.filter_expenses() {
            match result.iter_mut().find(|p| p.payer == expense.paid_by) {
                Some(entry) => {
                    entry.spent += expense.amount;
                    entry.expense_count += 1;
                }
                None => result.push(PayerSpending {
                    payer: expense.paid_by.clone(),
                    spent: expense.amount,
                    expense_count: 1,
                }),
            }
        }

        result
    }
}

/// Expenses with `from <= date <= to`, order preserved
///
/// When either bound is unset every expense is returned.
pub fn filter_expenses<'a>(expenses: &'a [Expense], range: &DateRange) -> Vec<&'a Expense> {
    if !range.is_bounded() {
        return expenses.iter().collect();
    }

    expenses.iter().filter(|e| range.contains(e.date)).collect()
}

/// `100 * spent / budget` without clamping
pub fn percentage(spent: Money, budget: Money) -> f64 {
    spent.cents() as f64 * 100.0 / budget.cents() as f64
}
