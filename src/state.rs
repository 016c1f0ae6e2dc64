//! Application state
//!
//! [`TrackerState`] owns everything a session works with: categories,
//! recorded expenses, the two entry-form drafts and the active date window.
//! All mutation goes through its methods; derived views are computed on
//! demand through [`BudgetService`].

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::forms::{Draft, OptionSource};
use crate::models::{Category, DateFilter, DateRange, Expense, Money, MAX_AMOUNT};
use crate::services::budget::{BudgetService, CategoryBudgetSummary};
use crate::services::period::{self, PeriodService};

/// In-memory state for one tracker session
#[derive(Debug, Clone)]
pub struct TrackerState {
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    payers: Vec<String>,
    expense_draft: Draft,
    category_draft: Draft,
    filter: DateFilter,
    range: DateRange,
    today: NaiveDate,
}

impl TrackerState {
    /// Start a session from settings, anchored at `today`
    pub fn new(settings: &Settings, today: NaiveDate) -> Self {
        let payers: Vec<String> = settings
            .payers
            .iter()
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .collect();
        let mut state = Self {
            categories: settings.categories.clone(),
            expenses: Vec::new(),
            expense_draft: Draft::expense(today, first_payer(&payers)),
            category_draft: Draft::category(),
            payers,
            filter: DateFilter::Custom,
            range: DateRange::unbounded(),
            today,
        };
        state.select_filter_at(settings.default_filter, today);
        state
    }

    /// Start a session anchored at the local date
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings, period::today())
    }

    // === Accessors ===

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn payers(&self) -> &[String] {
        &self.payers
    }

    pub fn filter(&self) -> DateFilter {
        self.filter
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn expense_draft(&self) -> &Draft {
        &self.expense_draft
    }

    pub fn expense_draft_mut(&mut self) -> &mut Draft {
        &mut self.expense_draft
    }

    pub fn category_draft(&self) -> &Draft {
        &self.category_draft
    }

    pub fn category_draft_mut(&mut self) -> &mut Draft {
        &mut self.category_draft
    }

    /// Options offered by a select field
    pub fn options_for(&self, source: OptionSource) -> Vec<String> {
        match source {
            OptionSource::Categories => self.categories.iter().map(|c| c.name.clone()).collect(),
            OptionSource::Payers => self.payers.clone(),
        }
    }

    // === Derived views ===

    /// Aggregation over the current lists and range
    pub fn budget_service(&self) -> BudgetService<'_> {
        BudgetService::new(&self.categories, &self.expenses, self.range)
    }

    /// Expenses inside the active range
    pub fn filtered_expenses(&self) -> Vec<&Expense> {
        self.budget_service().filter_expenses()
    }

    /// Per-category spend for the active range
    pub fn budget_data(&self) -> Vec<CategoryBudgetSummary> {
        self.budget_service().budget_data()
    }

    // === Expenses ===

    /// Record an expense
    ///
    /// The category must exist and the amount must be positive and no
    /// larger than [`MAX_AMOUNT`].
    pub fn add_expense(&mut self, expense: Expense) -> TrackerResult<()> {
        if self.category(&expense.category).is_none() {
            warn!(category = %expense.category, "rejected expense for unknown category");
            return Err(TrackerError::category_not_found(&expense.category));
        }

        if !expense.amount.is_valid_input() {
            return Err(amount_out_of_range("Amount"));
        }

        if expense.paid_by.trim().is_empty() {
            return Err(TrackerError::Validation("Payer cannot be empty".into()));
        }

        info!(
            category = %expense.category,
            amount = %expense.amount,
            date = %expense.date,
            paid_by = %expense.paid_by,
            "expense added"
        );
        self.expenses.push(expense);
        Ok(())
    }

    /// Commit the expense draft
    ///
    /// On failure the expense list is unchanged and the error is also stored
    /// on the draft for display. On success the draft resets to today's date,
    /// an empty category and amount, and the default payer.
    pub fn submit_expense_draft(&mut self) -> TrackerResult<Expense> {
        let result = self
            .expense_draft
            .parse_expense()
            .and_then(|expense| self.add_expense(expense.clone()).map(|_| expense));

        match result {
            Ok(expense) => {
                self.reset_expense_draft();
                Ok(expense)
            }
            Err(err) => {
                debug!(error = %err, "expense draft rejected");
                self.expense_draft.set_error(form_message(&err));
                Err(err)
            }
        }
    }

    /// Reset the expense draft to its defaults
    pub fn reset_expense_draft(&mut self) {
        self.expense_draft = Draft::expense(self.today, first_payer(&self.payers));
    }

    // === Categories ===

    /// Add a category; names must be unique
    pub fn add_category(&mut self, category: Category) -> TrackerResult<()> {
        category
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        if self.category(&category.name).is_some() {
            return Err(TrackerError::duplicate_category(&category.name));
        }

        info!(name = %category.name, budget = %category.budget, "category added");
        self.categories.push(category);
        Ok(())
    }

    /// Commit the category draft, resetting it on success
    pub fn submit_category_draft(&mut self) -> TrackerResult<Category> {
        let result = self
            .category_draft
            .parse_category()
            .and_then(|category| self.add_category(category.clone()).map(|_| category));

        match result {
            Ok(category) => {
                self.category_draft = Draft::category();
                Ok(category)
            }
            Err(err) => {
                debug!(error = %err, "category draft rejected");
                self.category_draft.set_error(form_message(&err));
                Err(err)
            }
        }
    }

    /// Change one category's budget
    pub fn set_budget(&mut self, name: &str, budget: Money) -> TrackerResult<()> {
        if !budget.is_valid_input() {
            return Err(amount_out_of_range("Budget"));
        }

        let category = self
            .categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| TrackerError::category_not_found(name))?;

        info!(name, from = %category.budget, to = %budget, "budget updated");
        category.budget = budget;
        Ok(())
    }

    /// Change one category's budget from user input text
    pub fn set_budget_from_input(&mut self, name: &str, input: &str) -> TrackerResult<Money> {
        let budget =
            Money::parse_positive(input).map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.set_budget(name, budget)?;
        Ok(budget)
    }

    /// Rename a category, moving its expenses along with it
    ///
    /// Returns the number of expenses that were relabelled.
    pub fn rename_category(&mut self, old_name: &str, new_name: &str) -> TrackerResult<usize> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(TrackerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }
        if new_name != old_name && self.category(new_name).is_some() {
            return Err(TrackerError::duplicate_category(new_name));
        }

        let index = self
            .categories
            .iter()
            .position(|c| c.name == old_name)
            .ok_or_else(|| TrackerError::category_not_found(old_name))?;

        let mut renamed = self.categories[index].clone();
        renamed.name = new_name.to_string();
        renamed
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.categories[index] = renamed;

        let mut moved = 0;
        for expense in self.expenses.iter_mut().filter(|e| e.category == old_name) {
            expense.category = new_name.to_string();
            moved += 1;
        }

        if self.expense_draft.get("category") == Some(old_name) {
            self.expense_draft.set("category", new_name);
        }

        info!(from = old_name, to = new_name, expenses = moved, "category renamed");
        Ok(moved)
    }

    /// Remove a category that no expense refers to
    pub fn remove_category(&mut self, name: &str) -> TrackerResult<Category> {
        let index = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| TrackerError::category_not_found(name))?;

        let expense_count = self.expenses.iter().filter(|e| e.category == name).count();
        if expense_count > 0 {
            warn!(name, expense_count, "refused to remove category in use");
            return Err(TrackerError::CategoryInUse {
                name: name.to_string(),
                expense_count,
            });
        }

        if self.expense_draft.get("category") == Some(name) {
            self.expense_draft.set("category", "");
        }

        info!(name, "category removed");
        Ok(self.categories.remove(index))
    }

    // === Date window ===

    /// Select a filter, re-reading today's date first
    pub fn select_filter(&mut self, filter: DateFilter) {
        self.select_filter_at(filter, period::today());
    }

    /// Select a filter, resolving it against `today`
    ///
    /// Custom keeps the current range so the user can edit it directly.
    pub fn select_filter_at(&mut self, filter: DateFilter, today: NaiveDate) {
        self.today = today;
        self.filter = filter;

        if let Some(range) = PeriodService::new(today).resolve(filter) {
            self.range = range;
        }

        debug!(filter = filter.key(), range = %self.range, "date filter selected");
    }

    /// Select a filter by key. Unknown keys are ignored; returns whether
    /// the key was recognised.
    pub fn select_filter_key(&mut self, key: &str) -> bool {
        match DateFilter::from_key(key) {
            Some(filter) => {
                self.select_filter(filter);
                true
            }
            None => {
                debug!(key, "ignored unknown date filter");
                false
            }
        }
    }

    /// Set the start of the range directly, switching to custom mode
    pub fn set_custom_from(&mut self, from: Option<NaiveDate>) {
        self.filter = DateFilter::Custom;
        self.range.from = from;
    }

    /// Set the end of the range directly, switching to custom mode
    pub fn set_custom_to(&mut self, to: Option<NaiveDate>) {
        self.filter = DateFilter::Custom;
        self.range.to = to;
    }

    /// Move the "today" snapshot, e.g. when a session crosses midnight
    pub fn refresh_today(&mut self, today: NaiveDate) {
        self.today = today;
    }
}

/// The payer preselected in the expense form
fn first_payer(payers: &[String]) -> &str {
    payers.first().map(String::as_str).unwrap_or_default()
}

fn amount_out_of_range(what: &str) -> TrackerError {
    TrackerError::Validation(format!(
        "{} must be greater than zero and at most {}",
        what,
        MAX_AMOUNT.format_plain()
    ))
}

/// Short message for showing a submit error inside a form
fn form_message(err: &TrackerError) -> String {
    match err {
        TrackerError::IncompleteForm { .. } => "All fields are required".to_string(),
        TrackerError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}
