//! Form draft buffers
//!
//! A [`Draft`] holds one string per schema field while the user is typing,
//! tracks which field has focus and parses itself into a record on submit.

use chrono::NaiveDate;

use super::schema::{FieldKind, FieldSpec, FormSchema, CATEGORY_FORM, EXPENSE_FORM};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_date, Category, Expense, Money, DATE_FORMAT};

/// Pending form input
#[derive(Debug, Clone)]
pub struct Draft {
    schema: &'static FormSchema,
    values: Vec<String>,
    focused: usize,
    error: Option<String>,
}

impl Draft {
    /// An empty draft for a schema
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: vec![String::new(); schema.fields.len()],
            focused: 0,
            error: None,
        }
    }

    /// An expense draft with today's date and the default payer filled in
    pub fn expense(today: NaiveDate, default_payer: &str) -> Self {
        let mut draft = Self::new(&EXPENSE_FORM);
        draft.set("date", today.format(DATE_FORMAT).to_string());
        draft.set("paidBy", default_payer);
        draft
    }

    /// An empty category draft
    pub fn category() -> Self {
        Self::new(&CATEGORY_FORM)
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    /// Value of a field by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.schema.index_of(key).map(|i| self.values[i].as_str())
    }

    /// Set a field by key. Returns false for an unknown key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.schema.index_of(key) {
            Some(i) => {
                self.values[i] = value.into();
                self.error = None;
                true
            }
            None => false,
        }
    }

    /// Fields paired with their current values, in schema order
    pub fn fields(&self) -> impl Iterator<Item = (&FieldSpec, &str)> {
        self.schema
            .fields
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> &'static FieldSpec {
        &self.schema.fields[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.values.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.values.len() - 1) % self.values.len();
    }

    /// Type a character into the focused field if its kind accepts it
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.focused_field().kind.accepts(c) {
            return false;
        }
        self.values[self.focused].push(c);
        self.error = None;
        true
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if !self.focused_field().kind.is_select() {
            self.values[self.focused].pop();
            self.error = None;
        }
    }

    /// Clear the focused field
    pub fn clear_focused(&mut self) {
        self.values[self.focused].clear();
        self.error = None;
    }

    /// Step the focused select field through `options`
    ///
    /// An empty or unknown value moves to the first option (forward) or the
    /// last option (backward). Non-select fields are left alone.
    pub fn cycle_option(&mut self, options: &[String], forward: bool) {
        if !self.focused_field().kind.is_select() || options.is_empty() {
            return;
        }

        let current = &self.values[self.focused];
        let next = match options.iter().position(|o| o == current) {
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
            None if forward => 0,
            None => options.len() - 1,
        };

        self.values[self.focused] = options[next].clone();
        self.error = None;
    }

    /// Keys of fields that are empty after trimming
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(spec, _)| spec.key)
            .collect()
    }

    /// Fail with [`TrackerError::IncompleteForm`] if any field is empty
    pub fn require_complete(&self) -> TrackerResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TrackerError::IncompleteForm {
                missing: missing.into_iter().map(String::from).collect(),
            })
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    fn value(&self, key: &str) -> &str {
        self.get(key).map(str::trim).unwrap_or_default()
    }

    /// Parse an expense draft into an [`Expense`]
    pub fn parse_expense(&self) -> TrackerResult<Expense> {
        self.require_complete()?;

        let amount = Money::parse_positive(self.value("amount"))
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        let date = parse_date(self.value("date")).ok_or_else(|| {
            TrackerError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD",
                self.value("date")
            ))
        })?;

        Ok(Expense::new(
            self.value("category"),
            amount,
            date,
            self.value("paidBy"),
        ))
    }

    /// Parse a category draft into a [`Category`]
    pub fn parse_category(&self) -> TrackerResult<Category> {
        self.require_complete()?;

        let budget = Money::parse_positive(self.value("budget"))
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        let category = Category::new(
            self.value("name"),
            budget,
            self.value("emoji"),
            self.value("color"),
        );
        category
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn payers() -> Vec<String> {
        vec!["Eamon".to_string(), "Siang Nee".to_string()]
    }

    #[test]
    fn test_expense_defaults() {
        let draft = Draft::expense(today(), "Eamon");
        assert_eq!(draft.get("category"), Some(""));
        assert_eq!(draft.get("amount"), Some(""));
        assert_eq!(draft.get("date"), Some("2024-03-15"));
        assert_eq!(draft.get("paidBy"), Some("Eamon"));
        assert_eq!(draft.missing_fields(), vec!["category", "amount"]);
    }

    #[test]
    fn test_set_unknown_key() {
        let mut draft = Draft::category();
        assert!(!draft.set("memo", "x"));
        assert!(draft.set("name", "Gifts"));
        assert_eq!(draft.get("name"), Some("Gifts"));
    }

    #[test]
    fn test_typing_respects_field_kind() {
        let mut draft = Draft::expense(today(), "Eamon");
        draft.focus_next(); // amount
        assert_eq!(draft.focused_field().key, "amount");
        for c in "12a.5".chars() {
            draft.insert_char(c);
        }
        assert_eq!(draft.get("amount"), Some("12.5"));
        draft.backspace();
        assert_eq!(draft.get("amount"), Some("12."));

        draft.focus_prev(); // category is a select
        assert!(!draft.insert_char('x'));
        assert_eq!(draft.get("category"), Some(""));
    }

    #[test]
    fn test_focus_wraps() {
        let mut draft = Draft::category();
        draft.focus_prev();
        assert_eq!(draft.focused_field().key, "color");
        draft.focus_next();
        assert_eq!(draft.focused_index(), 0);
    }

    #[test]
    fn test_cycle_option() {
        let mut draft = Draft::expense(today(), "Eamon");
        let options = payers();

        draft.focus_prev(); // paidBy
        draft.cycle_option(&options, true);
        assert_eq!(draft.get("paidBy"), Some("Siang Nee"));
        draft.cycle_option(&options, true);
        assert_eq!(draft.get("paidBy"), Some("Eamon"));
        draft.cycle_option(&options, false);
        assert_eq!(draft.get("paidBy"), Some("Siang Nee"));

        draft.focus_next(); // category, empty
        let categories = vec!["Groceries".to_string(), "Transport".to_string()];
        draft.cycle_option(&categories, false);
        assert_eq!(draft.get("category"), Some("Transport"));
    }

    #[test]
    fn test_parse_expense() {
        let mut draft = Draft::expense(today(), "Eamon");
        draft.set("category", "Groceries");
        draft.set("amount", "12.50");
        draft.set("date", "2024-03-01");

        let expense = draft.parse_expense().unwrap();
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(expense.paid_by, "Eamon");
    }

    #[test]
    fn test_parse_expense_rejects_bad_input() {
        let mut draft = Draft::expense(today(), "Eamon");
        draft.set("category", "Groceries");
        assert!(matches!(
            draft.parse_expense(),
            Err(TrackerError::IncompleteForm { .. })
        ));

        draft.set("amount", "0");
        assert!(matches!(draft.parse_expense(), Err(TrackerError::Validation(_))));

        draft.set("amount", "4");
        draft.set("date", "2024-13-01");
        assert!(matches!(draft.parse_expense(), Err(TrackerError::Validation(_))));
    }

    #[test]
    fn test_parse_category() {
        let mut draft = Draft::category();
        draft.set("name", " Pets ");
        draft.set("budget", "60");
        draft.set("emoji", "🐈");
        draft.set("color", "#aabbcc");

        let category = draft.parse_category().unwrap();
        assert_eq!(category.name, "Pets");
        assert_eq!(category.budget, Money::from_units(60));

        draft.set("budget", "abc");
        assert!(draft.parse_category().is_err());

        draft.set("budget", "10");
        draft.set("emoji", "   ");
        assert!(matches!(
            draft.parse_category(),
            Err(TrackerError::IncompleteForm { .. })
        ));
    }

    #[test]
    fn test_error_cleared_on_edit() {
        let mut draft = Draft::category();
        draft.set_error("All fields are required");
        assert!(draft.error().is_some());
        draft.insert_char('a');
        assert!(draft.error().is_none());
    }
}
