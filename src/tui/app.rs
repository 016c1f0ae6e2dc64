//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::Settings;
use crate::forms::Draft;
use crate::models::{DateFilter, Money, DATE_FORMAT};
use crate::state::TrackerState;

use super::widgets::TextInput;

/// Which tab is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Expenses,
    Overview,
    Settings,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [Self::Expenses, Self::Overview, Self::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::Overview => "Overview",
            Self::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Expenses => 0,
            Self::Overview => 1,
            Self::Settings => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What a single-line prompt edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Monthly budget of a category
    EditBudget(String),
    /// Name of a category
    RenameCategory(String),
    /// Start of the custom date range
    RangeFrom,
    /// End of the custom date range
    RangeTo,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    AddCategory,
    Prompt(PromptKind),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Categories, expenses, drafts and the date window
    pub state: TrackerState,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_tab: ActiveTab,

    pub active_dialog: ActiveDialog,

    /// Selected row in the expense table
    pub selected_expense_index: usize,

    /// Selected row in the category table
    pub selected_category_index: usize,

    /// Input buffer of the open prompt
    pub prompt_input: TextInput,

    /// Error shown inside the open prompt
    pub prompt_error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, state: TrackerState) -> Self {
        Self {
            settings,
            state,
            should_quit: false,
            active_tab: ActiveTab::default(),
            active_dialog: ActiveDialog::default(),
            selected_expense_index: 0,
            selected_category_index: 0,
            prompt_input: TextInput::new(),
            prompt_error: None,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    /// Switch to a different tab
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        match tab {
            ActiveTab::Expenses => self.selected_expense_index = 0,
            ActiveTab::Settings => self.clamp_category_selection(),
            ActiveTab::Overview => {}
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if let ActiveDialog::Prompt(kind) = &dialog {
            let initial = self.prompt_initial_value(kind);
            self.prompt_input = TextInput::new().content(initial).focused(true);
            self.prompt_error = None;
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.prompt_error = None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    fn prompt_initial_value(&self, kind: &PromptKind) -> String {
        let range = self.state.range();
        match kind {
            PromptKind::EditBudget(name) => self
                .state
                .category(name)
                .map(|c| c.budget.format_plain())
                .unwrap_or_default(),
            PromptKind::RenameCategory(name) => name.clone(),
            PromptKind::RangeFrom => range
                .from
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            PromptKind::RangeTo => range
                .to
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    /// Draft edited by the open form, if any
    pub fn active_draft(&self) -> Option<&Draft> {
        match self.active_dialog {
            ActiveDialog::AddExpense => Some(self.state.expense_draft()),
            ActiveDialog::AddCategory => Some(self.state.category_draft()),
            _ => None,
        }
    }

    pub fn active_draft_mut(&mut self) -> Option<&mut Draft> {
        match self.active_dialog {
            ActiveDialog::AddExpense => Some(self.state.expense_draft_mut()),
            ActiveDialog::AddCategory => Some(self.state.category_draft_mut()),
            _ => None,
        }
    }

    /// Name of the category under the cursor in the settings tab
    pub fn selected_category_name(&self) -> Option<String> {
        self.state
            .categories()
            .get(self.selected_category_index)
            .map(|c| c.name.clone())
    }

    /// Select a date filter and report the resolved range
    pub fn select_filter(&mut self, filter: DateFilter) {
        self.state.select_filter(filter);
        self.selected_expense_index = 0;
        self.set_status(format!("{}: {}", filter.label(), self.state.range()));
    }

    /// Move selection up in the current tab
    pub fn move_up(&mut self) {
        match self.active_tab {
            ActiveTab::Expenses => {
                self.selected_expense_index = self.selected_expense_index.saturating_sub(1);
            }
            ActiveTab::Settings => {
                self.selected_category_index = self.selected_category_index.saturating_sub(1);
            }
            ActiveTab::Overview => {}
        }
    }

    /// Move selection down in the current tab
    pub fn move_down(&mut self) {
        match self.active_tab {
            ActiveTab::Expenses => {
                let max = self.state.filtered_expenses().len();
                if self.selected_expense_index < max.saturating_sub(1) {
                    self.selected_expense_index += 1;
                }
            }
            ActiveTab::Settings => {
                let max = self.state.categories().len();
                if self.selected_category_index < max.saturating_sub(1) {
                    self.selected_category_index += 1;
                }
            }
            ActiveTab::Overview => {}
        }
    }

    /// Keep the category cursor on an existing row
    pub fn clamp_category_selection(&mut self) {
        let len = self.state.categories().len();
        self.selected_category_index = self.selected_category_index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app(settings: &Settings) -> App<'_> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        App::new(settings, TrackerState::new(settings, today))
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(ActiveTab::Expenses.next(), ActiveTab::Overview);
        assert_eq!(ActiveTab::Settings.next(), ActiveTab::Expenses);
        assert_eq!(ActiveTab::Expenses.prev(), ActiveTab::Settings);
    }

    #[test]
    fn test_prompt_prefills_current_budget() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_dialog(ActiveDialog::Prompt(PromptKind::EditBudget(
            "Transport".into(),
        )));
        assert_eq!(app.prompt_input.value(), "80.00");
        assert!(app.has_dialog());

        app.close_dialog();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_active_draft_follows_dialog() {
        let settings = Settings::default();
        let mut app = app(&settings);
        assert!(app.active_draft().is_none());

        app.open_dialog(ActiveDialog::AddCategory);
        assert_eq!(app.active_draft().map(|d| d.schema().title), Some("Add New Category"));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.switch_tab(ActiveTab::Settings);
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_category_index, 4);
        assert_eq!(
            app.selected_category_name().as_deref(),
            Some("Food (Dabao / Home Delivery)")
        );
    }
}
