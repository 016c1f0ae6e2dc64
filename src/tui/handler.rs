//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::app::{ActiveDialog, ActiveTab, App, PromptKind};
use super::dialogs;
use super::event::Event;
use crate::services::today;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            // Keeps "today" current when a session runs past midnight
            app.state.refresh_today(today());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    handle_normal_key(app, key);
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Global keys (work on every tab)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }

        // Tab switching
        KeyCode::Char('1') => {
            app.switch_tab(ActiveTab::Expenses);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_tab(ActiveTab::Overview);
            return;
        }
        KeyCode::Char('3') => {
            app.switch_tab(ActiveTab::Settings);
            return;
        }
        KeyCode::Tab => {
            app.switch_tab(app.active_tab.next());
            return;
        }
        KeyCode::BackTab => {
            app.switch_tab(app.active_tab.prev());
            return;
        }

        // Date filter
        KeyCode::Char('f') => {
            app.select_filter(app.state.filter().next());
            return;
        }
        KeyCode::Char('F') => {
            app.select_filter(app.state.filter().prev());
            return;
        }
        KeyCode::Char('[') => {
            app.open_dialog(ActiveDialog::Prompt(PromptKind::RangeFrom));
            return;
        }
        KeyCode::Char(']') => {
            app.open_dialog(ActiveDialog::Prompt(PromptKind::RangeTo));
            return;
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            return;
        }

        KeyCode::Esc => {
            app.clear_status();
            return;
        }

        _ => {}
    }

    match app.active_tab {
        ActiveTab::Expenses => handle_expenses_key(app, key),
        ActiveTab::Overview => {}
        ActiveTab::Settings => handle_settings_key(app, key),
    }
}

/// Handle keys in the expenses tab
fn handle_expenses_key(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('a') | KeyCode::Char('n') = key.code {
        app.open_dialog(ActiveDialog::AddExpense);
    }
}

/// Handle keys in the settings tab
fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::AddCategory);
        }

        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(name) = app.selected_category_name() {
                app.open_dialog(ActiveDialog::Prompt(PromptKind::EditBudget(name)));
            }
        }

        KeyCode::Char('r') => {
            if let Some(name) = app.selected_category_name() {
                app.open_dialog(ActiveDialog::Prompt(PromptKind::RenameCategory(name)));
            }
        }

        KeyCode::Char('d') => {
            if let Some(name) = app.selected_category_name() {
                match app.state.remove_category(&name) {
                    Ok(_) => {
                        app.clamp_category_selection();
                        app.set_status(format!("Category '{}' deleted", name));
                    }
                    Err(e) => app.set_status(e.to_string()),
                }
            }
        }

        _ => {}
    }
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    let handled = match app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes help
            app.close_dialog();
            true
        }
        ActiveDialog::AddExpense | ActiveDialog::AddCategory => dialogs::form::handle_key(app, key),
        ActiveDialog::Prompt(_) => dialogs::prompt::handle_key(app, key),
        ActiveDialog::None => false,
    };

    if !handled {
        debug!(?key, "unhandled dialog key");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{DateFilter, Expense, Money};
    use crate::state::TrackerState;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn app(settings: &Settings) -> App<'_> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        App::new(settings, TrackerState::new(settings, today))
    }

    #[test]
    fn test_quit() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_keys() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_tab, ActiveTab::Settings);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, ActiveTab::Expenses);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, ActiveTab::Settings);
    }

    #[test]
    fn test_filter_cycles_and_resolves() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.state.filter(), DateFilter::MonthToDate);
        assert!(app.state.range().is_bounded());

        press(&mut app, KeyCode::Char('F'));
        press(&mut app, KeyCode::Char('F'));
        assert_eq!(app.state.filter(), DateFilter::LastYear);
    }

    #[test]
    fn test_a_opens_form_for_tab() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        // Typing goes to the form while it is open
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddCategory);
    }

    #[test]
    fn test_edit_budget_from_settings() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Prompt(PromptKind::EditBudget("Food (Dine Out)".into()))
        );

        // "400.00" -> "40" -> "405"
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(
            app.state.category("Food (Dine Out)").map(|c| c.budget),
            Some(Money::from_units(405))
        );
    }

    #[test]
    fn test_delete_blocked_while_in_use() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.state
            .add_expense(Expense::new(
                "Entertainment",
                Money::from_units(10),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "Eamon",
            ))
            .unwrap();

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state.categories().len(), 5);
        assert!(app.status_message.is_some());

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state.categories().len(), 4);
        assert!(app.state.category("Food (Dine Out)").is_none());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
    }
}
