//! Entry form dialog
//!
//! Renders whichever [`Draft`](crate::forms::Draft) the open dialog edits, one row per schema
//! field, and routes keys into it. Select fields cycle through their options
//! while text fields take typed characters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::forms::{FieldKind, FieldSpec};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

const LABEL_WIDTH: u16 = 10;

/// Render the open form
pub fn render(frame: &mut Frame, app: &App) {
    let Some(draft) = app.active_draft() else {
        return;
    };

    let field_count = draft.schema().fields.len() as u16;
    let area = centered_rect_fixed(56, field_count * 2 + 6, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", draft.schema().title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    // One row per field plus a spacer, then error and hints
    let mut constraints: Vec<Constraint> = draft
        .schema()
        .fields
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    constraints.extend([
        Constraint::Length(1), // Error
        Constraint::Length(1), // Hints
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, (spec, value)) in draft.fields().enumerate() {
        let focused = index == draft.focused_index();
        let row = chunks[index * 2];
        if spec.kind.is_select() {
            render_selector_field(frame, row, spec, value, focused);
        } else {
            render_text_field(frame, row, spec, value, focused);
        }
    }

    let tail = field_count as usize * 2;
    if let Some(error) = draft.error() {
        let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[tail]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Choose  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", draft.schema().submit_label)),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[tail + 1]);
}

fn render_text_field(frame: &mut Frame, area: Rect, spec: &FieldSpec, value: &str, focused: bool) {
    TextInput::new()
        .label(spec.label)
        .label_width(LABEL_WIDTH)
        .placeholder(spec.placeholder)
        .content(value)
        .focused(focused)
        .render(area, frame.buffer_mut());
}

fn render_selector_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    value: &str,
    focused: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let (shown, value_style) = if value.is_empty() {
        (spec.placeholder, Style::default().fg(Color::DarkGray))
    } else if focused {
        (value, Style::default().fg(Color::White).bg(Color::DarkGray))
    } else {
        (value, Style::default().fg(Color::Yellow))
    };

    let hint = if focused { " ◀ ←/→ ▶" } else { "" };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<width$}", format!("{}: ", spec.label), width = LABEL_WIDTH as usize),
            label_style,
        ),
        Span::styled(format!(" {} ", shown), value_style),
        Span::styled(hint, Style::default().fg(Color::Yellow)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Handle key input for the open form
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Enter => {
            submit(app);
            return true;
        }

        _ => {}
    }

    let focused_kind = match app.active_draft() {
        Some(draft) => draft.focused_field().kind,
        None => return false,
    };

    // Option lists come from the state, so resolve them before borrowing the draft
    let options = match focused_kind {
        FieldKind::Select(source) => app.state.options_for(source),
        _ => Vec::new(),
    };

    let Some(draft) = app.active_draft_mut() else {
        return false;
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down => draft.focus_next(),
        KeyCode::BackTab | KeyCode::Up => draft.focus_prev(),
        KeyCode::Right => draft.cycle_option(&options, true),
        KeyCode::Left => draft.cycle_option(&options, false),
        KeyCode::Char('j') if focused_kind.is_select() => draft.cycle_option(&options, true),
        KeyCode::Char('k') if focused_kind.is_select() => draft.cycle_option(&options, false),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            draft.clear_focused()
        }
        KeyCode::Char(c) => {
            draft.insert_char(c);
        }
        KeyCode::Backspace => draft.backspace(),
        _ => return false,
    }

    true
}

/// Commit the open form into the state
///
/// On failure the dialog stays open with the error shown inline.
fn submit(app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            if let Ok(expense) = app.state.submit_expense_draft() {
                let message = format!(
                    "Added {} {} on {}",
                    expense.category,
                    app.money(expense.amount),
                    expense.date
                );
                app.close_dialog();
                app.set_status(message);
            }
        }
        ActiveDialog::AddCategory => {
            if let Ok(category) = app.state.submit_category_draft() {
                app.close_dialog();
                app.set_status(format!("Category '{}' created", category.name));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::state::TrackerState;
    use chrono::NaiveDate;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_expense_form_by_keyboard() {
        let settings = Settings::default();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut app = App::new(&settings, TrackerState::new(&settings, today));
        app.open_dialog(ActiveDialog::AddExpense);

        // Groceries is the fourth seed category
        for _ in 0..4 {
            handle_key(&mut app, key(KeyCode::Right));
        }
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "12.50");
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.has_dialog());
        assert_eq!(app.state.expenses().len(), 1);
        let expense = &app.state.expenses()[0];
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(expense.date, today);
        assert_eq!(expense.paid_by, "Eamon");
    }

    #[test]
    fn test_incomplete_form_stays_open_with_error() {
        let settings = Settings::default();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut app = App::new(&settings, TrackerState::new(&settings, today));
        app.open_dialog(ActiveDialog::AddExpense);

        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert!(app.state.expenses().is_empty());
        assert_eq!(
            app.active_draft().and_then(|d| d.error()),
            Some("All fields are required")
        );

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.has_dialog());
    }
}
