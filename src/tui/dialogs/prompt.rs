//! Single-value prompt dialog
//!
//! Edits one value in place: a category's budget or name, or one bound of
//! the custom date range.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::parse_date;
use crate::tui::app::{ActiveDialog, App, PromptKind};
use crate::tui::layout::centered_rect_fixed;

impl PromptKind {
    fn title(&self) -> &'static str {
        match self {
            Self::EditBudget(_) => " Edit Budget ",
            Self::RenameCategory(_) => " Rename Category ",
            Self::RangeFrom => " Range Start ",
            Self::RangeTo => " Range End ",
        }
    }

    fn input_label(&self) -> &'static str {
        match self {
            Self::EditBudget(_) => "Monthly budget:",
            Self::RenameCategory(_) => "New name:",
            Self::RangeFrom | Self::RangeTo => "Date (YYYY-MM-DD, empty to clear):",
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Self::EditBudget(_) => c.is_ascii_digit() || c == '.',
            Self::RenameCategory(_) => !c.is_control(),
            Self::RangeFrom | Self::RangeTo => c.is_ascii_digit() || c == '-',
        }
    }
}

/// Render the open prompt
pub fn render(frame: &mut Frame, app: &App) {
    let ActiveDialog::Prompt(kind) = &app.active_dialog else {
        return;
    };

    let area = centered_rect_fixed(50, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(kind.title())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Context
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let context = match kind {
        PromptKind::EditBudget(name) | PromptKind::RenameCategory(name) => {
            let label = app
                .state
                .category(name)
                .map(|c| c.label())
                .unwrap_or_else(|| name.clone());
            Line::from(vec![
                Span::styled("Category: ", Style::default().fg(Color::Yellow)),
                Span::styled(label, Style::default().fg(Color::White)),
            ])
        }
        PromptKind::RangeFrom | PromptKind::RangeTo => Line::from(vec![
            Span::styled("Range: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                app.state.range().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
    };
    frame.render_widget(Paragraph::new(context), chunks[1]);

    let label = Line::from(Span::styled(
        kind.input_label(),
        Style::default().fg(Color::Cyan),
    ));
    frame.render_widget(Paragraph::new(label), chunks[3]);

    frame.render_widget(app.prompt_input.clone(), chunks[4]);

    if let Some(ref error) = app.prompt_error {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[6]);
}

/// Handle key events for the open prompt
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ActiveDialog::Prompt(kind) = app.active_dialog.clone() else {
        return false;
    };

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            match apply(app, &kind) {
                Ok(message) => {
                    app.close_dialog();
                    app.set_status(message);
                }
                Err(e) => app.prompt_error = Some(e),
            }
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.prompt_input.clear();
            app.prompt_error = None;
            true
        }

        KeyCode::Char(c) if kind.accepts(c) => {
            app.prompt_input.insert(c);
            app.prompt_error = None;
            true
        }

        KeyCode::Backspace => {
            app.prompt_input.backspace();
            app.prompt_error = None;
            true
        }

        KeyCode::Delete => {
            app.prompt_input.delete();
            true
        }

        KeyCode::Left => {
            app.prompt_input.move_left();
            true
        }

        KeyCode::Right => {
            app.prompt_input.move_right();
            true
        }

        _ => false,
    }
}

/// Apply the prompt value, returning a status message
fn apply(app: &mut App, kind: &PromptKind) -> Result<String, String> {
    let input = app.prompt_input.value().trim().to_string();

    match kind {
        PromptKind::EditBudget(name) => {
            let budget = app
                .state
                .set_budget_from_input(name, &input)
                .map_err(|e| e.to_string())?;
            Ok(format!("Budget for '{}' set to {}", name, app.money(budget)))
        }
        PromptKind::RenameCategory(name) => {
            let moved = app
                .state
                .rename_category(name, &input)
                .map_err(|e| e.to_string())?;
            Ok(format!(
                "Renamed '{}' to '{}' ({} expenses moved)",
                name, input, moved
            ))
        }
        PromptKind::RangeFrom | PromptKind::RangeTo => {
            let date = if input.is_empty() {
                None
            } else {
                Some(parse_date(&input).ok_or_else(|| format!("Invalid date '{}'", input))?)
            };

            if *kind == PromptKind::RangeFrom {
                app.state.set_custom_from(date);
            } else {
                app.state.set_custom_to(date);
            }
            app.selected_expense_index = 0;
            Ok(format!("Custom range: {}", app.state.range()))
        }
    }
}
