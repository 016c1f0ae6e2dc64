//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveTab, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1/2/3", "Expenses / Overview / Settings"),
        key_line("Tab", "Next tab"),
        key_line("f/F", "Next/previous date filter"),
        key_line("[ / ]", "Set custom range start/end"),
        key_line("j/k", "Move selection down/up"),
        Line::from(""),
    ];

    match app.active_tab {
        ActiveTab::Expenses => {
            lines.push(section("Expenses"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add expense"));
        }
        ActiveTab::Overview => {
            lines.push(section("Overview"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Bars show spend against each monthly budget for the selected range.",
            ));
        }
        ActiveTab::Settings => {
            lines.push(section("Settings"));
            lines.push(Line::from(""));
            lines.push(key_line("e/Enter", "Edit budget"));
            lines.push(key_line("a", "Add category"));
            lines.push(key_line("r", "Rename category"));
            lines.push(key_line("d", "Delete unused category"));
        }
    }

    lines.push(Line::from(""));
    lines.push(section("Forms"));
    lines.push(Line::from(""));
    lines.push(key_line("Tab/S-Tab", "Next/previous field"));
    lines.push(key_line("←/→", "Choose option"));
    lines.push(key_line("Enter", "Submit"));
    lines.push(key_line("Esc", "Cancel"));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
