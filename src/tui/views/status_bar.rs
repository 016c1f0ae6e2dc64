//! Status bar view
//!
//! Shows the active filter, total spend and the latest status message

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let totals = app.state.budget_service().overview_totals();

    let mut spans = vec![];

    spans.push(Span::styled(
        format!(" {}", app.state.filter().label()),
        Style::default().fg(Color::Cyan),
    ));

    spans.push(Span::raw(" │ "));

    let spent_color = if totals.spent > totals.budget {
        Color::Red
    } else {
        Color::Green
    };
    spans.push(Span::styled("Spent: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        app.money(totals.spent),
        Style::default()
            .fg(spent_color)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  a:Add ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
