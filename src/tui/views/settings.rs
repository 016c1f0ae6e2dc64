//! Settings view
//!
//! Monthly budgets per category, editable in place.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

/// Render the settings view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Category table
            Constraint::Length(3), // Hints
        ])
        .split(area);

    render_budget_table(frame, app, chunks[0]);
    render_hints(frame, chunks[1]);
}

fn render_budget_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let categories = app.state.categories();
    if categories.is_empty() {
        let text = Paragraph::new("No categories. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<Row> = categories
        .iter()
        .map(|category| {
            let swatch_color = category
                .rgb()
                .map(|(r, g, b)| Color::Rgb(r, g, b))
                .unwrap_or(Color::Reset);

            Row::new(vec![
                Cell::from(category.label()),
                Cell::from(format!(
                    "{:>10} {}",
                    category.budget.format_plain(),
                    app.settings.currency_code
                )),
                Cell::from(Line::from(vec![
                    Span::styled("██ ", Style::default().fg(swatch_color)),
                    Span::raw(category.color.clone()),
                ])),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(30),    // Category
        Constraint::Length(16), // Budget
        Constraint::Length(12), // Color
    ];

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from("Budget"),
        Cell::from("Color"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_category_index.min(categories.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[e/Enter] ", Style::default().fg(Color::Yellow)),
        Span::raw("Edit budget  "),
        Span::styled("[a] ", Style::default().fg(Color::Yellow)),
        Span::raw("Add category  "),
        Span::styled("[r] ", Style::default().fg(Color::Yellow)),
        Span::raw("Rename  "),
        Span::styled("[d] ", Style::default().fg(Color::Yellow)),
        Span::raw("Delete"),
    ]);

    frame.render_widget(
        Paragraph::new(hints).block(Block::default().borders(Borders::ALL)),
        area,
    );
}
