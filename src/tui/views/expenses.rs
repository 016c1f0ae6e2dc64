//! Expenses view
//!
//! The filter header above a table of the expenses inside the active range.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::DATE_FORMAT;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the expenses view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    super::render_filter_header(frame, app, layout.header, "Expense List");
    render_expense_table(frame, app, layout.content);
}

fn render_expense_table(frame: &mut Frame, app: &App, area: Rect) {
    let expenses = app.state.filtered_expenses();

    let block = Block::default()
        .title(format!(
            " {} of {} expenses ",
            expenses.len(),
            app.state.expenses().len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if expenses.is_empty() {
        let text = if app.state.expenses().is_empty() {
            "No expenses yet. Press 'a' to add one."
        } else {
            "No expenses in this date range."
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            let category = app
                .state
                .category(&expense.category)
                .map(|c| c.label())
                .unwrap_or_else(|| expense.category.clone());

            Row::new(vec![
                Cell::from(category),
                Cell::from(format!("{:>12}", expense.amount.format_plain())),
                Cell::from(expense.date.format(DATE_FORMAT).to_string()),
                Cell::from(expense.paid_by.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(24),    // Category
        Constraint::Length(14), // Amount
        Constraint::Length(12), // Date
        Constraint::Length(16), // Paid by
    ];

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from(format!(
            "{:>12}",
            format!("Amount ({})", app.settings.currency_code)
        )),
        Cell::from("Date"),
        Cell::from("Paid By"),
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
    state.select(Some(app.selected_expense_index.min(expenses.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
