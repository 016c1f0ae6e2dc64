//! Overview view
//!
//! A progress bar per category showing spend against its monthly budget for
//! the active range, followed by totals and spend per payer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::services::CategoryBudgetSummary;
use crate::tui::app::App;
use crate::tui::layout::OverviewLayout;

/// Render the overview
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = OverviewLayout::new(area);

    super::render_filter_header(frame, app, layout.header, "Categories Stat");
    render_category_gauges(frame, app, layout.categories);
    render_totals(frame, app, layout.footer);
}

fn render_category_gauges(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let data = app.state.budget_data();
    if data.is_empty() {
        frame.render_widget(
            Paragraph::new("No categories. Add one from the Settings tab.")
                .style(Style::default().fg(Color::Yellow)),
            inner,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            data.iter()
                .map(|_| Constraint::Length(3))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

    for (summary, row) in data.iter().zip(rows.iter()) {
        render_category_row(frame, app, summary, *row);
    }
}

fn render_category_row(frame: &mut Frame, app: &App, summary: &CategoryBudgetSummary, area: Rect) {
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name and percentage
            Constraint::Length(1), // Bar
            Constraint::Length(1), // Spent / budget
        ])
        .split(area);

    let pct_style = if summary.is_over_budget() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let label = summary.category.label();
    let pct = summary.percentage_label();
    let padding = (area.width as usize)
        .saturating_sub(label.chars().count() + pct.len() + 1)
        .max(1);
    let header = Line::from(vec![
        Span::styled(label, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(padding)),
        Span::styled(pct, pct_style),
    ]);
    frame.render_widget(Paragraph::new(header), lines[0]);

    let bar_color = summary
        .category
        .rgb()
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Blue);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(bar_color).bg(Color::DarkGray))
        .ratio(summary.bar_ratio())
        .label("");
    frame.render_widget(gauge, lines[1]);

    let amounts = format!(
        "{} / {}",
        app.money(summary.spent),
        app.money(summary.category.budget)
    );
    frame.render_widget(
        Paragraph::new(amounts).style(Style::default().fg(Color::Gray)),
        lines[2],
    );
}

fn render_totals(frame: &mut Frame, app: &App, area: Rect) {
    let service = app.state.budget_service();
    let totals = service.overview_totals();

    let block = Block::default()
        .title(" Totals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let total_style = if totals.spent > totals.budget {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let total_line = Line::from(vec![
        Span::styled("Spent: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(
                "{} / {} ({:.2}%)",
                app.money(totals.spent),
                app.money(totals.budget),
                totals.percentage
            ),
            total_style,
        ),
    ]);

    let mut payer_spans = vec![Span::styled("By payer: ", Style::default().fg(Color::Yellow))];
    let payers = service.spending_by_payer();
    if payers.is_empty() {
        payer_spans.push(Span::styled("—", Style::default().fg(Color::DarkGray)));
    }
    for (i, payer) in payers.iter().enumerate() {
        if i > 0 {
            payer_spans.push(Span::raw("  │  "));
        }
        payer_spans.push(Span::styled(
            format!("{} {}", payer.payer, app.money(payer.spent)),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(vec![total_line, Line::from(payer_spans)]).block(block);
    frame.render_widget(paragraph, area);
}
