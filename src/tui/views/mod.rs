//! TUI Views module
//!
//! One view per tab (expenses, overview, settings) plus the tab bar, the
//! shared date-filter header and the status bar.

pub mod expenses;
pub mod overview;
pub mod settings;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::models::DateFilter;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_tab {
        ActiveTab::Expenses => expenses::render(frame, app, layout.main),
        ActiveTab::Overview => overview::render(frame, app, layout.main),
        ActiveTab::Settings => settings::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles = ActiveTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!(" {} {} ", i + 1, tab.label()))
        .collect::<Vec<String>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" P&L Tracker ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.active_tab.index());

    frame.render_widget(tabs, area);
}

/// Render the date filter selector shared by the expenses and overview tabs
pub fn render_filter_header(frame: &mut Frame, app: &App, area: Rect, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let filter = app.state.filter();
    let range = app.state.range();

    let mut spans = vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(filter.label(), Style::default().fg(Color::White)),
        Span::styled(" ▶  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            range.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled("[f/F] Filter  ", Style::default().fg(Color::Yellow)),
    ];

    if filter == DateFilter::Custom {
        spans.push(Span::styled(
            "[[ / ]] From/To",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AddExpense | ActiveDialog::AddCategory => dialogs::form::render(frame, app),
        ActiveDialog::Prompt(_) => dialogs::prompt::render(frame, app),
        ActiveDialog::None => {}
    }
}
