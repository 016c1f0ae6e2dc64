//! Terminal User Interface module
//!
//! A tabbed TUI built on ratatui: an expense list, a per-category budget
//! overview and a settings tab for monthly budgets, with modal forms for
//! data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
