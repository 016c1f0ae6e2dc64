//! Dialog modules for the TUI
//!
//! Contains modal dialogs for data entry and help

pub mod form;
pub mod help;
pub mod prompt;
