//! P&L Tracker - a terminal budgeting dashboard
//!
//! Tracks household expenses against monthly per-category budgets. Expenses
//! are recorded through schema-driven forms, filtered by a named or custom
//! date range, and summarised per category as spend and percentage of budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings file and tracing setup
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, date filters)
//! - `services`: Date-range resolution and budget aggregation
//! - `forms`: Field schemas and draft buffers for the entry forms
//! - `state`: The session state and its mutation entry points
//! - `cli`, `display`: Command handlers and text tables
//! - `tui`: The interactive interface
//!
//! # Example
//!
//! ```rust,ignore
//! use pnl_tracker::config::{Settings, TrackerPaths};
//! use pnl_tracker::state::TrackerState;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut state = TrackerState::from_settings(&settings);
//! state.select_filter_key("lastMonth");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod state;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
pub use state::TrackerState;
