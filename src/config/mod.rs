//! Configuration module for the tracker
//!
//! This module provides configuration management including:
//! - Path resolution for the settings file and log
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
