//! Tracing setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a
//! file in the config directory instead. `RUST_LOG` overrides the default
//! `pnl_tracker=info` filter.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "pnl_tracker=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a subscriber writing to stderr
pub fn init_stderr() {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Install a subscriber appending to the log file under `paths`
pub fn init_file(paths: &TrackerPaths) -> Result<(), TrackerError> {
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| TrackerError::Io(format!("Failed to open log file: {}", e)))?;

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });

    tracing::info!(log_file = %paths.log_file().display(), "TUI logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_stderr();
        init_stderr();
        tracing::debug!("still alive");
    }
}
