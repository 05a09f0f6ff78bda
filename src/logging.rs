//! Tracing subscriber setup
//!
//! Logs go to a file in the base directory rather than stderr, since the TUI
//! owns the terminal while it runs.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};

/// Build the filter: `RUST_LOG` if set, otherwise `level` for this crate only
pub fn build_filter(level: LevelFilter) -> EnvFilter {
    match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            "expenses",
            level
        )),
    }
}

/// Initializes the tracing subscriber, appending to the log file
///
/// Does nothing when `level` is `off` and `RUST_LOG` is unset, so
/// `--log-level off` creates no log file. Any other level (including the
/// default `warn`) appends to `expenses.log`.
pub fn init_logger(paths: &TrackerPaths, level: LevelFilter) -> TrackerResult<()> {
    if level == LevelFilter::OFF && std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    paths.ensure_directories()?;
    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            TrackerError::Io(format!("Failed to open log file {}: {}", log_path.display(), e))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TrackerError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_off_level_creates_no_file() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        init_logger(&paths, LevelFilter::OFF).unwrap();
        assert!(!paths.log_file().exists());
    }

    #[test]
    fn test_filter_names_crate() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(LevelFilter::DEBUG).to_string();
        assert!(filter.contains("expense_tracker=debug"));
    }
}
