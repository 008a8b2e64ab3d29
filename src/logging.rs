//! Tracing setup
//!
//! The TUI owns the terminal, so log output goes to a file instead of stderr.

use crate::config::LoggingConfig;
use crate::error::{CalcError, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where logs go when the config names no file
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("calctty")
        .join("calctty.log")
}

/// Install the global subscriber.
///
/// Filter precedence: `override_filter` (from the command line), then
/// `RUST_LOG`, then the configured level. Returns the log file path.
pub fn init(config: &LoggingConfig, override_filter: Option<&str>) -> Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = match override_filter {
        Some(directive) => EnvFilter::try_new(directive),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level)),
    }
    .map_err(|e| CalcError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CalcError::Logging(e.to_string()))?;

    Ok(path)
}
