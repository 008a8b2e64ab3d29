//! Error types for calctty
//!
//! Dividing by zero is not an error here: it is a display state handled by the
//! controller. [`CalcError`] covers the infrastructure around the calculator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for calctty operations.
pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    /// Failed to read the configuration file.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::config::Config`].
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A headless key sequence named a key that is not on the keypad.
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// Could not install the log subscriber.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Terminal or file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
