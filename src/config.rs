//! User configuration
//!
//! Read from `<config dir>/calctty/config.toml`. Every field has a default,
//! so a missing file or a partial file is fine:
//!
//! ```toml
//! [input]
//! max_length = 7
//!
//! [ui]
//! title = "Calculator"
//!
//! [logging]
//! level = "info"
//! file = "/tmp/calctty.log"
//! ```

use crate::controller::DEFAULT_MAX_INPUT_LEN;
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Characters accepted in the display before further input is ignored
    pub max_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Calculator".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, e.g. `info` or `calctty=debug`
    pub level: String,
    /// Log file; defaults to `<cache dir>/calctty/calctty.log`
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calctty").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the default config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| CalcError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| CalcError::ConfigParse {
            path: path.clone(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<()> {
        // Room for at least "0." so a leading decimal point can be typed
        if self.input.max_length < 2 {
            return Err(CalcError::InvalidConfig(format!(
                "input.max_length must be at least 2, got {}",
                self.input.max_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.input.max_length, 7);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[input]\nmax_length = 12\n\n[ui]\ntitle = \"Desk\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.input.max_length, 12);
        assert_eq!(config.ui.title, "Desk");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_bad_toml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[input\nmax_length = ").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CalcError::ConfigParse { .. }));
    }

    #[test]
    fn test_tiny_cap_is_rejected() {
        let config = Config::parse("[input]\nmax_length = 1").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::InvalidConfig(_))
        ));
    }
}
