//! Fixture tooling configuration.
//!
//! # Responsibility
//! - Load optional TOML settings for locale coverage and output location.
//! - Validate settings before any fixture work starts.
//!
//! # Invariants
//! - A loaded config always yields a valid `SupportedLocales` set.
//!
//! Example `fixtures.toml`:
//!
//! ```toml
//! supported_locales = ["en", "fr"]
//! out_dir = "build/fixtures"
//! log_level = "info"
//! ```

use crate::model::locale::{LocaleError, SupportedLocales, DEFAULT_SUPPORTED_LOCALES};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixture tooling settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    /// Locales every translated field must cover.
    pub supported_locales: Vec<String>,
    /// Directory generated fixture modules are written to.
    pub out_dir: PathBuf,
    /// Log level override; `None` uses the build-mode default.
    pub log_level: Option<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            supported_locales: DEFAULT_SUPPORTED_LOCALES
                .iter()
                .map(|locale| locale.to_string())
                .collect(),
            out_dir: PathBuf::from("."),
            log_level: None,
        }
    }
}

impl FixtureConfig {
    /// Parses and validates TOML text. Missing keys use defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: FixtureConfig = toml::from_str(text).map_err(ConfigError::Parse)?;
        config.supported_locales()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns the validated supported-locale set.
    pub fn supported_locales(&self) -> Result<SupportedLocales, ConfigError> {
        SupportedLocales::new(&self.supported_locales).map_err(ConfigError::Locales)
    }
}

/// Configuration load/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Locales(LocaleError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Locales(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Locales(err) => Some(err),
        }
    }
}
