//! Configuration handling for style-hooks.
//!
//! This module provides configuration loading and validation, supporting
//! both `style-hooks.toml` files and sensible defaults. The defaults match
//! the classic behavior: both hooks enabled, `gofmt` resolved from PATH,
//! 4-space Python indentation, no path restrictions.

use crate::core::changes::PathFilter;
use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "style-hooks.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// gofmt hook settings.
    pub gofmt: GofmtConfig,
    /// pyindent hook settings.
    pub pyindent: PyindentConfig,
    /// Path filtering settings.
    pub files: FilesConfig,
}

impl Config {
    /// Loads configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::find_config_file()?;
        Self::load_from(&path)
    }

    /// Loads configuration or returns defaults if not found.
    pub fn load_or_default() -> Result<Self> {
        match Self::find_config_file() {
            Ok(path) => Self::load_from(&path),
            Err(Error::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io("read config", e))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config_parse_with_source("Failed to parse TOML", e))?;

        config.validate()?;

        Ok(config)
    }

    /// Finds the configuration file by searching up the directory tree.
    pub fn find_config_file() -> Result<PathBuf> {
        let cwd = std::env::current_dir().map_err(|e| Error::io("get current dir", e))?;

        let mut current = cwd.as_path();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::ConfigNotFound {
            path: cwd.join(CONFIG_FILE_NAME),
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.gofmt.program.trim().is_empty() {
            return Err(Error::config_invalid(
                "gofmt.program",
                "must not be empty",
            ));
        }

        if self.pyindent.indent == 0 {
            return Err(Error::config_invalid(
                "pyindent.indent",
                "must be greater than zero",
            ));
        }

        // Compile the globs once to surface bad patterns at load time
        self.filter().map(|_| ())
    }

    /// Builds the configured path filter.
    pub fn filter(&self) -> Result<PathFilter> {
        PathFilter::new(&self.files.patterns)
    }

    /// Generates default configuration as a string.
    #[must_use]
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// gofmt hook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GofmtConfig {
    /// Whether the gofmt hook runs.
    pub enabled: bool,
    /// Formatter program name or path.
    pub program: String,
}

impl Default for GofmtConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: crate::checks::gofmt::GOFMT_PROGRAM.to_string(),
        }
    }
}

/// pyindent hook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PyindentConfig {
    /// Whether the pyindent hook runs.
    pub enabled: bool,
    /// Indent width the analyzer normalizes to.
    pub indent: usize,
}

impl Default for PyindentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            indent: 4,
        }
    }
}

/// Path filtering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilesConfig {
    /// Glob patterns limiting which staged paths are checked.
    /// Empty means everything.
    pub patterns: Vec<String>,
}
