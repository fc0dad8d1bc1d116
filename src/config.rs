use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub browser: BrowserConfig,
    pub progress: ProgressConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Rows shown per page
    pub items_per_page: usize,
    /// Show hidden entries in the interactive listing
    pub show_hidden: bool,
    /// Ask before deleting an entry
    pub confirm_delete: bool,
    /// Colorize the table
    pub color: bool,
    /// Requested terminal width in columns (applied with `terminal_height`)
    pub terminal_width: Option<u16>,
    /// Requested terminal height in rows
    pub terminal_height: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Show a spinner while sizes are computed
    pub enabled: bool,
    /// Spinner repaint interval in milliseconds
    pub tick_interval_ms: u64,
    /// How long to wait for the spinner thread on shutdown
    pub join_timeout_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            items_per_page: 20,
            show_hidden: true,
            confirm_delete: true,
            color: true,
            terminal_width: None,
            terminal_height: None,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_ms: 100,
            join_timeout_ms: 1000,
        }
    }
}

impl ProgressConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn join_timeout(&self) -> Duration {
        Duration::from_millis(self.join_timeout_ms)
    }
}

impl BrowserConfig {
    /// Terminal size to request, only when both dimensions are configured.
    pub fn terminal_size(&self) -> Option<(u16, u16)> {
        self.terminal_width.zip(self.terminal_height)
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/diskman/config.toml` (or platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("diskman").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is read
    /// if present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config = Self::from_toml(&content).map_err(|source| ConfigError::ParseError {
            path: path.clone(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.browser.items_per_page == 0 {
            return Err(ConfigError::Invalid(
                "browser.items_per_page must be at least 1".into(),
            ));
        }
        if self.progress.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "progress.tick_interval_ms must be at least 1".into(),
            ));
        }
        if self.progress.join_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "progress.join_timeout_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
