//! Calculator settings

use super::ConfigError;
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Origin prepended to share links when none is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";
/// Quiet period after the last keystroke before stats are recomputed
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;
/// Upper bound accepted for `display.debounce_ms`
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Top-level calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CalculatorConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::ValidationError(format!(
                "display.debounce_ms must be at most {} (got {})",
                MAX_DEBOUNCE_MS, self.display.debounce_ms
            )));
        }
        if self.share.origin.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "share.origin must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Scheme and host of share links, e.g. `https://stats.example`
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            origin: default_origin(),
        }
    }
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
    /// Milliseconds of quiet before recomputing
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            language: Language::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_file_enabled")]
    pub file_enabled: bool,
    /// Log directory; the platform cache directory is used when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
            file_enabled: default_file_enabled(),
            directory: None,
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
fn default_file_enabled() -> bool {
    true
}
fn default_file_prefix() -> String {
    "raid_stats.log".to_string()
}
