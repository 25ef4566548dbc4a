//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory, or at the path in
//! `SMARTHOME_CONFIG`. Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use std::str::FromStr;

use serde::Deserialize;
use smarthome_app::inventory::ValidationPolicy;

const DEFAULT_PATH: &str = "smarthome.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Inventory behaviour.
    pub inventory: InventoryConfig,
    /// How the showcase is printed.
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Reject entities that fail validation instead of logging a warning.
    pub strict_validation: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Showcase rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per operation.
    #[default]
    Text,
    /// A single JSON document with the lines and the final counters.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown output format {other:?}"
            ))),
        }
    }
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed, or if an
    /// override or the merged result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SMARTHOME_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(strict) = lookup("SMARTHOME_STRICT").as_deref().and_then(parse_flag) {
            self.inventory.strict_validation = strict;
        }
        if let Some(val) = lookup("SMARTHOME_FORMAT") {
            self.output.format = val.parse()?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validation policy for the inventory.
    #[must_use]
    pub fn validation_policy(&self) -> ValidationPolicy {
        if self.inventory.strict_validation {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthome=info,smarthome_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
