//! CLI configuration management
//!
//! Settings come from an optional TOML file and `IMPACT_ASIAN_*`
//! environment variables. Precedence: CLI flags > environment > file >
//! defaults. CLI flags are applied by the caller after [`CliConfig::load`].

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Default configuration file, read from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "impact-asian.toml";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "IMPACT_ASIAN_LOG_LEVEL";

/// Environment variable overriding the step limit.
pub const ENV_MAX_STEPS: &str = "IMPACT_ASIAN_MAX_STEPS";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Directive for the tracing `EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Case-insensitive inverse of [`LogLevel::as_filter_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_filter_str() == wanted)
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

/// Result output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON object on a single line
    Json,
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level for the stderr subscriber
    pub log_level: LogLevel,
    /// Step limit handed to the lattice pricers
    pub max_steps: usize,
    /// Output format for results
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            max_steps: pricer_pricing::lattice::DEFAULT_MAX_STEPS,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::FileError(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load the file at `path` and apply environment overrides.
    ///
    /// A missing file is only an error if `required` is set, i.e. the user
    /// named it explicitly.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let mut config = if required || path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `IMPACT_ASIAN_*` overrides resolved through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(steps) = lookup(ENV_MAX_STEPS) {
            self.max_steps = steps
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={}", ENV_MAX_STEPS, steps)))?;
        }

        Ok(())
    }
}
