//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Largest number of decimal places accepted for table output.
pub const MAX_PRECISION: usize = 12;

const ENV_LOG_LEVEL: &str = "XWIND_LOG_LEVEL";
const ENV_FORMAT: &str = "XWIND_FORMAT";
const ENV_PRECISION: &str = "XWIND_PRECISION";
const ENV_WARN_ON_CLAMP: &str = "XWIND_WARN_ON_CLAMP";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid precision: {0}. Must be at most 12")]
    InvalidPrecision(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
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

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
    /// Decimal places in table output
    pub precision: usize,
    /// Log a warning when a query is clamped into a table domain
    pub warn_on_clamp: bool,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
            precision: 4,
            warn_on_clamp: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(log_level) = std::env::var(ENV_LOG_LEVEL) {
            config.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Ok(format) = std::env::var(ENV_FORMAT) {
            config.format = OutputFormat::from_str(&format)?;
        }

        if let Ok(precision) = std::env::var(ENV_PRECISION) {
            config.precision = precision.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not a number", ENV_PRECISION, precision))
            })?;
        }

        if let Ok(warn) = std::env::var(ENV_WARN_ON_CLAMP) {
            config.warn_on_clamp = parse_bool(&warn).ok_or_else(|| {
                ConfigError::EnvError(format!("{}={} is not a boolean", ENV_WARN_ON_CLAMP, warn))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        if cli.no_clamp_warnings {
            self.warn_on_clamp = false;
        }

        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Precision override
    pub precision: Option<usize>,
    /// Suppress clamp warnings
    pub no_clamp_warnings: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    // Only variables that are set override the file
    let env_config = CliConfig::from_env()?;
    if std::env::var(ENV_LOG_LEVEL).is_ok() {
        config.log_level = env_config.log_level;
    }
    if std::env::var(ENV_FORMAT).is_ok() {
        config.format = env_config.format;
    }
    if std::env::var(ENV_PRECISION).is_ok() {
        config.precision = env_config.precision;
    }
    if std::env::var(ENV_WARN_ON_CLAMP).is_ok() {
        config.warn_on_clamp = env_config.warn_on_clamp;
    }

    config.merge_with_cli(cli)?;

    config.validate()?;

    Ok(config)
}
