//! CLI error types

use thiserror::Error;
use xwind_asce722::CoefficientError;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Calculation error: {0}")]
    Coefficient(#[from] CoefficientError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("{0} embedded table(s) failed validation")]
    TableCheck(usize),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
