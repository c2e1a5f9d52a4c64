//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::seed::SeedError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Seed file error
    SeedError,
    /// I/O error (stdout)
    IoError,
    /// Server could not start or stopped abnormally
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SHOWCASE_CLI_CONFIG_ERROR",
            Self::SeedError => "SHOWCASE_CLI_SEED_ERROR",
            Self::IoError => "SHOWCASE_CLI_IO_ERROR",
            Self::BootFailed => "SHOWCASE_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SeedError> for CliError {
    fn from(e: SeedError) -> Self {
        Self::new(CliErrorCode::SeedError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
