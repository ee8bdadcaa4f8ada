//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use repticare_core::RepticareError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (reptile, config, etc.)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Stored data failed to parse
    CorruptData { message: String, hint: String },

    /// Storage read or write failed
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::CorruptData { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) | CliError::Storage(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::CorruptData { .. } => exit_codes::CORRUPT_DATA,
            CliError::Storage(_) => exit_codes::STORAGE_FAILED,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl From<RepticareError> for CliError {
    fn from(err: RepticareError) -> Self {
        match err {
            RepticareError::Validation(message) => CliError::InvalidInput(message),
            RepticareError::NotFound(message) => CliError::NotFound {
                message,
                hint: "Run `repticare reptile list` to see known reptiles.".to_string(),
            },
            err @ RepticareError::PersistenceCorrupt { .. } => CliError::CorruptData {
                message: err.to_string(),
                hint: "The file was left untouched. Fix or move it aside, then try again."
                    .to_string(),
            },
            err @ (RepticareError::PersistenceRead { .. }
            | RepticareError::PersistenceWrite { .. }) => CliError::Storage(err.to_string()),
        }
    }
}
