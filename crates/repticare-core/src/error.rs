//! Error types for Repticare core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Repticare operations.
pub type Result<T> = std::result::Result<T, RepticareError>;

/// Core error type for Repticare operations.
#[derive(Debug, Error)]
pub enum RepticareError {
    /// Invalid input to a creation operation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup target does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored collection could not be parsed
    #[error("Stored {key} data is corrupt: {reason}")]
    PersistenceCorrupt { key: String, reason: String },

    /// Stored collection could not be read
    #[error("Failed to read stored {key}: {reason}")]
    PersistenceRead { key: String, reason: String },

    /// Underlying storage rejected a write
    #[error("Failed to save {key}: {reason}")]
    PersistenceWrite { key: String, reason: String },
}

impl RepticareError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RepticareError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepticareError::NotFound(_))
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, RepticareError::PersistenceCorrupt { .. })
    }

    /// Any failure of the persistence adapter (read, write or parse).
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            RepticareError::PersistenceCorrupt { .. }
                | RepticareError::PersistenceRead { .. }
                | RepticareError::PersistenceWrite { .. }
        )
    }
}
