//! Error types for the ledger.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors that can occur while reading or writing ledger files.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The user id cannot be used as a file name.
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),

    /// Reading or writing a ledger file failed.
    #[error("cannot access ledger {path}: {source}")]
    Io {
        /// The ledger file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Serializing a ledger document failed.
    #[error("cannot encode ledger {path}: {source}")]
    Encode {
        /// The ledger file path.
        path: PathBuf,
        /// The underlying serializer error.
        source: serde_json::Error,
    },

    /// A day key is not a `YYYY-MM-DD` date.
    #[error("invalid day key: {0}")]
    InvalidDay(String),
}
