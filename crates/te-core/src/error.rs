//! Error types for the core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while loading or writing the config.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading or writing the config file failed.
    #[error("cannot access config {path}: {source}")]
    Io {
        /// The config file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid JSON for the expected schema.
    #[error("malformed config {path}: {source}")]
    Json {
        /// The config file path.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// The config parsed but describes an unusable stat table.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
