// src/error.rs

//! Error types for manual-dupes

use thiserror::Error;

/// Errors raised while querying the package manager or setting up a scan
#[derive(Error, Debug)]
pub enum Error {
    #[error("Query '{program}' failed: {message}")]
    QueryFailed { program: String, message: String },

    #[error("Query '{program}' timed out after {seconds} seconds")]
    QueryTimeout { program: String, seconds: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No supported package manager found: {0}")]
    NoBackend(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for manual-dupes operations
pub type Result<T> = std::result::Result<T, Error>;
