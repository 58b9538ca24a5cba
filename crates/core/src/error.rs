//! Error types for the parahash CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, truncation, encoding and
//! config-file parsing. Command-line usage errors never get here; clap
//! reports them before any of this runs.

use thiserror::Error;

/// Unified error type for the parahash CLI.
///
/// All fallible functions return `Result<T, AppError>`; `main` is the only
/// place an error becomes an exit status.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A title length asks for more than the encoded digest holds
    #[error("Truncation error: cannot take {limit} {unit} from a title of {available} {unit}")]
    Truncation {
        limit: usize,
        available: usize,
        unit: &'static str,
    },

    /// Digest encoding errors
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
