//! # Centralized Error Handling
//!
//! Unified error types for the crate using `thiserror`.
//!
//! A malformed row inside an epoch table is deliberately absent here: it is
//! how a table ends, and the scanner reports it as `None` rather than as an
//! error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for log summarisation
#[derive(Error, Debug)]
pub enum SummaryError {
    /// I/O errors (unreadable log, unwritable output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The `--log` path does not exist or is not a file
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// No line of the log carried the `logLR` marker
    #[error("required marker line not found: no line contains `logLR`")]
    MissingLikelihoodRatio,

    /// The retained `logLR` token is not a floating-point literal
    #[error("Parse error at line {line}: log-likelihood ratio `{token}` is not a number")]
    NonNumericLikelihoodRatio { line: usize, token: String },

    /// Distribution construction failures
    #[error("Statistics error: {message}")]
    Statistics { message: String },

    /// JSON encoding failures
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors (invalid CLI arguments)
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Type alias for Results using SummaryError
pub type Result<T> = std::result::Result<T, SummaryError>;

impl SummaryError {
    /// Create a statistics error with a message
    pub fn statistics(message: impl Into<String>) -> Self {
        Self::Statistics {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a non-numeric ratio error for the given 1-based line
    pub fn non_numeric_ratio(line: usize, token: impl Into<String>) -> Self {
        Self::NonNumericLikelihoodRatio {
            line,
            token: token.into(),
        }
    }
}
