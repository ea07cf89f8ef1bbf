//! Error types for the SwiftFlow highlighter

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for highlighter operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unknown token category: {0}")]
    UnknownCategory(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Tokenizer failed: {0}")]
    Tokenizer(String),

    #[error("{0}")]
    Message(String),
}

impl HighlightError {
    /// Wrap a TOML parse failure for the file at `path`
    pub fn config(path: impl Into<PathBuf>, err: toml::de::Error) -> Self {
        HighlightError::Config {
            path: path.into(),
            message: err.message().to_string(),
        }
    }
}
