//! Error types for the directory site generator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning, rendering or writing the generated documents.
///
/// Filesystem failures are transparent: the caller sees the underlying message
/// exactly as the operating system reported it.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for GenerateError {
    fn from(err: config::ConfigError) -> Self {
        GenerateError::Config(err.to_string())
    }
}
