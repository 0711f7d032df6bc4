//! Error types for loccountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during LOC counting
#[derive(Error, Debug)]
pub enum LocError {
    /// The file could not be opened or read (missing, permission denied,
    /// or not a regular file)
    #[error("failed to read file '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Directory traversal error
    #[error("failed to walk directory: {0}")]
    Walk(String),
}

impl LocError {
    /// Wrap an I/O error raised while accessing `path`.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LocError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
