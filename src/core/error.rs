//! Error types for the ambient surface of git-commit-rows.
//!
//! The row formatting core never fails: unknown statuses, actions and template
//! tokens all degrade to defaults. [`CommitRowsError`] only covers the pieces
//! around it that touch the outside world, namely configuration loading and
//! reading commit snapshots for the bundled CLI.
//!
//! # Public API
//! - [`CommitRowsError`]: Main error enum
//! - [`Result<T>`]: Type alias for `std::result::Result<T, CommitRowsError>`

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-commit-rows
#[derive(Error, Debug)]
pub enum CommitRowsError {
    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Commit snapshot errors
    #[error("Failed to read commit input '{path}': {source}")]
    InputReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse commit input '{path}': {source}. Expected a JSON array of commits.")]
    InputParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using CommitRowsError
pub type Result<T> = std::result::Result<T, CommitRowsError>;

impl CommitRowsError {
    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an input read failed error
    pub fn input_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an input parse failed error
    pub fn input_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InputParseFailed {
            path: path.into(),
            source,
        }
    }
}
