//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitmuxError`] which covers every failure mode of the
//! status collection and configuration layers. It uses `thiserror` for ergonomic
//! error definitions and includes constructors for the errors carrying context.
//!
//! # Public API
//! - [`GitmuxError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitmuxError>`
//!
//! # Error Categories
//! - **Git operations**: Repository not found, git2 library errors, timeouts
//! - **Configuration**: Unreadable config file, invalid YAML or option values
//! - **Output**: I/O errors from the output sink, JSON serialization

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Domain-specific error types for gitmux
#[derive(Error, Debug)]
pub enum GitmuxError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Status collection timed out after {0:?}")]
    Timeout(Duration),

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration in {origin}: {source}")]
    ConfigParse {
        origin: String,
        source: serde_yaml_ng::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitmuxError
pub type Result<T> = std::result::Result<T, GitmuxError>;

impl GitmuxError {
    /// Create a config read error for the given file
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse error, `origin` names where the YAML came from
    pub fn config_parse(origin: impl Into<String>, source: serde_yaml_ng::Error) -> Self {
        Self::ConfigParse {
            origin: origin.into(),
            source,
        }
    }
}
