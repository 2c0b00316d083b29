//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`EditorError`] which covers every failure mode of the
//! working-set store, the reconciliation engine and the GitHub transport. It uses
//! `thiserror` for the definitions and provides named constructors for the
//! variants that carry context.
//!
//! # Public API
//! - [`EditorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, EditorError>`
//!
//! # Error Categories
//! - **Configuration**: repository identity missing, token missing (read-only)
//! - **Remote**: HTTP transport failures, API rejections, non-fast-forward conflicts
//! - **Working set**: unknown entries, invalid or colliding paths, unloaded content
//! - **Persistence**: reading, parsing and writing the stored working set

use std::path::PathBuf;
use thiserror::Error;

/// Message fragment GitHub uses when a reference update would lose commits.
const NON_FAST_FORWARD_MARKER: &str = "not a fast-forward";

/// Domain-specific error types for ghedit
#[derive(Error, Debug)]
pub enum EditorError {
    // Configuration errors
    #[error("Repository is not configured. Run 'ghedit config set-repo <owner>/<repo>' first.")]
    NotConfigured,

    #[error("Read-only mode: set an access token with 'ghedit config set-token <token>' to publish changes")]
    ReadOnly,

    #[error("Configuration error: {message}")]
    Config { message: String },

    // Remote errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Branch moved upstream: {message}")]
    NonFastForward { message: String },

    #[error("Failed to fetch '{path}': {message}")]
    FetchFailed { path: String, message: String },

    // Working set errors
    #[error("No entry with id {id}")]
    EntryNotFound { id: u64 },

    #[error("Path is not tracked: {path}")]
    PathNotFound { path: String },

    #[error("Path already exists: {path}")]
    PathExists { path: String },

    #[error("Invalid path: '{path}'")]
    InvalidPath { path: String },

    #[error("Not a file: {path}")]
    NotABlob { path: String },

    #[error("Content of '{path}' has not been loaded")]
    UnloadedContent { path: String },

    #[error("{count} file(s) have local changes. Commit or revert them first, or pass --force.")]
    DirtyWorkingSet { count: usize },

    // Persistence errors
    #[error("Failed to create state directory '{path}': {source}")]
    StateDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize working set: {source}")]
    StateSerializationFailed { source: serde_json::Error },

    #[error("Failed to write state file '{path}': {source}")]
    StateWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read state file '{path}': {source}")]
    StateReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    StateParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Convenience type alias for Results using EditorError
pub type Result<T> = std::result::Result<T, EditorError>;

impl EditorError {
    /// Classify a failed API response.
    ///
    /// A rejection whose message says the update is not a fast-forward becomes
    /// [`EditorError::NonFastForward`]; everything else stays a plain remote error.
    pub fn from_remote(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains(NON_FAST_FORWARD_MARKER) {
            Self::NonFastForward { message }
        } else {
            Self::Remote { status, message }
        }
    }

    /// True when the error is the conflict that triggers a resync-and-retry
    pub fn is_non_fast_forward(&self) -> bool {
        matches!(self, Self::NonFastForward { .. })
    }

    /// Create a configuration error with a specific message
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a fetch failed error
    pub fn fetch_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn entry_not_found(id: u64) -> Self {
        Self::EntryNotFound { id }
    }

    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    pub fn path_exists(path: impl Into<String>) -> Self {
        Self::PathExists { path: path.into() }
    }

    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    pub fn not_a_blob(path: impl Into<String>) -> Self {
        Self::NotABlob { path: path.into() }
    }

    pub fn unloaded_content(path: impl Into<String>) -> Self {
        Self::UnloadedContent { path: path.into() }
    }

    /// Create a state directory creation failed error
    pub fn state_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StateDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn state_serialization_failed(source: serde_json::Error) -> Self {
        Self::StateSerializationFailed { source }
    }

    pub fn state_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn state_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn state_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StateParseFailed {
            path: path.into(),
            source,
        }
    }
}
