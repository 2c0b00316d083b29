//! ghedit - edit a GitHub repository locally and publish changes as one commit.
//!
//! The library tracks a working set of files and directories fetched from one
//! repository branch, records local edits, reconciles them with upstream when
//! upstream moves, and publishes the accumulated changes as a single commit.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`FileStore`] / [`StoreHandle`]: the local file-state store
//! - [`RemoteEngine`]: tree loading, lazy content fetch, reconciliation, commit
//! - [`Remote`] / [`GitHubClient`]: the upstream API boundary and its GitHub implementation
//! - [`EditorError`] / [`Result`]: error handling

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    CommitAuthor,
    CommitReceipt,
    EditorConfig,
    // Error handling
    EditorError,
    EntryKind,
    // Working set
    FileEntry,
    FileId,
    FileStatus,
    FileStore,
    GitHubClient,
    Persistence,
    RefHead,
    // Upstream
    Remote,
    RemoteEngine,
    Result,
    Selection,
    StoreHandle,
    SyncOutcome,
    SyncReport,
    TreeItem,
    TreeUpdate,
    Workspace,
};
