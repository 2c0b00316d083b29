//! Core functionality for ghedit.
//!
//! This module provides the local file-state store, the reconciliation and
//! commit engine, the GitHub transport, and the supporting configuration,
//! persistence and output helpers.

pub mod colors;
pub mod commit;
pub mod config;
pub mod dirs;
pub mod engine;
pub mod error;
pub mod file_status;
pub mod github;
pub mod language;
pub mod output;
pub mod path;
pub mod persist;
pub mod reconcile;
pub mod remote;
pub mod state;
pub mod store;
pub mod workspace;

// === Error handling ===
pub use error::{EditorError, Result};

// === Working set ===
// Entry model, edit status and the store that owns them
pub use file_status::{EntryKind, FileStatus};
pub use state::{FileEntry, FileId, Selection};
pub use store::{FileStore, StoreHandle, SyncOutcome};

// === Upstream ===
// Transport boundary, GitHub implementation and the engine on top of it
pub use commit::CommitReceipt;
pub use engine::RemoteEngine;
pub use github::GitHubClient;
pub use reconcile::SyncReport;
pub use remote::{CommitAuthor, RefHead, Remote, TreeItem, TreeUpdate};

// === Configuration and persistence ===
pub use config::EditorConfig;
pub use persist::Persistence;
pub use workspace::Workspace;

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success, print_warning};
