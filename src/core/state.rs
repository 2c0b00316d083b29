//! Working-set data structures.
//!
//! This module defines the entries tracked by the local file-state store and
//! the snapshot that is persisted between runs.
//!
//! # Public API
//! - [`FileEntry`]: one blob or tree node with its local edit status
//! - [`Selection`]: the persisted current-file and focused-item paths
//! - [`PersistedState`]: complete working-set snapshot with timing information
//!
//! # Persistence Strategy
//! - **JSON serialization**: human-readable state files for debugging
//! - **Timestamping**: track when the working set was last written
//! - **Repository isolation**: one state directory per repository identity
//! - **Transient flags**: `is_loading` is never written

use crate::core::file_status::{EntryKind, FileStatus};
use crate::core::path::{file_name, normalize_path};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Stable local identifier of an entry
pub type FileId = u64;

/// Placeholder shown as content while a blob is being fetched
pub const LOADING_PLACEHOLDER: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: FileId,
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    /// Last-known upstream blob hash, empty for entries never pushed
    #[serde(default)]
    pub remote_hash: String,
    /// `None` until loaded, and always `None` for trees
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub original_content: Option<String>,
    #[serde(default)]
    pub status: FileStatus,
    #[serde(default)]
    pub is_dirty: bool,
    #[serde(skip)]
    pub is_loading: bool,
}

impl FileEntry {
    /// Entry as it appears after an upstream tree fetch
    pub fn upstream(
        id: FileId,
        path: &str,
        kind: EntryKind,
        remote_hash: impl Into<String>,
    ) -> Self {
        let path = normalize_path(path);
        Self {
            id,
            name: file_name(&path).to_string(),
            path,
            kind,
            remote_hash: remote_hash.into(),
            content: None,
            original_content: None,
            status: FileStatus::Unmodified,
            is_dirty: false,
            is_loading: false,
        }
    }

    /// Entry created locally
    pub fn created(id: FileId, path: &str, kind: EntryKind, content: Option<String>) -> Self {
        let mut entry = Self::upstream(id, path, kind, String::new());
        entry.content = match kind {
            EntryKind::Blob => Some(content.unwrap_or_default()),
            EntryKind::Tree => None,
        };
        entry.status = FileStatus::New;
        entry.is_dirty = true;
        entry
    }

    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }

    pub fn is_tree(&self) -> bool {
        self.kind == EntryKind::Tree
    }

    /// Derived from `status`; there is no separate flag to disagree with it
    pub fn is_deleted(&self) -> bool {
        self.status == FileStatus::Deleted
    }

    pub fn is_new(&self) -> bool {
        self.status == FileStatus::New
    }

    /// True once real content is present (not the loading placeholder)
    pub fn has_content(&self) -> bool {
        self.content.is_some() && !self.is_loading
    }

    /// Return to the upstream-matching state
    pub(crate) fn mark_unmodified(&mut self) {
        self.original_content = None;
        self.status = FileStatus::Unmodified;
        self.is_dirty = false;
    }

    pub(crate) fn mark(&mut self, status: FileStatus) {
        self.status = status;
        self.is_dirty = status.is_changed();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub current_file: Option<String>,
    pub focused_item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub repository: String,
    pub files: Vec<FileEntry>,
    /// Highest id ever issued, so removed ids are not handed out again
    #[serde(default)]
    pub last_issued_id: FileId,
    pub last_updated: SystemTime,
}

impl PersistedState {
    pub fn new(repository: impl Into<String>, files: Vec<FileEntry>, last_issued_id: FileId) -> Self {
        Self {
            repository: repository.into(),
            files,
            last_issued_id,
            last_updated: SystemTime::now(),
        }
    }
}
