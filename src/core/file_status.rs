//! Type-safe local edit status of a working-set entry.
//!
//! # Public API
//! - [`FileStatus`]: edit status of one entry relative to its last-known upstream state
//! - [`EntryKind`]: blob (file) or tree (directory)
//!
//! # Key Features
//! - **Sorting logic**: built-in priority ordering for the modified set
//!   (`new` before `modified` before `deleted`)
//! - **Display formatting**: short badges and long descriptions for CLI output
//! - **Serde**: lowercase names, matching the persisted working-set format

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Matches the last-known upstream content
    #[default]
    Unmodified,
    /// Content diverges from upstream
    Modified,
    /// Created locally, never pushed
    New,
    /// Existed upstream, tombstoned locally
    Deleted,
}

impl FileStatus {
    /// Short badge used in listings
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Unmodified => " ",
            FileStatus::Modified => "M",
            FileStatus::New => "A",
            FileStatus::Deleted => "D",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FileStatus::Unmodified => "unmodified",
            FileStatus::Modified => "modified",
            FileStatus::New => "new file",
            FileStatus::Deleted => "deleted",
        }
    }

    /// Ordering of the modified set: new, then modified, then deleted
    pub fn sort_priority(&self) -> u8 {
        match self {
            FileStatus::New => 0,
            FileStatus::Modified => 1,
            FileStatus::Deleted => 2,
            FileStatus::Unmodified => 3,
        }
    }

    /// True for every status that carries local work
    pub fn is_changed(&self) -> bool {
        !matches!(self, FileStatus::Unmodified)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
}

impl EntryKind {
    /// Parse the `type` field of an upstream tree item; submodules and other
    /// kinds are not tracked.
    pub fn from_upstream(kind: &str) -> Option<Self> {
        match kind {
            "blob" => Some(EntryKind::Blob),
            "tree" => Some(EntryKind::Tree),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Blob => "blob",
            EntryKind::Tree => "tree",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_priority_orders_new_modified_deleted() {
        let mut statuses = vec![FileStatus::Deleted, FileStatus::Modified, FileStatus::New];
        statuses.sort_by_key(|s| s.sort_priority());
        assert_eq!(
            statuses,
            vec![FileStatus::New, FileStatus::Modified, FileStatus::Deleted]
        );
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&FileStatus::Deleted).unwrap();
        assert_eq!(json, "\"deleted\"");
        let kind: EntryKind = serde_json::from_str("\"tree\"").unwrap();
        assert_eq!(kind, EntryKind::Tree);
    }

    #[test]
    fn test_upstream_kind_parsing() {
        assert_eq!(EntryKind::from_upstream("blob"), Some(EntryKind::Blob));
        assert_eq!(EntryKind::from_upstream("tree"), Some(EntryKind::Tree));
        assert_eq!(EntryKind::from_upstream("commit"), None);
    }

    #[test]
    fn test_is_changed() {
        assert!(!FileStatus::Unmodified.is_changed());
        assert!(FileStatus::New.is_changed());
        assert!(FileStatus::Deleted.is_changed());
    }
}
