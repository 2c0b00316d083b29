//! Assertion helpers for engine state and CLI output

#![allow(dead_code)]

use crate::common::mock_remote::MockRemote;
use ghedit::{FileEntry, FileStatus, RemoteEngine};
use predicates::prelude::*;

pub fn entry(engine: &RemoteEngine<MockRemote>, path: &str) -> FileEntry {
    engine
        .store()
        .read(|s| s.find_by_path(path).cloned())
        .unwrap_or_else(|| panic!("{path} is not in the working set"))
}

/// Checks status and the dirty flag together, since they must agree
pub fn assert_status(engine: &RemoteEngine<MockRemote>, path: &str, status: FileStatus) {
    let entry = entry(engine, path);
    assert_eq!(entry.status, status, "status of {path}");
    assert_eq!(entry.is_dirty, status != FileStatus::Unmodified, "dirty flag of {path}");
}

pub fn not_configured() -> impl Predicate<str> {
    predicates::str::contains("Repository is not configured")
}

pub fn read_only() -> impl Predicate<str> {
    predicates::str::contains("Read-only mode")
}

pub fn has_file_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}]"))
}
