//! Boundary to the upstream version-control API.
//!
//! The engine only talks to upstream through [`Remote`], which keeps the
//! reconciliation and commit logic independent of HTTP. Every returned future
//! is `Send`, so calls can be fanned out on a `JoinSet`.

use crate::core::error::Result;
use crate::core::file_status::EntryKind;
use serde::Serialize;
use std::future::Future;

/// Mode of a regular, non-executable file
pub const BLOB_MODE: &str = "100644";

/// One node of the upstream tree listing
#[derive(Debug, Clone, PartialEq)]
pub struct TreeItem {
    pub path: String,
    pub kind: EntryKind,
    pub hash: String,
}

/// Current head of the configured branch
#[derive(Debug, Clone, PartialEq)]
pub struct RefHead {
    pub head_hash: String,
    /// Fully qualified reference name, e.g. `refs/heads/main`
    pub ref_name: String,
}

/// One path of an incremental tree update; `sha: None` deletes the path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeUpdate {
    pub path: String,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub sha: Option<String>,
}

impl TreeUpdate {
    pub fn blob(path: impl Into<String>, sha: Option<String>) -> Self {
        Self {
            path: path.into(),
            mode: BLOB_MODE,
            kind: "blob",
            sha,
        }
    }

    pub fn is_deletion(&self) -> bool {
        self.sha.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    /// RFC 3339 timestamp
    pub date: String,
}

pub trait Remote: Clone + Send + Sync + 'static {
    /// True when a credential is available for write calls
    fn can_write(&self) -> bool;

    /// Recursive listing of the branch tree
    fn fetch_tree(&self) -> impl Future<Output = Result<Vec<TreeItem>>> + Send;

    /// Raw text content of one blob
    fn fetch_content(&self, path: &str) -> impl Future<Output = Result<String>> + Send;

    /// Store content upstream; returns its content address
    fn create_blob(&self, content: &str) -> impl Future<Output = Result<String>> + Send;

    fn get_ref(&self) -> impl Future<Output = Result<RefHead>> + Send;

    fn create_tree(
        &self,
        base_tree: &str,
        entries: &[TreeUpdate],
    ) -> impl Future<Output = Result<String>> + Send;

    fn create_commit(
        &self,
        message: &str,
        tree_hash: &str,
        parent_hash: &str,
        author: &CommitAuthor,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Move the reference; rejected with a non-fast-forward error when
    /// upstream moved since the head was read
    fn update_ref(&self, ref_name: &str, commit_hash: &str)
        -> impl Future<Output = Result<()>> + Send;
}
