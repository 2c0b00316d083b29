//! In-memory stand-in for the GitHub API
//!
//! Holds a flat path → content map plus the objects created through it, and
//! counts every call so tests can assert on remote traffic.

#![allow(dead_code)]

use ghedit::core::error::{EditorError, Result};
use ghedit::{CommitAuthor, EntryKind, RefHead, Remote, TreeItem, TreeUpdate};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

pub const REF_NAME: &str = "refs/heads/main";

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCommit {
    pub message: String,
    pub tree: String,
    pub parent: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub files: BTreeMap<String, String>,
    pub dirs: BTreeSet<String>,
    pub head: String,
    pub writable: bool,
    pub blobs: HashMap<String, String>,
    pub trees: HashMap<String, (String, Vec<TreeUpdate>)>,
    pub commits: HashMap<String, RecordedCommit>,
    pub calls: HashMap<&'static str, usize>,
    pub unreachable: BTreeSet<String>,
    /// Paths whose content requests wait until the gate is opened
    pub gates: HashMap<String, Arc<Notify>>,
    /// Number of upcoming reference updates to reject
    pub reject_updates: usize,
    /// Upstream edit that lands when a reference update is rejected
    pub concurrent_push: Option<(String, String)>,
    next_object: usize,
}

impl MockState {
    fn object_id(&mut self, prefix: &str) -> String {
        self.next_object += 1;
        format!("{prefix}{:04}", self.next_object)
    }

    fn count(&mut self, call: &'static str) {
        *self.calls.entry(call).or_default() += 1;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockRemote {
    state: Arc<Mutex<MockState>>,
}

impl MockRemote {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let remote = Self::default();
        {
            let mut state = remote.state();
            state.writable = true;
            state.head = "commit0000".to_string();
            for (path, content) in files {
                state.files.insert(path.to_string(), content.to_string());
            }
        }
        remote
    }

    pub fn read_only(files: &[(&str, &str)]) -> Self {
        let remote = Self::new(files);
        remote.state().writable = false;
        remote
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.state().dirs.insert(path.to_string());
        self
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Change a file upstream, as another client pushing would
    pub fn push_upstream(&self, path: &str, content: &str) {
        let mut state = self.state();
        state.files.insert(path.to_string(), content.to_string());
        state.head = state.object_id("commit");
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.state().files.get(path).cloned()
    }

    pub fn calls(&self, call: &str) -> usize {
        self.state().calls.get(call).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.state().calls.values().sum()
    }

    pub fn set_unreachable(&self, path: &str) {
        self.state().unreachable.insert(path.to_string());
    }

    /// Hold content requests for `path` until the returned gate is notified
    pub fn gate(&self, path: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state().gates.insert(path.to_string(), gate.clone());
        gate
    }

    pub fn reject_next_update(&self, concurrent_push: Option<(&str, &str)>) {
        let mut state = self.state();
        state.reject_updates += 1;
        state.concurrent_push = concurrent_push.map(|(p, c)| (p.to_string(), c.to_string()));
    }

    pub fn last_commit(&self) -> Option<RecordedCommit> {
        let state = self.state();
        state.commits.get(&state.head).cloned()
    }

    pub fn tree_of(&self, commit: &RecordedCommit) -> (String, Vec<TreeUpdate>) {
        self.state().trees[&commit.tree].clone()
    }
}

impl Remote for MockRemote {
    fn can_write(&self) -> bool {
        self.state().writable
    }

    async fn fetch_tree(&self) -> Result<Vec<TreeItem>> {
        let mut state = self.state();
        state.count("fetch_tree");

        let mut items: Vec<TreeItem> = state
            .dirs
            .iter()
            .map(|dir| TreeItem {
                path: dir.clone(),
                kind: EntryKind::Tree,
                hash: format!("tree-{dir}"),
            })
            .chain(state.files.iter().map(|(path, content)| TreeItem {
                path: path.clone(),
                kind: EntryKind::Blob,
                hash: format!("blob-{}", content.len()),
            }))
            .collect();
        items.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(items)
    }

    async fn fetch_content(&self, path: &str) -> Result<String> {
        self.state().count("fetch_content");
        // Give concurrent callers a chance to observe the in-flight request
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        let gate = self.state().gates.get(path).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let state = self.state();
        if state.unreachable.contains(path) {
            return Err(EditorError::from_remote(503, "Service Unavailable"));
        }
        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| EditorError::from_remote(404, "Not Found"))
    }

    async fn create_blob(&self, content: &str) -> Result<String> {
        let mut state = self.state();
        state.count("create_blob");
        let sha = state.object_id("blob");
        state.blobs.insert(sha.clone(), content.to_string());
        Ok(sha)
    }

    async fn get_ref(&self) -> Result<RefHead> {
        let mut state = self.state();
        state.count("get_ref");
        Ok(RefHead {
            head_hash: state.head.clone(),
            ref_name: REF_NAME.to_string(),
        })
    }

    async fn create_tree(&self, base_tree: &str, entries: &[TreeUpdate]) -> Result<String> {
        let mut state = self.state();
        state.count("create_tree");
        let sha = state.object_id("tree");
        state
            .trees
            .insert(sha.clone(), (base_tree.to_string(), entries.to_vec()));
        Ok(sha)
    }

    async fn create_commit(
        &self,
        message: &str,
        tree_hash: &str,
        parent_hash: &str,
        author: &CommitAuthor,
    ) -> Result<String> {
        let mut state = self.state();
        state.count("create_commit");
        let sha = state.object_id("commit");
        let commit = RecordedCommit {
            message: message.to_string(),
            tree: tree_hash.to_string(),
            parent: parent_hash.to_string(),
            author: author.clone(),
        };
        state.commits.insert(sha.clone(), commit);
        Ok(sha)
    }

    async fn update_ref(&self, ref_name: &str, commit_hash: &str) -> Result<()> {
        let mut state = self.state();
        state.count("update_ref");
        assert_eq!(ref_name, REF_NAME);

        if state.reject_updates > 0 {
            state.reject_updates -= 1;
            if let Some((path, content)) = state.concurrent_push.take() {
                state.files.insert(path, content);
                state.head = state.object_id("commit");
            }
            return Err(EditorError::from_remote(422, "Update is not a fast-forward"));
        }

        let commit = state.commits[commit_hash].clone();
        if commit.parent != state.head {
            return Err(EditorError::from_remote(422, "Update is not a fast-forward"));
        }
        let (_, entries) = state.trees[&commit.tree].clone();
        for entry in entries {
            match entry.sha {
                Some(sha) => {
                    let content = state.blobs[&sha].clone();
                    state.files.insert(entry.path, content);
                }
                None => {
                    state.files.remove(&entry.path);
                }
            }
        }
        state.head = commit_hash.to_string();
        Ok(())
    }
}
