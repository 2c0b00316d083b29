//! Publishing a batch of local changes as one commit.
//!
//! The upstream API offers no transaction across the tree, commit and
//! reference calls, so publishing is a small saga:
//!
//! 1. create a blob for every changed file (concurrently, all must succeed)
//! 2. read the branch head
//! 3. create a tree on top of the head's tree (`sha: null` deletes a path)
//! 4. create a commit with the head as sole parent
//! 5. move the branch reference to the new commit
//!
//! When step 5 is rejected as a non-fast-forward, the working set is synced
//! and the whole saga runs once more with the same changes. Blob creation is
//! content-addressed, so repeating step 1 is harmless. Any other failure, or
//! a second rejection, goes straight back to the caller.

use crate::core::engine::RemoteEngine;
use crate::core::error::{EditorError, Result};
use crate::core::remote::{CommitAuthor, Remote, TreeUpdate};
use crate::core::state::FileEntry;
use std::collections::HashMap;
use tokio::task::JoinSet;

#[derive(Debug, Clone, PartialEq)]
pub struct CommitReceipt {
    pub commit_sha: String,
    pub tree_sha: String,
    /// `(path, blob sha)` for every file written by the commit
    pub blobs: Vec<(String, String)>,
    /// True when the first reference update was rejected and the saga re-ran
    pub retried: bool,
}

impl<R: Remote> RemoteEngine<R> {
    /// Publish `changes` as one commit on the configured branch.
    ///
    /// The caller finalizes the store with
    /// [`update_file_original_content`](crate::core::store::FileStore::update_file_original_content)
    /// after this returns `Ok`.
    pub async fn commit_and_push(
        &self,
        message: &str,
        changes: &[FileEntry],
    ) -> Result<CommitReceipt> {
        if !self.remote.can_write() {
            return Err(EditorError::ReadOnly);
        }

        match self.attempt_commit(message, changes).await {
            Err(e) if e.is_non_fast_forward() => {
                log::warn!("{e}; syncing with upstream and retrying once");
                let report = self.sync_all_files().await?;
                log::debug!("Resync before retry: {report:?}");

                let mut receipt = self.attempt_commit(message, changes).await?;
                receipt.retried = true;
                Ok(receipt)
            }
            outcome => outcome,
        }
    }

    async fn attempt_commit(&self, message: &str, changes: &[FileEntry]) -> Result<CommitReceipt> {
        if let Some(unloaded) = changes
            .iter()
            .find(|c| !c.is_deleted() && !c.has_content())
        {
            return Err(EditorError::unloaded_content(&unloaded.path));
        }

        let blobs = self.create_blobs(changes).await?;
        let head = self.remote.get_ref().await?;

        let hashes: HashMap<&str, &str> = blobs
            .iter()
            .map(|(path, sha)| (path.as_str(), sha.as_str()))
            .collect();
        let entries = changes
            .iter()
            .map(|change| {
                if change.is_deleted() {
                    return Ok(TreeUpdate::blob(&change.path, None));
                }
                hashes
                    .get(change.path.as_str())
                    .map(|sha| TreeUpdate::blob(&change.path, Some(sha.to_string())))
                    .ok_or_else(|| EditorError::unloaded_content(&change.path))
            })
            .collect::<Result<Vec<_>>>()?;

        // The API accepts any tree-ish as base, so the head commit serves directly.
        let tree_sha = self.remote.create_tree(&head.head_hash, &entries).await?;

        let author = CommitAuthor {
            name: self.author.name.clone(),
            email: self.author.email.clone(),
            date: chrono::Utc::now().to_rfc3339(),
        };
        let commit_sha = self
            .remote
            .create_commit(message, &tree_sha, &head.head_hash, &author)
            .await?;

        self.remote.update_ref(&head.ref_name, &commit_sha).await?;
        log::debug!(
            "Moved {} to {commit_sha} ({} paths, {} deleted)",
            head.ref_name,
            entries.len(),
            entries.iter().filter(|e| e.is_deletion()).count()
        );

        Ok(CommitReceipt {
            commit_sha,
            tree_sha,
            blobs,
            retried: false,
        })
    }

    /// Create blobs for every non-deleted change, in `changes` order
    async fn create_blobs(&self, changes: &[FileEntry]) -> Result<Vec<(String, String)>> {
        let mut uploads = JoinSet::new();
        for (index, change) in changes.iter().enumerate().filter(|(_, c)| !c.is_deleted()) {
            let Some(content) = change.content.clone() else {
                continue;
            };
            let path = change.path.clone();
            let remote = self.remote.clone();
            let limit = self.limit.clone();
            uploads.spawn(async move {
                let _permit = limit.acquire_owned().await;
                let sha = remote.create_blob(&content).await?;
                Ok::<_, EditorError>((index, path, sha))
            });
        }

        let mut blobs = Vec::with_capacity(uploads.len());
        while let Some(joined) = uploads.join_next().await {
            blobs.push(joined??);
        }
        blobs.sort_by_key(|(index, _, _)| *index);

        Ok(blobs
            .into_iter()
            .map(|(_, path, sha)| (path, sha))
            .collect())
    }
}
