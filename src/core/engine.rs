//! Remote reconciliation and commit engine.
//!
//! [`RemoteEngine`] couples a [`StoreHandle`] with a [`Remote`]. It loads the
//! upstream tree, lazily fetches blob content, reconciles local entries with
//! upstream (see `reconcile.rs`) and publishes changes (see `commit.rs`).
//!
//! The engine never holds a store borrow across an `.await`: it snapshots what
//! it needs, awaits the network, then re-reads the entry on resumption, since
//! other tasks may have changed the working set in between.

use crate::core::config::AuthorConfig;
use crate::core::error::{EditorError, Result};
use crate::core::file_status::{EntryKind, FileStatus};
use crate::core::remote::Remote;
use crate::core::state::{FileEntry, FileId};
use crate::core::store::StoreHandle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{watch, Semaphore};

const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Result of a first load, shared with every task waiting on the same entry
type SharedFetch = std::result::Result<Option<String>, String>;

pub struct RemoteEngine<R: Remote> {
    pub(crate) store: StoreHandle,
    pub(crate) remote: R,
    pub(crate) author: AuthorConfig,
    pub(crate) limit: Arc<Semaphore>,
    in_flight: RefCell<HashMap<FileId, watch::Receiver<Option<SharedFetch>>>>,
}

impl<R: Remote> RemoteEngine<R> {
    pub fn new(store: StoreHandle, remote: R) -> Self {
        Self {
            store,
            remote,
            author: AuthorConfig::default(),
            limit: Arc::new(Semaphore::new(DEFAULT_MAX_CONCURRENCY)),
            in_flight: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_author(mut self, author: AuthorConfig) -> Self {
        self.author = author;
        self
    }

    /// Cap on simultaneous upstream requests within one operation
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.limit = Arc::new(Semaphore::new(max.max(1)));
        self
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Replace the working set with the upstream tree of the branch
    pub async fn load_tree(&self) -> Result<usize> {
        let items = self.remote.fetch_tree().await?;
        let entries: Vec<FileEntry> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                FileEntry::upstream(index as FileId + 1, &item.path, item.kind, item.hash)
            })
            .collect();
        let count = entries.len();
        log::debug!("Loaded {count} entries from upstream tree");

        self.store.write(|s| {
            s.set_files(entries);
            s.persist_files();
        });
        Ok(count)
    }

    /// Content of a blob, loading it on first access.
    ///
    /// Already-loaded entries are reconciled with upstream before returning.
    /// `new` entries answer from local content without any remote call.
    /// Returns `None` for trees.
    pub async fn fetch_file_content(&self, id: FileId) -> Result<Option<String>> {
        let snapshot = self
            .store
            .read(|s| s.get(id).map(|e| (e.kind, e.status, e.has_content(), e.path.clone())));
        let Some((kind, status, loaded, path)) = snapshot else {
            return Err(EditorError::entry_not_found(id));
        };

        if kind != EntryKind::Blob {
            return Ok(None);
        }
        if status == FileStatus::New {
            return Ok(self.store.write(|s| s.local_content(id)));
        }

        let pending = self.in_flight.borrow().get(&id).cloned();
        if let Some(mut pending) = pending {
            log::debug!("Joining in-flight fetch of {path}");
            let shared = pending
                .wait_for(Option::is_some)
                .await
                .map(|value| (*value).clone());
            return match shared {
                Ok(Some(Ok(content))) => Ok(content),
                Ok(Some(Err(message))) => Err(EditorError::fetch_failed(path, message)),
                _ => Err(EditorError::fetch_failed(path, "fetch was abandoned")),
            };
        }

        if loaded {
            self.sync_file_content(id).await?;
            return Ok(self.store.read(|s| s.get(id).and_then(|e| e.content.clone())));
        }

        self.first_load(id).await
    }

    async fn first_load(&self, id: FileId) -> Result<Option<String>> {
        let path = self
            .store
            .write(|s| s.begin_loading(id))
            .ok_or_else(|| EditorError::entry_not_found(id))?;

        let (done, pending) = watch::channel(None);
        self.in_flight.borrow_mut().insert(id, pending);
        let _guard = InFlight { engine: self, id };

        let result = match self.remote.fetch_content(&path).await {
            Ok(upstream) => Ok(self.store.write(|s| {
                let content = s.finish_loading(id, Some(upstream));
                s.persist_files();
                content
            })),
            Err(e) => {
                log::warn!("Failed to load {path}: {e}");
                self.store.write(|s| s.finish_loading(id, None));
                Err(e)
            }
        };

        let shared = match &result {
            Ok(content) => Ok(content.clone()),
            Err(e) => Err(e.to_string()),
        };
        done.send_replace(Some(shared));
        result
    }
}

/// Removes the in-flight marker and clears the loading state on every exit path
struct InFlight<'a, R: Remote> {
    engine: &'a RemoteEngine<R>,
    id: FileId,
}

impl<R: Remote> Drop for InFlight<'_, R> {
    fn drop(&mut self) {
        self.engine.in_flight.borrow_mut().remove(&self.id);
        self.engine.store.write(|s| s.finish_loading(self.id, None));
    }
}
