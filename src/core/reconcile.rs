//! Reconciliation of local entries with upstream content.
//!
//! Both the single-entry path and the bulk path fetch upstream content and
//! hand it to [`FileStore::reconcile_entry`], so the merge policy lives in
//! exactly one place. A failed fetch leaves local state untouched; only a
//! missing repository identity is reported back, because it is raised before
//! any request goes out.
//!
//! [`FileStore::reconcile_entry`]: crate::core::store::FileStore::reconcile_entry

use crate::core::engine::RemoteEngine;
use crate::core::error::{EditorError, Result};
use crate::core::remote::Remote;
use crate::core::state::{FileEntry, FileId};
use crate::core::store::SyncOutcome;
use std::collections::HashMap;
use tokio::task::JoinSet;

/// Per-outcome counts of a bulk reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub adopted: usize,
    pub unchanged: usize,
    pub diverged: usize,
    pub unreachable: usize,
    pub skipped: usize,
}

impl SyncReport {
    fn record(&mut self, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Adopted => self.adopted += 1,
            SyncOutcome::Unchanged => self.unchanged += 1,
            SyncOutcome::Diverged => self.diverged += 1,
            SyncOutcome::Unreachable => self.unreachable += 1,
            SyncOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.adopted + self.unchanged + self.diverged + self.unreachable + self.skipped
    }
}

fn is_sync_candidate(entry: &FileEntry) -> bool {
    entry.is_blob() && !entry.is_new() && !entry.is_loading
}

/// Upstream content of `path`, or `None` when it cannot be read right now
async fn fetch_upstream<R: Remote>(remote: &R, path: &str) -> Result<Option<String>> {
    match remote.fetch_content(path).await {
        Ok(content) => Ok(Some(content)),
        Err(EditorError::NotConfigured) => Err(EditorError::NotConfigured),
        Err(e) => {
            log::warn!("Could not reconcile {path}: {e}");
            Ok(None)
        }
    }
}

impl<R: Remote> RemoteEngine<R> {
    pub async fn sync_file_content(&self, id: FileId) -> Result<SyncOutcome> {
        let target = self.store.read(|s| {
            s.get(id)
                .filter(|e| is_sync_candidate(e))
                .map(|e| e.path.clone())
        });
        let Some(path) = target else {
            return Ok(SyncOutcome::Skipped);
        };

        let outcome = match fetch_upstream(&self.remote, &path).await? {
            Some(upstream) => self.store.write(|s| s.reconcile_entry(id, upstream)),
            None => SyncOutcome::Unreachable,
        };
        log::debug!("Reconciled {path}: {outcome:?}");

        if matches!(outcome, SyncOutcome::Adopted | SyncOutcome::Diverged) {
            self.store.read(|s| s.persist_files());
        }
        Ok(outcome)
    }

    /// Reconcile every blob with upstream, then persist once
    pub async fn sync_all_files(&self) -> Result<SyncReport> {
        let targets: Vec<(FileId, String)> = self.store.read(|s| {
            s.files()
                .iter()
                .filter(|e| is_sync_candidate(e))
                .map(|e| (e.id, e.path.clone()))
                .collect()
        });
        log::debug!("Syncing {} files", targets.len());

        let mut fetches = JoinSet::new();
        for (id, path) in &targets {
            let (id, path) = (*id, path.clone());
            let remote = self.remote.clone();
            let limit = self.limit.clone();
            fetches.spawn(async move {
                let _permit = limit.acquire_owned().await;
                (id, fetch_upstream(&remote, &path).await)
            });
        }

        let mut fetched: HashMap<FileId, Option<String>> = HashMap::with_capacity(targets.len());
        while let Some(joined) = fetches.join_next().await {
            let (id, upstream) = joined?;
            fetched.insert(id, upstream?);
        }

        let report = self.store.write(|s| {
            let mut report = SyncReport::default();
            for (id, _) in &targets {
                let outcome = match fetched.remove(id) {
                    Some(Some(upstream)) => s.reconcile_entry(*id, upstream),
                    Some(None) => SyncOutcome::Unreachable,
                    None => SyncOutcome::Skipped,
                };
                report.record(outcome);
            }
            s.persist_files();
            report
        });
        log::debug!("Sync finished: {report:?}");
        Ok(report)
    }
}
