//! Local file-state store: the single source of truth for the working set.
//!
//! [`FileStore`] owns every tracked entry together with its edit status and
//! the two selection references. All writes go through its methods, which keep
//! these invariants:
//!
//! - ids are unique and never handed out twice
//! - `is_dirty` is true exactly when `status != unmodified`
//! - `new` entries are removed outright on delete and revert, existing entries
//!   are tombstoned until a commit purges them
//! - an edit that returns content to its baseline collapses to `unmodified`
//!
//! [`StoreHandle`] is the shared handle every component receives. Access goes
//! through closures, so no borrow of the store can live across an `.await`.

use crate::core::error::{EditorError, Result};
use crate::core::file_status::{EntryKind, FileStatus};
use crate::core::path::{is_within, normalize_path};
use crate::core::persist::Persistence;
use crate::core::state::{FileEntry, FileId, Selection, LOADING_PLACEHOLDER};
use std::cell::RefCell;
use std::rc::Rc;

/// What a reconciliation step did to one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Not a candidate: tree, `new` entry, or no longer in the working set
    Skipped,
    /// Upstream could not be read; local state left alone
    Unreachable,
    /// Upstream content taken verbatim
    Adopted,
    /// Local content already matches upstream
    Unchanged,
    /// Local edits kept, baseline moved to the upstream content
    Diverged,
}

#[derive(Debug, Default)]
pub struct FileStore {
    files: Vec<FileEntry>,
    current_file: Option<FileId>,
    focused_item: Option<FileId>,
    last_issued_id: FileId,
    persistence: Option<Persistence>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persistence(persistence: Persistence) -> Self {
        Self {
            persistence: Some(persistence),
            ..Self::default()
        }
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn get(&self, id: FileId) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.id == id)
    }

    fn get_mut(&mut self, id: FileId) -> Result<&mut FileEntry> {
        self.files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| EditorError::entry_not_found(id))
    }

    pub fn find_by_path(&self, path: &str) -> Option<&FileEntry> {
        let path = normalize_path(path);
        self.files.iter().find(|f| f.path == path)
    }

    /// Resolve a user-supplied path to an id
    pub fn id_for_path(&self, path: &str) -> Result<FileId> {
        self.find_by_path(path)
            .map(|f| f.id)
            .ok_or_else(|| EditorError::path_not_found(normalize_path(path)))
    }

    /// Replace the whole working set and restore the selection against it
    pub fn set_files(&mut self, files: Vec<FileEntry>) {
        let highest = files.iter().map(|f| f.id).max().unwrap_or(0);
        self.last_issued_id = self.last_issued_id.max(highest);
        self.files = files;
        self.current_file = None;
        self.focused_item = None;
        self.restore_current_file();
        self.restore_focused_item();
    }

    fn next_id(&self) -> FileId {
        let highest = self.files.iter().map(|f| f.id).max().unwrap_or(0);
        highest.max(self.last_issued_id) + 1
    }

    pub fn create_file(&mut self, path: &str, content: &str, kind: EntryKind) -> Result<FileId> {
        let normalized = normalize_path(path);
        if normalized.is_empty() {
            return Err(EditorError::invalid_path(path));
        }
        if self.find_by_path(&normalized).is_some() {
            return Err(EditorError::path_exists(normalized));
        }

        let id = self.next_id();
        self.last_issued_id = id;
        self.files.push(FileEntry::created(
            id,
            &normalized,
            kind,
            Some(content.to_string()),
        ));
        log::debug!("Created {} {} as #{id}", kind.as_str(), normalized);

        self.persist_files();
        Ok(id)
    }

    /// Replace the content of a blob.
    ///
    /// Returns `false` when the content is byte-for-byte unchanged.
    pub fn update_file_content(&mut self, id: FileId, content: &str) -> Result<bool> {
        let entry = self.get_mut(id)?;
        if entry.is_tree() {
            return Err(EditorError::not_a_blob(&entry.path));
        }
        if !entry.has_content() {
            return Err(EditorError::unloaded_content(&entry.path));
        }
        if entry.content.as_deref() == Some(content) {
            return Ok(false);
        }

        if entry.is_new() {
            entry.content = Some(content.to_string());
        } else {
            if entry.original_content.is_none() {
                entry.original_content = entry.content.take();
            }
            entry.content = Some(content.to_string());

            if entry.original_content.as_deref() == Some(content) {
                entry.mark_unmodified();
            } else {
                entry.mark(FileStatus::Modified);
            }
        }

        self.persist_files();
        Ok(true)
    }

    /// Delete an entry; trees cascade to every descendant
    pub fn delete_file(&mut self, id: FileId) -> Result<()> {
        let target = self.get(id).ok_or_else(|| EditorError::entry_not_found(id))?;
        let root = target.path.clone();
        let cascade = target.is_tree();
        let affected = |f: &FileEntry| f.id == id || (cascade && is_within(&f.path, &root));

        let removed: Vec<FileId> = self
            .files
            .iter()
            .filter(|f| affected(*f) && f.is_new())
            .map(|f| f.id)
            .collect();
        self.remove_entries(&removed);

        for entry in self.files.iter_mut().filter(|f| affected(&**f)) {
            entry.mark(FileStatus::Deleted);
        }
        log::debug!("Deleted {root} ({} unsaved entries dropped)", removed.len());

        self.persist_files();
        Ok(())
    }

    /// Discard local work on an entry; trees also revert their descendants
    pub fn revert_file(&mut self, id: FileId) -> Result<()> {
        let target = self.get(id).ok_or_else(|| EditorError::entry_not_found(id))?;
        let root = target.path.clone();
        let cascade = target.is_tree();

        let ids: Vec<FileId> = self
            .files
            .iter()
            .filter(|f| f.id == id || (cascade && f.is_dirty && is_within(&f.path, &root)))
            .map(|f| f.id)
            .collect();
        for id in ids {
            self.revert_one(id);
        }

        self.persist_files();
        Ok(())
    }

    pub fn revert_all_files(&mut self) {
        let ids: Vec<FileId> = self
            .files
            .iter()
            .filter(|f| f.is_dirty)
            .map(|f| f.id)
            .collect();
        log::debug!("Reverting {} entries", ids.len());
        for id in ids {
            self.revert_one(id);
        }
        self.persist_files();
    }

    fn revert_one(&mut self, id: FileId) {
        let Some(entry) = self.files.iter_mut().find(|f| f.id == id) else {
            return;
        };
        if entry.is_new() {
            self.remove_entries(&[id]);
            return;
        }
        if let Some(original) = entry.original_content.take() {
            entry.content = Some(original);
        }
        entry.mark_unmodified();
    }

    fn remove_entries(&mut self, ids: &[FileId]) {
        if ids.is_empty() {
            return;
        }
        self.files.retain(|f| !ids.contains(&f.id));
        if self.current_file.is_some_and(|id| ids.contains(&id)) {
            self.current_file = None;
        }
        if self.focused_item.is_some_and(|id| ids.contains(&id)) {
            self.focused_item = None;
        }
    }

    pub fn get_dirty_files(&self) -> Vec<&FileEntry> {
        self.files.iter().filter(|f| f.is_dirty).collect()
    }

    /// Blobs with local work, ordered new, modified, deleted
    pub fn get_modified_files(&self) -> Vec<FileEntry> {
        let mut modified: Vec<FileEntry> = self
            .files
            .iter()
            .filter(|f| f.is_blob() && f.status.is_changed())
            .cloned()
            .map(|mut f| {
                f.path = normalize_path(&f.path);
                f
            })
            .collect();
        modified.sort_by_key(|f| f.status.sort_priority());
        modified
    }

    /// Finalize local state after a successful commit
    pub fn update_file_original_content(&mut self) {
        let purged: Vec<FileId> = self
            .files
            .iter()
            .filter(|f| f.is_deleted())
            .map(|f| f.id)
            .collect();
        self.remove_entries(&purged);

        for entry in self.files.iter_mut().filter(|f| f.is_dirty) {
            entry.mark_unmodified();
        }
        log::debug!("Finalized commit, purged {} tombstones", purged.len());

        self.persist_files();
    }

    /// Store the upstream hashes produced by a commit
    pub fn record_remote_hashes(&mut self, hashes: &[(String, String)]) {
        for (path, hash) in hashes {
            if let Some(entry) = self.files.iter_mut().find(|f| &f.path == path) {
                entry.remote_hash = hash.clone();
            }
        }
    }

    /// Merge upstream content into one entry without clobbering local edits
    pub fn reconcile_entry(&mut self, id: FileId, upstream: String) -> SyncOutcome {
        let Ok(entry) = self.get_mut(id) else {
            return SyncOutcome::Skipped;
        };
        if !entry.is_blob() || entry.is_new() {
            return SyncOutcome::Skipped;
        }

        let Some(local) = entry.content.as_deref() else {
            entry.content = Some(upstream);
            return SyncOutcome::Adopted;
        };

        if local == upstream {
            if entry.status == FileStatus::Modified {
                entry.mark_unmodified();
            }
            return SyncOutcome::Unchanged;
        }

        if !entry.is_dirty {
            entry.content = Some(upstream);
            return SyncOutcome::Adopted;
        }

        log::debug!("Upstream moved under local edits to {}", entry.path);
        entry.original_content = Some(upstream);
        if !entry.is_deleted() {
            entry.mark(FileStatus::Modified);
        }
        SyncOutcome::Diverged
    }

    /// Mark a blob as loading; returns its path
    pub(crate) fn begin_loading(&mut self, id: FileId) -> Option<String> {
        let entry = self.get_mut(id).ok()?;
        entry.is_loading = true;
        entry.content = Some(LOADING_PLACEHOLDER.to_string());
        Some(entry.path.clone())
    }

    /// Clear the loading state and merge the fetched content, if any
    pub(crate) fn finish_loading(&mut self, id: FileId, upstream: Option<String>) -> Option<String> {
        let entry = self.get_mut(id).ok()?;
        if entry.is_loading {
            entry.is_loading = false;
            entry.content = None;
        }
        if let Some(upstream) = upstream {
            self.reconcile_entry(id, upstream);
        }
        self.get(id).and_then(|f| f.content.clone())
    }

    /// Give `new` entries their local content without any remote call
    pub(crate) fn local_content(&mut self, id: FileId) -> Option<String> {
        let entry = self.get_mut(id).ok()?;
        Some(entry.content.get_or_insert_with(String::new).clone())
    }

    pub fn current_file(&self) -> Option<&FileEntry> {
        self.current_file.and_then(|id| self.get(id))
    }

    pub fn focused_item(&self) -> Option<&FileEntry> {
        self.focused_item.and_then(|id| self.get(id))
    }

    pub fn select_file(&mut self, id: FileId) -> Result<()> {
        self.get(id).ok_or_else(|| EditorError::entry_not_found(id))?;
        self.set_current_file(Some(id));
        Ok(())
    }

    pub fn set_focused_item(&mut self, id: FileId) -> Result<()> {
        self.get(id).ok_or_else(|| EditorError::entry_not_found(id))?;
        self.focused_item = Some(id);
        self.persist_selection();
        Ok(())
    }

    pub fn set_current_file(&mut self, id: Option<FileId>) {
        self.current_file = id.filter(|id| self.get(*id).is_some());
        self.persist_selection();
    }

    /// Restore the current file from the persisted path, else a README
    pub fn restore_current_file(&mut self) -> bool {
        let saved = self.saved_selection().current_file;
        let restored = saved
            .and_then(|path| self.find_by_path(&path))
            .or_else(|| {
                self.files
                    .iter()
                    .find(|f| f.is_blob() && f.name.eq_ignore_ascii_case("readme.md"))
            })
            .map(|f| f.id);

        self.current_file = restored;
        restored.is_some()
    }

    pub fn restore_focused_item(&mut self) -> bool {
        let saved = self.saved_selection().focused_item;
        let restored = saved
            .and_then(|path| self.find_by_path(&path))
            .map(|f| f.id);

        self.focused_item = restored;
        restored.is_some()
    }

    fn saved_selection(&self) -> Selection {
        self.persistence
            .as_ref()
            .map(Persistence::load_selection)
            .unwrap_or_default()
    }

    fn persist_selection(&self) {
        let Some(persistence) = &self.persistence else {
            return;
        };
        let selection = Selection {
            current_file: self.current_file().map(|f| f.path.clone()),
            focused_item: self.focused_item().map(|f| f.path.clone()),
        };
        if let Err(e) = persistence.save_selection(&selection) {
            log::warn!("Failed to persist selection: {e}");
        }
    }

    /// Write the working set; failures are logged, local state stays authoritative
    pub fn persist_files(&self) {
        let Some(persistence) = &self.persistence else {
            return;
        };
        if let Err(e) = persistence.save_files(&self.files, self.last_issued_id) {
            log::warn!("Failed to persist working set: {e}");
        }
    }

    /// Load the persisted working set; returns false when none was usable
    pub fn load_persisted_files(&mut self) -> bool {
        let Some(state) = self.persistence.as_ref().and_then(Persistence::load_files) else {
            return false;
        };
        log::debug!("Loaded {} persisted entries", state.files.len());
        self.last_issued_id = self.last_issued_id.max(state.last_issued_id);
        self.set_files(state.files);
        true
    }
}

/// Shared, single-threaded handle to the store
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Rc<RefCell<FileStore>>,
}

impl StoreHandle {
    pub fn new(store: FileStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&FileStore) -> T) -> T {
        f(&self.inner.borrow())
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut FileStore) -> T) -> T {
        f(&mut self.inner.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_blob(id: FileId, path: &str, content: &str) -> FileEntry {
        let mut entry = FileEntry::upstream(id, path, EntryKind::Blob, format!("sha{id}"));
        entry.content = Some(content.to_string());
        entry
    }

    fn upstream_tree(id: FileId, path: &str) -> FileEntry {
        FileEntry::upstream(id, path, EntryKind::Tree, format!("sha{id}"))
    }

    fn store_with(files: Vec<FileEntry>) -> FileStore {
        let mut store = FileStore::new();
        store.set_files(files);
        store
    }

    #[test]
    fn test_create_assigns_next_id_and_marks_new() {
        let mut store = store_with(vec![upstream_blob(3, "a.md", "a")]);
        let id = store.create_file("/docs//b.md/", "hello", EntryKind::Blob).unwrap();

        let entry = store.get(id).unwrap();
        assert_eq!(id, 4);
        assert_eq!(entry.path, "docs/b.md");
        assert_eq!(entry.name, "b.md");
        assert_eq!(entry.content.as_deref(), Some("hello"));
        assert_eq!(entry.status, FileStatus::New);
        assert!(entry.is_dirty);
    }

    #[test]
    fn test_first_id_in_empty_store_is_one() {
        let mut store = FileStore::new();
        assert_eq!(store.create_file("a.md", "", EntryKind::Blob).unwrap(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut store = FileStore::new();
        let first = store.create_file("a.md", "", EntryKind::Blob).unwrap();
        store.delete_file(first).unwrap();
        let second = store.create_file("b.md", "", EntryKind::Blob).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_create_rejects_empty_and_duplicate_paths() {
        let mut store = store_with(vec![upstream_blob(1, "a.md", "a")]);
        assert!(matches!(
            store.create_file("//", "", EntryKind::Blob),
            Err(EditorError::InvalidPath { .. })
        ));
        assert!(matches!(
            store.create_file("/a.md", "", EntryKind::Blob),
            Err(EditorError::PathExists { .. })
        ));
    }

    #[test]
    fn test_edit_then_restore_collapses_to_unmodified() {
        let mut store = store_with(vec![upstream_blob(1, "a.md", "original")]);

        assert!(store.update_file_content(1, "changed").unwrap());
        let entry = store.get(1).unwrap();
        assert_eq!(entry.status, FileStatus::Modified);
        assert_eq!(entry.original_content.as_deref(), Some("original"));
        assert!(entry.is_dirty);

        store.update_file_content(1, "original").unwrap();
        let entry = store.get(1).unwrap();
        assert_eq!(entry.status, FileStatus::Unmodified);
        assert!(entry.original_content.is_none());
        assert!(!entry.is_dirty);
    }

    #[test]
    fn test_identical_edit_is_a_no_op() {
        let mut store = store_with(vec![upstream_blob(1, "a.md", "same")]);
        assert!(!store.update_file_content(1, "same").unwrap());
        assert_eq!(store.get(1).unwrap().status, FileStatus::Unmodified);
    }

    #[test]
    fn test_editing_new_file_keeps_it_new() {
        let mut store = FileStore::new();
        let id = store.create_file("a.md", "", EntryKind::Blob).unwrap();
        store.update_file_content(id, "draft").unwrap();
        store.update_file_content(id, "").unwrap();

        let entry = store.get(id).unwrap();
        assert_eq!(entry.status, FileStatus::New);
        assert!(entry.is_dirty);
        assert!(entry.original_content.is_none());
    }

    #[test]
    fn test_edit_requires_loaded_content() {
        let mut store = store_with(vec![FileEntry::upstream(1, "a.md", EntryKind::Blob, "s")]);
        assert!(matches!(
            store.update_file_content(1, "x"),
            Err(EditorError::UnloadedContent { .. })
        ));
    }

    #[test]
    fn test_deleting_new_file_removes_it() {
        let mut store = FileStore::new();
        let id = store.create_file("draft.md", "", EntryKind::Blob).unwrap();
        store.delete_file(id).unwrap();
        assert!(store.get(id).is_none());
        assert!(store.files().is_empty());
    }

    #[test]
    fn test_deleting_existing_file_tombstones_it() {
        let mut store = store_with(vec![upstream_blob(1, "a.md", "a")]);
        store.delete_file(1).unwrap();

        let entry = store.get(1).unwrap();
        assert_eq!(entry.status, FileStatus::Deleted);
        assert!(entry.is_deleted());
        assert!(entry.is_dirty);
    }

    #[test]
    fn test_deleting_directory_cascades() {
        let mut store = store_with(vec![
            upstream_tree(1, "a"),
            upstream_blob(2, "a/b", "b"),
            upstream_tree(3, "a/c"),
            upstream_blob(4, "ab", "sibling"),
        ]);
        let new_id = store.create_file("a/c/d", "d", EntryKind::Blob).unwrap();

        store.delete_file(1).unwrap();

        for id in [1, 2, 3] {
            assert_eq!(store.get(id).unwrap().status, FileStatus::Deleted);
        }
        assert!(store.get(new_id).is_none());
        assert_eq!(store.get(4).unwrap().status, FileStatus::Unmodified);
    }

    #[test]
    fn test_modified_files_are_ordered_by_status() {
        let mut store = store_with(vec![
            upstream_blob(1, "deleted.md", "d"),
            upstream_blob(2, "modified.md", "m"),
        ]);
        store.create_file("new.md", "n", EntryKind::Blob).unwrap();
        store.delete_file(1).unwrap();
        store.update_file_content(2, "m2").unwrap();

        let order: Vec<_> = store
            .get_modified_files()
            .into_iter()
            .map(|f| f.status)
            .collect();
        assert_eq!(
            order,
            vec![FileStatus::New, FileStatus::Modified, FileStatus::Deleted]
        );
    }

    #[test]
    fn test_modified_files_exclude_trees() {
        let mut store = store_with(vec![upstream_tree(1, "docs")]);
        store.create_file("drafts", "", EntryKind::Tree).unwrap();
        store.delete_file(1).unwrap();

        assert!(store.get_modified_files().is_empty());
        assert_eq!(store.get_dirty_files().len(), 2);
    }

    #[test]
    fn test_revert_restores_original_content() {
        let mut store = store_with(vec![upstream_blob(1, "a.md", "original")]);
        store.update_file_content(1, "changed").unwrap();
        store.delete_file(1).unwrap();
        store.revert_file(1).unwrap();

        let entry = store.get(1).unwrap();
        assert_eq!(entry.content.as_deref(), Some("original"));
        assert_eq!(entry.status, FileStatus::Unmodified);
        assert!(!entry.is_deleted());
        assert!(!entry.is_dirty);
    }

    #[test]
    fn test_revert_of_directory_restores_descendants() {
        let mut store = store_with(vec![upstream_tree(1, "a"), upstream_blob(2, "a/b", "b")]);
        store.delete_file(1).unwrap();
        store.revert_file(1).unwrap();

        assert!(store.get_dirty_files().is_empty());
        assert_eq!(store.files().len(), 2);
    }

    #[test]
    fn test_revert_all_clears_every_change() {
        let mut store = store_with(vec![
            upstream_blob(1, "a.md", "a"),
            upstream_blob(2, "b.md", "b"),
            upstream_tree(3, "c"),
        ]);
        store.update_file_content(1, "a2").unwrap();
        store.delete_file(2).unwrap();
        store.delete_file(3).unwrap();
        store.create_file("new.md", "n", EntryKind::Blob).unwrap();

        store.revert_all_files();

        assert!(store.get_dirty_files().is_empty());
        assert_eq!(store.files().len(), 3);
        assert_eq!(store.get(1).unwrap().content.as_deref(), Some("a"));
    }

    #[test]
    fn test_finalizer_purges_tombstones_and_cleans_the_rest() {
        let mut store = store_with(vec![
            upstream_blob(1, "a.md", "a"),
            upstream_blob(2, "b.md", "b"),
        ]);
        store.update_file_content(1, "a2").unwrap();
        store.delete_file(2).unwrap();
        let new_id = store.create_file("c.md", "c", EntryKind::Blob).unwrap();

        store.update_file_original_content();

        assert!(store.get(2).is_none());
        for id in [1, new_id] {
            let entry = store.get(id).unwrap();
            assert_eq!(entry.status, FileStatus::Unmodified);
            assert!(!entry.is_dirty);
            assert!(entry.original_content.is_none());
        }
        assert_eq!(store.get(1).unwrap().content.as_deref(), Some("a2"));
    }

    #[test]
    fn test_reconcile_keeps_dirty_edits() {
        let mut store = store_with(vec![upstream_blob(1, "a.md", "base")]);
        store.update_file_content(1, "X").unwrap();

        let outcome = store.reconcile_entry(1, "Y".to_string());

        let entry = store.get(1).unwrap();
        assert_eq!(outcome, SyncOutcome::Diverged);
        assert_eq!(entry.content.as_deref(), Some("X"));
        assert_eq!(entry.original_content.as_deref(), Some("Y"));
        assert_eq!(entry.status, FileStatus::Modified);
    }

    #[test]
    fn test_reconcile_fast_forwards_clean_entries() {
        let mut store = store_with(vec![
            upstream_blob(1, "a.md", "old"),
            FileEntry::upstream(2, "b.md", EntryKind::Blob, "s"),
        ]);

        assert_eq!(store.reconcile_entry(1, "new".into()), SyncOutcome::Adopted);
        assert_eq!(store.reconcile_entry(2, "fresh".into()), SyncOutcome::Adopted);
        assert_eq!(store.reconcile_entry(1, "new".into()), SyncOutcome::Unchanged);
        assert_eq!(store.get(1).unwrap().content.as_deref(), Some("new"));
        assert_eq!(store.get(2).unwrap().content.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_reconcile_keeps_tombstones_deleted() {
        let mut store = store_with(vec![upstream_blob(1, "a.md", "old")]);
        store.delete_file(1).unwrap();

        assert_eq!(store.reconcile_entry(1, "moved".into()), SyncOutcome::Diverged);
        let entry = store.get(1).unwrap();
        assert!(entry.is_deleted());
        assert_eq!(entry.original_content.as_deref(), Some("moved"));
    }

    #[test]
    fn test_reconcile_skips_new_entries() {
        let mut store = FileStore::new();
        let id = store.create_file("a.md", "local", EntryKind::Blob).unwrap();
        assert_eq!(store.reconcile_entry(id, "remote".into()), SyncOutcome::Skipped);
        assert_eq!(store.get(id).unwrap().content.as_deref(), Some("local"));
    }

    #[test]
    fn test_restore_current_file_falls_back_to_readme() {
        let store = store_with(vec![upstream_tree(1, "docs"), upstream_blob(2, "ReadMe.MD", "")]);
        assert_eq!(store.current_file().map(|f| f.id), Some(2));
    }

    #[test]
    fn test_removing_selected_entry_clears_selection() {
        let mut store = FileStore::new();
        let id = store.create_file("a.md", "", EntryKind::Blob).unwrap();
        store.select_file(id).unwrap();
        store.set_focused_item(id).unwrap();

        store.revert_file(id).unwrap();

        assert!(store.current_file().is_none());
        assert!(store.focused_item().is_none());
    }

    #[test]
    fn test_store_handle_shares_state() {
        let handle = StoreHandle::new(FileStore::new());
        let other = handle.clone();
        handle
            .write(|s| s.create_file("a.md", "", EntryKind::Blob))
            .unwrap();
        assert_eq!(other.read(|s| s.files().len()), 1);
    }
}
