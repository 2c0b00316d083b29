//! On-disk persistence of the working set and the selection.
//!
//! Each repository identity gets its own directory, named by the md5 digest
//! of the identity string. The working set goes to `files.json`, the
//! selection to `selection.json`. A corrupted state file is logged and then
//! treated as absent, so a bad write never blocks a fresh tree load.

use crate::core::error::{EditorError, Result};
use crate::core::state::{FileEntry, FileId, PersistedState, Selection};
use std::fs;
use std::path::{Path, PathBuf};

const FILES_FILE: &str = "files.json";
const SELECTION_FILE: &str = "selection.json";

#[derive(Debug, Clone)]
pub struct Persistence {
    dir: PathBuf,
    identity: String,
}

impl Persistence {
    /// Scope persistence under `base` to one repository identity
    pub fn for_repository(base: &Path, identity: &str) -> Self {
        let repo_hash = format!("{:x}", md5::compute(identity.as_bytes()));
        log::debug!("Persistence for {identity} at {repo_hash}");
        Self {
            dir: base.join(repo_hash),
            identity: identity.to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_files(&self, files: &[FileEntry], last_issued_id: FileId) -> Result<()> {
        // A pending load's placeholder is not content
        let files: Vec<FileEntry> = files
            .iter()
            .cloned()
            .map(|mut entry| {
                if entry.is_loading {
                    entry.content = None;
                }
                entry
            })
            .collect();
        let count = files.len();
        let state = PersistedState::new(&self.identity, files, last_issued_id);
        let json = serde_json::to_string_pretty(&state).map_err(|e| {
            log::error!("Failed to serialize working set: {e}");
            EditorError::state_serialization_failed(e)
        })?;
        self.write(FILES_FILE, json)?;
        log::debug!("Persisted {count} entries");
        Ok(())
    }

    /// Load the persisted working set; `None` when missing or unreadable
    pub fn load_files(&self) -> Option<PersistedState> {
        let state: PersistedState = self.read(FILES_FILE)?;
        if state.repository != self.identity {
            log::warn!(
                "Ignoring state for {} found under {}",
                state.repository,
                self.identity
            );
            return None;
        }
        Some(state)
    }

    pub fn save_selection(&self, selection: &Selection) -> Result<()> {
        let json = serde_json::to_string_pretty(selection)
            .map_err(EditorError::state_serialization_failed)?;
        self.write(SELECTION_FILE, json)
    }

    pub fn load_selection(&self) -> Selection {
        self.read(SELECTION_FILE).unwrap_or_default()
    }

    fn write(&self, name: &str, json: String) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| EditorError::state_directory_creation_failed(&self.dir, e))?;

        let file = self.dir.join(name);
        if let Err(e) = fs::write(&file, json) {
            log::error!("Failed to write state file '{}': {}", file.display(), e);
            return Err(EditorError::state_write_failed(&file, e));
        }
        Ok(())
    }

    fn read<T: serde::de::DeserializeOwned>(&self, name: &str) -> Option<T> {
        let file = self.dir.join(name);
        if !file.exists() {
            log::debug!("State file does not exist: {}", file.display());
            return None;
        }

        let parsed = fs::read_to_string(&file)
            .map_err(|e| EditorError::state_read_failed(&file, e))
            .and_then(|content| {
                serde_json::from_str(&content).map_err(|e| EditorError::state_parse_failed(&file, e))
            });

        match parsed {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("{e}; starting without persisted state");
                None
            }
        }
    }
}
