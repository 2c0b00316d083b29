//! Centralized initialization for commands.
//!
//! [`Workspace::open`] performs the setup every subcommand needs:
//! 1. **Config loading**: user config plus environment overrides
//! 2. **Store creation**: persistence scoped to the repository identity
//! 3. **State restore**: persisted working set and selection
//! 4. **Engine wiring**: GitHub client, commit author, request concurrency

use crate::core::config::EditorConfig;
use crate::core::dirs::get_data_directory;
use crate::core::engine::RemoteEngine;
use crate::core::error::{EditorError, Result};
use crate::core::github::GitHubClient;
use crate::core::persist::Persistence;
use crate::core::state::FileId;
use crate::core::store::{FileStore, StoreHandle};
use std::path::Path;

pub struct Workspace {
    pub config: EditorConfig,
    pub engine: RemoteEngine<GitHubClient>,
}

impl Workspace {
    pub fn open() -> Result<Self> {
        let config = EditorConfig::load_or_create()?;
        Self::open_with(config, &get_data_directory()?)
    }

    pub fn open_with(config: EditorConfig, data_dir: &Path) -> Result<Self> {
        let persistence = Persistence::for_repository(data_dir, &config.repository.identity());
        let mut store = FileStore::with_persistence(persistence);
        if !store.load_persisted_files() {
            log::debug!("No persisted working set for {}", config.repository.identity());
        }

        let client = GitHubClient::new(&config)?;
        let engine = RemoteEngine::new(StoreHandle::new(store), client)
            .with_author(config.author.clone())
            .with_max_concurrency(config.max_concurrent_requests);

        Ok(Self { config, engine })
    }

    /// Fail early for commands that need a repository identity
    pub fn require_configured(&self) -> Result<()> {
        if self.config.is_configured() {
            Ok(())
        } else {
            Err(EditorError::NotConfigured)
        }
    }

    pub fn store(&self) -> &StoreHandle {
        self.engine.store()
    }

    pub fn resolve(&self, path: &str) -> Result<FileId> {
        self.store().read(|s| s.id_for_path(path))
    }
}
