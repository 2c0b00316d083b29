//! Ready-made working sets for engine tests

#![allow(dead_code)]

use crate::common::mock_remote::MockRemote;
use ghedit::{FileId, FileStore, Persistence, RemoteEngine, StoreHandle};
use std::path::Path;

pub const IDENTITY: &str = "octo/site@main";

pub const README: &str = "# Site\n";
pub const INDEX: &str = "<h1>Hello</h1>\n";
pub const STYLE: &str = "body { margin: 0; }\n";

/// A small site: two top-level files and one nested stylesheet
pub fn site_remote() -> MockRemote {
    MockRemote::new(&[
        ("README.md", README),
        ("index.html", INDEX),
        ("assets/style.css", STYLE),
    ])
    .with_dir("assets")
}

pub fn engine_for(remote: &MockRemote) -> RemoteEngine<MockRemote> {
    RemoteEngine::new(StoreHandle::new(FileStore::new()), remote.clone())
}

/// Engine whose store persists under `data_dir`
pub fn persistent_engine_for(remote: &MockRemote, data_dir: &Path) -> RemoteEngine<MockRemote> {
    let persistence = Persistence::for_repository(data_dir, IDENTITY);
    RemoteEngine::new(
        StoreHandle::new(FileStore::with_persistence(persistence)),
        remote.clone(),
    )
}

/// Engine with the upstream tree already loaded
pub async fn loaded_engine(remote: &MockRemote) -> RemoteEngine<MockRemote> {
    let engine = engine_for(remote);
    engine.load_tree().await.unwrap();
    engine
}

pub fn id_of(engine: &RemoteEngine<MockRemote>, path: &str) -> FileId {
    engine.store().read(|s| s.id_for_path(path)).unwrap()
}
