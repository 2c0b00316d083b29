//! Isolated config and data directories for running the binary

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct Sandbox {
    config_home: TempDir,
    data_home: TempDir,
}

impl Sandbox {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            config_home: TempDir::new()?,
            data_home: TempDir::new()?,
        })
    }

    /// A sandbox pointed at a repository; nothing here talks to the network
    pub fn configured() -> anyhow::Result<Self> {
        let sandbox = Self::new()?;
        sandbox
            .cmd()
            .args(["config", "set-repo", "octo/site"])
            .assert()
            .success();
        Ok(sandbox)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ghedit").expect("binary is built");
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env("XDG_DATA_HOME", self.data_home.path())
            .env("NO_COLOR", "1")
            .env_remove("GHEDIT_OWNER")
            .env_remove("GHEDIT_REPO")
            .env_remove("GHEDIT_BRANCH")
            .env_remove("GHEDIT_TOKEN")
            // Unroutable, so an accidental request fails fast
            .env("GHEDIT_API_URL", "http://127.0.0.1:9");
        cmd
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_home.path().join("ghedit").join("config.json")
    }
}
