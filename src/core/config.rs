//! Connection identity and editor settings.
//!
//! Settings live in `config.json` inside the per-user config directory.
//! Environment variables override the file for the current process only.

use crate::core::dirs::get_config_directory;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_BRANCH: &str = "main";
const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RepositoryConfig {
    pub owner: String,
    pub name: String,
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            name: String::new(),
            branch: default_branch(),
        }
    }
}

impl RepositoryConfig {
    /// Key that scopes persisted state to one repository and branch
    pub fn identity(&self) -> String {
        format!("{}/{}@{}", self.owner, self.name, self.branch)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthorConfig {
    pub name: String,
    pub email: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "ghedit".to_string(),
            email: "ghedit@users.noreply.github.com".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EditorConfig {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub author: AuthorConfig,
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            repository: RepositoryConfig::default(),
            token: None,
            api_base_url: default_api_base_url(),
            author: AuthorConfig::default(),
            max_concurrent_requests: default_max_concurrent_requests(),
            path: None,
        }
    }
}

impl EditorConfig {
    /// Load the user config, creating it on first use, then apply env overrides
    pub fn load_or_create() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// The config file as stored, without env overrides; use this before `save`
    pub fn load_file() -> Result<Self> {
        Self::load_or_create_at(&get_config_directory()?.join(CONFIG_FILE))
    }

    pub fn load_or_create_at(config_file: &Path) -> Result<Self> {
        let mut config = if config_file.exists() {
            let content = std::fs::read_to_string(config_file)?;
            serde_json::from_str::<Self>(&content)?
        } else {
            log::debug!("Creating default config at {}", config_file.display());
            let config = Self::default();
            write_config(config_file, &config)?;
            config
        };
        config.path = Some(config_file.to_path_buf());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file = match &self.path {
            Some(path) => path.clone(),
            None => get_config_directory()?.join(CONFIG_FILE),
        };
        write_config(&config_file, self)
    }

    fn apply_env_overrides(&mut self) {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        if let Some(owner) = var("GHEDIT_OWNER") {
            self.repository.owner = owner;
        }
        if let Some(name) = var("GHEDIT_REPO") {
            self.repository.name = name;
        }
        if let Some(branch) = var("GHEDIT_BRANCH") {
            self.repository.branch = branch;
        }
        if let Some(token) = var("GHEDIT_TOKEN") {
            self.token = Some(token);
        }
        if let Some(url) = var("GHEDIT_API_URL") {
            self.api_base_url = url;
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.repository.owner.is_empty() && !self.repository.name.is_empty()
    }

    pub fn is_readonly(&self) -> bool {
        self.token.as_deref().map_or(true, str::is_empty)
    }

    pub fn set_repository(&mut self, owner: &str, name: &str, branch: Option<&str>) -> Result<()> {
        self.repository.owner = owner.to_string();
        self.repository.name = name.to_string();
        if let Some(branch) = branch {
            self.repository.branch = branch.to_string();
        }
        self.save()
    }

    pub fn set_token(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        self.save()
    }

    pub fn clear_token(&mut self) -> Result<()> {
        self.token = None;
        self.save()
    }
}

fn write_config(config_file: &Path, config: &EditorConfig) -> Result<()> {
    if let Some(dir) = config_file.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(config_file, content)?;
    Ok(())
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_max_concurrent_requests() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_unconfigured_and_readonly() {
        let config = EditorConfig::default();
        assert!(!config.is_configured());
        assert!(config.is_readonly());
        assert_eq!(config.repository.branch, "main");
    }

    #[test]
    fn test_empty_token_is_readonly() {
        let config = EditorConfig {
            token: Some(String::new()),
            ..EditorConfig::default()
        };
        assert!(config.is_readonly());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("nested").join("config.json");
        let config = EditorConfig::load_or_create_at(&file).unwrap();
        assert!(file.exists());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_token_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.json");
        let mut config = EditorConfig::load_or_create_at(&file).unwrap();
        config.set_repository("octo", "site", None).unwrap();
        config.set_token("secret").unwrap();

        let reloaded = EditorConfig::load_or_create_at(&file).unwrap();
        assert!(reloaded.is_configured());
        assert!(!reloaded.is_readonly());

        let mut reloaded = reloaded;
        reloaded.clear_token().unwrap();
        assert!(EditorConfig::load_or_create_at(&file).unwrap().is_readonly());
    }

    #[test]
    fn test_identity_includes_branch() {
        let repo = RepositoryConfig {
            owner: "octo".into(),
            name: "site".into(),
            branch: "main".into(),
        };
        assert_eq!(repo.identity(), "octo/site@main");
    }
}
