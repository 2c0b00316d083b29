use crate::core::error::{EditorError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "ghedit";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| home_dir().map(|home| home.join(".config")))?,
        "macos" => home_dir()?.join("Library/Application Support"),
        _ => dirs::config_dir()
            .ok_or_else(|| EditorError::config_error("Could not find config directory"))?,
    };

    Ok(base.join(APP_DIR))
}

/// Directory holding the persisted working sets, one subdirectory per repository
pub fn get_data_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|_| home_dir().map(|home| home.join(".local/share")))?,
        "macos" => home_dir()?.join("Library/Application Support"),
        _ => dirs::data_local_dir()
            .ok_or_else(|| EditorError::config_error("Could not find data directory"))?,
    };

    Ok(base.join(APP_DIR))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| EditorError::config_error("Could not find home directory"))
}
