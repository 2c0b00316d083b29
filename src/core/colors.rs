//! Color mapping for working-set listings.
//!
//! # Color Scheme
//! - **New**: green
//! - **Modified**: yellow
//! - **Deleted**: red
//! - **Unmodified**: default terminal color
//! - Directories are shown in blue when unmodified

use crate::core::file_status::FileStatus;
use crate::core::state::FileEntry;
use colored::*;

/// Color an arbitrary text the way entries with `status` are shown
pub fn get_status_color_style(status: FileStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        FileStatus::New => Box::new(|text: &str| text.green()),
        FileStatus::Modified => Box::new(|text: &str| text.yellow()),
        FileStatus::Deleted => Box::new(|text: &str| text.red()),
        FileStatus::Unmodified => Box::new(|text: &str| text.normal()),
    }
}

/// One-character status badge, colored
pub fn get_status_badge(status: FileStatus) -> ColoredString {
    get_status_color_style(status)(status.as_str())
}

/// Path colored by status; directories get a trailing slash
pub fn get_colored_path(entry: &FileEntry) -> ColoredString {
    let shown = if entry.is_tree() {
        format!("{}/", entry.path)
    } else {
        entry.path.clone()
    };
    match (entry.status, entry.is_tree()) {
        (FileStatus::Unmodified, true) => shown.blue(),
        (status, _) => get_status_color_style(status)(&shown),
    }
}

/// Numbered line for the modified-set listing
pub fn format_file_status(index: usize, entry: &FileEntry) -> String {
    let index_colored = format!("[{index}]").cyan().bold();
    format!(
        "{index_colored} {}  {:<10} {}",
        get_status_badge(entry.status),
        entry.status.description(),
        get_colored_path(entry)
    )
}
