//! Repository-relative path helpers.
//!
//! Paths in the working set are always stored normalized: no leading or
//! trailing slash and no empty segments. Backslashes are treated as
//! separators so paths typed on Windows land in the same form.

/// Normalize a repository-relative path.
///
/// ```
/// use ghedit::core::path::normalize_path;
///
/// assert_eq!(normalize_path("/docs//guide/"), "docs/guide");
/// assert_eq!(normalize_path("a\\b.md"), "a/b.md");
/// ```
pub fn normalize_path(path: &str) -> String {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Last segment of a normalized path
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// True when `path` is `root` itself or lives underneath it
pub fn is_within(path: &str, root: &str) -> bool {
    path == root
        || path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'))
}
