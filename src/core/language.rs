//! Editor language ids by file extension.

use crate::core::path::file_name;

/// Language id for a file, `plaintext` when the extension is unknown
pub fn language_for_path(path: &str) -> &'static str {
    let name = file_name(path);
    let Some((_, ext)) = name.rsplit_once('.') else {
        return "plaintext";
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" => "html",
        "css" => "css",
        "scss" | "sass" => "scss",
        "less" => "less",
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "vue" => "vue",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "md" | "markdown" => "markdown",
        "sh" | "bash" | "zsh" => "shell",
        "php" => "php",
        "py" => "python",
        "rb" => "ruby",
        "go" => "go",
        "java" => "java",
        "c" => "c",
        "cpp" => "cpp",
        "rs" => "rust",
        _ => "plaintext",
    }
}
