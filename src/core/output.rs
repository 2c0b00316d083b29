//! Unified output formatting for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: red for errors, yellow for warnings, green for success
//! - **Standardized spacing**: newline before every message block
//! - **Errors to stderr**: everything else goes to stdout so it can be piped

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a warning that does not stop the command
pub fn print_warning(message: &str) {
    println!("\n{} {}", "!".yellow(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
