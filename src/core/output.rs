//! Diagnostic output.
//!
//! Standard output belongs to the status string read by tmux, so every
//! diagnostic goes to standard error.

use colored::*;

/// Formats and prints an error message on stderr
///
/// # Format
/// ```text
/// error: <message>
/// ```
///
/// # Colors
/// - "error:" in red
pub fn print_error(message: &str) {
    eprintln!("{} {}", error_prefix(), message);
}

fn error_prefix() -> ColoredString {
    "error:".red().bold()
}
