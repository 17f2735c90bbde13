//! Output formatting
//!
//! This module provides utilities for displaying build progress lines
//! and formatted error messages to the user.

use std::io::Write;

/// Print a progress fragment without a trailing newline.
///
/// Flushed immediately so partial lines like `Building a.c... ` appear
/// before the compiler runs, even when stdout is piped.
pub fn progress(message: &str) {
    print!("{message}");
    let _ = std::io::stdout().flush();
}

/// Print a full progress line, flushed immediately.
pub fn progress_line(message: &str) {
    println!("{message}");
    let _ = std::io::stdout().flush();
}

/// Display an error on stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
}

/// Status message prefixes
pub mod status {
    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
