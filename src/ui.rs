//! Centralized UI formatting and color utilities
//!
//! Status symbols, colors, and quiet-mode handling shared by the
//! checkblock commands.

use colored::{ColoredString, Colorize};

use crate::check::CheckConfiguration;

/// Environment variable that enables quiet mode when set to `1` or `true`.
pub const QUIET_ENV: &str = "CHECKBLOCK_QUIET";

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for a block: ● when it carries a document, ○ when not.
pub fn document_icon(check: &CheckConfiguration) -> ColoredString {
    if check.check_document_text().is_some() {
        "●".green()
    } else {
        "○".white()
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Cyan for identifiers (block names, paths)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Print an informational line unless quiet mode is on.
pub fn info(message: &str) {
    if !is_quiet() {
        println!("{}", message);
    }
}

/// Print a success line prefixed with ✓ unless quiet mode is on.
pub fn success(message: &str) {
    if !is_quiet() {
        println!("{} {}", colors::success("✓"), message);
    }
}

/// Print a warning to stderr unless quiet mode is on.
pub fn warn(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "⚠".yellow(), colors::warning(message));
    }
}
