//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the escape codes when
//! stdout/stderr is not a terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark
pub const CHECK: &str = "✓";
/// Cross mark
pub const CROSS: &str = "✗";
/// Warning sign
pub const WARN: &str = "!";

/// Semantic colours for CLI output
pub trait Stylize: Display + Sized {
    /// Secondary, de-emphasized text
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Headings and labels
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Values the user cares about
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Completed actions
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Non-fatal problems
    fn warning(&self) -> String {
        self.yellow().to_string()
    }

    /// Failures
    fn failure(&self) -> String {
        self.red().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Red cross
pub fn cross() -> String {
    CROSS.failure()
}

/// Yellow warning marker
pub fn warn_mark() -> String {
    WARN.warning()
}

/// Muted arrow for list items
pub fn arrow() -> String {
    "→".muted()
}

/// Spinner used while waiting on glab
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
}
