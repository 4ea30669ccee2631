//! Console reporter for the binary

use crate::cli::style::{Stylize, cross, warn_mark};
use anstream::{eprintln, println};
use glab_git_id::Reporter;

/// Prints progress to stdout and problems to stderr
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    /// Reporter that shows debug lines only when `verbose`
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn log(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", warn_mark(), message.warning());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", cross(), message.failure());
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            println!("{}", message.muted());
        }
    }
}
