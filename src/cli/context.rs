//! Shared command context for CLI commands
//!
//! The one place the process-wide runner and console sink are chosen.

use crate::cli::console::ConsoleReporter;
use glab_git_id::config::Settings;
use glab_git_id::{IdentityManager, SystemRunner};

/// Runner, reporter and settings for one invocation
pub struct CommandContext {
    runner: SystemRunner,
    reporter: ConsoleReporter,
    /// Resolved settings
    pub settings: Settings,
}

impl CommandContext {
    /// Create a new command context
    pub const fn new(settings: Settings) -> Self {
        Self {
            runner: SystemRunner::new(),
            reporter: ConsoleReporter::new(settings.verbose),
            settings,
        }
    }

    /// Identity manager wired to the real `glab` and `git`
    pub fn manager(&self) -> IdentityManager<'_> {
        IdentityManager::new(&self.runner, &self.reporter)
            .force_credential_helper(self.settings.force_helper)
            .dry_run(self.settings.dry_run)
    }
}
