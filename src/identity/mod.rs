//! Identity orchestration
//!
//! Composes the glab shim and the git config accessor into the user-facing
//! operations:
//! 1. `ensure_authenticated` - auth status, login if needed, credential helper
//! 2. `setup_git_credential_helper` - point git at `glab auth git-credential`
//! 3. `setup_identity` / `verify_identity` - write or read `user.name` / `user.email`
//!
//! Nothing is cached between calls; each operation can be re-run on its own.

mod credential;

pub use credential::{CredentialHelperPlan, credential_url, helper_command, helper_key};

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::git::GitConfig;
use crate::glab::GlabClient;
use crate::report::Reporter;
use crate::types::{AuthOptions, GitIdentity, Scope, SetupOptions, UserInfo};

/// git config key for the commit author name
pub const USER_NAME_KEY: &str = "user.name";
/// git config key for the commit author email
pub const USER_EMAIL_KEY: &str = "user.email";

/// Runs identity operations against glab and git
pub struct IdentityManager<'a> {
    glab: GlabClient<'a>,
    git: GitConfig<'a>,
    reporter: &'a dyn Reporter,
    force_credential_helper: bool,
    dry_run: bool,
}

impl<'a> IdentityManager<'a> {
    /// Manager using `runner` for every subprocess
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a dyn Reporter) -> Self {
        Self {
            glab: GlabClient::new(runner),
            git: GitConfig::new(runner),
            reporter,
            force_credential_helper: false,
            dry_run: false,
        }
    }

    /// Overwrite an existing credential helper during `ensure_authenticated`
    #[must_use]
    pub const fn force_credential_helper(mut self, force: bool) -> Self {
        self.force_credential_helper = force;
        self
    }

    /// Preview mode: `ensure_authenticated` leaves git config alone
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The glab client in use
    pub const fn glab(&self) -> &GlabClient<'a> {
        &self.glab
    }

    /// Make sure glab is logged in, logging in if needed
    ///
    /// Returns `false` only when a login was attempted and failed. The
    /// credential helper step is best effort: its failures are warnings.
    /// In dry-run mode the helper step is skipped.
    pub async fn ensure_authenticated(&self, options: &AuthOptions) -> bool {
        let hostname = options.hostname.as_str();
        if self.glab.check_authenticated(Some(hostname)).await {
            self.reporter.debug(&format!("Already authenticated with {hostname}"));
            self.best_effort_credential_helper(hostname).await;
            return true;
        }

        self.reporter.log(&format!("Not authenticated with {hostname}; starting glab login"));
        if !self.glab.login(options).await {
            self.reporter.error(&format!("Login to {hostname} failed"));
            return false;
        }

        self.reporter.log(&format!("Logged in to {hostname}"));
        self.best_effort_credential_helper(hostname).await;
        true
    }

    async fn best_effort_credential_helper(&self, hostname: &str) {
        if self.dry_run {
            self.reporter.debug("Dry run: leaving the git credential helper untouched");
            return;
        }

        let force = self.force_credential_helper;
        match self.setup_git_credential_helper(hostname, force).await {
            Ok(true) => {}
            Ok(false) => {
                self.reporter.warn("Could not configure the git credential helper; continuing");
            }
            Err(e) => {
                self.reporter.warn(&format!("Skipping git credential helper setup: {e}"));
            }
        }
    }

    /// Fetch the GitLab identity and write it to git config
    ///
    /// With `dry_run` nothing is written. The two writes are sequential and
    /// not transactional: if `user.name` fails, `user.email` is not attempted.
    pub async fn setup_identity(&self, options: &SetupOptions) -> Result<UserInfo> {
        let user = self.glab.get_user_info(options.hostname.as_deref()).await?;

        if options.dry_run {
            self.reporter.debug(&format!(
                "Skipping {USER_NAME_KEY}/{USER_EMAIL_KEY} writes at {} scope",
                options.scope
            ));
            return Ok(user);
        }

        self.git.set(USER_NAME_KEY, &user.username, options.scope).await?;
        self.git.set(USER_EMAIL_KEY, &user.email, options.scope).await?;

        self.reporter.debug(&format!(
            "Set {USER_NAME_KEY} and {USER_EMAIL_KEY} at {} scope",
            options.scope
        ));
        Ok(user)
    }

    /// Read the current git identity; missing keys are `None`
    pub async fn verify_identity(&self, scope: Scope) -> GitIdentity {
        let username = self.git.get(USER_NAME_KEY, scope).await;
        let email = self.git.get(USER_EMAIL_KEY, scope).await;
        GitIdentity { username, email }
    }
}
