//! GitLab CLI (glab) shim
//!
//! Talks to GitLab only through the `glab` executable: `auth status`,
//! `auth login` and `api user`. Output is parsed here, never by callers.

mod auth;
mod user;

pub use auth::login_args;
pub use user::parse_user_record;

use crate::error::{Error, Result};
use crate::exec::{CommandRunner, ExecOptions};
use crate::types::ExecResult;
use tracing::debug;

/// Default glab binary name
pub const GLAB_BIN: &str = "glab";

/// Platform command used to find executables on `PATH`
#[cfg(windows)]
const LOOKUP_BIN: &str = "where";
#[cfg(not(windows))]
const LOOKUP_BIN: &str = "which";

/// Client for the glab executable
pub struct GlabClient<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
}

impl<'a> GlabClient<'a> {
    /// Client invoking `glab` from `PATH`
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self::with_program(runner, GLAB_BIN)
    }

    /// Client invoking a specific glab binary name or path
    pub fn with_program(runner: &'a dyn CommandRunner, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    async fn glab(&self, args: Vec<String>, options: &ExecOptions) -> ExecResult {
        self.runner.run(&self.program, &args, options).await
    }

    /// Absolute path of the glab executable
    ///
    /// Uses `which` (or `where` on Windows) and takes the first line when
    /// several candidates are printed.
    pub async fn resolve_executable_path(&self) -> Result<String> {
        let result = self
            .runner
            .run(
                LOOKUP_BIN,
                std::slice::from_ref(&self.program),
                &ExecOptions::capture(),
            )
            .await;

        if !result.success() {
            debug!(exit_code = result.exit_code, stderr = %result.stderr, "glab lookup failed");
            return Err(Error::ToolNotFound);
        }

        result
            .stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(ToString::to_string)
            .ok_or(Error::ToolNotFound)
    }
}

/// Append `--hostname <host>` when a host is given
fn push_hostname(args: &mut Vec<String>, hostname: Option<&str>) {
    if let Some(host) = hostname {
        args.push("--hostname".to_string());
        args.push(host.to_string());
    }
}
