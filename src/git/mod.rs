//! Reading and writing git configuration through the `git` executable

use crate::error::{Error, Result};
use crate::exec::{CommandRunner, ExecOptions, args};
use crate::types::{ExecResult, Scope};
use std::path::{Path, PathBuf};
use tracing::debug;

const GIT_BIN: &str = "git";

/// Git config accessor
///
/// Holds no state besides where to run git; every call goes to the
/// config files on disk.
pub struct GitConfig<'a> {
    runner: &'a dyn CommandRunner,
    cwd: Option<PathBuf>,
}

impl<'a> GitConfig<'a> {
    /// Accessor running git in the current directory
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner, cwd: None }
    }

    /// Accessor running git inside `dir` (matters for local scope)
    pub fn in_dir(runner: &'a dyn CommandRunner, dir: impl AsRef<Path>) -> Self {
        Self {
            runner,
            cwd: Some(dir.as_ref().to_path_buf()),
        }
    }

    async fn git(&self, argv: Vec<String>) -> ExecResult {
        let mut options = ExecOptions::capture();
        options.cwd.clone_from(&self.cwd);
        self.runner.run(GIT_BIN, &argv, &options).await
    }

    /// `git config --<scope> <key> <value>`
    pub async fn set(&self, key: &str, value: &str, scope: Scope) -> Result<()> {
        debug!(key, %scope, "setting git config");
        let result = self.git(args(["config", scope.as_flag(), key, value])).await;

        if result.success() {
            Ok(())
        } else {
            Err(Error::GitConfig(result.stderr))
        }
    }

    /// `git config --<scope> <key>`
    ///
    /// Any non-zero exit means "not set".
    pub async fn get(&self, key: &str, scope: Scope) -> Option<String> {
        let result = self.git(args(["config", scope.as_flag(), key])).await;
        value_or_unset(key, result)
    }

    /// `git config --<scope> --get <key>`; last value wins for multi-valued keys
    pub async fn get_last(&self, key: &str, scope: Scope) -> Option<String> {
        let result = self.git(args(["config", scope.as_flag(), "--get", key])).await;
        value_or_unset(key, result)
    }

    /// `git config --<scope> --add <key> <value>`, appending to any existing values
    pub async fn add(&self, key: &str, value: &str, scope: Scope) -> Result<()> {
        debug!(key, %scope, "adding git config value");
        let result = self.git(args(["config", scope.as_flag(), "--add", key, value])).await;

        if result.success() {
            Ok(())
        } else {
            Err(Error::GitConfig(result.stderr))
        }
    }
}

fn value_or_unset(key: &str, result: ExecResult) -> Option<String> {
    if result.success() {
        Some(result.stdout)
    } else {
        debug!(key, exit_code = result.exit_code, "git config key not set");
        None
    }
}
