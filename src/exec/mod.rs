//! Running external programs
//!
//! Every call spawns exactly one process. Failures to spawn are folded into
//! the returned [`ExecResult`] so callers only ever branch on `exit_code`.

use crate::types::ExecResult;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Exit code reported when the program could not be spawned
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Exit code reported when the child was killed by a signal
pub const SIGNAL_EXIT_CODE: i32 = -1;

/// How a command's standard streams are wired
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Buffer stdout/stderr instead of inheriting them
    pub capture: bool,
    /// Text written to the child's stdin, which is then closed
    pub piped_input: Option<String>,
    /// Working directory for the child
    pub cwd: Option<PathBuf>,
}

impl ExecOptions {
    /// Buffered stdout/stderr; stdin is closed unless input is piped
    pub fn capture() -> Self {
        Self {
            capture: true,
            ..Self::default()
        }
    }

    /// Inherited stdio so prompts reach the user; piped input replaces stdin
    pub fn interactive() -> Self {
        Self::default()
    }

    /// Pipe `input` to the child's stdin
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.piped_input = Some(input.into());
        self
    }

    /// Run the child in `dir`
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// Something that can run an external program
///
/// The seam the git and glab shims are written against, so tests can
/// substitute a scripted runner.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to exit
    async fn run(&self, program: &str, args: &[String], options: &ExecOptions) -> ExecResult;
}

/// Runs real processes via `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub const fn new() -> Self {
        Self
    }
}

fn spawn_failure(program: &str, err: &std::io::Error) -> ExecResult {
    ExecResult {
        exit_code: SPAWN_FAILURE_EXIT_CODE,
        stdout: String::new(),
        stderr: format!("failed to run {program}: {err}"),
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String], options: &ExecOptions) -> ExecResult {
        debug!(program, ?args, capture = options.capture, "running command");

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &options.cwd {
            cmd.current_dir(dir);
        }

        if options.capture {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let stdin = match (&options.piped_input, options.capture) {
            (Some(_), _) => Stdio::piped(),
            (None, false) => Stdio::inherit(),
            (None, true) => Stdio::null(),
        };
        cmd.stdin(stdin);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                debug!(program, error = %e, "spawn failed");
                return spawn_failure(program, &e);
            }
        };

        if let Some(input) = &options.piped_input {
            if let Some(mut pipe) = child.stdin.take() {
                // Child may exit before reading; its exit code reports that.
                if let Err(e) = pipe.write_all(input.as_bytes()).await {
                    debug!(program, error = %e, "failed writing to child stdin");
                }
                drop(pipe);
            }
        }

        let output = match child.wait_with_output().await {
            Ok(output) => output,
            Err(e) => return spawn_failure(program, &e),
        };

        let exit_code = output.status.code().unwrap_or(SIGNAL_EXIT_CODE);
        debug!(program, exit_code, "command finished");

        ExecResult {
            exit_code,
            stdout: decode(&output.stdout),
            stderr: decode(&output.stderr),
        }
    }
}

/// Convert a list of string-ish values into owned args
pub fn args<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
