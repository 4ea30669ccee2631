//! Scripted `CommandRunner` standing in for `which`, `glab` and `git`
//!
//! Each test module drives only the helpers its scenarios need.

#![allow(dead_code)]

use async_trait::async_trait;
use glab_git_id::exec::{CommandRunner, ExecOptions};
use glab_git_id::types::ExecResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// Path `which glab` resolves to by default
pub const GLAB_PATH: &str = "/usr/local/bin/glab";

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub options: ExecOptions,
}

impl Call {
    /// `program arg1 arg2 ...`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn ok(stdout: &str) -> ExecResult {
    ExecResult {
        exit_code: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn fail(exit_code: i32, stderr: &str) -> ExecResult {
    ExecResult {
        exit_code,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Scripted runner
///
/// This manually implements `CommandRunner` rather than spawning anything:
/// - `which`/`where` resolve glab to [`GLAB_PATH`] unless removed
/// - glab commands answer from a table keyed by their argument string
/// - git config commands run against an in-memory store per scope
/// - every call is recorded for verification
pub struct MockRunner {
    glab_path: Mutex<Option<String>>,
    glab_responses: Mutex<HashMap<String, ExecResult>>,
    // (scope flag, key) -> values, last one wins on read
    git_store: Mutex<HashMap<(String, String), Vec<String>>>,
    git_write_errors: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<Call>>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            glab_path: Mutex::new(Some(GLAB_PATH.to_string())),
            glab_responses: Mutex::new(HashMap::new()),
            git_store: Mutex::new(HashMap::new()),
            git_write_errors: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    // === Scripting ===

    /// Make `which glab` fail
    pub fn without_glab(&self) -> &Self {
        *self.glab_path.lock().unwrap() = None;
        self
    }

    /// Make `which glab` print several candidates
    pub fn with_glab_lookup_output(&self, output: &str) -> &Self {
        *self.glab_path.lock().unwrap() = Some(output.to_string());
        self
    }

    /// Respond to `glab <args>` with `result`
    pub fn on_glab(&self, args: &str, result: ExecResult) -> &Self {
        self.glab_responses
            .lock()
            .unwrap()
            .insert(args.to_string(), result);
        self
    }

    /// `glab auth status --hostname <host>` exit code
    pub fn with_auth_status(&self, host: &str, authenticated: bool) -> &Self {
        let result = if authenticated {
            ok(&format!("Logged in to {host}"))
        } else {
            fail(1, &format!("{host}: not logged in"))
        };
        self.on_glab(&format!("auth status --hostname {host}"), result)
    }

    /// `glab api user --hostname <host>` output
    pub fn with_user_record(&self, host: &str, json: &str) -> &Self {
        self.on_glab(&format!("api user --hostname {host}"), ok(json))
    }

    /// Make every set/add of `key` fail with `stderr`
    pub fn fail_git_writes_for(&self, key: &str, stderr: &str) -> &Self {
        self.git_write_errors
            .lock()
            .unwrap()
            .insert(key.to_string(), stderr.to_string());
        self
    }

    /// Seed a git config value
    pub fn seed_git(&self, scope_flag: &str, key: &str, value: &str) -> &Self {
        self.git_store
            .lock()
            .unwrap()
            .entry((scope_flag.to_string(), key.to_string()))
            .or_default()
            .push(value.to_string());
        self
    }

    // === Inspection ===

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, program: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.program == program)
            .collect()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(Call::command_line).collect()
    }

    /// Number of git config set/add invocations (successful or not)
    pub fn git_write_count(&self) -> usize {
        self.calls_to("git")
            .iter()
            .filter(|c| is_git_write(&c.args))
            .count()
    }

    /// All values stored for `key` at `scope_flag`
    pub fn git_values(&self, scope_flag: &str, key: &str) -> Vec<String> {
        self.git_store
            .lock()
            .unwrap()
            .get(&(scope_flag.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    // === Fake git ===

    fn git(&self, args: &[String]) -> ExecResult {
        let Some((command, rest)) = args.split_first() else {
            return fail(1, "usage: git <command>");
        };
        if command != "config" || rest.is_empty() {
            return fail(1, "mock only supports git config");
        }
        let scope = rest[0].clone();
        let rest: Vec<&str> = rest[1..].iter().map(String::as_str).collect();

        match rest.as_slice() {
            ["--get", key] | [key] => self.git_read(&scope, key),
            ["--add", key, value] => self.git_write(&scope, key, value, true),
            [key, value] => self.git_write(&scope, key, value, false),
            _ => fail(129, "unsupported git config invocation"),
        }
    }

    fn git_read(&self, scope: &str, key: &str) -> ExecResult {
        let store = self.git_store.lock().unwrap();
        store
            .get(&(scope.to_string(), key.to_string()))
            .and_then(|values| values.last())
            .map_or_else(|| fail(1, ""), |value| ok(value))
    }

    fn git_write(&self, scope: &str, key: &str, value: &str, add: bool) -> ExecResult {
        if let Some(stderr) = self.git_write_errors.lock().unwrap().get(key) {
            return fail(255, stderr);
        }

        let mut store = self.git_store.lock().unwrap();
        let values = store
            .entry((scope.to_string(), key.to_string()))
            .or_default();
        if add {
            values.push(value.to_string());
        } else if values.len() > 1 {
            return fail(5, &format!("warning: {key} has multiple values"));
        } else {
            *values = vec![value.to_string()];
        }
        ok("")
    }
}

fn is_git_write(args: &[String]) -> bool {
    // config <scope> <key> <value> or config <scope> --add <key> <value>
    match args.len() {
        4 => !args[2].starts_with("--"),
        5 => args[2] == "--add",
        _ => false,
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, program: &str, args: &[String], options: &ExecOptions) -> ExecResult {
        self.calls.lock().unwrap().push(Call {
            program: program.to_string(),
            args: args.to_vec(),
            options: options.clone(),
        });

        match program {
            "which" | "where" => self
                .glab_path
                .lock()
                .unwrap()
                .clone()
                .map_or_else(|| fail(1, ""), |path| ok(&path)),
            "git" => self.git(args),
            _ => {
                let key = args.join(" ");
                self.glab_responses
                    .lock()
                    .unwrap()
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| fail(1, &format!("unscripted: {program} {key}")))
            }
        }
    }
}
