//! Core types for glab-git-id

use std::str::FromStr;

/// Default GitLab host
pub const DEFAULT_HOSTNAME: &str = "gitlab.com";

/// Outcome of one external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Process exit code (synthetic when the process could not be spawned)
    pub exit_code: i32,
    /// Captured stdout, trailing whitespace trimmed (empty when inherited)
    pub stdout: String,
    /// Captured stderr, trailing whitespace trimmed (empty when inherited)
    pub stderr: String,
}

impl ExecResult {
    /// Whether the command exited with code 0
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Git configuration tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Per-user configuration (`--global`)
    #[default]
    Global,
    /// Per-repository configuration (`--local`)
    Local,
}

impl Scope {
    /// The `git config` flag selecting this scope
    pub const fn as_flag(self) -> &'static str {
        match self {
            Self::Global => "--global",
            Self::Local => "--local",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Protocol glab configures for git operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GitProtocol {
    /// SSH remotes
    Ssh,
    /// HTTPS remotes
    #[default]
    Https,
    /// Plain HTTP remotes
    Http,
}

impl std::fmt::Display for GitProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ssh => write!(f, "ssh"),
            Self::Https => write!(f, "https"),
            Self::Http => write!(f, "http"),
        }
    }
}

impl FromStr for GitProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssh" => Ok(Self::Ssh),
            "https" => Ok(Self::Https),
            "http" => Ok(Self::Http),
            other => Err(format!("unknown git protocol '{other}' (expected ssh, https or http)")),
        }
    }
}

/// Protocol glab uses to talk to the GitLab API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiProtocol {
    /// HTTPS
    #[default]
    Https,
    /// Plain HTTP
    Http,
}

impl std::fmt::Display for ApiProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Https => write!(f, "https"),
            Self::Http => write!(f, "http"),
        }
    }
}

impl FromStr for ApiProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "https" => Ok(Self::Https),
            "http" => Ok(Self::Http),
            other => Err(format!("unknown API protocol '{other}' (expected https or http)")),
        }
    }
}

/// Options for `glab auth login`
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct AuthOptions {
    /// GitLab host to authenticate against
    pub hostname: String,
    /// Personal access token. With `read_token_from_stdin` set this holds the
    /// text read from stdin and is piped to glab instead of passed as a flag.
    pub token: Option<String>,
    /// CI job token; wins over any other token source
    pub job_token: Option<String>,
    /// Protocol for git operations
    pub git_protocol: GitProtocol,
    /// Protocol for API calls
    pub api_protocol: ApiProtocol,
    /// Alternate API host
    pub api_host: Option<String>,
    /// Store the token in the OS keyring
    pub use_keyring: bool,
    /// Hand the token to glab on stdin (`--stdin`)
    pub read_token_from_stdin: bool,
    /// Extra diagnostics
    pub verbose: bool,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            token: None,
            job_token: None,
            git_protocol: GitProtocol::default(),
            api_protocol: ApiProtocol::default(),
            api_host: None,
            use_keyring: false,
            read_token_from_stdin: false,
            verbose: false,
        }
    }
}

/// How the login credential reaches glab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource<'a> {
    /// `--job-token <value>`
    JobToken(&'a str),
    /// `--token <value>`
    Token(&'a str),
    /// `--stdin`, with the token text to pipe if we already have it
    Stdin(Option<&'a str>),
    /// No token; glab prompts for everything
    Interactive,
}

impl AuthOptions {
    /// Pick the credential source: job token > token > stdin.
    pub fn token_source(&self) -> TokenSource<'_> {
        if let Some(job_token) = self.job_token.as_deref() {
            return TokenSource::JobToken(job_token);
        }
        if self.read_token_from_stdin {
            return TokenSource::Stdin(self.token.as_deref());
        }
        match self.token.as_deref() {
            Some(token) => TokenSource::Token(token),
            None => TokenSource::Interactive,
        }
    }
}

/// GitLab account identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    /// Account username (non-empty)
    pub username: String,
    /// Primary email (non-empty)
    pub email: String,
}

/// Current git identity at one scope; either key may be unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    /// `user.name`
    pub username: Option<String>,
    /// `user.email`
    pub email: Option<String>,
}

impl GitIdentity {
    /// Both keys are set
    pub const fn is_complete(&self) -> bool {
        self.username.is_some() && self.email.is_some()
    }
}

/// Options for identity setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    /// GitLab host to read the account from (`None` = glab's default)
    pub hostname: Option<String>,
    /// Where to write `user.name` / `user.email`
    pub scope: Scope,
    /// Preview only; never writes git config
    pub dry_run: bool,
}
