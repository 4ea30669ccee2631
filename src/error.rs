//! Error types for glab-git-id

use thiserror::Error;

/// Where to get the GitLab CLI when it is missing
pub const GLAB_INSTALL_URL: &str = "https://gitlab.com/gitlab-org/cli#installation";

/// Errors raised by glab-git-id operations
///
/// "Not configured" and "not authenticated" are not errors: those come back
/// as `None` / `false` from the accessors that detect them.
#[derive(Debug, Error)]
pub enum Error {
    /// The GitLab CLI could not be located on `PATH`
    #[error("GitLab CLI (glab) is not installed or not on PATH. Install it from {GLAB_INSTALL_URL}")]
    ToolNotFound,

    /// `glab auth login` exited non-zero
    #[error("GitLab authentication failed for {0}")]
    AuthenticationFailed(String),

    /// `glab api user` exited non-zero
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// The user record was not valid JSON (or not an object)
    #[error("failed to parse GitLab user record: {message}\nraw output: {raw}")]
    MalformedUserRecord {
        /// Parser error message
        message: String,
        /// The offending text as returned by glab
        raw: String,
    },

    /// The user record has no usable `username`
    #[error("no username on account")]
    MissingUsername,

    /// The user record has no usable `email`
    #[error("no primary email set on account")]
    MissingEmail,

    /// A `git config` write failed; carries git's stderr
    #[error("git config error: {0}")]
    GitConfig(String),

    /// Invalid flag/environment combination
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Hostname that cannot be used in an `https://` URL
    #[error("invalid hostname '{0}'")]
    InvalidHostname(String),

    /// Anything else (I/O on our own stdio, etc.)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error belongs to the API failure family
    /// (failed call, malformed record, or missing required field).
    pub const fn is_api_failure(&self) -> bool {
        matches!(
            self,
            Self::GitLabApi(_)
                | Self::MalformedUserRecord { .. }
                | Self::MissingUsername
                | Self::MissingEmail
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
