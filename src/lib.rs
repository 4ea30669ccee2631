//! glab-git-id: git identity and credential helper from your GitLab account
//!
//! Everything goes through external executables: `glab` for GitLab and
//! `git` for configuration. The [`exec::CommandRunner`] trait is the seam
//! between this crate and the OS, so every operation can be driven by a
//! scripted runner in tests.

pub mod config;
pub mod error;
pub mod exec;
pub mod git;
pub mod glab;
pub mod identity;
pub mod report;
pub mod types;

pub use error::{Error, Result};
pub use exec::{CommandRunner, ExecOptions, SystemRunner};
pub use git::GitConfig;
pub use glab::GlabClient;
pub use identity::IdentityManager;
pub use report::{Reporter, TracingReporter};
pub use types::{
    ApiProtocol, AuthOptions, ExecResult, GitIdentity, GitProtocol, Scope, SetupOptions, UserInfo,
};
