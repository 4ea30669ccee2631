//! Command-line front end

pub mod console;
pub mod context;
pub mod setup;
pub mod style;
pub mod verify;

use clap::Parser;
use context::CommandContext;
use glab_git_id::config::{self, FlagValues, ENV_PREFIX};
use glab_git_id::error::{Error, Result};
use glab_git_id::{ApiProtocol, GitProtocol};
use tokio::io::AsyncReadExt;

/// Configure git identity and credential helper from your GitLab account
#[derive(Parser, Debug)]
#[command(name = "glab-git-id", version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Write to the global (per-user) git config [default]
    #[arg(short, long)]
    pub global: bool,

    /// Write to the local (per-repository) git config
    #[arg(short, long)]
    pub local: bool,

    /// Show debug output and error details
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be configured without changing anything
    #[arg(long = "dry-run", visible_alias = "dry")]
    pub dry_run: bool,

    /// Print the current git identity and exit
    #[arg(long)]
    pub verify: bool,

    /// GitLab hostname [default: gitlab.com]
    #[arg(long)]
    pub hostname: Option<String>,

    /// Personal access token for glab login
    #[arg(short, long)]
    pub token: Option<String>,

    /// Read the login token from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Protocol for git operations: ssh, https or http
    #[arg(short = 'p', long)]
    pub git_protocol: Option<GitProtocol>,

    /// Protocol for API calls: https or http
    #[arg(long)]
    pub api_protocol: Option<ApiProtocol>,

    /// Alternate API host
    #[arg(long)]
    pub api_host: Option<String>,

    /// Store the token in the OS keyring
    #[arg(long)]
    pub use_keyring: bool,

    /// CI job token for glab login
    #[arg(short, long)]
    pub job_token: Option<String>,

    /// Replace an existing git credential helper for the host
    #[arg(long)]
    pub force_helper: bool,
}

impl Cli {
    /// Flag values in library form
    pub fn flag_values(&self) -> FlagValues {
        FlagValues {
            global: self.global,
            local: self.local,
            verbose: self.verbose,
            dry_run: self.dry_run,
            verify: self.verify,
            hostname: self.hostname.clone(),
            token: self.token.clone(),
            stdin: self.stdin,
            git_protocol: self.git_protocol,
            api_protocol: self.api_protocol,
            api_host: self.api_host.clone(),
            use_keyring: self.use_keyring,
            job_token: self.job_token.clone(),
            force_helper: self.force_helper,
        }
    }

    /// Verbose from the flag or the environment, ignoring invalid env values
    pub fn wants_verbose(&self) -> bool {
        self.verbose
            || std::env::var(format!("{ENV_PREFIX}{}", config::env::VERBOSE))
                .ok()
                .and_then(|v| config::parse_bool(config::env::VERBOSE, &v).ok())
                .unwrap_or(false)
    }
}

/// Read a login token from our own stdin
async fn read_stdin_token() -> Result<String> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .map_err(|e| Error::Internal(format!("failed to read token from stdin: {e}")))?;

    let token = input.trim();
    if token.is_empty() {
        return Err(Error::Config("--stdin given but no token on stdin".to_string()));
    }
    Ok(token.to_string())
}

/// Resolve settings and dispatch to verify or setup
pub async fn run(cli: &Cli) -> Result<()> {
    let mut settings = config::resolve_from_env(&cli.flag_values())?;

    if settings.verify {
        let ctx = CommandContext::new(settings);
        verify::run_verify(&ctx).await;
        return Ok(());
    }

    if settings.auth.read_token_from_stdin {
        settings.auth.token = Some(read_stdin_token().await?);
    }

    let ctx = CommandContext::new(settings);
    setup::run_setup(&ctx).await?;
    Ok(())
}
