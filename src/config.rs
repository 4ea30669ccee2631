//! Settings resolution for the command-line front end
//!
//! Precedence is explicit flag > `GLAB_GIT_ID_*` environment variable >
//! built-in default. Conflicting choices are rejected here, before any
//! subprocess runs.

use crate::error::{Error, Result};
use crate::identity::credential_url;
use crate::types::{ApiProtocol, AuthOptions, DEFAULT_HOSTNAME, GitProtocol, Scope};

/// Prefix shared by every environment variable we read
pub const ENV_PREFIX: &str = "GLAB_GIT_ID_";

/// Environment variable names (without prefix)
pub mod env {
    /// Host to read the identity from
    pub const HOSTNAME: &str = "HOSTNAME";
    /// Verbose output
    pub const VERBOSE: &str = "VERBOSE";
    /// Preview only
    pub const DRY_RUN: &str = "DRY_RUN";
    /// Write to the repository config instead of the user config
    pub const LOCAL: &str = "LOCAL";
    /// Host to authenticate against (fallback for `HOSTNAME`)
    pub const AUTH_HOSTNAME: &str = "AUTH_HOSTNAME";
    /// Personal access token
    pub const AUTH_TOKEN: &str = "AUTH_TOKEN";
    /// `ssh`, `https` or `http`
    pub const AUTH_GIT_PROTOCOL: &str = "AUTH_GIT_PROTOCOL";
    /// `https` or `http`
    pub const AUTH_API_PROTOCOL: &str = "AUTH_API_PROTOCOL";
    /// Alternate API host
    pub const AUTH_API_HOST: &str = "AUTH_API_HOST";
    /// Store credentials in the OS keyring
    pub const AUTH_USE_KEYRING: &str = "AUTH_USE_KEYRING";
    /// CI job token
    pub const AUTH_JOB_TOKEN: &str = "AUTH_JOB_TOKEN";
}

/// Values as given on the command line (absent = not passed)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FlagValues {
    /// `--global`
    pub global: bool,
    /// `--local`
    pub local: bool,
    /// `--verbose`
    pub verbose: bool,
    /// `--dry-run`
    pub dry_run: bool,
    /// `--verify`
    pub verify: bool,
    /// `--hostname`
    pub hostname: Option<String>,
    /// `--token`
    pub token: Option<String>,
    /// `--stdin`
    pub stdin: bool,
    /// `--git-protocol`
    pub git_protocol: Option<GitProtocol>,
    /// `--api-protocol`
    pub api_protocol: Option<ApiProtocol>,
    /// `--api-host`
    pub api_host: Option<String>,
    /// `--use-keyring`
    pub use_keyring: bool,
    /// `--job-token`
    pub job_token: Option<String>,
    /// `--force-helper`
    pub force_helper: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Target git config scope
    pub scope: Scope,
    /// Verbose output
    pub verbose: bool,
    /// Preview only
    pub dry_run: bool,
    /// Only print the current identity
    pub verify: bool,
    /// Rewrite an existing credential helper
    pub force_helper: bool,
    /// Login options; `hostname` is also where the identity is read from
    pub auth: AuthOptions,
}

/// Parse a boolean environment value
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::Config(format!(
            "{ENV_PREFIX}{name} must be a boolean, got '{other}'"
        ))),
    }
}

struct EnvLookup<F> {
    lookup: F,
}

impl<F> EnvLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, name: &str) -> Option<String> {
        (self.lookup)(&format!("{ENV_PREFIX}{name}")).filter(|v| !v.trim().is_empty())
    }

    fn flag(&self, name: &str) -> Result<bool> {
        self.string(name)
            .map_or(Ok(false), |value| parse_bool(name, &value))
    }
}

/// Resolve settings from flags and an environment lookup
pub fn resolve<F>(flags: &FlagValues, lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let vars = EnvLookup { lookup };

    if flags.global && flags.local {
        return Err(Error::Config(
            "--global and --local are mutually exclusive".to_string(),
        ));
    }
    if flags.token.is_some() && flags.job_token.is_some() {
        return Err(Error::Config(
            "--token and --job-token are mutually exclusive".to_string(),
        ));
    }
    if flags.stdin && (flags.token.is_some() || flags.job_token.is_some()) {
        return Err(Error::Config(
            "--stdin cannot be combined with --token or --job-token".to_string(),
        ));
    }

    let scope = if flags.local || (!flags.global && vars.flag(env::LOCAL)?) {
        Scope::Local
    } else {
        Scope::Global
    };

    let explicit_credential = flags.token.is_some() || flags.job_token.is_some() || flags.stdin;
    let (token, job_token) = if explicit_credential {
        (flags.token.clone(), flags.job_token.clone())
    } else {
        (vars.string(env::AUTH_TOKEN), vars.string(env::AUTH_JOB_TOKEN))
    };
    if token.is_some() && job_token.is_some() {
        return Err(Error::Config(format!(
            "{ENV_PREFIX}{} and {ENV_PREFIX}{} are mutually exclusive",
            env::AUTH_TOKEN,
            env::AUTH_JOB_TOKEN
        )));
    }

    let hostname = flags
        .hostname
        .clone()
        .or_else(|| vars.string(env::HOSTNAME))
        .or_else(|| vars.string(env::AUTH_HOSTNAME))
        .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string());
    credential_url(&hostname)?;

    let git_protocol = match flags.git_protocol {
        Some(protocol) => protocol,
        None => vars
            .string(env::AUTH_GIT_PROTOCOL)
            .map(|v| v.parse::<GitProtocol>().map_err(Error::Config))
            .transpose()?
            .unwrap_or_default(),
    };
    let api_protocol = match flags.api_protocol {
        Some(protocol) => protocol,
        None => vars
            .string(env::AUTH_API_PROTOCOL)
            .map(|v| v.parse::<ApiProtocol>().map_err(Error::Config))
            .transpose()?
            .unwrap_or_default(),
    };

    let verbose = flags.verbose || vars.flag(env::VERBOSE)?;

    Ok(Settings {
        scope,
        verbose,
        dry_run: flags.dry_run || vars.flag(env::DRY_RUN)?,
        verify: flags.verify,
        force_helper: flags.force_helper,
        auth: AuthOptions {
            hostname,
            token,
            job_token,
            git_protocol,
            api_protocol,
            api_host: flags
                .api_host
                .clone()
                .or_else(|| vars.string(env::AUTH_API_HOST)),
            use_keyring: flags.use_keyring || vars.flag(env::AUTH_USE_KEYRING)?,
            read_token_from_stdin: flags.stdin,
            verbose,
        },
    })
}

/// Resolve settings against the process environment
pub fn resolve_from_env(flags: &FlagValues) -> Result<Settings> {
    resolve(flags, |name| std::env::var(name).ok())
}
