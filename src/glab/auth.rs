//! `glab auth status` / `glab auth login`

use super::{GlabClient, push_hostname};
use crate::exec::ExecOptions;
use crate::types::{AuthOptions, TokenSource};
use tracing::debug;

/// Build the `auth login` argument vector
///
/// Named flags first, then exactly one credential flag chosen by
/// [`AuthOptions::token_source`].
pub fn login_args(options: &AuthOptions) -> Vec<String> {
    let mut args = vec!["auth".to_string(), "login".to_string()];

    push_hostname(&mut args, Some(options.hostname.as_str()));
    args.push("--git-protocol".to_string());
    args.push(options.git_protocol.to_string());
    args.push("--api-protocol".to_string());
    args.push(options.api_protocol.to_string());
    if let Some(api_host) = &options.api_host {
        args.push("--api-host".to_string());
        args.push(api_host.clone());
    }
    if options.use_keyring {
        args.push("--use-keyring".to_string());
    }

    match options.token_source() {
        TokenSource::JobToken(token) => {
            args.push("--job-token".to_string());
            args.push(token.to_string());
        }
        TokenSource::Token(token) => {
            args.push("--token".to_string());
            args.push(token.to_string());
        }
        TokenSource::Stdin(_) => args.push("--stdin".to_string()),
        TokenSource::Interactive => {}
    }

    args
}

impl GlabClient<'_> {
    /// Whether glab holds valid credentials (for `hostname`, if given)
    ///
    /// Never fails: anything but exit 0 counts as not authenticated.
    pub async fn check_authenticated(&self, hostname: Option<&str>) -> bool {
        let mut args = vec!["auth".to_string(), "status".to_string()];
        push_hostname(&mut args, hostname);

        let result = self.glab(args, &ExecOptions::capture()).await;
        if !result.success() {
            debug!(
                exit_code = result.exit_code,
                stderr = %result.stderr,
                "glab auth status reports not authenticated"
            );
        }
        result.success()
    }

    /// Run `glab auth login` interactively
    ///
    /// glab may still prompt for anything the options leave open, so stdio
    /// is inherited. A stdin-supplied token is piped followed by a newline.
    pub async fn login(&self, options: &AuthOptions) -> bool {
        let args = login_args(options);
        let exec_options = match options.token_source() {
            TokenSource::Stdin(Some(token)) => {
                ExecOptions::interactive().with_input(format!("{token}\n"))
            }
            _ => ExecOptions::interactive(),
        };

        debug!(hostname = %options.hostname, "running glab auth login");
        let result = self.glab(args, &exec_options).await;
        if !result.success() {
            debug!(exit_code = result.exit_code, stderr = %result.stderr, "glab auth login failed");
        }
        result.success()
    }
}
