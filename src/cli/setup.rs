//! Setup command - authenticate, configure the credential helper, apply identity
//!
//! Flow: locate glab -> auth status -> (login) -> credential helper ->
//! fetch identity -> apply or preview. A missing glab or a failed login
//! aborts before anything is written. A dry run never writes git config.

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, arrow, check, spinner_style, warn_mark};
use anstream::{eprintln, println};
use glab_git_id::error::{Error, Result};
use glab_git_id::identity::{CredentialHelperPlan, USER_EMAIL_KEY, USER_NAME_KEY};
use glab_git_id::{IdentityManager, Scope, SetupOptions, UserInfo};
use indicatif::ProgressBar;
use std::io::IsTerminal;
use std::time::Duration;

/// Run the setup flow
pub async fn run_setup(ctx: &CommandContext) -> Result<UserInfo> {
    let settings = &ctx.settings;
    let manager = ctx.manager();

    let glab_path = manager.glab().resolve_executable_path().await?;
    tracing::debug!(glab = %glab_path, "found glab");

    if !manager.ensure_authenticated(&settings.auth).await {
        return Err(Error::AuthenticationFailed(settings.auth.hostname.clone()));
    }

    let options = SetupOptions {
        hostname: Some(settings.auth.hostname.clone()),
        scope: settings.scope,
        dry_run: settings.dry_run,
    };

    let spinner = std::io::stdout().is_terminal().then(|| {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(format!(
            "Fetching GitLab user from {}...",
            settings.auth.hostname.emphasis()
        ));
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    });

    let result = manager.setup_identity(&options).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let user = result?;

    println!();
    if settings.dry_run {
        let hostname = settings.auth.hostname.as_str();
        let helper = planned_helper(&manager, hostname, settings.force_helper).await;

        println!("{}", "Dry run - git config left unchanged. Would run:".muted());
        if let Some(plan) = &helper {
            print_command(Scope::Global, &[plan.key.clone(), quoted("")]);
            print_command(
                Scope::Global,
                &["--add".to_string(), plan.key.clone(), quoted(&plan.helper)],
            );
        }
        print_command(settings.scope, &[USER_NAME_KEY.to_string(), quoted(&user.username)]);
        print_command(settings.scope, &[USER_EMAIL_KEY.to_string(), quoted(&user.email)]);
    } else {
        println!(
            "{} {}",
            check(),
            format!("Git identity configured ({} scope)", settings.scope).success()
        );
        println!("  {USER_NAME_KEY}:  {}", user.username.accent());
        println!("  {USER_EMAIL_KEY}: {}", user.email.accent());
    }

    Ok(user)
}

/// Helper writes a real run would make, if any
async fn planned_helper(
    manager: &IdentityManager<'_>,
    hostname: &str,
    force: bool,
) -> Option<CredentialHelperPlan> {
    match manager.plan_git_credential_helper(hostname, force).await {
        Ok(plan) => plan,
        Err(e) => {
            let message = format!("Skipping git credential helper: {e}");
            eprintln!("{} {}", warn_mark(), message.warning());
            None
        }
    }
}

fn print_command(scope: Scope, args: &[String]) {
    let flag = scope.as_flag();
    println!("  {} git config {flag} {}", arrow(), args.join(" ").accent());
}

fn quoted(value: &str) -> String {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}
