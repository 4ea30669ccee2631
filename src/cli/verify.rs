//! Verify command - show the current git identity

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check, warn_mark};
use anstream::println;
use glab_git_id::GitIdentity;
use glab_git_id::identity::{USER_EMAIL_KEY, USER_NAME_KEY};

/// Print `user.name` / `user.email` at the configured scope
///
/// Informational only: unset keys are shown, not treated as failure.
pub async fn run_verify(ctx: &CommandContext) -> GitIdentity {
    let scope = ctx.settings.scope;
    let identity = ctx.manager().verify_identity(scope).await;

    println!("{}", format!("Git identity ({scope} scope)").emphasis());
    println!("  {USER_NAME_KEY}:  {}", display(identity.username.as_deref()));
    println!("  {USER_EMAIL_KEY}: {}", display(identity.email.as_deref()));

    if identity.is_complete() {
        println!("{} {}", check(), "Identity is configured".success());
    } else {
        println!("{} {}", warn_mark(), "Identity is incomplete".warning());
    }

    identity
}

fn display(value: Option<&str>) -> String {
    value.map_or_else(|| "(not set)".muted(), |v| v.accent())
}
