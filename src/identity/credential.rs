//! git credential helper backed by `glab auth git-credential`

use super::IdentityManager;
use crate::error::{Error, Result};
use crate::types::Scope;
use url::Url;

/// `https://<hostname>`, rejecting hostnames that don't form a bare origin
pub fn credential_url(hostname: &str) -> Result<String> {
    let candidate = format!("https://{hostname}");
    let parsed =
        Url::parse(&candidate).map_err(|_| Error::InvalidHostname(hostname.to_string()))?;

    let bare_origin = parsed.host_str().is_some()
        && parsed.path() == "/"
        && parsed.query().is_none()
        && parsed.fragment().is_none()
        && parsed.username().is_empty()
        && !hostname.ends_with('/');
    if !bare_origin {
        return Err(Error::InvalidHostname(hostname.to_string()));
    }
    Ok(candidate)
}

/// Shell-invocable helper command for a resolved glab path
pub fn helper_command(glab_path: &str) -> String {
    format!("!{glab_path} auth git-credential")
}

/// `credential.<url>.helper`
pub fn helper_key(url: &str) -> String {
    format!("credential.{url}.helper")
}

/// Git config writes that route a host's HTTPS credentials through glab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialHelperPlan {
    /// `https://<hostname>`
    pub url: String,
    /// `credential.<url>.helper`
    pub key: String,
    /// `!<glab path> auth git-credential`
    pub helper: String,
}

impl IdentityManager<'_> {
    /// Work out the helper writes for `hostname` without applying them
    ///
    /// `None` when a non-empty helper already exists and `force` is unset.
    pub async fn plan_git_credential_helper(
        &self,
        hostname: &str,
        force: bool,
    ) -> Result<Option<CredentialHelperPlan>> {
        let glab_path = self.glab.resolve_executable_path().await?;
        let url = credential_url(hostname)?;
        let key = helper_key(&url);

        if !force {
            let existing = self
                .git
                .get_last(&key, Scope::Global)
                .await
                .filter(|v| !v.is_empty());
            if let Some(existing) = existing {
                self.reporter.log(&format!("Git credential helper already configured for {url}"));
                self.reporter.debug(&format!("{key} = {existing}"));
                return Ok(None);
            }
        }

        Ok(Some(CredentialHelperPlan {
            url,
            key,
            helper: helper_command(&glab_path),
        }))
    }

    /// Configure git to ask glab for HTTPS credentials for `hostname`
    ///
    /// An existing helper is left alone unless `force` is set. Returns
    /// `false` only when the final `--add` fails.
    pub async fn setup_git_credential_helper(&self, hostname: &str, force: bool) -> Result<bool> {
        let Some(plan) = self.plan_git_credential_helper(hostname, force).await? else {
            return Ok(true);
        };

        // Empty value resets the helper chain for this URL; nothing to reset is fine.
        if let Err(e) = self.git.set(&plan.key, "", Scope::Global).await {
            self.reporter.debug(&format!("Could not reset {}: {e}", plan.key));
        }

        match self.git.add(&plan.key, &plan.helper, Scope::Global).await {
            Ok(()) => {
                self.reporter.log(&format!("Configured git credential helper for {}", plan.url));
                Ok(true)
            }
            Err(Error::GitConfig(stderr)) => {
                self.reporter.error(&format!(
                    "Failed to configure git credential helper for {}: {stderr}",
                    plan.url
                ));
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
