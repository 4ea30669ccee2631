//! `glab api user` and user-record parsing

use super::{GlabClient, push_hostname};
use crate::error::{Error, Result};
use crate::exec::ExecOptions;
use crate::types::UserInfo;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// The fields we need from GitLab's `/user` record
#[derive(Deserialize)]
struct UserRecord {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

fn malformed(message: impl Into<String>, raw: &str) -> Error {
    Error::MalformedUserRecord {
        message: message.into(),
        raw: raw.to_string(),
    }
}

/// Decode a JSON object into [`UserRecord`]
///
/// Only objects are accepted; arrays must not map onto fields by position.
fn decode(raw: &str) -> Result<UserRecord> {
    let value: Value = serde_json::from_str(raw).map_err(|e| malformed(e.to_string(), raw))?;
    if !value.is_object() {
        return Err(malformed("expected a JSON object", raw));
    }
    serde_json::from_value(value).map_err(|e| malformed(e.to_string(), raw))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn username_of(record: UserRecord) -> Result<String> {
    non_empty(record.username).ok_or(Error::MissingUsername)
}

fn email_of(record: UserRecord) -> Result<String> {
    non_empty(record.email).ok_or(Error::MissingEmail)
}

/// Parse a raw user record into [`UserInfo`]
///
/// Both `username` and `email` must be present and non-empty.
pub fn parse_user_record(raw: &str) -> Result<UserInfo> {
    let record = decode(raw)?;
    let username = non_empty(record.username).ok_or(Error::MissingUsername)?;
    let email = non_empty(record.email).ok_or(Error::MissingEmail)?;
    Ok(UserInfo { username, email })
}

impl GlabClient<'_> {
    /// Raw JSON from `glab api user`
    pub async fn fetch_user_record(&self, hostname: Option<&str>) -> Result<String> {
        let mut args = vec!["api".to_string(), "user".to_string()];
        push_hostname(&mut args, hostname);

        let result = self.glab(args, &ExecOptions::capture()).await;
        if !result.success() {
            debug!(exit_code = result.exit_code, "glab api user failed");
            let detail = if result.stderr.is_empty() {
                format!("glab api user exited with code {}", result.exit_code)
            } else {
                result.stderr
            };
            return Err(Error::GitLabApi(detail));
        }
        Ok(result.stdout)
    }

    /// Account username
    pub async fn get_username(&self, hostname: Option<&str>) -> Result<String> {
        let raw = self.fetch_user_record(hostname).await?;
        username_of(decode(&raw)?)
    }

    /// Account primary email
    pub async fn get_email(&self, hostname: Option<&str>) -> Result<String> {
        let raw = self.fetch_user_record(hostname).await?;
        email_of(decode(&raw)?)
    }

    /// Username and email from a single `api user` call
    pub async fn get_user_info(&self, hostname: Option<&str>) -> Result<UserInfo> {
        let raw = self.fetch_user_record(hostname).await?;
        parse_user_record(&raw)
    }
}
