//! Creates a valid Google session (access token) for calling the Calendar API.
//!
//! Tokens are cached per account at ~/.config/slotbook/session/{email}.toml
//! and refreshed transparently when expired.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use google_calendar::{AccessToken, Client};
use serde::{Deserialize, Serialize};

use crate::app_config::{AppConfig, base_dir};
use crate::google::auth::redirect_uri;

pub struct Session {
    account_email: String,
    data: SessionData,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SessionData {
    access_token: String,
    refresh_token: String,
    expires_at: DateTime<Utc>,
}

impl From<&AccessToken> for SessionData {
    fn from(tokens: &AccessToken) -> Self {
        let expires_at = Utc::now() + Duration::seconds(tokens.expires_in);

        SessionData {
            access_token: tokens.access_token.clone(),
            refresh_token: tokens.refresh_token.clone(),
            expires_at,
        }
    }
}

impl Session {
    pub fn new(account_email: &str, data: SessionData) -> Self {
        Session {
            account_email: account_email.to_string(),
            data,
        }
    }

    fn path_for_account_email(account_email: &str) -> Result<std::path::PathBuf> {
        let email_slug = account_email.replace(['/', '\\', ':'], "_");

        Ok(base_dir()?
            .join("session")
            .join(format!("{}.toml", email_slug)))
    }

    fn path(&self) -> Result<std::path::PathBuf> {
        Self::path_for_account_email(&self.account_email)
    }

    pub fn client(&self, config: &AppConfig) -> Client {
        Client::new(
            config.client_id.clone(),
            config.client_secret.clone(),
            redirect_uri(),
            self.data.access_token.clone(),
            self.data.refresh_token.clone(),
        )
    }

    /// Load a session and refresh it if expired.
    pub async fn load_valid(config: &AppConfig, account_email: &str) -> Result<Self> {
        let session = Self::load(account_email)?;

        if session.is_expired() {
            let mut session = session;
            session.refresh(config).await?;
            Ok(session)
        } else {
            Ok(session)
        }
    }

    fn load(account_email: &str) -> Result<Self> {
        let path = Self::path_for_account_email(account_email)?;

        if !path.exists() {
            anyhow::bail!(
                "No Google session for {}.\n\
                Run `slotbook auth` first.",
                account_email
            );
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read Google session from {}", path.display()))?;

        let data: SessionData = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse Google session from {}", path.display()))?;

        Ok(Session {
            account_email: account_email.to_string(),
            data,
        })
    }

    pub fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(&self.data).context("Failed to serialize session")?;

        let path = self.path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;

        // Set to owner-only (0600) since file contains OAuth tokens:
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
        }

        Ok(())
    }

    fn is_expired(&self) -> bool {
        Utc::now() >= self.data.expires_at
    }

    async fn refresh(&mut self, config: &AppConfig) -> Result<()> {
        let client = self.client(config);

        let mut tokens = client
            .refresh_access_token()
            .await
            .context("Failed to refresh token")?;

        // Google typically doesn't return a new refresh_token on refresh
        if tokens.refresh_token.is_empty() {
            tokens.refresh_token = self.data.refresh_token.clone();
        }

        self.data = SessionData::from(&tokens);
        self.save()?;

        Ok(())
    }
}
