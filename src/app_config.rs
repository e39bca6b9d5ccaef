//! App-level configuration.
//!
//! User-provided OAuth credentials and booking policy stored at:
//!   ~/.config/slotbook/config.toml
//!
//! Loaded once at startup and never mutated during a run.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::availability::AvailabilityTemplate;
use crate::error::ScheduleError;

pub fn base_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Could not determine config directory")?
        .join("slotbook"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.toml"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Google OAuth client credentials (user-provided).
    pub client_id: String,
    pub client_secret: String,

    /// The account email connected via `slotbook auth`.
    pub google_account: Option<String>,

    #[serde(default)]
    pub booking: BookingSettings,
}

/// Booking policy. The defaults reproduce the evening demo window: four
/// 30-minute slots from 18:00 Tehran time, over the next seven days.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingSettings {
    pub calendar_id: String,
    pub timezone: String,
    pub window_start: String,
    pub slot_minutes: i64,
    pub slots_per_day: u32,
    pub days: u32,
    pub title: String,
    pub description: String,
}

impl Default for BookingSettings {
    fn default() -> Self {
        BookingSettings {
            calendar_id: "primary".to_string(),
            timezone: "Asia/Tehran".to_string(),
            window_start: "18:00".to_string(),
            slot_minutes: 30,
            slots_per_day: 4,
            days: 7,
            title: "Product demo".to_string(),
            description: "We are looking forward to showing you the demo!".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = config_path()?;

        if !path.exists() {
            anyhow::bail!(
                "slotbook is not configured.\n\n\
                Create {} with:\n\n\
                client_id = \"your-client-id.apps.googleusercontent.com\"\n\
                client_secret = \"your-client-secret\"\n\n\
                See https://console.cloud.google.com/apis/credentials for setup,\n\
                then run `slotbook auth` to connect your Google account.",
                path.display()
            );
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(config)
    }

    /// The account to book on behalf of.
    pub fn account(&self) -> Result<&str> {
        self.google_account.as_deref().context(
            "No google_account configured.\n\
            Run `slotbook auth` and add the printed email to config.toml.",
        )
    }
}

impl BookingSettings {
    /// Resolve the configured policy into an availability template.
    pub fn template(&self) -> Result<AvailabilityTemplate, ScheduleError> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|_| ScheduleError::UnknownTimezone(self.timezone.clone()))?;

        let window_start = NaiveTime::parse_from_str(&self.window_start, "%H:%M")
            .map_err(|_| ScheduleError::InvalidWindowStart(self.window_start.clone()))?;

        Ok(AvailabilityTemplate {
            timezone,
            window_start,
            slot_minutes: self.slot_minutes,
            slots_per_day: self.slots_per_day,
            days: self.days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Tehran;

    #[test]
    fn test_minimal_config_falls_back_to_default_policy() {
        let config: AppConfig = toml::from_str(
            r#"
            client_id = "id"
            client_secret = "secret"
            "#,
        )
        .unwrap();

        assert!(config.google_account.is_none());

        let template = config.booking.template().unwrap();
        assert_eq!(template.timezone, Tehran);
        assert_eq!(
            template.window_start,
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
        assert_eq!(template.slot_minutes, 30);
        assert_eq!(template.slots_per_day, 4);
        assert_eq!(template.days, 7);
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let settings = BookingSettings {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            settings.template(),
            Err(ScheduleError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_malformed_window_start_is_rejected() {
        let settings = BookingSettings {
            window_start: "6pm".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            settings.template(),
            Err(ScheduleError::InvalidWindowStart(_))
        ));
    }
}
