use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app_config::{AppConfig, config_path};
use crate::google;

pub async fn run(config: &AppConfig) -> Result<()> {
    let email = google::auth::authenticate(config).await?;

    println!("Connected Google account: {}", email.green());

    if config.google_account.as_deref() != Some(email.as_str()) {
        println!(
            "\nAdd this to {} to book on its calendar:\n\n  google_account = \"{}\"",
            config_path()?.display(),
            email
        );
    }

    Ok(())
}
