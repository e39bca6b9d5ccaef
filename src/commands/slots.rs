use anyhow::Result;

use crate::app_config::AppConfig;
use crate::commands::{fetch_free_slots, print_slots};
use crate::session::Session;

pub async fn run(config: &AppConfig) -> Result<()> {
    let settings = &config.booking;
    let template = settings.template()?;

    let session = Session::load_valid(config, config.account()?).await?;
    let client = session.client(config);

    let slots = fetch_free_slots(&client, settings, &template).await?;

    if slots.is_empty() {
        println!("No free slots available for the next {} days.", settings.days);
        return Ok(());
    }

    println!(
        "Available {}-minute slots for the next {} days (in {}):",
        settings.slot_minutes, settings.days, settings.timezone
    );
    print_slots(&slots);

    Ok(())
}
