pub mod auth;
pub mod book;
pub mod slots;

use anyhow::Result;
use chrono::{Duration, Utc};
use google_calendar::Client;

use crate::app_config::BookingSettings;
use crate::availability::{AvailabilityTemplate, compute_free_slots};
use crate::google;
use crate::interval::TimeInterval;
use crate::tui;

/// Fetch busy intervals for the template's window and compute the free slots.
pub async fn fetch_free_slots(
    client: &Client,
    settings: &BookingSettings,
    template: &AvailabilityTemplate,
) -> Result<Vec<TimeInterval>> {
    let now = Utc::now();
    let until = now + Duration::days(template.days as i64);

    let spinner = tui::create_spinner(format!("Checking {} for busy times...", settings.calendar_id));
    let busy =
        google::api::fetch_busy_intervals(client, &settings.calendar_id, now, until, template.timezone)
            .await;
    spinner.finish_and_clear();

    Ok(compute_free_slots(&busy?, now, template)?)
}

/// Print the numbered slot list the user picks from.
pub fn print_slots(slots: &[TimeInterval]) {
    for (index, slot) in slots.iter().enumerate() {
        println!(
            "{}. {} to {}",
            index + 1,
            slot.start().format("%Y-%m-%d %H:%M"),
            slot.end().format("%H:%M")
        );
    }
}
