use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::app_config::AppConfig;
use crate::booking::{BookingRequest, parse_attendee_list, select_slot};
use crate::commands::{fetch_free_slots, print_slots};
use crate::google;
use crate::session::Session;
use crate::tui;

pub async fn run(
    config: &AppConfig,
    title: Option<String>,
    description: Option<String>,
    attendees: Option<String>,
) -> Result<()> {
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
        "Here are the available {}-minute slots (in {}):",
        settings.slot_minutes, settings.timezone
    );
    print_slots(&slots);

    let choice: String = Input::new()
        .with_prompt("Select a slot (enter the number)")
        .interact_text()?;

    // Single-shot selection: an invalid choice ends the run without booking
    let slot = match select_slot(&slots, &choice) {
        Ok(slot) => slot.clone(),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return Ok(());
        }
    };

    let attendee_input = match attendees {
        Some(list) => list,
        None => Input::new()
            .with_prompt("Attendee email addresses (comma-separated)")
            .interact_text()?,
    };

    let request = BookingRequest::new(
        slot,
        parse_attendee_list(&attendee_input),
        title.unwrap_or_else(|| settings.title.clone()),
        description.unwrap_or_else(|| settings.description.clone()),
    )?;

    let spinner = tui::create_spinner("Booking the meeting...".to_string());
    let result = google::api::create_booking(&client, &settings.calendar_id, &request).await;
    spinner.finish_and_clear();
    let result = result?;

    println!("{}", "Meeting booked successfully!".green());
    println!("Event ID: {}", result.event_id);
    if let Some(link) = result.meeting_link {
        println!("Google Meet link: {}", link);
    }

    Ok(())
}
