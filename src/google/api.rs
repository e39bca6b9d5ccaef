//! Calendar read/write calls against the Google Calendar API.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use google_calendar::Client;
use google_calendar::types::{
    ConferenceData, ConferenceSolutionKey, CreateConferenceRequest, Event, EventAttendee,
    EventDateTime, EventReminder, OrderBy, Reminders, SendUpdates,
};

use crate::booking::{
    BookingRequest, BookingResult, CONFERENCE_SOLUTION, REMINDER_CHANNELS, REMINDER_LEAD_MINUTES,
};
use crate::interval::TimeInterval;

/// Fetch the calendar's busy intervals between `from` and `to`, converted
/// into the booking timezone.
///
/// Recurring events are expanded into single instances and come back ordered
/// by start time. Cancelled events and all-day events (date-only boundaries)
/// contribute no busy time.
pub async fn fetch_busy_intervals(
    client: &Client,
    calendar_id: &str,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    timezone: Tz,
) -> Result<Vec<TimeInterval>> {
    let time_min = from.to_rfc3339();
    let time_max = to.to_rfc3339();

    let response = client
        .events()
        .list_all(
            calendar_id,
            "",
            0,
            OrderBy::StartTime,
            &[],
            "", // search query
            &[],
            false,
            false,
            true, // expand recurring events into single instances
            &time_max,
            &time_min,
            "",
            "",
        )
        .await
        .context("Failed to fetch events")?;

    let mut busy = Vec::new();

    for event in response.body {
        if event.status == "cancelled" {
            continue;
        }

        if let Some(interval) = busy_interval(&event, timezone)? {
            busy.push(interval);
        }
    }

    Ok(busy)
}

/// Extract an event's occupied span, or None for all-day events.
fn busy_interval(event: &Event, timezone: Tz) -> Result<Option<TimeInterval>> {
    let start = event.start.as_ref().and_then(|t| t.date_time);
    let end = event.end.as_ref().and_then(|t| t.date_time);

    match (start, end) {
        (Some(start), Some(end)) => {
            let interval = TimeInterval::new(
                start.with_timezone(&timezone),
                end.with_timezone(&timezone),
            )
            .with_context(|| format!("Calendar returned a malformed event: {}", event.id))?;

            Ok(Some(interval))
        }
        _ => Ok(None),
    }
}

/// Create the event, notify all attendees, and have Google attach a Meet
/// conference to it.
pub async fn create_booking(
    client: &Client,
    calendar_id: &str,
    request: &BookingRequest,
) -> Result<BookingResult> {
    let event = to_google_event(request);

    let response = client
        .events()
        .insert(
            calendar_id,
            1, // conferenceDataVersion, required for conference creation
            0,
            false,
            SendUpdates::All,
            false,
            &event,
        )
        .await
        .with_context(|| format!("Failed to create event: {}", request.title))?;

    let created = response.body;
    let meeting_link = meeting_link(&created);

    Ok(BookingResult {
        event_id: created.id,
        meeting_link,
    })
}

/// Map a booking request onto the Google event payload.
fn to_google_event(request: &BookingRequest) -> Event {
    let start = request.slot.start();
    let end = request.slot.end();
    let timezone = start.timezone().name().to_string();

    let attendees: Vec<EventAttendee> = request
        .attendees
        .iter()
        .map(|email| EventAttendee {
            email: email.clone(),
            display_name: String::new(),
            response_status: "needsAction".to_string(),
            additional_guests: 0,
            comment: String::new(),
            id: String::new(),
            optional: false,
            organizer: false,
            resource: false,
            self_: false,
        })
        .collect();

    let overrides: Vec<EventReminder> = REMINDER_CHANNELS
        .iter()
        .map(|channel| EventReminder {
            method: channel.to_string(),
            minutes: REMINDER_LEAD_MINUTES,
        })
        .collect();

    Event {
        summary: request.title.clone(),
        description: request.description.clone(),
        start: Some(EventDateTime {
            date: None,
            date_time: Some(start.with_timezone(&Utc)),
            time_zone: timezone.clone(),
        }),
        end: Some(EventDateTime {
            date: None,
            date_time: Some(end.with_timezone(&Utc)),
            time_zone: timezone,
        }),
        attendees,
        conference_data: Some(ConferenceData {
            create_request: Some(CreateConferenceRequest {
                request_id: request.conference_token.clone(),
                conference_solution_key: Some(ConferenceSolutionKey {
                    type_: CONFERENCE_SOLUTION.to_string(),
                }),
                status: None,
            }),
            conference_id: String::new(),
            conference_solution: None,
            entry_points: Vec::new(),
            notes: String::new(),
            parameters: None,
            signature: String::new(),
        }),
        reminders: Some(Reminders {
            overrides,
            use_default: false,
        }),
        ..Default::default()
    }
}

/// The joinable video link of a created event, if conferencing succeeded.
fn meeting_link(event: &Event) -> Option<String> {
    if !event.hangout_link.is_empty() {
        return Some(event.hangout_link.clone());
    }

    event.conference_data.as_ref().and_then(|cd| {
        cd.entry_points
            .iter()
            .find(|ep| ep.entry_point_type == "video")
            .map(|ep| ep.uri.clone())
    })
}
