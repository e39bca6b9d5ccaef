//! Booking request construction and the fixed notification policy.

use uuid::Uuid;

use crate::error::ScheduleError;
use crate::interval::TimeInterval;

/// Lead time for both reminder overrides, in minutes before the slot starts.
pub const REMINDER_LEAD_MINUTES: i64 = 30;

/// Notification channels attached to every booking.
pub const REMINDER_CHANNELS: [&str; 2] = ["email", "popup"];

/// Conference solution requested for every booking.
pub const CONFERENCE_SOLUTION: &str = "hangoutsMeet";

/// A validated event-creation request, built immediately before submission
/// and never reused.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub slot: TimeInterval,
    pub attendees: Vec<String>,
    pub title: String,
    pub description: String,
    /// Deduplication token for conference creation. Generated fresh per
    /// request so a retried booking cannot collide with an earlier one.
    pub conference_token: String,
}

impl BookingRequest {
    /// Attendee strings are opaque contact identifiers; the calendar service
    /// is responsible for format validation. The list must be non-empty.
    pub fn new(
        slot: TimeInterval,
        attendees: Vec<String>,
        title: String,
        description: String,
    ) -> Result<Self, ScheduleError> {
        if attendees.is_empty() {
            return Err(ScheduleError::NoAttendees);
        }

        Ok(BookingRequest {
            slot,
            attendees,
            title,
            description,
            conference_token: Uuid::new_v4().to_string(),
        })
    }
}

/// What the calendar service hands back after a successful insert.
#[derive(Debug, Clone)]
pub struct BookingResult {
    pub event_id: String,
    /// Absent when the service created the event without a conference.
    pub meeting_link: Option<String>,
}

/// Split a comma-separated attendee string, dropping surrounding whitespace
/// and empty entries.
pub fn parse_attendee_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve a 1-based selection against the presented slot list.
pub fn select_slot<'a>(
    slots: &'a [TimeInterval],
    input: &str,
) -> Result<&'a TimeInterval, ScheduleError> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| ScheduleError::InvalidChoice(input.trim().to_string()))?;

    if choice == 0 || choice > slots.len() {
        return Err(ScheduleError::ChoiceOutOfRange {
            choice,
            max: slots.len(),
        });
    }

    Ok(&slots[choice - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Tehran;

    fn slot() -> TimeInterval {
        TimeInterval::new(
            Tehran.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap(),
            Tehran.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_attendee_list_is_rejected() {
        let result = BookingRequest::new(
            slot(),
            vec![],
            "Demo".to_string(),
            "Description".to_string(),
        );

        assert!(matches!(result, Err(ScheduleError::NoAttendees)));
    }

    #[test]
    fn test_attendees_are_kept_as_given() {
        let request = BookingRequest::new(
            slot(),
            vec!["alice@example.com".to_string(), "bob@example.com".to_string()],
            "Demo".to_string(),
            "Description".to_string(),
        )
        .unwrap();

        assert_eq!(
            request.attendees,
            vec!["alice@example.com", "bob@example.com"]
        );
    }

    #[test]
    fn test_conference_token_is_fresh_per_request() {
        let attendees = vec!["alice@example.com".to_string()];

        let first = BookingRequest::new(slot(), attendees.clone(), "a".into(), "b".into()).unwrap();
        let second = BookingRequest::new(slot(), attendees, "a".into(), "b".into()).unwrap();

        assert!(!first.conference_token.is_empty());
        assert_ne!(first.conference_token, second.conference_token);
    }

    #[test]
    fn test_parse_attendee_list_trims_and_drops_empties() {
        assert_eq!(
            parse_attendee_list(" alice@example.com, bob@example.com ,"),
            vec!["alice@example.com", "bob@example.com"]
        );
        assert!(parse_attendee_list("  ").is_empty());
    }

    #[test]
    fn test_select_slot_is_one_based() {
        let slots = vec![slot(), slot(), slot()];

        assert_eq!(select_slot(&slots, "1").unwrap(), &slots[0]);
        assert_eq!(select_slot(&slots, " 3 ").unwrap(), &slots[2]);
    }

    #[test]
    fn test_select_slot_rejects_out_of_range_and_garbage() {
        let slots = vec![slot(), slot()];

        assert!(matches!(
            select_slot(&slots, "0"),
            Err(ScheduleError::ChoiceOutOfRange { choice: 0, max: 2 })
        ));
        assert!(matches!(
            select_slot(&slots, "3"),
            Err(ScheduleError::ChoiceOutOfRange { choice: 3, max: 2 })
        ));
        assert!(matches!(
            select_slot(&slots, "two"),
            Err(ScheduleError::InvalidChoice(_))
        ));
    }
}
