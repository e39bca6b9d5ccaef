//! Error types for slot computation and booking validation.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use thiserror::Error;

/// Errors raised while validating intervals, templates, and booking input.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: chrono::DateTime<Tz>,
        end: chrono::DateTime<Tz>,
    },

    #[error("A booking needs at least one attendee")]
    NoAttendees,

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid window start '{0}'. Expected HH:MM")]
    InvalidWindowStart(String),

    #[error("Local time {time} does not exist on {date} in {timezone}")]
    UnrepresentableLocalTime {
        time: NaiveTime,
        date: NaiveDate,
        timezone: String,
    },

    #[error("'{0}' is not a slot number")]
    InvalidChoice(String),

    #[error("Choice {choice} is out of range (1-{max})")]
    ChoiceOutOfRange { choice: usize, max: usize },
}
