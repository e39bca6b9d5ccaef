//! Validated time intervals in the booking timezone.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::error::ScheduleError;

/// A half-open time span `[start, end)` in the configured local timezone.
///
/// Used both for busy spans fetched from the calendar and for the free
/// slots offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInterval {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl TimeInterval {
    /// Build an interval, rejecting `start >= end`.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Self, ScheduleError> {
        if start >= end {
            return Err(ScheduleError::InvalidInterval { start, end });
        }

        Ok(TimeInterval { start, end })
    }

    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }

    /// Half-open overlap test. Intervals that only touch at an endpoint
    /// do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }
}
