//! Free-slot computation against a fixed daily availability template.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ScheduleError;
use crate::interval::TimeInterval;

/// The fixed daily pattern of candidate slots: a window opening at the same
/// local time every day, holding a run of back-to-back slots.
#[derive(Debug, Clone)]
pub struct AvailabilityTemplate {
    pub timezone: Tz,
    pub window_start: NaiveTime,
    pub slot_minutes: i64,
    pub slots_per_day: u32,
    pub days: u32,
}

impl AvailabilityTemplate {
    /// Window start for the day `offset` days after `reference`, in the
    /// template timezone.
    fn window_start_for_day(
        &self,
        reference: DateTime<Utc>,
        offset: u32,
    ) -> Result<DateTime<Tz>, ScheduleError> {
        let local_date = (reference + Duration::days(offset as i64))
            .with_timezone(&self.timezone)
            .date_naive();

        self.timezone
            .from_local_datetime(&local_date.and_time(self.window_start))
            .earliest()
            .ok_or_else(|| ScheduleError::UnrepresentableLocalTime {
                time: self.window_start,
                date: local_date,
                timezone: self.timezone.name().to_string(),
            })
    }
}

/// Enumerate the template's candidate slots over the coming days and keep the
/// ones that overlap no busy interval.
///
/// Slots come back in chronological order, day-major then slot-minor; callers
/// index into that order when presenting choices. Inputs are not mutated and
/// identical inputs produce identical output.
pub fn compute_free_slots(
    busy: &[TimeInterval],
    reference: DateTime<Utc>,
    template: &AvailabilityTemplate,
) -> Result<Vec<TimeInterval>, ScheduleError> {
    let slot_length = Duration::minutes(template.slot_minutes);
    let mut free = Vec::new();

    for day in 0..template.days {
        let window_start = template.window_start_for_day(reference, day)?;

        for index in 0..template.slots_per_day {
            let slot_start = window_start + slot_length * index as i32;
            let slot = TimeInterval::new(slot_start, slot_start + slot_length)?;

            if busy.iter().all(|b| !slot.overlaps(b)) {
                free.push(slot);
            }
        }
    }

    Ok(free)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Tehran;

    fn template(days: u32) -> AvailabilityTemplate {
        AvailabilityTemplate {
            timezone: Tehran,
            window_start: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            slot_minutes: 30,
            slots_per_day: 4,
            days,
        }
    }

    /// Noon UTC on 2025-03-01, mid-afternoon in Tehran on the same date.
    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn busy(day: u32, start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
        TimeInterval::new(
            Tehran
                .with_ymd_and_hms(2025, 3, day, start_h, start_m, 0)
                .unwrap(),
            Tehran
                .with_ymd_and_hms(2025, 3, day, end_h, end_m, 0)
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_calendar_yields_every_slot() {
        let slots = compute_free_slots(&[], reference(), &template(7)).unwrap();

        assert_eq!(slots.len(), 7 * 4);

        // Chronological, and back-to-back within each day's window
        for pair in slots.windows(2) {
            assert!(pair[0].start() < pair[1].start());
            if pair[0].start().date_naive() == pair[1].start().date_naive() {
                assert_eq!(pair[0].end(), pair[1].start());
            }
        }
    }

    #[test]
    fn test_single_day_window_shape() {
        let slots = compute_free_slots(&[], reference(), &template(1)).unwrap();

        let starts: Vec<String> = slots
            .iter()
            .map(|s| s.start().format("%H:%M").to_string())
            .collect();
        assert_eq!(starts, vec!["18:00", "18:30", "19:00", "19:30"]);
        assert_eq!(slots[3].end().format("%H:%M").to_string(), "20:00");
    }

    #[test]
    fn test_busy_interval_knocks_out_overlapping_slots() {
        // 18:30-19:15 conflicts with the 18:30 and 19:00 slots only
        let slots =
            compute_free_slots(&[busy(1, 18, 30, 19, 15)], reference(), &template(1)).unwrap();

        let starts: Vec<String> = slots
            .iter()
            .map(|s| s.start().format("%H:%M").to_string())
            .collect();
        assert_eq!(starts, vec!["18:00", "19:30"]);
    }

    #[test]
    fn test_busy_interval_equal_to_slot_conflicts() {
        let slots =
            compute_free_slots(&[busy(1, 18, 0, 18, 30)], reference(), &template(1)).unwrap();

        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].start().format("%H:%M").to_string(), "18:30");
    }

    #[test]
    fn test_busy_interval_touching_window_start_does_not_conflict() {
        let slots =
            compute_free_slots(&[busy(1, 17, 0, 18, 0)], reference(), &template(1)).unwrap();

        assert_eq!(slots.len(), 4);
    }

    #[test]
    fn test_busy_interval_outside_window_has_no_effect() {
        let slots =
            compute_free_slots(&[busy(1, 9, 0, 10, 0)], reference(), &template(7)).unwrap();

        assert_eq!(slots.len(), 7 * 4);
    }

    #[test]
    fn test_identical_inputs_yield_identical_output() {
        let busy = vec![busy(1, 18, 30, 19, 15), busy(2, 19, 0, 20, 0)];

        let first = compute_free_slots(&busy, reference(), &template(7)).unwrap();
        let second = compute_free_slots(&busy, reference(), &template(7)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_free_slots_never_overlap_busy_intervals() {
        let busy = vec![
            busy(1, 18, 30, 19, 15),
            busy(2, 17, 0, 21, 0),
            busy(4, 19, 45, 20, 0),
        ];

        let slots = compute_free_slots(&busy, reference(), &template(7)).unwrap();

        for slot in &slots {
            for b in &busy {
                assert!(slot.start() >= b.end() || slot.end() <= b.start());
            }
        }
    }
}
