//! Events that repeat every given number of days

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::date::DateEvent;
use crate::event::{EventBase, EventType};
use crate::traits::CalendarEntry;
use crate::values::{EventId, FrequencyEvent, OwnerEvent, TitleEvent};

/// An event that repeats at its start date, then every `frequency` days, forever.
///
/// Periodic events have no duration and do not block time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodicEvent {
    #[serde(flatten)]
    base: EventBase,
    frequency: FrequencyEvent,
}

impl PeriodicEvent {
    /// Create a brand new periodic event.
    /// This will pick a new (random) event ID.
    pub fn new(title: TitleEvent, owner: OwnerEvent, start_date: DateEvent, frequency: FrequencyEvent) -> Self {
        Self::new_with_parameters(EventId::random(), title, owner, start_date, frequency)
    }

    /// Create a periodic event with a known ID, e.g. when reloading it
    pub fn new_with_parameters(id: EventId, title: TitleEvent, owner: OwnerEvent, start_date: DateEvent,
                               frequency: FrequencyEvent) -> Self
    {
        Self {
            base: EventBase::new(id, title, owner, start_date),
            frequency,
        }
    }

    pub fn frequency(&self) -> FrequencyEvent { self.frequency }

    fn step(&self) -> Duration {
        Duration::days(i64::from(self.frequency.days()))
    }

    /// Returns the first repetition that happens at `date` or later.
    ///
    /// This jumps straight to the right repetition instead of walking through the previous ones.
    /// Returns `None` in case this repetition is beyond the supported range of dates.
    pub fn first_occurrence_from(&self, date: &DateEvent) -> Option<DateEvent> {
        let first = self.start_date();
        if date.is_after(&first) == false {
            return Some(first);
        }

        let step = self.step();
        let skipped_steps = date.since(&first).num_seconds() / step.num_seconds();
        let candidate = first.checked_plus(Duration::days(skipped_steps * i64::from(self.frequency.days())))?;
        if candidate.is_before(date) {
            candidate.checked_plus(step)
        } else {
            Some(candidate)
        }
    }

    /// Lists every repetition within `[start, end]` (both bounds included).
    ///
    /// This yields at most `(end - start) / frequency + 1` dates, and nothing when `start > end`.
    pub fn occurrences_in_period(&self, start: &DateEvent, end: &DateEvent) -> impl Iterator<Item = DateEvent> {
        let step = self.step();
        let end = *end;
        let first = if end.is_before(start) { None } else { self.first_occurrence_from(start) };

        std::iter::successors(first, move |date| date.checked_plus(step))
            .take_while(move |date| date.is_after(&end) == false)
    }
}

impl CalendarEntry for PeriodicEvent {
    fn base(&self) -> &EventBase {
        &self.base
    }

    fn event_type(&self) -> EventType {
        EventType::Periodic
    }

    fn description(&self) -> String {
        format!("Periodic event: {} {}", self.title(), self.frequency)
    }

    fn blocks_time(&self) -> bool {
        false
    }

    /// Whether any repetition of this event happens within `[start, end]`
    fn occurs_in_period(&self, start: &DateEvent, end: &DateEvent) -> bool {
        if end.is_before(start) {
            return false;
        }
        match self.first_occurrence_from(start) {
            Some(date) => date.is_after(end) == false,
            None => false,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PersonalEvent;
    use crate::values::DurationEvent;

    fn date(month: u32, day: u32, hour: u32) -> DateEvent {
        DateEvent::from_ymd_hm(2023, month, day, hour, 0).unwrap()
    }

    fn weekly(start: DateEvent) -> PeriodicEvent {
        PeriodicEvent::new(
            TitleEvent::new("Weekly sync").unwrap(),
            OwnerEvent::new("John").unwrap(),
            start,
            FrequencyEvent::new(7).unwrap(),
        )
    }

    /// Walks every repetition one by one, as a reference for the direct computation
    fn occurs_by_walking(event: &PeriodicEvent, start: &DateEvent, end: &DateEvent) -> bool {
        let mut current = event.start_date();
        while current.is_after(end) == false {
            if current.is_before(start) == false {
                return true;
            }
            current = current.plus_days(i64::from(event.frequency().days()));
        }
        false
    }

    #[test]
    fn test_occurs_in_period() {
        let event = weekly(date(3, 15, 10));

        assert!(event.occurs_in_period(&date(3, 15, 0), &date(3, 16, 0)));
        assert!(event.occurs_in_period(&date(3, 16, 0), &date(3, 23, 0)));
        assert!(event.occurs_in_period(&date(3, 1, 0), &date(3, 14, 0)) == false);
        assert!(event.occurs_in_period(&date(3, 23, 0), &date(3, 29, 9)) == false);
        assert!(event.occurs_in_period(&date(3, 23, 0), &date(3, 29, 10)));
    }

    #[test]
    fn test_occurrences_every_seven_days() {
        // Repetitions on the 1st, 8th, 15th, 22nd...
        let event = weekly(date(3, 1, 0));

        assert!(event.occurs_in_period(&date(3, 20, 0), &date(3, 21, 0)) == false);
        assert!(event.occurs_in_period(&date(3, 15, 0), &date(3, 16, 0)));
        assert!(event.occurs_in_period(&date(3, 22, 0), &date(3, 22, 0)));
        assert!(event.occurs_in_period(&date(3, 1, 0), &date(4, 1, 0)));
        assert!(event.occurs_in_period(&date(2, 1, 0), &date(2, 28, 0)) == false);
    }

    #[test]
    fn test_empty_period() {
        let event = weekly(date(3, 1, 0));
        assert!(event.occurs_in_period(&date(3, 16, 0), &date(3, 15, 0)) == false);
        assert_eq!(event.occurrences_in_period(&date(3, 16, 0), &date(3, 15, 0)).count(), 0);
    }

    #[test]
    fn test_matches_walking_every_repetition() {
        let event = PeriodicEvent::new(
            TitleEvent::new("Every three days").unwrap(),
            OwnerEvent::new("John").unwrap(),
            DateEvent::from_ymd_hm(2023, 1, 10, 13, 37).unwrap(),
            FrequencyEvent::new(3).unwrap(),
        );

        let origin = date(1, 1, 0);
        for start_hours in (0..24 * 40).step_by(7) {
            for length_hours in &[0_i64, 5, 30, 71, 72, 200] {
                let start = origin.plus_minutes(DurationEvent::new(start_hours * 60).unwrap());
                let end = start.plus_minutes(DurationEvent::new(length_hours * 60).unwrap());
                assert_eq!(
                    event.occurs_in_period(&start, &end),
                    occurs_by_walking(&event, &start, &end),
                    "period {} - {}", start, end
                );
            }
        }
    }

    #[test]
    fn test_list_occurrences() {
        let event = weekly(date(3, 1, 9));

        let listed: Vec<DateEvent> = event.occurrences_in_period(&date(3, 5, 0), &date(3, 29, 9)).collect();
        assert_eq!(listed, vec![date(3, 8, 9), date(3, 15, 9), date(3, 22, 9), date(3, 29, 9)]);

        assert_eq!(event.first_occurrence_from(&date(2, 1, 0)), Some(date(3, 1, 9)));
        assert_eq!(event.first_occurrence_from(&date(3, 8, 9)), Some(date(3, 8, 9)));
        assert_eq!(event.first_occurrence_from(&date(3, 8, 10)), Some(date(3, 15, 9)));
    }

    #[test]
    fn test_periodic_events_never_conflict() {
        let event = weekly(date(3, 15, 10));
        let appointment = PersonalEvent::new(
            TitleEvent::new("Dentist").unwrap(),
            OwnerEvent::new("John").unwrap(),
            date(3, 15, 9),
            DurationEvent::new(120).unwrap(),
        );

        assert!(event.conflicts_with(&appointment) == false);
        assert!(appointment.conflicts_with(&event) == false);
        assert!(event.conflicts_with(&event.clone()) == false);
        assert_eq!(event.duration(), DurationEvent::zero());
        assert!(event.description().contains("every week"));
    }
}
