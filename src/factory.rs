//! Builds events of any kind from raw field values

use chrono::NaiveDateTime;

use crate::date::DateEvent;
use crate::error::Result;
use crate::event::{Event, EventType, MeetingEvent, PeriodicEvent, PersonalEvent, ReminderEvent, TaskEvent};
use crate::values::{DurationEvent, EventId, FrequencyEvent, MessageEvent, OwnerEvent, ParticipantEvent,
                    PlaceEvent, PriorityEvent, TitleEvent};

/// Creates events from a type and a flat list of fields, as they are typed by a user.
///
/// Fields that do not make sense for the requested type are ignored. \
/// For historical reasons, the `place` field also carries the priority of tasks and the message of reminders.
/// Prefer the constructors of each event type (e.g. [`TaskEvent::new`]) in new code.
pub struct EventFactory {
    id_supplier: Box<dyn Fn() -> EventId + Send + Sync>,
}

impl EventFactory {
    /// A factory that gives random IDs to the events it creates
    pub fn new() -> Self {
        Self::with_id_supplier(EventId::random)
    }

    /// A factory that asks `id_supplier` for a fresh ID for every event it creates
    pub fn with_id_supplier<F>(id_supplier: F) -> Self
    where
        F: Fn() -> EventId + Send + Sync + 'static,
    {
        Self { id_supplier: Box::new(id_supplier) }
    }

    /// Create an event of the given type
    #[allow(clippy::too_many_arguments)]
    pub fn create_event(&self, event_type: EventType, title: &str, owner: &str, start_date: NaiveDateTime,
                        duration_minutes: i64, place: Option<&str>, participants: Option<&str>, frequency_days: i64)
                        -> Result<Event>
    {
        log::debug!("Creating a {} event ({:?})", event_type, title);

        let title = TitleEvent::new(title)?;
        let owner = OwnerEvent::new(owner)?;
        let start_date = DateEvent::new(start_date);

        let event = match event_type {
            EventType::Personal => {
                let duration = DurationEvent::new(duration_minutes)?;
                Event::Personal(PersonalEvent::new_with_parameters(self.next_id(), title, owner, start_date, duration))
            },
            EventType::Meeting => {
                let duration = DurationEvent::new(duration_minutes)?;
                let place = PlaceEvent::from(place);
                let participants = ParticipantEvent::from(participants);
                Event::Meeting(MeetingEvent::new_with_parameters(self.next_id(), title, owner, start_date, duration, place, participants))
            },
            EventType::Periodic => {
                let frequency = FrequencyEvent::new(frequency_days)?;
                Event::Periodic(PeriodicEvent::new_with_parameters(self.next_id(), title, owner, start_date, frequency))
            },
            EventType::Task => {
                let priority = PriorityEvent::new(place.unwrap_or_default())?;
                Event::Task(TaskEvent::new_with_parameters(self.next_id(), title, owner, start_date, priority))
            },
            EventType::Reminder => {
                let message = MessageEvent::from_optional(place)?;
                Event::Reminder(ReminderEvent::new_with_parameters(self.next_id(), title, owner, start_date, message))
            },
        };
        Ok(event)
    }

    /// Create an event whose type is given by its tag (e.g. `"REUNION"`).
    /// Fails with [`EventError::UnrecognizedType`](crate::error::EventError::UnrecognizedType) in case the tag is unknown
    #[allow(clippy::too_many_arguments)]
    pub fn create_event_from_tag(&self, tag: &str, title: &str, owner: &str, start_date: NaiveDateTime,
                                 duration_minutes: i64, place: Option<&str>, participants: Option<&str>, frequency_days: i64)
                                 -> Result<Event>
    {
        let event_type: EventType = tag.parse()?;
        self.create_event(event_type, title, owner, start_date, duration_minutes, place, participants, frequency_days)
    }

    fn next_id(&self) -> EventId {
        (self.id_supplier)()
    }
}

impl Default for EventFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventFactory").finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::error::{EventError, UnrecognizedTypeError, ValidationError};
    use crate::traits::CalendarEntry;

    fn start() -> NaiveDateTime {
        DateEvent::from_ymd_hm(2025, 4, 15, 10, 0).unwrap().date_time()
    }

    #[test]
    fn test_create_personal() {
        let factory = EventFactory::new();
        let event = factory.create_event(EventType::Personal, " Doctor ", "John", start(), 60, None, None, 0).unwrap();

        assert_eq!(event.event_type(), EventType::Personal);
        assert_eq!(event.title().value(), "Doctor");
        assert_eq!(event.owner().value(), "John");
        assert_eq!(event.start_date().date_time(), start());
        assert_eq!(event.duration().minutes(), 60);
        assert!(event.as_personal().is_some());
    }

    #[test]
    fn test_create_meeting() {
        let factory = EventFactory::new();
        let event = factory.create_event(EventType::Meeting, "Project", "John", start(), 120, Some("Room A"), Some("Alice, Bob"), 0).unwrap();

        let meeting = event.as_meeting().unwrap();
        assert_eq!(meeting.place().value(), "Room A");
        assert_eq!(meeting.participants().to_string(), "Alice, Bob");
        assert_eq!(meeting.duration().minutes(), 120);
    }

    #[test]
    fn test_create_periodic() {
        let factory = EventFactory::new();
        let event = factory.create_event(EventType::Periodic, "Weekly", "John", start(), 45, None, None, 7).unwrap();

        assert_eq!(event.as_periodic().unwrap().frequency().days(), 7);
        // The given duration is ignored
        assert_eq!(event.duration().minutes(), 0);

        let err = factory.create_event(EventType::Periodic, "Weekly", "John", start(), 0, None, None, 0).unwrap_err();
        assert_eq!(err, EventError::Validation(ValidationError::NotPositive { field: "frequency", value: 0 }));
    }

    #[test]
    fn test_place_carries_priority_and_message() {
        let factory = EventFactory::new();

        let task = factory.create_event_from_tag("TASK", "Report", "John", start(), 0, Some("high"), None, 0).unwrap();
        assert_eq!(task.as_task().unwrap().priority().value(), "HIGH");

        let reminder = factory.create_event_from_tag("RAPPEL", "Rappel important", "John", start(), 0, Some("msg"), None, 0).unwrap();
        assert_eq!(reminder.as_reminder().unwrap().message().value(), "msg");

        let err = factory.create_event(EventType::Task, "Report", "John", start(), 0, None, None, 0).unwrap_err();
        assert_eq!(err, EventError::Validation(ValidationError::Empty { field: "priority" }));
        let err = factory.create_event(EventType::Reminder, "Call", "John", start(), 0, None, None, 0).unwrap_err();
        assert_eq!(err, EventError::Validation(ValidationError::Empty { field: "message" }));
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let factory = EventFactory::new();

        let err = factory.create_event_from_tag("BOGUS", "T", "John", start(), 0, None, None, 0).unwrap_err();
        assert_eq!(err, EventError::UnrecognizedType(UnrecognizedTypeError::new("BOGUS")));

        let err = factory.create_event(EventType::Personal, "  ", "John", start(), 10, None, None, 0).unwrap_err();
        assert_eq!(err, EventError::Validation(ValidationError::Empty { field: "title" }));

        let err = factory.create_event(EventType::Meeting, "T", "John", start(), -10, None, None, 0).unwrap_err();
        assert_eq!(err, EventError::Validation(ValidationError::Negative { field: "duration", value: -10 }));
    }

    #[test]
    fn test_custom_id_supplier() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_in_factory = Arc::clone(&counter);
        let factory = EventFactory::with_id_supplier(move || {
            let n = counter_in_factory.fetch_add(1, Ordering::SeqCst);
            EventId::new(format!("event-{}", n)).unwrap()
        });

        let a = factory.create_event(EventType::Personal, "A", "John", start(), 10, None, None, 0).unwrap();
        let b = factory.create_event(EventType::Task, "B", "John", start(), 0, Some("low"), None, 0).unwrap();
        assert_eq!(a.id().as_str(), "event-0");
        assert_eq!(b.id().as_str(), "event-1");

        // Failed creations do not consume IDs
        assert!(factory.create_event(EventType::Task, "C", "John", start(), 0, None, None, 0).is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
