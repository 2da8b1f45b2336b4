//! Personal appointments

use serde::{Deserialize, Serialize};

use crate::date::DateEvent;
use crate::event::{EventBase, EventType};
use crate::traits::CalendarEntry;
use crate::values::{DurationEvent, EventId, OwnerEvent, TitleEvent};

/// A personal appointment, that occupies its time slot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalEvent {
    #[serde(flatten)]
    base: EventBase,
    duration: DurationEvent,
}

impl PersonalEvent {
    /// Create a brand new appointment.
    /// This will pick a new (random) event ID.
    pub fn new(title: TitleEvent, owner: OwnerEvent, start_date: DateEvent, duration: DurationEvent) -> Self {
        Self::new_with_parameters(EventId::random(), title, owner, start_date, duration)
    }

    /// Create an appointment with a known ID, e.g. when reloading it
    pub fn new_with_parameters(id: EventId, title: TitleEvent, owner: OwnerEvent, start_date: DateEvent,
                               duration: DurationEvent) -> Self
    {
        Self {
            base: EventBase::new(id, title, owner, start_date),
            duration,
        }
    }
}

impl CalendarEntry for PersonalEvent {
    fn base(&self) -> &EventBase {
        &self.base
    }

    fn event_type(&self) -> EventType {
        EventType::Personal
    }

    fn description(&self) -> String {
        format!("Appointment: {} at {} ({})", self.title(), self.start_date(), self.duration)
    }

    fn duration(&self) -> DurationEvent {
        self.duration
    }
}
