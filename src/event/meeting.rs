//! Meetings

use serde::{Deserialize, Serialize};

use crate::date::DateEvent;
use crate::event::{EventBase, EventType};
use crate::traits::CalendarEntry;
use crate::values::{DurationEvent, EventId, OwnerEvent, ParticipantEvent, PlaceEvent, TitleEvent};

/// A meeting at some place, with participants
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeetingEvent {
    #[serde(flatten)]
    base: EventBase,
    duration: DurationEvent,

    place: PlaceEvent,
    participants: ParticipantEvent,
}

impl MeetingEvent {
    /// Create a brand new meeting.
    /// This will pick a new (random) event ID.
    pub fn new(title: TitleEvent, owner: OwnerEvent, start_date: DateEvent, duration: DurationEvent,
               place: PlaceEvent, participants: ParticipantEvent) -> Self
    {
        Self::new_with_parameters(EventId::random(), title, owner, start_date, duration, place, participants)
    }

    /// Create a meeting with a known ID, e.g. when reloading it
    pub fn new_with_parameters(id: EventId, title: TitleEvent, owner: OwnerEvent, start_date: DateEvent,
                               duration: DurationEvent, place: PlaceEvent, participants: ParticipantEvent) -> Self
    {
        Self {
            base: EventBase::new(id, title, owner, start_date),
            duration,
            place,
            participants,
        }
    }

    pub fn place(&self) -> &PlaceEvent               { &self.place }
    pub fn participants(&self) -> &ParticipantEvent  { &self.participants }
}

impl CalendarEntry for MeetingEvent {
    fn base(&self) -> &EventBase {
        &self.base
    }

    fn event_type(&self) -> EventType {
        EventType::Meeting
    }

    fn description(&self) -> String {
        format!("Meeting: {} at {} with {}", self.title(), self.place, self.participants)
    }

    fn duration(&self) -> DurationEvent {
        self.duration
    }
}
