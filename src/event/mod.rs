//! Calendar events (appointments, meetings, periodic events, tasks, reminders)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::date::DateEvent;
use crate::error::UnrecognizedTypeError;
use crate::traits::CalendarEntry;
use crate::values::{DurationEvent, EventId, OwnerEvent, TitleEvent};

mod personal;
pub use personal::PersonalEvent;
mod meeting;
pub use meeting::MeetingEvent;
mod periodic;
pub use periodic::PeriodicEvent;
mod task;
pub use task::TaskEvent;
mod reminder;
pub use reminder::ReminderEvent;



/// Any calendar event.
///
/// When serialized, this is an object tagged by a `type` field, e.g. `{"type": "TASK", "id": ..., "priority": ...}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "RDV_PERSONNEL")]
    Personal(PersonalEvent),
    #[serde(rename = "REUNION")]
    Meeting(MeetingEvent),
    #[serde(rename = "PERIODIQUE")]
    Periodic(PeriodicEvent),
    #[serde(rename = "TASK")]
    Task(TaskEvent),
    #[serde(rename = "RAPPEL")]
    Reminder(ReminderEvent),
}

/// Evaluates `$body` with `$inner` bound to the variant inside `$event`, whichever it is
macro_rules! dispatch {
    ($event:expr, $inner:ident => $body:expr) => {
        match $event {
            Event::Personal($inner) => $body,
            Event::Meeting($inner) => $body,
            Event::Periodic($inner) => $body,
            Event::Task($inner) => $body,
            Event::Reminder($inner) => $body,
        }
    }
}

/// Returns a reference to the inner `$type_name` if `self` is an `Event::$variant`
macro_rules! synthetise_variant_getter {
    ($fn_name:ident, $variant:ident, $type_name:ty) => {
        pub fn $fn_name(&self) -> Option<&$type_name> {
            match self {
                Event::$variant(e) => Some(e),
                _ => None,
            }
        }
    }
}

impl Event {
    synthetise_variant_getter!(as_personal, Personal, PersonalEvent);
    synthetise_variant_getter!(as_meeting, Meeting, MeetingEvent);
    synthetise_variant_getter!(as_periodic, Periodic, PeriodicEvent);
    synthetise_variant_getter!(as_task, Task, TaskEvent);
    synthetise_variant_getter!(as_reminder, Reminder, ReminderEvent);

    /// Whether this event is included in the given set of kinds
    pub fn is_of_kind(&self, kinds: EventKinds) -> bool {
        kinds.contains(self.event_type().kind())
    }
}

impl CalendarEntry for Event {
    fn base(&self) -> &EventBase {
        dispatch!(self, e => e.base())
    }

    fn event_type(&self) -> EventType {
        dispatch!(self, e => e.event_type())
    }

    fn description(&self) -> String {
        dispatch!(self, e => e.description())
    }

    fn duration(&self) -> DurationEvent {
        dispatch!(self, e => e.duration())
    }

    fn blocks_time(&self) -> bool {
        dispatch!(self, e => e.blocks_time())
    }

    fn conflicts_with(&self, other: &dyn CalendarEntry) -> bool {
        dispatch!(self, e => e.conflicts_with(other))
    }

    fn occurs_in_period(&self, start: &DateEvent, end: &DateEvent) -> bool {
        dispatch!(self, e => e.occurs_in_period(start, end))
    }
}

impl From<PersonalEvent> for Event {
    fn from(e: PersonalEvent) -> Self { Event::Personal(e) }
}
impl From<MeetingEvent> for Event {
    fn from(e: MeetingEvent) -> Self { Event::Meeting(e) }
}
impl From<PeriodicEvent> for Event {
    fn from(e: PeriodicEvent) -> Self { Event::Periodic(e) }
}
impl From<TaskEvent> for Event {
    fn from(e: TaskEvent) -> Self { Event::Task(e) }
}
impl From<ReminderEvent> for Event {
    fn from(e: ReminderEvent) -> Self { Event::Reminder(e) }
}



/// The fields that every kind of event has
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBase {
    /// Generated once when the event is created, and never changed afterwards
    id: EventId,
    title: TitleEvent,
    owner: OwnerEvent,
    start_date: DateEvent,
}

impl EventBase {
    pub fn new(id: EventId, title: TitleEvent, owner: OwnerEvent, start_date: DateEvent) -> Self {
        Self { id, title, owner, start_date }
    }

    pub fn id(&self) -> &EventId          { &self.id }
    pub fn title(&self) -> &TitleEvent    { &self.title }
    pub fn owner(&self) -> &OwnerEvent    { &self.owner }
    pub fn start_date(&self) -> DateEvent { self.start_date }
}



/// Identifies the kind of an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A personal appointment
    #[serde(rename = "RDV_PERSONNEL")]
    Personal,
    /// A meeting, at some place, with participants
    #[serde(rename = "REUNION")]
    Meeting,
    /// An event that repeats every given number of days
    #[serde(rename = "PERIODIQUE")]
    Periodic,
    /// Something to do before a deadline
    #[serde(rename = "TASK")]
    Task,
    /// A simple reminder message
    #[serde(rename = "RAPPEL")]
    Reminder,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Personal,
        EventType::Meeting,
        EventType::Periodic,
        EventType::Task,
        EventType::Reminder,
    ];

    /// The tag this type is known by, in type tags and serialized events
    pub fn tag(&self) -> &'static str {
        match self {
            EventType::Personal => "RDV_PERSONNEL",
            EventType::Meeting => "REUNION",
            EventType::Periodic => "PERIODIQUE",
            EventType::Task => "TASK",
            EventType::Reminder => "RAPPEL",
        }
    }

    pub fn kind(&self) -> EventKinds {
        match self {
            EventType::Personal => EventKinds::PERSONAL,
            EventType::Meeting => EventKinds::MEETING,
            EventType::Periodic => EventKinds::PERIODIC,
            EventType::Task => EventKinds::TASK,
            EventType::Reminder => EventKinds::REMINDER,
        }
    }
}

impl FromStr for EventType {
    type Err = UnrecognizedTypeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        EventType::ALL.iter()
            .find(|t| t.tag() == tag)
            .copied()
            .ok_or_else(|| UnrecognizedTypeError::new(tag))
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

bitflags! {
    /// A set of event types, e.g. to filter the events of a calendar
    pub struct EventKinds: u8 {
        const PERSONAL = 1;
        const MEETING = 2;
        const PERIODIC = 4;
        const TASK = 8;
        const REMINDER = 16;
        /// Kinds of events that occupy their time slot and may conflict with each other
        const BLOCKING = Self::PERSONAL.bits | Self::MEETING.bits;
    }
}
