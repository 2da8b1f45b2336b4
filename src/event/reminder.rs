//! Reminders

use serde::{Deserialize, Serialize};

use crate::date::DateEvent;
use crate::event::{EventBase, EventType};
use crate::traits::CalendarEntry;
use crate::values::{EventId, MessageEvent, OwnerEvent, TitleEvent};

/// A simple reminder message, shown at a given date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReminderEvent {
    #[serde(flatten)]
    base: EventBase,
    message: MessageEvent,
}

impl ReminderEvent {
    /// Create a brand new reminder.
    /// This will pick a new (random) event ID.
    pub fn new(title: TitleEvent, owner: OwnerEvent, date: DateEvent, message: MessageEvent) -> Self {
        Self::new_with_parameters(EventId::random(), title, owner, date, message)
    }

    /// Create a reminder with a known ID, e.g. when reloading it
    pub fn new_with_parameters(id: EventId, title: TitleEvent, owner: OwnerEvent, date: DateEvent,
                               message: MessageEvent) -> Self
    {
        Self {
            base: EventBase::new(id, title, owner, date),
            message,
        }
    }

    pub fn message(&self) -> &MessageEvent { &self.message }
}

impl CalendarEntry for ReminderEvent {
    fn base(&self) -> &EventBase {
        &self.base
    }

    fn event_type(&self) -> EventType {
        EventType::Reminder
    }

    fn description(&self) -> String {
        format!("Reminder: {} - {} ({})", self.title(), self.message, self.start_date())
    }

    fn blocks_time(&self) -> bool {
        false
    }
}
