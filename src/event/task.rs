//! Tasks with a deadline

use serde::{Deserialize, Serialize};

use crate::date::DateEvent;
use crate::event::{EventBase, EventType};
use crate::traits::CalendarEntry;
use crate::values::{EventId, OwnerEvent, PriorityEvent, TitleEvent};

/// Something to do before a deadline.
///
/// The deadline is the start date of the event. Tasks have no duration and do not block time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskEvent {
    #[serde(flatten)]
    base: EventBase,

    /// Free-form, upper-cased priority (e.g. `HIGH`)
    priority: PriorityEvent,
}

impl TaskEvent {
    /// Create a brand new task.
    /// This will pick a new (random) event ID.
    pub fn new(title: TitleEvent, owner: OwnerEvent, deadline: DateEvent, priority: PriorityEvent) -> Self {
        Self::new_with_parameters(EventId::random(), title, owner, deadline, priority)
    }

    /// Create a task with a known ID, e.g. when reloading it
    pub fn new_with_parameters(id: EventId, title: TitleEvent, owner: OwnerEvent, deadline: DateEvent,
                               priority: PriorityEvent) -> Self
    {
        Self {
            base: EventBase::new(id, title, owner, deadline),
            priority,
        }
    }

    pub fn priority(&self) -> &PriorityEvent { &self.priority }
    pub fn deadline(&self) -> DateEvent      { self.start_date() }
}

impl CalendarEntry for TaskEvent {
    fn base(&self) -> &EventBase {
        &self.base
    }

    fn event_type(&self) -> EventType {
        EventType::Task
    }

    fn description(&self) -> String {
        format!("Task: {} (priority: {}) - deadline: {}", self.title(), self.priority, self.deadline())
    }

    fn blocks_time(&self) -> bool {
        false
    }
}
