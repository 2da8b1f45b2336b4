//! Behaviour shared by every kind of calendar event

use crate::date::DateEvent;
use crate::event::{EventBase, EventType};
use crate::values::{DurationEvent, EventId, OwnerEvent, TitleEvent};

/// Something that can be put in a calendar.
///
/// Implementors only need to provide their common fields, their type and a description.
/// Conflict and occurrence rules have defaults that variants override when their semantics differ.
pub trait CalendarEntry {
    /// The fields every event has
    fn base(&self) -> &EventBase;

    /// Returns the fixed tag of this kind of event
    fn event_type(&self) -> EventType;

    /// A human-readable summary, including the title and every type-specific field
    fn description(&self) -> String;

    fn id(&self) -> &EventId {
        self.base().id()
    }

    fn title(&self) -> &TitleEvent {
        self.base().title()
    }

    fn owner(&self) -> &OwnerEvent {
        self.base().owner()
    }

    fn start_date(&self) -> DateEvent {
        self.base().start_date()
    }

    /// Events that do not block time have a zero duration
    fn duration(&self) -> DurationEvent {
        DurationEvent::zero()
    }

    /// This is always derived from the start date and the duration, and never stored
    fn end_date(&self) -> DateEvent {
        self.start_date().plus_minutes(self.duration())
    }

    /// Whether this event occupies its time slot, so that other events cannot overlap it
    fn blocks_time(&self) -> bool {
        true
    }

    /// Two time-blocking events conflict when their `[start, end)` intervals overlap.
    ///
    /// An event that ends exactly when the other one starts is not a conflict.
    /// Events that do not block time never conflict, whichever side they are on.
    fn conflicts_with(&self, other: &dyn CalendarEntry) -> bool {
        if self.blocks_time() == false || other.blocks_time() == false {
            return false;
        }
        self.start_date().is_before(&other.end_date())
            && self.end_date().is_after(&other.start_date())
    }

    /// Whether this event starts within `[start, end]` (both bounds included)
    fn occurs_in_period(&self, start: &DateEvent, end: &DateEvent) -> bool {
        let date = self.start_date();
        date.is_before(start) == false && date.is_after(end) == false
    }
}
