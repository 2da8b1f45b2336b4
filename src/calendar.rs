//! The calendar store, and the queries it answers

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::date::DateEvent;
use crate::event::{Event, EventKinds};
use crate::traits::CalendarEntry;
use crate::values::{EventId, OwnerEvent};

/// A collection of events, indexed by their IDs.
///
/// Stored events are never modified: updating an event means removing it and adding its new version. \
/// Queries return events in no particular order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Event>", into = "Vec<Event>")]
pub struct CalendarManager {
    events: HashMap<EventId, Event>,
}

impl CalendarManager {
    /// Create an empty calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to this calendar.
    /// In case an event with the same ID exists, it is replaced
    pub fn add(&mut self, event: Event) {
        let id = event.id().clone();
        if let Some(previous) = self.events.insert(id, event) {
            log::debug!("Replaced event {} ({})", previous.id(), previous.title());
        }
    }

    /// Remove an event from this calendar.
    /// Returns whether such an event existed
    pub fn remove(&mut self, id: &EventId) -> bool {
        match self.events.remove(id) {
            None => {
                log::debug!("No event {} to remove", id);
                false
            },
            Some(_) => true,
        }
    }

    /// Remove every event from this calendar
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns a particular event
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the list of events that this calendar contains
    pub fn all(&self) -> Vec<&Event> {
        self.events.values().collect()
    }

    /// Returns the events that occur within `[start, end]`.
    ///
    /// This is empty in case `start` is after `end`.
    pub fn events_in_period(&self, start: &DateEvent, end: &DateEvent) -> Vec<&Event> {
        if end.is_before(start) {
            log::debug!("Empty period requested: {} is after {}", start, end);
            return Vec::new();
        }

        self.events.values()
            .filter(|event| event.occurs_in_period(start, end))
            .collect()
    }

    /// Returns only the events of the given kinds, e.g. `EventKinds::TASK | EventKinds::REMINDER`
    pub fn events_of_kinds(&self, kinds: EventKinds) -> Vec<&Event> {
        self.events.values()
            .filter(|event| event.is_of_kind(kinds))
            .collect()
    }

    /// Returns the events that belong to `owner`
    pub fn events_owned_by(&self, owner: &OwnerEvent) -> Vec<&Event> {
        self.events.values()
            .filter(|event| event.owner() == owner)
            .collect()
    }

    /// Tells whether two events conflict. They do not have to be in this calendar
    pub fn conflicts_between(&self, a: &dyn CalendarEntry, b: &dyn CalendarEntry) -> bool {
        a.conflicts_with(b)
    }

    /// Returns the events of this calendar that conflict with `event`.
    ///
    /// A stored event with the same ID as `event` is not reported, so that an event never conflicts with itself.
    pub fn conflicts_with(&self, event: &dyn CalendarEntry) -> Vec<&Event> {
        self.events.values()
            .filter(|e| e.id() != event.id() && e.conflicts_with(event))
            .collect()
    }

    /// Whether `event` conflicts with any event of this calendar
    pub fn has_conflict(&self, event: &dyn CalendarEntry) -> bool {
        self.events.values()
            .any(|e| e.id() != event.id() && e.conflicts_with(event))
    }
}

impl From<Vec<Event>> for CalendarManager {
    fn from(events: Vec<Event>) -> Self {
        let mut calendar = Self::new();
        for event in events {
            calendar.add(event);
        }
        calendar
    }
}

impl From<CalendarManager> for Vec<Event> {
    fn from(calendar: CalendarManager) -> Vec<Event> {
        let mut events: Vec<Event> = calendar.events.into_iter()
            .map(|(_, event)| event)
            .collect();
        events.sort_by(crate::utils::compare_events_by_start);
        events
    }
}

impl Extend<Event> for CalendarManager {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        for event in events {
            self.add(event);
        }
    }
}
