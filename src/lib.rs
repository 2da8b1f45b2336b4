//! This crate provides a model for calendar events.
//!
//! Several kinds of events are supported (personal appointments, meetings, periodic events, tasks and reminders).
//! They all share a common set of fields, and implement the [`CalendarEntry`](traits::CalendarEntry) trait. \
//! Every field is a validated value type (see the [`values`] module), so that an [`Event`] is always consistent.
//!
//! Events are stored in a [`CalendarManager`], which answers queries (events within a period, conflicting events...). \
//! A [`Cache`](cache::Cache) is a `CalendarManager` that saves itself into a local JSON file.
//!
//! Events can be built with the constructors of each event type, or from a type and a flat list of fields with an [`EventFactory`].

pub mod traits;
pub use traits::CalendarEntry;

pub mod error;
pub mod config;

pub mod date;
pub use date::DateEvent;
pub mod values;
pub use values::{DurationEvent, EventId, FrequencyEvent, MessageEvent, OwnerEvent, ParticipantEvent,
                 PlaceEvent, PriorityEvent, TitleEvent};

pub mod event;
pub use event::{Event, EventKinds, EventType};
pub mod factory;
pub use factory::EventFactory;

pub mod calendar;
pub use calendar::CalendarManager;
pub mod cache;

pub mod utils;
