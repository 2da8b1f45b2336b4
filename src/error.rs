//! Error types for my-calendar.
//!
//! Construction of value objects and events is the only fallible part of the event model;
//! the calendar store and its queries never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Raised by value-object constructors when a field is empty, negative, or otherwise invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or blank
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A non-negative number was negative
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    /// A strictly positive number was zero or negative
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    /// A number does not fit the range supported for this field
    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: i64 },

    /// A date and time was required but none was given
    #[error("Date and time cannot be missing")]
    MissingDate,

    /// The calendar does not have such a date or time
    #[error("Invalid date and time {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
}

/// Raised when an event type tag does not name any known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized event type: {tag}")]
pub struct UnrecognizedTypeError {
    tag: String,
}

impl UnrecognizedTypeError {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self { tag: tag.into() }
    }

    /// The offending tag, as it was given
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Error returned by the [`EventFactory`](crate::factory::EventFactory)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnrecognizedType(#[from] UnrecognizedTypeError),
}

/// Errors of the [`cache`](crate::cache) module
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing file could not be opened
    #[error("Unable to open file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for event construction
pub type Result<T, E = EventError> = std::result::Result<T, E>;
