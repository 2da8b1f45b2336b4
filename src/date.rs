//! Naive local timestamps of calendar events

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::values::DurationEvent;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The date and time of an event.
///
/// There is no time zone: every timestamp is a naive local one. \
/// Comparison, equality and hashing all use the wrapped timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateEvent {
    date_time: NaiveDateTime,
}

impl DateEvent {
    pub fn new(date_time: NaiveDateTime) -> Self {
        Self { date_time }
    }

    /// Build a timestamp from its calendar parts, seconds being zero
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, ValidationError> {
        Self::from_ymd_hms(year, month, day, hour, minute, 0)
    }

    /// Build a timestamp from its calendar parts.
    /// Fails in case the calendar has no such date (e.g. February 30th) or time
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Self::new)
            .ok_or(ValidationError::InvalidDate { year, month, day, hour, minute, second })
    }

    /// Wrap a timestamp that may be missing, e.g. when it comes from an optional user input
    pub fn from_optional(date_time: Option<NaiveDateTime>) -> Result<Self, ValidationError> {
        date_time.map(Self::new).ok_or(ValidationError::MissingDate)
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn plus_minutes(&self, duration: DurationEvent) -> Self {
        self.plus(Duration::minutes(i64::from(duration.minutes())))
    }

    /// Shift this timestamp by a (possibly negative) number of days
    pub fn plus_days(&self, days: i64) -> Self {
        // Beyond about a hundred million days, every date is out of chrono's range anyway
        let days = days.clamp(-(1 << 36), 1 << 36);
        self.plus(Duration::days(days))
    }

    /// Timestamps saturate at the edges of the representable range
    fn plus(&self, delta: Duration) -> Self {
        match self.checked_plus(delta) {
            Some(date) => date,
            None if delta < Duration::zero() => Self::new(NaiveDateTime::MIN),
            None => Self::new(NaiveDateTime::MAX),
        }
    }

    pub(crate) fn checked_plus(&self, delta: Duration) -> Option<Self> {
        self.date_time.checked_add_signed(delta).map(Self::new)
    }

    /// Time elapsed from `earlier` to `self`
    pub(crate) fn since(&self, earlier: &DateEvent) -> Duration {
        self.date_time.signed_duration_since(earlier.date_time)
    }

    pub fn is_before(&self, other: &DateEvent) -> bool {
        self.date_time < other.date_time
    }

    pub fn is_after(&self, other: &DateEvent) -> bool {
        self.date_time > other.date_time
    }
}

impl From<NaiveDateTime> for DateEvent {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::new(date_time)
    }
}

impl TryFrom<Option<NaiveDateTime>> for DateEvent {
    type Error = ValidationError;

    fn try_from(date_time: Option<NaiveDateTime>) -> Result<Self, Self::Error> {
        Self::from_optional(date_time)
    }
}

impl Display for DateEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date_time.format(DISPLAY_FORMAT))
    }
}
