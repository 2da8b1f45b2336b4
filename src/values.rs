//! Validated value objects that make up calendar events
//!
//! All of them are immutable, and compared by value.

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Implements the accessors and conversions shared by every string-based value object
macro_rules! impl_text_value {
    ($type_name:ident) => {
        impl $type_name {
            pub fn value(&self) -> &str {
                &self.value
            }
        }

        impl From<$type_name> for String {
            fn from(v: $type_name) -> String {
                v.value
            }
        }

        impl Display for $type_name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }
    }
}

/// Returns the trimmed input, or an error if nothing is left
fn non_blank(input: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}



/// The unique identifier of an event
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId {
    value: String,
}

impl EventId {
    pub fn new<S: AsRef<str>>(id: S) -> Result<Self, ValidationError> {
        Ok(Self { value: non_blank(id.as_ref(), "event id")? })
    }

    /// Generate a random EventId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { value: random }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for EventId {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Used to support serde
impl Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<EventId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EventId::new(s).map_err(de::Error::custom)
    }
}



/// The title of an event. Cannot be blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TitleEvent {
    value: String,
}

impl TitleEvent {
    pub fn new<S: AsRef<str>>(title: S) -> Result<Self, ValidationError> {
        Ok(Self { value: non_blank(title.as_ref(), "title")? })
    }
}

impl TryFrom<String> for TitleEvent {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
impl_text_value!(TitleEvent);


/// The user an event belongs to. Cannot be blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerEvent {
    value: String,
}

impl OwnerEvent {
    pub fn new<S: AsRef<str>>(owner: S) -> Result<Self, ValidationError> {
        Ok(Self { value: non_blank(owner.as_ref(), "owner")? })
    }
}

impl TryFrom<String> for OwnerEvent {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
impl_text_value!(OwnerEvent);


/// Where a meeting takes place. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PlaceEvent {
    value: String,
}

impl PlaceEvent {
    pub fn new<S: AsRef<str>>(place: S) -> Self {
        Self { value: place.as_ref().trim().to_string() }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<String> for PlaceEvent {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
impl From<Option<&str>> for PlaceEvent {
    fn from(place: Option<&str>) -> Self {
        place.map(Self::new).unwrap_or_default()
    }
}
impl_text_value!(PlaceEvent);


/// The text of a reminder. May be empty, but must be given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MessageEvent {
    value: String,
}

impl MessageEvent {
    pub fn new<S: AsRef<str>>(message: S) -> Self {
        Self { value: message.as_ref().trim().to_string() }
    }

    pub fn from_optional(message: Option<&str>) -> Result<Self, ValidationError> {
        message.map(Self::new).ok_or(ValidationError::Empty { field: "message" })
    }
}

impl From<String> for MessageEvent {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
impl_text_value!(MessageEvent);


/// The priority of a task, e.g. `HIGH`. Always upper-case, cannot be blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PriorityEvent {
    value: String,
}

impl PriorityEvent {
    pub fn new<S: AsRef<str>>(priority: S) -> Result<Self, ValidationError> {
        Ok(Self { value: non_blank(priority.as_ref(), "priority")?.to_uppercase() })
    }
}

impl TryFrom<String> for PriorityEvent {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
impl_text_value!(PriorityEvent);



/// The duration of an event, in minutes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct DurationEvent {
    minutes: u32,
}

impl DurationEvent {
    pub fn new(minutes: i64) -> Result<Self, ValidationError> {
        if minutes < 0 {
            return Err(ValidationError::Negative { field: "duration", value: minutes });
        }
        let minutes = u32::try_from(minutes)
            .map_err(|_| ValidationError::OutOfRange { field: "duration", value: minutes })?;
        Ok(Self { minutes })
    }

    /// The duration of events that do not block time (tasks, reminders, periodic events)
    pub fn zero() -> Self {
        Self { minutes: 0 }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl TryFrom<i64> for DurationEvent {
    type Error = ValidationError;
    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}
impl From<DurationEvent> for u32 {
    fn from(d: DurationEvent) -> u32 {
        d.minutes
    }
}

impl Display for DurationEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hours = self.minutes / 60;
        let remaining = self.minutes % 60;
        match (hours, remaining) {
            (0, _) => write!(f, "{}min", self.minutes),
            (_, 0) => write!(f, "{}h", hours),
            (_, _) => write!(f, "{}h{}min", hours, remaining),
        }
    }
}


/// How often a periodic event repeats, in days
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct FrequencyEvent {
    days: u32,
}

impl FrequencyEvent {
    pub fn new(days: i64) -> Result<Self, ValidationError> {
        if days <= 0 {
            return Err(ValidationError::NotPositive { field: "frequency", value: days });
        }
        let days = u32::try_from(days)
            .map_err(|_| ValidationError::OutOfRange { field: "frequency", value: days })?;
        Ok(Self { days })
    }

    pub fn days(&self) -> u32 {
        self.days
    }
}

impl TryFrom<i64> for FrequencyEvent {
    type Error = ValidationError;
    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}
impl From<FrequencyEvent> for u32 {
    fn from(f: FrequencyEvent) -> u32 {
        f.days
    }
}

impl Display for FrequencyEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.days {
            1 => write!(f, "every day"),
            7 => write!(f, "every week"),
            30 | 31 => write!(f, "every month"),
            365 | 366 => write!(f, "every year"),
            n => write!(f, "every {} days", n),
        }
    }
}



/// The people attending a meeting, in the order they were given.
///
/// Blank names are silently dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ParticipantEvent {
    participants: Vec<String>,
}

impl ParticipantEvent {
    /// Split a comma-separated list of names, e.g. `"Alice, Bob"`
    pub fn from_csv(participants: &str) -> Self {
        Self::from_list(participants.split(','))
    }

    pub fn from_list<I, S>(participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let participants = participants.into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| p.is_empty() == false)
            .collect();
        Self { participants }
    }

    pub fn names(&self) -> &[String] {
        &self.participants
    }

    pub fn count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl From<Vec<String>> for ParticipantEvent {
    fn from(list: Vec<String>) -> Self {
        Self::from_list(list)
    }
}
impl From<Option<&str>> for ParticipantEvent {
    fn from(participants: Option<&str>) -> Self {
        participants.map(Self::from_csv).unwrap_or_default()
    }
}
impl From<ParticipantEvent> for Vec<String> {
    fn from(p: ParticipantEvent) -> Vec<String> {
        p.participants
    }
}

impl Display for ParticipantEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.participants.join(", "))
    }
}
