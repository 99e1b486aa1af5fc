// Event value: a typed, time-stamped fact handed to the store.
//
// Purpose
// - Carry the two attributes the store filters on: a type label and a timestamp.
//
// Responsibilities
// - Refuse to build an event without a type label, so the store never has to validate.
// - Stay immutable once constructed. Fields are private and only read through accessors.
//
// Timestamps
// - Local date-time without a zone, compared by total order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("event type must not be empty")]
    EmptyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventDto")]
pub struct Event {
    #[serde(rename = "type")]
    event_type: String,
    timestamp: NaiveDateTime,
}

impl Event {
    pub fn new(
        event_type: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Result<Self, EventError> {
        let event_type = event_type.into();
        if event_type.trim().is_empty() {
            return Err(EventError::EmptyType);
        }
        Ok(Self {
            event_type,
            timestamp,
        })
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

// Transport shape, so deserialized events go through the same validation as `Event::new`.
#[derive(Deserialize)]
struct EventDto {
    #[serde(rename = "type")]
    event_type: String,
    timestamp: NaiveDateTime,
}

impl TryFrom<EventDto> for Event {
    type Error = EventError;

    fn try_from(dto: EventDto) -> Result<Self, Self::Error> {
        Event::new(dto.event_type, dto.timestamp)
    }
}
