// Shared event fixtures for unit tests.
//
// - `at` builds a timestamp without the chrono ceremony.
// - `event` builds a known-valid event.

use crate::modules::events::core::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

pub fn at(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("fixture timestamp must be a valid date-time")
}

pub fn event(event_type: &str, timestamp: NaiveDateTime) -> Event {
    Event::new(event_type, timestamp).expect("fixture event type must not be empty")
}
