// Query predicate: one event type plus a half-open time window.
//
// Boundaries
// - `start` is inclusive, `end` is exclusive. An event stamped exactly at `end` never matches.
// - A window whose start is not before its end is empty. It matches nothing and is not an error.

use crate::modules::events::core::event::Event;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub event_type: String,
    pub window: TimeWindow,
}

impl EventQuery {
    pub fn new(event_type: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            event_type: event_type.into(),
            window: TimeWindow::new(start, end),
        }
    }

    /// Exact, case-sensitive type match and window containment.
    pub fn matches(&self, event: &Event) -> bool {
        event.event_type() == self.event_type && self.window.contains(event.timestamp())
    }
}
