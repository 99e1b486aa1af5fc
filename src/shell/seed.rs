// Synthetic producer traffic for the demo run.
//
// Events are spread evenly over `[now - window, now)` and cycle through the well-known
// type labels. Event `i` belongs to producer `i % producers`, so producers interleave in time.

use crate::modules::events::core::event::{Event, EventError};
use crate::modules::events::core::event_type;
use chrono::{Duration, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed window of {hours}h reaches before the earliest supported date")]
    WindowOutOfRange { hours: i64 },

    #[error(transparent)]
    Event(#[from] EventError),
}

pub fn producer_events(
    producer: usize,
    producers: usize,
    total: usize,
    window: Duration,
    now: NaiveDateTime,
) -> Result<Vec<Event>, SeedError> {
    let start = now
        .checked_sub_signed(window)
        .ok_or(SeedError::WindowOutOfRange {
            hours: window.num_hours(),
        })?;
    let window_ms = i128::from(window.num_milliseconds());
    (producer..total)
        .step_by(producers.max(1))
        .map(|index| {
            // index < total, so the quotient never exceeds window_ms and fits back in i64
            let offset_ms = window_ms * index as i128 / total as i128;
            let offset = Duration::milliseconds(offset_ms as i64);
            let event_type = event_type::ALL[index % event_type::ALL.len()];
            Ok(Event::new(event_type, start + offset)?)
        })
        .collect()
}
