// Randomized producer traffic for scenario tests.
//
// Types are drawn from the well-known labels and timestamps fall in the day before `now`,
// so a two-day window ending at `now` covers every generated event.

use chrono::{Duration, Local, NaiveDateTime};
use event_store::modules::events::core::event::Event;
use event_store::modules::events::core::event_type;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn random_events(count: usize, now: NaiveDateTime, seed: u64) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(seed);
    let day_ms = Duration::days(1).num_milliseconds();
    (0..count)
        .map(|_| {
            let event_type = event_type::ALL[rng.random_range(0..event_type::ALL.len())];
            let offset = Duration::milliseconds(rng.random_range(1..=day_ms));
            Event::new(event_type, now - offset).expect("well-known types are never empty")
        })
        .collect()
}
