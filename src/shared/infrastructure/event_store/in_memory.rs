// In memory implementation of the EventStore port.
//
// Purpose
// - Hold every live event in a single vector guarded by one lock.
//
// Responsibilities
// - Serialize insert, remove_all and the scan-and-copy step of queries under that lock,
//   so concurrent calls behave as if they ran one after another.
// - Hand out cursors over a copy taken while the lock is held, then release it.
//
// Poisoning
// - Each critical section is a single Vec operation that leaves the vector valid, so a
//   poisoned lock is recovered instead of propagated.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::query::EventQuery;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::cursor::SnapshotCursor;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: Mutex::new(events.into_iter().collect()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventStore for InMemoryEventStore {
    type Cursor = SnapshotCursor;

    fn insert(&self, event: Event) {
        tracing::trace!(
            event_type = event.event_type(),
            timestamp = %event.timestamp(),
            "insert event"
        );
        self.guard().push(event);
    }

    fn insert_batch(&self, batch: Vec<Event>) {
        tracing::trace!(count = batch.len(), "insert event batch");
        self.guard().extend(batch);
    }

    fn remove_all(&self, event_type: &str) -> usize {
        let removed = {
            let mut events = self.guard();
            let before = events.len();
            events.retain(|event| event.event_type() != event_type);
            before - events.len()
        };
        tracing::debug!(event_type, removed, "removed events by type");
        removed
    }

    fn query_with(&self, query: &EventQuery) -> SnapshotCursor {
        if query.window.is_empty() {
            tracing::debug!(event_type = %query.event_type, "empty query window");
            return SnapshotCursor::new(Vec::new());
        }
        let snapshot: Vec<Event> = self
            .guard()
            .iter()
            .filter(|event| query.matches(event))
            .cloned()
            .collect();
        tracing::debug!(
            event_type = %query.event_type,
            start = %query.window.start,
            end = %query.window.end,
            matched = snapshot.len(),
            "queried events"
        );
        SnapshotCursor::new(snapshot)
    }

    fn events(&self) -> Vec<Event> {
        self.guard().clone()
    }

    fn len(&self) -> usize {
        self.guard().len()
    }
}
