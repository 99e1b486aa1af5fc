// Event store port and cursor protocol.
//
// Purpose
// - Describe what callers can do with a store of events without tying them to a backend.
//
// Responsibilities
// - EventStore: insert, bulk removal by type, and (type, time window) queries.
// - EventIterator: the pull protocol over query results (move_next, current, remove, close).
//
// Concurrency
// - Store methods take `&self` and are linearizable. Share a store across threads with `Arc`.
// - A cursor is owned by its consumer. `&mut self` gives per-cursor exclusion; wrap it in a
//   Mutex if several threads must drive the same cursor.
//
// Errors
// - None of these operations fail. Empty stores, exhausted or closed cursors resolve to
//   `false`, `None` or a no-op.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::query::EventQuery;
use chrono::NaiveDateTime;

pub mod cursor;
pub mod in_memory;

pub use cursor::{CursorState, SnapshotCursor};
pub use in_memory::InMemoryEventStore;

pub trait EventStore: Send + Sync {
    type Cursor: EventIterator;

    fn insert(&self, event: Event);

    /// Appends every event of `batch` in one step; no caller observes a partial batch.
    fn insert_batch(&self, batch: Vec<Event>);

    /// Removes every event of exactly `event_type` and returns how many were dropped.
    fn remove_all(&self, event_type: &str) -> usize;

    fn query_with(&self, query: &EventQuery) -> Self::Cursor;

    /// Events of `event_type` stamped in `[start, end)`, as a cursor over a private snapshot.
    fn query(&self, event_type: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self::Cursor {
        self.query_with(&EventQuery::new(event_type, start, end))
    }

    /// Point-in-time copy of every stored event, in insertion order.
    fn events(&self) -> Vec<Event>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait EventIterator {
    /// Advances onto the next element. Returns false once exhausted or closed.
    fn move_next(&mut self) -> bool;

    /// The element under the cursor, or None when nothing is positioned.
    fn current(&self) -> Option<&Event>;

    /// Drops the current element from the cursor's results. No-op unless positioned.
    fn remove(&mut self);

    /// Releases the results. Every later call is a harmless no-op.
    fn close(&mut self);

    fn state(&self) -> CursorState;
}
