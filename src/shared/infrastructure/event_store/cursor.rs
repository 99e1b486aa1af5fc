// Snapshot cursor over query results.
//
// Purpose
// - Hand query results to a single consumer as a stateful, removable iterator.
//
// Responsibilities
// - Own a private copy of the matching events. The store is never touched again, so later
//   inserts or removals on the store are invisible here and `remove` only edits the copy.
// - Track the position as a small state machine:
//   BeforeStart -> Positioned -> (Removed -> Positioned)* -> Exhausted, and Closed from anywhere.
//
// Removal
// - Removing the current element leaves the cursor between elements: `current` is None and the
//   next `move_next` lands on the element that followed the removed one.

use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::event_store::EventIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    BeforeStart,
    Positioned,
    Removed,
    Exhausted,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    // Nothing current; the next `move_next` lands on `next`.
    Before { next: usize, removed: bool },
    At(usize),
    Exhausted,
    Closed,
}

#[derive(Debug)]
pub struct SnapshotCursor {
    snapshot: Vec<Event>,
    position: Position,
}

impl SnapshotCursor {
    pub fn new(snapshot: Vec<Event>) -> Self {
        Self {
            snapshot,
            position: Position::Before {
                next: 0,
                removed: false,
            },
        }
    }

    /// Number of events still held by the cursor.
    pub fn remaining(&self) -> usize {
        self.snapshot.len()
    }
}

impl EventIterator for SnapshotCursor {
    fn move_next(&mut self) -> bool {
        let next = match self.position {
            Position::Before { next, .. } => next,
            Position::At(index) => index + 1,
            Position::Exhausted | Position::Closed => return false,
        };
        if next < self.snapshot.len() {
            self.position = Position::At(next);
            true
        } else {
            self.position = Position::Exhausted;
            false
        }
    }

    fn current(&self) -> Option<&Event> {
        match self.position {
            Position::At(index) => self.snapshot.get(index),
            _ => None,
        }
    }

    fn remove(&mut self) {
        if let Position::At(index) = self.position {
            self.snapshot.remove(index);
            self.position = Position::Before {
                next: index,
                removed: true,
            };
        }
    }

    fn close(&mut self) {
        if self.position != Position::Closed {
            tracing::debug!(remaining = self.snapshot.len(), "closing event cursor");
        }
        self.snapshot = Vec::new();
        self.position = Position::Closed;
    }

    fn state(&self) -> CursorState {
        match self.position {
            Position::Before { removed: false, .. } => CursorState::BeforeStart,
            Position::Before { removed: true, .. } => CursorState::Removed,
            Position::At(_) => CursorState::Positioned,
            Position::Exhausted => CursorState::Exhausted,
            Position::Closed => CursorState::Closed,
        }
    }
}

impl Iterator for SnapshotCursor {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current().cloned()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod snapshot_cursor_tests {
    use super::*;
    use crate::tests::fixtures::events::{at, event};
    use rstest::{fixture, rstest};

    #[fixture]
    fn abc() -> (Event, Event, Event) {
        (
            event("a", at(2024, 3, 1, 0, 0, 0)),
            event("b", at(2024, 3, 1, 1, 0, 0)),
            event("c", at(2024, 3, 1, 2, 0, 0)),
        )
    }

    #[fixture]
    fn cursor(abc: (Event, Event, Event)) -> SnapshotCursor {
        let (a, b, c) = abc;
        SnapshotCursor::new(vec![a, b, c])
    }

    #[rstest]
    fn it_should_start_before_the_first_element(cursor: SnapshotCursor) {
        assert_eq!(cursor.state(), CursorState::BeforeStart);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.remaining(), 3);
    }

    #[rstest]
    fn it_should_walk_the_snapshot_in_order(mut cursor: SnapshotCursor) {
        let mut seen = Vec::new();
        while cursor.move_next() {
            assert_eq!(cursor.state(), CursorState::Positioned);
            seen.push(cursor.current().unwrap().event_type().to_string());
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert_eq!(cursor.current(), None);
    }

    #[rstest]
    fn it_should_stay_exhausted(mut cursor: SnapshotCursor) {
        while cursor.move_next() {}
        assert!(!cursor.move_next());
        assert!(!cursor.move_next());
        assert_eq!(cursor.state(), CursorState::Exhausted);
    }

    #[rstest]
    fn it_should_not_skip_the_successor_after_remove(
        mut cursor: SnapshotCursor,
        abc: (Event, Event, Event),
    ) {
        let (a, b, _) = abc;
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&a));
        cursor.remove();
        assert_eq!(cursor.state(), CursorState::Removed);
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&b));
        assert_eq!(cursor.remaining(), 2);
    }

    #[rstest]
    fn it_should_ignore_a_second_remove(mut cursor: SnapshotCursor, abc: (Event, Event, Event)) {
        let (_, b, c) = abc;
        cursor.move_next();
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&b));
        cursor.remove();
        cursor.remove();
        assert_eq!(cursor.remaining(), 2);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&c));
    }

    #[rstest]
    fn it_should_ignore_remove_before_the_first_move(mut cursor: SnapshotCursor) {
        cursor.remove();
        assert_eq!(cursor.state(), CursorState::BeforeStart);
        assert_eq!(cursor.remaining(), 3);
        assert!(cursor.move_next());
        assert_eq!(cursor.current().unwrap().event_type(), "a");
    }

    #[rstest]
    fn it_should_exhaust_after_removing_the_last_element(
        mut cursor: SnapshotCursor,
        abc: (Event, Event, Event),
    ) {
        let (_, _, c) = abc;
        while cursor.move_next() {
            if cursor.current() == Some(&c) {
                cursor.remove();
            }
        }
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert_eq!(cursor.remaining(), 2);
        cursor.remove();
        assert_eq!(cursor.remaining(), 2);
    }

    #[rstest]
    fn it_should_drain_when_removing_every_element(mut cursor: SnapshotCursor) {
        let mut visited = 0;
        while cursor.move_next() {
            assert!(cursor.current().is_some());
            cursor.remove();
            assert_eq!(cursor.current(), None);
            visited += 1;
        }
        assert_eq!(visited, 3);
        assert_eq!(cursor.remaining(), 0);
        assert!(!cursor.move_next());
    }

    #[rstest]
    fn it_should_report_nothing_on_an_empty_snapshot() {
        let mut cursor = SnapshotCursor::new(Vec::new());
        assert_eq!(cursor.current(), None);
        cursor.remove();
        assert!(!cursor.move_next());
        assert!(!cursor.move_next());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.state(), CursorState::Exhausted);
    }

    #[rstest]
    fn it_should_make_every_call_safe_after_close(mut cursor: SnapshotCursor) {
        cursor.move_next();
        cursor.close();
        assert_eq!(cursor.state(), CursorState::Closed);
        assert_eq!(cursor.current(), None);
        assert!(!cursor.move_next());
        cursor.remove();
        cursor.close();
        assert_eq!(cursor.state(), CursorState::Closed);
        assert_eq!(cursor.remaining(), 0);
    }

    #[rstest]
    fn it_should_iterate_as_owned_events(cursor: SnapshotCursor, abc: (Event, Event, Event)) {
        let (a, b, c) = abc;
        let events: Vec<Event> = cursor.collect();
        assert_eq!(events, vec![a, b, c]);
    }

    #[rstest]
    fn it_should_yield_nothing_from_the_iterator_once_closed(mut cursor: SnapshotCursor) {
        cursor.close();
        assert_eq!(cursor.next(), None);
    }
}
