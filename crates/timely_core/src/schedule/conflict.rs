//! Event overlap detection.
//!
//! # Responsibility
//! - Decide whether a candidate event collides with stored events.
//!
//! # Invariants
//! - Ranges are half-open: touching endpoints never conflict.
//! - Detection is scoped to a single wall date; an event spilling past
//!   midnight is not checked against the next day's events.

use crate::clock;
use crate::model::event::{Event, EventId};
use chrono::NaiveDateTime;

/// Occupied range `[start, end)` of an event on its wall date.
pub fn event_range(event: &Event) -> (NaiveDateTime, NaiveDateTime) {
    clock::event_range(event.date, event.time, event.duration)
}

/// Half-open interval intersection test.
pub fn overlaps(a: &Event, b: &Event) -> bool {
    let (a_start, a_end) = event_range(a);
    let (b_start, b_end) = event_range(b);
    a_start < b_end && b_start < a_end
}

/// Returns whether `candidate` overlaps any same-day event in `events`.
///
/// `ignore` skips one stored event so an edit never conflicts with its own
/// previous version. Pure query; callers decide whether a hit warns or
/// highlights, and it never blocks a write.
pub fn has_conflict(candidate: &Event, events: &[Event], ignore: Option<EventId>) -> bool {
    events.iter().any(|event| {
        if Some(event.id) == ignore {
            return false;
        }
        if event.date != candidate.date {
            return false;
        }
        overlaps(event, candidate)
    })
}
