//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical calendar event record and its wire shape.
//! - Provide creation and merge-patch helpers for the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `date`/`time` serialize as `YYYY-MM-DD` / `HH:MM`; a missing wire
//!   `time` means midnight, a missing `duration` means zero minutes.
//! - The recurrence pair is either fully present (group occurrence) or
//!   fully absent (standalone event).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every stored event.
pub type EventId = Uuid;

/// Step used to materialize occurrences of a recurrence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceStep {
    Daily,
    Weekly,
    Monthly,
}

/// Calendar event record.
///
/// The occupied slot is the half-open range `[date+time, date+time+duration)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    #[serde(with = "wire_time", default = "midnight")]
    pub time: NaiveTime,
    /// Length of the slot in minutes; zero-width slots conflict with nothing.
    #[serde(default)]
    pub duration: u32,
    /// Recurrence group identity shared by all occurrences of one expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_id: Option<Uuid>,
    /// Step that generated this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_type: Option<RecurrenceStep>,
}

/// Field set collected for a new event before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
}

/// Merge patch for a single event; `None` leaves the field unchanged.
///
/// The recurrence pair is deliberately absent: editing one occurrence keeps
/// its group identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub duration: Option<u32>,
}

impl Event {
    /// Creates a standalone event with a fresh stable id.
    pub fn new(draft: EventDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates an event with a caller-provided stable id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            duration: draft.duration,
            recurring_id: None,
            recurring_type: None,
        }
    }

    /// Returns whether this event is one occurrence of a recurrence group.
    pub fn is_recurring(&self) -> bool {
        self.recurring_id.is_some()
    }

    /// Applies a merge patch, leaving unset fields untouched.
    pub fn apply(&mut self, patch: &EventPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
    }
}

fn midnight() -> NaiveTime {
    NaiveTime::MIN
}

mod wire_date {
    use crate::clock;
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&clock::date_string(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        clock::parse_date(&raw).map_err(de::Error::custom)
    }
}

mod wire_time {
    use crate::clock;
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&clock::time_string(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        clock::parse_time(&raw).map_err(de::Error::custom)
    }
}
