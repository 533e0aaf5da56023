//! Event store use-case layer.
//!
//! # Responsibility
//! - Apply event mutations in caller order against the in-memory set.
//! - Report conflicts as warnings alongside applied writes.
//! - Mirror every mutation to the snapshot repository.
//!
//! # Invariants
//! - Writes are never blocked by conflicts; the flag only warns.
//! - Each mutation persists the complete collection snapshot.
//! - Mutations are atomic against the in-memory collection; no partial
//!   state is observable.

use crate::clock;
use crate::model::event::{Event, EventDraft, EventId, EventPatch};
use crate::repo::snapshot_repo::{RepoError, SnapshotRepository};
use crate::schedule::conflict::has_conflict;
use crate::schedule::recurrence::{expand, RecurrenceRule};
use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error taxonomy.
///
/// Conflicts are deliberately not part of it; they ride along successful
/// results as booleans.
#[derive(Debug)]
pub enum StoreError {
    NotFound(EventId),
    Persistence(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "event not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Persistence(value)
    }
}

/// Outcome of a single-event creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Created {
    pub id: EventId,
    /// True when the new event overlaps another event on the same day.
    pub conflict: bool,
}

/// In-memory event collection with snapshot persistence.
pub struct EventStore<R: SnapshotRepository> {
    repo: R,
    events: Vec<Event>,
}

impl<R: SnapshotRepository> EventStore<R> {
    /// Opens the store from the persisted snapshot.
    ///
    /// Falls back to the built-in starter events when no snapshot was ever
    /// saved or the stored payload cannot be read.
    pub fn open(repo: R) -> Self {
        let events = match repo.load() {
            Ok(Some(events)) => events,
            Ok(None) => {
                info!("event=snapshot_load module=store status=empty fallback=starter_events");
                starter_events()
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=store status=error fallback=starter_events error={err}"
                );
                starter_events()
            }
        };

        Self { repo, events }
    }

    /// Inserts a new standalone event.
    ///
    /// The write always applies; the returned flag warns when the new event
    /// overlaps another event on the same day (evaluated against the
    /// pre-insertion set).
    pub fn create(&mut self, draft: EventDraft) -> StoreResult<Created> {
        let event = Event::new(draft);
        let conflict = has_conflict(&event, &self.events, None);
        let id = event.id;

        self.events.push(event);
        self.persist()?;
        info!("event=event_create module=store status=ok id={id} conflict={conflict}");

        Ok(Created { id, conflict })
    }

    /// Expands a recurrence request and inserts every occurrence, each with
    /// its own fresh id.
    ///
    /// The batch is not conflict-checked; only standalone creation reports
    /// conflicts. Returns the assigned ids in occurrence order.
    pub fn create_recurring(&mut self, rule: &RecurrenceRule) -> StoreResult<Vec<EventId>> {
        let occurrences = expand(rule);
        let mut ids = Vec::with_capacity(occurrences.len());

        for occurrence in occurrences {
            let mut event = Event::new(occurrence.draft);
            event.recurring_id = Some(occurrence.recurring_id);
            event.recurring_type = Some(occurrence.recurring_type);
            ids.push(event.id);
            self.events.push(event);
        }

        self.persist()?;
        info!(
            "event=event_create_recurring module=store status=ok count={}",
            ids.len()
        );

        Ok(ids)
    }

    /// Merges `patch` into the event with `id`.
    ///
    /// The event's own stored version is ignored during conflict
    /// evaluation, so an edit never collides with the slot it is leaving.
    pub fn update(&mut self, id: EventId, patch: &EventPatch) -> StoreResult<bool> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut merged = self.events[index].clone();
        merged.apply(patch);
        let conflict = has_conflict(&merged, &self.events, Some(id));

        self.events[index] = merged;
        self.persist()?;
        info!("event=event_update module=store status=ok id={id} conflict={conflict}");

        Ok(conflict)
    }

    /// Removes the event with `id`.
    pub fn delete(&mut self, id: EventId) -> StoreResult<()> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.events.remove(index);
        self.persist()?;
        info!("event=event_delete module=store status=ok id={id}");

        Ok(())
    }

    /// Removes every occurrence of a recurrence group; returns the count.
    ///
    /// An unknown group removes nothing and returns zero.
    pub fn delete_group(&mut self, recurring_id: Uuid) -> StoreResult<usize> {
        let before = self.events.len();
        self.events
            .retain(|event| event.recurring_id != Some(recurring_id));
        let removed = before - self.events.len();

        if removed > 0 {
            self.persist()?;
        }
        info!(
            "event=event_delete_group module=store status=ok recurring_id={recurring_id} removed={removed}"
        );

        Ok(removed)
    }

    /// Replaces the whole collection (import path).
    pub fn replace_all(&mut self, events: Vec<Event>) -> StoreResult<()> {
        self.events = events;
        self.persist()?;
        info!(
            "event=event_replace_all module=store status=ok count={}",
            self.events.len()
        );
        Ok(())
    }

    /// Read-only view of the full collection.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events on one wall date, sorted by start time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        let mut day: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.date == date)
            .cloned()
            .collect();
        day.sort_by_key(|event| event.time);
        day
    }

    /// Events grouped per wall date, each day sorted by start time.
    pub fn events_by_day(&self) -> BTreeMap<NaiveDate, Vec<Event>> {
        let mut map: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for event in &self.events {
            map.entry(event.date).or_default().push(event.clone());
        }
        for day in map.values_mut() {
            day.sort_by_key(|event| event.time);
        }
        map
    }

    /// Number of events in each month of `year`, indexed January..December.
    pub fn month_event_counts(&self, year: i32) -> [usize; 12] {
        let mut counts = [0usize; 12];
        for event in &self.events {
            if event.date.year() == year {
                counts[event.date.month0() as usize] += 1;
            }
        }
        counts
    }

    /// Title substring search, case-insensitive.
    pub fn search(&self, query: &str) -> Vec<Event> {
        let needle = query.to_lowercase();
        self.events
            .iter()
            .filter(|event| event.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Flags a stored event that overlaps another event on its day, for
    /// view highlighting.
    pub fn is_conflicted(&self, event: &Event) -> bool {
        has_conflict(event, &self.events, Some(event.id))
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.repo.save(&self.events)?;
        Ok(())
    }
}

/// Starter events shown on first launch before any user data exists.
fn starter_events() -> Vec<Event> {
    const STARTERS: [(&str, &str, &str, u32); 3] = [
        ("Team standup", "2024-01-15", "09:00", 15),
        ("Product review", "2024-01-15", "13:00", 60),
        ("Focus block", "2024-01-16", "10:00", 90),
    ];

    STARTERS
        .iter()
        .filter_map(|(title, date, time, duration)| {
            let date = clock::parse_date(date).ok()?;
            let time = clock::parse_time(time).ok()?;
            Some(Event::new(EventDraft {
                title: (*title).to_string(),
                date,
                time,
                duration: *duration,
            }))
        })
        .collect()
}
