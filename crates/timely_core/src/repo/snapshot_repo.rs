//! Event snapshot persistence contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full event collection after every store mutation.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `save` replaces the whole stored snapshot in one transaction.
//! - `load` distinguishes "never saved" from "saved an empty collection".

use crate::clock;
use crate::db::DbError;
use crate::model::event::{Event, RecurrenceStep};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const EVENT_SELECT_SQL: &str = "SELECT
    id,
    title,
    date,
    time,
    duration,
    recurring_id,
    recurring_type
FROM events";

const SNAPSHOT_MARKER_KEY: &str = "snapshot_present";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for snapshot load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted event data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage collaborator for the event collection.
///
/// The store calls `save` with the complete collection after each mutation
/// and `load` once at startup.
pub trait SnapshotRepository {
    /// Returns the stored collection, or `None` when no snapshot was ever
    /// saved.
    fn load(&self) -> RepoResult<Option<Vec<Event>>>;

    /// Replaces the stored snapshot with `events`.
    fn save(&mut self, events: &[Event]) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository {
    conn: Connection,
}

impl SqliteSnapshotRepository {
    /// Wraps a connection opened through [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn load(&self) -> RepoResult<Option<Vec<Event>>> {
        let marker: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshot_state WHERE key = ?1;",
                [SNAPSHOT_MARKER_KEY],
                |row| row.get(0),
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        if marker.is_none() {
            return Ok(None);
        }

        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} ORDER BY date ASC, time ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }

        Ok(Some(events))
    }

    fn save(&mut self, events: &[Event]) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM events;", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO events (
                    id,
                    title,
                    date,
                    time,
                    duration,
                    recurring_id,
                    recurring_type
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            )?;

            for event in events {
                stmt.execute(params![
                    event.id.to_string(),
                    event.title.as_str(),
                    clock::date_string(event.date),
                    clock::time_string(event.time),
                    i64::from(event.duration),
                    event.recurring_id.map(|id| id.to_string()),
                    event.recurring_type.map(step_to_db),
                ])?;
            }
        }

        tx.execute(
            "INSERT OR REPLACE INTO snapshot_state (key, value) VALUES (?1, '1');",
            [SNAPSHOT_MARKER_KEY],
        )?;
        tx.commit()?;

        Ok(())
    }
}

/// Volatile snapshot repository for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySnapshotRepository {
    snapshot: Option<Vec<Event>>,
}

impl MemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already-saved snapshot.
    pub fn with_snapshot(events: Vec<Event>) -> Self {
        Self {
            snapshot: Some(events),
        }
    }
}

impl SnapshotRepository for MemorySnapshotRepository {
    fn load(&self) -> RepoResult<Option<Vec<Event>>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, events: &[Event]) -> RepoResult<()> {
        self.snapshot = Some(events.to_vec());
        Ok(())
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<Event> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{id_text}` in events.id")))?;

    let date_text: String = row.get("date")?;
    let date = clock::parse_date(&date_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid date `{date_text}` in events.date")))?;

    let time_text: String = row.get("time")?;
    let time = clock::parse_time(&time_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid time `{time_text}` in events.time")))?;

    let raw_duration: i64 = row.get("duration")?;
    let duration = u32::try_from(raw_duration).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid duration `{raw_duration}` in events.duration"
        ))
    })?;

    let recurring_id = match row.get::<_, Option<String>>("recurring_id")? {
        Some(text) => Some(Uuid::parse_str(&text).map_err(|_| {
            RepoError::InvalidData(format!("invalid uuid `{text}` in events.recurring_id"))
        })?),
        None => None,
    };

    let recurring_type = match row.get::<_, Option<String>>("recurring_type")? {
        Some(text) => Some(parse_step(&text).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid recurrence step `{text}` in events.recurring_type"
            ))
        })?),
        None => None,
    };

    Ok(Event {
        id,
        title: row.get("title")?,
        date,
        time,
        duration,
        recurring_id,
        recurring_type,
    })
}

fn step_to_db(step: RecurrenceStep) -> &'static str {
    match step {
        RecurrenceStep::Daily => "daily",
        RecurrenceStep::Weekly => "weekly",
        RecurrenceStep::Monthly => "monthly",
    }
}

fn parse_step(value: &str) -> Option<RecurrenceStep> {
    match value {
        "daily" => Some(RecurrenceStep::Daily),
        "weekly" => Some(RecurrenceStep::Weekly),
        "monthly" => Some(RecurrenceStep::Monthly),
        _ => None,
    }
}
