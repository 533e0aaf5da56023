//! Core domain logic for Timely, a personal calendar and focus app.
//! This crate is the single source of truth for scheduling invariants.

pub mod clock;
pub mod db;
pub mod export;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod store;

pub use clock::ClockError;
pub use export::{export_json, import_json, BackupDocument, ExportError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventDraft, EventId, EventPatch, RecurrenceStep};
pub use model::settings::{DateFormat, Settings, Theme, TimeFormat, WeekStart};
pub use repo::snapshot_repo::{
    MemorySnapshotRepository, RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository,
};
pub use schedule::conflict::{has_conflict, overlaps};
pub use schedule::matrix::{day_headers, month_matrix, MonthMatrix};
pub use schedule::recurrence::{expand, Occurrence, RecurrenceRule};
pub use store::event_store::{Created, EventStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
