//! Domain model for calendar events and user settings.
//!
//! # Responsibility
//! - Define the canonical data structures used by core scheduling logic.
//! - Pin the wire shape persisted snapshots and backups round-trip through.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - Stored dates and times are canonical wall values; display formats live
//!   at the formatting boundary only.

pub mod event;
pub mod settings;
