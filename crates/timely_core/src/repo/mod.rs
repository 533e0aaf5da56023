//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable snapshot contract the event store writes through.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - `save` persists the complete collection, never an incremental patch.
//! - Read paths return semantic `InvalidData` errors for corrupt persisted
//!   state instead of masking it.

pub mod snapshot_repo;
