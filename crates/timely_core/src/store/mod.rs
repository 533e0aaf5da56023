//! Event collection ownership and mutation orchestration.
//!
//! # Responsibility
//! - Own the in-memory event collection and its mutation entry points.
//! - Keep conflict reporting and snapshot persistence behind one API.
//!
//! # Invariants
//! - The store is the sole owner of the collection; readers receive
//!   projections, never mutable access.

pub mod event_store;
