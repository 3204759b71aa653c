//! Read-side aggregators for the department dashboard.
//!
//! Everything here is a pure fold over an already-fetched collection of
//! task records: no persistence, no incremental update, recomputed in
//! full on every call.

mod stats;

pub use stats::{StatusBreakdown, TaskStats, is_overdue};
