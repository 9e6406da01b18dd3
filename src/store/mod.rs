//! Store Module
//!
//! The in-memory, two-level discovery registry.
//!
//! ## Shape
//! ```text
//!   primary key ──► [ (sub, value), (sub, value), ... ]   insertion order
//! ```
//!
//! ## Responsibilities
//! - Append or update-in-place a sub-entry under a primary key
//! - Return snapshot copies of a primary key's sub-entries
//! - Never remove or expire anything
//!
//! ## Concurrency
//! One `RwLock` over the whole map: `get` takes it shared, `put` exclusive.
//! Per-key locking is a possible future step if contention ever matters.

mod table;

pub use table::Store;

/// A single (sub-key, value) slot under a primary key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubEntry {
    /// Sub-key, unique within its primary key
    pub sub: String,

    /// Current value for the sub-key
    pub value: String,
}

impl SubEntry {
    pub fn new(sub: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            value: value.into(),
        }
    }
}
