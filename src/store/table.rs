//! Store implementation
//!
//! HashMap of primary keys to ordered sub-entry lists, behind a single RwLock.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::SubEntry;

/// Sub-entries owned by one primary key, in first-insertion order
#[derive(Debug, Default)]
struct PrimaryEntry {
    subs: Vec<SubEntry>,
}

impl PrimaryEntry {
    /// Overwrite `sub` in place, or append it at the end
    ///
    /// Linear scan: a primary key is expected to hold only a handful of
    /// sub-entries (one per peer).
    fn upsert(&mut self, sub: String, value: String) {
        match self.subs.iter_mut().find(|entry| entry.sub == sub) {
            Some(entry) => entry.value = value,
            None => self.subs.push(SubEntry { sub, value }),
        }
    }
}

/// Process-wide discovery store
///
/// ## Concurrency:
/// - `entries`: one RwLock for the whole map, not per key
/// - `put` holds the write lock, so all puts are serialized with each other
///   and with any in-flight `get`
/// - `get` holds the read lock, so gets run concurrently with each other
/// - No I/O happens under the lock
#[derive(Debug, Default)]
pub struct Store {
    entries: RwLock<HashMap<String, PrimaryEntry>>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update `sub` under `key` (write lock)
    ///
    /// Unknown keys are created on the fly. An existing sub-key keeps its
    /// position and only has its value replaced. Never fails.
    pub fn put(&self, key: impl Into<String>, sub: impl Into<String>, value: impl Into<String>) {
        let (key, sub, value) = (key.into(), sub.into(), value.into());

        let mut entries = self.entries.write();
        entries.entry(key).or_default().upsert(sub, value);
    }

    /// Snapshot of the sub-entries for `key` (read lock)
    ///
    /// Unknown keys yield an empty list. The returned Vec is an owned copy;
    /// later puts are not visible through it.
    pub fn get(&self, key: &str) -> Vec<SubEntry> {
        let entries = self.entries.read();
        entries
            .get(key)
            .map(|entry| entry.subs.clone())
            .unwrap_or_default()
    }

    /// Number of primary keys held
    pub fn key_count(&self) -> usize {
        self.entries.read().len()
    }

    /// Number of sub-entries under `key` (0 when unknown)
    pub fn sub_count(&self, key: &str) -> usize {
        self.entries
            .read()
            .get(key)
            .map_or(0, |entry| entry.subs.len())
    }

    /// True if no primary key has ever been written
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
