//! Response definitions
//!
//! Represents successful JSON replies to clients.

use serde::{Deserialize, Serialize};

use crate::store::SubEntry;

/// Reply to `POST /put`, always `{}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutResponse {}

/// One element of `value_list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueItem {
    pub sub: String,
    pub value: String,
}

impl From<SubEntry> for ValueItem {
    fn from(entry: SubEntry) -> Self {
        Self {
            sub: entry.sub,
            value: entry.value,
        }
    }
}

/// Reply to `POST /get`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    /// Sub-entries in insertion order; empty for unknown keys
    pub value_list: Vec<ValueItem>,
}

impl GetResponse {
    /// Build a reply from a store snapshot, preserving order
    pub fn from_entries(entries: Vec<SubEntry>) -> Self {
        Self {
            value_list: entries.into_iter().map(ValueItem::from).collect(),
        }
    }
}
