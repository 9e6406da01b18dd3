//! Request definitions
//!
//! One record per endpoint. Every field is required; a missing field is a
//! decode error. Empty strings are accepted as-is.

use serde::{Deserialize, Serialize};

/// Body of `POST /put`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutRequest {
    /// Primary key
    pub key: String,

    /// Sub-key within the primary key
    pub sub: String,

    /// Value to store
    pub value: String,
}

/// Body of `POST /get`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRequest {
    /// Primary key to list
    pub key: String,
}
