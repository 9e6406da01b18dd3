//! # DiscoKV
//!
//! A small in-memory discovery registry:
//! - Two-level map: primary key -> ordered (sub-key, value) list
//! - Insert-or-update by sub-key, insertion order preserved across updates
//! - Snapshot reads, single reader/writer lock over the whole map
//! - JSON over HTTP (`POST /put`, `POST /get`)
//!
//! Nothing is persisted, expired, or replicated.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │               (axum, one task per request)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Request Handlers                             │
//! │      bounded body -> JSON record -> Store -> JSON reply      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │     Store     │
//!               │   (RwLock)    │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DiscoError, Result};
pub use config::{Config, ListenSpec};
pub use store::{Store, SubEntry};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of DiscoKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
