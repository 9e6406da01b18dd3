//! Network Module
//!
//! HTTP server and request handlers.
//!
//! ## Architecture
//! - axum router on a multi-threaded tokio runtime
//! - One handler per endpoint, each sharing the same `Arc<Store>`
//! - Store calls are synchronous and never held across an await

mod handlers;
mod server;

pub use handlers::{handle_get, handle_put, AppState};
pub use server::{router, shutdown_signal, Server};
