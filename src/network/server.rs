//! HTTP Server
//!
//! Binds the listener, serves the router, and logs a heartbeat until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{CACHE_CONTROL_NO_CACHE, PRAGMA_NO_CACHE};
use crate::store::Store;

use super::handlers::{handle_get, handle_put, AppState};

/// Build the `/put` + `/get` router over a store
///
/// Caching is disabled on every response, including the router's own
/// 404/405 replies.
pub fn router(store: Arc<Store>, max_request_size: usize) -> Router {
    Router::new()
        .route("/put", post(handle_put))
        .route("/get", post(handle_get))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_CACHE),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static(PRAGMA_NO_CACHE),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store, max_request_size))
}

/// HTTP server for DiscoKV
pub struct Server {
    config: Config,
    store: Arc<Store>,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<Store>) -> Self {
        Self { config, store }
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.listen_addr).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);

        let heartbeat = tokio::spawn(heartbeat(
            Arc::clone(&self.store),
            self.config.heartbeat_interval,
        ));

        let app = router(Arc::clone(&self.store), self.config.max_request_size);
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        heartbeat.abort();
        served?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn heartbeat(store: Arc<Store>, every: std::time::Duration) {
    if every.is_zero() {
        return;
    }

    let mut ticker = tokio::time::interval(every);
    // first tick fires immediately
    ticker.tick().await;
    loop {
        ticker.tick().await;
        tracing::info!(keys = store.key_count(), "Still running");
    }
}

/// Resolves on Ctrl+C
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
