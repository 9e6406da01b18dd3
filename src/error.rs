//! Error types for DiscoKV
//!
//! The store itself never fails; everything here belongs to the request
//! boundary (decode/encode) or to process bootstrap (bind/config).

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias using DiscoError
pub type Result<T> = std::result::Result<T, DiscoError>;

/// Unified error type for DiscoKV operations
#[derive(Debug, Error)]
pub enum DiscoError {
    // -------------------------------------------------------------------------
    // Request Errors (client side, HTTP 400)
    // -------------------------------------------------------------------------
    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Error reading request: {0}")]
    ReadBody(String),

    #[error("Error parsing request: {0}")]
    MalformedRequest(String),

    // -------------------------------------------------------------------------
    // Response Errors (server side, HTTP 500)
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Encode(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiscoError {
    /// HTTP status this error maps to when surfaced to a client
    pub fn status_code(&self) -> StatusCode {
        match self {
            DiscoError::PayloadTooLarge { .. }
            | DiscoError::ReadBody(_)
            | DiscoError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for errors caused by the caller's request
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for DiscoError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
