//! Codec implementation
//!
//! Bounded body reading and JSON decode/encode for the HTTP handlers.

use axum::body::Body;
use axum::http::Uri;
use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DiscoError, Result};

/// Read a whole request body, refusing anything over `limit` bytes
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes> {
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => Err(DiscoError::PayloadTooLarge { limit }),
        Err(e) => Err(DiscoError::ReadBody(e.to_string())),
    }
}

/// Decode a JSON payload into an endpoint record
pub fn decode_request<T: DeserializeOwned>(payload: &[u8]) -> Result<T> {
    serde_json::from_slice(payload).map_err(|e| DiscoError::MalformedRequest(e.to_string()))
}

/// Encode a reply as JSON bytes
pub fn encode_response<T: Serialize>(response: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(response).map_err(|e| DiscoError::Encode(e.to_string()))
}

/// Read, log, and decode a request body
///
/// The raw payload is logged before decoding so malformed requests are
/// still visible in the logs.
pub async fn read_request<T: DeserializeOwned>(uri: &Uri, body: Body, limit: usize) -> Result<T> {
    let payload = match read_body(body, limit).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(%uri, limit, "request body not read: {}", e);
            return Err(e);
        }
    };

    tracing::debug!(%uri, payload = %String::from_utf8_lossy(&payload), "request");

    decode_request(&payload)
}
