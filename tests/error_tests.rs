//! Error Tests
//!
//! Tests for how each error class is surfaced over HTTP.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use discokv::DiscoError;

async fn body_text(error: DiscoError) -> (StatusCode, String, String) {
    let response = error.into_response();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

// =============================================================================
// Server Errors
// =============================================================================

#[tokio::test]
async fn test_encode_error_is_500_with_raw_text() {
    let error = DiscoError::Encode("boom".into());
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!error.is_client_error());

    let (status, content_type, body) = body_text(error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type, "text/plain; charset=utf-8");
    assert_eq!(body, "boom");
}

// =============================================================================
// Client Errors
// =============================================================================

#[tokio::test]
async fn test_payload_too_large_is_400() {
    let (status, content_type, body) =
        body_text(DiscoError::PayloadTooLarge { limit: 8192 }).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, "text/plain; charset=utf-8");
    assert_eq!(body, "Request body exceeds 8192 bytes");
}

#[tokio::test]
async fn test_malformed_request_is_400() {
    let (status, _, body) = body_text(DiscoError::MalformedRequest("EOF".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Error parsing request: EOF");
}

#[tokio::test]
async fn test_read_body_error_is_400() {
    let (status, _, body) = body_text(DiscoError::ReadBody("reset".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Error reading request: reset");
}
