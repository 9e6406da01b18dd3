//! Request Handlers
//!
//! Translate `/put` and `/get` requests into Store calls.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::Result;
use crate::protocol::{
    encode_response, read_request, GetRequest, GetResponse, PutRequest, PutResponse,
    CACHE_CONTROL_NO_CACHE, CONTENT_TYPE_JSON, PRAGMA_NO_CACHE,
};
use crate::store::Store;

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// The one store for this process
    pub store: Arc<Store>,

    /// Request body cap in bytes
    pub max_request_size: usize,
}

impl AppState {
    pub fn new(store: Arc<Store>, max_request_size: usize) -> Self {
        Self {
            store,
            max_request_size,
        }
    }
}

/// `POST /put`: store one sub-entry, reply `{}`
pub async fn handle_put(State(state): State<AppState>, uri: Uri, body: Body) -> Response {
    let result = match read_request::<PutRequest>(&uri, body, state.max_request_size).await {
        Ok(request) => {
            state.store.put(request.key, request.sub, request.value);
            json_response(&PutResponse::default())
        }
        Err(e) => Err(e),
    };

    finish(&uri, result)
}

/// `POST /get`: list the sub-entries of a key in insertion order
pub async fn handle_get(State(state): State<AppState>, uri: Uri, body: Body) -> Response {
    let result = match read_request::<GetRequest>(&uri, body, state.max_request_size).await {
        Ok(request) => {
            let entries = state.store.get(&request.key);
            json_response(&GetResponse::from_entries(entries))
        }
        Err(e) => Err(e),
    };

    finish(&uri, result)
}

fn json_response<T: Serialize>(reply: &T) -> Result<Response> {
    let body = encode_response(reply)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)],
        body,
    )
        .into_response())
}

/// Turn a handler result into a response and disable caching on it
fn finish(uri: &Uri, result: Result<Response>) -> Response {
    let mut response = match result {
        Ok(response) => response,
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!(%uri, "rejected request: {}", e);
            } else {
                tracing::error!(%uri, "failed to encode response: {}", e);
            }
            e.into_response()
        }
    };

    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_NO_CACHE),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static(PRAGMA_NO_CACHE));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiscoError;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_finish_encode_failure_is_uncached_500() {
        let uri: Uri = "/get".parse().unwrap();
        let response = finish(&uri, Err(DiscoError::Encode("boom".into())));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_NO_CACHE
        );
        assert_eq!(response.headers().get(header::PRAGMA).unwrap(), PRAGMA_NO_CACHE);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"boom");
    }

    #[tokio::test]
    async fn test_finish_success_is_uncached() {
        let uri: Uri = "/put".parse().unwrap();
        let response = finish(&uri, json_response(&PutResponse::default()));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            CONTENT_TYPE_JSON
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_NO_CACHE
        );
    }
}
