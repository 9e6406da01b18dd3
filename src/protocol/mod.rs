//! Protocol Module
//!
//! Defines the JSON-over-HTTP wire contract.
//!
//! ## Endpoints
//! ```text
//! POST /put   {"key": str, "sub": str, "value": str}   -> 200 {}
//! POST /get   {"key": str}                             -> 200 {"value_list": [{"sub": str, "value": str}, ...]}
//! ```
//!
//! ## Failures
//! - Body over the size cap, or not the expected JSON record: 400, text/plain
//! - Response could not be encoded: 500, text/plain with the raw error
//!
//! Every response carries `Cache-Control: max-age=0, no-cache, no-store`
//! and `Pragma: no-cache`.

mod request;
mod response;
mod codec;

pub use request::{GetRequest, PutRequest};
pub use response::{GetResponse, PutResponse, ValueItem};
pub use codec::{decode_request, encode_response, read_body, read_request};

/// Content type of every successful response
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";

/// `Cache-Control` value set on every response
pub const CACHE_CONTROL_NO_CACHE: &str = "max-age=0, no-cache, no-store";

/// `Pragma` value set on every response
pub const PRAGMA_NO_CACHE: &str = "no-cache";
