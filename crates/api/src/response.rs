//! Shared response envelope for portal endpoints.
//!
//! Portal responses use a `{ "data": ... }` envelope. The job endpoints are
//! the exception: their bodies are the wire contract shared with the
//! external worker's clients and are returned unwrapped.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
