pub mod comments;
pub mod threads;

use axum::body::Bytes;
use serde_json::Value;

/// Bodies that are not valid JSON behave like an absent payload, so they
/// surface as a missing-property failure of the target entity.
fn json_payload(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}
