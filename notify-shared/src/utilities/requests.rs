use lambda_http::Request;
use serde_json::{json, Value};

/// Extracts the JSON body from a request; anything unparseable becomes `{}`.
pub fn extract_body(event: &Request) -> Value {
    serde_json::from_slice(event.body().as_ref()).unwrap_or_else(|_| json!({}))
}

/// Returns `field` when it is present and neither null nor an empty string.
pub fn required_field<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    }
}
