use log::{error, info, warn};
use serde_json::{json, Map, Value};

/// Builds the single-line JSON record written to CloudWatch.
fn record(event: &str, key: &str, text: &str, fields: &[(&str, &str)]) -> Value {
    let mut entry = Map::new();
    entry.insert("event".to_string(), json!(event));
    entry.insert(key.to_string(), json!(text));
    for (name, value) in fields {
        entry.insert((*name).to_string(), json!(value));
    }
    Value::Object(entry)
}

pub fn log_info(event: &str, message: &str) {
    info!("{}", record(event, "message", message, &[]));
}

pub fn log_error(event: &str, error_message: &str) {
    error!("{}", record(event, "error", error_message, &[]));
}

/// Logs one stage of a delivery (`assertion_signed`, `token_exchanged`, ...)
/// tagged with the channel it belongs to.
pub fn log_stage(channel: &str, stage: &str, fields: &[(&str, &str)]) {
    let mut extra = vec![("channel", channel)];
    extra.extend_from_slice(fields);
    info!("{}", record(stage, "message", "ok", &extra));
}

/// Logs a provider that answered with a non-success status.
pub fn log_rejection(channel: &str, stage: &str, status: u16, body: &str) {
    let status = status.to_string();
    warn!("{}", record(stage, "error", body, &[("channel", channel), ("status", status.as_str())]));
}
