use http::StatusCode;
use lambda_http::{Response, Body};
use serde::Serialize;
use serde_json::json;

pub fn success_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::OK)
}

/// `{"error": message}` with the given status.
pub fn error_with_code(message: &str, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(json!({ "error": message }), code)
}

pub fn response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    let body = serde_json::to_string(&data)
        .map_err(|e| lambda_http::Error::from(format!("Failed to serialize response: {}", e)))?;

    if code.is_success() {
        log::info!("Responding {} ({} bytes)", code, body.len());
    } else {
        log::warn!("Responding {}: {}", code, body);
    }

    Response::builder()
        .status(code)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}
