use http::{Response, StatusCode};
use lambda_http::Body;
use serde::Serialize;
use serde_json::Value;
use notify_shared::models::notifications::Channel;
use notify_shared::services::dispatch_services::dispatch;
use notify_shared::utilities::config::NotifyConfig;
use notify_shared::utilities::logging::{log_error, log_info};
use notify_shared::utilities::requests::required_field;
use notify_shared::utilities::responses::{error_with_code, success_response};

#[derive(Serialize)]
struct DispatchResponse {
    success: bool,
    message: String,
}

/// `{channel, data}` in, one provider call out.
pub async fn handler(config: &NotifyConfig, body: Value) -> Result<Response<Body>, lambda_http::Error> {
    let (channel, data) = match (required_field(&body, "channel"), required_field(&body, "data")) {
        (Some(channel), Some(data)) => (channel, data.clone()),
        _ => return error_with_code("channel and data are required", StatusCode::BAD_REQUEST),
    };

    let channel: Channel = match channel.as_str().map(str::parse::<Channel>) {
        Some(Ok(channel)) => channel,
        _ => {
            log_info("dispatch_rejected", &format!("Unsupported channel {}", channel));
            return error_with_code("Unsupported channel", StatusCode::BAD_REQUEST);
        }
    };

    match dispatch(config, channel, data).await {
        Ok(_) => {
            log_info("dispatch_succeeded", channel.as_str());
            success_response(DispatchResponse {
                success: true,
                message: format!("Notification sent via {}", channel),
            })
        }
        Err(err) => {
            log_error("dispatch_failed", &format!("{}: {}", channel, err));
            error_with_code(&err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
