use reqwest::{Client, Url};
use serde_json::error::Category;
use serde_json::Value;
use crate::models::errors::NotificationError;
use crate::models::notifications::{
    FcmMessage, FcmMessageContent, FcmNotification, PushNotification, ServiceAccountCredentials,
};
use crate::services::oauth_services::issue_access_token;
use crate::utilities::config::{NotifyConfig, FCM_SERVICE_ACCOUNT};
use crate::utilities::logging::{log_error, log_rejection, log_stage};

const CHANNEL: &str = "PUSH";
const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Parses the `FCM_SERVICE_ACCOUNT` blob and checks that its token endpoint
/// is an HTTPS URL (plain HTTP is tolerated for loopback emulators).
pub fn parse_credentials(json: &str) -> Result<ServiceAccountCredentials, NotificationError> {
    let credentials: ServiceAccountCredentials = serde_json::from_str(json).map_err(|e| {
        log_error("fcm_credentials_invalid", &e.to_string());
        match e.classify() {
            Category::Data => NotificationError::Config(format!(
                "{} is missing required fields: {}", FCM_SERVICE_ACCOUNT, e
            )),
            _ => NotificationError::Config(format!("{} is not valid JSON", FCM_SERVICE_ACCOUNT)),
        }
    })?;

    let token_uri = Url::parse(&credentials.token_uri).map_err(|e| {
        NotificationError::Config(format!("{} token_uri is not a valid URL: {}", FCM_SERVICE_ACCOUNT, e))
    })?;

    let loopback = token_uri
        .host_str()
        .map(|host| LOOPBACK_HOSTS.iter().any(|loopback| *loopback == host))
        .unwrap_or(false);

    match token_uri.scheme() {
        "https" => Ok(credentials),
        "http" if loopback => Ok(credentials),
        scheme => Err(NotificationError::Config(format!(
            "{} token_uri must use https, got {}", FCM_SERVICE_ACCOUNT, scheme
        ))),
    }
}

/// The FCM HTTP v1 request body. `data` only appears when the caller sent one.
pub fn build_message<'a>(device_token: &'a str, notification: &'a PushNotification) -> FcmMessage<'a> {
    FcmMessage {
        message: FcmMessageContent {
            token: device_token,
            notification: FcmNotification {
                title: notification.title.as_deref(),
                body: notification.body.as_deref(),
            },
            data: notification.data.as_ref(),
        },
    }
}

pub fn send_url(base_url: &str, project_id: &str) -> String {
    format!("{}/v1/projects/{}/messages:send", base_url.trim_end_matches('/'), project_id)
}

/// Delivers one notification: credentials, token exchange, then the send call.
/// Configuration and payload problems are reported before any request is made.
pub async fn send_push(
    config: &NotifyConfig,
    notification: &PushNotification,
) -> Result<Value, NotificationError> {
    let credentials_json = config
        .fcm_service_account
        .as_deref()
        .ok_or_else(|| NotificationError::Config(format!("{} is not set", FCM_SERVICE_ACCOUNT)))?;

    let device_token = notification
        .token
        .as_deref()
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| NotificationError::Validation("FCM device token is required".to_string()))?;

    let credentials = parse_credentials(credentials_json)?;

    let client = Client::new();
    let access_token = issue_access_token(&client, &credentials).await?;

    let message = build_message(device_token, notification);
    let url = send_url(&config.fcm_api_base_url, &credentials.project_id);

    let res = client
        .post(&url)
        .bearer_auth(access_token.secret())
        .json(&message)
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await?;
        log_rejection(CHANNEL, "push_failed", status.as_u16(), &text);
        return Err(NotificationError::Delivery(format!("FCM error: {}", text)));
    }

    let result: Value = res.json().await?;
    let message_name = result.get("name").and_then(Value::as_str).unwrap_or("<none>");
    log_stage(CHANNEL, "push_sent", &[("project_id", credentials.project_id.as_str()), ("name", message_name)]);

    Ok(result)
}
