use reqwest::Client;
use serde_json::Value;
use crate::models::errors::NotificationError;
use crate::models::notifications::{EmailMessage, ResendEmail};
use crate::utilities::config::{NotifyConfig, RESEND_API_KEY};
use crate::utilities::logging::{log_rejection, log_stage};

const CHANNEL: &str = "EMAIL";

pub async fn send_email(config: &NotifyConfig, email: &EmailMessage) -> Result<Value, NotificationError> {
    let api_key = config
        .resend_api_key
        .as_deref()
        .ok_or_else(|| NotificationError::Config(format!("{} is not set", RESEND_API_KEY)))?;

    let payload = ResendEmail {
        from: &config.email_from_address,
        to: &email.to,
        subject: &email.subject,
        html: &email.html,
    };

    let url = format!("{}/emails", config.resend_api_base_url.trim_end_matches('/'));
    let res = Client::new()
        .post(&url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status();
        let error_text = res.text().await?;
        log_rejection(CHANNEL, "email_failed", status.as_u16(), &error_text);
        return Err(NotificationError::Delivery(format!("Resend error: {}", error_text)));
    }

    let result: Value = res.json().await?;
    let email_id = result.get("id").and_then(Value::as_str).unwrap_or("<none>");
    log_stage(CHANNEL, "email_sent", &[("id", email_id)]);

    Ok(result)
}
