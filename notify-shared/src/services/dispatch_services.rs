use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::models::errors::NotificationError;
use crate::models::notifications::{Channel, EmailMessage, PushNotification};
use crate::services::email_services::send_email;
use crate::services::notification_services::send_push;
use crate::utilities::config::NotifyConfig;

fn read_payload<T: DeserializeOwned>(channel: Channel, data: Value) -> Result<T, NotificationError> {
    serde_json::from_value(data)
        .map_err(|e| NotificationError::Validation(format!("Invalid {} data: {}", channel, e)))
}

/// Hands `data` to the provider behind `channel` and returns its response.
pub async fn dispatch(config: &NotifyConfig, channel: Channel, data: Value) -> Result<Value, NotificationError> {
    match channel {
        Channel::Email => {
            let email: EmailMessage = read_payload(channel, data)?;
            send_email(config, &email).await
        }
        Channel::Push => {
            let notification: PushNotification = read_payload(channel, data)?;
            send_push(config, &notification).await
        }
    }
}
