use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

pub const FIREBASE_MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Email,
    Push,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "EMAIL",
            Channel::Push => "PUSH",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMAIL" => Ok(Channel::Email),
            "PUSH" => Ok(Channel::Push),
            other => Err(format!("Unsupported channel: {}", other)),
        }
    }
}

/// Google service-account key file, as stored in `FCM_SERVICE_ACCOUNT`.
#[derive(Clone, Deserialize, Serialize)]
pub struct ServiceAccountCredentials {
    #[serde(rename = "type", default)]
    pub account_type: String,
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub auth_uri: String,
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("account_type", &self.account_type)
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("client_email", &self.client_email)
            .field("client_id", &self.client_id)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

#[derive(Serialize)]
pub struct AssertionHeader {
    pub alg: &'static str,
    pub typ: &'static str,
}

impl Default for AssertionHeader {
    fn default() -> Self {
        Self { alg: "RS256", typ: "JWT" }
    }
}

#[derive(Serialize)]
pub struct FirebaseClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Short-lived OAuth2 bearer token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// `data` of a PUSH dispatch request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PushNotification {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub data: Option<BTreeMap<String, String>>,
}

/// `data` of an EMAIL dispatch request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EmailMessage {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub html: String,
}

// FCM HTTP v1 wire format

#[derive(Serialize)]
pub struct FcmMessage<'a> {
    pub message: FcmMessageContent<'a>,
}

#[derive(Serialize)]
pub struct FcmMessageContent<'a> {
    pub token: &'a str,
    pub notification: FcmNotification<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a BTreeMap<String, String>>,
}

#[derive(Serialize)]
pub struct FcmNotification<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'a str>,
}

#[derive(Serialize)]
pub struct ResendEmail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub html: &'a str,
}
