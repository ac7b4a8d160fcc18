use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Failures while turning service-account credentials into an access token.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Failed to sign assertion: {0}")]
    Signing(String),

    #[error("Failed to encode assertion: {0}")]
    Serialization(#[from] SerdeJsonError),

    #[error("Token request failed: {0}")]
    TokenRequest(#[from] ReqwestError),

    #[error("Failed to get access token: {0}")]
    TokenExchangeFailed(String),

    #[error("Invalid token response: {0}")]
    InvalidTokenResponse(String),
}

#[derive(Debug, Error)]
pub enum NotificationError {
    // Deployment problems, the operator has to fix these
    #[error("{0}")]
    Config(String),

    // Caller sent an incomplete payload
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    // Provider answered with a non-success status
    #[error("{0}")]
    Delivery(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),
}
