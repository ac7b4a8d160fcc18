use chrono::Utc;
use reqwest::Client;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha2::Sha256;
use crate::models::errors::AuthError;
use crate::models::notifications::{
    AccessToken, AssertionHeader, FirebaseClaims, ServiceAccountCredentials, TokenResponse,
    ASSERTION_LIFETIME_SECS, FIREBASE_MESSAGING_SCOPE, JWT_BEARER_GRANT_TYPE,
};
use crate::utilities::encoding::{base64url_encode, decode_pkcs8_pem};
use crate::utilities::logging::{log_rejection, log_stage};

const CHANNEL: &str = "PUSH";

pub fn build_claims(credentials: &ServiceAccountCredentials, issued_at: i64) -> FirebaseClaims<'_> {
    FirebaseClaims {
        iss: &credentials.client_email,
        scope: FIREBASE_MESSAGING_SCOPE,
        aud: &credentials.token_uri,
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME_SECS,
    }
}

/// Builds the RS256-signed JWT used as the `assertion` of a jwt-bearer grant.
///
/// The key is parsed before anything else touches the network, so a broken
/// `private_key` fails here.
pub fn create_assertion(credentials: &ServiceAccountCredentials, issued_at: i64) -> Result<String, AuthError> {
    let header = serde_json::to_vec(&AssertionHeader::default())?;
    let claims = serde_json::to_vec(&build_claims(credentials, issued_at))?;
    let signing_input = format!("{}.{}", base64url_encode(header), base64url_encode(claims));

    let key_der = decode_pkcs8_pem(&credentials.private_key)?;
    let signature = sign_rs256(&key_der, signing_input.as_bytes())?;

    Ok(format!("{}.{}", signing_input, base64url_encode(signature)))
}

/// RSASSA-PKCS1-v1_5 with SHA-256 over `message`.
fn sign_rs256(pkcs8_der: &[u8], message: &[u8]) -> Result<Vec<u8>, AuthError> {
    let private_key = RsaPrivateKey::from_pkcs8_der(pkcs8_der)
        .map_err(|e| AuthError::InvalidPrivateKey(format!("not an RSA PKCS#8 key: {}", e)))?;

    let signing_key = SigningKey::<Sha256>::new(private_key);
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| AuthError::Signing(e.to_string()))?;

    Ok(signature.to_vec())
}

pub async fn exchange_assertion(
    client: &Client,
    token_uri: &str,
    assertion: &str,
) -> Result<AccessToken, AuthError> {
    let params = [
        ("grant_type", JWT_BEARER_GRANT_TYPE),
        ("assertion", assertion),
    ];

    let res = client
        .post(token_uri)
        .form(&params)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        log_rejection(CHANNEL, "token_exchange_failed", status.as_u16(), &body);
        return Err(AuthError::TokenExchangeFailed(body));
    }

    let token_response: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| AuthError::InvalidTokenResponse(e.to_string()))?;

    if token_response.access_token.is_empty() {
        return Err(AuthError::InvalidTokenResponse("empty access_token".to_string()));
    }

    let expires_in = token_response
        .expires_in
        .map(|secs| secs.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let token_type = token_response.token_type.as_deref().unwrap_or("Bearer");
    log_stage(CHANNEL, "token_exchanged", &[("token_type", token_type), ("expires_in", expires_in.as_str())]);

    Ok(AccessToken::new(token_response.access_token))
}

/// Mints a fresh access token for the messaging scope. Nothing is cached,
/// every call signs a new assertion and performs one token exchange.
pub async fn issue_access_token(
    client: &Client,
    credentials: &ServiceAccountCredentials,
) -> Result<AccessToken, AuthError> {
    let assertion = create_assertion(credentials, Utc::now().timestamp())?;
    log_stage(CHANNEL, "assertion_signed", &[
        ("issuer", credentials.client_email.as_str()),
        ("private_key_id", credentials.private_key_id.as_str()),
    ]);

    exchange_assertion(client, &credentials.token_uri, &assertion).await
}
