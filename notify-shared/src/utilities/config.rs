use dotenv::dotenv;
use std::env;

pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const FCM_SERVICE_ACCOUNT: &str = "FCM_SERVICE_ACCOUNT";

const DEFAULT_FCM_API_BASE_URL: &str = "https://fcm.googleapis.com";
const DEFAULT_RESEND_API_BASE_URL: &str = "https://api.resend.com";
const DEFAULT_EMAIL_FROM_ADDRESS: &str = "onboarding@resend.dev";

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    } else {
        log::info!("No .env file loaded, using process environment");
    }
}

/// Fetch an optional environment variable; empty values count as unset.
pub fn get_optional_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn get_env_var_or(key: &str, default: &str) -> String {
    get_optional_env_var(key).unwrap_or_else(|| default.to_string())
}

/// Settings for one dispatch. Secrets stay optional here so that the channel
/// that needs them can report their absence.
#[derive(Clone)]
pub struct NotifyConfig {
    pub resend_api_key: Option<String>,
    pub fcm_service_account: Option<String>,
    pub fcm_api_base_url: String,
    pub resend_api_base_url: String,
    pub email_from_address: String,
}

impl NotifyConfig {
    pub fn from_env() -> Self {
        Self {
            resend_api_key: get_optional_env_var(RESEND_API_KEY),
            fcm_service_account: get_optional_env_var(FCM_SERVICE_ACCOUNT),
            fcm_api_base_url: get_env_var_or("FCM_API_BASE_URL", DEFAULT_FCM_API_BASE_URL),
            resend_api_base_url: get_env_var_or("RESEND_API_BASE_URL", DEFAULT_RESEND_API_BASE_URL),
            email_from_address: get_env_var_or("EMAIL_FROM_ADDRESS", DEFAULT_EMAIL_FROM_ADDRESS),
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            fcm_service_account: None,
            fcm_api_base_url: DEFAULT_FCM_API_BASE_URL.to_string(),
            resend_api_base_url: DEFAULT_RESEND_API_BASE_URL.to_string(),
            email_from_address: DEFAULT_EMAIL_FROM_ADDRESS.to_string(),
        }
    }
}

impl std::fmt::Debug for NotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyConfig")
            .field("resend_api_key", &self.resend_api_key.as_ref().map(|_| "<set>"))
            .field("fcm_service_account", &self.fcm_service_account.as_ref().map(|_| "<set>"))
            .field("fcm_api_base_url", &self.fcm_api_base_url)
            .field("resend_api_base_url", &self.resend_api_base_url)
            .field("email_from_address", &self.email_from_address)
            .finish()
    }
}
