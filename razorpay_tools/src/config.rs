use log::*;
use socify_common::Secret;

pub const DEFAULT_RAZORPAY_API_URL: &str = "https://api.razorpay.com/v1";

#[derive(Debug, Clone, Default)]
pub struct RazorpayConfig {
    /// The base URL for the REST API, without a trailing slash. e.g. "https://api.razorpay.com/v1"
    pub api_url: String,
    pub key_id: String,
    /// The key secret. This doubles as the HMAC key for payment signatures.
    pub key_secret: Secret<String>,
}

impl RazorpayConfig {
    pub fn new(key_id: &str, key_secret: Secret<String>) -> Self {
        Self { api_url: DEFAULT_RAZORPAY_API_URL.to_string(), key_id: key_id.to_string(), key_secret }
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn new_from_env_or_default() -> Self {
        let api_url = std::env::var("SOCIFY_RAZORPAY_API_URL").unwrap_or_else(|_| {
            debug!("SOCIFY_RAZORPAY_API_URL not set, using {DEFAULT_RAZORPAY_API_URL}");
            DEFAULT_RAZORPAY_API_URL.to_string()
        });
        let key_id = std::env::var("SOCIFY_RAZORPAY_KEY_ID").unwrap_or_else(|_| {
            warn!("SOCIFY_RAZORPAY_KEY_ID not set, using (probably useless) default");
            "rzp_test_00000000000000".to_string()
        });
        let key_secret = Secret::new(std::env::var("SOCIFY_RAZORPAY_KEY_SECRET").unwrap_or_else(|_| {
            warn!("SOCIFY_RAZORPAY_KEY_SECRET not set, using (probably useless) default");
            "00000000000000".to_string()
        }));
        Self { api_url: api_url.trim_end_matches('/').to_string(), key_id, key_secret }
    }
}
