//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Directory for uploaded documents.
    pub storage_dir: String,
    /// HMAC secret for bearer token verification.
    pub secret: String,
    pub outreach: OutreachConfig,
    pub ai: AiConfig,
}

#[derive(Clone, Debug, Deserialize)]
/// Endpoints and credentials for the delivery transports, in waterfall
/// order: SES, Gmail, SMTP relay.
pub struct OutreachConfig {
    pub from_email: String,
    pub from_name: String,
    pub ses_endpoint: Option<String>,
    pub ses_token: Option<String>,
    pub gmail_token: Option<String>,
    pub smtp_relay_url: Option<String>,
    pub smtp_relay_token: Option<String>,
    pub sms_gateway_url: Option<String>,
    pub sms_gateway_token: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}
