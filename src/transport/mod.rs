//! Delivery transports for the outreach pipeline.
//!
//! Email goes through an explicit ordered waterfall: SES first, then the
//! Gmail API, then the SMTP relay bridge. Each transport is an HTTP client
//! behind the [`EmailTransport`] trait; the pipeline tries them in order and
//! records a typed attempt for each.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::outreach::{OutboundEmail, OutboundSms};
use crate::models::config::OutreachConfig;

pub mod gmail;
pub mod ses;
pub mod sms;
pub mod smtp;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Transport request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Transport rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Transport returned an unusable response: {0}")]
    BadResponse(String),
}

/// One hop in the email delivery waterfall. `send` returns the provider's
/// message ID on success.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    fn name(&self) -> &'static str;
    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError>;
}

#[async_trait]
pub trait SmsGateway: Send + Sync {
    fn name(&self) -> &'static str;
    async fn send(&self, sms: &OutboundSms) -> Result<String, TransportError>;
}

/// Builds the ordered waterfall from whatever transports are configured.
/// Order is fixed: SES, Gmail, SMTP relay.
pub fn email_waterfall(config: &OutreachConfig) -> Vec<Box<dyn EmailTransport>> {
    let mut transports: Vec<Box<dyn EmailTransport>> = Vec::new();

    if let (Some(endpoint), Some(token)) = (&config.ses_endpoint, &config.ses_token) {
        transports.push(Box::new(ses::SesTransport::new(
            endpoint.clone(),
            token.clone(),
            config.from_email.clone(),
            config.from_name.clone(),
        )));
    }
    if let Some(token) = &config.gmail_token {
        transports.push(Box::new(gmail::GmailTransport::new(
            token.clone(),
            config.from_email.clone(),
            config.from_name.clone(),
        )));
    }
    if let (Some(url), Some(token)) = (&config.smtp_relay_url, &config.smtp_relay_token) {
        transports.push(Box::new(smtp::SmtpRelayTransport::new(
            url.clone(),
            token.clone(),
            config.from_email.clone(),
            config.from_name.clone(),
        )));
    }

    transports
}

/// Application-wide transport set, built once at startup.
pub struct OutreachTransports {
    pub email: Vec<Box<dyn EmailTransport>>,
    pub sms: Option<Box<dyn SmsGateway>>,
}

impl OutreachTransports {
    pub fn from_config(config: &OutreachConfig) -> Self {
        Self {
            email: email_waterfall(config),
            sms: sms_gateway(config),
        }
    }
}

pub fn sms_gateway(config: &OutreachConfig) -> Option<Box<dyn SmsGateway>> {
    match (&config.sms_gateway_url, &config.sms_gateway_token) {
        (Some(url), Some(token)) => Some(Box::new(sms::HttpSmsGateway::new(
            url.clone(),
            token.clone(),
        ))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OutreachConfig {
        OutreachConfig {
            from_email: "sales@example.com".to_string(),
            from_name: "Sales".to_string(),
            ses_endpoint: Some("https://ses.example.com".to_string()),
            ses_token: Some("ses-token".to_string()),
            gmail_token: Some("gmail-token".to_string()),
            smtp_relay_url: Some("https://relay.example.com".to_string()),
            smtp_relay_token: Some("relay-token".to_string()),
            sms_gateway_url: None,
            sms_gateway_token: None,
        }
    }

    #[test]
    fn test_waterfall_order_is_fixed() {
        let transports = email_waterfall(&config());
        let names: Vec<&str> = transports.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["ses", "gmail", "smtp_relay"]);
    }

    #[test]
    fn test_unconfigured_transports_are_omitted() {
        let mut config = config();
        config.ses_token = None;
        config.gmail_token = None;

        let transports = email_waterfall(&config);
        let names: Vec<&str> = transports.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["smtp_relay"]);
    }

    #[test]
    fn test_sms_gateway_requires_url_and_token() {
        assert!(sms_gateway(&config()).is_none());

        let mut config = config();
        config.sms_gateway_url = Some("https://sms.example.com".to_string());
        config.sms_gateway_token = Some("sms-token".to_string());
        assert!(sms_gateway(&config).is_some());
    }
}
