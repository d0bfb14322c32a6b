//! SMTP relay bridge, last hop of the email waterfall.
//!
//! The relay accepts a JSON payload over HTTP and hands it to a plain SMTP
//! server on the other side, so even a hub with no SES or Gmail credentials
//! can deliver mail.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::outreach::OutboundEmail;
use crate::transport::{EmailTransport, TransportError};

pub struct SmtpRelayTransport {
    client: Client,
    url: String,
    token: String,
    from_email: String,
    from_name: String,
}

impl SmtpRelayTransport {
    pub fn new(url: String, token: String, from_email: String, from_name: String) -> Self {
        Self {
            client: Client::new(),
            url,
            token,
            from_email,
            from_name,
        }
    }
}

#[async_trait]
impl EmailTransport for SmtpRelayTransport {
    fn name(&self) -> &'static str {
        "smtp_relay"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError> {
        let request = RelayRequest {
            from: &self.from_email,
            from_name: &self.from_name,
            to: &email.to,
            to_name: &email.to_name,
            subject: &email.subject,
            html: &email.body_html,
            idempotency_token: &email.token,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected { status, body });
        }

        let response: RelayResponse = response.json().await?;
        // The relay may not assign its own ID; the idempotency token still
        // identifies the message in that case.
        Ok(if response.message_id.is_empty() {
            email.token.clone()
        } else {
            response.message_id
        })
    }
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    from: &'a str,
    from_name: &'a str,
    to: &'a str,
    to_name: &'a str,
    subject: &'a str,
    html: &'a str,
    idempotency_token: &'a str,
}

#[derive(Deserialize)]
struct RelayResponse {
    #[serde(default)]
    message_id: String,
}
