//! Gmail API transport, second hop of the email waterfall.
//!
//! The Gmail send endpoint wants a full RFC 2822 message, base64url encoded
//! without padding.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::outreach::OutboundEmail;
use crate::transport::{EmailTransport, TransportError};

const GMAIL_SEND_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";

pub struct GmailTransport {
    client: Client,
    token: String,
    from_email: String,
    from_name: String,
}

impl GmailTransport {
    pub fn new(token: String, from_email: String, from_name: String) -> Self {
        Self {
            client: Client::new(),
            token,
            from_email,
            from_name,
        }
    }

    fn build_raw_message(&self, email: &OutboundEmail) -> String {
        let message = format!(
            "From: {} <{}>\r\nTo: {} <{}>\r\nSubject: {}\r\nMIME-Version: 1.0\r\nContent-Type: text/html; charset=utf-8\r\n\r\n{}",
            self.from_name, self.from_email, email.to_name, email.to, email.subject, email.body_html
        );
        URL_SAFE_NO_PAD.encode(message)
    }
}

#[async_trait]
impl EmailTransport for GmailTransport {
    fn name(&self) -> &'static str {
        "gmail"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError> {
        let request = GmailSendRequest {
            raw: self.build_raw_message(email),
        };

        let response = self
            .client
            .post(GMAIL_SEND_URL)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected { status, body });
        }

        let response: GmailSendResponse = response.json().await?;
        if response.id.is_empty() {
            return Err(TransportError::BadResponse("missing message id".to_string()));
        }

        Ok(response.id)
    }
}

#[derive(Serialize)]
struct GmailSendRequest {
    raw: String,
}

#[derive(Deserialize)]
struct GmailSendResponse {
    #[serde(default)]
    id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_message_is_base64url_without_padding() {
        let transport = GmailTransport::new(
            "token".to_string(),
            "sales@example.com".to_string(),
            "Sales".to_string(),
        );
        let raw = transport.build_raw_message(&OutboundEmail {
            to: "lead@example.com".to_string(),
            to_name: "Lead".to_string(),
            subject: "Hello".to_string(),
            body_html: "<p>Hi</p>".to_string(),
            token: "tok".to_string(),
        });

        assert!(!raw.contains('='));
        let decoded = URL_SAFE_NO_PAD.decode(&raw).unwrap();
        let decoded = String::from_utf8(decoded).unwrap();
        assert!(decoded.starts_with("From: Sales <sales@example.com>\r\n"));
        assert!(decoded.contains("Subject: Hello\r\n"));
        assert!(decoded.ends_with("<p>Hi</p>"));
    }
}
