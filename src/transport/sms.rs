//! HTTP SMS gateway.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::outreach::OutboundSms;
use crate::transport::{SmsGateway, TransportError};

pub struct HttpSmsGateway {
    client: Client,
    url: String,
    token: String,
}

impl HttpSmsGateway {
    pub fn new(url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            url,
            token,
        }
    }
}

#[async_trait]
impl SmsGateway for HttpSmsGateway {
    fn name(&self) -> &'static str {
        "sms_gateway"
    }

    async fn send(&self, sms: &OutboundSms) -> Result<String, TransportError> {
        let request = SmsRequest {
            to: &sms.to,
            body: &sms.body,
            idempotency_token: &sms.token,
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

        let response: SmsResponse = response.json().await?;
        if response.id.is_empty() {
            return Err(TransportError::BadResponse("missing message id".to_string()));
        }

        Ok(response.id)
    }
}

#[derive(Serialize)]
struct SmsRequest<'a> {
    to: &'a str,
    body: &'a str,
    idempotency_token: &'a str,
}

#[derive(Deserialize)]
struct SmsResponse {
    #[serde(default)]
    id: String,
}
