//! SES HTTP transport, first hop of the email waterfall.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::outreach::OutboundEmail;
use crate::transport::{EmailTransport, TransportError};

pub struct SesTransport {
    client: Client,
    endpoint: String,
    token: String,
    from_email: String,
    from_name: String,
}

impl SesTransport {
    pub fn new(endpoint: String, token: String, from_email: String, from_name: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            token,
            from_email,
            from_name,
        }
    }
}

#[async_trait]
impl EmailTransport for SesTransport {
    fn name(&self) -> &'static str {
        "ses"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError> {
        let request = SendEmailRequest {
            from_email_address: format!("{} <{}>", self.from_name, self.from_email),
            destination: Destination {
                to_addresses: vec![email.to.clone()],
            },
            content: Content {
                simple: SimpleContent {
                    subject: Data {
                        data: email.subject.clone(),
                    },
                    body: Body {
                        html: Data {
                            data: email.body_html.clone(),
                        },
                    },
                },
            },
        };

        let response = self
            .client
            .post(format!("{}/v2/email/outbound-emails", self.endpoint))
            .bearer_auth(&self.token)
            .header("Idempotency-Key", &email.token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected { status, body });
        }

        let response: SendEmailResponse = response.json().await?;
        if response.message_id.is_empty() {
            return Err(TransportError::BadResponse(
                "missing MessageId".to_string(),
            ));
        }

        Ok(response.message_id)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest {
    from_email_address: String,
    destination: Destination,
    content: Content,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Destination {
    to_addresses: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Content {
    simple: SimpleContent,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SimpleContent {
    subject: Data,
    body: Body,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Body {
    html: Data,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Data {
    data: String,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    #[serde(rename = "MessageId", default)]
    message_id: String,
}
