use serde::Deserialize;
use validator::Validate;

use crate::services::outreach::{EmailBatch, SmsBatch};

#[derive(Debug, Deserialize, Validate)]
pub struct SendEmailBatchRequest {
    #[validate(length(min = 1))]
    pub lead_ids: Vec<i32>,
    pub subject: Option<String>,
    pub body_html: Option<String>,
    pub prompt: Option<String>,
    #[serde(default)]
    pub dry_run: bool,
}

impl From<SendEmailBatchRequest> for EmailBatch {
    fn from(request: SendEmailBatchRequest) -> Self {
        Self {
            lead_ids: request.lead_ids,
            subject: request.subject,
            body_html: request.body_html,
            prompt: request.prompt,
            dry_run: request.dry_run,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PreviewEmailRequest {
    pub subject: Option<String>,
    pub body_html: Option<String>,
    pub prompt: Option<String>,
}

impl PreviewEmailRequest {
    pub fn to_batch(&self, lead_id: i32) -> EmailBatch {
        EmailBatch {
            lead_ids: vec![lead_id],
            subject: self.subject.clone(),
            body_html: self.body_html.clone(),
            prompt: self.prompt.clone(),
            dry_run: true,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PreviewSmsRequest {
    #[validate(length(min = 1, max = 480))]
    pub body: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SendSmsBatchRequest {
    #[validate(length(min = 1))]
    pub lead_ids: Vec<i32>,
    #[validate(length(min = 1, max = 480))]
    pub body: String,
    #[serde(default)]
    pub dry_run: bool,
}

impl From<SendSmsBatchRequest> for SmsBatch {
    fn from(request: SendSmsBatchRequest) -> Self {
        Self {
            lead_ids: request.lead_ids,
            body: request.body,
            dry_run: request.dry_run,
        }
    }
}
