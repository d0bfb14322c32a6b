use serde::Deserialize;
use validator::Validate;

use crate::domain::message::MessageChannel;

#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(email)]
    pub recipient: String,
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub body: String,
    #[serde(default)]
    pub channel: MessageChannel,
}
