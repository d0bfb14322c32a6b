use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Delivery channel for a message.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageChannel {
    #[default]
    Internal,
    Email,
}

impl MessageChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageChannel::Internal => "internal",
            MessageChannel::Email => "email",
        }
    }
}

impl From<&str> for MessageChannel {
    fn from(s: &str) -> Self {
        match s {
            "email" => MessageChannel::Email,
            _ => MessageChannel::Internal,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: i32,
    pub hub_id: i32,
    pub sender: String,
    pub recipient: String,
    pub subject: Option<String>,
    pub body: String,
    pub channel: MessageChannel,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewMessage {
    pub hub_id: i32,
    pub sender: String,
    pub recipient: String,
    pub subject: Option<String>,
    /// Already sanitized body HTML.
    pub body: String,
    pub channel: MessageChannel,
}
