use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl From<&str> for ChatRole {
    fn from(s: &str) -> Self {
        match s {
            "system" => ChatRole::System,
            "assistant" => ChatRole::Assistant,
            _ => ChatRole::User,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatSession {
    pub id: i32,
    pub hub_id: i32,
    pub user_email: String,
    pub title: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub session_id: i32,
    pub role: ChatRole,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewChatMessage {
    pub session_id: i32,
    pub role: ChatRole,
    pub content: String,
}

/// A turn supplied by the client, already normalized from either accepted
/// wire shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}
