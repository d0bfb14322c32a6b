use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::chat::{ChatRole, ChatTurn};

/// One incoming chat message. Two wire shapes are accepted:
/// `{"role": "...", "content": "..."}` and `{"type": "...", "text": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncomingChatMessage {
    RoleContent {
        role: String,
        content: String,
    },
    TypeText {
        #[serde(rename = "type")]
        kind: String,
        text: String,
    },
}

impl IncomingChatMessage {
    pub fn into_turn(self) -> ChatTurn {
        match self {
            IncomingChatMessage::RoleContent { role, content } => ChatTurn {
                role: ChatRole::from(role.as_str()),
                content,
            },
            IncomingChatMessage::TypeText { kind, text } => ChatTurn {
                role: ChatRole::from(kind.as_str()),
                content: text,
            },
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    pub session_id: Option<i32>,
    #[validate(length(min = 1))]
    pub messages: Vec<IncomingChatMessage>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EnhanceEmailRequest {
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub body: String,
    pub instructions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_wire_shapes_normalize_to_turns() {
        let role_content: IncomingChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"Hello"}"#).unwrap();
        let turn = role_content.into_turn();
        assert_eq!(turn.role, ChatRole::Assistant);
        assert_eq!(turn.content, "Hello");

        let type_text: IncomingChatMessage =
            serde_json::from_str(r#"{"type":"user","text":"Hi there"}"#).unwrap();
        let turn = type_text.into_turn();
        assert_eq!(turn.role, ChatRole::User);
        assert_eq!(turn.content, "Hi there");
    }

    #[test]
    fn unknown_roles_default_to_user() {
        let msg: IncomingChatMessage =
            serde_json::from_str(r#"{"type":"human","text":"hey"}"#).unwrap();
        assert_eq!(msg.into_turn().role, ChatRole::User);
    }
}
