use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::chat::{
    ChatMessage as DomainChatMessage, ChatRole, ChatSession as DomainChatSession,
    NewChatMessage as DomainNewChatMessage,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::chat_sessions)]
pub struct ChatSession {
    pub id: i32,
    pub hub_id: i32,
    pub user_email: String,
    pub title: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::chat_sessions)]
pub struct NewChatSession<'a> {
    pub hub_id: i32,
    pub user_email: &'a str,
    pub title: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(ChatSession, foreign_key = session_id))]
#[diesel(table_name = crate::schema::chat_messages)]
pub struct ChatMessage {
    pub id: i32,
    pub session_id: i32,
    pub role: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::chat_messages)]
pub struct NewChatMessage<'a> {
    pub session_id: i32,
    pub role: &'a str,
    pub content: &'a str,
}

impl From<ChatSession> for DomainChatSession {
    fn from(session: ChatSession) -> Self {
        Self {
            id: session.id,
            hub_id: session.hub_id,
            user_email: session.user_email,
            title: session.title,
            created_at: session.created_at,
        }
    }
}

impl From<ChatMessage> for DomainChatMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            session_id: message.session_id,
            role: ChatRole::from(message.role.as_str()),
            content: message.content,
            created_at: message.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewChatMessage> for NewChatMessage<'a> {
    fn from(message: &'a DomainNewChatMessage) -> Self {
        Self {
            session_id: message.session_id,
            role: message.role.as_str(),
            content: message.content.as_str(),
        }
    }
}
