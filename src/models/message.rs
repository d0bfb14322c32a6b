use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::message::{
    Message as DomainMessage, MessageChannel, NewMessage as DomainNewMessage,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::messages)]
pub struct Message {
    pub id: i32,
    pub hub_id: i32,
    pub sender: String,
    pub recipient: String,
    pub subject: Option<String>,
    pub body: String,
    pub channel: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::messages)]
pub struct NewMessage<'a> {
    pub hub_id: i32,
    pub sender: &'a str,
    pub recipient: &'a str,
    pub subject: Option<&'a str>,
    pub body: &'a str,
    pub channel: &'a str,
}

impl From<Message> for DomainMessage {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            hub_id: message.hub_id,
            sender: message.sender,
            recipient: message.recipient,
            subject: message.subject,
            body: message.body,
            channel: MessageChannel::from(message.channel.as_str()),
            created_at: message.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewMessage> for NewMessage<'a> {
    fn from(message: &'a DomainNewMessage) -> Self {
        Self {
            hub_id: message.hub_id,
            sender: message.sender.as_str(),
            recipient: message.recipient.as_str(),
            subject: message.subject.as_deref(),
            body: message.body.as_str(),
            channel: message.channel.as_str(),
        }
    }
}
