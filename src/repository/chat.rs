use diesel::prelude::*;

use crate::domain::chat::{ChatMessage, ChatSession, NewChatMessage};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ChatReader, ChatWriter, DieselRepository};

impl ChatReader for DieselRepository {
    fn get_session_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<ChatSession>> {
        use crate::models::chat::ChatSession as DbChatSession;
        use crate::schema::chat_sessions;

        let mut conn = self.conn()?;
        let session = chat_sessions::table
            .find(id)
            .filter(chat_sessions::hub_id.eq(hub_id))
            .first::<DbChatSession>(&mut conn)
            .optional()?;

        Ok(session.map(Into::into))
    }

    fn list_session_messages(&self, session_id: i32) -> RepositoryResult<Vec<ChatMessage>> {
        use crate::models::chat::ChatMessage as DbChatMessage;
        use crate::schema::chat_messages;

        let mut conn = self.conn()?;
        let items = chat_messages::table
            .filter(chat_messages::session_id.eq(session_id))
            .order(chat_messages::id.asc())
            .load::<DbChatMessage>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl ChatWriter for DieselRepository {
    fn create_session(
        &self,
        hub_id: i32,
        user_email: &str,
        title: Option<&str>,
    ) -> RepositoryResult<ChatSession> {
        use crate::models::chat::{ChatSession as DbChatSession, NewChatSession};
        use crate::schema::chat_sessions;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(chat_sessions::table)
            .values(&NewChatSession {
                hub_id,
                user_email,
                title,
            })
            .get_result::<DbChatSession>(&mut conn)?;

        Ok(created.into())
    }

    fn create_chat_message(&self, new: &NewChatMessage) -> RepositoryResult<ChatMessage> {
        use crate::models::chat::{ChatMessage as DbChatMessage, NewChatMessage as DbNewChatMessage};
        use crate::schema::chat_messages;

        let mut conn = self.conn()?;
        let insertable: DbNewChatMessage = new.into();
        let created = diesel::insert_into(chat_messages::table)
            .values(&insertable)
            .get_result::<DbChatMessage>(&mut conn)?;

        Ok(created.into())
    }
}
