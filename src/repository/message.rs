use diesel::prelude::*;

use crate::domain::message::{Message, NewMessage};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, MessageReader, MessageWriter};

impl MessageReader for DieselRepository {
    fn list_messages(&self, hub_id: i32, participant: &str) -> RepositoryResult<Vec<Message>> {
        use crate::models::message::Message as DbMessage;
        use crate::schema::messages;

        let mut conn = self.conn()?;
        let items = messages::table
            .filter(messages::hub_id.eq(hub_id))
            .filter(
                messages::sender
                    .eq(participant)
                    .or(messages::recipient.eq(participant)),
            )
            .order(messages::id.desc())
            .load::<DbMessage>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl MessageWriter for DieselRepository {
    fn create_message(&self, new: &NewMessage) -> RepositoryResult<Message> {
        use crate::models::message::{Message as DbMessage, NewMessage as DbNewMessage};
        use crate::schema::messages;

        let mut conn = self.conn()?;
        let insertable: DbNewMessage = new.into();
        let created = diesel::insert_into(messages::table)
            .values(&insertable)
            .get_result::<DbMessage>(&mut conn)?;

        Ok(created.into())
    }
}
