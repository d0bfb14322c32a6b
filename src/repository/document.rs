use diesel::prelude::*;

use crate::domain::document::{Document, NewDocument};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, DocumentReader, DocumentWriter};

impl DocumentReader for DieselRepository {
    fn list_documents(
        &self,
        hub_id: i32,
        board_id: Option<i32>,
    ) -> RepositoryResult<Vec<Document>> {
        use crate::models::document::Document as DbDocument;
        use crate::schema::documents;

        let mut conn = self.conn()?;
        let mut query = documents::table
            .filter(documents::hub_id.eq(hub_id))
            .into_boxed();
        if let Some(board_id) = board_id {
            query = query.filter(documents::board_id.eq(board_id));
        }

        let items = query
            .order(documents::id.desc())
            .load::<DbDocument>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl DocumentWriter for DieselRepository {
    fn create_document(&self, new: &NewDocument) -> RepositoryResult<Document> {
        use crate::models::document::{Document as DbDocument, NewDocument as DbNewDocument};
        use crate::schema::documents;

        let mut conn = self.conn()?;
        let insertable: DbNewDocument = new.into();
        let created = diesel::insert_into(documents::table)
            .values(&insertable)
            .get_result::<DbDocument>(&mut conn)?;

        Ok(created.into())
    }
}
