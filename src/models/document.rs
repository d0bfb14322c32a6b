use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::document::{Document as DomainDocument, NewDocument as DomainNewDocument};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::documents)]
pub struct Document {
    pub id: i32,
    pub hub_id: i32,
    pub board_id: Option<i32>,
    pub name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub storage_name: String,
    pub uploaded_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::documents)]
pub struct NewDocument<'a> {
    pub hub_id: i32,
    pub board_id: Option<i32>,
    pub name: &'a str,
    pub content_type: &'a str,
    pub size_bytes: i64,
    pub storage_name: &'a str,
    pub uploaded_by: &'a str,
}

impl From<Document> for DomainDocument {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            hub_id: doc.hub_id,
            board_id: doc.board_id,
            name: doc.name,
            content_type: doc.content_type,
            size_bytes: doc.size_bytes,
            storage_name: doc.storage_name,
            uploaded_by: doc.uploaded_by,
            created_at: doc.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewDocument> for NewDocument<'a> {
    fn from(doc: &'a DomainNewDocument) -> Self {
        Self {
            hub_id: doc.hub_id,
            board_id: doc.board_id,
            name: doc.name.as_str(),
            content_type: doc.content_type.as_str(),
            size_bytes: doc.size_bytes,
            storage_name: doc.storage_name.as_str(),
            uploaded_by: doc.uploaded_by.as_str(),
        }
    }
}
