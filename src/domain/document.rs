use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: i32,
    pub hub_id: i32,
    pub board_id: Option<i32>,
    pub name: String,
    pub content_type: String,
    pub size_bytes: i64,
    /// UUID-based file name under the storage directory.
    pub storage_name: String,
    pub uploaded_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewDocument {
    pub hub_id: i32,
    pub board_id: Option<i32>,
    pub name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub storage_name: String,
    pub uploaded_by: String,
}
