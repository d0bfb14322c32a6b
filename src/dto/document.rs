use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::Deserialize;

#[derive(MultipartForm)]
pub struct UploadDocumentForm {
    #[multipart(limit = "25MB")]
    pub file: TempFile,
    pub board_id: Option<Text<i32>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListDocumentsQuery {
    pub board_id: Option<i32>,
}
