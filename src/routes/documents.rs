use std::path::Path;

use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, get, post, web};
use uuid::Uuid;

use crate::domain::document::NewDocument;
use crate::dto::document::{ListDocumentsQuery, UploadDocumentForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::{DieselRepository, DocumentReader, DocumentWriter};
use crate::routes::{ApiError, ensure_role};
use crate::SERVICE_ACCESS_ROLE;

#[get("/documents")]
pub async fn list_documents(
    user: AuthenticatedUser,
    query: web::Query<ListDocumentsQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let documents = repo.list_documents(user.hub_id, query.board_id)?;
    Ok(HttpResponse::Ok().json(documents))
}

#[post("/documents")]
pub async fn upload_document(
    user: AuthenticatedUser,
    MultipartForm(form): MultipartForm<UploadDocumentForm>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let original_name = form
        .file
        .file_name
        .clone()
        .unwrap_or_else(|| "document".to_string());
    let extension = Path::new(&original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    let storage_name = format!("{}{extension}", Uuid::new_v4());
    let destination = Path::new(&config.storage_dir).join(&storage_name);

    std::fs::copy(form.file.file.path(), &destination).map_err(|err| {
        log::error!("Failed to store uploaded document: {err}");
        ApiError::Internal
    })?;

    let content_type = form
        .file
        .content_type
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let document = repo.create_document(&NewDocument {
        hub_id: user.hub_id,
        board_id: form.board_id.map(|id| id.into_inner()),
        name: original_name,
        content_type,
        size_bytes: form.file.size as i64,
        storage_name,
        uploaded_by: user.email.clone(),
    })?;

    Ok(HttpResponse::Created().json(document))
}
