//! Admin endpoints for custom objects, fields and page layouts.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;
use validator::Validate;

use crate::dto::custom_schema::{
    CreateFieldRequest, CreateLayoutRequest, CreateObjectRequest, UpdateObjectRequest,
};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CustomSchemaReader, CustomSchemaWriter, DieselRepository};
use crate::routes::{ApiError, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

#[get("/schema/objects")]
pub async fn list_objects(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let objects = repo.list_objects(user.hub_id)?;
    Ok(HttpResponse::Ok().json(objects))
}

#[get("/schema/objects/{object_id}")]
pub async fn get_object(
    object_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let object = repo
        .get_object_by_id(object_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    let fields = repo.list_fields(object.id)?;
    let layouts = repo.list_layouts(object.id)?;

    Ok(HttpResponse::Ok().json(json!({
        "object": object,
        "fields": fields,
        "layouts": layouts,
    })))
}

#[post("/schema/objects")]
pub async fn create_object(
    user: AuthenticatedUser,
    payload: web::Json<CreateObjectRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let object = repo.create_object(&payload.to_new_object(user.hub_id))?;
    Ok(HttpResponse::Created().json(object))
}

#[put("/schema/objects/{object_id}")]
pub async fn update_object(
    object_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateObjectRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let object =
        repo.update_object_label(object_id.into_inner(), user.hub_id, payload.label.trim())?;
    Ok(HttpResponse::Ok().json(object))
}

/// Deletes the object together with its fields and layouts.
#[delete("/schema/objects/{object_id}")]
pub async fn delete_object(
    object_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    let object_id = object_id.into_inner();
    repo.get_object_by_id(object_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    repo.delete_object(object_id, user.hub_id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/schema/objects/{object_id}/fields")]
pub async fn create_field(
    object_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<CreateFieldRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let object = repo
        .get_object_by_id(object_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    let new_field = payload.to_new_field(object.id).map_err(ApiError::BadRequest)?;
    let field = repo.create_field(&new_field)?;
    Ok(HttpResponse::Created().json(field))
}

#[delete("/schema/objects/{object_id}/fields/{field_id}")]
pub async fn delete_field(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    let (object_id, field_id) = path.into_inner();
    let object = repo
        .get_object_by_id(object_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    repo.delete_field(field_id, object.id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/schema/objects/{object_id}/layouts")]
pub async fn create_layout(
    object_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<CreateLayoutRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let object = repo
        .get_object_by_id(object_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    let layout = repo.create_layout(&payload.to_new_layout(object.id))?;
    Ok(HttpResponse::Created().json(layout))
}

#[delete("/schema/objects/{object_id}/layouts/{layout_id}")]
pub async fn delete_layout(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    let (object_id, layout_id) = path.into_inner();
    let object = repo
        .get_object_by_id(object_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    repo.delete_layout(layout_id, object.id)?;
    Ok(HttpResponse::NoContent().finish())
}
