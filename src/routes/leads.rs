use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;
use validator::Validate;

use crate::dto::lead::{ListLeadsQuery, SaveLeadRequest, UploadLeadsForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    ActivityReader, DieselRepository, LeadListQuery, LeadReader, LeadWriter,
};
use crate::routes::{ApiError, ensure_role};
use crate::services::leads as lead_service;
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

#[get("/leads")]
pub async fn list_leads(
    user: AuthenticatedUser,
    query: web::Query<ListLeadsQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let page = query.page.unwrap_or(1);
    let mut list_query = LeadListQuery::new(user.hub_id).paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        list_query = list_query.status(status);
    }
    if let Some(search) = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        list_query = list_query.search(search);
    }

    let (total, leads) = repo.list_leads(list_query)?;
    Ok(HttpResponse::Ok().json(Paginated::new(leads, page, total, DEFAULT_ITEMS_PER_PAGE)))
}

#[get("/leads/{lead_id}")]
pub async fn get_lead(
    lead_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let lead = repo
        .get_lead_by_id(lead_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(lead))
}

#[post("/leads")]
pub async fn create_lead(
    user: AuthenticatedUser,
    payload: web::Json<SaveLeadRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let created = repo.create_leads(&[payload.to_new_lead(user.hub_id)])?;
    Ok(HttpResponse::Created().json(json!({ "created": created })))
}

#[put("/leads/{lead_id}")]
pub async fn update_lead(
    lead_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<SaveLeadRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let lead = repo.update_lead(lead_id.into_inner(), user.hub_id, &payload.to_update())?;
    Ok(HttpResponse::Ok().json(lead))
}

#[delete("/leads/{lead_id}")]
pub async fn delete_lead(
    lead_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    repo.delete_lead(lead_id.into_inner(), user.hub_id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/leads/import")]
pub async fn import_leads(
    user: AuthenticatedUser,
    MultipartForm(form): MultipartForm<UploadLeadsForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    let data = std::fs::read(form.csv.file.path()).map_err(|err| {
        log::error!("Failed to read uploaded CSV: {err}");
        ApiError::Internal
    })?;

    let summary = lead_service::import_leads_csv(repo.get_ref(), &user, &data)?;
    Ok(HttpResponse::Ok().json(json!({
        "imported": summary.imported,
        "skipped": summary.skipped,
    })))
}

#[get("/leads/{lead_id}/activity")]
pub async fn lead_activity(
    lead_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let lead_id = lead_id.into_inner();
    repo.get_lead_by_id(lead_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    let activity = repo.list_lead_activity(lead_id, user.hub_id)?;
    Ok(HttpResponse::Ok().json(activity))
}
