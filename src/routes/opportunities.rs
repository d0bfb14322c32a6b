use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::dto::opportunity::SaveOpportunityRequest;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, OpportunityReader, OpportunityWriter};
use crate::routes::{ApiError, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

#[get("/opportunities")]
pub async fn list_opportunities(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let opportunities = repo.list_opportunities(user.hub_id)?;
    Ok(HttpResponse::Ok().json(opportunities))
}

#[get("/opportunities/{opportunity_id}")]
pub async fn get_opportunity(
    opportunity_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let opportunity = repo
        .get_opportunity_by_id(opportunity_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(opportunity))
}

#[post("/opportunities")]
pub async fn create_opportunity(
    user: AuthenticatedUser,
    payload: web::Json<SaveOpportunityRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let opportunity = repo.create_opportunity(&payload.to_new_opportunity(user.hub_id))?;
    Ok(HttpResponse::Created().json(opportunity))
}

#[put("/opportunities/{opportunity_id}")]
pub async fn update_opportunity(
    opportunity_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<SaveOpportunityRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let opportunity = repo.update_opportunity(
        opportunity_id.into_inner(),
        user.hub_id,
        &payload.to_update(),
    )?;
    Ok(HttpResponse::Ok().json(opportunity))
}

#[delete("/opportunities/{opportunity_id}")]
pub async fn delete_opportunity(
    opportunity_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    repo.delete_opportunity(opportunity_id.into_inner(), user.hub_id)?;
    Ok(HttpResponse::NoContent().finish())
}
