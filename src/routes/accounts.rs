use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;
use validator::Validate;

use crate::dto::account::{AddContactRequest, SaveAccountRequest};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{AccountReader, AccountWriter, DieselRepository};
use crate::routes::{ApiError, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

#[get("/accounts")]
pub async fn list_accounts(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let accounts = repo.list_accounts(user.hub_id)?;
    Ok(HttpResponse::Ok().json(accounts))
}

#[get("/accounts/{account_id}")]
pub async fn get_account(
    account_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let account_id = account_id.into_inner();
    let account = repo
        .get_account_by_id(account_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    let contacts = repo.list_contacts(account_id, user.hub_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "account": account,
        "contacts": contacts,
    })))
}

#[post("/accounts")]
pub async fn create_account(
    user: AuthenticatedUser,
    payload: web::Json<SaveAccountRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let account = repo.create_account(&payload.to_new_account(user.hub_id))?;
    Ok(HttpResponse::Created().json(account))
}

#[put("/accounts/{account_id}")]
pub async fn update_account(
    account_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<SaveAccountRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let account = repo.update_account(account_id.into_inner(), user.hub_id, &payload.to_update())?;
    Ok(HttpResponse::Ok().json(account))
}

#[delete("/accounts/{account_id}")]
pub async fn delete_account(
    account_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    repo.delete_account(account_id.into_inner(), user.hub_id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/accounts/{account_id}/contacts")]
pub async fn add_contact(
    account_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<AddContactRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let account_id = account_id.into_inner();
    repo.get_account_by_id(account_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    let contact = repo.create_contact(&payload.to_new_contact(user.hub_id, account_id))?;
    Ok(HttpResponse::Created().json(contact))
}

#[delete("/contacts/{contact_id}")]
pub async fn delete_contact(
    contact_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    repo.delete_contact(contact_id.into_inner(), user.hub_id)?;
    Ok(HttpResponse::NoContent().finish())
}
