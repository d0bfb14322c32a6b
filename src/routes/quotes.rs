use actix_web::{HttpResponse, delete, get, post, put, web};
use tera::Tera;
use validator::Validate;

use crate::dto::quote::{QuoteResponse, SaveQuoteRequest};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, QuoteReader, QuoteWriter};
use crate::routes::{ApiError, ensure_role};
use crate::services::invoice as invoice_service;
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

#[get("/quotes")]
pub async fn list_quotes(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let quotes = repo.list_quotes(user.hub_id)?;
    Ok(HttpResponse::Ok().json(quotes))
}

#[get("/quotes/{quote_id}")]
pub async fn get_quote(
    quote_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let (quote, items) = repo
        .get_quote_with_items(quote_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(QuoteResponse::new(quote, items)))
}

#[post("/quotes")]
pub async fn create_quote(
    user: AuthenticatedUser,
    payload: web::Json<SaveQuoteRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let quote = repo.create_quote(&payload.to_new_quote(user.hub_id), &payload.to_items())?;
    let (quote, items) = repo
        .get_quote_with_items(quote.id, user.hub_id)?
        .ok_or(ApiError::Internal)?;
    Ok(HttpResponse::Created().json(QuoteResponse::new(quote, items)))
}

#[put("/quotes/{quote_id}")]
pub async fn update_quote(
    quote_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<SaveQuoteRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let quote_id = quote_id.into_inner();
    let quote = repo.update_quote(
        quote_id,
        user.hub_id,
        payload.title.trim(),
        payload.status,
        &payload.to_items(),
    )?;
    let (quote, items) = repo
        .get_quote_with_items(quote.id, user.hub_id)?
        .ok_or(ApiError::Internal)?;
    Ok(HttpResponse::Ok().json(QuoteResponse::new(quote, items)))
}

#[delete("/quotes/{quote_id}")]
pub async fn delete_quote(
    quote_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    repo.delete_quote(quote_id.into_inner(), user.hub_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Printable invoice for the quote, as a standalone HTML document.
#[get("/quotes/{quote_id}/invoice")]
pub async fn quote_invoice(
    quote_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let html =
        invoice_service::render_invoice(repo.get_ref(), &user, &tera, quote_id.into_inner())?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
