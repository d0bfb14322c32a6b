//! Marketing pages and the Open Graph image endpoint.
//!
//! Published pages are public; management endpoints require the admin role.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tera::Tera;
use validator::Validate;

use crate::domain::cms::{NewCmsPage, UpdateCmsPage, normalize_slug};
use crate::domain::types::SanitizedHtml;
use crate::dto::cms::{OgImageQuery, SavePageRequest};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CmsReader, CmsWriter, DieselRepository};
use crate::routes::{ApiError, ensure_role};
use crate::SERVICE_ADMIN_ROLE;

const OG_TEMPLATE: &str = "og.svg";

#[get("/pages")]
pub async fn list_pages(repo: web::Data<DieselRepository>) -> Result<HttpResponse, ApiError> {
    let pages = repo.list_pages(true)?;
    Ok(HttpResponse::Ok().json(pages))
}

#[get("/pages/{slug}")]
pub async fn get_page(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let page = repo
        .get_page_by_slug(&slug)?
        .filter(|page| page.published)
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(page))
}

/// All pages, drafts included.
#[get("/admin/pages")]
pub async fn list_all_pages(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    let pages = repo.list_pages(false)?;
    Ok(HttpResponse::Ok().json(pages))
}

#[post("/pages")]
pub async fn create_page(
    user: AuthenticatedUser,
    payload: web::Json<SavePageRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let slug = normalize_slug(&payload.slug);
    if slug.is_empty() {
        return Err(ApiError::BadRequest("slug cannot be empty".to_string()));
    }
    let body = SanitizedHtml::new(&payload.body_html)
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let page = repo.create_page(&NewCmsPage {
        slug,
        title: payload.title.trim().to_string(),
        body_html: body.into_inner(),
        published: payload.published,
    })?;
    Ok(HttpResponse::Created().json(page))
}

#[put("/pages/{page_id}")]
pub async fn update_page(
    page_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<SavePageRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let body = SanitizedHtml::new(&payload.body_html)
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let page = repo.update_page(
        page_id.into_inner(),
        &UpdateCmsPage {
            title: payload.title.trim().to_string(),
            body_html: body.into_inner(),
            published: payload.published,
        },
    )?;
    Ok(HttpResponse::Ok().json(page))
}

#[delete("/pages/{page_id}")]
pub async fn delete_page(
    page_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    repo.delete_page(page_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// Social-preview card rendered as SVG. Public, like the pages it
/// decorates. Tera does not autoescape `.svg`, so the strings are escaped
/// here.
#[get("/og")]
pub async fn og_image(
    query: web::Query<OgImageQuery>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, ApiError> {
    let title = tera::escape_html(query.title.as_deref().unwrap_or("Orbit CRM"));
    let subtitle = tera::escape_html(query.subtitle.as_deref().unwrap_or(""));

    let mut context = tera::Context::new();
    context.insert("title", &title);
    context.insert("subtitle", &subtitle);

    let svg = tera.render(OG_TEMPLATE, &context).map_err(|err| {
        log::error!("Failed to render OG image: {err}");
        ApiError::Internal
    })?;

    Ok(HttpResponse::Ok()
        .content_type("image/svg+xml")
        .body(svg))
}
