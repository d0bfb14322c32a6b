use actix_web::{HttpResponse, post, web};
use tera::Tera;
use validator::Validate;

use crate::ai::TextGenerator;
use crate::dto::outreach::{
    PreviewEmailRequest, PreviewSmsRequest, SendEmailBatchRequest, SendSmsBatchRequest,
};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{ApiError, ensure_role};
use crate::services::outreach as outreach_service;
use crate::transport::OutreachTransports;
use crate::SERVICE_ACCESS_ROLE;

/// Resolves and renders the email for one lead without sending it.
#[post("/outreach/email/{lead_id}/preview")]
pub async fn preview_email(
    lead_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<PreviewEmailRequest>,
    repo: web::Data<DieselRepository>,
    generator: web::Data<dyn TextGenerator>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let lead_id = lead_id.into_inner();
    let copy = outreach_service::preview_email(
        repo.get_ref(),
        &user,
        generator.get_ref(),
        &tera,
        lead_id,
        &payload.to_batch(lead_id),
    )
    .await?;

    Ok(HttpResponse::Ok().json(copy))
}

/// Resolves the SMS body for one lead without sending it.
#[post("/outreach/sms/{lead_id}/preview")]
pub async fn preview_sms(
    lead_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<PreviewSmsRequest>,
    repo: web::Data<DieselRepository>,
    generator: web::Data<dyn TextGenerator>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let preview = outreach_service::preview_sms(
        repo.get_ref(),
        &user,
        generator.get_ref(),
        lead_id.into_inner(),
        payload.body.as_deref(),
        payload.prompt.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(preview))
}

#[post("/outreach/email/send")]
pub async fn send_email_batch(
    user: AuthenticatedUser,
    payload: web::Json<SendEmailBatchRequest>,
    repo: web::Data<DieselRepository>,
    transports: web::Data<OutreachTransports>,
    generator: web::Data<dyn TextGenerator>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let report = outreach_service::send_email_batch(
        repo.get_ref(),
        &user,
        &transports.email,
        generator.get_ref(),
        &tera,
        payload.into_inner().into(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(report))
}

#[post("/outreach/sms/send")]
pub async fn send_sms_batch(
    user: AuthenticatedUser,
    payload: web::Json<SendSmsBatchRequest>,
    repo: web::Data<DieselRepository>,
    transports: web::Data<OutreachTransports>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let report = outreach_service::send_sms_batch(
        repo.get_ref(),
        &user,
        transports.sms.as_deref(),
        payload.into_inner().into(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(report))
}
