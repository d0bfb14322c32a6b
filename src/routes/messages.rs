use actix_web::{HttpResponse, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::message::{MessageChannel, NewMessage};
use crate::domain::outreach::OutboundEmail;
use crate::domain::types::SanitizedHtml;
use crate::dto::message::SendMessageRequest;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, MessageReader, MessageWriter};
use crate::routes::{ApiError, ensure_role};
use crate::services::outreach as outreach_service;
use crate::transport::OutreachTransports;
use crate::SERVICE_ACCESS_ROLE;

#[get("/messages")]
pub async fn list_messages(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let messages = repo.list_messages(user.hub_id, &user.email)?;
    Ok(HttpResponse::Ok().json(messages))
}

/// Stores the message; the email channel is additionally delivered through
/// the transport waterfall, with the attempt trail in the response.
#[post("/messages")]
pub async fn send_message(
    user: AuthenticatedUser,
    payload: web::Json<SendMessageRequest>,
    repo: web::Data<DieselRepository>,
    transports: web::Data<OutreachTransports>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let body = SanitizedHtml::new(&payload.body)
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let message = repo.create_message(&NewMessage {
        hub_id: user.hub_id,
        sender: user.email.clone(),
        recipient: payload.recipient.trim().to_lowercase(),
        subject: payload.subject.clone(),
        body: body.into_inner(),
        channel: payload.channel,
    })?;

    if message.channel == MessageChannel::Email {
        let email = OutboundEmail {
            to: message.recipient.clone(),
            to_name: message.recipient.clone(),
            subject: message
                .subject
                .clone()
                .unwrap_or_else(|| "(no subject)".to_string()),
            body_html: message.body.clone(),
            token: outreach_service::new_token(),
        };
        let (status, attempts) =
            outreach_service::deliver_email(&transports.email, &email).await;

        return Ok(HttpResponse::Created().json(json!({
            "message": message,
            "delivery": { "status": status, "attempts": attempts },
        })));
    }

    Ok(HttpResponse::Created().json(message))
}
