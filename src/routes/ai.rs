use std::sync::{Arc, Mutex};

use actix_web::{HttpResponse, get, post, web};
use futures_util::StreamExt;
use futures_util::stream;
use validator::Validate;

use crate::ai::TextGenerator;
use crate::ai::openai::chat_system_prompt;
use crate::domain::chat::ChatRole;
use crate::dto::chat::{ChatRequest, EnhanceEmailRequest};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ChatReader, DieselRepository};
use crate::routes::{ApiError, ensure_role};
use crate::services::chat as chat_service;
use crate::SERVICE_ACCESS_ROLE;

/// Streams the rewritten draft email as plain text chunks.
#[post("/ai/enhance-email")]
pub async fn enhance_email(
    user: AuthenticatedUser,
    payload: web::Json<EnhanceEmailRequest>,
    generator: web::Data<dyn TextGenerator>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let deltas = chat_service::enhance_email(
        generator.get_ref(),
        &payload.subject,
        &payload.body,
        payload.instructions.as_deref(),
    )
    .await?;

    let body = deltas.map(|delta| match delta {
        Ok(text) => Ok(web::Bytes::from(text)),
        Err(err) => {
            log::error!("Enhance stream error: {err}");
            Err(actix_web::error::ErrorInternalServerError(err))
        }
    });

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .streaming(body))
}

#[get("/ai/chat/{session_id}")]
pub async fn chat_history(
    session_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let session = repo
        .get_session_by_id(session_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    let messages = repo.list_session_messages(session.id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "session": session,
        "messages": messages,
    })))
}

/// Streams the assistant reply as plain text chunks. The session ID (new or
/// existing) is echoed in the `X-Session-Id` header; the full reply is
/// persisted once the stream ends.
#[post("/ai/chat")]
pub async fn chat(
    user: AuthenticatedUser,
    payload: web::Json<ChatRequest>,
    repo: web::Data<DieselRepository>,
    generator: web::Data<dyn TextGenerator>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let request = payload.into_inner();
    let turns: Vec<_> = request.messages.into_iter().map(|m| m.into_turn()).collect();
    let last_turn = turns
        .last()
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("messages cannot be empty".to_string()))?;
    if last_turn.role != ChatRole::User {
        return Err(ApiError::BadRequest(
            "last message must be a user turn".to_string(),
        ));
    }

    // An existing session already holds the canonical history; a new one is
    // seeded with everything the client sent.
    let (session, history) = match request.session_id {
        Some(id) => {
            let session = chat_service::resume_session(repo.get_ref(), &user, id)?;
            let history =
                chat_service::record_user_turn(repo.get_ref(), &session, &last_turn.content)?;
            (session, history)
        }
        None => chat_service::start_session(repo.get_ref(), &user, &turns)?,
    };

    let deltas = generator
        .stream_chat(&chat_system_prompt(&user.name), &history)
        .await
        .map_err(|err| {
            log::error!("Failed to open chat stream: {err}");
            ApiError::Internal
        })?;

    // Accumulate the streamed reply so it can be stored when the provider
    // finishes.
    let accumulated = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&accumulated);
    let session_id = session.id;
    let repo = repo.clone();

    let body = deltas
        .map(move |delta| match delta {
            Ok(text) => {
                if let Ok(mut buffer) = sink.lock() {
                    buffer.push_str(&text);
                }
                Ok(web::Bytes::from(text))
            }
            Err(err) => {
                log::error!("Chat stream error: {err}");
                Err(actix_web::error::ErrorInternalServerError(err))
            }
        })
        .chain(stream::once(async move {
            let reply = accumulated
                .lock()
                .map(|buffer| buffer.clone())
                .unwrap_or_default();
            if !reply.is_empty() {
                if let Err(err) =
                    chat_service::record_assistant_turn(repo.get_ref(), session_id, &reply)
                {
                    log::error!("Failed to persist assistant reply: {err}");
                }
            }
            Ok(web::Bytes::new())
        }));

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header(("X-Session-Id", session.id.to_string()))
        .streaming(body))
}
