//! Chat sessions and the enhance-email generator.

use futures_util::stream::BoxStream;

use crate::ai::openai::ENHANCE_EMAIL_SYSTEM;
use crate::ai::{AiError, TextGenerator};
use crate::domain::chat::{ChatRole, ChatSession, ChatTurn, NewChatMessage};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ChatReader, ChatWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads an existing session. A session belonging to another hub reads as
/// missing.
pub fn resume_session<R>(
    repo: &R,
    user: &AuthenticatedUser,
    session_id: i32,
) -> ServiceResult<ChatSession>
where
    R: ChatReader + ?Sized,
{
    if !user.has_role(crate::SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_session_by_id(session_id, user.hub_id)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a session seeded with the client-supplied turns. Every turn is
/// persisted so the history survives the first request; the session title
/// comes from the first user turn.
pub fn start_session<R>(
    repo: &R,
    user: &AuthenticatedUser,
    turns: &[ChatTurn],
) -> ServiceResult<(ChatSession, Vec<ChatTurn>)>
where
    R: ChatWriter + ?Sized,
{
    if !user.has_role(crate::SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let first_user = turns
        .iter()
        .find(|t| t.role == ChatRole::User)
        .map(|t| t.content.as_str())
        .unwrap_or_default();
    let title = session_title(first_user);
    let session = repo.create_session(user.hub_id, &user.email, title.as_deref())?;

    for turn in turns {
        repo.create_chat_message(&NewChatMessage {
            session_id: session.id,
            role: turn.role,
            content: turn.content.clone(),
        })?;
    }

    Ok((session, turns.to_vec()))
}

fn session_title(first_message: &str) -> Option<String> {
    let trimmed = first_message.trim();
    if trimmed.is_empty() {
        return None;
    }
    let title: String = trimmed.chars().take(60).collect();
    Some(title)
}

/// Persists the incoming user turn and returns the full history for the
/// model: stored messages first, then the new turn.
pub fn record_user_turn<R>(
    repo: &R,
    session: &ChatSession,
    content: &str,
) -> ServiceResult<Vec<ChatTurn>>
where
    R: ChatReader + ChatWriter + ?Sized,
{
    let mut history: Vec<ChatTurn> = repo
        .list_session_messages(session.id)?
        .into_iter()
        .map(|m| ChatTurn {
            role: m.role,
            content: m.content,
        })
        .collect();

    repo.create_chat_message(&NewChatMessage {
        session_id: session.id,
        role: ChatRole::User,
        content: content.to_string(),
    })?;
    history.push(ChatTurn {
        role: ChatRole::User,
        content: content.to_string(),
    });

    Ok(history)
}

pub fn record_assistant_turn<R>(
    repo: &R,
    session_id: i32,
    content: &str,
) -> ServiceResult<()>
where
    R: ChatWriter + ?Sized,
{
    repo.create_chat_message(&NewChatMessage {
        session_id,
        role: ChatRole::Assistant,
        content: content.to_string(),
    })?;
    Ok(())
}

/// Streams the rewritten draft email from the generator as plain text
/// deltas. Nothing is persisted.
pub async fn enhance_email(
    generator: &dyn TextGenerator,
    subject: &str,
    body: &str,
    instructions: Option<&str>,
) -> ServiceResult<BoxStream<'static, Result<String, AiError>>> {
    if body.trim().is_empty() {
        return Err(ServiceError::Validation("body cannot be empty".to_string()));
    }

    let mut prompt = format!("Subject: {subject}\n\n{body}");
    if let Some(instructions) = instructions {
        prompt.push_str(&format!("\n\nInstructions: {instructions}"));
    }

    let turn = ChatTurn {
        role: ChatRole::User,
        content: prompt,
    };
    Ok(generator.stream_chat(ENHANCE_EMAIL_SYSTEM, &[turn]).await?)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::chat::ChatMessage;
    use crate::repository::mock::MockRepository;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "rep@example.com".to_string(),
            name: "Rep".to_string(),
            hub_id: 1,
            roles: vec!["crm".to_string()],
            exp: 0,
        }
    }

    fn session() -> ChatSession {
        ChatSession {
            id: 10,
            hub_id: 1,
            user_email: "rep@example.com".to_string(),
            title: Some("Pipeline review".to_string()),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn resume_session_rejects_foreign_hub() {
        let mut repo = MockRepository::new();
        repo.expect_get_session_by_id()
            .with(eq(10), eq(1))
            .returning(|_, _| Ok(None));

        let err = resume_session(&repo, &user(), 10).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn start_session_titles_from_first_user_turn() {
        let mut repo = MockRepository::new();
        repo.expect_create_session()
            .withf(|hub_id, email, title| {
                *hub_id == 1
                    && email == "rep@example.com"
                    && *title == Some("Who are my top leads?")
            })
            .returning(|hub_id, email, title| {
                Ok(ChatSession {
                    id: 11,
                    hub_id,
                    user_email: email.to_string(),
                    title: title.map(str::to_string),
                    created_at: Utc::now().naive_utc(),
                })
            });
        repo.expect_create_chat_message().times(1).returning(|new| {
            Ok(ChatMessage {
                id: 1,
                session_id: new.session_id,
                role: new.role,
                content: new.content.clone(),
                created_at: Utc::now().naive_utc(),
            })
        });

        let turns = vec![ChatTurn {
            role: ChatRole::User,
            content: "Who are my top leads?".to_string(),
        }];
        let (session, history) = start_session(&repo, &user(), &turns).unwrap();
        assert_eq!(session.id, 11);
        assert_eq!(history, turns);
    }

    #[test]
    fn start_session_persists_every_supplied_turn() {
        let mut repo = MockRepository::new();
        repo.expect_create_session().returning(|hub_id, email, title| {
            Ok(ChatSession {
                id: 12,
                hub_id,
                user_email: email.to_string(),
                title: title.map(str::to_string),
                created_at: Utc::now().naive_utc(),
            })
        });
        let mut id = 0;
        repo.expect_create_chat_message()
            .times(3)
            .returning(move |new| {
                id += 1;
                Ok(ChatMessage {
                    id,
                    session_id: new.session_id,
                    role: new.role,
                    content: new.content.clone(),
                    created_at: Utc::now().naive_utc(),
                })
            });

        let turns = vec![
            ChatTurn {
                role: ChatRole::User,
                content: "Show my pipeline".to_string(),
            },
            ChatTurn {
                role: ChatRole::Assistant,
                content: "You have 4 open opportunities.".to_string(),
            },
            ChatTurn {
                role: ChatRole::User,
                content: "Which is closest to closing?".to_string(),
            },
        ];
        let (_, history) = start_session(&repo, &user(), &turns).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, ChatRole::Assistant);
    }

    #[test]
    fn record_user_turn_appends_to_stored_history() {
        let mut repo = MockRepository::new();
        repo.expect_list_session_messages()
            .with(eq(10))
            .returning(|session_id| {
                Ok(vec![ChatMessage {
                    id: 1,
                    session_id,
                    role: ChatRole::Assistant,
                    content: "Hello".to_string(),
                    created_at: Utc::now().naive_utc(),
                }])
            });
        repo.expect_create_chat_message()
            .withf(|new| new.session_id == 10 && new.role == ChatRole::User)
            .returning(|new| {
                Ok(ChatMessage {
                    id: 2,
                    session_id: new.session_id,
                    role: new.role,
                    content: new.content.clone(),
                    created_at: Utc::now().naive_utc(),
                })
            });

        let history = record_user_turn(&repo, &session(), "Show me the pipeline").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, ChatRole::User);
        assert_eq!(history[1].content, "Show me the pipeline");
    }
}
