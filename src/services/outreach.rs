//! Outreach send pipeline.
//!
//! For every requested lead the pipeline resolves copy, renders the email
//! template, then walks the transport waterfall in order until one delivers.
//! Every requested lead ID produces exactly one entry in the batch report,
//! whether it was sent, skipped or failed.

use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use tera::Tera;

use crate::ai::TextGenerator;
use crate::domain::activity::{ActivityType, NewActivityLog};
use crate::domain::lead::{Lead, OutreachUpdate};
use crate::domain::outreach::{
    AttemptOutcome, BatchReport, GeneratedCopy, LeadSendResult, OutboundEmail, OutboundSms,
    SendStatus, SkipReason, SmsPreview, TransportAttempt,
};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ActivityWriter, LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::transport::{EmailTransport, SmsGateway};

const EMAIL_TEMPLATE: &str = "emails/outreach.html";
const TOKEN_LEN: usize = 24;

/// One outreach email batch as requested by the caller. When `subject` and
/// `body_html` are both set the generator is bypassed.
#[derive(Debug, Clone)]
pub struct EmailBatch {
    pub lead_ids: Vec<i32>,
    pub subject: Option<String>,
    pub body_html: Option<String>,
    /// Free-form context handed to the generator when no override is given.
    pub prompt: Option<String>,
    /// Resolve copy and render, but do not touch transports or the database.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct SmsBatch {
    pub lead_ids: Vec<i32>,
    pub body: String,
    pub dry_run: bool,
}

pub(crate) fn new_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

async fn resolve_copy(
    generator: &dyn TextGenerator,
    batch: &EmailBatch,
    lead: &Lead,
) -> ServiceResult<GeneratedCopy> {
    if let (Some(subject), Some(body)) = (&batch.subject, &batch.body_html) {
        return Ok(GeneratedCopy {
            subject: subject.clone(),
            body: body.clone(),
        });
    }

    let system = "You are a sales copywriter. Write a short outreach email. \
Reply with the subject line on the first line, then a blank line, then the email body as HTML. \
Do not add commentary.";
    let user_prompt = format!(
        "Lead: {}{}. Context: {}",
        lead.name,
        lead.company
            .as_deref()
            .map(|c| format!(" at {c}"))
            .unwrap_or_default(),
        batch.prompt.as_deref().unwrap_or("a friendly introduction"),
    );

    let completion = generator.generate(system, &user_prompt).await?;
    let (subject, body) = crate::ai::openai::split_subject_body(&completion);
    if subject.is_empty() {
        return Err(ServiceError::Validation(
            "generator returned no subject".to_string(),
        ));
    }

    Ok(GeneratedCopy { subject, body })
}

fn render_email(tera: &Tera, lead: &Lead, copy: &GeneratedCopy) -> ServiceResult<String> {
    let mut context = tera::Context::new();
    context.insert("name", &lead.name);
    context.insert("company", &lead.company);
    context.insert("body", &copy.body);
    Ok(tera.render(EMAIL_TEMPLATE, &context)?)
}

/// Resolves and renders the email for one lead without sending anything.
pub async fn preview_email<R>(
    repo: &R,
    user: &AuthenticatedUser,
    generator: &dyn TextGenerator,
    tera: &Tera,
    lead_id: i32,
    batch: &EmailBatch,
) -> ServiceResult<GeneratedCopy>
where
    R: LeadReader + ?Sized,
{
    if !user.has_role(crate::SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let lead = repo
        .get_lead_by_id(lead_id, user.hub_id)?
        .ok_or(ServiceError::NotFound)?;

    let copy = resolve_copy(generator, batch, &lead).await?;
    let body = render_email(tera, &lead, &copy)?;
    Ok(GeneratedCopy {
        subject: copy.subject,
        body,
    })
}

/// Resolves the SMS body for one lead without sending anything. The body
/// override wins; otherwise the generator writes the message from the
/// prompt context.
pub async fn preview_sms<R>(
    repo: &R,
    user: &AuthenticatedUser,
    generator: &dyn TextGenerator,
    lead_id: i32,
    body: Option<&str>,
    prompt: Option<&str>,
) -> ServiceResult<SmsPreview>
where
    R: LeadReader + ?Sized,
{
    if !user.has_role(crate::SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let lead = repo
        .get_lead_by_id(lead_id, user.hub_id)?
        .ok_or(ServiceError::NotFound)?;
    let Some(to) = lead.phone.clone() else {
        return Err(ServiceError::Validation(
            "lead has no phone number".to_string(),
        ));
    };

    let body = match body {
        Some(body) => body.to_string(),
        None => {
            let system = "You are a sales copywriter. Write one SMS of at most 400 characters. \
Reply with the message text only.";
            let user_prompt = format!(
                "Lead: {}{}. Context: {}",
                lead.name,
                lead.company
                    .as_deref()
                    .map(|c| format!(" at {c}"))
                    .unwrap_or_default(),
                prompt.unwrap_or("a friendly introduction"),
            );
            generator.generate(system, &user_prompt).await?.trim().to_string()
        }
    };

    Ok(SmsPreview { to, body })
}

/// Walks the transport waterfall for one rendered email. Returns the typed
/// attempt trail together with the terminal status.
pub async fn deliver_email(
    transports: &[Box<dyn EmailTransport>],
    email: &OutboundEmail,
) -> (SendStatus, Vec<TransportAttempt>) {
    let mut attempts = Vec::with_capacity(transports.len());

    for transport in transports {
        match transport.send(email).await {
            Ok(message_id) => {
                attempts.push(TransportAttempt {
                    transport: transport.name().to_string(),
                    outcome: AttemptOutcome::Delivered {
                        message_id: message_id.clone(),
                    },
                });
                return (
                    SendStatus::Sent {
                        transport: transport.name().to_string(),
                        message_id,
                    },
                    attempts,
                );
            }
            Err(err) => {
                log::warn!("Transport {} failed for {}: {err}", transport.name(), email.to);
                attempts.push(TransportAttempt {
                    transport: transport.name().to_string(),
                    outcome: AttemptOutcome::Failed {
                        error: err.to_string(),
                    },
                });
            }
        }
    }

    let error = match attempts.last() {
        Some(TransportAttempt {
            outcome: AttemptOutcome::Failed { error },
            ..
        }) => error.clone(),
        _ => "no email transport configured".to_string(),
    };
    (SendStatus::Error { error }, attempts)
}

fn record_send<R>(
    repo: &R,
    user: &AuthenticatedUser,
    lead: &Lead,
    token: &str,
    status: &SendStatus,
    activity_type: ActivityType,
    detail: serde_json::Value,
) -> ServiceResult<()>
where
    R: LeadWriter + ActivityWriter + ?Sized,
{
    let outreach_status = match status {
        SendStatus::Sent { .. } => "sent",
        SendStatus::Error { .. } => "failed",
        SendStatus::Skipped { .. } => return Ok(()),
    };

    repo.mark_lead_outreach(
        lead.id,
        &OutreachUpdate {
            outreach_status: outreach_status.to_string(),
            outreach_token: token.to_string(),
            last_contacted_at: Utc::now().naive_utc(),
        },
    )?;
    repo.log_activity(&NewActivityLog {
        hub_id: user.hub_id,
        lead_id: Some(lead.id),
        actor: user.email.clone(),
        activity_type,
        detail,
    })?;
    Ok(())
}

/// Sends one email batch. The returned report holds exactly one result per
/// requested lead ID, in request order.
pub async fn send_email_batch<R>(
    repo: &R,
    user: &AuthenticatedUser,
    transports: &[Box<dyn EmailTransport>],
    generator: &dyn TextGenerator,
    tera: &Tera,
    batch: EmailBatch,
) -> ServiceResult<BatchReport>
where
    R: LeadReader + LeadWriter + ActivityWriter + ?Sized,
{
    if !user.has_role(crate::SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let mut report = BatchReport::default();

    for &lead_id in &batch.lead_ids {
        let result = send_one_email(repo, user, transports, generator, tera, &batch, lead_id)
            .await?;
        report.push(result);
    }

    Ok(report)
}

async fn send_one_email<R>(
    repo: &R,
    user: &AuthenticatedUser,
    transports: &[Box<dyn EmailTransport>],
    generator: &dyn TextGenerator,
    tera: &Tera,
    batch: &EmailBatch,
    lead_id: i32,
) -> ServiceResult<LeadSendResult>
where
    R: LeadReader + LeadWriter + ActivityWriter + ?Sized,
{
    let skipped = |reason| LeadSendResult {
        lead_id,
        status: SendStatus::Skipped { reason },
        attempts: vec![],
    };

    let Some(lead) = repo.get_lead_by_id(lead_id, user.hub_id)? else {
        return Ok(skipped(SkipReason::MissingLead));
    };
    if lead.unsubscribed {
        return Ok(skipped(SkipReason::Unsubscribed));
    }
    let Some(to) = lead.email.clone() else {
        return Ok(skipped(SkipReason::NoEmail));
    };

    let token = new_token();

    let copy = match resolve_copy(generator, batch, &lead).await {
        Ok(copy) => copy,
        Err(err) => {
            return Ok(LeadSendResult {
                lead_id,
                status: SendStatus::Error {
                    error: err.to_string(),
                },
                attempts: vec![],
            });
        }
    };
    let body_html = match render_email(tera, &lead, &copy) {
        Ok(html) => html,
        Err(err) => {
            return Ok(LeadSendResult {
                lead_id,
                status: SendStatus::Error {
                    error: err.to_string(),
                },
                attempts: vec![],
            });
        }
    };

    if batch.dry_run {
        return Ok(LeadSendResult {
            lead_id,
            status: SendStatus::Sent {
                transport: "dry_run".to_string(),
                message_id: token,
            },
            attempts: vec![],
        });
    }

    let email = OutboundEmail {
        to,
        to_name: lead.name.clone(),
        subject: copy.subject.clone(),
        body_html,
        token: token.clone(),
    };
    let (status, attempts) = deliver_email(transports, &email).await;

    if let Err(err) = record_send(
        repo,
        user,
        &lead,
        &token,
        &status,
        ActivityType::OutreachEmail,
        serde_json::json!({
            "token": token,
            "subject": copy.subject,
            "status": status,
        }),
    ) {
        log::error!("Outreach bookkeeping failed for lead {lead_id}: {err}");
        return Ok(LeadSendResult {
            lead_id,
            status: SendStatus::Error {
                error: format!("bookkeeping failed: {err}"),
            },
            attempts,
        });
    }

    Ok(LeadSendResult {
        lead_id,
        status,
        attempts,
    })
}

/// Sends one SMS batch through the configured gateway.
pub async fn send_sms_batch<R>(
    repo: &R,
    user: &AuthenticatedUser,
    gateway: Option<&dyn SmsGateway>,
    batch: SmsBatch,
) -> ServiceResult<BatchReport>
where
    R: LeadReader + LeadWriter + ActivityWriter + ?Sized,
{
    if !user.has_role(crate::SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let mut report = BatchReport::default();

    for &lead_id in &batch.lead_ids {
        let result = send_one_sms(repo, user, gateway, &batch, lead_id).await?;
        report.push(result);
    }

    Ok(report)
}

async fn send_one_sms<R>(
    repo: &R,
    user: &AuthenticatedUser,
    gateway: Option<&dyn SmsGateway>,
    batch: &SmsBatch,
    lead_id: i32,
) -> ServiceResult<LeadSendResult>
where
    R: LeadReader + LeadWriter + ActivityWriter + ?Sized,
{
    let skipped = |reason| LeadSendResult {
        lead_id,
        status: SendStatus::Skipped { reason },
        attempts: vec![],
    };

    let Some(lead) = repo.get_lead_by_id(lead_id, user.hub_id)? else {
        return Ok(skipped(SkipReason::MissingLead));
    };
    if lead.unsubscribed {
        return Ok(skipped(SkipReason::Unsubscribed));
    }
    let Some(to) = lead.phone.clone() else {
        return Ok(skipped(SkipReason::NoPhone));
    };

    let token = new_token();

    if batch.dry_run {
        return Ok(LeadSendResult {
            lead_id,
            status: SendStatus::Sent {
                transport: "dry_run".to_string(),
                message_id: token,
            },
            attempts: vec![],
        });
    }

    let Some(gateway) = gateway else {
        return Ok(LeadSendResult {
            lead_id,
            status: SendStatus::Error {
                error: "no sms gateway configured".to_string(),
            },
            attempts: vec![],
        });
    };

    let sms = OutboundSms {
        to,
        body: batch.body.clone(),
        token: token.clone(),
    };
    let (status, attempts) = match gateway.send(&sms).await {
        Ok(message_id) => (
            SendStatus::Sent {
                transport: gateway.name().to_string(),
                message_id: message_id.clone(),
            },
            vec![TransportAttempt {
                transport: gateway.name().to_string(),
                outcome: AttemptOutcome::Delivered { message_id },
            }],
        ),
        Err(err) => (
            SendStatus::Error {
                error: err.to_string(),
            },
            vec![TransportAttempt {
                transport: gateway.name().to_string(),
                outcome: AttemptOutcome::Failed {
                    error: err.to_string(),
                },
            }],
        ),
    };

    if let Err(err) = record_send(
        repo,
        user,
        &lead,
        &token,
        &status,
        ActivityType::OutreachSms,
        serde_json::json!({
            "token": token,
            "status": status,
        }),
    ) {
        log::error!("Outreach bookkeeping failed for lead {lead_id}: {err}");
        return Ok(LeadSendResult {
            lead_id,
            status: SendStatus::Error {
                error: format!("bookkeeping failed: {err}"),
            },
            attempts,
        });
    }

    Ok(LeadSendResult {
        lead_id,
        status,
        attempts,
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use futures_util::stream::{self, BoxStream, StreamExt};
    use mockall::predicate::eq;

    use super::*;
    use crate::ai::AiError;
    use crate::domain::chat::ChatTurn;
    use crate::domain::lead::LeadStatus;
    use crate::repository::mock::MockRepository;
    use crate::transport::TransportError;

    struct StaticTransport {
        name: &'static str,
        ok: bool,
    }

    #[async_trait]
    impl EmailTransport for StaticTransport {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError> {
            if self.ok {
                Ok(format!("{}-{}", self.name, email.token))
            } else {
                Err(TransportError::Rejected {
                    status: 500,
                    body: "down".to_string(),
                })
            }
        }
    }

    struct StubGenerator;

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, AiError> {
            Ok("Quick question\n\n<p>Hi there</p>".to_string())
        }

        async fn stream_chat(
            &self,
            _system: &str,
            _history: &[ChatTurn],
        ) -> Result<BoxStream<'static, Result<String, AiError>>, AiError> {
            Ok(stream::empty().boxed())
        }
    }

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

    fn lead(id: i32, email: Option<&str>, unsubscribed: bool) -> Lead {
        let now = Utc::now().naive_utc();
        Lead {
            id,
            hub_id: 1,
            name: format!("Lead {id}"),
            email: email.map(str::to_string),
            phone: None,
            company: None,
            status: LeadStatus::New,
            unsubscribed,
            outreach_status: None,
            outreach_token: None,
            last_contacted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn tera() -> Tera {
        let mut tera = Tera::default();
        tera.add_raw_template(EMAIL_TEMPLATE, "<div>{{ body | safe }}</div>")
            .unwrap();
        tera
    }

    #[actix_web::test]
    async fn batch_report_has_one_result_per_requested_lead() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id()
            .with(eq(1), eq(1))
            .returning(|_, _| Ok(None));
        repo.expect_get_lead_by_id()
            .with(eq(2), eq(1))
            .returning(|_, _| Ok(Some(lead(2, Some("a@b.c"), true))));
        repo.expect_get_lead_by_id()
            .with(eq(3), eq(1))
            .returning(|_, _| Ok(Some(lead(3, Some("c@d.e"), false))));
        repo.expect_mark_lead_outreach().returning(|id, _| {
            let mut l = lead(id, Some("c@d.e"), false);
            l.outreach_status = Some("sent".to_string());
            Ok(l)
        });
        repo.expect_log_activity().returning(|new| {
            Ok(crate::domain::activity::ActivityLog {
                id: 1,
                hub_id: new.hub_id,
                lead_id: new.lead_id,
                actor: new.actor.clone(),
                activity_type: new.activity_type.clone(),
                detail: new.detail.clone(),
                created_at: Utc::now().naive_utc(),
            })
        });

        let transports: Vec<Box<dyn EmailTransport>> = vec![
            Box::new(StaticTransport {
                name: "ses",
                ok: false,
            }),
            Box::new(StaticTransport {
                name: "smtp_relay",
                ok: true,
            }),
        ];

        let report = send_email_batch(
            &repo,
            &user(),
            &transports,
            &StubGenerator,
            &tera(),
            EmailBatch {
                lead_ids: vec![1, 2, 3],
                subject: None,
                body_html: None,
                prompt: None,
                dry_run: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.results.len(), 3);
        assert_eq!((report.sent, report.skipped, report.failed), (1, 2, 0));

        let sent = &report.results[2];
        assert_eq!(sent.attempts.len(), 2);
        assert!(matches!(
            sent.attempts[0].outcome,
            AttemptOutcome::Failed { .. }
        ));
        assert!(matches!(
            sent.status,
            SendStatus::Sent { ref transport, .. } if transport == "smtp_relay"
        ));
    }

    #[actix_web::test]
    async fn dry_run_does_not_touch_transports_or_repo_writes() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id()
            .returning(|id, _| Ok(Some(lead(id, Some("a@b.c"), false))));
        repo.expect_mark_lead_outreach().never();
        repo.expect_log_activity().never();

        let transports: Vec<Box<dyn EmailTransport>> = vec![Box::new(StaticTransport {
            name: "ses",
            ok: false,
        })];

        let report = send_email_batch(
            &repo,
            &user(),
            &transports,
            &StubGenerator,
            &tera(),
            EmailBatch {
                lead_ids: vec![7],
                subject: Some("S".to_string()),
                body_html: Some("<p>B</p>".to_string()),
                prompt: None,
                dry_run: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.sent, 1);
        assert!(report.results[0].attempts.is_empty());
    }

    #[actix_web::test]
    async fn all_transports_failing_yields_error_with_full_trail() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id()
            .returning(|id, _| Ok(Some(lead(id, Some("a@b.c"), false))));
        repo.expect_mark_lead_outreach().returning(|id, _| {
            let mut l = lead(id, Some("a@b.c"), false);
            l.outreach_status = Some("failed".to_string());
            Ok(l)
        });
        repo.expect_log_activity().returning(|new| {
            Ok(crate::domain::activity::ActivityLog {
                id: 1,
                hub_id: new.hub_id,
                lead_id: new.lead_id,
                actor: new.actor.clone(),
                activity_type: new.activity_type.clone(),
                detail: new.detail.clone(),
                created_at: Utc::now().naive_utc(),
            })
        });

        let transports: Vec<Box<dyn EmailTransport>> = vec![
            Box::new(StaticTransport {
                name: "ses",
                ok: false,
            }),
            Box::new(StaticTransport {
                name: "gmail",
                ok: false,
            }),
        ];

        let report = send_email_batch(
            &repo,
            &user(),
            &transports,
            &StubGenerator,
            &tera(),
            EmailBatch {
                lead_ids: vec![4],
                subject: Some("S".to_string()),
                body_html: Some("<p>B</p>".to_string()),
                prompt: None,
                dry_run: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.results[0].attempts.len(), 2);
        assert!(matches!(report.results[0].status, SendStatus::Error { .. }));
    }

    #[actix_web::test]
    async fn render_failure_for_one_lead_does_not_abort_the_batch() {
        let mut repo = MockRepository::new();
        // Lead 2 has no company, so the template below fails for it.
        repo.expect_get_lead_by_id()
            .with(eq(2), eq(1))
            .returning(|_, _| Ok(Some(lead(2, Some("c@d.e"), false))));
        repo.expect_get_lead_by_id()
            .with(eq(1), eq(1))
            .returning(|_, _| {
                let mut l = lead(1, Some("a@b.c"), false);
                l.company = Some("Acme".to_string());
                Ok(Some(l))
            });
        repo.expect_mark_lead_outreach()
            .with(eq(1), mockall::predicate::always())
            .returning(|id, _| {
                let mut l = lead(id, Some("a@b.c"), false);
                l.outreach_status = Some("sent".to_string());
                Ok(l)
            });
        repo.expect_log_activity().returning(|new| {
            Ok(crate::domain::activity::ActivityLog {
                id: 1,
                hub_id: new.hub_id,
                lead_id: new.lead_id,
                actor: new.actor.clone(),
                activity_type: new.activity_type.clone(),
                detail: new.detail.clone(),
                created_at: Utc::now().naive_utc(),
            })
        });

        let mut tera = Tera::default();
        tera.add_raw_template(EMAIL_TEMPLATE, "{{ company | upper }}{{ body | safe }}")
            .unwrap();

        let transports: Vec<Box<dyn EmailTransport>> = vec![Box::new(StaticTransport {
            name: "ses",
            ok: true,
        })];

        let report = send_email_batch(
            &repo,
            &user(),
            &transports,
            &StubGenerator,
            &tera,
            EmailBatch {
                lead_ids: vec![2, 1],
                subject: Some("S".to_string()),
                body_html: Some("<p>B</p>".to_string()),
                prompt: None,
                dry_run: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.results.len(), 2);
        assert!(matches!(report.results[0].status, SendStatus::Error { .. }));
        assert!(matches!(report.results[1].status, SendStatus::Sent { .. }));
        assert_eq!((report.sent, report.failed), (1, 1));
    }

    #[actix_web::test]
    async fn bookkeeping_failure_becomes_a_per_lead_error() {
        use crate::repository::errors::RepositoryError;

        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id()
            .returning(|id, _| Ok(Some(lead(id, Some("a@b.c"), false))));
        repo.expect_mark_lead_outreach()
            .with(eq(1), mockall::predicate::always())
            .returning(|_, _| Err(RepositoryError::DatabaseError("disk I/O error".to_string())));
        repo.expect_mark_lead_outreach()
            .with(eq(2), mockall::predicate::always())
            .returning(|id, _| {
                let mut l = lead(id, Some("a@b.c"), false);
                l.outreach_status = Some("sent".to_string());
                Ok(l)
            });
        repo.expect_log_activity().returning(|new| {
            Ok(crate::domain::activity::ActivityLog {
                id: 1,
                hub_id: new.hub_id,
                lead_id: new.lead_id,
                actor: new.actor.clone(),
                activity_type: new.activity_type.clone(),
                detail: new.detail.clone(),
                created_at: Utc::now().naive_utc(),
            })
        });

        let transports: Vec<Box<dyn EmailTransport>> = vec![Box::new(StaticTransport {
            name: "ses",
            ok: true,
        })];

        let report = send_email_batch(
            &repo,
            &user(),
            &transports,
            &StubGenerator,
            &tera(),
            EmailBatch {
                lead_ids: vec![1, 2],
                subject: Some("S".to_string()),
                body_html: Some("<p>B</p>".to_string()),
                prompt: None,
                dry_run: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.results.len(), 2);
        assert!(matches!(
            report.results[0].status,
            SendStatus::Error { ref error } if error.contains("bookkeeping")
        ));
        assert!(matches!(report.results[1].status, SendStatus::Sent { .. }));
    }

    #[actix_web::test]
    async fn sms_preview_requires_a_phone_number() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id()
            .returning(|id, _| Ok(Some(lead(id, Some("a@b.c"), false))));

        let err = preview_sms(&repo, &user(), &StubGenerator, 1, Some("hi"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[actix_web::test]
    async fn sms_preview_prefers_the_body_override() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id().returning(|id, _| {
            let mut l = lead(id, None, false);
            l.phone = Some("+15551234567".to_string());
            Ok(Some(l))
        });

        let preview = preview_sms(&repo, &user(), &StubGenerator, 1, Some("See you at 3"), None)
            .await
            .unwrap();
        assert_eq!(preview.to, "+15551234567");
        assert_eq!(preview.body, "See you at 3");
    }

    #[actix_web::test]
    async fn sms_batch_skips_leads_without_phone() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_by_id()
            .returning(|id, _| Ok(Some(lead(id, Some("a@b.c"), false))));

        let report = send_sms_batch(
            &repo,
            &user(),
            None,
            SmsBatch {
                lead_ids: vec![1, 2],
                body: "hi".to_string(),
                dry_run: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.skipped, 2);
        assert!(report.results.iter().all(|r| matches!(
            r.status,
            SendStatus::Skipped {
                reason: SkipReason::NoPhone
            }
        )));
    }
}
