//! Typed results for the outreach send pipeline.
//!
//! The pipeline walks an explicit ordered list of transports and records a
//! typed attempt per transport, so a batch report always explains exactly
//! what was tried for every requested lead.

use serde::{Deserialize, Serialize};

/// Fully-resolved outbound email handed to a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundEmail {
    pub to: String,
    pub to_name: String,
    pub subject: String,
    /// Rendered HTML body.
    pub body_html: String,
    /// Idempotency token attached to this send. One token per lead per
    /// batch, recorded in the activity trail so an inconclusive transport
    /// error can be reconciled against a delivered message.
    pub token: String,
}

/// Outbound SMS handed to the gateway.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundSms {
    pub to: String,
    pub body: String,
    pub token: String,
}

/// Why a requested lead was skipped without any delivery attempt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingLead,
    Unsubscribed,
    NoEmail,
    NoPhone,
}

/// Result of one transport attempt within the waterfall.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransportAttempt {
    pub transport: String,
    pub outcome: AttemptOutcome,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AttemptOutcome {
    Delivered { message_id: String },
    Failed { error: String },
}

/// Per-lead result. Exactly one of these exists per requested lead ID.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SendStatus {
    Sent {
        transport: String,
        message_id: String,
    },
    Skipped {
        reason: SkipReason,
    },
    Error {
        error: String,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LeadSendResult {
    pub lead_id: i32,
    #[serde(flatten)]
    pub status: SendStatus,
    /// Trail of transport attempts made for this lead, in order.
    pub attempts: Vec<TransportAttempt>,
}

/// Report for a whole batch. `results.len()` always equals the number of
/// requested lead IDs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct BatchReport {
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
    pub results: Vec<LeadSendResult>,
}

impl BatchReport {
    pub fn push(&mut self, result: LeadSendResult) {
        match result.status {
            SendStatus::Sent { .. } => self.sent += 1,
            SendStatus::Skipped { .. } => self.skipped += 1,
            SendStatus::Error { .. } => self.failed += 1,
        }
        self.results.push(result);
    }
}

/// Resolved SMS preview: recipient and body, nothing sent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SmsPreview {
    pub to: String,
    pub body: String,
}

/// Subject/body pair produced by the AI generator or an override template.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedCopy {
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_follow_statuses() {
        let mut report = BatchReport::default();
        report.push(LeadSendResult {
            lead_id: 1,
            status: SendStatus::Sent {
                transport: "ses".into(),
                message_id: "m1".into(),
            },
            attempts: vec![],
        });
        report.push(LeadSendResult {
            lead_id: 2,
            status: SendStatus::Skipped {
                reason: SkipReason::Unsubscribed,
            },
            attempts: vec![],
        });
        report.push(LeadSendResult {
            lead_id: 3,
            status: SendStatus::Error {
                error: "boom".into(),
            },
            attempts: vec![],
        });
        assert_eq!((report.sent, report.skipped, report.failed), (1, 1, 1));
        assert_eq!(report.results.len(), 3);
    }
}
