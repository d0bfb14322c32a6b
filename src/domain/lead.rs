use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{normalize_opt, normalize_opt_email, normalize_opt_phone};

/// Lifecycle stage of a lead.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }
}

impl From<&str> for LeadStatus {
    fn from(s: &str) -> Self {
        match s {
            "contacted" => LeadStatus::Contacted,
            "qualified" => LeadStatus::Qualified,
            "converted" => LeadStatus::Converted,
            "lost" => LeadStatus::Lost,
            _ => LeadStatus::New,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: LeadStatus,
    pub unsubscribed: bool,
    /// Status of the last outreach attempt, if any.
    pub outreach_status: Option<String>,
    /// Idempotency token attached to the last outreach send.
    pub outreach_token: Option<String>,
    pub last_contacted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewLead {
    pub hub_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: LeadStatus,
}

impl NewLead {
    #[must_use]
    pub fn new(
        hub_id: i32,
        name: String,
        email: Option<String>,
        phone: Option<String>,
        company: Option<String>,
    ) -> Self {
        Self {
            hub_id,
            name: name.trim().to_string(),
            email: normalize_opt_email(email),
            phone: normalize_opt_phone(phone),
            company: normalize_opt(company),
            status: LeadStatus::New,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateLead {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: LeadStatus,
    pub unsubscribed: bool,
}

impl UpdateLead {
    #[must_use]
    pub fn new(
        name: String,
        email: Option<String>,
        phone: Option<String>,
        company: Option<String>,
        status: LeadStatus,
        unsubscribed: bool,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_opt_email(email),
            phone: normalize_opt_phone(phone),
            company: normalize_opt(company),
            status,
            unsubscribed,
        }
    }
}

/// Outreach bookkeeping written back after a send attempt.
#[derive(Clone, Debug)]
pub struct OutreachUpdate {
    pub outreach_status: String,
    pub outreach_token: String,
    pub last_contacted_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lead_normalizes_contact_fields() {
        let lead = NewLead::new(
            1,
            " Jane ".into(),
            Some(" Jane@Corp.IO ".into()),
            Some("  ".into()),
            None,
        );
        assert_eq!(lead.name, "Jane");
        assert_eq!(lead.email.as_deref(), Some("jane@corp.io"));
        assert!(lead.phone.is_none());
        assert_eq!(lead.status, LeadStatus::New);
    }

    #[test]
    fn new_lead_normalizes_phone_to_e164() {
        let lead = NewLead::new(
            1,
            "Jane".into(),
            None,
            Some("+1 415 555 2671".into()),
            None,
        );
        assert_eq!(lead.phone.as_deref(), Some("+14155552671"));

        // Unparseable values are kept trimmed rather than dropped.
        let lead = NewLead::new(1, "Jane".into(), None, Some(" ext. 42 ".into()), None);
        assert_eq!(lead.phone.as_deref(), Some("ext. 42"));
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Converted,
            LeadStatus::Lost,
        ] {
            assert_eq!(LeadStatus::from(status.as_str()), status);
        }
    }
}
