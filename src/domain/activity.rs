use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of activity recorded in the audit trail.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    OutreachEmail,
    OutreachSms,
    MessageSent,
    Note,
    Other(String),
}

impl ActivityType {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::OutreachEmail => "outreach_email",
            ActivityType::OutreachSms => "outreach_sms",
            ActivityType::MessageSent => "message_sent",
            ActivityType::Note => "note",
            ActivityType::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for ActivityType {
    fn from(s: &str) -> Self {
        match s {
            "outreach_email" => ActivityType::OutreachEmail,
            "outreach_sms" => ActivityType::OutreachSms,
            "message_sent" => ActivityType::MessageSent,
            "note" => ActivityType::Note,
            other => ActivityType::Other(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityLog {
    pub id: i32,
    pub hub_id: i32,
    pub lead_id: Option<i32>,
    pub actor: String,
    pub activity_type: ActivityType,
    pub detail: Value,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewActivityLog {
    pub hub_id: i32,
    pub lead_id: Option<i32>,
    pub actor: String,
    pub activity_type: ActivityType,
    pub detail: Value,
}
