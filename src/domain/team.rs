use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub plan_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Per-team AI provider settings used by outreach generation and chat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamAiConfig {
    pub team_id: i32,
    pub provider: String,
    pub model: String,
    pub api_base: Option<String>,
    pub temperature: f64,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpsertTeamAiConfig {
    pub provider: String,
    pub model: String,
    pub api_base: Option<String>,
    pub temperature: f64,
}

/// Customer portal settings for a team.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamPortal {
    pub team_id: i32,
    pub enabled: bool,
    pub domain: Option<String>,
    pub accent_color: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpsertTeamPortal {
    pub enabled: bool,
    pub domain: Option<String>,
    pub accent_color: Option<String>,
}
