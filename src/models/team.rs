use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::team::{
    Team as DomainTeam, TeamAiConfig as DomainTeamAiConfig, TeamPortal as DomainTeamPortal,
    UpsertTeamAiConfig, UpsertTeamPortal,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::teams)]
pub struct Team {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub plan_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::teams)]
pub struct NewTeam<'a> {
    pub hub_id: i32,
    pub name: &'a str,
    pub plan_id: Option<i32>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::team_ai_configs)]
#[diesel(primary_key(team_id))]
pub struct TeamAiConfig {
    pub team_id: i32,
    pub provider: String,
    pub model: String,
    pub api_base: Option<String>,
    pub temperature: f64,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::team_portals)]
#[diesel(primary_key(team_id))]
pub struct TeamPortal {
    pub team_id: i32,
    pub enabled: bool,
    pub domain: Option<String>,
    pub accent_color: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<Team> for DomainTeam {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            hub_id: team.hub_id,
            name: team.name,
            plan_id: team.plan_id,
            created_at: team.created_at,
        }
    }
}

impl From<TeamAiConfig> for DomainTeamAiConfig {
    fn from(cfg: TeamAiConfig) -> Self {
        Self {
            team_id: cfg.team_id,
            provider: cfg.provider,
            model: cfg.model,
            api_base: cfg.api_base,
            temperature: cfg.temperature,
            updated_at: cfg.updated_at,
        }
    }
}

impl TeamAiConfig {
    pub fn from_upsert(team_id: i32, upsert: &UpsertTeamAiConfig) -> Self {
        Self {
            team_id,
            provider: upsert.provider.clone(),
            model: upsert.model.clone(),
            api_base: upsert.api_base.clone(),
            temperature: upsert.temperature,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<TeamPortal> for DomainTeamPortal {
    fn from(portal: TeamPortal) -> Self {
        Self {
            team_id: portal.team_id,
            enabled: portal.enabled,
            domain: portal.domain,
            accent_color: portal.accent_color,
            updated_at: portal.updated_at,
        }
    }
}

impl TeamPortal {
    pub fn from_upsert(team_id: i32, upsert: &UpsertTeamPortal) -> Self {
        Self {
            team_id,
            enabled: upsert.enabled,
            domain: upsert.domain.clone(),
            accent_color: upsert.accent_color.clone(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
