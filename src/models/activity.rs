use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::activity::{
    ActivityLog as DomainActivityLog, ActivityType, NewActivityLog as DomainNewActivityLog,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::activity_logs)]
pub struct ActivityLog {
    pub id: i32,
    pub hub_id: i32,
    pub lead_id: Option<i32>,
    pub actor: String,
    pub activity_type: String,
    /// JSON text in the DB.
    pub detail: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::activity_logs)]
pub struct NewActivityLog {
    pub hub_id: i32,
    pub lead_id: Option<i32>,
    pub actor: String,
    pub activity_type: String,
    pub detail: String,
}

impl From<ActivityLog> for DomainActivityLog {
    fn from(log: ActivityLog) -> Self {
        let detail = serde_json::from_str(&log.detail).unwrap_or_default();
        Self {
            id: log.id,
            hub_id: log.hub_id,
            lead_id: log.lead_id,
            actor: log.actor,
            activity_type: ActivityType::from(log.activity_type.as_str()),
            detail,
            created_at: log.created_at,
        }
    }
}

impl From<&DomainNewActivityLog> for NewActivityLog {
    fn from(log: &DomainNewActivityLog) -> Self {
        Self {
            hub_id: log.hub_id,
            lead_id: log.lead_id,
            actor: log.actor.clone(),
            activity_type: log.activity_type.as_str().to_string(),
            detail: log.detail.to_string(),
        }
    }
}
