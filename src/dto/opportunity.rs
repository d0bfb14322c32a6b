use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::opportunity::{NewOpportunity, OpportunityStage, UpdateOpportunity};

#[derive(Debug, Deserialize, Validate)]
pub struct SaveOpportunityRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub account_id: Option<i32>,
    #[serde(default)]
    pub stage: OpportunityStage,
    #[validate(range(min = 0))]
    pub amount_cents: i64,
    pub close_date: Option<NaiveDateTime>,
}

impl SaveOpportunityRequest {
    pub fn to_new_opportunity(&self, hub_id: i32) -> NewOpportunity {
        NewOpportunity {
            hub_id,
            account_id: self.account_id,
            name: self.name.trim().to_string(),
            stage: self.stage,
            amount_cents: self.amount_cents,
            close_date: self.close_date,
        }
    }

    pub fn to_update(&self) -> UpdateOpportunity {
        UpdateOpportunity {
            name: self.name.trim().to_string(),
            stage: self.stage,
            amount_cents: self.amount_cents,
            close_date: self.close_date,
        }
    }
}
