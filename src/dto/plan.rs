use serde::Deserialize;
use validator::Validate;

use crate::domain::plan::{NewPlan, UpdatePlan};

#[derive(Debug, Deserialize, Validate)]
pub struct SavePlanRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub monthly_price_cents: i64,
}

impl SavePlanRequest {
    pub fn to_new_plan(&self) -> NewPlan {
        NewPlan::new(
            self.name.clone(),
            self.description.clone(),
            self.monthly_price_cents,
        )
    }

    pub fn to_update(&self) -> UpdatePlan {
        UpdatePlan {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            monthly_price_cents: self.monthly_price_cents,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPlansQuery {
    #[serde(default)]
    pub include_archived: bool,
}
