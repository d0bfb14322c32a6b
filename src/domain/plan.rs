use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::normalize_opt;

/// Billing plan offered to teams.
///
/// Deleting a plan archives it: team rows that reference the plan keep their
/// `plan_id`, and team reads tolerate an archived or missing plan.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub monthly_price_cents: i64,
    pub archived: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPlan {
    pub name: String,
    pub description: Option<String>,
    pub monthly_price_cents: i64,
}

impl NewPlan {
    #[must_use]
    pub fn new(name: String, description: Option<String>, monthly_price_cents: i64) -> Self {
        Self {
            name: name.trim().to_string(),
            description: normalize_opt(description),
            monthly_price_cents,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePlan {
    pub name: String,
    pub description: Option<String>,
    pub monthly_price_cents: i64,
}
