use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::plan::{
    NewPlan as DomainNewPlan, Plan as DomainPlan, UpdatePlan as DomainUpdatePlan,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::plans)]
pub struct Plan {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub monthly_price_cents: i64,
    pub archived: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::plans)]
pub struct NewPlan<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub monthly_price_cents: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::plans)]
pub struct UpdatePlan<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub monthly_price_cents: i64,
}

impl From<Plan> for DomainPlan {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            description: plan.description,
            monthly_price_cents: plan.monthly_price_cents,
            archived: plan.archived,
            created_at: plan.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewPlan> for NewPlan<'a> {
    fn from(plan: &'a DomainNewPlan) -> Self {
        Self {
            name: plan.name.as_str(),
            description: plan.description.as_deref(),
            monthly_price_cents: plan.monthly_price_cents,
        }
    }
}

impl<'a> From<&'a DomainUpdatePlan> for UpdatePlan<'a> {
    fn from(plan: &'a DomainUpdatePlan) -> Self {
        Self {
            name: plan.name.as_str(),
            description: plan.description.as_deref(),
            monthly_price_cents: plan.monthly_price_cents,
        }
    }
}
