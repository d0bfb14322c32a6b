use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::opportunity::{
    NewOpportunity as DomainNewOpportunity, Opportunity as DomainOpportunity, OpportunityStage,
    UpdateOpportunity as DomainUpdateOpportunity,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::opportunities)]
pub struct Opportunity {
    pub id: i32,
    pub hub_id: i32,
    pub account_id: Option<i32>,
    pub name: String,
    pub stage: String,
    pub amount_cents: i64,
    pub close_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::opportunities)]
pub struct NewOpportunity<'a> {
    pub hub_id: i32,
    pub account_id: Option<i32>,
    pub name: &'a str,
    pub stage: &'a str,
    pub amount_cents: i64,
    pub close_date: Option<NaiveDateTime>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::opportunities)]
pub struct UpdateOpportunity<'a> {
    pub name: &'a str,
    pub stage: &'a str,
    pub amount_cents: i64,
    pub close_date: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

impl From<Opportunity> for DomainOpportunity {
    fn from(o: Opportunity) -> Self {
        Self {
            id: o.id,
            hub_id: o.hub_id,
            account_id: o.account_id,
            name: o.name,
            stage: OpportunityStage::from(o.stage.as_str()),
            amount_cents: o.amount_cents,
            close_date: o.close_date,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewOpportunity> for NewOpportunity<'a> {
    fn from(o: &'a DomainNewOpportunity) -> Self {
        Self {
            hub_id: o.hub_id,
            account_id: o.account_id,
            name: o.name.as_str(),
            stage: o.stage.as_str(),
            amount_cents: o.amount_cents,
            close_date: o.close_date,
        }
    }
}

impl<'a> From<&'a DomainUpdateOpportunity> for UpdateOpportunity<'a> {
    fn from(o: &'a DomainUpdateOpportunity) -> Self {
        Self {
            name: o.name.as_str(),
            stage: o.stage.as_str(),
            amount_cents: o.amount_cents,
            close_date: o.close_date,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
