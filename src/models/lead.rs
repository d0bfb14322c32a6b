use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead::{
    Lead as DomainLead, LeadStatus, NewLead as DomainNewLead, OutreachUpdate,
    UpdateLead as DomainUpdateLead,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::leads)]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: String,
    pub unsubscribed: bool,
    pub outreach_status: Option<String>,
    pub outreach_token: Option<String>,
    pub last_contacted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
pub struct NewLead<'a> {
    pub hub_id: i32,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub company: Option<&'a str>,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::leads)]
pub struct UpdateLead<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub company: Option<&'a str>,
    pub status: &'a str,
    pub unsubscribed: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::leads)]
/// Outreach bookkeeping written back after a delivery.
pub struct LeadOutreachUpdate<'a> {
    pub outreach_status: &'a str,
    pub outreach_token: &'a str,
    pub last_contacted_at: NaiveDateTime,
}

impl From<Lead> for DomainLead {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            hub_id: lead.hub_id,
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            company: lead.company,
            status: LeadStatus::from(lead.status.as_str()),
            unsubscribed: lead.unsubscribed,
            outreach_status: lead.outreach_status,
            outreach_token: lead.outreach_token,
            last_contacted_at: lead.last_contacted_at,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewLead> for NewLead<'a> {
    fn from(lead: &'a DomainNewLead) -> Self {
        Self {
            hub_id: lead.hub_id,
            name: lead.name.as_str(),
            email: lead.email.as_deref(),
            phone: lead.phone.as_deref(),
            company: lead.company.as_deref(),
            status: lead.status.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateLead> for UpdateLead<'a> {
    fn from(lead: &'a DomainUpdateLead) -> Self {
        Self {
            name: lead.name.as_str(),
            email: lead.email.as_deref(),
            phone: lead.phone.as_deref(),
            company: lead.company.as_deref(),
            status: lead.status.as_str(),
            unsubscribed: lead.unsubscribed,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl<'a> From<&'a OutreachUpdate> for LeadOutreachUpdate<'a> {
    fn from(update: &'a OutreachUpdate) -> Self {
        Self {
            outreach_status: update.outreach_status.as_str(),
            outreach_token: update.outreach_token.as_str(),
            last_contacted_at: update.last_contacted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn lead_into_domain_parses_status() {
        let now = Utc::now().naive_utc();
        let db_lead = Lead {
            id: 1,
            hub_id: 2,
            name: "n".into(),
            email: Some("e@x.io".into()),
            phone: None,
            company: None,
            status: "qualified".into(),
            unsubscribed: false,
            outreach_status: None,
            outreach_token: None,
            last_contacted_at: None,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainLead = db_lead.into();
        assert_eq!(domain.status, LeadStatus::Qualified);
        assert_eq!(domain.email.as_deref(), Some("e@x.io"));
    }
}
