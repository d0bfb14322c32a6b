use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    #[default]
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl OpportunityStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityStage::Prospecting => "prospecting",
            OpportunityStage::Qualification => "qualification",
            OpportunityStage::Proposal => "proposal",
            OpportunityStage::Negotiation => "negotiation",
            OpportunityStage::ClosedWon => "closed_won",
            OpportunityStage::ClosedLost => "closed_lost",
        }
    }
}

impl From<&str> for OpportunityStage {
    fn from(s: &str) -> Self {
        match s {
            "qualification" => OpportunityStage::Qualification,
            "proposal" => OpportunityStage::Proposal,
            "negotiation" => OpportunityStage::Negotiation,
            "closed_won" => OpportunityStage::ClosedWon,
            "closed_lost" => OpportunityStage::ClosedLost,
            _ => OpportunityStage::Prospecting,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Opportunity {
    pub id: i32,
    pub hub_id: i32,
    pub account_id: Option<i32>,
    pub name: String,
    pub stage: OpportunityStage,
    pub amount_cents: i64,
    pub close_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOpportunity {
    pub hub_id: i32,
    pub account_id: Option<i32>,
    pub name: String,
    pub stage: OpportunityStage,
    pub amount_cents: i64,
    pub close_date: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateOpportunity {
    pub name: String,
    pub stage: OpportunityStage,
    pub amount_cents: i64,
    pub close_date: Option<NaiveDateTime>,
}
