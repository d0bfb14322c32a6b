//! Persistence traits and their Diesel-backed implementation.
//!
//! Routes and services depend on the reader/writer traits only; the
//! [`DieselRepository`] implements all of them over a pooled SQLite
//! connection. Every tenant-owned query is scoped by `hub_id`.

use crate::db::DbPool;
use crate::domain::account::{Account, Contact, NewAccount, NewContact, UpdateAccount};
use crate::domain::activity::{ActivityLog, NewActivityLog};
use crate::domain::board::{Board, BoardMember, NewBoard, NewBoardMember};
use crate::domain::chat::{ChatMessage, ChatSession, NewChatMessage};
use crate::domain::cms::{CmsPage, NewCmsPage, UpdateCmsPage};
use crate::domain::custom_schema::{
    CustomField, CustomObject, NewCustomField, NewCustomObject, NewPageLayout, PageLayout,
};
use crate::domain::document::{Document, NewDocument};
use crate::domain::lead::{Lead, NewLead, OutreachUpdate, UpdateLead};
use crate::domain::message::{Message, NewMessage};
use crate::domain::opportunity::{NewOpportunity, Opportunity, UpdateOpportunity};
use crate::domain::plan::{NewPlan, Plan, UpdatePlan};
use crate::domain::quote::{NewQuote, NewQuoteItem, Quote, QuoteItem, QuoteStatus};
use crate::domain::team::{Team, TeamAiConfig, TeamPortal, UpsertTeamAiConfig, UpsertTeamPortal};
use crate::repository::errors::RepositoryResult;

pub mod account;
pub mod activity;
pub mod board;
pub mod chat;
pub mod cms;
pub mod custom_schema;
pub mod document;
pub mod errors;
pub mod lead;
pub mod message;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod opportunity;
pub mod plan;
pub mod quote;
pub mod team;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone)]
pub struct LeadListQuery {
    pub hub_id: i32,
    pub status: Option<String>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl LeadListQuery {
    pub fn new(hub_id: i32) -> Self {
        Self {
            hub_id,
            status: None,
            search: None,
            pagination: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait LeadReader {
    fn get_lead_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Lead>>;
    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)>;
}

pub trait LeadWriter {
    fn create_leads(&self, new_leads: &[NewLead]) -> RepositoryResult<usize>;
    fn update_lead(&self, id: i32, hub_id: i32, updates: &UpdateLead) -> RepositoryResult<Lead>;
    fn delete_lead(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
    fn mark_lead_outreach(&self, id: i32, update: &OutreachUpdate) -> RepositoryResult<Lead>;
}

pub trait AccountReader {
    fn get_account_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Account>>;
    fn list_accounts(&self, hub_id: i32) -> RepositoryResult<Vec<Account>>;
    fn list_contacts(&self, account_id: i32, hub_id: i32) -> RepositoryResult<Vec<Contact>>;
}

pub trait AccountWriter {
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account>;
    fn update_account(
        &self,
        id: i32,
        hub_id: i32,
        updates: &UpdateAccount,
    ) -> RepositoryResult<Account>;
    fn delete_account(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
    fn delete_contact(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
}

pub trait OpportunityReader {
    fn get_opportunity_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Opportunity>>;
    fn list_opportunities(&self, hub_id: i32) -> RepositoryResult<Vec<Opportunity>>;
}

pub trait OpportunityWriter {
    fn create_opportunity(&self, new: &NewOpportunity) -> RepositoryResult<Opportunity>;
    fn update_opportunity(
        &self,
        id: i32,
        hub_id: i32,
        updates: &UpdateOpportunity,
    ) -> RepositoryResult<Opportunity>;
    fn delete_opportunity(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
}

pub trait QuoteReader {
    fn get_quote_with_items(
        &self,
        id: i32,
        hub_id: i32,
    ) -> RepositoryResult<Option<(Quote, Vec<QuoteItem>)>>;
    fn list_quotes(&self, hub_id: i32) -> RepositoryResult<Vec<Quote>>;
}

pub trait QuoteWriter {
    /// Creates the quote and its line items in one transaction.
    fn create_quote(&self, new: &NewQuote, items: &[NewQuoteItem]) -> RepositoryResult<Quote>;
    /// Replaces title/status and the full line-item set.
    fn update_quote(
        &self,
        id: i32,
        hub_id: i32,
        title: &str,
        status: QuoteStatus,
        items: &[NewQuoteItem],
    ) -> RepositoryResult<Quote>;
    fn delete_quote(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
}

pub trait BoardReader {
    fn get_board_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Board>>;
    fn list_boards(&self, hub_id: i32) -> RepositoryResult<Vec<Board>>;
    fn list_board_members(&self, board_id: i32) -> RepositoryResult<Vec<BoardMember>>;
}

pub trait BoardWriter {
    fn create_board(&self, new: &NewBoard) -> RepositoryResult<Board>;
    fn add_board_member(&self, new: &NewBoardMember) -> RepositoryResult<BoardMember>;
    fn remove_board_member(&self, membership_id: i32, board_id: i32) -> RepositoryResult<()>;
}

pub trait DocumentReader {
    fn list_documents(
        &self,
        hub_id: i32,
        board_id: Option<i32>,
    ) -> RepositoryResult<Vec<Document>>;
}

pub trait DocumentWriter {
    fn create_document(&self, new: &NewDocument) -> RepositoryResult<Document>;
}

pub trait MessageReader {
    fn list_messages(&self, hub_id: i32, participant: &str) -> RepositoryResult<Vec<Message>>;
}

pub trait MessageWriter {
    fn create_message(&self, new: &NewMessage) -> RepositoryResult<Message>;
}

pub trait PlanReader {
    fn get_plan_by_id(&self, id: i32) -> RepositoryResult<Option<Plan>>;
    fn list_plans(&self, include_archived: bool) -> RepositoryResult<Vec<Plan>>;
}

pub trait PlanWriter {
    fn create_plan(&self, new: &NewPlan) -> RepositoryResult<Plan>;
    fn update_plan(&self, id: i32, updates: &UpdatePlan) -> RepositoryResult<Plan>;
    /// Archives the plan. Team rows referencing it are left untouched.
    fn archive_plan(&self, id: i32) -> RepositoryResult<()>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Team>>;
    fn list_teams(&self, hub_id: i32) -> RepositoryResult<Vec<Team>>;
    fn get_team_ai_config(&self, team_id: i32) -> RepositoryResult<Option<TeamAiConfig>>;
    fn get_team_portal(&self, team_id: i32) -> RepositoryResult<Option<TeamPortal>>;
}

pub trait TeamWriter {
    fn upsert_team_ai_config(
        &self,
        team_id: i32,
        config: &UpsertTeamAiConfig,
    ) -> RepositoryResult<TeamAiConfig>;
    fn upsert_team_portal(
        &self,
        team_id: i32,
        portal: &UpsertTeamPortal,
    ) -> RepositoryResult<TeamPortal>;
}

pub trait CustomSchemaReader {
    fn get_object_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<CustomObject>>;
    fn list_objects(&self, hub_id: i32) -> RepositoryResult<Vec<CustomObject>>;
    fn list_fields(&self, object_id: i32) -> RepositoryResult<Vec<CustomField>>;
    fn list_layouts(&self, object_id: i32) -> RepositoryResult<Vec<PageLayout>>;
}

pub trait CustomSchemaWriter {
    fn create_object(&self, new: &NewCustomObject) -> RepositoryResult<CustomObject>;
    fn update_object_label(
        &self,
        id: i32,
        hub_id: i32,
        label: &str,
    ) -> RepositoryResult<CustomObject>;
    /// Deletes the object together with its fields and layouts.
    fn delete_object(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
    fn create_field(&self, new: &NewCustomField) -> RepositoryResult<CustomField>;
    /// Deletes the field only when it belongs to the given object.
    fn delete_field(&self, id: i32, object_id: i32) -> RepositoryResult<()>;
    fn create_layout(&self, new: &NewPageLayout) -> RepositoryResult<PageLayout>;
    /// Deletes the layout only when it belongs to the given object.
    fn delete_layout(&self, id: i32, object_id: i32) -> RepositoryResult<()>;
}

pub trait ChatReader {
    fn get_session_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<ChatSession>>;
    fn list_session_messages(&self, session_id: i32) -> RepositoryResult<Vec<ChatMessage>>;
}

pub trait ChatWriter {
    fn create_session(
        &self,
        hub_id: i32,
        user_email: &str,
        title: Option<&str>,
    ) -> RepositoryResult<ChatSession>;
    fn create_chat_message(&self, new: &NewChatMessage) -> RepositoryResult<ChatMessage>;
}

pub trait ActivityReader {
    fn list_lead_activity(&self, lead_id: i32, hub_id: i32) -> RepositoryResult<Vec<ActivityLog>>;
}

pub trait ActivityWriter {
    fn log_activity(&self, new: &NewActivityLog) -> RepositoryResult<ActivityLog>;
}

pub trait CmsReader {
    fn get_page_by_slug(&self, slug: &str) -> RepositoryResult<Option<CmsPage>>;
    fn list_pages(&self, published_only: bool) -> RepositoryResult<Vec<CmsPage>>;
}

pub trait CmsWriter {
    fn create_page(&self, new: &NewCmsPage) -> RepositoryResult<CmsPage>;
    fn update_page(&self, id: i32, updates: &UpdateCmsPage) -> RepositoryResult<CmsPage>;
    fn delete_page(&self, id: i32) -> RepositoryResult<()>;
}
