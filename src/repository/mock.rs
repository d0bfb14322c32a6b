//! Mock repository implementations for isolating services in tests.

use mockall::mock;

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
use crate::repository::{
    AccountReader, AccountWriter, ActivityReader, ActivityWriter, BoardReader, BoardWriter,
    ChatReader, ChatWriter, CmsReader, CmsWriter, CustomSchemaReader, CustomSchemaWriter,
    DocumentReader, DocumentWriter, LeadListQuery, LeadReader, LeadWriter, MessageReader,
    MessageWriter, OpportunityReader, OpportunityWriter, PlanReader, PlanWriter, QuoteReader,
    QuoteWriter, TeamReader, TeamWriter,
};

mock! {
    pub Repository {}

    impl LeadReader for Repository {
        fn get_lead_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Lead>>;
        fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)>;
    }

    impl LeadWriter for Repository {
        fn create_leads(&self, new_leads: &[NewLead]) -> RepositoryResult<usize>;
        fn update_lead(&self, id: i32, hub_id: i32, updates: &UpdateLead) -> RepositoryResult<Lead>;
        fn delete_lead(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
        fn mark_lead_outreach(&self, id: i32, update: &OutreachUpdate) -> RepositoryResult<Lead>;
    }

    impl AccountReader for Repository {
        fn get_account_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Account>>;
        fn list_accounts(&self, hub_id: i32) -> RepositoryResult<Vec<Account>>;
        fn list_contacts(&self, account_id: i32, hub_id: i32) -> RepositoryResult<Vec<Contact>>;
    }

    impl AccountWriter for Repository {
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

    impl OpportunityReader for Repository {
        fn get_opportunity_by_id(
            &self,
            id: i32,
            hub_id: i32,
        ) -> RepositoryResult<Option<Opportunity>>;
        fn list_opportunities(&self, hub_id: i32) -> RepositoryResult<Vec<Opportunity>>;
    }

    impl OpportunityWriter for Repository {
        fn create_opportunity(&self, new: &NewOpportunity) -> RepositoryResult<Opportunity>;
        fn update_opportunity(
            &self,
            id: i32,
            hub_id: i32,
            updates: &UpdateOpportunity,
        ) -> RepositoryResult<Opportunity>;
        fn delete_opportunity(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
    }

    impl QuoteReader for Repository {
        fn get_quote_with_items(
            &self,
            id: i32,
            hub_id: i32,
        ) -> RepositoryResult<Option<(Quote, Vec<QuoteItem>)>>;
        fn list_quotes(&self, hub_id: i32) -> RepositoryResult<Vec<Quote>>;
    }

    impl QuoteWriter for Repository {
        fn create_quote(&self, new: &NewQuote, items: &[NewQuoteItem]) -> RepositoryResult<Quote>;
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

    impl BoardReader for Repository {
        fn get_board_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Board>>;
        fn list_boards(&self, hub_id: i32) -> RepositoryResult<Vec<Board>>;
        fn list_board_members(&self, board_id: i32) -> RepositoryResult<Vec<BoardMember>>;
    }

    impl BoardWriter for Repository {
        fn create_board(&self, new: &NewBoard) -> RepositoryResult<Board>;
        fn add_board_member(&self, new: &NewBoardMember) -> RepositoryResult<BoardMember>;
        fn remove_board_member(&self, membership_id: i32, board_id: i32) -> RepositoryResult<()>;
    }

    impl DocumentReader for Repository {
        fn list_documents(
            &self,
            hub_id: i32,
            board_id: Option<i32>,
        ) -> RepositoryResult<Vec<Document>>;
    }

    impl DocumentWriter for Repository {
        fn create_document(&self, new: &NewDocument) -> RepositoryResult<Document>;
    }

    impl MessageReader for Repository {
        fn list_messages(&self, hub_id: i32, participant: &str) -> RepositoryResult<Vec<Message>>;
    }

    impl MessageWriter for Repository {
        fn create_message(&self, new: &NewMessage) -> RepositoryResult<Message>;
    }

    impl PlanReader for Repository {
        fn get_plan_by_id(&self, id: i32) -> RepositoryResult<Option<Plan>>;
        fn list_plans(&self, include_archived: bool) -> RepositoryResult<Vec<Plan>>;
    }

    impl PlanWriter for Repository {
        fn create_plan(&self, new: &NewPlan) -> RepositoryResult<Plan>;
        fn update_plan(&self, id: i32, updates: &UpdatePlan) -> RepositoryResult<Plan>;
        fn archive_plan(&self, id: i32) -> RepositoryResult<()>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Team>>;
        fn list_teams(&self, hub_id: i32) -> RepositoryResult<Vec<Team>>;
        fn get_team_ai_config(&self, team_id: i32) -> RepositoryResult<Option<TeamAiConfig>>;
        fn get_team_portal(&self, team_id: i32) -> RepositoryResult<Option<TeamPortal>>;
    }

    impl TeamWriter for Repository {
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

    impl CustomSchemaReader for Repository {
        fn get_object_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<CustomObject>>;
        fn list_objects(&self, hub_id: i32) -> RepositoryResult<Vec<CustomObject>>;
        fn list_fields(&self, object_id: i32) -> RepositoryResult<Vec<CustomField>>;
        fn list_layouts(&self, object_id: i32) -> RepositoryResult<Vec<PageLayout>>;
    }

    impl CustomSchemaWriter for Repository {
        fn create_object(&self, new: &NewCustomObject) -> RepositoryResult<CustomObject>;
        fn update_object_label(
            &self,
            id: i32,
            hub_id: i32,
            label: &str,
        ) -> RepositoryResult<CustomObject>;
        fn delete_object(&self, id: i32, hub_id: i32) -> RepositoryResult<()>;
        fn create_field(&self, new: &NewCustomField) -> RepositoryResult<CustomField>;
        fn delete_field(&self, id: i32, object_id: i32) -> RepositoryResult<()>;
        fn create_layout(&self, new: &NewPageLayout) -> RepositoryResult<PageLayout>;
        fn delete_layout(&self, id: i32, object_id: i32) -> RepositoryResult<()>;
    }

    impl ChatReader for Repository {
        fn get_session_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<ChatSession>>;
        fn list_session_messages(&self, session_id: i32) -> RepositoryResult<Vec<ChatMessage>>;
    }

    impl ChatWriter for Repository {
        fn create_session<'a>(
            &self,
            hub_id: i32,
            user_email: &str,
            title: Option<&'a str>,
        ) -> RepositoryResult<ChatSession>;
        fn create_chat_message(&self, new: &NewChatMessage) -> RepositoryResult<ChatMessage>;
    }

    impl ActivityReader for Repository {
        fn list_lead_activity(&self, lead_id: i32, hub_id: i32) -> RepositoryResult<Vec<ActivityLog>>;
    }

    impl ActivityWriter for Repository {
        fn log_activity(&self, new: &NewActivityLog) -> RepositoryResult<ActivityLog>;
    }

    impl CmsReader for Repository {
        fn get_page_by_slug(&self, slug: &str) -> RepositoryResult<Option<CmsPage>>;
        fn list_pages(&self, published_only: bool) -> RepositoryResult<Vec<CmsPage>>;
    }

    impl CmsWriter for Repository {
        fn create_page(&self, new: &NewCmsPage) -> RepositoryResult<CmsPage>;
        fn update_page(&self, id: i32, updates: &UpdateCmsPage) -> RepositoryResult<CmsPage>;
        fn delete_page(&self, id: i32) -> RepositoryResult<()>;
    }
}
