use diesel::prelude::*;

use crate::domain::lead::{Lead, NewLead, OutreachUpdate, UpdateLead};
use crate::repository::{DieselRepository, LeadListQuery, LeadReader, LeadWriter};
use crate::repository::errors::{RepositoryError, RepositoryResult};

impl LeadReader for DieselRepository {
    fn get_lead_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Lead>> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let lead = leads::table
            .find(id)
            .filter(leads::hub_id.eq(hub_id))
            .first::<DbLead>(&mut conn)
            .optional()?;

        Ok(lead.map(Into::into))
    }

    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.conn()?;

        let build = || {
            let mut q = leads::table
                .filter(leads::hub_id.eq(query.hub_id))
                .into_boxed();
            if let Some(status) = &query.status {
                q = q.filter(leads::status.eq(status.clone()));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                q = q.filter(
                    leads::name
                        .like(pattern.clone())
                        .or(leads::email.like(pattern.clone()))
                        .or(leads::company.like(pattern)),
                );
            }
            q
        };

        let total: i64 = build().count().get_result(&mut conn)?;

        let mut items_query = build().order(leads::id.asc());
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            items_query = items_query
                .limit(per_page)
                .offset((page - 1) * per_page);
        }

        let items = items_query
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }
}

impl LeadWriter for DieselRepository {
    fn create_leads(&self, new_leads: &[NewLead]) -> RepositoryResult<usize> {
        use crate::models::lead::NewLead as DbNewLead;
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewLead> = new_leads.iter().map(Into::into).collect();
        let affected = diesel::insert_into(leads::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_lead(&self, id: i32, hub_id: i32, updates: &UpdateLead) -> RepositoryResult<Lead> {
        use crate::models::lead::{Lead as DbLead, UpdateLead as DbUpdateLead};
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateLead = updates.into();

        let updated = diesel::update(
            leads::table
                .find(id)
                .filter(leads::hub_id.eq(hub_id)),
        )
        .set(&db_updates)
        .get_result::<DbLead>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_lead(&self, id: i32, hub_id: i32) -> RepositoryResult<()> {
        use crate::schema::{activity_logs, leads};

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            // Ownership check before the cascade so a foreign hub cannot
            // reach the child rows.
            leads::table
                .find(id)
                .filter(leads::hub_id.eq(hub_id))
                .select(leads::id)
                .first::<i32>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(activity_logs::table.filter(activity_logs::lead_id.eq(id)))
                .execute(conn)?;
            diesel::delete(leads::table.find(id)).execute(conn)?;
            Ok(())
        })
    }

    fn mark_lead_outreach(&self, id: i32, update: &OutreachUpdate) -> RepositoryResult<Lead> {
        use crate::models::lead::{Lead as DbLead, LeadOutreachUpdate};
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let db_update: LeadOutreachUpdate = update.into();

        let updated = diesel::update(leads::table.find(id))
            .set(&db_update)
            .get_result::<DbLead>(&mut conn)?;

        Ok(updated.into())
    }
}
