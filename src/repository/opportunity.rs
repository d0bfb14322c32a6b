use diesel::prelude::*;

use crate::domain::opportunity::{NewOpportunity, Opportunity, UpdateOpportunity};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OpportunityReader, OpportunityWriter};

impl OpportunityReader for DieselRepository {
    fn get_opportunity_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Opportunity>> {
        use crate::models::opportunity::Opportunity as DbOpportunity;
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let opportunity = opportunities::table
            .find(id)
            .filter(opportunities::hub_id.eq(hub_id))
            .first::<DbOpportunity>(&mut conn)
            .optional()?;

        Ok(opportunity.map(Into::into))
    }

    fn list_opportunities(&self, hub_id: i32) -> RepositoryResult<Vec<Opportunity>> {
        use crate::models::opportunity::Opportunity as DbOpportunity;
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let items = opportunities::table
            .filter(opportunities::hub_id.eq(hub_id))
            .order(opportunities::id.asc())
            .load::<DbOpportunity>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl OpportunityWriter for DieselRepository {
    fn create_opportunity(&self, new: &NewOpportunity) -> RepositoryResult<Opportunity> {
        use crate::models::opportunity::{
            NewOpportunity as DbNewOpportunity, Opportunity as DbOpportunity,
        };
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let insertable: DbNewOpportunity = new.into();
        let created = diesel::insert_into(opportunities::table)
            .values(&insertable)
            .get_result::<DbOpportunity>(&mut conn)?;

        Ok(created.into())
    }

    fn update_opportunity(
        &self,
        id: i32,
        hub_id: i32,
        updates: &UpdateOpportunity,
    ) -> RepositoryResult<Opportunity> {
        use crate::models::opportunity::{
            Opportunity as DbOpportunity, UpdateOpportunity as DbUpdateOpportunity,
        };
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateOpportunity = updates.into();

        let updated = diesel::update(
            opportunities::table
                .find(id)
                .filter(opportunities::hub_id.eq(hub_id)),
        )
        .set(&db_updates)
        .get_result::<DbOpportunity>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_opportunity(&self, id: i32, hub_id: i32) -> RepositoryResult<()> {
        use crate::schema::opportunities;

        let mut conn = self.conn()?;
        diesel::delete(
            opportunities::table
                .find(id)
                .filter(opportunities::hub_id.eq(hub_id)),
        )
        .execute(&mut conn)?;
        Ok(())
    }
}
