use diesel::prelude::*;

use crate::domain::plan::{NewPlan, Plan, UpdatePlan};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PlanReader, PlanWriter};

impl PlanReader for DieselRepository {
    fn get_plan_by_id(&self, id: i32) -> RepositoryResult<Option<Plan>> {
        use crate::models::plan::Plan as DbPlan;
        use crate::schema::plans;

        let mut conn = self.conn()?;
        let plan = plans::table
            .find(id)
            .first::<DbPlan>(&mut conn)
            .optional()?;

        Ok(plan.map(Into::into))
    }

    fn list_plans(&self, include_archived: bool) -> RepositoryResult<Vec<Plan>> {
        use crate::models::plan::Plan as DbPlan;
        use crate::schema::plans;

        let mut conn = self.conn()?;
        let mut query = plans::table.into_boxed();
        if !include_archived {
            query = query.filter(plans::archived.eq(false));
        }

        let items = query
            .order(plans::monthly_price_cents.asc())
            .load::<DbPlan>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl PlanWriter for DieselRepository {
    fn create_plan(&self, new: &NewPlan) -> RepositoryResult<Plan> {
        use crate::models::plan::{NewPlan as DbNewPlan, Plan as DbPlan};
        use crate::schema::plans;

        let mut conn = self.conn()?;
        let insertable: DbNewPlan = new.into();
        let created = diesel::insert_into(plans::table)
            .values(&insertable)
            .get_result::<DbPlan>(&mut conn)?;

        Ok(created.into())
    }

    fn update_plan(&self, id: i32, updates: &UpdatePlan) -> RepositoryResult<Plan> {
        use crate::models::plan::{Plan as DbPlan, UpdatePlan as DbUpdatePlan};
        use crate::schema::plans;

        let mut conn = self.conn()?;
        let db_updates: DbUpdatePlan = updates.into();

        let updated = diesel::update(plans::table.find(id))
            .set(&db_updates)
            .get_result::<DbPlan>(&mut conn)?;

        Ok(updated.into())
    }

    fn archive_plan(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::plans;

        // No cascade: teams keep their plan_id and tolerate an archived plan.
        let mut conn = self.conn()?;
        diesel::update(plans::table.find(id))
            .set(plans::archived.eq(true))
            .execute(&mut conn)?;
        Ok(())
    }
}
