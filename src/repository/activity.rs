use diesel::prelude::*;

use crate::domain::activity::{ActivityLog, NewActivityLog};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ActivityReader, ActivityWriter, DieselRepository};

impl ActivityReader for DieselRepository {
    fn list_lead_activity(&self, lead_id: i32, hub_id: i32) -> RepositoryResult<Vec<ActivityLog>> {
        use crate::models::activity::ActivityLog as DbActivityLog;
        use crate::schema::activity_logs;

        let mut conn = self.conn()?;
        let items = activity_logs::table
            .filter(activity_logs::lead_id.eq(lead_id))
            .filter(activity_logs::hub_id.eq(hub_id))
            .order(activity_logs::id.desc())
            .load::<DbActivityLog>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl ActivityWriter for DieselRepository {
    fn log_activity(&self, new: &NewActivityLog) -> RepositoryResult<ActivityLog> {
        use crate::models::activity::{ActivityLog as DbActivityLog, NewActivityLog as DbNewActivityLog};
        use crate::schema::activity_logs;

        let mut conn = self.conn()?;
        let insertable: DbNewActivityLog = new.into();
        let created = diesel::insert_into(activity_logs::table)
            .values(&insertable)
            .get_result::<DbActivityLog>(&mut conn)?;

        Ok(created.into())
    }
}
