use diesel::prelude::*;

use crate::domain::team::{Team, TeamAiConfig, TeamPortal, UpsertTeamAiConfig, UpsertTeamPortal};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TeamReader, TeamWriter};

impl TeamReader for DieselRepository {
    fn get_team_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Team>> {
        use crate::models::team::Team as DbTeam;
        use crate::schema::teams;

        let mut conn = self.conn()?;
        let team = teams::table
            .find(id)
            .filter(teams::hub_id.eq(hub_id))
            .first::<DbTeam>(&mut conn)
            .optional()?;

        Ok(team.map(Into::into))
    }

    fn list_teams(&self, hub_id: i32) -> RepositoryResult<Vec<Team>> {
        use crate::models::team::Team as DbTeam;
        use crate::schema::teams;

        let mut conn = self.conn()?;
        let items = teams::table
            .filter(teams::hub_id.eq(hub_id))
            .order(teams::id.asc())
            .load::<DbTeam>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_team_ai_config(&self, team_id: i32) -> RepositoryResult<Option<TeamAiConfig>> {
        use crate::models::team::TeamAiConfig as DbTeamAiConfig;
        use crate::schema::team_ai_configs;

        let mut conn = self.conn()?;
        let config = team_ai_configs::table
            .find(team_id)
            .first::<DbTeamAiConfig>(&mut conn)
            .optional()?;

        Ok(config.map(Into::into))
    }

    fn get_team_portal(&self, team_id: i32) -> RepositoryResult<Option<TeamPortal>> {
        use crate::models::team::TeamPortal as DbTeamPortal;
        use crate::schema::team_portals;

        let mut conn = self.conn()?;
        let portal = team_portals::table
            .find(team_id)
            .first::<DbTeamPortal>(&mut conn)
            .optional()?;

        Ok(portal.map(Into::into))
    }
}

impl TeamWriter for DieselRepository {
    fn upsert_team_ai_config(
        &self,
        team_id: i32,
        config: &UpsertTeamAiConfig,
    ) -> RepositoryResult<TeamAiConfig> {
        use crate::models::team::TeamAiConfig as DbTeamAiConfig;
        use crate::schema::team_ai_configs;

        let mut conn = self.conn()?;
        let row = DbTeamAiConfig::from_upsert(team_id, config);

        let saved = diesel::insert_into(team_ai_configs::table)
            .values(&row)
            .on_conflict(team_ai_configs::team_id)
            .do_update()
            .set(&row)
            .get_result::<DbTeamAiConfig>(&mut conn)?;

        Ok(saved.into())
    }

    fn upsert_team_portal(
        &self,
        team_id: i32,
        portal: &UpsertTeamPortal,
    ) -> RepositoryResult<TeamPortal> {
        use crate::models::team::TeamPortal as DbTeamPortal;
        use crate::schema::team_portals;

        let mut conn = self.conn()?;
        let row = DbTeamPortal::from_upsert(team_id, portal);

        let saved = diesel::insert_into(team_portals::table)
            .values(&row)
            .on_conflict(team_portals::team_id)
            .do_update()
            .set(&row)
            .get_result::<DbTeamPortal>(&mut conn)?;

        Ok(saved.into())
    }
}
