use actix_web::{HttpResponse, get, put, web};
use serde_json::json;
use validator::Validate;

use crate::domain::theme::hex_to_hsla;
use crate::dto::team::{SaveAiConfigRequest, SavePortalRequest};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, PlanReader, TeamReader, TeamWriter};
use crate::routes::{ApiError, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

#[get("/teams")]
pub async fn list_teams(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let teams = repo.list_teams(user.hub_id)?;
    Ok(HttpResponse::Ok().json(teams))
}

/// Team detail with its plan (possibly archived), AI settings and portal
/// settings. An archived or missing plan is tolerated, not an error.
#[get("/teams/{team_id}")]
pub async fn get_team(
    team_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let team = repo
        .get_team_by_id(team_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    let plan = match team.plan_id {
        Some(plan_id) => repo.get_plan_by_id(plan_id)?,
        None => None,
    };
    let ai_config = repo.get_team_ai_config(team.id)?;
    let portal = repo.get_team_portal(team.id)?;

    Ok(HttpResponse::Ok().json(json!({
        "team": team,
        "plan": plan,
        "ai_config": ai_config,
        "portal": portal,
    })))
}

#[put("/teams/{team_id}/ai-config")]
pub async fn save_ai_config(
    team_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<SaveAiConfigRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let team = repo
        .get_team_by_id(team_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    let config = repo.upsert_team_ai_config(team.id, &payload.into_inner().into())?;
    Ok(HttpResponse::Ok().json(config))
}

#[put("/teams/{team_id}/portal")]
pub async fn save_portal(
    team_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<SavePortalRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    if let Some(accent) = payload.accent_color.as_deref() {
        hex_to_hsla(accent).map_err(|err| ApiError::BadRequest(err.to_string()))?;
    }

    let team = repo
        .get_team_by_id(team_id.into_inner(), user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    let portal = repo.upsert_team_portal(team.id, &payload.into_inner().into())?;
    Ok(HttpResponse::Ok().json(portal))
}
