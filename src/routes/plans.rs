use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::dto::plan::{ListPlansQuery, SavePlanRequest};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, PlanReader, PlanWriter};
use crate::routes::{ApiError, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

#[get("/plans")]
pub async fn list_plans(
    user: AuthenticatedUser,
    query: web::Query<ListPlansQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let include_archived = query.include_archived && user.has_role(SERVICE_ADMIN_ROLE);
    let plans = repo.list_plans(include_archived)?;
    Ok(HttpResponse::Ok().json(plans))
}

#[post("/plans")]
pub async fn create_plan(
    user: AuthenticatedUser,
    payload: web::Json<SavePlanRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let plan = repo.create_plan(&payload.to_new_plan())?;
    Ok(HttpResponse::Created().json(plan))
}

#[put("/plans/{plan_id}")]
pub async fn update_plan(
    plan_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<SavePlanRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;
    payload.validate()?;

    let plan = repo.update_plan(plan_id.into_inner(), &payload.to_update())?;
    Ok(HttpResponse::Ok().json(plan))
}

/// Archives the plan. Teams referencing it keep their `plan_id`.
#[delete("/plans/{plan_id}")]
pub async fn delete_plan(
    plan_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    let plan_id = plan_id.into_inner();
    repo.get_plan_by_id(plan_id)?.ok_or(ApiError::NotFound)?;
    repo.archive_plan(plan_id)?;
    Ok(HttpResponse::NoContent().finish())
}
