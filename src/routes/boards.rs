use actix_web::{HttpResponse, delete, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::board::available_members;
use crate::dto::board::{AddMemberRequest, AvailableMembersRequest, CreateBoardRequest};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{BoardReader, BoardWriter, DieselRepository};
use crate::routes::{ApiError, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

#[get("/boards")]
pub async fn list_boards(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let boards = repo.list_boards(user.hub_id)?;
    Ok(HttpResponse::Ok().json(boards))
}

#[get("/boards/{board_id}")]
pub async fn get_board(
    board_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let board_id = board_id.into_inner();
    let board = repo
        .get_board_by_id(board_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;
    let members = repo.list_board_members(board_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "board": board,
        "members": members,
    })))
}

#[post("/boards")]
pub async fn create_board(
    user: AuthenticatedUser,
    payload: web::Json<CreateBoardRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let board = repo.create_board(&payload.to_new_board(user.hub_id))?;
    Ok(HttpResponse::Created().json(board))
}

#[post("/boards/{board_id}/members")]
pub async fn add_board_member(
    board_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<AddMemberRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;
    payload.validate()?;

    let board_id = board_id.into_inner();
    repo.get_board_by_id(board_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    let member = repo.add_board_member(&payload.to_new_member(board_id))?;
    Ok(HttpResponse::Created().json(member))
}

#[delete("/boards/{board_id}/members/{membership_id}")]
pub async fn remove_board_member(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ADMIN_ROLE)?;

    let (board_id, membership_id) = path.into_inner();
    repo.get_board_by_id(board_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    repo.remove_board_member(membership_id, board_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Answers with the directory entries that are not yet board members.
#[post("/boards/{board_id}/members/available")]
pub async fn available_board_members(
    board_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<AvailableMembersRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    ensure_role(&user, SERVICE_ACCESS_ROLE)?;

    let board_id = board_id.into_inner();
    repo.get_board_by_id(board_id, user.hub_id)?
        .ok_or(ApiError::NotFound)?;

    let assigned = repo.list_board_members(board_id)?;
    let available = available_members(&payload.directory, &assigned);
    Ok(HttpResponse::Ok().json(available))
}
