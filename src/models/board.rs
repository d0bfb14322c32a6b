use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::board::{
    Board as DomainBoard, BoardMember as DomainBoardMember, NewBoard as DomainNewBoard,
    NewBoardMember as DomainNewBoardMember,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::boards)]
pub struct Board {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::boards)]
pub struct NewBoard<'a> {
    pub hub_id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Board, foreign_key = board_id))]
#[diesel(table_name = crate::schema::board_members)]
pub struct BoardMember {
    pub id: i32,
    pub board_id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::board_members)]
pub struct NewBoardMember<'a> {
    pub board_id: i32,
    pub email: &'a str,
    pub name: &'a str,
    pub role: &'a str,
}

impl From<Board> for DomainBoard {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            hub_id: board.hub_id,
            name: board.name,
            description: board.description,
            created_at: board.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewBoard> for NewBoard<'a> {
    fn from(board: &'a DomainNewBoard) -> Self {
        Self {
            hub_id: board.hub_id,
            name: board.name.as_str(),
            description: board.description.as_deref(),
        }
    }
}

impl From<BoardMember> for DomainBoardMember {
    fn from(member: BoardMember) -> Self {
        Self {
            id: member.id,
            board_id: member.board_id,
            email: member.email,
            name: member.name,
            role: member.role,
            created_at: member.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewBoardMember> for NewBoardMember<'a> {
    fn from(member: &'a DomainNewBoardMember) -> Self {
        Self {
            board_id: member.board_id,
            email: member.email.as_str(),
            name: member.name.as_str(),
            role: member.role.as_str(),
        }
    }
}
