use diesel::prelude::*;

use crate::domain::board::{Board, BoardMember, NewBoard, NewBoardMember};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BoardReader, BoardWriter, DieselRepository};

impl BoardReader for DieselRepository {
    fn get_board_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Board>> {
        use crate::models::board::Board as DbBoard;
        use crate::schema::boards;

        let mut conn = self.conn()?;
        let board = boards::table
            .find(id)
            .filter(boards::hub_id.eq(hub_id))
            .first::<DbBoard>(&mut conn)
            .optional()?;

        Ok(board.map(Into::into))
    }

    fn list_boards(&self, hub_id: i32) -> RepositoryResult<Vec<Board>> {
        use crate::models::board::Board as DbBoard;
        use crate::schema::boards;

        let mut conn = self.conn()?;
        let items = boards::table
            .filter(boards::hub_id.eq(hub_id))
            .order(boards::id.asc())
            .load::<DbBoard>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_board_members(&self, board_id: i32) -> RepositoryResult<Vec<BoardMember>> {
        use crate::models::board::BoardMember as DbBoardMember;
        use crate::schema::board_members;

        let mut conn = self.conn()?;
        let items = board_members::table
            .filter(board_members::board_id.eq(board_id))
            .order(board_members::id.asc())
            .load::<DbBoardMember>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl BoardWriter for DieselRepository {
    fn create_board(&self, new: &NewBoard) -> RepositoryResult<Board> {
        use crate::models::board::{Board as DbBoard, NewBoard as DbNewBoard};
        use crate::schema::boards;

        let mut conn = self.conn()?;
        let insertable: DbNewBoard = new.into();
        let created = diesel::insert_into(boards::table)
            .values(&insertable)
            .get_result::<DbBoard>(&mut conn)?;

        Ok(created.into())
    }

    fn add_board_member(&self, new: &NewBoardMember) -> RepositoryResult<BoardMember> {
        use crate::models::board::{BoardMember as DbBoardMember, NewBoardMember as DbNewBoardMember};
        use crate::schema::board_members;

        let mut conn = self.conn()?;
        let insertable: DbNewBoardMember = new.into();
        let created = diesel::insert_into(board_members::table)
            .values(&insertable)
            .get_result::<DbBoardMember>(&mut conn)?;

        Ok(created.into())
    }

    fn remove_board_member(&self, membership_id: i32, board_id: i32) -> RepositoryResult<()> {
        use crate::schema::board_members;

        let mut conn = self.conn()?;
        diesel::delete(
            board_members::table
                .find(membership_id)
                .filter(board_members::board_id.eq(board_id)),
        )
        .execute(&mut conn)?;
        Ok(())
    }
}
