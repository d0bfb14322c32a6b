use serde::Deserialize;
use validator::Validate;

use crate::domain::board::{DirectoryMember, NewBoard, NewBoardMember};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBoardRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
}

impl CreateBoardRequest {
    pub fn to_new_board(&self, hub_id: i32) -> NewBoard {
        NewBoard::new(hub_id, self.name.clone(), self.description.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddMemberRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: Option<String>,
}

impl AddMemberRequest {
    pub fn to_new_member(&self, board_id: i32) -> NewBoardMember {
        NewBoardMember::new(
            board_id,
            self.email.clone(),
            self.name.clone(),
            self.role.clone(),
        )
    }
}

/// Directory snapshot supplied by the caller; the endpoint answers with the
/// entries not yet assigned to the board.
#[derive(Debug, Deserialize)]
pub struct AvailableMembersRequest {
    pub directory: Vec<DirectoryMember>,
}
