use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::normalize_opt;

/// Campaign/project board.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBoard {
    pub hub_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl NewBoard {
    #[must_use]
    pub fn new(hub_id: i32, name: String, description: Option<String>) -> Self {
        Self {
            hub_id,
            name: name.trim().to_string(),
            description: normalize_opt(description),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoardMember {
    pub id: i32,
    pub board_id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBoardMember {
    pub board_id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl NewBoardMember {
    #[must_use]
    pub fn new(board_id: i32, email: String, name: String, role: Option<String>) -> Self {
        Self {
            board_id,
            email: email.trim().to_lowercase(),
            name: name.trim().to_string(),
            role: role
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "member".to_string()),
        }
    }
}

/// Directory entry offered in the assign-members dialog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DirectoryMember {
    pub email: String,
    pub name: String,
}

/// Members of the hub directory that are not yet assigned to the board.
///
/// A member already present in `assigned` must never appear in the result.
pub fn available_members(
    directory: &[DirectoryMember],
    assigned: &[BoardMember],
) -> Vec<DirectoryMember> {
    directory
        .iter()
        .filter(|candidate| {
            !assigned
                .iter()
                .any(|member| member.email.eq_ignore_ascii_case(&candidate.email))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn member(email: &str) -> BoardMember {
        BoardMember {
            id: 1,
            board_id: 1,
            email: email.to_string(),
            name: "x".to_string(),
            role: "member".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn candidate(email: &str) -> DirectoryMember {
        DirectoryMember {
            email: email.to_string(),
            name: "x".to_string(),
        }
    }

    #[test]
    fn assigned_members_are_excluded() {
        let directory = vec![candidate("a@x.io"), candidate("b@x.io"), candidate("c@x.io")];
        let assigned = vec![member("b@x.io")];
        let available = available_members(&directory, &assigned);
        assert_eq!(available.len(), 2);
        assert!(available.iter().all(|m| m.email != "b@x.io"));
    }

    #[test]
    fn exclusion_ignores_email_case() {
        let directory = vec![candidate("A@X.io")];
        let assigned = vec![member("a@x.IO")];
        assert!(available_members(&directory, &assigned).is_empty());
    }

    #[test]
    fn empty_assignment_keeps_directory_intact() {
        let directory = vec![candidate("a@x.io")];
        assert_eq!(available_members(&directory, &[]), directory);
    }
}
