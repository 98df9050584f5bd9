//! # Board Data Transfer Objects

use entity::Visibility;
use error::Result;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the board view (`GET /`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoardQuery {
    /// The board to show; the configured default when absent
    pub board_id:  Option<i32>,
    /// Tri-state completion filter: true, false, or all when absent
    pub completed: Option<bool>,
}

/// Form body for `POST /create_board`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateBoardForm {
    #[validate(length(min = 1, max = 255, message = "Board name must be between 1 and 255 characters"))]
    pub name:       String,
    /// Visibility value; defaults to `workspace` when absent
    pub visibility: Option<String>,
}

impl CreateBoardForm {
    /// Parses the submitted visibility, defaulting to workspace.
    pub fn parse_visibility(&self) -> Result<Visibility> {
        match self.visibility.as_deref() {
            None | Some("") => Ok(Visibility::default()),
            Some(value) => value.parse().map_err(error::AppError::validation),
        }
    }
}

/// Form body for `POST /edit_board/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RenameBoardForm {
    #[validate(length(min = 1, max = 255, message = "Board name must be between 1 and 255 characters"))]
    pub name: String,
}

/// Form data for the board creation page (`GET /create_board`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardFormData {
    /// Accepted visibility values
    pub visibilities: Vec<String>,
}

impl Default for BoardFormData {
    fn default() -> Self {
        Self {
            visibilities: vec![
                Visibility::Private.to_string(),
                Visibility::Workspace.to_string(),
                Visibility::Public.to_string(),
            ],
        }
    }
}
