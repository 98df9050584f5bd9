//! # List Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body for `POST /create_list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateListForm {
    /// The board the list is added to
    pub board_id: i32,
    #[validate(length(min = 1, max = 255, message = "List title must be between 1 and 255 characters"))]
    pub title:    String,
}

/// Form body for `POST /edit_list/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct EditListForm {
    /// The board to redirect back to
    pub board_id: i32,
    #[validate(length(min = 1, max = 255, message = "List title must be between 1 and 255 characters"))]
    pub title:    String,
}

/// Query parameters carrying the redirect target for list deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListRedirectQuery {
    pub board_id: Option<i32>,
}

/// One selectable list in the card forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOption {
    pub id:    i32,
    pub title: String,
}

impl From<entity::lists::Model> for ListOption {
    fn from(list: entity::lists::Model) -> Self {
        Self {
            id:    list.id,
            title: list.title,
        }
    }
}
