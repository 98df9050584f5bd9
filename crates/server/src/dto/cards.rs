//! # Card Data Transfer Objects
//!
//! Card form payloads and the data backing the add/edit forms. The
//! completion flag is checkbox-presence: the field arrives with any
//! value when checked and is absent otherwise. Assignees arrive as a
//! comma-separated id list.

use chrono::NaiveDate;
use entity::Priority;
use error::Result;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{auth::UserRow, lists::ListOption, parse_date_field, parse_id_list};
use crate::workflows::cards::{CardUpdate, NewCard};

/// Query parameters for the card form pages and delete redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardRedirectQuery {
    pub board_id: Option<i32>,
}

/// Form body for `POST /add`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct AddCardForm {
    /// Target list
    pub list_id:      i32,
    #[validate(length(min = 1, max = 255, message = "Card title must be between 1 and 255 characters"))]
    pub title:        String,
    pub description:  Option<String>,
    /// Priority value; defaults to `medium` when absent
    pub priority:     Option<String>,
    /// `YYYY-MM-DD`, empty for none
    pub start_date:   Option<String>,
    /// `YYYY-MM-DD`, empty for none
    pub due_date:     Option<String>,
    /// Comma-separated assignee user ids
    pub assignee_ids: Option<String>,
}

impl AddCardForm {
    /// Converts the validated form into workflow input.
    pub fn into_new_card(self) -> Result<NewCard> {
        Ok(NewCard {
            list_id:      self.list_id,
            title:        self.title,
            description:  none_if_empty(self.description),
            priority:     parse_priority(self.priority.as_deref())?,
            start_date:   parse_date_field(self.start_date.as_deref(), "start date")?,
            due_date:     parse_date_field(self.due_date.as_deref(), "due date")?,
            assignee_ids: parse_id_list(self.assignee_ids.as_deref())?,
        })
    }
}

/// Form body for `POST /edit_card/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct EditCardForm {
    #[validate(length(min = 1, max = 255, message = "Card title must be between 1 and 255 characters"))]
    pub title:        String,
    pub priority:     Option<String>,
    /// Checkbox: present when the card is marked completed
    pub is_completed: Option<String>,
    pub description:  Option<String>,
    /// The list the card should live in; differing from the current
    /// list makes this a move
    pub list_id:      i32,
    pub due_date:     Option<String>,
    pub assignee_ids: Option<String>,
    /// Board to redirect back to
    pub board_id:     Option<i32>,
}

impl EditCardForm {
    /// Converts the validated form into workflow input.
    pub fn into_card_update(self) -> Result<CardUpdate> {
        Ok(CardUpdate {
            title:        self.title,
            priority:     parse_priority(self.priority.as_deref())?,
            is_completed: self.is_completed.is_some(),
            description:  none_if_empty(self.description),
            list_id:      self.list_id,
            due_date:     parse_date_field(self.due_date.as_deref(), "due date")?,
            assignee_ids: parse_id_list(self.assignee_ids.as_deref())?,
        })
    }
}

/// Data backing the card creation form (`GET /add`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFormData {
    pub board_id: i32,
    pub lists:    Vec<ListOption>,
    pub users:    Vec<UserRow>,
}

/// The card being edited, with its current assignees pre-selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDetails {
    pub id:           i32,
    pub title:        String,
    pub description:  Option<String>,
    pub priority:     Priority,
    pub is_completed: bool,
    pub list_id:      i32,
    pub board_id:     i32,
    pub due_date:     Option<NaiveDate>,
    pub assignee_ids: Vec<i32>,
}

/// Data backing the card edit form (`GET /edit_card/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardEditData {
    pub card:  CardDetails,
    pub lists: Vec<ListOption>,
    pub users: Vec<UserRow>,
}

fn none_if_empty(value: Option<String>) -> Option<String> { value.filter(|s| !s.trim().is_empty()) }

fn parse_priority(raw: Option<&str>) -> Result<Priority> {
    match raw {
        None | Some("") => Ok(Priority::default()),
        Some(value) => value.parse().map_err(error::AppError::validation),
    }
}
