//! # Authentication Data Transfer Objects
//!
//! Request and response types for the login flow. Login is
//! select-a-user: the form carries only the chosen user id.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body for `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginForm {
    /// The user to log in as
    #[validate(range(min = 1, message = "A user must be selected"))]
    pub user_id: i32,
}

/// One selectable user on the login page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id:         i32,
    pub first_name: String,
    pub last_name:  String,
    pub email:      String,
}

impl From<entity::users::Model> for UserRow {
    fn from(user: entity::users::Model) -> Self {
        Self {
            id:         user.id,
            first_name: user.first_name,
            last_name:  user.last_name,
            email:      user.email,
        }
    }
}
