//! # List Handlers
//!
//! List CRUD; every operation redirects back to the owning board.

use axum::response::Redirect;
use error::Result;
use validator::Validate;

use crate::{
    dto::lists::{CreateListForm, EditListForm},
    session::AuthContext,
    workflows,
    AppState,
};

/// `POST /create_list`.
pub async fn create_list_inner(state: &AppState, auth: &AuthContext, form: CreateListForm) -> Result<Redirect> {
    form.validate()?;
    let list = workflows::lists::create_list(&state.db, auth.user_id, form.board_id, form.title).await?;
    Ok(super::redirect_to_board(list.board_id, None))
}

/// `POST /edit_list/{id}`.
pub async fn edit_list_inner(
    state: &AppState,
    auth: &AuthContext,
    list_id: i32,
    form: EditListForm,
) -> Result<Redirect> {
    form.validate()?;
    let list = workflows::lists::rename_list(&state.db, auth.user_id, list_id, form.title).await?;
    Ok(super::redirect_to_board(list.board_id, None))
}

/// `POST /delete_list/{id}`.
pub async fn delete_list_inner(
    state: &AppState,
    auth: &AuthContext,
    list_id: i32,
    redirect_board_id: i32,
) -> Result<Redirect> {
    workflows::lists::delete_list(&state.db, auth.user_id, list_id).await?;
    Ok(super::redirect_to_board(redirect_board_id, None))
}
