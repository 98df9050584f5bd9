//! # Board Handlers
//!
//! The board view plus board CRUD. The view is the application's home
//! page; an unknown `board_id` redirects to the configured default
//! board with a notice rather than erroring.

use axum::response::{Json, Redirect};
use error::{AppError, Result};
use validator::Validate;

use crate::{
    dto::boards::{BoardFormData, BoardQuery, CreateBoardForm, RenameBoardForm},
    read_model::{self, BoardView},
    session::AuthContext,
    workflows,
    AppState,
};

/// Outcome of `GET /`: either the view model or a redirect to the
/// default board when the requested one does not exist.
pub enum BoardViewOutcome {
    View(Box<BoardView>),
    RedirectToDefault(Redirect),
}

/// `GET /`: the board view.
pub async fn board_view_inner(state: &AppState, auth: &AuthContext, query: BoardQuery) -> Result<BoardViewOutcome> {
    let board_id = query.board_id.unwrap_or(state.config.default_board_id);

    match read_model::board_view(&state.db, board_id, auth, query.completed).await {
        Ok(view) => Ok(BoardViewOutcome::View(Box::new(view))),
        Err(AppError::NotFound {
            ..
        }) if board_id != state.config.default_board_id => {
            tracing::info!(board_id, "unknown board requested, redirecting to default");
            Ok(BoardViewOutcome::RedirectToDefault(super::redirect_to_board(
                state.config.default_board_id,
                Some("not_found"),
            )))
        },
        Err(e) => Err(e),
    }
}

/// `GET /create_board`: the data backing the creation form.
pub async fn create_board_form_inner() -> Json<BoardFormData> { Json(BoardFormData::default()) }

/// `POST /create_board`: create a board and land on it.
pub async fn create_board_inner(state: &AppState, auth: &AuthContext, form: CreateBoardForm) -> Result<Redirect> {
    form.validate()?;
    let visibility = form.parse_visibility()?;
    let board = workflows::boards::create_board(&state.db, auth.user_id, form.name, visibility).await?;
    Ok(super::redirect_to_board(board.id, None))
}

/// `POST /edit_board/{id}`: rename a board.
pub async fn edit_board_inner(
    state: &AppState,
    auth: &AuthContext,
    board_id: i32,
    form: RenameBoardForm,
) -> Result<Redirect> {
    form.validate()?;
    workflows::boards::rename_board(&state.db, auth.user_id, board_id, form.name).await?;
    Ok(super::redirect_to_board(board_id, None))
}

/// `POST /delete_board/{id}`: delete a board, then fall back to the
/// default board view.
pub async fn delete_board_inner(state: &AppState, auth: &AuthContext, board_id: i32) -> Result<Redirect> {
    workflows::boards::delete_board(&state.db, auth.user_id, board_id).await?;
    Ok(super::redirect_to_board(state.config.default_board_id, None))
}
