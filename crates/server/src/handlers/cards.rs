//! # Card Handlers
//!
//! Card form data and the create/update/delete submissions.

use axum::response::{Json, Redirect};
use entity::{card_members, lists, CardMembers, Cards, Lists, Users};
use error::{AppError, Result};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use validator::Validate;

use crate::{
    dto::{
        auth::UserRow,
        cards::{AddCardForm, CardDetails, CardEditData, CardFormData, EditCardForm},
        lists::ListOption,
    },
    session::AuthContext,
    workflows,
    AppState,
};

/// Lists of a board in position order, for the form selectors.
async fn board_list_options(state: &AppState, board_id: i32) -> Result<Vec<ListOption>> {
    let lists = Lists::find()
        .filter(lists::Column::BoardId.eq(board_id))
        .order_by_asc(lists::Column::Position)
        .all(&state.db)
        .await?;
    Ok(lists.into_iter().map(ListOption::from).collect())
}

async fn all_users(state: &AppState) -> Result<Vec<UserRow>> {
    let users = Users::find().all(&state.db).await?;
    Ok(users.into_iter().map(UserRow::from).collect())
}

/// `GET /add`: data for the card creation form.
pub async fn add_card_form_inner(state: &AppState, board_id: i32) -> Result<Json<CardFormData>> {
    Ok(Json(CardFormData {
        board_id,
        lists: board_list_options(state, board_id).await?,
        users: all_users(state).await?,
    }))
}

/// `POST /add`: create a card.
pub async fn add_card_inner(
    state: &AppState,
    auth: &AuthContext,
    board_id: i32,
    form: AddCardForm,
) -> Result<Redirect> {
    form.validate()?;
    let input = form.into_new_card()?;
    workflows::cards::create_card(&state.db, auth.user_id, input).await?;
    Ok(super::redirect_to_board(board_id, None))
}

/// `GET /edit_card/{id}`: the card with everything its form needs.
pub async fn edit_card_form_inner(state: &AppState, card_id: i32) -> Result<Json<CardEditData>> {
    let card = Cards::find_by_id(card_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Card {}", card_id)))?;

    let list = Lists::find_by_id(card.list_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("List {}", card.list_id)))?;

    let assignee_ids: Vec<i32> = CardMembers::find()
        .filter(card_members::Column::CardId.eq(card.id))
        .order_by_asc(card_members::Column::UserId)
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| m.user_id)
        .collect();

    let details = CardDetails {
        id: card.id,
        title: card.title,
        description: card.description,
        priority: card.priority,
        is_completed: card.is_completed,
        list_id: card.list_id,
        board_id: list.board_id,
        due_date: card.due_date,
        assignee_ids,
    };

    Ok(Json(CardEditData {
        card:  details,
        lists: board_list_options(state, list.board_id).await?,
        users: all_users(state).await?,
    }))
}

/// `POST /edit_card/{id}`: update a card.
pub async fn edit_card_inner(
    state: &AppState,
    auth: &AuthContext,
    card_id: i32,
    form: EditCardForm,
) -> Result<Redirect> {
    form.validate()?;
    let redirect_board_id = form.board_id.unwrap_or(state.config.default_board_id);
    let input = form.into_card_update()?;
    workflows::cards::update_card(&state.db, auth.user_id, card_id, input).await?;
    Ok(super::redirect_to_board(redirect_board_id, None))
}

/// `POST /delete_card/{id}`: delete a card.
pub async fn delete_card_inner(
    state: &AppState,
    auth: &AuthContext,
    card_id: i32,
    redirect_board_id: i32,
) -> Result<Redirect> {
    workflows::cards::delete_card(&state.db, auth.user_id, card_id).await?;
    Ok(super::redirect_to_board(redirect_board_id, None))
}
