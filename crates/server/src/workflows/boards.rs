//! # Board Workflows
//!
//! Board CRUD. Creation seeds the three standard columns and grants
//! the creator Admin membership in the same transaction; deletion
//! cascades explicitly through lists, cards, assignments and
//! memberships.

use chrono::Utc;
use entity::{board_members, boards, card_members, cards, lists, BoardMembers, Boards, CardMembers, Cards, Lists,
             Permission, Visibility};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, NotSet, QueryFilter, Set, TransactionTrait};

use super::require_admin;

/// The columns every new board starts with: (title, position, card limit).
pub const DEFAULT_LISTS: &[(&str, i32, i32)] = &[("To Do", 1, 0), ("Doing", 2, 5), ("Done", 3, 0)];

/// Workspace all boards belong to; only one exists.
const DEFAULT_WORKSPACE_ID: i32 = 1;

/// Creates a board with its three default lists and Admin membership
/// for the creator.
pub async fn create_board(db: &DbConn, creator_id: i32, name: String, visibility: Visibility) -> Result<boards::Model> {
    let txn = db.begin().await?;

    let board = boards::ActiveModel {
        id:           NotSet,
        workspace_id: Set(DEFAULT_WORKSPACE_ID),
        name:         Set(name),
        visibility:   Set(visibility),
        created_by:   Set(creator_id),
        created_at:   Set(Utc::now().naive_utc()),
    };
    let board = board.insert(&txn).await?;

    let default_lists: Vec<lists::ActiveModel> = DEFAULT_LISTS
        .iter()
        .map(|&(title, position, card_limit)| {
            lists::ActiveModel {
                id:         NotSet,
                board_id:   Set(board.id),
                title:      Set(title.to_string()),
                position:   Set(position),
                card_limit: Set(card_limit),
            }
        })
        .collect();
    Lists::insert_many(default_lists).exec(&txn).await?;

    let membership = board_members::ActiveModel {
        board_id:   Set(board.id),
        user_id:    Set(creator_id),
        permission: Set(Permission::Admin),
        joined_at:  Set(Utc::now().naive_utc()),
    };
    membership.insert(&txn).await?;

    txn.commit().await?;
    tracing::info!(board_id = board.id, creator_id, "board created with default lists");
    Ok(board)
}

/// Renames a board. Admin only.
pub async fn rename_board(db: &DbConn, user_id: i32, board_id: i32, name: String) -> Result<boards::Model> {
    let txn = db.begin().await?;

    let board = Boards::find_by_id(board_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Board {}", board_id)))?;

    require_admin(&txn, board_id, user_id).await?;

    let mut active: boards::ActiveModel = board.into();
    active.name = Set(name);
    let board = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(board_id, user_id, "board renamed");
    Ok(board)
}

/// Deletes a board and everything under it. Admin only.
pub async fn delete_board(db: &DbConn, user_id: i32, board_id: i32) -> Result<()> {
    let txn = db.begin().await?;

    Boards::find_by_id(board_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Board {}", board_id)))?;

    require_admin(&txn, board_id, user_id).await?;

    let list_ids: Vec<i32> = Lists::find()
        .filter(lists::Column::BoardId.eq(board_id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|l| l.id)
        .collect();

    if !list_ids.is_empty() {
        let card_ids: Vec<i32> = Cards::find()
            .filter(cards::Column::ListId.is_in(list_ids.clone()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        if !card_ids.is_empty() {
            CardMembers::delete_many()
                .filter(card_members::Column::CardId.is_in(card_ids))
                .exec(&txn)
                .await?;
            Cards::delete_many()
                .filter(cards::Column::ListId.is_in(list_ids))
                .exec(&txn)
                .await?;
        }
        Lists::delete_many()
            .filter(lists::Column::BoardId.eq(board_id))
            .exec(&txn)
            .await?;
    }

    BoardMembers::delete_many()
        .filter(board_members::Column::BoardId.eq(board_id))
        .exec(&txn)
        .await?;
    Boards::delete_by_id(board_id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(board_id, user_id, "board deleted");
    Ok(())
}
