//! # List Workflows
//!
//! List CRUD within a board. Deletion cascades explicitly through the
//! list's cards and their assignments so the behavior is identical on
//! every backend, foreign-key cascades or not.

use entity::{card_members, cards, lists, Boards, CardMembers, Cards, Lists};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
              TransactionTrait};

use super::require_edit;

/// Creates a list at the end of a board.
///
/// The new list takes `position` = current max within the board + 1
/// and starts without a card limit.
pub async fn create_list(db: &DbConn, user_id: i32, board_id: i32, title: String) -> Result<lists::Model> {
    let txn = db.begin().await?;

    Boards::find_by_id(board_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Board {}", board_id)))?;

    require_edit(&txn, board_id, user_id).await?;

    let last_position = Lists::find()
        .filter(lists::Column::BoardId.eq(board_id))
        .order_by_desc(lists::Column::Position)
        .limit(1)
        .one(&txn)
        .await?
        .map(|l| l.position)
        .unwrap_or(0);

    let list = lists::ActiveModel {
        id:         NotSet,
        board_id:   Set(board_id),
        title:      Set(title),
        position:   Set(last_position + 1),
        card_limit: Set(0),
    };
    let list = list.insert(&txn).await?;

    txn.commit().await?;
    tracing::info!(list_id = list.id, board_id, user_id, "list created");
    Ok(list)
}

/// Renames a list.
pub async fn rename_list(db: &DbConn, user_id: i32, list_id: i32, title: String) -> Result<lists::Model> {
    let txn = db.begin().await?;

    let list = Lists::find_by_id(list_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("List {}", list_id)))?;

    require_edit(&txn, list.board_id, user_id).await?;

    let mut active: lists::ActiveModel = list.into();
    active.title = Set(title);
    let list = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(list_id, user_id, "list renamed");
    Ok(list)
}

/// Deletes a list with its cards and their assignments.
pub async fn delete_list(db: &DbConn, user_id: i32, list_id: i32) -> Result<()> {
    let txn = db.begin().await?;

    let list = Lists::find_by_id(list_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("List {}", list_id)))?;

    require_edit(&txn, list.board_id, user_id).await?;

    let card_ids: Vec<i32> = Cards::find()
        .filter(cards::Column::ListId.eq(list_id))
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
            .filter(cards::Column::ListId.eq(list_id))
            .exec(&txn)
            .await?;
    }
    Lists::delete_by_id(list_id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(list_id, user_id, "list deleted");
    Ok(())
}
