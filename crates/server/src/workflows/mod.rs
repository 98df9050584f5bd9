//! # Workflows
//!
//! Transactional service functions behind the mutating endpoints.
//! Every workflow runs inside one
//! transaction with a fixed check order: permission first, capacity
//! second, mutation last. The user-visible notice depends on which
//! check fails first, so the order is part of the contract.

use entity::{BoardMembers, Cards, Lists, Permission};
use error::{AppError, Result};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

pub mod boards;
pub mod cards;
pub mod lists;

/// Requires Edit or Admin permission on a board.
pub(crate) async fn require_edit<C: ConnectionTrait>(conn: &C, board_id: i32, user_id: i32) -> Result<Permission> {
    let membership = BoardMembers::find_by_id((board_id, user_id)).one(conn).await?;
    match membership {
        Some(m) if m.permission.can_edit() => Ok(m.permission),
        _ => {
            Err(AppError::access_denied(format!(
                "User {} may not edit board {}",
                user_id, board_id
            )))
        },
    }
}

/// Requires Admin permission on a board.
pub(crate) async fn require_admin<C: ConnectionTrait>(conn: &C, board_id: i32, user_id: i32) -> Result<()> {
    let membership = BoardMembers::find_by_id((board_id, user_id)).one(conn).await?;
    match membership {
        Some(m) if m.permission.is_admin() => Ok(()),
        _ => {
            Err(AppError::access_denied(format!(
                "User {} is not an admin of board {}",
                user_id, board_id
            )))
        },
    }
}

/// Checks that a list can take one more card.
///
/// A `card_limit` of zero means unlimited. Callers run this inside the
/// same transaction as the insert or move. The list row is re-selected
/// under an exclusive lock first, so two transactions racing for the
/// last slot serialize on the row; counting through a locking read
/// makes the loser see the winner's insert rather than its own stale
/// snapshot. SQLite ignores both lock clauses; its single writer
/// serializes transactions on its own.
pub(crate) async fn ensure_capacity<C: ConnectionTrait>(conn: &C, list: &entity::lists::Model) -> Result<()> {
    if !list.has_card_limit() {
        return Ok(());
    }
    Lists::find_by_id(list.id).lock_exclusive().one(conn).await?;
    let count = Cards::find()
        .filter(entity::cards::Column::ListId.eq(list.id))
        .lock_shared()
        .all(conn)
        .await?
        .len() as u64;
    if count >= list.card_limit as u64 {
        return Err(AppError::capacity_exceeded(format!(
            "List '{}' is at its card limit of {}",
            list.title, list.card_limit
        )));
    }
    Ok(())
}
