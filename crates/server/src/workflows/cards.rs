//! # Card Workflows
//!
//! Create, update and delete cards. Each operation runs in one
//! transaction with a fixed check order: permission first, capacity
//! second, mutation last.

use chrono::{NaiveDate, Utc};
use entity::{card_members, cards, CardMembers, Cards, Lists, Priority};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, NotSet, QueryFilter, Set, TransactionTrait};

use super::{ensure_capacity, require_edit};

/// Input for creating a card.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub list_id:      i32,
    pub title:        String,
    pub description:  Option<String>,
    pub priority:     Priority,
    pub start_date:   Option<NaiveDate>,
    pub due_date:     Option<NaiveDate>,
    pub assignee_ids: Vec<i32>,
}

/// Input for updating a card. Carries the full new state of every
/// mutable field; the assignee set is replaced wholesale.
#[derive(Debug, Clone)]
pub struct CardUpdate {
    pub title:        String,
    pub priority:     Priority,
    pub is_completed: bool,
    pub description:  Option<String>,
    pub list_id:      i32,
    pub due_date:     Option<NaiveDate>,
    pub assignee_ids: Vec<i32>,
}

/// Creates a card with its assignees in one transaction.
///
/// Check order: permission on the owning board, then list capacity,
/// then the inserts. Either everything commits or nothing does, so a
/// partially inserted assignee set is never observable.
pub async fn create_card(db: &DbConn, creator_id: i32, input: NewCard) -> Result<cards::Model> {
    let txn = db.begin().await?;

    let list = Lists::find_by_id(input.list_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("List {}", input.list_id)))?;

    require_edit(&txn, list.board_id, creator_id).await?;
    ensure_capacity(&txn, &list).await?;

    let now = Utc::now().naive_utc();
    let card = cards::ActiveModel {
        id:           NotSet,
        list_id:      Set(list.id),
        title:        Set(input.title),
        description:  Set(input.description),
        priority:     Set(input.priority),
        is_completed: Set(false),
        start_date:   Set(input.start_date),
        due_date:     Set(input.due_date),
        created_by:   Set(creator_id),
        created_at:   Set(now),
        modified_by:  Set(creator_id),
        modified_at:  Set(now),
    };
    let card = card.insert(&txn).await?;

    let assignees = assignee_rows(card.id, &input.assignee_ids);
    if !assignees.is_empty() {
        CardMembers::insert_many(assignees).exec(&txn).await?;
    }

    txn.commit().await?;
    tracing::info!(card_id = card.id, list_id = card.list_id, creator_id, "card created");
    Ok(card)
}

/// Updates a card, possibly moving it to another list, and replaces
/// its assignee set.
///
/// The editor is authorized against the board owning the card's
/// *current* list; a move checks capacity on the *destination* list.
pub async fn update_card(db: &DbConn, editor_id: i32, card_id: i32, input: CardUpdate) -> Result<cards::Model> {
    let txn = db.begin().await?;

    let card = Cards::find_by_id(card_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Card {}", card_id)))?;

    let current_list = Lists::find_by_id(card.list_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("List {}", card.list_id)))?;

    require_edit(&txn, current_list.board_id, editor_id).await?;

    if input.list_id != card.list_id {
        let target = Lists::find_by_id(input.list_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(format!("List {}", input.list_id)))?;
        ensure_capacity(&txn, &target).await?;
    }

    let mut active: cards::ActiveModel = card.into();
    active.title = Set(input.title);
    active.priority = Set(input.priority);
    active.is_completed = Set(input.is_completed);
    active.description = Set(input.description);
    active.list_id = Set(input.list_id);
    active.due_date = Set(input.due_date);
    active.modified_by = Set(editor_id);
    active.modified_at = Set(Utc::now().naive_utc());
    let card = active.update(&txn).await?;

    // Full replace: delete every existing assignment, then insert the
    // submitted set. An empty set is valid and clears all assignees.
    CardMembers::delete_many()
        .filter(card_members::Column::CardId.eq(card.id))
        .exec(&txn)
        .await?;
    let assignees = assignee_rows(card.id, &input.assignee_ids);
    if !assignees.is_empty() {
        CardMembers::insert_many(assignees).exec(&txn).await?;
    }

    txn.commit().await?;
    tracing::info!(card_id = card.id, list_id = card.list_id, editor_id, "card updated");
    Ok(card)
}

/// Deletes a card and its assignments.
///
/// Refused with `AccessDenied` when the caller may not edit the
/// owning board, and with `InvalidState` when the card is completed.
pub async fn delete_card(db: &DbConn, user_id: i32, card_id: i32) -> Result<()> {
    let txn = db.begin().await?;

    let card = Cards::find_by_id(card_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Card {}", card_id)))?;

    let list = Lists::find_by_id(card.list_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("List {}", card.list_id)))?;

    require_edit(&txn, list.board_id, user_id).await?;

    if card.is_completed {
        return Err(AppError::invalid_state(format!(
            "Card {} is completed and cannot be deleted",
            card.id
        )));
    }

    CardMembers::delete_many()
        .filter(card_members::Column::CardId.eq(card.id))
        .exec(&txn)
        .await?;
    Cards::delete_by_id(card.id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(card_id, user_id, "card deleted");
    Ok(())
}

/// Deduplicated assignment rows for a card.
fn assignee_rows(card_id: i32, assignee_ids: &[i32]) -> Vec<card_members::ActiveModel> {
    let mut seen = Vec::new();
    assignee_ids
        .iter()
        .filter(|id| {
            if seen.contains(*id) {
                false
            }
            else {
                seen.push(**id);
                true
            }
        })
        .map(|&user_id| {
            card_members::ActiveModel {
                card_id: Set(card_id),
                user_id: Set(user_id),
                role:    Set(card_members::ASSIGNEE_ROLE.to_string()),
            }
        })
        .collect()
}
