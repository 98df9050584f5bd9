//! # Board Read Model
//!
//! Builds the template-ready view of a board: every list as a column
//! in position order, each card with its assignees and audit trail,
//! plus the navigation data around it. Columns are pre-initialized
//! from the board's lists so empty lists still render; cards are
//! bucketed into them by list title, and a card whose title matches no
//! column is skipped silently.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use entity::{board_members, boards, card_members, cards, lists, users, BoardMembers, Boards, CardMembers, Cards,
             Lists, Permission, Priority, Users};
use error::{AppError, Result};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::session::AuthContext;

/// One card as shown on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub id:           i32,
    pub title:        String,
    pub priority:     Priority,
    pub due_date:     Option<NaiveDate>,
    /// Comma-joined full names of the card's assignees
    pub assignees:    String,
    /// Per-card progress percentage (100 when completed, else 0)
    pub progress:     u8,
    pub is_completed: bool,
    pub modified_at:  NaiveDateTime,
    /// Full name of the last modifier
    pub modified_by:  String,
}

/// One list column with its cards in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListColumn {
    pub id:         i32,
    pub title:      String,
    pub card_limit: i32,
    pub cards:      Vec<CardSummary>,
}

/// A board entry in the navigation menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRef {
    pub id:   i32,
    pub name: String,
}

/// The complete board view handed to the front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub board_id:    i32,
    pub board_name:  String,
    /// Display name of the viewing user (cached at login)
    pub viewer_name: String,
    /// The viewer's permission on this board; `view` when no
    /// membership row exists
    pub permission:  String,
    /// Percentage of the board's cards marked completed
    pub progress:    u8,
    pub all_boards:  Vec<BoardRef>,
    pub lists:       Vec<ListColumn>,
}

/// Board completion percentage, floored to an integer.
pub(crate) fn board_progress(completed: usize, total: usize) -> u8 {
    if total == 0 {
        0
    }
    else {
        (completed * 100 / total) as u8
    }
}

/// Builds the board view for one viewer.
///
/// `completed` filters the cards shown: `Some(true)` completed only,
/// `Some(false)` open only, `None` all.
pub async fn board_view<C: ConnectionTrait>(
    conn: &C,
    board_id: i32,
    viewer: &AuthContext,
    completed: Option<bool>,
) -> Result<BoardView> {
    let board = Boards::find_by_id(board_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Board {}", board_id)))?;

    let all_boards = Boards::find()
        .order_by_asc(boards::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(|b| {
            BoardRef {
                id:   b.id,
                name: b.name,
            }
        })
        .collect();

    let permission = BoardMembers::find_by_id((board_id, viewer.user_id))
        .one(conn)
        .await?
        .map(|m: board_members::Model| m.permission)
        .unwrap_or(Permission::View);

    let list_rows = Lists::find()
        .filter(lists::Column::BoardId.eq(board_id))
        .order_by_asc(lists::Column::Position)
        .all(conn)
        .await?;

    let list_ids: Vec<i32> = list_rows.iter().map(|l| l.id).collect();
    let title_by_list: HashMap<i32, String> = list_rows.iter().map(|l| (l.id, l.title.clone())).collect();

    let mut card_query = Cards::find().filter(cards::Column::ListId.is_in(list_ids.clone()));
    if let Some(flag) = completed {
        card_query = card_query.filter(cards::Column::IsCompleted.eq(flag));
    }
    let card_rows = card_query.order_by_asc(cards::Column::Id).all(conn).await?;

    // Names for assignees and modifiers, one lookup for both.
    let names: HashMap<i32, String> = Users::find()
        .all(conn)
        .await?
        .into_iter()
        .map(|u: users::Model| (u.id, u.full_name()))
        .collect();

    let card_ids: Vec<i32> = card_rows.iter().map(|c| c.id).collect();
    let mut assignees_by_card: HashMap<i32, Vec<String>> = HashMap::new();
    if !card_ids.is_empty() {
        let memberships = CardMembers::find()
            .filter(card_members::Column::CardId.is_in(card_ids))
            .order_by_asc(card_members::Column::UserId)
            .all(conn)
            .await?;
        for membership in memberships {
            if let Some(name) = names.get(&membership.user_id) {
                assignees_by_card
                    .entry(membership.card_id)
                    .or_default()
                    .push(name.clone());
            }
        }
    }

    // Pre-initialized columns keyed by title, so empty lists render
    // and a title mismatch drops the card instead of failing the view.
    let mut columns: Vec<ListColumn> = list_rows
        .iter()
        .map(|l| {
            ListColumn {
                id:         l.id,
                title:      l.title.clone(),
                card_limit: l.card_limit,
                cards:      Vec::new(),
            }
        })
        .collect();
    let index_by_title: HashMap<String, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.title.clone(), i))
        .collect();

    let mut total_cards = 0usize;
    let mut completed_cards = 0usize;

    for card in card_rows {
        let Some(title) = title_by_list.get(&card.list_id) else {
            continue;
        };
        let Some(&index) = index_by_title.get(title) else {
            continue;
        };

        total_cards += 1;
        if card.is_completed {
            completed_cards += 1;
        }

        let summary = CardSummary {
            id:           card.id,
            title:        card.title.clone(),
            priority:     card.priority.clone(),
            due_date:     card.due_date,
            assignees:    assignees_by_card.get(&card.id).map(|v| v.join(", ")).unwrap_or_default(),
            progress:     card.progress(),
            is_completed: card.is_completed,
            modified_at:  card.modified_at,
            modified_by:  names.get(&card.modified_by).cloned().unwrap_or_default(),
        };
        columns[index].cards.push(summary);
    }

    Ok(BoardView {
        board_id,
        board_name: board.name,
        viewer_name: viewer.display_name.clone(),
        permission: permission.to_string(),
        progress: board_progress(completed_cards, total_cards),
        all_boards,
        lists: columns,
    })
}
