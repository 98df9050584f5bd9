//! # Common Test Utilities
//!
//! Shared test infrastructure: an in-memory SQLite database with the
//! full schema applied, plus fixture helpers for users, boards, lists,
//! cards, and memberships.

#![allow(dead_code)]

use std::sync::Once;

use chrono::NaiveDateTime;
use entity::{board_members, boards, card_members, cards, lists, users, Permission, Priority, Visibility};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DbConn, Set};
use server::{AppState, ServerConfig};

static INIT: Once = Once::new();

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// In-memory test database with the schema applied.
///
/// SQLite gives every pooled connection its own `:memory:` database,
/// so the pool is pinned to a single connection.
pub async fn setup_db() -> DbConn {
    init_test_env();
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let conn = Database::connect(options).await.unwrap();
    Migrator::up(&conn, None).await.unwrap();
    conn
}

/// Application state around an in-memory database.
pub async fn setup_state() -> AppState {
    let db = setup_db().await;
    let config = ServerConfig {
        host:             "127.0.0.1".to_string(),
        port:             0,
        session_secret:   "test-session-secret".to_string(),
        default_board_id: 1,
    };
    AppState::new(db, config)
}

fn epoch() -> NaiveDateTime { NaiveDateTime::default() }

pub async fn insert_user(db: &DbConn, first_name: &str, last_name: &str) -> users::Model {
    users::ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        email: Set(format!("{}.{}@example.com", first_name.to_lowercase(), last_name.to_lowercase())),
        created_at: Set(epoch()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_board(db: &DbConn, name: &str, created_by: i32) -> boards::Model {
    boards::ActiveModel {
        workspace_id: Set(1),
        name: Set(name.to_string()),
        visibility: Set(Visibility::Workspace),
        created_by: Set(created_by),
        created_at: Set(epoch()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_member(db: &DbConn, board_id: i32, user_id: i32, permission: Permission) {
    board_members::ActiveModel {
        board_id:   Set(board_id),
        user_id:    Set(user_id),
        permission: Set(permission),
        joined_at:  Set(epoch()),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn insert_list(db: &DbConn, board_id: i32, title: &str, position: i32, card_limit: i32) -> lists::Model {
    lists::ActiveModel {
        board_id: Set(board_id),
        title: Set(title.to_string()),
        position: Set(position),
        card_limit: Set(card_limit),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_card(db: &DbConn, list_id: i32, title: &str, created_by: i32) -> cards::Model {
    cards::ActiveModel {
        list_id: Set(list_id),
        title: Set(title.to_string()),
        description: Set(None),
        priority: Set(Priority::Medium),
        is_completed: Set(false),
        start_date: Set(None),
        due_date: Set(None),
        created_by: Set(created_by),
        created_at: Set(epoch()),
        modified_by: Set(created_by),
        modified_at: Set(epoch()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_assignee(db: &DbConn, card_id: i32, user_id: i32) {
    card_members::ActiveModel {
        card_id: Set(card_id),
        user_id: Set(user_id),
        role:    Set(card_members::ASSIGNEE_ROLE.to_string()),
    }
    .insert(db)
    .await
    .unwrap();
}

/// A fully wired board: owner (Admin), one editor, one viewer, and
/// three lists where "Doing" carries a card limit of 2.
pub struct BoardFixture {
    pub board:  boards::Model,
    pub owner:  users::Model,
    pub editor: users::Model,
    pub viewer: users::Model,
    pub todo:   lists::Model,
    pub doing:  lists::Model,
    pub done:   lists::Model,
}

pub async fn setup_board(db: &DbConn) -> BoardFixture {
    let owner = insert_user(db, "Mina", "Sato").await;
    let editor = insert_user(db, "Felix", "Braun").await;
    let viewer = insert_user(db, "Priya", "Nair").await;

    let board = insert_board(db, "Engineering Sprint", owner.id).await;
    insert_member(db, board.id, owner.id, Permission::Admin).await;
    insert_member(db, board.id, editor.id, Permission::Edit).await;
    insert_member(db, board.id, viewer.id, Permission::View).await;

    let todo = insert_list(db, board.id, "To Do", 1, 0).await;
    let doing = insert_list(db, board.id, "Doing", 2, 2).await;
    let done = insert_list(db, board.id, "Done", 3, 0).await;

    BoardFixture {
        board,
        owner,
        editor,
        viewer,
        todo,
        doing,
        done,
    }
}
