//! # Board View Integration Tests
//!
//! Verifies the read model: column ordering, empty-list rendering,
//! title-based bucketing, assignee display, progress math, and the
//! completion filter.

mod common;

use entity::Permission;
use error::AppError;
use sea_orm::{ActiveModelTrait, DbConn, Set};
use server::{read_model, AuthContext};
use uuid::Uuid;

fn viewer(user_id: i32, name: &str) -> AuthContext {
    AuthContext {
        user_id,
        display_name: name.to_string(),
        session_id: Uuid::new_v4(),
    }
}

async fn complete_card(db: &DbConn, card: entity::cards::Model) {
    let mut active: entity::cards::ActiveModel = card.into();
    active.is_completed = Set(true);
    active.update(db).await.unwrap();
}

#[tokio::test]
async fn test_empty_board_renders_all_columns() {
    let db = common::setup_db().await;
    let fixture = common::setup_board(&db).await;

    let view = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap();

    assert_eq!(view.board_name, "Engineering Sprint");
    assert_eq!(view.viewer_name, "Mina");
    assert_eq!(view.progress, 0);

    let titles: Vec<&str> = view.lists.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["To Do", "Doing", "Done"]);
    assert!(view.lists.iter().all(|l| l.cards.is_empty()));
}

#[tokio::test]
async fn test_unknown_board_is_not_found() {
    let db = common::setup_db().await;
    let fixture = common::setup_board(&db).await;

    let err = read_model::board_view(&db, 999, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_permission_reflects_membership() {
    let db = common::setup_db().await;
    let fixture = common::setup_board(&db).await;

    let view = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap();
    assert_eq!(view.permission, Permission::Admin.to_string());

    // No membership row falls back to read-only.
    let outsider = common::insert_user(&db, "Jonas", "Weber").await;
    let view = read_model::board_view(&db, fixture.board.id, &viewer(outsider.id, "Jonas"), None)
        .await
        .unwrap();
    assert_eq!(view.permission, Permission::View.to_string());
}

#[tokio::test]
async fn test_cards_are_bucketed_with_assignees() {
    let db = common::setup_db().await;
    let fixture = common::setup_board(&db).await;

    let first = common::insert_card(&db, fixture.todo.id, "Plan sprint", fixture.owner.id).await;
    let second = common::insert_card(&db, fixture.todo.id, "Write tests", fixture.owner.id).await;
    common::insert_card(&db, fixture.doing.id, "Fix login", fixture.editor.id).await;
    common::insert_assignee(&db, first.id, fixture.editor.id).await;
    common::insert_assignee(&db, first.id, fixture.viewer.id).await;

    let view = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap();

    let todo = &view.lists[0];
    assert_eq!(todo.cards.len(), 2);
    // Cards keep insertion order within a column.
    assert_eq!(todo.cards[0].id, first.id);
    assert_eq!(todo.cards[1].id, second.id);
    assert_eq!(todo.cards[0].assignees, "Felix Braun, Priya Nair");
    assert_eq!(todo.cards[1].assignees, "");

    let doing = &view.lists[1];
    assert_eq!(doing.cards.len(), 1);
    assert_eq!(doing.cards[0].title, "Fix login");
    assert_eq!(doing.cards[0].modified_by, "Felix Braun");
}

#[tokio::test]
async fn test_board_view_render_is_idempotent() {
    let db = common::setup_db().await;
    let fixture = common::setup_board(&db).await;

    let first = common::insert_card(&db, fixture.todo.id, "Plan sprint", fixture.owner.id).await;
    common::insert_card(&db, fixture.todo.id, "Write tests", fixture.owner.id).await;
    let in_flight = common::insert_card(&db, fixture.doing.id, "Fix login", fixture.editor.id).await;
    common::insert_assignee(&db, first.id, fixture.editor.id).await;
    complete_card(&db, in_flight).await;

    // Two renders with no writes in between agree on everything,
    // ordering and progress included.
    let view = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap();
    let again = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap();

    assert_eq!(view, again);
    assert_eq!(view.progress, 33);
}

#[tokio::test]
async fn test_board_progress_is_floored() {
    let db = common::setup_db().await;
    let fixture = common::setup_board(&db).await;

    let mut cards = Vec::new();
    for i in 0..3 {
        cards.push(common::insert_card(&db, fixture.todo.id, &format!("Task {}", i), fixture.owner.id).await);
    }
    let done = cards.remove(0);
    complete_card(&db, done).await;

    // 1 of 3 completed floors to 33.
    let view = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap();
    assert_eq!(view.progress, 33);

    // Reading the board does not change it.
    let again = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap();
    assert_eq!(view, again);
}

#[tokio::test]
async fn test_completion_filter() {
    let db = common::setup_db().await;
    let fixture = common::setup_board(&db).await;

    let open = common::insert_card(&db, fixture.todo.id, "Open task", fixture.owner.id).await;
    let closed = common::insert_card(&db, fixture.todo.id, "Closed task", fixture.owner.id).await;
    complete_card(&db, closed.clone()).await;

    let completed_only = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), Some(true))
        .await
        .unwrap();
    let shown: Vec<i32> = completed_only.lists[0].cards.iter().map(|c| c.id).collect();
    assert_eq!(shown, vec![closed.id]);

    let open_only = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), Some(false))
        .await
        .unwrap();
    let shown: Vec<i32> = open_only.lists[0].cards.iter().map(|c| c.id).collect();
    assert_eq!(shown, vec![open.id]);

    // Progress is computed over the cards actually shown.
    assert_eq!(completed_only.progress, 100);
    assert_eq!(open_only.progress, 0);
}

#[tokio::test]
async fn test_all_boards_navigation() {
    let db = common::setup_db().await;
    let fixture = common::setup_board(&db).await;
    common::insert_board(&db, "Marketing", fixture.owner.id).await;

    let view = read_model::board_view(&db, fixture.board.id, &viewer(fixture.owner.id, "Mina"), None)
        .await
        .unwrap();
    let names: Vec<&str> = view.all_boards.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Engineering Sprint", "Marketing"]);
}
