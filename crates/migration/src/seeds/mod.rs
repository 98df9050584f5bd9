//! # Seed Data Management
//!
//! This module provides utilities for seeding the database with
//! demo data: the accounts offered on the login page and a set of
//! boards with lists, memberships and cards to click around in.
//!
//! Every provider is idempotent. When its table already holds rows the
//! provider records a skip instead of duplicating data.

use std::time::Instant;

use ::error::{AppError, SeedResult};
use chrono::Utc;
use entity::{
    BoardMembers, Boards, CardMembers, Cards, Lists, Users, board_members, boards, card_members, cards, lists, users,
};
use sea_orm::{EntityTrait, PaginatorTrait, Set};

/// Trait for seed data providers
///
/// Implement this trait to provide seed data for the database.
#[async_trait::async_trait]
pub trait SeedProvider {
    /// The name of this seed
    fn name(&self) -> &str;

    /// Runs the seed operation
    ///
    /// # Arguments
    ///
    /// * `db` - The database connection
    ///
    /// # Errors
    ///
    /// Returns an error if the seed operation fails.
    async fn run(&self, db: &crate::SeaDb) -> Result<SeedResult, AppError>;
}

/// Demo accounts surfaced on the login page.
pub struct DemoUsersSeed;

#[async_trait::async_trait]
impl SeedProvider for DemoUsersSeed {
    fn name(&self) -> &str { "demo_users" }

    async fn run(&self, db: &crate::SeaDb) -> Result<SeedResult, AppError> {
        let started = Instant::now();

        let existing = Users::find().count(&db.inner).await?;
        if existing > 0 {
            tracing::info!(existing, "users table already populated, skipping demo users");
            return Ok(SeedResult::success(self.name(), 0, elapsed_ms(started)));
        }

        let rows = vec![
            demo_user(1, "Mina", "Okabe", "mina@kanri.dev"),
            demo_user(2, "Felix", "Moreau", "felix@kanri.dev"),
            demo_user(3, "Priya", "Nair", "priya@kanri.dev"),
            demo_user(4, "Jonas", "Eriksson", "jonas@kanri.dev"),
        ];
        let inserted = rows.len();
        Users::insert_many(rows).exec(&db.inner).await?;

        Ok(SeedResult::success(self.name(), inserted, elapsed_ms(started)))
    }
}

/// Demo boards with their lists, memberships, cards and assignees.
///
/// Runs after [`DemoUsersSeed`] because every row here points at a
/// demo account.
pub struct DemoBoardsSeed;

#[async_trait::async_trait]
impl SeedProvider for DemoBoardsSeed {
    fn name(&self) -> &str { "demo_boards" }

    async fn run(&self, db: &crate::SeaDb) -> Result<SeedResult, AppError> {
        let started = Instant::now();

        let existing = Boards::find().count(&db.inner).await?;
        if existing > 0 {
            tracing::info!(existing, "boards table already populated, skipping demo boards");
            return Ok(SeedResult::success(self.name(), 0, elapsed_ms(started)));
        }

        let mut inserted = 0;

        // Boards, all owned by Mina
        let board_rows = vec![
            demo_board(1, "Product Roadmap"),
            demo_board(2, "Marketing"),
            demo_board(3, "Engineering Sprint"),
        ];
        inserted += board_rows.len();
        Boards::insert_many(board_rows).exec(&db.inner).await?;

        // Three standard columns per board. "Doing" carries a capacity of
        // five cards so the limit path is visible out of the box.
        let mut list_rows = Vec::new();
        for (board_id, first_list_id) in [(1, 1), (2, 4), (3, 7)] {
            list_rows.push(demo_list(first_list_id, board_id, "To Do", 1, 0));
            list_rows.push(demo_list(first_list_id + 1, board_id, "Doing", 2, 5));
            list_rows.push(demo_list(first_list_id + 2, board_id, "Done", 3, 0));
        }
        inserted += list_rows.len();
        Lists::insert_many(list_rows).exec(&db.inner).await?;

        // Memberships: Mina administers everything, Felix can edit the
        // sprint board and Priya can only watch it.
        let member_rows = vec![
            demo_member(1, 1, entity::Permission::Admin),
            demo_member(2, 1, entity::Permission::Admin),
            demo_member(3, 1, entity::Permission::Admin),
            demo_member(3, 2, entity::Permission::Edit),
            demo_member(3, 3, entity::Permission::View),
        ];
        inserted += member_rows.len();
        BoardMembers::insert_many(member_rows).exec(&db.inner).await?;

        // Cards on the sprint board: two queued, one in flight.
        let card_rows = vec![
            demo_card(
                1,
                7,
                "Set up CI pipeline",
                Some("Run fmt, clippy and the test suite on every push."),
                entity::Priority::High,
            ),
            demo_card(2, 7, "Write onboarding guide", None, entity::Priority::Medium),
            demo_card(
                3,
                8,
                "Refactor session handling",
                Some("Move cookie verification behind the auth middleware."),
                entity::Priority::Urgent,
            ),
        ];
        inserted += card_rows.len();
        Cards::insert_many(card_rows).exec(&db.inner).await?;

        let assignee_rows = vec![
            demo_assignee(1, 2),
            demo_assignee(1, 3),
            demo_assignee(2, 2),
        ];
        inserted += assignee_rows.len();
        CardMembers::insert_many(assignee_rows).exec(&db.inner).await?;

        Ok(SeedResult::success(self.name(), inserted, elapsed_ms(started)))
    }
}

fn demo_user(id: i32, first_name: &str, last_name: &str, email: &str) -> users::ActiveModel {
    users::ActiveModel {
        id:         Set(id),
        first_name: Set(first_name.to_string()),
        last_name:  Set(last_name.to_string()),
        email:      Set(email.to_string()),
        created_at: Set(Utc::now().naive_utc()),
    }
}

fn demo_board(id: i32, name: &str) -> boards::ActiveModel {
    boards::ActiveModel {
        id:           Set(id),
        workspace_id: Set(1),
        name:         Set(name.to_string()),
        visibility:   Set(entity::Visibility::Workspace),
        created_by:   Set(1),
        created_at:   Set(Utc::now().naive_utc()),
    }
}

fn demo_list(id: i32, board_id: i32, title: &str, position: i32, card_limit: i32) -> lists::ActiveModel {
    lists::ActiveModel {
        id:         Set(id),
        board_id:   Set(board_id),
        title:      Set(title.to_string()),
        position:   Set(position),
        card_limit: Set(card_limit),
    }
}

fn demo_member(board_id: i32, user_id: i32, permission: entity::Permission) -> board_members::ActiveModel {
    board_members::ActiveModel {
        board_id:   Set(board_id),
        user_id:    Set(user_id),
        permission: Set(permission),
        joined_at:  Set(Utc::now().naive_utc()),
    }
}

fn demo_card(
    id: i32,
    list_id: i32,
    title: &str,
    description: Option<&str>,
    priority: entity::Priority,
) -> cards::ActiveModel {
    let now = Utc::now().naive_utc();
    cards::ActiveModel {
        id:           Set(id),
        list_id:      Set(list_id),
        title:        Set(title.to_string()),
        description:  Set(description.map(str::to_string)),
        priority:     Set(priority),
        is_completed: Set(false),
        start_date:   Set(None),
        due_date:     Set(chrono::NaiveDate::from_ymd_opt(2025, 3, 14)),
        created_by:   Set(1),
        created_at:   Set(now),
        modified_by:  Set(1),
        modified_at:  Set(now),
    }
}

fn demo_assignee(card_id: i32, user_id: i32) -> card_members::ActiveModel {
    card_members::ActiveModel {
        card_id: Set(card_id),
        user_id: Set(user_id),
        role:    Set(card_members::ASSIGNEE_ROLE.to_string()),
    }
}

fn elapsed_ms(started: Instant) -> u64 { started.elapsed().as_millis() as u64 }

/// Runs all registered seed providers
///
/// # Arguments
///
/// * `db` - The database connection
/// * `verbose` - Whether to print verbose output
///
/// # Errors
///
/// Returns an error if any seed operation fails.
pub async fn run_all_seeds(db: &crate::SeaDb, verbose: bool) -> Result<Vec<SeedResult>, AppError> {
    let providers: Vec<Box<dyn SeedProvider + Send + Sync>> = vec![
        Box::new(DemoUsersSeed),
        Box::new(DemoBoardsSeed),
    ];

    let mut results = Vec::new();
    for provider in providers {
        let result = provider.run(db).await?;
        if verbose {
            tracing::info!(
                seed = result.seed_name,
                inserted = result.inserted_count,
                duration_ms = result.duration_ms,
                "seed finished"
            );
        }
        results.push(result);
    }

    Ok(results)
}
