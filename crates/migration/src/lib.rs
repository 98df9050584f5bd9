pub use sea_orm_migration::prelude::*;

pub mod db;
pub mod seeds;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_boards_table;
mod m20250301_000003_create_board_members_table;
mod m20250301_000004_create_lists_table;
mod m20250301_000005_create_cards_table;
mod m20250301_000006_create_card_members_table;
mod m20250301_000007_create_sessions_table;

pub use db::{DatabaseConfig, SeaDb, SslMode};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Migrations are executed in the order they appear in this list.
    /// Parent tables come first so the inline foreign keys resolve.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_boards_table::Migration),
            Box::new(m20250301_000003_create_board_members_table::Migration),
            Box::new(m20250301_000004_create_lists_table::Migration),
            Box::new(m20250301_000005_create_cards_table::Migration),
            Box::new(m20250301_000006_create_card_members_table::Migration),
            Box::new(m20250301_000007_create_sessions_table::Migration),
        ]
    }
}

/// Database connection helper for CLI usage
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}
