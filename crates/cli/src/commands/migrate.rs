//! # CLI Migration Command
//!
//! Database migration handling for the Kanri CLI.

use error::Result;
use migration::MigratorTrait as _;
use tracing::info;

use crate::commands::MigrateArgs;

/// Runs database migrations against the configured database.
pub async fn migrate(args: MigrateArgs) -> Result<()> {
    info!(
        target: "migrate",
        rollback = %args.rollback,
        dry_run = %args.dry_run,
        seed = %args.seed,
        "Running database migrations..."
    );

    let database_url = migration::db::database_url_from_env();
    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    if args.dry_run {
        migration::Migrator::status(&db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read migration status: {}", e))?;
        return Ok(());
    }

    if args.rollback {
        info!(target: "migrate", "Rolling back the last migration...");

        migration::Migrator::down(&db, Some(1))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to rollback migration: {}", e))?;

        info!(target: "migrate", "Rollback completed successfully");
        return Ok(());
    }

    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    info!(target: "migrate", "Migrations completed successfully");

    if args.seed {
        let sea_db = migration::SeaDb::new(db);
        migration::seeds::run_all_seeds(&sea_db, true).await?;
        info!(target: "migrate", "Seed data completed successfully");
    }

    Ok(())
}
