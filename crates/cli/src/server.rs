//! # CLI Server
//!
//! Server startup and management for the Kanri CLI.

use std::net::SocketAddr;

use anyhow::anyhow;
use error::Result;
use migration::{Migrator, MigratorTrait as _};
use server::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Starts the web server.
///
/// Connects to the database, applies pending migrations, seeds demo
/// data unless told otherwise, and serves until a shutdown signal.
pub async fn serve(args: &crate::commands::ServeArgs) -> Result<()> {
    info!(target: "serve", "Starting Kanri server...");

    let database_url = migration::db::database_url_from_env();

    info!(target: "serve", "Connecting to database...");
    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    info!(target: "serve", "Running database migrations...");
    Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow!("Failed to run database migrations: {}", e))?;
    info!(target: "serve", "Database migrations completed successfully");

    if args.skip_seeds {
        info!(target: "serve", "Skipping seed data");
    }
    else {
        let sea_db = migration::SeaDb::new(db.clone());
        migration::seeds::run_all_seeds(&sea_db, false)
            .await
            .map_err(|e| anyhow!("Seeding failed: {}", e))?;
        info!(target: "serve", "Seed data completed successfully");
    }

    let mut config = ServerConfig::from_env();
    config.host = args.host.clone();
    config.port = args.port;
    if config.uses_dev_secret() {
        warn!(target: "serve", "KANRI_SESSION_SECRET is unset; session cookies use the development fallback");
    }

    let state = AppState::new(db, config);
    let app = server::create_app_router(state);

    let address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| anyhow!("Invalid address {}:{}: {}", args.host, args.port, e))?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {}: {}", address, e))?;

    info!(target: "serve", %address, "Starting HTTP server...");

    Ok(axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("HTTP server error: {}", e))?)
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(target: "serve", error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => warn!(target: "serve", error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!(target: "serve", "Received Ctrl+C, shutting down..."),
        () = terminate => info!(target: "serve", "Received SIGTERM, shutting down..."),
    }
}
