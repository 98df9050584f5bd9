//! # Kanri API Server
//!
//! Axum-based HTTP server for the Kanri Kanban boards.
//!
//! ## Modules
//!
//! - [`session`]: Cookie-backed login sessions
//! - [`middleware`]: HTTP middleware (auth, security headers, request log)
//! - [`read_model`]: The board view model
//! - [`workflows`]: Transactional card/list/board operations
//! - [`dto`]: Request/response data transfer objects
//! - [`router`]: Route configuration

pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod read_model;
pub mod router;
pub mod session;
pub mod workflows;

pub use config::ServerConfig;
pub use router::create_app_router;
pub use session::AuthContext;

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db:     sea_orm::DbConn,
    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Creates application state from a connection and configuration.
    #[must_use]
    pub fn new(db: sea_orm::DbConn, config: ServerConfig) -> Self {
        Self {
            db,
            config,
        }
    }
}
