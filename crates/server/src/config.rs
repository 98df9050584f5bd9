//! # Server Configuration
//!
//! Environment-driven settings for the HTTP server. Database settings
//! live in `migration::db`; this covers everything else the server
//! needs at runtime.

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host:             String,
    /// Port to bind to
    pub port:             u16,
    /// Secret used to derive the session cookie MAC key
    pub session_secret:   String,
    /// Board shown when no `board_id` query parameter is given
    pub default_board_id: i32,
}

/// Fallback secret for local development. `validate` warns when it is
/// still in use.
pub const DEV_SESSION_SECRET: &str = "kanri-dev-session-secret";

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads:
    /// - `KANRI_HOST` (default: "0.0.0.0")
    /// - `KANRI_PORT` (default: "8080")
    /// - `KANRI_SESSION_SECRET` (default: a development-only value)
    /// - `KANRI_DEFAULT_BOARD_ID` (default: "3")
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host:             std::env::var("KANRI_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:             std::env::var("KANRI_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            session_secret:   std::env::var("KANRI_SESSION_SECRET")
                .unwrap_or_else(|_| DEV_SESSION_SECRET.to_string()),
            default_board_id: std::env::var("KANRI_DEFAULT_BOARD_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
        }
    }

    /// Whether the development fallback secret is still in use.
    #[must_use]
    pub fn uses_dev_secret(&self) -> bool { self.session_secret == DEV_SESSION_SECRET }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host:             "0.0.0.0".to_string(),
            port:             8080,
            session_secret:   DEV_SESSION_SECRET.to_string(),
            default_board_id: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_board_id, 3);
        assert!(config.uses_dev_secret());
    }

    #[test]
    fn test_custom_secret_is_not_dev() {
        let config = ServerConfig {
            session_secret: "something-else".to_string(),
            ..ServerConfig::default()
        };
        assert!(!config.uses_dev_secret());
    }
}
