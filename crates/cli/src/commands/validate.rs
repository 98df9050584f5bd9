//! # CLI Validate Command
//!
//! Configuration validation for the Kanri CLI.

use error::{AppError, Result};
use server::ServerConfig;
use tracing::warn;

/// Validates the runtime configuration.
///
/// Requires either `KANRI_DATABASE_URL` or the individual
/// `KANRI_DATABASE_*` variables, and warns when the development
/// session secret is still in use.
pub fn validate() -> Result<()> {
    if std::env::var("KANRI_DATABASE_URL").is_err() {
        let required_vars = [
            "KANRI_DATABASE_HOST",
            "KANRI_DATABASE_NAME",
            "KANRI_DATABASE_USER",
            "KANRI_DATABASE_PASSWORD",
        ];

        let missing: Vec<&&str> = required_vars
            .iter()
            .filter(|var| std::env::var(var).is_err())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "Missing required environment variables: {:?}",
                missing
            )));
        }
    }

    let config = ServerConfig::from_env();
    if config.uses_dev_secret() {
        warn!(target: "validate", "KANRI_SESSION_SECRET is unset; using the development fallback");
    }

    Ok(())
}
