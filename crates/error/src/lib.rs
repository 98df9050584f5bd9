//! # Kanri Error Infrastructure
//!
//! Error types and API response handling for the Kanri application.

pub mod middleware;
pub mod rejection;
pub mod response;
pub mod traits;

pub use response::{ApiResponse, ApiResponseBuilder};
pub use traits::ResultExt;
pub use middleware::ErrorHandler;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
///
/// Board and card workflows surface their guard failures through the
/// first five variants; the rest cover infrastructure faults. Every
/// variant carries a stable code for API clients and a notice token
/// for the form redirect flow.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("AccessDenied: {message}")]
    AccessDenied {
        message: String,
    },

    #[error("CapacityExceeded: {message}")]
    CapacityExceeded {
        message: String,
    },

    #[error("InvalidState: {message}")]
    InvalidState {
        message: String,
    },

    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },

    #[error("IO: {message}")]
    Io {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },
}

/// Seed operation result
#[derive(Debug, Clone)]
pub struct SeedResult {
    /// Number of records inserted
    pub inserted_count: usize,
    /// Seed name for logging
    pub seed_name:      String,
    /// Duration of the seed operation in milliseconds
    pub duration_ms:    u64,
    /// Any errors that occurred
    pub errors:         Vec<String>,
}

impl SeedResult {
    /// Creates a new successful seed result
    #[must_use]
    pub fn success(seed_name: &str, inserted: usize, duration_ms: u64) -> Self {
        Self {
            inserted_count: inserted,
            seed_name: seed_name.to_string(),
            duration_ms,
            errors: Vec::new(),
        }
    }

    /// Creates a new failed seed result
    #[must_use]
    pub fn with_error(seed_name: &str, error: &str) -> Self {
        Self {
            inserted_count: 0,
            seed_name:      seed_name.to_string(),
            duration_ms:    0,
            errors:         vec![error.to_string()],
        }
    }

    /// Returns true if the seed operation was successful
    #[must_use]
    pub fn is_success(&self) -> bool { self.errors.is_empty() }
}

impl AppError {
    /// Create an access denied error.
    #[inline]
    pub fn access_denied(message: impl ToString) -> Self {
        Self::AccessDenied {
            message: message.to_string(),
        }
    }

    /// Create a capacity exceeded error.
    #[inline]
    pub fn capacity_exceeded(message: impl ToString) -> Self {
        Self::CapacityExceeded {
            message: message.to_string(),
        }
    }

    /// Create an invalid state error.
    #[inline]
    pub fn invalid_state(message: impl ToString) -> Self {
        Self::InvalidState {
            message: message.to_string(),
        }
    }

    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            message: resource.to_string(),
        }
    }

    /// Create an unauthorized error.
    #[inline]
    pub fn unauthorized(message: impl ToString) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::AccessDenied {
                ..
            } => http::StatusCode::FORBIDDEN,
            AppError::CapacityExceeded {
                ..
            } => http::StatusCode::CONFLICT,
            AppError::InvalidState {
                ..
            } => http::StatusCode::CONFLICT,
            AppError::NotFound {
                ..
            } => http::StatusCode::NOT_FOUND,
            AppError::Unauthorized {
                ..
            } => http::StatusCode::UNAUTHORIZED,
            AppError::Validation {
                ..
            } => http::StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::AccessDenied {
                ..
            } => "ACCESS_DENIED",
            AppError::CapacityExceeded {
                ..
            } => "CAPACITY_EXCEEDED",
            AppError::InvalidState {
                ..
            } => "INVALID_STATE",
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::Unauthorized {
                ..
            } => "UNAUTHORIZED",
            AppError::Validation {
                ..
            } => "VALIDATION_ERROR",
            AppError::Database {
                ..
            } => "DATABASE_ERROR",
            AppError::Config {
                ..
            } => "CONFIG_ERROR",
            AppError::Io {
                ..
            } => "IO_ERROR",
            AppError::Internal {
                ..
            } => "INTERNAL_ERROR",
        }
    }

    /// Get the notice token carried in redirect query strings.
    ///
    /// Tokens are lowercase ASCII so redirects never need percent-encoding.
    pub fn notice(&self) -> &'static str {
        match self {
            AppError::AccessDenied {
                ..
            } => "access_denied",
            AppError::CapacityExceeded {
                ..
            } => "capacity_exceeded",
            AppError::InvalidState {
                ..
            } => "invalid_state",
            AppError::NotFound {
                ..
            } => "not_found",
            AppError::Unauthorized {
                ..
            } => "login_required",
            AppError::Validation {
                ..
            } => "invalid_input",
            AppError::Database {
                ..
            } => "server_error",
            AppError::Config {
                ..
            } => "server_error",
            AppError::Io {
                ..
            } => "server_error",
            AppError::Internal {
                ..
            } => "server_error",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::AccessDenied {
                message,
            } => message.clone(),
            AppError::CapacityExceeded {
                message,
            } => message.clone(),
            AppError::InvalidState {
                message,
            } => message.clone(),
            AppError::NotFound {
                message,
            } => message.clone(),
            AppError::Unauthorized {
                message,
            } => message.clone(),
            AppError::Validation {
                message,
            } => message.clone(),
            AppError::Database {
                message,
            } => message.clone(),
            AppError::Config {
                message,
            } => message.clone(),
            AppError::Io {
                message,
            } => message.clone(),
            AppError::Internal {
                message,
            } => message.clone(),
        }
    }

    /// Add context to the error.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let context_msg = context.to_string();
        match self {
            AppError::AccessDenied {
                message,
            } => {
                Self::AccessDenied {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::CapacityExceeded {
                message,
            } => {
                Self::CapacityExceeded {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::InvalidState {
                message,
            } => {
                Self::InvalidState {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::NotFound {
                message,
            } => {
                Self::NotFound {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Unauthorized {
                message,
            } => {
                Self::Unauthorized {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Validation {
                message,
            } => {
                Self::Validation {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Database {
                message,
            } => {
                Self::Database {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Config {
                message,
            } => {
                Self::Config {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Io {
                message,
            } => {
                Self::Io {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Internal {
                message,
            } => {
                Self::Internal {
                    message: format!("{}: {}", context_msg, message),
                }
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert String to AppError.
impl From<String> for AppError {
    fn from(s: String) -> Self {
        Self::Validation {
            message: s,
        }
    }
}

/// Convert &str to AppError.
impl From<&str> for AppError {
    fn from(s: &str) -> Self { Self::from(s.to_string()) }
}

/// Convert Sea-ORM database errors to AppError.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotFound(message) => {
                Self::NotFound {
                    message,
                }
            },
            other => {
                Self::Database {
                    message: other.to_string(),
                }
            },
        }
    }
}

/// Convert validator validation errors to AppError.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Convert all errors to strings
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string())
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        }
        else {
            messages.join(", ")
        };

        Self::Validation {
            message,
        }
    }
}
