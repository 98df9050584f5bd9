//! # Logging Macros
//!
//! Convenience macros for structured logging of request, auth and
//! security events.

/// Log an API request with method, path, and status.
#[macro_export]
macro_rules! log_api_request {
    ($method:expr, $path:expr, $status:expr, $duration:expr) => {
        tracing::info!(
            target: "api",
            method = %$method,
            path = %$path,
            status = %$status,
            duration_ms = %$duration,
            "API request"
        )
    };
}

/// Log an authentication event.
#[macro_export]
macro_rules! log_auth_event {
    ($event:expr, $user_id:expr, $success:expr) => {
        tracing::info!(
            target: "auth",
            event = %$event,
            user_id = %$user_id,
            success = $success,
            "Authentication event"
        )
    };
}

/// Log a security event.
#[macro_export]
macro_rules! log_security_event {
    ($event:expr, $details:expr) => {
        tracing::warn!(
            target: "security",
            event = %$event,
            details = %$details,
            "Security event"
        )
    };
}
