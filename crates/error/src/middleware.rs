//! # Error Handling Middleware
//!
//! Converts application errors into HTTP responses.
//!
//! ## Usage
//!
//! ```rust
//! use error::{middleware::ErrorHandler, AppError};
//! use axum::{body::Body, response::Response};
//!
//! let handler = ErrorHandler::new(false);
//! let error = AppError::not_found("Board not found");
//! let response = handler.to_response(&error);
//! ```

use axum::{body::Body, http::StatusCode, response::Response};

use crate::{response::ApiResponse, AppError};

/// Error handler that converts errors to HTTP responses.
#[derive(Clone)]
pub struct ErrorHandler {
    /// Whether to include internal error details in 5xx responses.
    pub include_details: bool,
}

impl ErrorHandler {
    /// Create a new error handler.
    #[inline]
    pub fn new(include_details: bool) -> Self {
        Self {
            include_details,
        }
    }

    /// Convert an error to a response.
    ///
    /// Client errors keep their message so board members see why a
    /// guard refused them. Server error messages are replaced unless
    /// `include_details` is set.
    pub fn to_response(&self, err: &AppError) -> Response {
        let status = err.status();
        let code = err.code();
        let message = if status.is_server_error() && !self.include_details {
            "Internal server error".to_string()
        }
        else {
            err.message()
        };

        let response = ApiResponse::<()>::error(code, message);
        let body = serde_json::to_string(&response).unwrap_or_else(|_| {
            format!(
                "{{\"status\":\"error\",\"code\":\"{}\",\"message\":\"Internal server error\"}}",
                code
            )
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap_or_else(|_| {
                let mut res = Response::new(Body::empty());
                *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                res
            })
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> Response {
        let handler = ErrorHandler::new(false);
        handler.to_response(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_handler() {
        let handler = ErrorHandler::new(false);
        let err = AppError::not_found("Board not found");
        let response = handler.to_response(&err);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_handler_hides_internal_details() {
        let handler = ErrorHandler::new(false);
        let err = AppError::database("password=hunter2 in DSN");
        let response = handler.to_response(&err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_handler_with_details() {
        let handler = ErrorHandler::new(true);
        let err = AppError::internal("Detailed error message");
        let response = handler.to_response(&err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_handler_keeps_client_messages() {
        let handler = ErrorHandler::new(false);
        let err = AppError::capacity_exceeded("List 7 is at its card limit");
        let response = handler.to_response(&err);

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_into_response_for_app_error() {
        use axum::response::IntoResponse;

        let err = AppError::access_denied("No edit permission");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], "ACCESS_DENIED");
        assert_eq!(body["message"], "No edit permission");
    }
}
