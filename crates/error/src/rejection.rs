//! # Rejection Handlers
//!
//! Custom rejection handlers for converting Axum rejections into API errors.

use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    response::{IntoResponse, Response},
};

use crate::AppError;

/// Handle form deserialization errors and convert them to proper API responses.
///
/// This handler catches errors like "missing field `title`" and returns them
/// in the standard API error format.
pub fn handle_form_rejection(rejection: FormRejection) -> Response {
    AppError::validation(friendly_message(rejection.to_string())).into_response()
}

/// Handle query string deserialization errors and convert them to proper API responses.
pub fn handle_query_rejection(rejection: QueryRejection) -> Response {
    let message = format!("Query string deserialization error: {}", rejection);
    AppError::validation(message).into_response()
}

/// Try to extract a more user-friendly message from a serde error string.
///
/// Turns "Failed to deserialize form body: missing field `title`" into
/// "Missing required field: title".
fn friendly_message(error_message: String) -> String {
    if let Some(start) = error_message.find("missing field `") {
        let rest = &error_message[start + 15 ..];
        if let Some(end) = rest.find('`') {
            return format!("Missing required field: {}", &rest[.. end]);
        }
    }
    error_message
}
