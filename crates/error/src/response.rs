//! # API Response Types
//!
//! Generic API response types for the Kanri application.
//! Provides a consistent response format for all API endpoints.
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "status": "success",
//!   "data": { ... }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API response metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResponseMeta {
    /// Request ID for correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Response timestamp.
    #[serde(skip)]
    pub timestamp: DateTime<Utc>,

    /// Response time in milliseconds.
    #[serde(skip)]
    pub response_time_ms: Option<u64>,
}

/// API response type.
///
/// This is the generic response type used for all API responses.
/// It provides a consistent format with status tag, data, and metadata.
///
/// # Example
///
/// ```rust
/// use error::ApiResponse;
///
/// let response = ApiResponse::builder()
///     .with_data(vec!["To Do", "Doing", "Done"])
///     .with_request_id("req-123")
///     .build();
///
/// let json = serde_json::to_string(&response).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum ApiResponse<T> {
    /// Success response.
    Success {
        /// Response data.
        data: T,

        /// Response metadata.
        #[serde(flatten, skip_serializing_if = "Option::is_none")]
        meta: Option<ResponseMeta>,
    },

    /// Error response.
    Error {
        /// Error code.
        code: String,

        /// Error message.
        message: String,

        /// Error details.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,

        /// Request ID for correlation.
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,

        /// Response metadata.
        #[serde(flatten, skip_serializing_if = "Option::is_none")]
        meta: Option<ResponseMeta>,
    },
}

/// Builder for API responses.
#[derive(Debug, Clone)]
pub struct ApiResponseBuilder<T> {
    data:  Option<T>,
    error: Option<(String, String, Option<serde_json::Value>)>,
    meta:  ResponseMeta,
}

impl<T: Default> ApiResponseBuilder<T> {
    /// Create a new builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            data:  None,
            error: None,
            meta:  ResponseMeta::default(),
        }
    }

    /// Set the response data.
    #[inline]
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Set an error response.
    #[inline]
    pub fn with_error(mut self, code: impl ToString, message: impl ToString) -> Self {
        self.error = Some((code.to_string(), message.to_string(), None));
        self
    }

    /// Set an error with details.
    #[inline]
    pub fn with_error_details(
        mut self,
        code: impl ToString,
        message: impl ToString,
        details: serde_json::Value,
    ) -> Self {
        self.error = Some((code.to_string(), message.to_string(), Some(details)));
        self
    }

    /// Set the request ID.
    #[inline]
    pub fn with_request_id(mut self, request_id: impl ToString) -> Self {
        self.meta.request_id = Some(request_id.to_string());
        self
    }

    /// Set response time.
    #[inline]
    pub fn with_response_time(mut self, ms: u64) -> Self {
        self.meta.response_time_ms = Some(ms);
        self
    }

    /// Build the response.
    #[inline]
    pub fn build(self) -> ApiResponse<T> {
        if let Some((code, message, details)) = self.error {
            let request_id = self.meta.request_id.clone();
            return ApiResponse::Error {
                code,
                message,
                details,
                request_id,
                meta: Some(self.meta),
            };
        }

        let data = self.data.unwrap_or_default();

        ApiResponse::Success {
            data,
            meta: Some(self.meta),
        }
    }
}

impl<T: Default> Default for ApiResponseBuilder<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Default> ApiResponse<T> {
    /// Create a success response with data.
    #[inline]
    pub fn ok(data: T) -> Self {
        ApiResponse::Success {
            data,
            meta: Some(ResponseMeta::default()),
        }
    }

    /// Create a success response builder.
    #[inline]
    pub fn builder() -> ApiResponseBuilder<T> { ApiResponseBuilder::new() }

    /// Create an error response.
    #[inline]
    pub fn error(code: impl ToString, message: impl ToString) -> Self {
        ApiResponse::Error {
            code:       code.to_string(),
            message:    message.to_string(),
            details:    None,
            request_id: None,
            meta:       Some(ResponseMeta::default()),
        }
    }

    /// Create an error response with details.
    #[inline]
    pub fn error_with_details(code: impl ToString, message: impl ToString, details: serde_json::Value) -> Self {
        ApiResponse::Error {
            code:       code.to_string(),
            message:    message.to_string(),
            details:    Some(details),
            request_id: None,
            meta:       Some(ResponseMeta::default()),
        }
    }

    /// Create an empty success response.
    #[inline]
    pub fn empty() -> Self {
        ApiResponse::Success {
            data: T::default(),
            meta: Some(ResponseMeta::default()),
        }
    }

    /// Get a reference to the data if this is a success response.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success {
                data,
                ..
            } => Some(data),
            ApiResponse::Error {
                ..
            } => None,
        }
    }

    /// Check if this is a success response.
    #[inline]
    pub fn is_success(&self) -> bool { matches!(self, ApiResponse::Success { .. }) }

    /// Check if this is an error response.
    #[inline]
    pub fn is_error(&self) -> bool { matches!(self, ApiResponse::Error { .. }) }

    /// Convert to a Result type.
    #[inline]
    pub fn into_result(self) -> Result<T, (String, String)> {
        match self {
            ApiResponse::Success {
                data,
                ..
            } => Ok(data),
            ApiResponse::Error {
                code,
                message,
                ..
            } => Err((code, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_ok() {
        let response = ApiResponse::ok("test data");
        match response {
            ApiResponse::Success {
                data,
                meta,
            } => {
                assert_eq!(data, "test data");
                assert!(meta.is_some());
            },
            _ => panic!("Expected success response"),
        }
    }

    #[test]
    fn test_response_error() {
        let response: ApiResponse<()> = ApiResponse::error("NOT_FOUND", "Board not found");
        match response {
            ApiResponse::Error {
                code,
                message,
                details,
                ..
            } => {
                assert_eq!(code, "NOT_FOUND");
                assert_eq!(message, "Board not found");
                assert!(details.is_none());
            },
            _ => panic!("Expected error response"),
        }
    }

    #[test]
    fn test_response_builder() {
        let response = ApiResponse::builder()
            .with_data("test".to_string())
            .with_request_id("req-123")
            .with_response_time(42)
            .build();

        match response {
            ApiResponse::Success {
                data,
                meta,
                ..
            } => {
                assert_eq!(data, "test");
                assert_eq!(
                    meta.as_ref().unwrap().request_id,
                    Some("req-123".to_string())
                );
                assert_eq!(meta.as_ref().unwrap().response_time_ms, Some(42));
            },
            _ => panic!("Expected success response"),
        }
    }

    #[test]
    fn test_response_builder_empty() {
        let response: ApiResponse<()> = ApiResponse::builder().build();
        match response {
            ApiResponse::Success {
                data: (),
                ..
            } => {},
            _ => panic!("Expected success"),
        }
    }

    #[test]
    fn test_response_error_with_details() {
        let details = serde_json::json!({"field": "title"});
        let response: ApiResponse<()> = ApiResponse::error_with_details("VALIDATION_ERROR", "Failed", details.clone());

        match response {
            ApiResponse::Error {
                code,
                message,
                details: resp_details,
                ..
            } => {
                assert_eq!(code, "VALIDATION_ERROR");
                assert_eq!(message, "Failed");
                assert_eq!(resp_details, Some(details));
            },
            _ => panic!("Expected error"),
        }
    }

    #[test]
    fn test_response_serialization() {
        let response = ApiResponse::ok("test");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"data\":\"test\""));
    }

    #[test]
    fn test_response_error_serialization() {
        let response: ApiResponse<()> = ApiResponse::error("ACCESS_DENIED", "No edit permission");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("\"code\":\"ACCESS_DENIED\""));
        assert!(json.contains("\"message\":\"No edit permission\""));
    }

    #[test]
    fn test_into_result() {
        let response_ok: ApiResponse<&str> = ApiResponse::ok("data");
        assert_eq!(response_ok.into_result(), Ok("data"));

        let response_err: ApiResponse<String> = ApiResponse::error("CODE", "msg");
        assert_eq!(
            response_err.into_result(),
            Err(("CODE".to_string(), "msg".to_string()))
        );
    }

    #[test]
    fn test_is_success() {
        let response_ok = ApiResponse::ok("data");
        let response_err: ApiResponse<()> = ApiResponse::error("CODE", "msg");

        assert!(response_ok.is_success());
        assert!(!response_err.is_success());
    }

    #[test]
    fn test_is_error() {
        let response_ok = ApiResponse::ok("data");
        let response_err: ApiResponse<()> = ApiResponse::error("CODE", "msg");

        assert!(!response_ok.is_error());
        assert!(response_err.is_error());
    }

    #[test]
    fn test_empty() {
        let response: ApiResponse<()> = ApiResponse::empty();
        match response {
            ApiResponse::Success {
                data: (),
                ..
            } => {},
            _ => panic!("Expected empty success"),
        }
    }

    #[test]
    fn test_response_data() {
        let response = ApiResponse::ok(vec![1, 2, 3]);
        assert_eq!(response.data(), Some(&vec![1, 2, 3]));

        let response_err: ApiResponse<Vec<i32>> = ApiResponse::error("CODE", "msg");
        assert_eq!(response_err.data(), None);
    }

    #[test]
    fn test_response_meta_default() {
        let meta = ResponseMeta::default();
        assert!(meta.request_id.is_none());
        assert!(meta.response_time_ms.is_none());
    }

    #[test]
    fn test_response_builder_error_path() {
        let response: ApiResponse<()> = ApiResponse::builder()
            .with_error("CAPACITY_EXCEEDED", "List is full")
            .with_request_id("req-123")
            .build();

        match response {
            ApiResponse::Error {
                code,
                message,
                request_id,
                ..
            } => {
                assert_eq!(code, "CAPACITY_EXCEEDED");
                assert_eq!(message, "List is full");
                assert_eq!(request_id, Some("req-123".to_string()));
            },
            _ => panic!("Expected error response"),
        }
    }
}
