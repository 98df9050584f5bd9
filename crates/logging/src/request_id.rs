//! # Request ID Tracking
//!
//! Utilities for generating and propagating request IDs across the application.
//! Uses UUIDv4 for collision-resistant, URL-safe identifiers.

use std::cell::RefCell;

thread_local! {
    /// Thread-local storage for request ID.
    static REQUEST_ID: RefCell<Option<RequestId>> = const { RefCell::new(None) };
}

/// A request ID backed by a UUIDv4 string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new random request ID.
    #[inline]
    pub fn new() -> Self { Self(uuid::Uuid::new_v4().to_string()) }

    /// Parse a request ID from a string.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, String> {
        try_from_header(s).ok_or_else(|| "Invalid request ID format".to_string())
    }

    /// Get the request ID as a string.
    #[inline]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Consume and return the inner string.
    #[inline]
    pub fn into_string(self) -> String { self.0 }
}

impl Default for RequestId {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Set the current request ID for this thread.
pub fn set_request_id(id: RequestId) {
    REQUEST_ID.with(|cell| {
        *cell.borrow_mut() = Some(id);
    });
}

/// Get the current request ID for this thread.
pub fn get_request_id() -> Option<RequestId> { REQUEST_ID.with(|cell| cell.borrow().clone()) }

/// Get the current request ID, or generate a new one if none exists.
pub fn get_or_init_request_id() -> RequestId { get_request_id().unwrap_or_else(RequestId::new) }

/// Clear the current request ID.
pub fn clear_request_id() {
    REQUEST_ID.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Generate a new request ID and set it for this thread.
pub fn init_request_id() -> RequestId {
    let id = RequestId::new();
    set_request_id(id.clone());
    id
}

/// Try to parse a request ID from a header value.
///
/// Accepts UUIDs and similar opaque tokens so upstream proxies can
/// supply their own correlation IDs.
pub fn try_from_header(value: &str) -> Option<RequestId> {
    let value = value.trim();
    if (8 ..= 64).contains(&value.len())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Some(RequestId(value.to_string()))
    }
    else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_new_is_uuid() {
        let id = RequestId::new();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_request_id_parse() {
        let raw = "9f8b2c41-1d3a-4f6e-8a2b-0c9d7e5f3a11";
        let id = RequestId::parse(raw).unwrap();
        assert_eq!(id.as_str(), raw);
    }

    #[test]
    fn test_request_id_parse_invalid() {
        let result = RequestId::parse("short");
        assert!(result.is_err());
    }

    #[test]
    fn test_request_id_set_get() {
        let id = RequestId::new();
        set_request_id(id.clone());
        let retrieved = get_request_id();
        assert_eq!(retrieved, Some(id));
        clear_request_id();
        assert_eq!(get_request_id(), None);
    }

    #[test]
    fn test_get_or_init_generates_when_empty() {
        clear_request_id();
        let id = get_or_init_request_id();
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn test_init_request_id_stores_id() {
        let id = init_request_id();
        assert_eq!(get_request_id(), Some(id));
        clear_request_id();
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        let display = format!("{}", id);
        assert_eq!(display, id.as_str());
    }

    #[test]
    fn test_try_from_header() {
        let raw = "9f8b2c41-1d3a-4f6e-8a2b-0c9d7e5f3a11";
        let result = try_from_header(raw);
        assert!(result.is_some());
        assert_eq!(result.unwrap().as_str(), raw);
    }

    #[test]
    fn test_try_from_header_trims_whitespace() {
        let result = try_from_header("  abcdef1234  ");
        assert_eq!(result.unwrap().as_str(), "abcdef1234");
    }

    #[test]
    fn test_try_from_header_invalid() {
        assert!(try_from_header("invalid!@#chars").is_none());
        assert!(try_from_header("short").is_none());
    }
}
