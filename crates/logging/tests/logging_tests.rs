//! # Logging Configuration Tests
//!
//! Tests for structured logging setup and request ID propagation.

#[cfg(test)]
mod logging_config_tests {
    use logging::LoggingConfig;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "json");
        assert_eq!(config.environment, "development");
        assert!(config.log_file.is_none());
        assert!(config.include_timestamp);
    }
}

#[cfg(test)]
mod request_id_tests {
    use logging::{request_id, RequestId};

    #[test]
    fn test_request_id_uniqueness() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();
        assert_ne!(id1.as_str(), id2.as_str(), "Request IDs should be unique");
    }

    #[test]
    fn test_request_id_round_trips_through_thread_local() {
        let id = RequestId::new();
        request_id::set_request_id(id.clone());
        assert_eq!(request_id::get_request_id(), Some(id));

        request_id::clear_request_id();
        assert!(request_id::get_request_id().is_none());
    }

    #[test]
    fn test_try_from_header_accepts_opaque_tokens() {
        assert!(request_id::try_from_header("550e8400-e29b-41d4-a716-446655440000").is_some());
        assert!(request_id::try_from_header("req_12345678").is_some());
    }

    #[test]
    fn test_try_from_header_rejects_garbage() {
        assert!(request_id::try_from_header("short").is_none());
        assert!(request_id::try_from_header("has spaces in it").is_none());
        assert!(request_id::try_from_header(&"x".repeat(100)).is_none());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(RequestId::parse("bad id!").is_err());
        assert!(RequestId::parse("abcdefgh").is_ok());
    }
}

#[cfg(test)]
mod init_tests {
    #[test]
    fn test_tracing_setup_is_idempotent_enough() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        // A second attempt must not panic.
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }
}
