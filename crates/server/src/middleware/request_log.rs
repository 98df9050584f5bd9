//! # Request Logging Middleware
//!
//! Logs every request with its method, path, status and duration, and
//! propagates a request id for correlation. The id comes from the
//! `X-Request-ID` header when the client sends one, otherwise a fresh
//! one is generated; either way the response echoes it back.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use logging::{log_api_request, request_id, RequestId};

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Middleware logging one line per request.
pub async fn request_log(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(request_id::try_from_header)
        .unwrap_or_else(RequestId::new);
    request_id::set_request_id(request_id.clone());

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    log_api_request!(
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    request_id::clear_request_id();

    response
}
