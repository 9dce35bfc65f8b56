// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds one span per HTTP request carrying a request ID and the caller's identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::http::Request;
use tracing::Span;
use uuid::Uuid;

/// Header carrying a caller-supplied correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Caller-supplied request ID, or a freshly generated one
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned)
}

/// Create a tracing span for an HTTP request
///
/// Handlers fill in `user_name` and `access_level` once a gate admits the
/// caller.
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
        user_name = tracing::field::Empty,
        access_level = tracing::field::Empty,
    )
}

/// Record an admitted caller's identity in the current request span
pub fn record_identity(name: &str, access_level: impl std::fmt::Display) {
    let span = Span::current();
    span.record("user_name", name);
    span.record("access_level", access_level.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_prefers_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "req_fixed")
            .body(())
            .unwrap();
        assert_eq!(request_id(&request), "req_fixed");
    }

    #[test]
    fn test_request_id_generated_when_absent() {
        let request = Request::builder().body(()).unwrap();
        let id = request_id(&request);
        assert!(id.starts_with("req_"));
        assert_eq!(id.len(), "req_".len() + 32);
    }
}
