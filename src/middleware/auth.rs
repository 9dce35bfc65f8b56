// ABOUTME: Bearer token extraction from HTTP request headers
// ABOUTME: Reads the auth-token header, treating a missing or unreadable value as empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::tokens::AUTH_TOKEN_HEADER;
use axum::http::HeaderMap;

/// Token presented in the `auth-token` header
///
/// Absent and non-UTF-8 values come back as `""`, which every gate rejects.
#[must_use]
pub fn token_from_headers(headers: &HeaderMap) -> &str {
    headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
