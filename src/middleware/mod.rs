// ABOUTME: HTTP middleware helpers for token extraction and request tracing
// ABOUTME: Shared by the route handlers and the router's trace layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Bearer token extraction
pub mod auth;
/// Request spans and correlation IDs
pub mod tracing;

pub use self::tracing::{create_request_span, record_identity, request_id};
pub use auth::token_from_headers;
