// ABOUTME: Route module organization for the token service HTTP endpoints
// ABOUTME: Assembles health and token routes behind a shared request trace layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Handlers are thin: they pull the `auth-token` header, run it through the
//! appropriate gate from [`AuthContext`], and delegate to the token store.
//! Errors render through `AppError`'s `IntoResponse`.

/// Liveness and readiness routes
pub mod health;
/// Token issuance, refresh and introspection routes
pub mod tokens;

pub use health::HealthRoutes;
pub use tokens::{IssueTokenRequest, TokenResponse, TokenRoutes};

use crate::auth::AuthContext;
use crate::middleware::create_request_span;
use axum::{body::Body, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the full application router
pub fn build_router(context: Arc<AuthContext>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&context)))
        .merge(TokenRoutes::routes(context))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
}
