// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness always answers; readiness round-trips to the token store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` reports the process is up. `/ready` additionally requires the
//! token store to answer, so load balancers stop routing to an instance whose
//! Redis connection is gone.

use crate::auth::AuthContext;
use crate::errors::AppResult;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(context: Arc<AuthContext>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(context)
    }

    #[allow(clippy::unused_async)]
    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(context): State<Arc<AuthContext>>) -> AppResult<Json<Value>> {
        context.tokens().health_check().await?;
        Ok(Json(json!({
            "status": "ready",
            "store": context.tokens().store().backend_info(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        })))
    }
}
