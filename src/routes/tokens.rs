// ABOUTME: Token route handlers for issuing, refreshing, and introspecting bearer tokens
// ABOUTME: Each handler reads the auth-token header and passes it through an authorization gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::AuthContext;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::middleware::{record_identity, token_from_headers};
use crate::models::TokenRecord;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /auth/tokens`
///
/// `access_level` is taken as a raw integer so an out-of-range value reaches
/// the token store and is rejected as `InvalidAccessLevel` rather than as a
/// JSON shape error.
#[derive(Debug, Deserialize)]
pub struct IssueTokenRequest {
    /// Display name bound to the token
    pub name: String,
    /// Opaque credential echoed back in the identity context
    #[serde(default)]
    pub password: String,
    /// Access level ordinal (0-3); omitted means `unauthorized`
    #[serde(default)]
    pub access_level: i64,
}

/// A freshly issued token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Token to present in the `auth-token` header
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: u64,
}

/// Token management routes
pub struct TokenRoutes;

impl TokenRoutes {
    /// Create all token routes
    pub fn routes(context: Arc<AuthContext>) -> Router {
        Router::new()
            .route("/auth/tokens", post(Self::handle_issue))
            .route("/auth/tokens/refresh", post(Self::handle_refresh))
            .route("/auth/me", get(Self::handle_me))
            .with_state(context)
    }

    /// Issue a token; admin only
    async fn handle_issue(
        State(context): State<Arc<AuthContext>>,
        headers: HeaderMap,
        payload: Result<Json<IssueTokenRequest>, JsonRejection>,
    ) -> AppResult<impl IntoResponse> {
        let caller = context.admin().check(token_from_headers(&headers)).await?;
        record_identity(&caller.name, caller.access_level);

        // Body problems only surface once the caller is known to be an admin
        let Json(request) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let token = context
            .tokens()
            .issue(&request.name, &request.password, request.access_level)
            .await?;
        AppLogger::log_auth_event(&request.name, "token_issued", true, Some(&caller.name));

        Ok((
            StatusCode::CREATED,
            Json(TokenResponse {
                token,
                expires_in: context.tokens().token_ttl().as_secs(),
            }),
        ))
    }

    /// Issue a new token carrying the caller's identity
    async fn handle_refresh(
        State(context): State<Arc<AuthContext>>,
        headers: HeaderMap,
    ) -> AppResult<impl IntoResponse> {
        let token = token_from_headers(&headers);
        let caller = context.any().check(token).await?;
        record_identity(&caller.name, caller.access_level);

        let refreshed = context.tokens().refresh(token).await?;
        AppLogger::log_auth_event(&caller.name, "token_refreshed", true, None);

        Ok(Json(TokenResponse {
            token: refreshed,
            expires_in: context.tokens().token_ttl().as_secs(),
        }))
    }

    /// Identity bound to the presented token
    async fn handle_me(
        State(context): State<Arc<AuthContext>>,
        headers: HeaderMap,
    ) -> AppResult<Json<TokenRecord>> {
        let caller = context.any().check(token_from_headers(&headers)).await?;
        record_identity(&caller.name, caller.access_level);
        Ok(Json(caller))
    }
}
