// ABOUTME: Authorization gate validating a bearer token against a required access level
// ABOUTME: Yields the caller's identity record or an Unauthorized rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::tokens::TokenStore;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::models::TokenRecord;
use crate::permissions::AccessLevel;
use tracing::{field, Span};

/// Checker for one required access level
///
/// Gates are cheap to clone and independent of each other; the token store
/// is the only state they share.
#[derive(Clone)]
pub struct AuthorizationGate {
    tokens: TokenStore,
    required: AccessLevel,
}

impl AuthorizationGate {
    /// Gate admitting tokens at `required` or above
    #[must_use]
    pub const fn new(tokens: TokenStore, required: AccessLevel) -> Self {
        Self { tokens, required }
    }

    /// Minimum level this gate admits
    #[must_use]
    pub const fn required(&self) -> AccessLevel {
        self.required
    }

    /// Validate `token` and return the identity bound to it
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the token is empty, absent, expired, or
    /// below the required level. Store failures are propagated unchanged.
    #[tracing::instrument(
        skip(self, token),
        fields(required = %self.required, granted = field::Empty)
    )]
    pub async fn check(&self, token: &str) -> AppResult<TokenRecord> {
        if token.is_empty() || !self.tokens.exists(token).await? {
            Span::current().record("granted", false);
            AppLogger::log_security_event(
                "authorization_rejected",
                "low",
                "token missing or expired",
                None,
            );
            return Err(AppError::unauthorized("Token is missing or expired"));
        }

        let level = self
            .tokens
            .get_level(token)
            .await
            .map_err(lapsed_to_unauthorized)?;
        if !level.has_privilege(self.required) {
            Span::current().record("granted", false);
            let details = format!(
                "Access level '{level}' is below the required '{}'",
                self.required
            );
            AppLogger::log_security_event("insufficient_access_level", "medium", &details, None);
            return Err(AppError::unauthorized(details));
        }

        let record = self
            .tokens
            .get_record(token)
            .await
            .map_err(lapsed_to_unauthorized)?;
        Span::current().record("granted", true);
        Ok(record)
    }
}

// The token can lapse between the existence check and the reads
fn lapsed_to_unauthorized(error: AppError) -> AppError {
    if error.code == ErrorCode::TokenNotFound {
        AppError::unauthorized("Token is missing or expired")
    } else {
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lapsed_token_maps_to_unauthorized() {
        let mapped = lapsed_to_unauthorized(AppError::token_not_found());
        assert_eq!(mapped.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_store_failures_pass_through() {
        let mapped = lapsed_to_unauthorized(AppError::storage("connection reset"));
        assert_eq!(mapped.code, ErrorCode::StorageError);
    }
}
