// ABOUTME: Bearer token authentication and access-level authorization
// ABOUTME: AuthContext ties the token store, bootstrap seeding, and per-level gates together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication and Authorization
//!
//! [`AuthContext`] is built once at process start. Building it seeds the
//! bootstrap records, so a context value in hand guarantees the admin token
//! and the `teacher`/`monitor` templates are resolvable. Request handlers
//! share it behind an `Arc` and ask it for an [`AuthorizationGate`] per
//! protected operation.

/// Startup seeding of fixed records
pub mod bootstrap;
/// Per-level token checker
pub mod gate;
/// Token issuance and lookup
pub mod tokens;

pub use gate::AuthorizationGate;
pub use tokens::TokenStore;

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::permissions::AccessLevel;
use crate::store::Store;
use std::fmt;

/// Process-wide authorization state
#[derive(Clone)]
pub struct AuthContext {
    tokens: TokenStore,
    admin_token: String,
}

impl AuthContext {
    /// Seed the bootstrap records and build the context
    ///
    /// # Errors
    ///
    /// Returns a storage error if seeding fails; callers should treat this as
    /// fatal since there is no usable admin credential without it
    pub async fn bootstrap(tokens: TokenStore, admin_token: impl Into<String>) -> AppResult<Self> {
        let admin_token = admin_token.into();
        bootstrap::seed(&tokens, &admin_token).await?;
        Ok(Self {
            tokens,
            admin_token,
        })
    }

    /// Connect the configured store and bootstrap against it
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or seeding fails
    pub async fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let store = Store::new(config.store.clone()).await?;
        let tokens = TokenStore::with_ttl(store, config.auth.token_ttl);
        Self::bootstrap(tokens, config.auth.admin_token()).await
    }

    /// The token store
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// The seeded admin token
    #[must_use]
    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }

    /// Gate admitting tokens at `required` or above
    #[must_use]
    pub fn gate(&self, required: AccessLevel) -> AuthorizationGate {
        AuthorizationGate::new(self.tokens.clone(), required)
    }

    /// Gate admitting any live token
    #[must_use]
    pub fn any(&self) -> AuthorizationGate {
        self.gate(AccessLevel::Unauthorized)
    }

    /// Gate admitting monitor, teacher and admin tokens
    #[must_use]
    pub fn monitor(&self) -> AuthorizationGate {
        self.gate(AccessLevel::Monitor)
    }

    /// Gate admitting teacher and admin tokens
    #[must_use]
    pub fn teacher(&self) -> AuthorizationGate {
        self.gate(AccessLevel::Teacher)
    }

    /// Gate admitting admin tokens only
    #[must_use]
    pub fn admin(&self) -> AuthorizationGate {
        self.gate(AccessLevel::Admin)
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("backend", &self.tokens.store().backend_info())
            .field("token_ttl", &self.tokens.token_ttl())
            .field("admin_token", &"[REDACTED]")
            .finish()
    }
}
