// ABOUTME: Token store owning bearer token issuance, refresh, lookup, and expiry
// ABOUTME: Wraps the record store and the token record codec with a fixed issuance TTL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Token Store
//!
//! Tokens are random UUID v4 strings. Each one keys a flat record
//! (`name`, `password`, `access_level`) in the backing store, written together
//! with its time-to-live in a single atomic operation. There is no in-process
//! caching: every lookup is a live round-trip to the store.

use crate::constants::tokens::{fields, DEFAULT_TOKEN_TTL};
use crate::errors::{AppError, AppResult};
use crate::models::{decode_access_level, TokenRecord};
use crate::permissions::AccessLevel;
use crate::store::Store;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Expiring token store
#[derive(Clone)]
pub struct TokenStore {
    store: Store,
    ttl: Duration,
}

impl TokenStore {
    /// Token store issuing tokens with [`DEFAULT_TOKEN_TTL`]
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self::with_ttl(store, DEFAULT_TOKEN_TTL)
    }

    /// Token store issuing tokens with a custom lifetime
    #[must_use]
    pub const fn with_ttl(store: Store, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Lifetime given to newly issued tokens
    #[must_use]
    pub const fn token_ttl(&self) -> Duration {
        self.ttl
    }

    /// Underlying record store
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Issue a new token bound to `name`, `password` and `access_level`
    ///
    /// The level is validated before anything is written.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAccessLevel` if `access_level` is not 0-3, or a storage
    /// error if the write fails
    #[tracing::instrument(skip(self, password), fields(name = %name))]
    pub async fn issue(&self, name: &str, password: &str, access_level: i64) -> AppResult<String> {
        let access_level = AccessLevel::try_from(access_level)?;
        self.issue_record(&TokenRecord::new(name, password, access_level))
            .await
    }

    /// Issue a new token for an already-typed record
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails
    pub async fn issue_record(&self, record: &TokenRecord) -> AppResult<String> {
        let token_key = Uuid::new_v4().to_string();
        self.store
            .put_expiring(&token_key, &record.encode(), self.ttl)
            .await?;

        debug!(
            access_level = %record.access_level,
            ttl_secs = self.ttl.as_secs(),
            "Issued token"
        );
        Ok(token_key)
    }

    /// Issue a fresh token carrying the same record as `token_key`
    ///
    /// The presented token is left untouched and stays valid until its own
    /// expiry.
    ///
    /// # Errors
    ///
    /// Returns `TokenNotFound` if `token_key` is absent or expired
    pub async fn refresh(&self, token_key: &str) -> AppResult<String> {
        let record = self.get_record(token_key).await?;
        self.issue_record(&record).await
    }

    /// Check whether `token_key` is present and unexpired
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be queried
    pub async fn exists(&self, token_key: &str) -> AppResult<bool> {
        self.store.exists(token_key).await
    }

    /// Access level bound to `token_key`
    ///
    /// # Errors
    ///
    /// Returns `TokenNotFound` if the token is absent, or a serialization
    /// error if the stored level is malformed
    pub async fn get_level(&self, token_key: &str) -> AppResult<AccessLevel> {
        let raw = self
            .store
            .get_field(token_key, fields::ACCESS_LEVEL)
            .await?
            .ok_or_else(AppError::token_not_found)?;
        decode_access_level(&raw)
    }

    /// Full record bound to `token_key`
    ///
    /// # Errors
    ///
    /// Returns `TokenNotFound` if the token is absent, or a serialization
    /// error if the stored fields do not match the record schema
    pub async fn get_record(&self, token_key: &str) -> AppResult<TokenRecord> {
        let stored = self.store.get_all(token_key).await?;
        if stored.is_empty() {
            return Err(AppError::token_not_found());
        }
        TokenRecord::decode(&stored)
    }

    /// Remaining lifetime of `token_key`; `None` when absent or non-expiring
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be queried
    pub async fn ttl(&self, token_key: &str) -> AppResult<Option<Duration>> {
        self.store.ttl(token_key).await
    }

    /// Write a record under a fixed key with no expiry
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails
    pub async fn register_persistent(&self, key: &str, record: &TokenRecord) -> AppResult<()> {
        self.store.put_persistent(key, &record.encode()).await
    }

    /// Verify the backing store is reachable
    ///
    /// # Errors
    ///
    /// Returns a storage error if the health check fails
    pub async fn health_check(&self) -> AppResult<()> {
        self.store.health_check().await
    }
}
