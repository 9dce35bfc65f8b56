// ABOUTME: Expiring hash-record store abstraction backing the token store
// ABOUTME: Pluggable backend support (in-memory, Redis) with atomic write-and-expire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from configuration
pub mod factory;
/// In-memory record store implementation
pub mod memory;
/// Redis record store implementation
pub mod redis;

pub use factory::Store;

use crate::config::StoreConfig;
use crate::errors::AppResult;
use std::collections::HashMap;
use std::time::Duration;

/// Record store trait for pluggable backend implementations
///
/// A record is a flat field/value hash stored under a string key, optionally
/// with a time-to-live. Backends must apply a write and its expiry as one
/// atomic unit: no reader may ever observe the fields without the TTL armed.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync + Clone {
    /// Create new store instance with configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached
    async fn new(config: StoreConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Write `fields` under `key` and arm `ttl`, atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; nothing is written in that case
    async fn put_expiring(
        &self,
        key: &str,
        fields: &[(&'static str, String)],
        ttl: Duration,
    ) -> AppResult<()>;

    /// Write `fields` under `key` and clear any expiry, atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    async fn put_persistent(&self, key: &str, fields: &[(&'static str, String)]) -> AppResult<()>;

    /// Check if key is present and not expired
    ///
    /// # Errors
    ///
    /// Returns an error if the existence check fails
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Read one field of a record
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    async fn get_field(&self, key: &str, field: &str) -> AppResult<Option<String>>;

    /// Read every field of a record; empty when the key is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    async fn get_all(&self, key: &str) -> AppResult<HashMap<String, String>>;

    /// Get remaining TTL for key; `None` when absent or non-expiring
    ///
    /// # Errors
    ///
    /// Returns an error if TTL check fails
    async fn ttl(&self, key: &str) -> AppResult<Option<Duration>>;

    /// Verify store backend is healthy
    ///
    /// # Errors
    ///
    /// Returns an error if health check fails
    async fn health_check(&self) -> AppResult<()>;
}
