// ABOUTME: Record store factory for environment-based backend selection
// ABOUTME: Chooses Redis when a URL is configured, in-memory otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{memory::InMemoryStore, redis::RedisStore, RecordStore};
use crate::config::StoreConfig;
use crate::errors::AppResult;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Clone)]
enum Backend {
    Memory(InMemoryStore),
    Redis(RedisStore),
}

/// Unified record store interface
#[derive(Clone)]
pub struct Store {
    backend: Backend,
}

impl Store {
    /// Create new store instance based on configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured backend cannot be reached
    pub async fn new(config: StoreConfig) -> AppResult<Self> {
        let backend = if config.redis_url.is_some() {
            tracing::info!("Initializing Redis token store");
            Backend::Redis(RedisStore::new(config).await?)
        } else {
            tracing::info!("Initializing in-memory token store");
            Backend::Memory(InMemoryStore::new(config).await?)
        };
        Ok(Self { backend })
    }

    /// In-memory store without background cleanup
    ///
    /// # Errors
    ///
    /// Returns an error if store initialization fails
    pub async fn in_memory() -> AppResult<Self> {
        Self::new(StoreConfig::in_memory()).await
    }

    /// Name of the active backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self.backend {
            Backend::Memory(_) => "in-memory",
            Backend::Redis(_) => "redis",
        }
    }

    /// The in-memory backend, if that is the one in use
    #[must_use]
    pub const fn as_memory(&self) -> Option<&InMemoryStore> {
        match &self.backend {
            Backend::Memory(store) => Some(store),
            Backend::Redis(_) => None,
        }
    }

    /// Write fields and arm a TTL atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn put_expiring(
        &self,
        key: &str,
        fields: &[(&'static str, String)],
        ttl: Duration,
    ) -> AppResult<()> {
        match &self.backend {
            Backend::Memory(store) => store.put_expiring(key, fields, ttl).await,
            Backend::Redis(store) => store.put_expiring(key, fields, ttl).await,
        }
    }

    /// Write fields and clear any expiry atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn put_persistent(
        &self,
        key: &str,
        fields: &[(&'static str, String)],
    ) -> AppResult<()> {
        match &self.backend {
            Backend::Memory(store) => store.put_persistent(key, fields).await,
            Backend::Redis(store) => store.put_persistent(key, fields).await,
        }
    }

    /// Check if key is present and not expired
    ///
    /// # Errors
    ///
    /// Returns an error if existence check fails
    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        match &self.backend {
            Backend::Memory(store) => store.exists(key).await,
            Backend::Redis(store) => store.exists(key).await,
        }
    }

    /// Read one field of a record
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn get_field(&self, key: &str, field: &str) -> AppResult<Option<String>> {
        match &self.backend {
            Backend::Memory(store) => store.get_field(key, field).await,
            Backend::Redis(store) => store.get_field(key, field).await,
        }
    }

    /// Read every field of a record
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn get_all(&self, key: &str) -> AppResult<HashMap<String, String>> {
        match &self.backend {
            Backend::Memory(store) => store.get_all(key).await,
            Backend::Redis(store) => store.get_all(key).await,
        }
    }

    /// Get remaining TTL for key
    ///
    /// # Errors
    ///
    /// Returns an error if TTL check fails
    pub async fn ttl(&self, key: &str) -> AppResult<Option<Duration>> {
        match &self.backend {
            Backend::Memory(store) => store.ttl(key).await,
            Backend::Redis(store) => store.ttl(key).await,
        }
    }

    /// Verify store backend is healthy
    ///
    /// # Errors
    ///
    /// Returns an error if health check fails
    pub async fn health_check(&self) -> AppResult<()> {
        match &self.backend {
            Backend::Memory(store) => store.health_check().await,
            Backend::Redis(store) => store.health_check().await,
        }
    }
}
