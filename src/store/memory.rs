// ABOUTME: In-memory record store with per-record expiry
// ABOUTME: Includes a background sweep task for expired records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecordStore;
use crate::config::StoreConfig;
use crate::errors::AppResult;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Stored hash with optional expiration
#[derive(Debug, Clone)]
struct StoredRecord {
    fields: HashMap<String, String>,
    expires_at: Option<Instant>,
}

impl StoredRecord {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    fn remaining_ttl(&self) -> Option<Duration> {
        self.expires_at
            .and_then(|at| at.checked_duration_since(Instant::now()))
    }
}

type Records = RwLock<HashMap<String, StoredRecord>>;

/// In-memory record store with background cleanup
///
/// Every write happens under a single write lock, so fields and expiry are
/// applied together. Expired records are invisible to readers immediately and
/// physically removed by the sweep task. The sweep holds only a weak
/// reference and stops once the last clone of the store is dropped.
///
/// Records are never evicted for capacity; the bootstrap records must
/// survive for the life of the process.
#[derive(Clone)]
pub struct InMemoryStore {
    records: Arc<Records>,
}

impl InMemoryStore {
    /// Create new in-memory store with optional background cleanup task
    fn new_with_config(config: &StoreConfig) -> Self {
        let records = Arc::new(RwLock::new(HashMap::new()));

        if config.enable_background_cleanup {
            let weak = Arc::downgrade(&records);
            let cleanup_interval = config.cleanup_interval;

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(cleanup_interval);
                loop {
                    interval.tick().await;
                    if !Self::cleanup_expired(&weak).await {
                        tracing::debug!("Record store dropped, stopping cleanup task");
                        break;
                    }
                }
            });
        }

        Self { records }
    }

    /// Remove all expired records; returns false once the store is gone
    async fn cleanup_expired(records: &Weak<Records>) -> bool {
        let Some(records) = records.upgrade() else {
            return false;
        };

        let mut guard = records.write().await;
        let before = guard.len();
        guard.retain(|_, record| !record.is_expired());
        let removed = before - guard.len();
        drop(guard);

        if removed > 0 {
            tracing::debug!("Cleaned up {} expired token records", removed);
        }
        true
    }

    /// Number of live (unexpired) records
    pub async fn len(&self) -> usize {
        self.records
            .read()
            .await
            .values()
            .filter(|record| !record.is_expired())
            .count()
    }

    /// Whether the store holds no live records
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn put(&self, key: &str, fields: &[(&'static str, String)], expires_at: Option<Instant>) {
        let mut records = self.records.write().await;
        let record = records
            .entry(key.to_owned())
            .or_insert_with(|| StoredRecord {
                fields: HashMap::new(),
                expires_at: None,
            });

        // A lapsed record is gone as far as readers are concerned
        if record.is_expired() {
            record.fields.clear();
        }

        record.fields.extend(
            fields
                .iter()
                .map(|(name, value)| ((*name).to_owned(), value.clone())),
        );
        record.expires_at = expires_at;
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryStore {
    async fn new(config: StoreConfig) -> AppResult<Self> {
        Ok(Self::new_with_config(&config))
    }

    async fn put_expiring(
        &self,
        key: &str,
        fields: &[(&'static str, String)],
        ttl: Duration,
    ) -> AppResult<()> {
        // A deadline past the clock's range never arrives
        self.put(key, fields, Instant::now().checked_add(ttl)).await;
        Ok(())
    }

    async fn put_persistent(&self, key: &str, fields: &[(&'static str, String)]) -> AppResult<()> {
        self.put(key, fields, None).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self
            .records
            .read()
            .await
            .get(key)
            .is_some_and(|record| !record.is_expired()))
    }

    async fn get_field(&self, key: &str, field: &str) -> AppResult<Option<String>> {
        Ok(self
            .records
            .read()
            .await
            .get(key)
            .filter(|record| !record.is_expired())
            .and_then(|record| record.fields.get(field).cloned()))
    }

    async fn get_all(&self, key: &str) -> AppResult<HashMap<String, String>> {
        Ok(self
            .records
            .read()
            .await
            .get(key)
            .filter(|record| !record.is_expired())
            .map(|record| record.fields.clone())
            .unwrap_or_default())
    }

    async fn ttl(&self, key: &str) -> AppResult<Option<Duration>> {
        Ok(self
            .records
            .read()
            .await
            .get(key)
            .and_then(StoredRecord::remaining_ttl))
    }

    async fn health_check(&self) -> AppResult<()> {
        // In-memory store is always healthy
        Ok(())
    }
}
