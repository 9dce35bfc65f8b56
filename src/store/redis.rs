// ABOUTME: Redis record store with connection management and atomic write-and-expire
// ABOUTME: Stores each token as a hash at a key equal to the token string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecordStore;
use crate::config::{RedisConnectionConfig, StoreConfig};
use crate::errors::{AppError, AppResult};
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{error, info, warn};

/// Redis record store
///
/// Uses Redis `ConnectionManager` for automatic reconnection. Writes that
/// pair a hash update with an expiry change are sent as a `MULTI`/`EXEC`
/// pipeline so the two can never be applied separately.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Create new Redis store instance
    ///
    /// # Errors
    ///
    /// Returns an error if Redis connection fails
    async fn new_with_config(config: &StoreConfig) -> AppResult<Self> {
        let redis_url = config
            .redis_url
            .as_ref()
            .ok_or_else(|| AppError::config("Redis URL is required for Redis store backend"))?;

        let conn_config = &config.redis_connection;

        info!(
            "Connecting to Redis (timeout={}s, response_timeout={}s, retries={})",
            conn_config.connection_timeout_secs,
            conn_config.response_timeout_secs,
            conn_config.initial_connection_retries
        );

        let client = redis::Client::open(redis_url.as_str()).map_err(|e| {
            AppError::config(format!("Failed to create Redis client: {e}")).with_source(e)
        })?;

        let manager = Self::connect_with_retry(&client, conn_config).await?;

        info!("Successfully connected to Redis");

        Ok(Self { manager })
    }

    /// Connect to Redis with exponential backoff retry on failure
    async fn connect_with_retry(
        client: &redis::Client,
        conn_config: &RedisConnectionConfig,
    ) -> AppResult<ConnectionManager> {
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(Duration::from_secs(conn_config.connection_timeout_secs))
            .set_response_timeout(Duration::from_secs(conn_config.response_timeout_secs))
            .set_number_of_retries(conn_config.reconnection_retries)
            .set_exponent_base(conn_config.retry_exponent_base)
            .set_max_delay(conn_config.max_retry_delay_ms);

        let max_retries = conn_config.initial_connection_retries;
        let max_delay_ms = conn_config.max_retry_delay_ms;
        let mut delay_ms = conn_config.initial_retry_delay_ms;
        let mut last_error = None;

        for attempt in 0..=max_retries {
            match ConnectionManager::new_with_config(client.clone(), manager_config.clone()).await {
                Ok(manager) => {
                    if attempt > 0 {
                        info!("Redis connection established after {} retries", attempt);
                    }
                    return Ok(manager);
                }
                Err(e) => {
                    if attempt < max_retries {
                        warn!(
                            "Redis connection attempt {}/{} failed, retrying in {}ms: {}",
                            attempt + 1,
                            max_retries + 1,
                            delay_ms,
                            e
                        );
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                        delay_ms = delay_ms.saturating_mul(2).min(max_delay_ms);
                    }
                    last_error = Some(e);
                }
            }
        }

        let message = format!(
            "Failed to connect to Redis after {} attempts",
            max_retries + 1
        );
        Err(match last_error {
            Some(e) => AppError::storage(format!("{message}: {e}")).with_source(e),
            None => AppError::storage(message),
        })
    }
}

/// Map a Redis failure to a storage error, logging the failed command
fn command_error(command: &'static str) -> impl FnOnce(redis::RedisError) -> AppError {
    move |e| {
        error!("Redis {} operation failed: {}", command, e);
        AppError::storage(format!("Token store error: {e}")).with_source(e)
    }
}

#[async_trait::async_trait]
impl RecordStore for RedisStore {
    async fn new(config: StoreConfig) -> AppResult<Self>
    where
        Self: Sized,
    {
        Self::new_with_config(&config).await
    }

    async fn put_expiring(
        &self,
        key: &str,
        fields: &[(&'static str, String)],
        ttl: Duration,
    ) -> AppResult<()> {
        // PEXPIRE 0 would delete the record outright
        let ttl_ms = i64::try_from(ttl.as_millis())
            .map_err(|_| AppError::internal(format!("TTL {ttl:?} is out of range")))?
            .max(1);
        let mut conn = self.manager.clone();

        let (): () = redis::pipe()
            .atomic()
            .hset_multiple(key, fields)
            .ignore()
            .pexpire(key, ttl_ms)
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(command_error("HSET+PEXPIRE"))?;

        Ok(())
    }

    async fn put_persistent(&self, key: &str, fields: &[(&'static str, String)]) -> AppResult<()> {
        let mut conn = self.manager.clone();

        let (): () = redis::pipe()
            .atomic()
            .hset_multiple(key, fields)
            .ignore()
            .persist(key)
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(command_error("HSET+PERSIST"))?;

        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.manager.clone();
        conn.exists(key).await.map_err(command_error("EXISTS"))
    }

    async fn get_field(&self, key: &str, field: &str) -> AppResult<Option<String>> {
        let mut conn = self.manager.clone();
        conn.hget(key, field).await.map_err(command_error("HGET"))
    }

    async fn get_all(&self, key: &str) -> AppResult<HashMap<String, String>> {
        let mut conn = self.manager.clone();
        conn.hgetall(key).await.map_err(command_error("HGETALL"))
    }

    async fn ttl(&self, key: &str) -> AppResult<Option<Duration>> {
        let mut conn = self.manager.clone();
        let ttl_ms: i64 = conn.pttl(key).await.map_err(command_error("PTTL"))?;

        // Redis returns -2 if key doesn't exist, -1 if key has no expiration
        Ok(u64::try_from(ttl_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis))
    }

    async fn health_check(&self) -> AppResult<()> {
        let mut conn = self.manager.clone();

        let response: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(command_error("PING"))?;

        if response == "PONG" {
            Ok(())
        } else {
            Err(AppError::storage(format!(
                "Token store error: unexpected PING response '{response}'"
            )))
        }
    }
}
