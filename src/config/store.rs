// ABOUTME: Token store configuration for Redis connectivity and in-memory maintenance
// ABOUTME: Handles backend selection, Redis timeouts and retries, and expiry sweep intervals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::env_or;
use crate::constants::{env_vars, store};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Token store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Redis URL; `None` selects the in-memory backend
    pub redis_url: Option<String>,
    /// Sweep interval for expired in-memory records
    pub cleanup_interval: Duration,
    /// Enable the in-memory background sweep (tests turn this off)
    pub enable_background_cleanup: bool,
    /// Redis connection and retry configuration
    pub redis_connection: RedisConnectionConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            cleanup_interval: Duration::from_secs(store::DEFAULT_CLEANUP_INTERVAL_SECS),
            enable_background_cleanup: true,
            redis_connection: RedisConnectionConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load store configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var(env_vars::REDIS_URL)
                .ok()
                .filter(|url| !url.trim().is_empty()),
            cleanup_interval: Duration::from_secs(env_or(
                env_vars::STORE_CLEANUP_INTERVAL_SECS,
                store::DEFAULT_CLEANUP_INTERVAL_SECS,
            )),
            enable_background_cleanup: true,
            redis_connection: RedisConnectionConfig::from_env(),
        }
    }

    /// In-memory configuration without the background sweep
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            enable_background_cleanup: false,
            ..Self::default()
        }
    }
}

/// Redis connection and retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConnectionConfig {
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
    /// Response/command timeout in seconds
    pub response_timeout_secs: u64,
    /// Number of reconnection retries after connection drop
    pub reconnection_retries: usize,
    /// Exponential backoff base for retry delays
    pub retry_exponent_base: u64,
    /// Maximum retry delay in milliseconds
    pub max_retry_delay_ms: u64,
    /// Number of retries for initial connection at startup
    pub initial_connection_retries: u32,
    /// Initial retry delay in milliseconds (doubles with exponential backoff)
    pub initial_retry_delay_ms: u64,
}

impl Default for RedisConnectionConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: store::REDIS_CONNECTION_TIMEOUT_SECS,
            response_timeout_secs: store::REDIS_RESPONSE_TIMEOUT_SECS,
            reconnection_retries: store::REDIS_RECONNECTION_RETRIES,
            retry_exponent_base: store::REDIS_RETRY_EXPONENT_BASE,
            max_retry_delay_ms: store::REDIS_MAX_RETRY_DELAY_MS,
            initial_connection_retries: store::REDIS_INITIAL_CONNECTION_RETRIES,
            initial_retry_delay_ms: store::REDIS_INITIAL_RETRY_DELAY_MS,
        }
    }
}

impl RedisConnectionConfig {
    /// Load Redis connection configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            connection_timeout_secs: env_or(
                env_vars::REDIS_CONNECTION_TIMEOUT_SECS,
                store::REDIS_CONNECTION_TIMEOUT_SECS,
            ),
            response_timeout_secs: env_or(
                env_vars::REDIS_RESPONSE_TIMEOUT_SECS,
                store::REDIS_RESPONSE_TIMEOUT_SECS,
            ),
            reconnection_retries: env_or(
                env_vars::REDIS_RECONNECTION_RETRIES,
                store::REDIS_RECONNECTION_RETRIES,
            ),
            retry_exponent_base: env_or(
                env_vars::REDIS_RETRY_EXPONENT_BASE,
                store::REDIS_RETRY_EXPONENT_BASE,
            ),
            max_retry_delay_ms: env_or(
                env_vars::REDIS_MAX_RETRY_DELAY_MS,
                store::REDIS_MAX_RETRY_DELAY_MS,
            ),
            initial_connection_retries: env_or(
                env_vars::REDIS_INITIAL_CONNECTION_RETRIES,
                store::REDIS_INITIAL_CONNECTION_RETRIES,
            ),
            initial_retry_delay_ms: env_or(
                env_vars::REDIS_INITIAL_RETRY_DELAY_MS,
                store::REDIS_INITIAL_RETRY_DELAY_MS,
            ),
        }
    }
}
