// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups token lifecycle, store connection, and service identity constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Token lifetimes, bootstrap keys, and the stored field schema
pub mod tokens;

/// Token store connection and maintenance defaults
pub mod store;

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the server binary
    pub const TIME_API_AUTH: &str = "time-api-auth";
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Bootstrap admin token
    pub const AUTH_TOKEN: &str = "AUTH_TOKEN";
    /// Lifetime of issued tokens in seconds
    pub const TOKEN_TTL_SECS: &str = "TOKEN_TTL_SECS";
    /// Redis URL; unset selects the in-memory store
    pub const REDIS_URL: &str = "REDIS_URL";
    /// Expired-entry sweep interval for the in-memory store
    pub const STORE_CLEANUP_INTERVAL_SECS: &str = "STORE_CLEANUP_INTERVAL_SECS";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Redis connect timeout in seconds
    pub const REDIS_CONNECTION_TIMEOUT_SECS: &str = "REDIS_CONNECTION_TIMEOUT_SECS";
    /// Redis per-command timeout in seconds
    pub const REDIS_RESPONSE_TIMEOUT_SECS: &str = "REDIS_RESPONSE_TIMEOUT_SECS";
    /// Reconnection retries after a dropped Redis connection
    pub const REDIS_RECONNECTION_RETRIES: &str = "REDIS_RECONNECTION_RETRIES";
    /// Exponential backoff base for Redis reconnection
    pub const REDIS_RETRY_EXPONENT_BASE: &str = "REDIS_RETRY_EXPONENT_BASE";
    /// Backoff cap in milliseconds
    pub const REDIS_MAX_RETRY_DELAY_MS: &str = "REDIS_MAX_RETRY_DELAY_MS";
    /// Startup connection attempts
    pub const REDIS_INITIAL_CONNECTION_RETRIES: &str = "REDIS_INITIAL_CONNECTION_RETRIES";
    /// First startup backoff delay in milliseconds
    pub const REDIS_INITIAL_RETRY_DELAY_MS: &str = "REDIS_INITIAL_RETRY_DELAY_MS";
}
