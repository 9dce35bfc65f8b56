// ABOUTME: Token store constants for Redis connectivity and in-memory maintenance
// ABOUTME: Defaults used when the corresponding environment variables are unset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default cleanup interval in seconds for expired in-memory records
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300; // 5 minutes

/// Redis connection timeout in seconds
pub const REDIS_CONNECTION_TIMEOUT_SECS: u64 = 5;

/// Redis per-command response timeout in seconds
pub const REDIS_RESPONSE_TIMEOUT_SECS: u64 = 3;

/// Reconnection attempts made by the connection manager after a drop
pub const REDIS_RECONNECTION_RETRIES: usize = 3;

/// Exponential backoff base for reconnection delays
pub const REDIS_RETRY_EXPONENT_BASE: u64 = 2;

/// Upper bound for any retry delay in milliseconds
pub const REDIS_MAX_RETRY_DELAY_MS: u64 = 10_000;

/// Connection attempts made at startup before giving up
pub const REDIS_INITIAL_CONNECTION_RETRIES: u32 = 5;

/// First startup retry delay in milliseconds (doubles each attempt)
pub const REDIS_INITIAL_RETRY_DELAY_MS: u64 = 500;
