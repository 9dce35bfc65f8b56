// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: Validates defaults, overrides, and rejection of unusable admin tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::time::Duration;
use time_api_auth::config::{AuthConfig, RedisConnectionConfig, ServerConfig, StoreConfig};
use time_api_auth::constants::env_vars;
use time_api_auth::errors::ErrorCode;

const VARS: [&str; 12] = [
    env_vars::AUTH_TOKEN,
    env_vars::TOKEN_TTL_SECS,
    env_vars::REDIS_URL,
    env_vars::HTTP_PORT,
    env_vars::STORE_CLEANUP_INTERVAL_SECS,
    env_vars::REDIS_CONNECTION_TIMEOUT_SECS,
    env_vars::REDIS_RESPONSE_TIMEOUT_SECS,
    env_vars::REDIS_RECONNECTION_RETRIES,
    env_vars::REDIS_RETRY_EXPONENT_BASE,
    env_vars::REDIS_MAX_RETRY_DELAY_MS,
    env_vars::REDIS_INITIAL_CONNECTION_RETRIES,
    env_vars::REDIS_INITIAL_RETRY_DELAY_MS,
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.auth.admin_token(), "123456");
    assert!(config.auth.uses_default_admin_token());
    assert_eq!(config.auth.token_ttl, Duration::from_secs(259_200));
    assert!(config.store.redis_url.is_none());
    assert_eq!(config.store.cleanup_interval, Duration::from_secs(300));
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var(env_vars::AUTH_TOKEN, "s3cret");
    env::set_var(env_vars::TOKEN_TTL_SECS, "60");
    env::set_var(env_vars::REDIS_URL, "redis://redis:6379");
    env::set_var(env_vars::HTTP_PORT, "9000");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.auth.admin_token(), "s3cret");
    assert!(!config.auth.uses_default_admin_token());
    assert_eq!(config.auth.token_ttl, Duration::from_secs(60));
    assert_eq!(
        config.store.redis_url.as_deref(),
        Some("redis://redis:6379")
    );
    assert_eq!(config.http_port, 9000);

    clear_env();
}

#[test]
#[serial]
fn test_blank_redis_url_selects_memory() {
    clear_env();
    env::set_var(env_vars::REDIS_URL, "  ");

    assert!(StoreConfig::from_env().redis_url.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_empty_admin_token_rejected() {
    clear_env();
    env::set_var(env_vars::AUTH_TOKEN, "");

    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    clear_env();
}

#[test]
#[serial]
fn test_zero_ttl_rejected() {
    clear_env();
    env::set_var(env_vars::TOKEN_TTL_SECS, "0");

    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    clear_env();
}

#[test]
#[serial]
fn test_redis_connection_defaults() {
    clear_env();

    let config = RedisConnectionConfig::from_env();
    assert_eq!(config.connection_timeout_secs, 5);
    assert_eq!(config.response_timeout_secs, 3);
    assert_eq!(config.reconnection_retries, 3);
    assert_eq!(config.max_retry_delay_ms, 10_000);
    assert_eq!(config.initial_connection_retries, 5);
    assert_eq!(config.initial_retry_delay_ms, 500);
}

#[test]
#[serial]
fn test_redis_connection_overrides() {
    clear_env();
    env::set_var(env_vars::REDIS_CONNECTION_TIMEOUT_SECS, "10");
    env::set_var(env_vars::REDIS_INITIAL_CONNECTION_RETRIES, "1");
    env::set_var(env_vars::REDIS_INITIAL_RETRY_DELAY_MS, "not-a-number");

    let config = StoreConfig::from_env().redis_connection;
    assert_eq!(config.connection_timeout_secs, 10);
    assert_eq!(config.initial_connection_retries, 1);
    assert_eq!(config.initial_retry_delay_ms, 500);

    clear_env();
}

#[test]
fn test_admin_token_cannot_shadow_templates() {
    for key in ["teacher", "monitor"] {
        let error = AuthConfig::new(key, Duration::from_secs(60)).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }
}

#[test]
fn test_debug_output_redacts_admin_token() {
    let config = AuthConfig::new("very-secret", Duration::from_secs(60)).unwrap();
    let debug = format!("{config:?}");
    assert!(!debug.contains("very-secret"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn test_summary_omits_admin_token() {
    let config = ServerConfig {
        http_port: 8080,
        auth: AuthConfig::new("very-secret", Duration::from_secs(60)).unwrap(),
        store: StoreConfig::in_memory(),
    };
    let summary = config.summary();
    assert!(!summary.contains("very-secret"));
    assert!(summary.contains("In-memory"));
}
