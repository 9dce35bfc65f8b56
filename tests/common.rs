// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and in-memory token store and auth context helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `time_api_auth`

use anyhow::Result;
use std::sync::Once;
use std::time::Duration;
use time_api_auth::{
    auth::{AuthContext, TokenStore},
    store::Store,
};

static INIT_LOGGER: Once = Once::new();

/// Admin token used by the in-memory test contexts
pub const TEST_ADMIN_TOKEN: &str = "test-admin-secret";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory token store with the default three day lifetime
pub async fn create_test_token_store() -> Result<TokenStore> {
    init_test_logging();
    Ok(TokenStore::new(Store::in_memory().await?))
}

/// In-memory token store issuing tokens with a custom lifetime
pub async fn create_test_token_store_with_ttl(ttl: Duration) -> Result<TokenStore> {
    init_test_logging();
    Ok(TokenStore::with_ttl(Store::in_memory().await?, ttl))
}

/// Bootstrapped in-memory auth context using [`TEST_ADMIN_TOKEN`]
pub async fn create_test_auth_context() -> Result<AuthContext> {
    let tokens = create_test_token_store().await?;
    Ok(AuthContext::bootstrap(tokens, TEST_ADMIN_TOKEN).await?)
}
