// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads auth, token store, and HTTP settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! All configuration is environment-driven:
//!
//! - **Environment**: Server, HTTP, and bootstrap admin token settings
//! - **Store**: Token store backend selection and Redis connection tuning

use std::env;
use std::str::FromStr;

/// Environment and server configuration
pub mod environment;
/// Token store backend and Redis connection configuration
pub mod store;

pub use environment::{AuthConfig, ServerConfig};
pub use store::{RedisConnectionConfig, StoreConfig};

/// Read and parse an environment variable, falling back to `default` when it
/// is unset or does not parse
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
