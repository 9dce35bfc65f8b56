// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles the bootstrap admin token, token lifetime, HTTP port, and store selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use super::{env_or, StoreConfig};
use crate::constants::{env_vars, tokens};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Default HTTP listen port
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Token issuance and bootstrap configuration
    pub auth: AuthConfig,
    /// Token store configuration
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the configured admin token is empty
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            http_port: env_or(env_vars::HTTP_PORT, DEFAULT_HTTP_PORT),
            auth: AuthConfig::from_env()?,
            store: StoreConfig::from_env(),
        })
    }

    /// Human-readable configuration summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Time API Auth Configuration:\n\
             - HTTP Port: {}\n\
             - Token Store: {}\n\
             - Token TTL: {}s\n\
             - Admin Token: {}",
            self.http_port,
            if self.store.redis_url.is_some() {
                "Redis"
            } else {
                "In-memory"
            },
            self.auth.token_ttl.as_secs(),
            if self.auth.uses_default_admin_token() {
                "built-in default"
            } else {
                "configured"
            },
        )
    }
}

/// Token issuance and bootstrap configuration
#[derive(Clone)]
pub struct AuthConfig {
    admin_token: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Build an auth configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `admin_token` is empty or names a role template
    /// record, or if `token_ttl` is zero
    pub fn new(admin_token: impl Into<String>, token_ttl: Duration) -> AppResult<Self> {
        let admin_token = admin_token.into();
        if admin_token.is_empty() {
            return Err(AppError::config(format!(
                "{} must not be empty",
                env_vars::AUTH_TOKEN
            )));
        }
        if [tokens::TEACHER_TEMPLATE_KEY, tokens::MONITOR_TEMPLATE_KEY]
            .contains(&admin_token.as_str())
        {
            return Err(AppError::config(format!(
                "{} must not collide with the '{admin_token}' template record",
                env_vars::AUTH_TOKEN
            )));
        }
        if token_ttl.is_zero() {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                env_vars::TOKEN_TTL_SECS
            )));
        }
        Ok(Self {
            admin_token,
            token_ttl,
        })
    }

    /// Load auth configuration from environment
    ///
    /// `AUTH_TOKEN` falls back to a well-known default; a warning is logged
    /// whenever that default is in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_TOKEN` is set but empty or `TOKEN_TTL_SECS` is zero
    pub fn from_env() -> AppResult<Self> {
        let admin_token = env::var(env_vars::AUTH_TOKEN)
            .unwrap_or_else(|_| tokens::DEFAULT_ADMIN_TOKEN.to_owned());
        let token_ttl = Duration::from_secs(env_or(
            env_vars::TOKEN_TTL_SECS,
            tokens::DEFAULT_TOKEN_TTL_SECS,
        ));

        let config = Self::new(admin_token, token_ttl)?;
        if config.uses_default_admin_token() {
            warn!(
                "{} is not set; the bootstrap admin token is the built-in default",
                env_vars::AUTH_TOKEN
            );
        }
        Ok(config)
    }

    /// The bootstrap admin token
    #[must_use]
    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }

    /// Whether the admin token is the well-known fallback
    #[must_use]
    pub fn uses_default_admin_token(&self) -> bool {
        self.admin_token == tokens::DEFAULT_ADMIN_TOKEN
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_token: tokens::DEFAULT_ADMIN_TOKEN.to_owned(),
            token_ttl: tokens::DEFAULT_TOKEN_TTL,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("admin_token", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
