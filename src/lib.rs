// ABOUTME: Main library entry point for the bearer token authorization service
// ABOUTME: Exposes the token store, authorization gates, bootstrap seeding, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Time API Auth
//!
//! Bearer token authentication and four-level authorization for the time
//! tracking API.
//!
//! ## Features
//!
//! - **Expiring tokens**: random UUID tokens stored as flat records with a
//!   three day lifetime, written together with their expiry in one atomic
//!   store operation
//! - **Ordered access levels**: `unauthorized < monitor < teacher < admin`
//! - **Authorization gates**: one checker per required level, yielding the
//!   caller's identity
//! - **Bootstrap seeding**: a configured admin token plus non-expiring
//!   `teacher` and `monitor` role templates
//! - **Pluggable storage**: Redis in production, in-memory for development
//!   and tests
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use time_api_auth::auth::{AuthContext, TokenStore};
//! use time_api_auth::errors::AppResult;
//! use time_api_auth::store::Store;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let tokens = TokenStore::new(Store::in_memory().await?);
//!     let context = AuthContext::bootstrap(tokens, "s3cret").await?;
//!
//!     let token = context.tokens().issue("alice", "pw", 2).await?;
//!     let identity = context.teacher().check(&token).await?;
//!     assert_eq!(identity.name, "alice");
//!     Ok(())
//! }
//! ```

/// Token store, authorization gates and bootstrap seeding
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// Service-wide constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware helpers
pub mod middleware;

/// Token record model and codec
pub mod models;

/// Access level ordinal
pub mod permissions;

/// HTTP routes
pub mod routes;

/// Expiring record store backends
pub mod store;
