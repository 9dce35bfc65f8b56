// ABOUTME: Core types and constants for the time API token authorization service
// ABOUTME: Foundation crate with error handling, access levels, token records, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Time API Core
//!
//! Foundation crate providing shared types and constants for the time API
//! token authorization service. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Token lifetimes, bootstrap keys, and store defaults
//! - **permissions**: The ordered `AccessLevel` enumeration
//! - **models**: The `TokenRecord` bound to each bearer token and its field codec

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Access levels used for authorization comparisons
pub mod permissions;

/// Token record model and store field codec
pub mod models;
