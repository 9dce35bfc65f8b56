// ABOUTME: Token lifecycle constants for issuance, bootstrap seeding, and record fields
// ABOUTME: Defines the default TTL, the fallback admin secret, and role template keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

/// Lifetime of an issued token in seconds (3 days)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3 * 24 * 60 * 60;

/// Lifetime of an issued token
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(DEFAULT_TOKEN_TTL_SECS);

/// Admin token used when `AUTH_TOKEN` is not configured
pub const DEFAULT_ADMIN_TOKEN: &str = "123456";

/// Display name stored on the bootstrap admin record
pub const ADMIN_NAME: &str = "admin";

/// Store key of the non-expiring teacher template record
pub const TEACHER_TEMPLATE_KEY: &str = "teacher";

/// Store key of the non-expiring monitor template record
pub const MONITOR_TEMPLATE_KEY: &str = "monitor";

/// HTTP header carrying the bearer token
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Field names of a stored token record
pub mod fields {
    /// Display/account identifier
    pub const NAME: &str = "name";
    /// Opaque password payload
    pub const PASSWORD: &str = "password";
    /// Integer access level
    pub const ACCESS_LEVEL: &str = "access_level";

    /// Every field a well-formed record carries
    pub const ALL: [&str; 3] = [NAME, PASSWORD, ACCESS_LEVEL];
}
