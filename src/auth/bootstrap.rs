// ABOUTME: Startup seeding of the admin token and the non-expiring role templates
// ABOUTME: Idempotent writes of the three fixed records the gate relies on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::tokens::TokenStore;
use crate::constants::tokens::{ADMIN_NAME, MONITOR_TEMPLATE_KEY, TEACHER_TEMPLATE_KEY};
use crate::errors::AppResult;
use crate::models::TokenRecord;
use crate::permissions::AccessLevel;
use tracing::info;

/// The fixed records written at startup, keyed by store key
#[must_use]
pub fn bootstrap_records(admin_token: &str) -> [(&str, TokenRecord); 3] {
    [
        (
            admin_token,
            TokenRecord::new(ADMIN_NAME, "", AccessLevel::Admin),
        ),
        (
            TEACHER_TEMPLATE_KEY,
            TokenRecord::new(TEACHER_TEMPLATE_KEY, "", AccessLevel::Teacher),
        ),
        (
            MONITOR_TEMPLATE_KEY,
            TokenRecord::new(MONITOR_TEMPLATE_KEY, "", AccessLevel::Monitor),
        ),
    ]
}

/// Write the bootstrap records with no expiry
///
/// Safe to run repeatedly; each run overwrites the same deterministic values
/// and clears any expiry previously set on those keys.
///
/// # Errors
///
/// Returns a storage error if any write fails
pub async fn seed(tokens: &TokenStore, admin_token: &str) -> AppResult<()> {
    for (key, record) in bootstrap_records(admin_token) {
        tokens.register_persistent(key, &record).await?;
    }

    info!(
        templates = ?[TEACHER_TEMPLATE_KEY, MONITOR_TEMPLATE_KEY],
        "Seeded bootstrap admin token and role templates"
    );
    Ok(())
}
