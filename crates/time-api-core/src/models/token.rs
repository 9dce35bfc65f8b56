// ABOUTME: Token record model with an explicit string field codec for hash-based stores
// ABOUTME: Encodes name/password/access_level to text fields and decodes them with type checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Token record
//!
//! The backing store only holds text, so a record is flattened into a fixed
//! set of fields on write and rebuilt from exactly those fields on read.
//! `access_level` is the only non-string field and is parsed as an integer
//! rank; unknown fields are ignored.

use crate::constants::tokens::fields;
use crate::errors::{AppError, AppResult};
use crate::permissions::AccessLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Flat field/value pairs as written to the store
pub type RecordFields = Vec<(&'static str, String)>;

/// Identity bound to a token
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Display/account identifier
    pub name: String,
    /// Opaque password payload, never validated here
    pub password: String,
    /// Role rank of the holder
    pub access_level: AccessLevel,
}

impl TokenRecord {
    /// Create a new record
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            access_level,
        }
    }

    /// Flatten into store fields
    #[must_use]
    pub fn encode(&self) -> RecordFields {
        vec![
            (fields::NAME, self.name.clone()),
            (fields::PASSWORD, self.password.clone()),
            (fields::ACCESS_LEVEL, self.access_level.as_i64().to_string()),
        ]
    }

    /// Rebuild a record from store fields
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a field is missing or `access_level`
    /// is not one of the defined integer ranks
    pub fn decode(stored: &HashMap<String, String>) -> AppResult<Self> {
        let name = required_field(stored, fields::NAME)?;
        let password = required_field(stored, fields::PASSWORD)?;
        let access_level = decode_access_level(required_field(stored, fields::ACCESS_LEVEL)?)?;

        Ok(Self {
            name: name.to_owned(),
            password: password.to_owned(),
            access_level,
        })
    }
}

/// Parse a stored `access_level` field
///
/// # Errors
///
/// Returns a serialization error if the value is not a defined integer rank
pub fn decode_access_level(raw: &str) -> AppResult<AccessLevel> {
    let rank = raw.parse::<i64>().map_err(|e| {
        AppError::serialization(format!("access_level '{raw}' is not an integer: {e}"))
    })?;
    AccessLevel::try_from(rank)
        .map_err(|_| AppError::serialization(format!("access_level {rank} is out of range")))
}

fn required_field<'a>(stored: &'a HashMap<String, String>, field: &str) -> AppResult<&'a str> {
    stored
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| AppError::serialization(format!("token record is missing field '{field}'")))
}

impl fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRecord")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("access_level", &self.access_level)
            .finish()
    }
}
