// ABOUTME: Ordered access levels used to gate protected operations
// ABOUTME: unauthorized < monitor < teacher < admin, compared by integer rank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Access level hierarchy
//!
//! A caller is allowed through a gate when its level is greater than or
//! equal to the level the gate requires. Levels travel as plain integers in
//! the store and in JSON, so conversion from raw integers is fallible.

use crate::errors::{AppError, AppResult};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Totally ordered role rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum AccessLevel {
    /// No privileges; the lowest rank
    #[default]
    Unauthorized = 0,
    /// Read-mostly monitoring role
    Monitor = 1,
    /// Teaching staff
    Teacher = 2,
    /// Full administrative access
    Admin = 3,
}

impl AccessLevel {
    /// Every defined level, lowest first
    pub const ALL: [Self; 4] = [
        Self::Unauthorized,
        Self::Monitor,
        Self::Teacher,
        Self::Admin,
    ];

    /// Integer rank of this level
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self as i64
    }

    /// Symbolic name of this level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Monitor => "monitor",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    /// Whether this level satisfies a gate requiring `required`
    #[must_use]
    pub fn has_privilege(self, required: Self) -> bool {
        self >= required
    }
}

impl TryFrom<i64> for AccessLevel {
    type Error = AppError;

    fn try_from(value: i64) -> AppResult<Self> {
        match value {
            0 => Ok(Self::Unauthorized),
            1 => Ok(Self::Monitor),
            2 => Ok(Self::Teacher),
            3 => Ok(Self::Admin),
            other => Err(AppError::invalid_access_level(other)),
        }
    }
}

impl From<AccessLevel> for i64 {
    fn from(level: AccessLevel) -> Self {
        level.as_i64()
    }
}

impl FromStr for AccessLevel {
    type Err = AppError;

    /// Accepts either the symbolic name or the integer rank
    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "unauthorized" => Ok(Self::Unauthorized),
            "monitor" => Ok(Self::Monitor),
            "teacher" => Ok(Self::Teacher),
            "admin" => Ok(Self::Admin),
            other => other
                .parse::<i64>()
                .map_err(|_| AppError::invalid_access_level(other))
                .and_then(Self::try_from),
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AccessLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Self::try_from(raw).map_err(de::Error::custom)
    }
}
