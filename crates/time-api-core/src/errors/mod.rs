// ABOUTME: Unified error type with standard error codes and HTTP status mapping
// ABOUTME: Covers token lifecycle, authorization, storage, and configuration failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the service returns [`AppResult`]. The
//! [`ErrorCode`] carried by an [`AppError`] decides the HTTP status the
//! transport layer answers with, so authorization failures, missing tokens and
//! store outages stay distinguishable all the way to the client.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1000-1999)
    /// Token absent, expired, or below the required access level
    #[serde(rename = "UNAUTHORIZED")]
    Unauthorized = 1000,

    // Validation (3000-3999)
    /// Malformed request payload
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Access level outside the defined ordinals
    #[serde(rename = "INVALID_ACCESS_LEVEL")]
    InvalidAccessLevel = 3001,

    // Resource Management (4000-4999)
    /// Addressed token key is not in the store
    #[serde(rename = "TOKEN_NOT_FOUND")]
    TokenNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration value present but unusable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unclassified internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Backing store unreachable or command failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Stored record does not match the declared field schema
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput | Self::InvalidAccessLevel => 400,

            // 401 Unauthorized
            Self::Unauthorized => 401,

            // 404 Not Found
            Self::TokenNotFound => 404,

            // 503 Service Unavailable
            Self::StorageError => 503,

            // 500 Internal Server Error
            Self::ConfigInvalid | Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Unauthorized => "The request is not authorized",
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidAccessLevel => "The requested access level is not defined",
            Self::TokenNotFound => "The token was not found or has expired",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
            Self::StorageError => "Token store operation failed",
            Self::SerializationError => "Stored token record is malformed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Token missing, expired, or with an insufficient access level
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Access level outside the four defined ordinals
    #[must_use]
    pub fn invalid_access_level(value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidAccessLevel,
            format!("invalid access_level: {value}"),
        )
    }

    /// Token key absent from the store
    #[must_use]
    pub fn token_not_found() -> Self {
        Self::new(ErrorCode::TokenNotFound, "Token not found")
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Backing store failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Stored record could not be decoded
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(code = ?self.code, "{}", self);
        }
        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::Unauthorized.http_status(), 401);
        assert_eq!(ErrorCode::InvalidAccessLevel.http_status(), 400);
        assert_eq!(ErrorCode::TokenNotFound.http_status(), 404);
        assert_eq!(ErrorCode::StorageError.http_status(), 503);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_invalid_access_level_message() {
        let error = AppError::invalid_access_level(7);
        assert_eq!(error.code, ErrorCode::InvalidAccessLevel);
        assert_eq!(error.message, "invalid access_level: 7");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::unauthorized("Token not accepted"));

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("UNAUTHORIZED"));
        assert!(json.contains("Token not accepted"));
    }

    #[test]
    fn test_source_is_chained() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = AppError::storage("Redis unreachable").with_source(io);

        let source = StdError::source(&error).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("refused"));
    }
}
