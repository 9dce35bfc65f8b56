// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: AppError, ErrorCode, and the HTTP error response body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use time_api_core::errors::*;
