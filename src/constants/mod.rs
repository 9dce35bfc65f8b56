// ABOUTME: Application constants re-exported from the core crate
// ABOUTME: Token lifecycle, store defaults, environment variable names, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use time_api_core::constants::*;
