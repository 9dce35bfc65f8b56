// ABOUTME: Token record model re-exported from the core crate
// ABOUTME: The identity context bound to each bearer token and its store codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use time_api_core::models::*;
