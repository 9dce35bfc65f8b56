// ABOUTME: Access level hierarchy re-exported from the core crate
// ABOUTME: unauthorized < monitor < teacher < admin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use time_api_core::permissions::*;
