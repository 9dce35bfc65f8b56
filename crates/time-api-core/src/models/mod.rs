// ABOUTME: Core data models shared by the token store and the HTTP layer
// ABOUTME: Re-exports the token record and its store field codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Token record bound to a bearer token
pub mod token;

pub use token::{decode_access_level, RecordFields, TokenRecord};
