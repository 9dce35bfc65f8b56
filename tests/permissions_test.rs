// ABOUTME: Unit tests for the access level ordinal
// ABOUTME: Validates ordering, integer and name parsing, and JSON representation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use time_api_auth::errors::ErrorCode;
use time_api_auth::permissions::AccessLevel;

#[test]
fn test_levels_are_totally_ordered() {
    assert!(AccessLevel::Unauthorized < AccessLevel::Monitor);
    assert!(AccessLevel::Monitor < AccessLevel::Teacher);
    assert!(AccessLevel::Teacher < AccessLevel::Admin);
}

#[test]
fn test_privilege_is_at_least_comparison() {
    for granted in AccessLevel::ALL {
        for required in AccessLevel::ALL {
            assert_eq!(
                granted.has_privilege(required),
                granted.as_i64() >= required.as_i64(),
                "{granted} vs {required}"
            );
        }
    }
}

#[test]
fn test_integer_conversion_accepts_only_known_ordinals() {
    assert_eq!(AccessLevel::try_from(0).unwrap(), AccessLevel::Unauthorized);
    assert_eq!(AccessLevel::try_from(3).unwrap(), AccessLevel::Admin);

    for bad in [-1, 4, 7, i64::MAX] {
        let error = AccessLevel::try_from(bad).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidAccessLevel);
    }
}

#[test]
fn test_parse_from_name_or_integer() {
    assert_eq!(
        "teacher".parse::<AccessLevel>().unwrap(),
        AccessLevel::Teacher
    );
    assert_eq!("1".parse::<AccessLevel>().unwrap(), AccessLevel::Monitor);
    assert!("superuser".parse::<AccessLevel>().is_err());
}

#[test]
fn test_serializes_as_integer() {
    assert_eq!(serde_json::to_string(&AccessLevel::Teacher).unwrap(), "2");
    let parsed: AccessLevel = serde_json::from_str("3").unwrap();
    assert_eq!(parsed, AccessLevel::Admin);
    assert!(serde_json::from_str::<AccessLevel>("9").is_err());
}
