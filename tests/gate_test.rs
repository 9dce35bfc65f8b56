// ABOUTME: Integration tests for the authorization gate
// ABOUTME: Covers level monotonicity, rejection cases, and the identity returned on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use time_api_auth::auth::{AuthContext, TokenStore};
use time_api_auth::errors::ErrorCode;
use time_api_auth::permissions::AccessLevel;
use time_api_auth::store::Store;
use uuid::Uuid;

#[tokio::test]
async fn test_gate_admits_exactly_sufficient_levels() -> Result<()> {
    let context = common::create_test_auth_context().await?;

    for granted in AccessLevel::ALL {
        let token = context
            .tokens()
            .issue("user", "pw", granted.as_i64())
            .await?;

        for required in AccessLevel::ALL {
            let result = context.gate(required).check(&token).await;
            if granted >= required {
                assert_eq!(result?.access_level, granted);
            } else {
                assert_eq!(result.unwrap_err().code, ErrorCode::Unauthorized);
            }
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_teacher_token_end_to_end() -> Result<()> {
    let context = common::create_test_auth_context().await?;
    let token = context.tokens().issue("alice", "pw", 2).await?;

    let identity = context.teacher().check(&token).await?;
    assert_eq!(identity.name, "alice");
    assert_eq!(identity.password, "pw");
    assert_eq!(identity.access_level, AccessLevel::Teacher);

    assert!(context.monitor().check(&token).await.is_ok());
    assert!(context.any().check(&token).await.is_ok());
    assert_eq!(
        context.admin().check(&token).await.unwrap_err().code,
        ErrorCode::Unauthorized
    );

    Ok(())
}

#[tokio::test]
async fn test_empty_token_is_unauthorized() -> Result<()> {
    let context = common::create_test_auth_context().await?;

    for gate in [context.any(), context.monitor(), context.admin()] {
        assert_eq!(
            gate.check("").await.unwrap_err().code,
            ErrorCode::Unauthorized
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() -> Result<()> {
    let context = common::create_test_auth_context().await?;

    let error = context
        .any()
        .check(&Uuid::new_v4().to_string())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::Unauthorized);

    Ok(())
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() -> Result<()> {
    common::init_test_logging();
    let tokens = TokenStore::with_ttl(Store::in_memory().await?, Duration::from_millis(150));
    let context = AuthContext::bootstrap(tokens, common::TEST_ADMIN_TOKEN).await?;

    let token = context.tokens().issue("alice", "pw", 3).await?;
    assert!(context.admin().check(&token).await.is_ok());

    tokio::time::sleep(Duration::from_millis(250)).await;

    assert_eq!(
        context.any().check(&token).await.unwrap_err().code,
        ErrorCode::Unauthorized
    );

    Ok(())
}

#[tokio::test]
async fn test_unauthorized_level_token_passes_open_gate_only() -> Result<()> {
    let context = common::create_test_auth_context().await?;
    let token = context.tokens().issue("guest", "", 0).await?;

    let identity = context.any().check(&token).await?;
    assert_eq!(identity.access_level, AccessLevel::Unauthorized);
    assert!(context.monitor().check(&token).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_gates_report_required_level() -> Result<()> {
    let context = common::create_test_auth_context().await?;

    assert_eq!(context.any().required(), AccessLevel::Unauthorized);
    assert_eq!(context.monitor().required(), AccessLevel::Monitor);
    assert_eq!(context.teacher().required(), AccessLevel::Teacher);
    assert_eq!(context.admin().required(), AccessLevel::Admin);

    Ok(())
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_rejections_emit_security_events_without_token() -> Result<()> {
    let context = common::create_test_auth_context().await?;
    let token = context.tokens().issue("alice", "pw", 2).await?;

    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    assert!(context.admin().check(&token).await.is_err());
    assert!(context.any().check("").await.is_err());

    let output = logs.contents();
    assert!(output.contains("insufficient_access_level"));
    assert!(output.contains("authorization_rejected"));
    assert!(!output.contains(&token));

    Ok(())
}
