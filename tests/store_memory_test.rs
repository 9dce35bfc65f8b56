// ABOUTME: Integration tests for the in-memory record store backend
// ABOUTME: Tests field merging, expiry arming and clearing, and the background sweep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use std::time::Duration;
use time_api_auth::config::StoreConfig;
use time_api_auth::store::Store;

fn fields(name: &str) -> Vec<(&'static str, String)> {
    vec![("name", name.to_owned()), ("access_level", "1".to_owned())]
}

#[tokio::test]
async fn test_put_and_read_back() -> Result<()> {
    let store = Store::in_memory().await?;
    assert_eq!(store.backend_info(), "in-memory");

    store
        .put_expiring("k", &fields("alice"), Duration::from_secs(60))
        .await?;

    assert!(store.exists("k").await?);
    assert_eq!(store.get_field("k", "name").await?.as_deref(), Some("alice"));
    assert_eq!(store.get_field("k", "missing").await?, None);

    let all = store.get_all("k").await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all["access_level"], "1");

    Ok(())
}

#[tokio::test]
async fn test_absent_key_reads() -> Result<()> {
    let store = Store::in_memory().await?;

    assert!(!store.exists("nope").await?);
    assert_eq!(store.get_field("nope", "name").await?, None);
    assert!(store.get_all("nope").await?.is_empty());
    assert_eq!(store.ttl("nope").await?, None);

    Ok(())
}

#[tokio::test]
async fn test_persistent_write_clears_expiry() -> Result<()> {
    let store = Store::in_memory().await?;

    store
        .put_expiring("k", &fields("alice"), Duration::from_millis(100))
        .await?;
    assert!(store.ttl("k").await?.is_some());

    store.put_persistent("k", &fields("alice")).await?;
    assert_eq!(store.ttl("k").await?, None);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(store.exists("k").await?);

    Ok(())
}

#[tokio::test]
async fn test_expired_record_is_not_resurrected_by_partial_write() -> Result<()> {
    let store = Store::in_memory().await?;

    store
        .put_expiring("k", &fields("alice"), Duration::from_millis(50))
        .await?;
    tokio::time::sleep(Duration::from_millis(100)).await;

    store.put_persistent("k", &[("name", "bob".to_owned())]).await?;

    let all = store.get_all("k").await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all["name"], "bob");

    Ok(())
}

#[tokio::test]
async fn test_background_sweep_removes_expired_records() -> Result<()> {
    let store = Store::new(StoreConfig {
        cleanup_interval: Duration::from_millis(50),
        enable_background_cleanup: true,
        ..StoreConfig::in_memory()
    })
    .await?;

    store
        .put_expiring("short", &fields("a"), Duration::from_millis(20))
        .await?;
    store.put_persistent("long", &fields("b")).await?;

    tokio::time::sleep(Duration::from_millis(200)).await;

    let memory = store.as_memory().expect("in-memory backend");
    assert_eq!(memory.len().await, 1);
    assert!(store.exists("long").await?);

    Ok(())
}

#[tokio::test]
async fn test_health_check() -> Result<()> {
    Store::in_memory().await?.health_check().await?;
    Ok(())
}
