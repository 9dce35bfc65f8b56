// ABOUTME: Token service binary: loads configuration, seeds bootstrap tokens, serves HTTP
// ABOUTME: Exits non-zero if the token store is unreachable or seeding fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Time API Auth Server Binary
//!
//! Starts the bearer token service against the configured token store.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use time_api_auth::{auth::AuthContext, config::ServerConfig, logging, routes};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "time-api-auth")]
#[command(about = "Bearer token issuance and access-level authorization service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first so configuration warnings are not lost
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    info!("{}", config.summary());

    let context = match AuthContext::from_config(&config).await {
        Ok(context) => Arc::new(context),
        Err(e) => {
            error!("Bootstrap failed, refusing to serve: {e}");
            return Err(e.into());
        }
    };
    info!(
        "Token store ready: {}",
        context.tokens().store().backend_info()
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr).await?;
    display_available_endpoints(config.http_port);

    axum::serve(listener, routes::build_router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Health Check:      GET  http://0.0.0.0:{port}/health");
    info!("   Readiness:         GET  http://0.0.0.0:{port}/ready");
    info!("   Issue Token:       POST http://0.0.0.0:{port}/auth/tokens");
    info!("   Refresh Token:     POST http://0.0.0.0:{port}/auth/tokens/refresh");
    info!("   Current Identity:  GET  http://0.0.0.0:{port}/auth/me");
    info!("=== End of Endpoint List ===");
}
