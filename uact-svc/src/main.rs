//! uact-svc - User activity tracking service
//!
//! Tracks per-user login/logout sessions in memory and serves derived
//! activity metrics over HTTP: cumulative minutes, inactivity detection,
//! per-day monthly buckets, and a coarse status classification.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use uact_common::config::resolve_listen_config;
use uact_svc::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "uact-svc", version, about = "User activity tracking service")]
struct Args {
    /// Listen host (overrides UACT_HOST and the config file)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides UACT_PORT and the config file)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting UACT service (uact-svc) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let listen = resolve_listen_config(args.host.as_deref(), args.port);
    let addr = listen.socket_addr()?;

    // All state is in-memory and lives for the process lifetime
    let state = AppState::new();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("uact-svc listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
