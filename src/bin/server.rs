//! Standalone API server (without Dioxus frontend)
//! Use this for API-only testing or backend development.
//!
//! Run with: cargo run --bin server --features server -- --api-url http://localhost:4000

use anyhow::Context;
use axum::{routing::get, Router};
use clap::Parser;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use booking_admin::config::{self, ServerConfig};
use booking_admin::handlers::{health_handler, list_bookings_handler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = config::init(ServerConfig::parse()).context("invalid configuration")?;

    tracing::info!(
        upstream = %config.bookings_url(),
        "Starting Bookings Admin API Server (standalone)..."
    );

    let app = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/bookings", get(list_bookings_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("API server listening on http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
