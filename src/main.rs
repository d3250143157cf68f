//! Coupon Validation Service - Main Application Entry Point
//!
//! This is a web server that lets a merchant check whether a customer's
//! discount coupon is valid and whether it has already been redeemed. It
//! serves the browser form and a single validation endpoint.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Coupon Source**: in-memory demo table, or a remote backend over HTTP
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Construct the coupon store (mock table or remote client)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use coupon_validation_server::{
    app,
    config::Config,
    services::backend_client::BackendClient,
    store::{self, CouponStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Choose the coupon source: remote backend when configured, demo table otherwise
    let store = match config.coupon_backend_url.as_deref() {
        Some(url) => {
            let backend = BackendClient::new(url)?;
            tracing::info!("Validating coupons against remote backend at {}", url);
            CouponStore::Remote(backend)
        }
        None => {
            tracing::info!("Validating coupons against the in-memory demo table");
            CouponStore::Mock(Arc::new(store::demo_table()))
        }
    };

    // Build the router
    let app = app(store);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
