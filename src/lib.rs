//! Coupon validation service.
//!
//! A small merchant-facing web service that checks whether a discount coupon
//! is valid and whether it has already been redeemed. It serves a browser
//! form and a single JSON endpoint that answers either from an in-memory
//! demo table or by proxying to a remote backend.
//!
//! The layered structure of the app is
//!
//! `Router -> Handler -> Service -> CouponStore (table or HTTP backend)`
//!
//! The router lives here rather than in `main.rs` so integration tests can
//! drive it directly.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::CouponStore;

/// Build the HTTP router.
///
/// # Routes
///
/// - `GET /` - the merchant-facing validation form
/// - `GET /health` - liveness probe
/// - `POST /api/validate-coupon` - the validation endpoint
///
/// CORS is permissive: the validation API is meant to be callable from
/// merchant pages on other origins.
pub fn app(store: CouponStore) -> Router {
    Router::new()
        .route("/", get(handlers::ui::index))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/validate-coupon",
            post(handlers::validate::validate_coupon),
        )
        // Add request tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Share the coupon store with all handlers via State extraction
        .with_state(store)
}
