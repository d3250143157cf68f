//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::CouponStore;

/// Health check response.
///
/// Reports which coupon source the server was configured with.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Configured coupon source ("mock" or "remote")
    pub coupon_source: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "coupon_source": "mock",
///   "timestamp": "2026-08-07T19:00:00Z"
/// }
/// ```
///
/// The remote backend is not probed here; a reachability check would need
/// the timeout handling the validation path deliberately does without.
pub async fn health_check(State(store): State<CouponStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        coupon_source: store.source_name().to_string(),
        timestamp: Utc::now(),
    })
}
