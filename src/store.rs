//! Coupon source construction and sharing.
//!
//! This module provides the `CouponStore` handed to every handler via Axum
//! state. The store is chosen once at startup:
//! - **Mock**: a read-only in-memory table seeded with demo coupons
//! - **Remote**: a thin client for an external validation service
//!
//! The application never owns coupon data; both variants are passive lookup
//! sources.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::coupon::CouponStatus;
use crate::services::backend_client::BackendClient;

/// In-memory coupon table: business code → coupon code → status.
///
/// Business codes are stored upper-case and coupon codes lower-case; lookups
/// normalize their inputs to match.
pub type CouponTable = HashMap<String, HashMap<String, CouponStatus>>;

/// The configured origin of coupon records.
///
/// Cloning is cheap in both variants (`Arc` for the table, and
/// `reqwest::Client` is internally reference-counted), so the store can be
/// used directly as router state.
#[derive(Clone)]
pub enum CouponStore {
    /// Seeded demo table, used when no backend URL is configured
    Mock(Arc<CouponTable>),

    /// Remote validation service
    Remote(BackendClient),
}

impl CouponStore {
    /// Short name of the configured source, reported by the health endpoint.
    pub fn source_name(&self) -> &'static str {
        match self {
            CouponStore::Mock(_) => "mock",
            CouponStore::Remote(_) => "remote",
        }
    }
}

/// Build the demo coupon table.
///
/// These are the coupons advertised on the client form, so the seeded data
/// and the page must stay in sync.
pub fn demo_table() -> CouponTable {
    const UNUSED: CouponStatus = CouponStatus {
        valid: true,
        used: false,
    };
    const USED: CouponStatus = CouponStatus {
        valid: true,
        used: true,
    };

    HashMap::from([
        (
            "LACELESTE".to_string(),
            HashMap::from([
                ("pancito10".to_string(), UNUSED),
                ("descuento20".to_string(), USED),
                ("promo15".to_string(), UNUSED),
            ]),
        ),
        (
            "PANADERIASOL".to_string(),
            HashMap::from([
                ("pan25".to_string(), UNUSED),
                ("dulce30".to_string(), USED),
            ]),
        ),
    ])
}
