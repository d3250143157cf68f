//! Business logic services.
//!
//! Handlers stay thin; the decision-making lives here.

/// Remote coupon backend client
pub mod backend_client;
/// Coupon lookup logic
pub mod validation_service;
