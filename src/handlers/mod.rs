//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (lookups, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Health check endpoint
pub mod health;
/// Embedded client form
pub mod ui;
/// Coupon validation endpoint
pub mod validate;
