//! Coupon validation HTTP handler.
//!
//! Implements `POST /api/validate-coupon`, the single API operation of this
//! service.

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    models::coupon::{ValidateCouponRequest, ValidationResult},
    services::validation_service,
    store::CouponStore,
};

/// Validate a coupon for a business.
///
/// # Request Body
///
/// ```json
/// {
///   "businessCode": "LACELESTE",
///   "couponCode": "pancito10"
/// }
/// ```
///
/// # Responses
///
/// - **200**: a validation result, positive or negative:
///
/// ```json
/// { "valid": true, "used": false, "message": "Coupon is valid. It has not been used yet." }
/// ```
///
/// - **400**: either code is missing or empty
/// - **500**: the upstream call failed (remote-backed store only)
///
/// # Notes
///
/// Unknown codes and already-used coupons are ordinary 200 results with
/// `valid: false` or `used: true`; only input and infrastructure problems
/// surface as error statuses.
pub async fn validate_coupon(
    State(store): State<CouponStore>,
    Json(request): Json<ValidateCouponRequest>,
) -> Result<Json<ValidationResult>, AppError> {
    // Both codes are required and must be non-empty after trimming
    let business_code = request.business_code.as_deref().map(str::trim).unwrap_or("");
    let coupon_code = request.coupon_code.as_deref().map(str::trim).unwrap_or("");

    if business_code.is_empty() || coupon_code.is_empty() {
        return Err(AppError::MissingCodes);
    }

    let result = validation_service::validate(&store, business_code, coupon_code).await?;

    Ok(Json(result))
}
