//! Coupon data model and API request/response types.
//!
//! This module defines:
//! - `CouponStatus`: the stored state of a single coupon
//! - `ValidateCouponRequest`: body accepted by the validation endpoint
//! - `ValidationResult`: response body returned to clients
//! - `BackendValidationRequest`: body forwarded to the remote backend

use serde::{Deserialize, Serialize};

/// Stored state of a coupon, keyed by (business code, coupon code).
///
/// The application never writes this: records come from the seeded demo
/// table or from the remote backend, and redemption happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouponStatus {
    /// Whether the coupon exists and can be honored at all
    pub valid: bool,

    /// Whether the coupon has already been redeemed
    ///
    /// A used coupon is still "valid" in the data model but must not be
    /// honored again.
    pub used: bool,
}

/// Request to validate a coupon.
///
/// # JSON Example
///
/// ```json
/// {
///   "businessCode": "LACELESTE",
///   "couponCode": "pancito10"
/// }
/// ```
///
/// Both fields are declared optional so that a missing key still
/// deserializes; the handler performs its own requiredness check and answers
/// with the endpoint's 400 message instead of a framework rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCouponRequest {
    /// Merchant identifier scoping which coupons are valid
    #[serde(default)]
    pub business_code: Option<String>,

    /// Identifier of the discount offer being checked
    #[serde(default)]
    pub coupon_code: Option<String>,
}

/// Response returned for a coupon validation.
///
/// # JSON Examples
///
/// ```json
/// { "valid": true, "used": false, "message": "Coupon is valid. It has not been used yet." }
/// ```
///
/// ```json
/// { "valid": false, "message": "Business code is not valid" }
/// ```
///
/// `used` is only meaningful when the coupon could be looked up; it is
/// omitted entirely when the business code is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<bool>,

    pub message: String,
}

impl ValidationResult {
    /// Result for a business code with no entry in the coupon source.
    pub fn unknown_business() -> Self {
        Self {
            valid: false,
            used: None,
            message: "Business code is not valid".to_string(),
        }
    }

    /// Result for a known business but an unknown coupon code.
    pub fn unknown_coupon() -> Self {
        Self {
            valid: false,
            used: Some(false),
            message: "The coupon is not valid".to_string(),
        }
    }
}

/// Convert a stored coupon record into the client-facing result.
///
/// The message distinguishes "valid and unused" from "already used"; the
/// flags mirror the record verbatim.
impl From<CouponStatus> for ValidationResult {
    fn from(status: CouponStatus) -> Self {
        let message = if status.used {
            "This coupon has already been used"
        } else {
            "Coupon is valid. It has not been used yet."
        };

        Self {
            valid: status.valid,
            used: Some(status.used),
            message: message.to_string(),
        }
    }
}

/// Body forwarded to the remote coupon backend.
///
/// # JSON Example
///
/// ```json
/// {
///   "cupon": "pancito10",
///   "codigo_comercio": "LACELESTE"
/// }
/// ```
///
/// Field names are fixed by the backend's contract.
#[derive(Debug, Serialize)]
pub struct BackendValidationRequest {
    /// Coupon code, lower-normalized
    pub cupon: String,

    /// Business code, upper-normalized
    pub codigo_comercio: String,
}
