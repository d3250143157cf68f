//! Validation service - core coupon lookup logic.
//!
//! This service owns the decision tree for a validation request:
//! - unknown business → invalid, no `used` flag
//! - unknown coupon for a known business → invalid and unused
//! - known coupon → mirror the stored record
//!
//! For the remote-backed store the decision is made upstream and only passed
//! through; normalization still happens here so both variants see canonical
//! codes.

use crate::error::AppError;
use crate::models::coupon::ValidationResult;
use crate::store::{CouponStore, CouponTable};

/// Validate a coupon against the configured source.
///
/// # Normalization
///
/// Business codes are matched case-insensitively by upper-casing, coupon
/// codes by lower-casing. The same canonical forms are forwarded to the
/// remote backend.
///
/// # Errors
///
/// Only the remote store can fail; the in-memory table always produces a
/// result. Negative outcomes (unknown codes, already-used coupons) are
/// results, not errors.
pub async fn validate(
    store: &CouponStore,
    business_code: &str,
    coupon_code: &str,
) -> Result<ValidationResult, AppError> {
    let business_code = business_code.to_uppercase();
    let coupon_code = coupon_code.to_lowercase();

    match store {
        CouponStore::Mock(table) => Ok(lookup(table, &business_code, &coupon_code)),
        CouponStore::Remote(backend) => backend.validate(&business_code, &coupon_code).await,
    }
}

/// Look up an already-normalized (business, coupon) pair in the table.
fn lookup(table: &CouponTable, business_code: &str, coupon_code: &str) -> ValidationResult {
    let Some(coupons) = table.get(business_code) else {
        return ValidationResult::unknown_business();
    };

    let Some(status) = coupons.get(coupon_code) else {
        return ValidationResult::unknown_coupon();
    };

    ValidationResult::from(*status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use std::sync::Arc;

    fn mock_store() -> CouponStore {
        CouponStore::Mock(Arc::new(store::demo_table()))
    }

    #[tokio::test]
    async fn known_unused_coupon_is_valid() {
        let result = validate(&mock_store(), "LACELESTE", "pancito10")
            .await
            .unwrap();
        assert!(result.valid);
        assert_eq!(result.used, Some(false));
    }

    #[tokio::test]
    async fn known_used_coupon_reports_used() {
        let result = validate(&mock_store(), "LACELESTE", "descuento20")
            .await
            .unwrap();
        assert!(result.valid);
        assert_eq!(result.used, Some(true));
    }

    #[tokio::test]
    async fn unknown_coupon_is_invalid_and_unused() {
        let result = validate(&mock_store(), "LACELESTE", "nosuchcoupon")
            .await
            .unwrap();
        assert!(!result.valid);
        assert_eq!(result.used, Some(false));
    }

    #[tokio::test]
    async fn unknown_business_is_invalid_without_used_flag() {
        let result = validate(&mock_store(), "UNKNOWN", "x").await.unwrap();
        assert!(!result.valid);
        assert_eq!(result.used, None);
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let result = validate(&mock_store(), "laceleste", "PANCITO10")
            .await
            .unwrap();
        assert!(result.valid);
        assert_eq!(result.used, Some(false));
    }
}
