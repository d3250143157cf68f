//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Input Errors**: missing or empty request fields
/// - **Upstream Errors**: the remote coupon backend rejected the request
/// - **Infrastructure Errors**: the upstream call failed or returned garbage
///
/// Note that a coupon being unknown or already used is NOT an error: those
/// are ordinary validation results and travel as 200 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Business code or coupon code is missing, empty, or whitespace-only.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Business code and coupon code are required")]
    MissingCodes,

    /// The remote coupon backend answered with a non-success status.
    ///
    /// The upstream status and message are propagated to the client as-is.
    #[error("Upstream rejected the request: {message}")]
    Upstream { status: u16, message: String },

    /// The request to the remote coupon backend failed outright, or its
    /// response body could not be decoded.
    ///
    /// This wraps any reqwest::Error using the `#[from]` attribute, which
    /// automatically implements `From<reqwest::Error> for AppError`.
    /// Returns HTTP 500 with a generic message (details are only logged).
    #[error("Coupon backend request failed: {0}")]
    Backend(#[from] reqwest::Error),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return the flat JSON body the client expects:
/// ```json
/// {
///   "message": "Human-readable error message"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `MissingCodes` → 400 Bad Request
/// - `Upstream` → whatever status the backend returned
/// - `Backend` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingCodes => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Upstream { status, ref message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message.clone(),
            ),
            AppError::Backend(ref err) => {
                // Log the real cause server-side, never leak it to the client
                tracing::error!("Coupon backend failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_codes_maps_to_400() {
        let response = AppError::MissingCodes.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_error_propagates_status() {
        let response = AppError::Upstream {
            status: 403,
            message: "nope".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn bogus_upstream_status_falls_back_to_500() {
        let response = AppError::Upstream {
            status: 42,
            message: "garbled".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
