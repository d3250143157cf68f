//! Client for the remote coupon validation backend.
//!
//! When `COUPON_BACKEND_URL` is configured, the server does not answer
//! validations itself: it forwards each request as a single POST and
//! normalizes whatever comes back into the client-facing result shape.
//!
//! There is deliberately no retry, no timeout, and no caching here. Each
//! incoming request maps to exactly one upstream call; a failed call is
//! terminal for that request and the user resubmits.

use anyhow::bail;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::coupon::{BackendValidationRequest, ValidationResult};

/// Handle to the remote validation service.
///
/// Holds one shared `reqwest::Client`; cloning the handle clones the
/// underlying connection pool reference, not the pool itself.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    url: String,
}

/// Error body shape the backend uses for non-success statuses.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: String,
}

impl BackendClient {
    /// Create a client for the given backend URL.
    ///
    /// # Errors
    ///
    /// Fails at startup if the URL is malformed or uses a scheme the
    /// validation rules reject (see [`validate_backend_url`]).
    pub fn new(url: &str) -> anyhow::Result<Self> {
        validate_backend_url(url)?;

        Ok(Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        })
    }

    /// Forward a validation request to the backend.
    ///
    /// # Process
    ///
    /// 1. Build the backend's `{cupon, codigo_comercio}` body from the
    ///    already-normalized codes
    /// 2. POST it to the configured URL
    /// 3. On non-success, propagate the upstream status and message
    /// 4. On success, pass `valid`/`used`/`message` through verbatim
    ///
    /// # Errors
    ///
    /// - `Upstream`: the backend answered with a non-success status
    /// - `Backend`: the request failed or the body could not be decoded
    ///   (surfaced to the client as a generic 500)
    pub async fn validate(
        &self,
        business_code: &str,
        coupon_code: &str,
    ) -> Result<ValidationResult, AppError> {
        let request = BackendValidationRequest {
            cupon: coupon_code.to_string(),
            codigo_comercio: business_code.to_string(),
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Propagate the upstream's own message when it sent one
            let message = response
                .json::<BackendErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| "Coupon validation failed".to_string());

            return Err(AppError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<ValidationResult>().await?)
    }
}

/// Validate the backend URL format.
///
/// # Rules
///
/// - Must be a valid URL
/// - Must be HTTPS (HTTP localhost allowed for development)
/// - Maximum 2048 characters
fn validate_backend_url(url: &str) -> anyhow::Result<()> {
    if url.len() > 2048 {
        bail!("backend URL exceeds 2048 characters");
    }

    let parsed = url::Url::parse(url).map_err(|_| anyhow::anyhow!("invalid backend URL format"))?;

    match parsed.scheme() {
        "https" => Ok(()),
        "http" => {
            // Allow HTTP for localhost/127.0.0.1 (testing)
            if parsed.host_str() == Some("localhost")
                || parsed.host_str() == Some("127.0.0.1")
                || parsed.host_str() == Some("0.0.0.0")
            {
                Ok(())
            } else {
                bail!("HTTP is only allowed for localhost. Use HTTPS for production.")
            }
        }
        _ => bail!("backend URL must use HTTP or HTTPS"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_urls_are_accepted() {
        assert!(validate_backend_url("https://coupons.example.com/validate").is_ok());
    }

    #[test]
    fn http_is_localhost_only() {
        assert!(validate_backend_url("http://localhost:4000/validate").is_ok());
        assert!(validate_backend_url("http://127.0.0.1:4000/validate").is_ok());
        assert!(validate_backend_url("http://coupons.example.com/validate").is_err());
    }

    #[test]
    fn garbage_urls_are_rejected() {
        assert!(validate_backend_url("not a url").is_err());
        assert!(validate_backend_url("ftp://coupons.example.com").is_err());
    }
}
