//! Embedded client form.
//!
//! The merchant-facing page is a single self-contained HTML document compiled
//! into the binary, so the server deploys as one artifact with no asset
//! directory to ship alongside it.

use axum::response::Html;

/// Serve the coupon validator form at `/`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
