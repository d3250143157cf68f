//! Integration tests for the validation endpoint.
//!
//! These tests drive the real router backed by the demo coupon table and
//! verify the wire contract:
//! - missing or empty fields return 400 with the endpoint's own message
//! - known/unknown codes produce the documented result shapes
//! - lookups are case-insensitive
//! - the form and health routes respond

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use coupon_validation_server::{
    app,
    store::{self, CouponStore},
};

fn demo_app() -> Router {
    app(CouponStore::Mock(Arc::new(store::demo_table())))
}

/// POST a raw JSON body to the validation endpoint and decode the response.
async fn post_validate(body: &str) -> (StatusCode, Value) {
    let response = demo_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/validate-coupon")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn missing_fields_return_400() {
    let cases = [
        "{}",
        r#"{"businessCode":"LACELESTE"}"#,
        r#"{"couponCode":"pancito10"}"#,
        r#"{"businessCode":"","couponCode":"pancito10"}"#,
        r#"{"businessCode":"LACELESTE","couponCode":"   "}"#,
    ];

    for body in cases {
        let (status, json) = post_validate(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(
            json["message"].as_str().unwrap().contains("required"),
            "body: {body}"
        );
    }
}

#[tokio::test]
async fn known_unused_coupon_is_valid() {
    let (status, json) =
        post_validate(r#"{"businessCode":"LACELESTE","couponCode":"pancito10"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], true);
    assert_eq!(json["used"], false);
}

#[tokio::test]
async fn known_used_coupon_reports_used() {
    let (status, json) =
        post_validate(r#"{"businessCode":"LACELESTE","couponCode":"descuento20"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], true);
    assert_eq!(json["used"], true);
}

#[tokio::test]
async fn unknown_coupon_is_invalid_and_unused() {
    let (status, json) =
        post_validate(r#"{"businessCode":"LACELESTE","couponCode":"nosuchcoupon"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
    assert_eq!(json["used"], false);
}

#[tokio::test]
async fn unknown_business_is_invalid_without_used_flag() {
    let (status, json) = post_validate(r#"{"businessCode":"UNKNOWN","couponCode":"x"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
    // `used` carries no meaning here and must be omitted entirely
    assert!(json.get("used").is_none());
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let (status, json) =
        post_validate(r#"{"businessCode":"laceleste","couponCode":"PANCITO10"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], true);
    assert_eq!(json["used"], false);
}

#[tokio::test]
async fn surrounding_whitespace_is_trimmed() {
    let (status, json) =
        post_validate(r#"{"businessCode":" LACELESTE ","couponCode":" pancito10 "}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], true);
}

#[tokio::test]
async fn health_reports_mock_source() {
    let response = demo_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["coupon_source"], "mock");
}

#[tokio::test]
async fn index_serves_the_form() {
    let response = demo_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Coupon Validator"));
    // The advertised demo codes must match the seeded table
    assert!(page.contains("LACELESTE"));
    assert!(page.contains("pancito10"));
}
