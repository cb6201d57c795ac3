//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! store is involved.

use assetline_api::error::AppError;
use assetline_core::error::CoreError;
use assetline_core::lifecycle::{AssetStatus, LifecycleAction};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Asset", "AST-0042"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Asset with id AST-0042 not found");
}

#[tokio::test]
async fn invalid_state_transition_returns_409() {
    let err = AppError::Core(CoreError::InvalidStateTransition {
        asset_id: 7,
        status: AssetStatus::Disposed,
        action: LifecycleAction::Transfer,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "INVALID_STATE_TRANSITION");
    assert!(json["error"].as_str().unwrap().contains("disposed"));
}

#[tokio::test]
async fn invalid_argument_returns_400() {
    let err = AppError::Core(CoreError::InvalidArgument("unknown disposal method".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_ARGUMENT");
    assert_eq!(json["error"], "unknown disposal method");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate asset id".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "duplicate asset id");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn store_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Store("connection refused to 10.0.0.5".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
