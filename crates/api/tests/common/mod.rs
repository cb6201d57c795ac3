#![allow(dead_code)]

use std::sync::Arc;

use assetline_api::config::ServerConfig;
use assetline_api::router::build_app_router;
use assetline_api::state::AppState;
use assetline_core::memory::{InMemoryResolver, InMemoryStore};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Companies 1 (Acme) and 2 (Globex). Locations 10 (HQ) and 11 (Depot)
/// belong to Acme, 20 (Plant) to Globex.
pub fn seeded_resolver() -> InMemoryResolver {
    let resolver = InMemoryResolver::new();
    resolver.add_company(1, "Acme");
    resolver.add_company(2, "Globex");
    resolver.add_location(10, 1, "HQ");
    resolver.add_location(11, 1, "Depot");
    resolver.add_location(20, 2, "Plant");
    resolver
}

/// Build the full application router over in-memory storage. The store is
/// returned as well so tests can inspect committed state.
pub fn build_test_app() -> (Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let config = test_config();
    let state = AppState {
        store: Arc::new(store.clone()),
        resolver: Arc::new(seeded_resolver()),
    };
    (build_app_router(state, &config), store)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
