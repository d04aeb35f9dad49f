//! Shared test helpers for server integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use podium_core::clock::Clock;
use podium_core::source::CatalogSource;
use podium_test_support::FixedClock;
use tower::ServiceExt;

use podium_server::routes;
use podium_server::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router over the given catalog source with a fixed
/// clock. Uses the same router as `main.rs`.
pub fn build_test_app(catalog_source: Arc<dyn CatalogSource>) -> Router {
    routes::build_app(AppState::new(catalog_source, fixed_clock()))
}

/// Send a GET request with optional extra headers and return the status,
/// response headers and body.
pub async fn get(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, Vec<u8>) {
    let mut request = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    let request = request.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body_bytes.to_vec())
}

/// Send a GET request and return the response as text.
pub async fn get_html(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let (status, headers, body) = get(app, uri, &[]).await;
    (status, headers, String::from_utf8(body).unwrap())
}

/// Send a GET request and return the response as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get(app, uri, &[]).await;
    (status, serde_json::from_slice(&body).unwrap())
}
