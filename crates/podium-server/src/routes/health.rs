//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the catalog loads, `degraded` otherwise.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of talks in the current catalog, omitted when it fails to load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talks: Option<usize>,
}

/// GET /health
///
/// Loads the catalog so a broken catalog file shows up as `503`.
#[instrument(skip(state))]
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");

    match state.catalog_source.load().await {
        Ok(catalog) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                talks: Some(catalog.talk_count()),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "health check could not load catalog");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    talks: None,
                }),
            )
        }
    }
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
