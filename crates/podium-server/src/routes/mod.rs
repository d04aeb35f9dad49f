//! Route modules and the application router.

pub mod health;
pub mod pages;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router over the given state.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(pages::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
