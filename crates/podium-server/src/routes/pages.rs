//! HTML page routes.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Router, routing::get};
use podium_site::application::render::{self, SPEAKING_PATH};
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Whether any entity tag in the request's `If-None-Match` headers matches
/// `etag`. Weak tags compare equal to their strong form.
fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|candidate| {
            candidate == "*" || candidate == etag || candidate.strip_prefix("W/") == Some(etag)
        })
}

/// GET /speaking
#[instrument(skip(state, headers))]
async fn speaking(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let page =
        render::render_speaking_page(state.catalog_source.as_ref(), state.clock.as_ref()).await?;

    if etag_matches(&headers, &page.etag) {
        debug!(etag = %page.etag, "speaking page not modified");
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, page.etag)]).into_response());
    }

    Ok(([(header::ETAG, page.etag)], Html(page.html)).into_response())
}

/// GET /
async fn index() -> Redirect {
    Redirect::permanent(SPEAKING_PATH)
}

/// Returns the router for HTML pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route(SPEAKING_PATH, get(speaking))
}
