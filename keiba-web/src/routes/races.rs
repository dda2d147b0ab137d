//! Race listing view.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::views::races;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/races", get(list_races))
}

/// GET /races - fetch the races on every load and render them as a table.
async fn list_races(State(state): State<Arc<AppState>>) -> Response {
    // The browser must not serve a stale listing from its cache.
    let no_store = [(CACHE_CONTROL, "no-store")];

    match state.api.list_races().await {
        Ok(list) => (no_store, Html(races::render(&list))).into_response(),
        Err(e) => {
            tracing::error!("Failed to load races: {}", e);
            (e.status(), no_store, Html(races::render_error(&e.to_string()))).into_response()
        }
    }
}
