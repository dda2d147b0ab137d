//! HTTP routes.

pub mod health;
pub mod predict;
pub mod races;

use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router for both views.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/races") }))
        .route("/health", get(health::health))
        .merge(races::router())
        .merge(predict::router())
}
