//! keiba-predict web front.
//!
//! Serves the race listing and the prediction form, backed by the race API.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod routes;
pub mod state;
pub mod views;

pub use api::{HttpRaceApi, RaceApi};
pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the full application with logging layers.
pub fn app(state: Arc<AppState>) -> Router {
    routes::router()
        .layer(middleware::from_fn(logging::request_logger))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
