//! Shared application state.

use std::sync::Arc;

use crate::api::RaceApi;

/// Shared application state passed to all handlers.
pub struct AppState {
    pub api: Arc<dyn RaceApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn RaceApi>) -> Self {
        Self { api }
    }
}
