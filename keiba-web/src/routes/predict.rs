//! Prediction view.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};

use crate::error::Result;
use crate::form::{Action, PredictForm, MAX_ROWS};
use crate::state::AppState;
use crate::views::predict::{self, Outcome};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/predict", get(show_form).post(submit))
}

/// GET /predict - a fresh form with a single default row.
async fn show_form() -> Html<String> {
    Html(predict::render(&PredictForm::default(), Outcome::Empty))
}

/// POST /predict - apply the pressed button to the posted rows and re-render.
async fn submit(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let (mut form, action) = PredictForm::from_pairs(pairs)?;
    tracing::debug!("Prediction form action {:?} with {} rows", action, form.rows.len());

    let (status, outcome) = match action {
        Action::Add => {
            if form.add_row() {
                (StatusCode::OK, Outcome::Empty)
            } else {
                (
                    StatusCode::OK,
                    Outcome::Notice(format!("A race has at most {} horses.", MAX_ROWS)),
                )
            }
        }
        Action::Remove(index) => {
            form.remove_row(index);
            (StatusCode::OK, Outcome::Empty)
        }
        Action::Import => {
            let result = form.import_card();
            let message = match (result.imported, result.left_out) {
                (0, _) => "No race-card rows could be read.".to_string(),
                (n, 0) => format!("Imported {} horses.", n),
                (n, left_out) => format!(
                    "Imported {} horses; {} more rows were left out because a race has at most {} horses.",
                    n, left_out, MAX_ROWS
                ),
            };
            (StatusCode::OK, Outcome::Notice(message))
        }
        Action::Predict => match form.entries() {
            Err(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Outcome::Invalid(errors)),
            Ok(entries) => match state.api.predict(&entries).await {
                Ok(predictions) => (StatusCode::OK, Outcome::Predictions(predictions)),
                Err(e) => {
                    tracing::error!("Prediction request failed: {}", e);
                    (e.status(), Outcome::BackendError(e.to_string()))
                }
            },
        },
    };

    Ok((status, Html(predict::render(&form, outcome))).into_response())
}
