//! Request and response bodies for `POST /api/predict`.

use serde::{Deserialize, Serialize};

use crate::horse::HorseEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub horses: Vec<HorseEntry>,
}

/// Probability the model assigns to one horse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub umaban: u32,
    pub probability: f64,
}

/// The backend answers either with predictions or with an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Predictions { predictions: Vec<Prediction> },
    Error { error: String },
}

impl PredictResponse {
    pub fn into_result(self) -> Result<Vec<Prediction>, String> {
        match self {
            PredictResponse::Predictions { predictions } => Ok(predictions),
            PredictResponse::Error { error } => Err(error),
        }
    }
}

/// Order predictions by probability, highest first. Ties keep backend order.
pub fn sort_descending(predictions: &mut [Prediction]) {
    predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
}
