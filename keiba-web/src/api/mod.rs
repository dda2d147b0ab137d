//! Race API abstraction.
//!
//! The races listing and the prediction model both live in an external
//! service. Views talk to it through the `RaceApi` trait so handlers can be
//! exercised against any implementation.

mod client;

pub use client::HttpRaceApi;

use async_trait::async_trait;
use keiba_common::{HorseEntry, Prediction, Race};

use crate::error::Result;

#[async_trait]
pub trait RaceApi: Send + Sync {
    /// Fetch every race, uncached, in the order the service lists them.
    async fn list_races(&self) -> Result<Vec<Race>>;

    /// Submit the full field and return the model's probabilities as received.
    async fn predict(&self, horses: &[HorseEntry]) -> Result<Vec<Prediction>>;
}
