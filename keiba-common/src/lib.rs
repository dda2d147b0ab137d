//! keiba-predict common types
//!
//! Wire types for the races and prediction endpoints, shared by the web
//! front and its tests.

pub mod card;
pub mod horse;
pub mod predict;
pub mod race;

pub use card::{parse_card, parse_card_row, parse_horse_weight, parse_sex_age};
pub use horse::{validate_field, EntryError, HorseEntry, Sex, MAX_UMABAN, MAX_WAKU};
pub use predict::{sort_descending, PredictRequest, PredictResponse, Prediction};
pub use race::Race;
