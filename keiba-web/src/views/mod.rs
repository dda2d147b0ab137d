//! Server-rendered HTML for the race listing and prediction views.

pub mod layout;
pub mod predict;
pub mod races;
