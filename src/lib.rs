#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod tracker;

pub use catalog::Catalog;
pub use error::{Result, TrackerError};
pub use models::{BodyMetrics, DailyTotals, Goals, NutritionFact};
pub use state::Session;
