mod goals;
mod nutrition;
mod totals;

pub use goals::{ActivityLevel, BodyMetrics, Gender, Goals};
pub use nutrition::{Nutrient, NutritionFact};
pub use totals::{DailyTotals, IntakeEntry};
