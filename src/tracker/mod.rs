pub mod advice;
pub mod constants;
pub mod goals;
pub mod progress;

pub use advice::{closing_advice, generate_advice, nutrient_advice, Advice, AdviceKind, Tone};
pub use constants::*;
pub use goals::{bmr, calculate_goals, daily_calories};
pub use progress::{percent_of_goal, progress, GoalProgress};
