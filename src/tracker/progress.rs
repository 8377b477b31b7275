use serde::Serialize;

use crate::models::{DailyTotals, Goals, Nutrient};

/// Progress toward one daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub nutrient: Nutrient,
    pub total: f64,
    pub goal: u32,
    pub percent: f64,
    /// Bar fill, capped at 1.0.
    pub fraction: f64,
}

/// Percent of goal reached. A zero goal reports 0%.
pub fn percent_of_goal(total: f64, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    total / goal as f64 * 100.0
}

/// Progress for every nutrient in catalog column order.
pub fn progress(totals: &DailyTotals, goals: &Goals) -> Vec<GoalProgress> {
    Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let total = totals.get(nutrient);
            let goal = goals.get(nutrient);
            let percent = percent_of_goal(total, goal);
            GoalProgress {
                nutrient,
                total,
                goal,
                percent,
                fraction: (percent / 100.0).clamp(0.0, 1.0),
            }
        })
        .collect()
}
