use crate::models::{BodyMetrics, Goals};
use crate::tracker::constants::*;

/// Basal metabolic rate (Mifflin-St Jeor).
pub fn bmr(metrics: &BodyMetrics) -> f64 {
    BMR_WEIGHT_FACTOR * metrics.weight_kg + BMR_HEIGHT_FACTOR * metrics.height_cm
        - BMR_AGE_FACTOR * metrics.age as f64
        + metrics.gender.bmr_offset()
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn daily_calories(metrics: &BodyMetrics) -> f64 {
    bmr(metrics) * metrics.activity_level.multiplier()
}

/// Derive daily calorie and macro goals from body metrics.
///
/// Every output is truncated toward zero. Metrics are expected to be
/// validated already; this never fails.
pub fn calculate_goals(metrics: &BodyMetrics) -> Goals {
    let calories = daily_calories(metrics);

    let protein_g = metrics.weight_kg * PROTEIN_G_PER_KG;
    let fat_g = calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    let carb_g =
        (calories - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT) / KCAL_PER_G_CARB;
    let sugar_g = SUGAR_CAP_G.min(calories * SUGAR_CALORIE_SHARE / KCAL_PER_G_CARB);

    Goals {
        calorie_goal: truncate(calories),
        protein_goal: truncate(protein_g),
        carb_goal: truncate(carb_g),
        fat_goal: truncate(fat_g),
        sugar_goal: truncate(sugar_g),
    }
}

/// Truncate toward zero; negative values clamp to 0.
#[inline]
fn truncate(value: f64) -> u32 {
    value.trunc() as u32
}
