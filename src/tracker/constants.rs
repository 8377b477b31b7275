// ─────────────────────────────────────────────────────────────────────────────
// Default goals (used until the user recalculates)
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CALORIE_GOAL: u32 = 2000;
pub const DEFAULT_PROTEIN_GOAL: u32 = 150;
pub const DEFAULT_CARB_GOAL: u32 = 250;
pub const DEFAULT_FAT_GOAL: u32 = 65;

/// WHO recommends at most 50g of free sugar per day.
pub const DEFAULT_SUGAR_GOAL: u32 = 50;

// ─────────────────────────────────────────────────────────────────────────────
// Goals form defaults and accepted ranges (inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_AGE: u32 = 25;

pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 220.0);
pub const AGE_RANGE: (u32, u32) = (15, 100);

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor and macro split
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_FACTOR: f64 = 10.0;
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;
pub const BMR_AGE_FACTOR: f64 = 5.0;
pub const BMR_OFFSET_MALE: f64 = 5.0;
pub const BMR_OFFSET_FEMALE: f64 = -161.0;

/// Protein grams per kg of body weight.
pub const PROTEIN_G_PER_KG: f64 = 1.6;

/// Share of daily calories taken from fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// Share of daily calories allowed from sugar, before the absolute cap.
pub const SUGAR_CALORIE_SHARE: f64 = 0.10;

/// Absolute sugar cap in grams.
pub const SUGAR_CAP_G: f64 = 50.0;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Advice thresholds (percent of goal)
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum positive advice items needed for the praise line.
pub const PRAISE_MIN_POSITIVE: usize = 2;

/// Sugar and fat must both exceed this for the remedial tip.
pub const REMEDIAL_TIP_PERCENT: f64 = 120.0;
