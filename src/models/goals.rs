use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::Nutrient;
use crate::tracker::constants::*;

/// Daily targets. Overwritten wholesale when goals are recalculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub calorie_goal: u32,
    pub protein_goal: u32,
    pub carb_goal: u32,
    pub fat_goal: u32,
    pub sugar_goal: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calorie_goal: DEFAULT_CALORIE_GOAL,
            protein_goal: DEFAULT_PROTEIN_GOAL,
            carb_goal: DEFAULT_CARB_GOAL,
            fat_goal: DEFAULT_FAT_GOAL,
            sugar_goal: DEFAULT_SUGAR_GOAL,
        }
    }
}

impl Goals {
    /// Goal for a single nutrient.
    pub fn get(&self, nutrient: Nutrient) -> u32 {
        match nutrient {
            Nutrient::Calories => self.calorie_goal,
            Nutrient::Protein => self.protein_goal,
            Nutrient::Carbs => self.carb_goal,
            Nutrient::Fat => self.fat_goal,
            Nutrient::Sugar => self.sugar_goal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Sex-specific constant added to the Mifflin-St Jeor BMR.
    pub fn bmr_offset(self) -> f64 {
        match self {
            Gender::Male => BMR_OFFSET_MALE,
            Gender::Female => BMR_OFFSET_FEMALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum ActivityLevel {
    #[default]
    #[value(name = "sedentary")]
    Sedentary,
    #[value(name = "light")]
    LightlyActive,
    #[value(name = "moderate")]
    ModeratelyActive,
    #[value(name = "very")]
    VeryActive,
    #[value(name = "super")]
    SuperActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::SuperActive,
    ];

    /// The full selection label shown in the goals form.
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => {
                "Moderately active (moderate exercise 3-5 days/week)"
            }
            ActivityLevel::VeryActive => "Very active (hard exercise 6-7 days/week)",
            ActivityLevel::SuperActive => "Super active (very hard exercise, physical job)",
        }
    }

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }

    /// Parse one of the exact selection labels.
    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == label)
            .ok_or_else(|| TrackerError::InvalidInput(format!("Unknown activity level: {}", label)))
    }
}

/// Body metrics collected by the goals form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl Default for BodyMetrics {
    fn default() -> Self {
        Self {
            weight_kg: DEFAULT_WEIGHT_KG,
            height_cm: DEFAULT_HEIGHT_CM,
            age: DEFAULT_AGE,
            gender: Gender::default(),
            activity_level: ActivityLevel::default(),
        }
    }
}

impl BodyMetrics {
    /// Check every field against the form's accepted ranges.
    pub fn validate(&self) -> Result<()> {
        if !(WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&self.weight_kg) {
            return Err(TrackerError::InvalidInput(format!(
                "Weight must be between {} and {} kg",
                WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1
            )));
        }
        if !(HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&self.height_cm) {
            return Err(TrackerError::InvalidInput(format!(
                "Height must be between {} and {} cm",
                HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1
            )));
        }
        if !(AGE_RANGE.0..=AGE_RANGE.1).contains(&self.age) {
            return Err(TrackerError::InvalidInput(format!(
                "Age must be between {} and {}",
                AGE_RANGE.0, AGE_RANGE.1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_goals() {
        let goals = Goals::default();
        assert_eq!(goals.calorie_goal, 2000);
        assert_eq!(goals.protein_goal, 150);
        assert_eq!(goals.carb_goal, 250);
        assert_eq!(goals.fat_goal, 65);
        assert_eq!(goals.sugar_goal, 50);
    }

    #[test]
    fn test_activity_label_roundtrip() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_label(level.label()).unwrap(), level);
        }
        assert!(ActivityLevel::from_label("Couch potato").is_err());
    }

    #[test]
    fn test_validate_ranges() {
        assert!(BodyMetrics::default().validate().is_ok());

        let light = BodyMetrics {
            weight_kg: 29.5,
            ..Default::default()
        };
        assert!(light.validate().is_err());

        let tall = BodyMetrics {
            height_cm: 221.0,
            ..Default::default()
        };
        assert!(tall.validate().is_err());

        let young = BodyMetrics {
            age: 14,
            ..Default::default()
        };
        assert!(young.validate().is_err());

        let edges = BodyMetrics {
            weight_kg: 200.0,
            height_cm: 120.0,
            age: 100,
            ..Default::default()
        };
        assert!(edges.validate().is_ok());
    }
}
