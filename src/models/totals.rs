use serde::{Deserialize, Serialize};

use crate::models::{Nutrient, NutritionFact};

/// Running totals for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,
}

impl DailyTotals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Sugar => self.sugar,
        }
    }

    /// Add a (scaled) portion to the totals.
    pub fn add(&mut self, portion: &NutritionFact) {
        self.calories += portion.calories;
        self.protein += portion.protein_g;
        self.carbs += portion.carbs_g;
        self.fat += portion.fat_g;
        self.sugar += portion.sugar_g;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One logged portion, kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntry {
    pub food: String,
    pub grams: f64,
    pub portion: NutritionFact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_reset() {
        let mut totals = DailyTotals::default();
        assert!(totals.is_empty());

        totals.add(&NutritionFact::new(100.0, 10.0, 20.0, 5.0, 2.0));
        totals.add(&NutritionFact::new(50.0, 1.0, 2.0, 0.5, 0.0));
        assert_float_absolute_eq!(totals.calories, 150.0, 1e-9);
        assert_float_absolute_eq!(totals.protein, 11.0, 1e-9);
        assert_float_absolute_eq!(totals.fat, 5.5, 1e-9);
        assert!(!totals.is_empty());

        totals.reset();
        assert_eq!(totals, DailyTotals::default());
    }
}
