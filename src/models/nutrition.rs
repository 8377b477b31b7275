use serde::{Deserialize, Serialize};

/// The five tracked quantities, in catalog column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Sugar,
}

impl Nutrient {
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Sugar,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Sugar => "Sugar",
        }
    }

    /// Display unit; calories are unitless in the UI.
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "",
            _ => "g",
        }
    }
}

/// Nutrition values of a food per 100g.
///
/// Also used for the scaled amount of a single logged portion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFact {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub sugar_g: f64,
}

impl NutritionFact {
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64, sugar_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            sugar_g,
        }
    }

    /// Value for a single nutrient.
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fat => self.fat_g,
            Nutrient::Sugar => self.sugar_g,
        }
    }

    /// Linearly scale every field.
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein_g: self.protein_g * multiplier,
            carbs_g: self.carbs_g * multiplier,
            fat_g: self.fat_g * multiplier,
            sugar_g: self.sugar_g * multiplier,
        }
    }

    /// Amounts contained in `grams` of this food.
    #[inline]
    pub fn for_grams(&self, grams: f64) -> Self {
        self.scale(grams / 100.0)
    }

    /// Basic validation: all values non-negative.
    pub fn is_valid(&self) -> bool {
        Nutrient::ALL.iter().all(|&n| self.get(n) >= 0.0)
    }
}
