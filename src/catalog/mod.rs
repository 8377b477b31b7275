mod data;

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;
use strsim::jaro_winkler;
use tracing::warn;

use crate::error::{Result, TrackerError};
use crate::models::NutritionFact;

/// Minimum Jaro-Winkler similarity for a fuzzy suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Fixed per-100g nutrition reference table.
///
/// Rows keep their insertion order for display; lookups go through a
/// case-insensitive index.
#[derive(Debug, Clone)]
pub struct Catalog {
    rows: Vec<(String, NutritionFact)>,
    index: HashMap<String, usize>,
}

/// One CSV row of the exported table.
#[derive(Debug, Serialize)]
struct CatalogRecord<'a> {
    #[serde(rename = "Food")]
    name: &'a str,

    #[serde(rename = "Calories")]
    calories: f64,

    #[serde(rename = "Protein (g)")]
    protein_g: f64,

    #[serde(rename = "Carbs (g)")]
    carbs_g: f64,

    #[serde(rename = "Fat (g)")]
    fat_g: f64,

    #[serde(rename = "Sugar (g)")]
    sugar_g: f64,
}

/// Canonical key for lookups (trimmed, lowercase name).
pub fn food_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Catalog {
    /// Build a catalog from rows. Later duplicates replace earlier ones in place.
    ///
    /// Rows with a negative nutrient value are skipped.
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, NutritionFact)>,
        S: AsRef<str>,
    {
        let mut catalog = Self {
            rows: Vec::new(),
            index: HashMap::new(),
        };

        for (name, fact) in rows {
            let key = food_key(name.as_ref());
            if !fact.is_valid() {
                warn!(food = %key, "skipping food with negative nutrient values");
                continue;
            }
            match catalog.index.get(&key) {
                Some(&pos) => catalog.rows[pos].1 = fact,
                None => {
                    catalog.index.insert(key.clone(), catalog.rows.len());
                    catalog.rows.push((key, fact));
                }
            }
        }

        catalog
    }

    /// The built-in food table.
    pub fn builtin() -> Self {
        Self::new(data::FOODS.iter().copied())
    }

    /// Look up a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&NutritionFact> {
        self.index
            .get(&food_key(name))
            .map(|&pos| &self.rows[pos].1)
    }

    /// Look up a food, failing with `FoodNotFound`.
    pub fn require(&self, name: &str) -> Result<&NutritionFact> {
        self.get(name)
            .ok_or_else(|| TrackerError::FoodNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&food_key(name))
    }

    /// All rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NutritionFact)> {
        self.rows.iter().map(|(name, fact)| (name.as_str(), fact))
    }

    /// All food names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Fuzzy suggestions for a query, best first.
    ///
    /// An exact (case-insensitive) match is always returned alone.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = food_key(query);
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(&pos) = self.index.get(&query) {
            return vec![self.rows[pos].0.as_str()];
        }

        let mut candidates: Vec<(&str, f64)> = self
            .rows
            .iter()
            .map(|(name, _)| (name.as_str(), jaro_winkler(name, &query)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(limit)
            .map(|(name, _)| name)
            .collect()
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (name, fact) in self.iter() {
            csv_writer.serialize(CatalogRecord {
                name,
                calories: fact.calories,
                protein_g: fact.protein_g,
                carbs_g: fact.carbs_g,
                fat_g: fact.fat_g,
                sugar_g: fact.sugar_g,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            ("Apple", NutritionFact::new(52.0, 0.3, 14.0, 0.2, 10.0)),
            ("Banana", NutritionFact::new(89.0, 1.1, 23.0, 0.3, 12.0)),
            ("Bread", NutritionFact::new(265.0, 9.0, 49.0, 3.2, 5.0)),
        ])
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = sample_catalog();
        assert!(catalog.get("apple").is_some());
        assert!(catalog.get("APPLE").is_some());
        assert!(catalog.get("  Apple ").is_some());
        assert!(catalog.get("durian").is_none());
        assert!(matches!(
            catalog.require("durian"),
            Err(TrackerError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_duplicates_replace_in_place() {
        let catalog = Catalog::new(vec![
            ("egg", NutritionFact::new(155.0, 13.0, 1.1, 11.0, 1.1)),
            ("milk", NutritionFact::new(42.0, 3.4, 5.0, 1.0, 5.0)),
            ("EGG", NutritionFact::new(1.0, 1.0, 1.0, 1.0, 1.0)),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["egg", "milk"]);
        assert_eq!(catalog.get("egg").map(|f| f.calories), Some(1.0));
    }

    #[test]
    fn test_skips_negative_rows() {
        let catalog = Catalog::new(vec![
            ("egg", NutritionFact::new(155.0, 13.0, 1.1, 11.0, 1.1)),
            ("mystery", NutritionFact::new(100.0, -1.0, 10.0, 1.0, 1.0)),
        ]);
        assert_eq!(catalog.names(), vec!["egg"]);
        assert!(!catalog.contains("mystery"));
    }

    #[test]
    fn test_builtin_table() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 144);
        assert_eq!(catalog.names().first(), Some(&"chicken breast"));
        assert_eq!(catalog.names().last(), Some(&"spring roll"));
        assert!(catalog.iter().all(|(_, fact)| fact.is_valid()));

        let banana = catalog.get("banana").unwrap();
        assert_eq!(*banana, NutritionFact::new(89.0, 1.1, 23.0, 0.3, 12.0));
    }

    #[test]
    fn test_suggest() {
        let catalog = sample_catalog();
        assert_eq!(catalog.suggest("BANANA", 5), vec!["banana"]);
        assert_eq!(catalog.suggest("banan", 5).first(), Some(&"banana"));
        assert!(catalog.suggest("zzzz", 5).is_empty());
        assert!(catalog.suggest("   ", 5).is_empty());
    }

    #[test]
    fn test_write_csv() {
        let catalog = sample_catalog();
        let mut buf = Vec::new();
        catalog.write_csv(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Food,Calories,Protein (g),Carbs (g),Fat (g),Sugar (g)")
        );
        assert_eq!(lines.next(), Some("apple,52.0,0.3,14.0,0.2,10.0"));
        assert_eq!(text.lines().count(), 4);
    }
}
