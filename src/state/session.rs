use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{food_key, Catalog};
use crate::error::{Result, TrackerError};
use crate::models::{BodyMetrics, DailyTotals, Goals, IntakeEntry, NutritionFact};
use crate::tracker::{calculate_goals, generate_advice, progress, Advice, GoalProgress};

/// State for one tracking session.
///
/// Starts with default goals (`Goals::default()`) and zero totals. Nothing
/// outlives the session.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    goals: Goals,
    totals: DailyTotals,
    entries: Vec<IntakeEntry>,
}

/// Point-in-time view of a session for rendering or export.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub goals: Goals,
    pub totals: DailyTotals,
    pub entries: Vec<IntakeEntry>,
    pub progress: Vec<GoalProgress>,
    pub advice: Vec<Advice>,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_goals(catalog, Goals::default())
    }

    pub fn with_goals(catalog: &'c Catalog, goals: Goals) -> Self {
        Self {
            catalog,
            goals,
            totals: DailyTotals::default(),
            entries: Vec::new(),
        }
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    pub fn totals(&self) -> &DailyTotals {
        &self.totals
    }

    /// Logged portions since the last reset, oldest first.
    pub fn entries(&self) -> &[IntakeEntry] {
        &self.entries
    }

    /// Log `grams` of a catalog food and return the amounts added.
    ///
    /// Rejects non-positive (or non-finite) grams and unknown foods; on
    /// error the totals are unchanged.
    pub fn add_food(&mut self, name: &str, grams: f64) -> Result<NutritionFact> {
        if !grams.is_finite() || grams <= 0.0 {
            debug!(food = name, grams, "rejected non-positive amount");
            return Err(TrackerError::InvalidInput(
                "Please enter a valid amount!".to_string(),
            ));
        }

        let portion = self.catalog.require(name)?.for_grams(grams);
        self.totals.add(&portion);
        self.entries.push(IntakeEntry {
            food: food_key(name),
            grams,
            portion,
        });

        debug!(
            food = name,
            grams,
            calories = self.totals.calories,
            "added food"
        );
        Ok(portion)
    }

    /// Zero the totals and clear the log. Goals are kept.
    pub fn reset(&mut self) {
        self.totals.reset();
        self.entries.clear();
        debug!("day reset");
    }

    /// Replace the goals with ones derived from body metrics.
    pub fn recalculate_goals(&mut self, metrics: &BodyMetrics) -> Goals {
        self.goals = calculate_goals(metrics);
        info!(
            calorie_goal = self.goals.calorie_goal,
            protein_goal = self.goals.protein_goal,
            "goals recalculated"
        );
        self.goals
    }

    /// Progress toward every goal.
    pub fn progress(&self) -> Vec<GoalProgress> {
        progress(&self.totals, &self.goals)
    }

    /// Advice for the day; empty until some calories are logged.
    pub fn advice(&self) -> Vec<Advice> {
        if self.totals.calories <= 0.0 {
            return Vec::new();
        }
        generate_advice(&self.totals, &self.goals)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            goals: self.goals,
            totals: self.totals,
            entries: self.entries.clone(),
            progress: self.progress(),
            advice: self.advice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog);
        assert_eq!(*session.goals(), Goals::default());
        assert!(session.totals().is_empty());
        assert!(session.entries().is_empty());
        assert!(session.advice().is_empty());
    }

    #[test]
    fn test_add_banana() {
        let catalog = Catalog::builtin();
        let mut session = Session::new(&catalog);

        let added = session.add_food("banana", 200.0).unwrap();
        assert_float_absolute_eq!(added.calories, 178.0, 1e-9);

        let totals = session.totals();
        assert_float_absolute_eq!(totals.calories, 178.0, 1e-9);
        assert_float_absolute_eq!(totals.protein, 2.2, 1e-9);
        assert_float_absolute_eq!(totals.carbs, 46.0, 1e-9);
        assert_float_absolute_eq!(totals.fat, 0.6, 1e-9);
        assert_float_absolute_eq!(totals.sugar, 24.0, 1e-9);
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].food, "banana");
    }

    #[test]
    fn test_rejects_non_positive_grams() {
        let catalog = Catalog::builtin();
        let mut session = Session::new(&catalog);
        session.add_food("rice", 150.0).unwrap();
        let before = *session.totals();

        for grams in [0.0, -50.0, f64::NAN] {
            let result = session.add_food("rice", grams);
            assert!(matches!(result, Err(TrackerError::InvalidInput(_))));
        }
        assert_eq!(*session.totals(), before);
        assert_eq!(session.entries().len(), 1);
    }

    #[test]
    fn test_rejects_unknown_food() {
        let catalog = Catalog::builtin();
        let mut session = Session::new(&catalog);
        let result = session.add_food("pizza", 100.0);
        assert!(matches!(result, Err(TrackerError::FoodNotFound(_))));
        assert!(session.totals().is_empty());
    }

    #[test]
    fn test_reset_keeps_goals() {
        let catalog = Catalog::builtin();
        let mut session = Session::new(&catalog);
        let goals = session.recalculate_goals(&BodyMetrics::default());

        session.add_food("nasi lemak", 300.0).unwrap();
        session.reset();

        assert_eq!(*session.totals(), DailyTotals::default());
        assert!(session.entries().is_empty());
        assert_eq!(*session.goals(), goals);
    }

    #[test]
    fn test_snapshot_serializes() {
        let catalog = Catalog::builtin();
        let mut session = Session::new(&catalog);
        session.add_food("egg", 100.0).unwrap();

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["goals"]["calorie_goal"], 2000);
        assert_eq!(json["totals"]["calories"], 155.0);
        assert_eq!(json["entries"][0]["food"], "egg");
        assert!(json["advice"].as_array().is_some_and(|a| !a.is_empty()));
    }
}
