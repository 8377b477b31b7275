use crate::catalog::Catalog;
use crate::models::{DailyTotals, Goals, IntakeEntry, Nutrient};
use crate::state::Session;
use crate::tracker::{Advice, GoalProgress};

/// Width of the progress bar in characters.
const BAR_WIDTH: usize = 20;

/// Render a capped fraction as a fixed-width bar.
pub fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Display today's totals.
pub fn display_totals(totals: &DailyTotals) {
    println!();
    println!("=== Today's Totals ===");
    for nutrient in Nutrient::ALL {
        println!(
            "  {:<9} {:.1}{}",
            nutrient.label(),
            totals.get(nutrient),
            nutrient.unit()
        );
    }
}

/// Display progress bars toward each goal.
pub fn display_progress(rows: &[GoalProgress]) {
    println!();
    println!("=== Goal Progress ===");
    for row in rows {
        let unit = row.nutrient.unit();
        println!(
            "  {:<9} {} {:.1}{}/{}{} ({:.1}%)",
            row.nutrient.label(),
            progress_bar(row.fraction),
            row.total,
            unit,
            row.goal,
            unit,
            row.percent
        );
    }
}

/// Display the advice list, if any.
pub fn display_advice(advice: &[Advice]) {
    if advice.is_empty() {
        return;
    }

    println!();
    println!("=== Daily Advice ===");
    for item in advice {
        println!("  {}", item);
    }
}

/// Display the current goals on one line.
pub fn display_goals(goals: &Goals) {
    println!(
        "Current Goals: Calories: {} | Protein: {}g | Carbs: {}g | Fat: {}g | Sugar: {}g",
        goals.calorie_goal, goals.protein_goal, goals.carb_goal, goals.fat_goal, goals.sugar_goal
    );
}

/// Display freshly calculated goals.
pub fn display_new_goals(goals: &Goals) {
    println!();
    println!("=== Your Personalized Goals ===");
    println!("  Calories: {} per day", goals.calorie_goal);
    println!("  Protein:  {}g per day", goals.protein_goal);
    println!("  Carbs:    {}g per day", goals.carb_goal);
    println!("  Fat:      {}g per day", goals.fat_goal);
    println!("  Sugar:    {}g per day", goals.sugar_goal);
    println!();
}

/// Display logged portions since the last reset.
pub fn display_entries(entries: &[IntakeEntry]) {
    if entries.is_empty() {
        return;
    }

    println!();
    println!("=== Eaten Today ({} items) ===", entries.len());
    for entry in entries {
        println!(
            "  {:>6.0}g {} - {:.0} cal",
            entry.grams, entry.food, entry.portion.calories
        );
    }
}

/// Format the catalog as aligned table lines, header first.
pub fn catalog_table(catalog: &Catalog) -> Vec<String> {
    let width = catalog
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut lines = Vec::with_capacity(catalog.len() + 1);
    lines.push(format!(
        "{:<width$} {:>8} {:>11} {:>9} {:>7} {:>9}",
        "Food",
        "Calories",
        "Protein (g)",
        "Carbs (g)",
        "Fat (g)",
        "Sugar (g)",
        width = width
    ));

    for (name, fact) in catalog.iter() {
        lines.push(format!(
            "{:<width$} {:>8.1} {:>11.1} {:>9.1} {:>7.1} {:>9.1}",
            name,
            fact.calories,
            fact.protein_g,
            fact.carbs_g,
            fact.fat_g,
            fact.sugar_g,
            width = width
        ));
    }

    lines
}

/// Display the food database (values per 100g).
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("=== Food Database ({} items, per 100g) ===", catalog.len());
    println!();
    for line in catalog_table(catalog) {
        println!("{}", line);
    }
    println!();
}

/// Display everything the session shows after an action.
pub fn display_session(session: &Session<'_>) {
    display_entries(session.entries());
    display_totals(session.totals());
    display_progress(&session.progress());
    display_advice(&session.advice());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionFact;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(2.5), progress_bar(1.0));
        assert_eq!(progress_bar(0.5).matches('#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_catalog_table() {
        let catalog = Catalog::new(vec![
            ("egg", NutritionFact::new(155.0, 13.0, 1.1, 11.0, 1.1)),
            ("kopi o", NutritionFact::new(7.0, 0.3, 0.7, 0.0, 0.0)),
        ]);
        let lines = catalog_table(&catalog);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Food"));
        assert!(lines[1].starts_with("egg "));
        assert!(lines[2].contains("7.0"));
    }
}
