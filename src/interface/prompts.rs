use dialoguer::{Confirm, Input, Select};

use crate::catalog::Catalog;
use crate::error::{Result, TrackerError};
use crate::models::{ActivityLevel, BodyMetrics, Gender};
use crate::tracker::constants::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

/// Maximum fuzzy matches offered for a food search.
const MAX_SUGGESTIONS: usize = 5;

/// Food-prompt answer that lists the whole catalog.
const BROWSE_ALL: &str = "?";

/// One step of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddFood,
    ResetDay,
    SetGoals,
    ShowCatalog,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::AddFood,
        Action::ResetDay,
        Action::SetGoals,
        Action::ShowCatalog,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::AddFood => "Add food",
            Action::ResetDay => "Reset day",
            Action::SetGoals => "Calculate my goals",
            Action::ShowCatalog => "Show food database",
            Action::Quit => "Quit",
        }
    }
}

/// Prompt for the next action.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Action::ALL.get(selection).copied().unwrap_or(Action::Quit))
}

/// Prompt for a catalog food with fuzzy matching.
///
/// `?` opens a list of every food. Returns `None` when the user gives up
/// (empty input or no pick).
pub fn prompt_food(catalog: &Catalog) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Choose a food (? to list all, Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if input == BROWSE_ALL {
            return prompt_food_from_list(catalog);
        }

        if catalog.contains(input) {
            return Ok(Some(input.to_lowercase()));
        }

        let candidates = catalog.suggest(input, MAX_SUGGESTIONS);

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", candidates[0]))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(candidates[0].to_string()));
            }
            continue;
        }

        let mut options: Vec<&str> = candidates.clone();
        options.push("None of these");

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < candidates.len() {
            return Ok(Some(candidates[selection].to_string()));
        }
    }
}

fn prompt_food_from_list(catalog: &Catalog) -> Result<Option<String>> {
    let names = catalog.names();
    let selection = Select::new()
        .with_prompt("Choose a food")
        .items(&names)
        .default(0)
        .max_length(15)
        .interact_opt()?;

    Ok(selection.and_then(|i| names.get(i)).map(|name| name.to_string()))
}

/// Prompt for a portion size in grams, re-prompting on typos.
///
/// Accepts any number; non-positive amounts are rejected by the session.
pub fn prompt_grams() -> Result<f64> {
    retry_until_valid(
        || {
            Ok(Input::<String>::new()
                .with_prompt("How many grams?")
                .default("100".to_string())
                .interact_text()?)
        },
        parse_number,
        |e| println!("{}", e),
    )
}

/// Collect body metrics for goal calculation, starting from `defaults`.
pub fn prompt_body_metrics(defaults: &BodyMetrics) -> Result<BodyMetrics> {
    let weight_kg = prompt_in_range(
        "Weight (kg)",
        defaults.weight_kg,
        WEIGHT_RANGE_KG.0,
        WEIGHT_RANGE_KG.1,
    )?;
    let height_cm = prompt_in_range(
        "Height (cm)",
        defaults.height_cm,
        HEIGHT_RANGE_CM.0,
        HEIGHT_RANGE_CM.1,
    )?;
    let age = prompt_age(defaults.age)?;

    let genders: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
    let gender_idx = Select::new()
        .with_prompt("Gender")
        .items(&genders)
        .default(Gender::ALL.iter().position(|g| *g == defaults.gender).unwrap_or(0))
        .interact()?;

    let levels: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.label()).collect();
    let level_idx = Select::new()
        .with_prompt("Activity Level")
        .items(&levels)
        .default(
            ActivityLevel::ALL
                .iter()
                .position(|l| *l == defaults.activity_level)
                .unwrap_or(0),
        )
        .interact()?;

    let metrics = BodyMetrics {
        weight_kg,
        height_cm,
        age,
        gender: Gender::ALL[gender_idx],
        activity_level: ActivityLevel::from_label(levels[level_idx])?,
    };
    metrics.validate()?;
    Ok(metrics)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Re-prompt until the value parses and falls inside `[min, max]`.
fn prompt_in_range(prompt: &str, default: f64, min: f64, max: f64) -> Result<f64> {
    retry_until_valid(
        || {
            Ok(Input::<String>::new()
                .with_prompt(format!("{} [{}-{}]", prompt, min, max))
                .default(default.to_string())
                .interact_text()?)
        },
        |input| parse_in_range(input, min, max),
        |e| println!("{}", e),
    )
}

/// Re-prompt until a whole age inside the accepted range is entered.
fn prompt_age(default: u32) -> Result<u32> {
    retry_until_valid(
        || {
            Ok(Input::<String>::new()
                .with_prompt(format!("Age [{}-{}]", AGE_RANGE.0, AGE_RANGE.1))
                .default(default.to_string())
                .interact_text()?)
        },
        parse_age,
        |e| println!("{}", e),
    )
}

/// Read answers from `next` until `parse` accepts one.
///
/// Each rejected answer is passed to `report`. Errors from `next` itself
/// (a closed terminal, for instance) end the loop.
fn retry_until_valid<T, N, P, R>(mut next: N, parse: P, mut report: R) -> Result<T>
where
    N: FnMut() -> Result<String>,
    P: Fn(&str) -> Result<T>,
    R: FnMut(&TrackerError),
{
    loop {
        let input = next()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => report(&e),
        }
    }
}

fn parse_number(input: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput("Invalid number".to_string()))
}

fn parse_in_range(input: &str, min: f64, max: f64) -> Result<f64> {
    let value = parse_number(input)?;
    if !(min..=max).contains(&value) {
        return Err(TrackerError::InvalidInput(format!(
            "Please enter a value between {} and {}.",
            min, max
        )));
    }
    Ok(value)
}

/// Whole years only; "25.7" is rejected rather than truncated.
fn parse_age(input: &str) -> Result<u32> {
    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput("Age must be a whole number".to_string()))?;

    if !(AGE_RANGE.0..=AGE_RANGE.1).contains(&age) {
        return Err(TrackerError::InvalidInput(format!(
            "Please enter an age between {} and {}.",
            AGE_RANGE.0, AGE_RANGE.1
        )));
    }
    Ok(age)
}
