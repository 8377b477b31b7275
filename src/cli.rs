use clap::{Args, Parser, Subcommand};

use crate::error::{Result, TrackerError};
use crate::models::{ActivityLevel, BodyMetrics, Gender};
use crate::tracker::constants::{DEFAULT_AGE, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG};

/// MacroTracker — track calories and macros against personalized goals.
#[derive(Parser, Debug)]
#[command(name = "macro-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session: add foods, reset the day, set goals.
    Track,

    /// Calculate daily goals from body metrics.
    Goals {
        #[command(flatten)]
        metrics: MetricsArgs,

        /// Print goals as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the food database (values per 100g).
    Catalog {
        /// Print as CSV instead of a table.
        #[arg(long)]
        csv: bool,
    },

    /// One-shot summary of foods eaten, e.g. `summary banana=200 "nasi lemak=300"`.
    Summary {
        /// Entries as FOOD=GRAMS.
        #[arg(required = true)]
        entries: Vec<String>,

        /// Use goals calculated from the body metrics instead of the defaults.
        /// Implied by any metric flag.
        #[arg(long)]
        personalize: bool,

        #[command(flatten)]
        metrics: SummaryMetricsArgs,

        /// Print the session snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Track
    }
}

/// Body metrics accepted on the command line.
#[derive(Args, Debug, Clone)]
pub struct MetricsArgs {
    /// Weight in kg (30-200).
    #[arg(long, default_value_t = DEFAULT_WEIGHT_KG)]
    pub weight: f64,

    /// Height in cm (120-220).
    #[arg(long, default_value_t = DEFAULT_HEIGHT_CM)]
    pub height: f64,

    /// Age in years (15-100).
    #[arg(long, default_value_t = DEFAULT_AGE)]
    pub age: u32,

    #[arg(long, value_enum, default_value_t = Gender::Male)]
    pub gender: Gender,

    #[arg(long, value_enum, default_value_t = ActivityLevel::Sedentary)]
    pub activity: ActivityLevel,
}

impl MetricsArgs {
    /// Convert to validated body metrics.
    pub fn to_metrics(&self) -> Result<BodyMetrics> {
        let metrics = BodyMetrics {
            weight_kg: self.weight,
            height_cm: self.height,
            age: self.age,
            gender: self.gender,
            activity_level: self.activity,
        };
        metrics.validate()?;
        Ok(metrics)
    }
}

/// Optional body metrics for `summary`; unset fields fall back to the
/// form defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryMetricsArgs {
    /// Weight in kg (30-200).
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm (120-220).
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years (15-100).
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    #[arg(long, value_enum)]
    pub activity: Option<ActivityLevel>,
}

impl SummaryMetricsArgs {
    /// True when any metric flag was given.
    pub fn is_set(&self) -> bool {
        self.weight.is_some()
            || self.height.is_some()
            || self.age.is_some()
            || self.gender.is_some()
            || self.activity.is_some()
    }

    /// Metrics to personalize goals with, or `None` to keep the defaults.
    pub fn resolve(&self, personalize: bool) -> Result<Option<BodyMetrics>> {
        if !personalize && !self.is_set() {
            return Ok(None);
        }

        let defaults = BodyMetrics::default();
        let metrics = BodyMetrics {
            weight_kg: self.weight.unwrap_or(defaults.weight_kg),
            height_cm: self.height.unwrap_or(defaults.height_cm),
            age: self.age.unwrap_or(defaults.age),
            gender: self.gender.unwrap_or(defaults.gender),
            activity_level: self.activity.unwrap_or(defaults.activity_level),
        };
        metrics.validate()?;
        Ok(Some(metrics))
    }
}

/// Parse a `FOOD=GRAMS` entry. The last `=` separates the amount.
pub fn parse_entry(entry: &str) -> Result<(String, f64)> {
    let (food, grams) = entry
        .rsplit_once('=')
        .ok_or_else(|| TrackerError::InvalidInput(format!("Expected FOOD=GRAMS, got '{}'", entry)))?;

    let food = food.trim();
    if food.is_empty() {
        return Err(TrackerError::InvalidInput(format!(
            "Missing food name in '{}'",
            entry
        )));
    }

    let grams: f64 = grams
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("Invalid grams in '{}'", entry)))?;

    Ok((food.to_string(), grams))
}
