use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use macro_tracker_rs::catalog::Catalog;
use macro_tracker_rs::cli::{parse_entry, Cli, Command, MetricsArgs, SummaryMetricsArgs};
use macro_tracker_rs::error::{Result, TrackerError};
use macro_tracker_rs::interface::{
    display_catalog, display_goals, display_new_goals, display_session, prompt_action,
    prompt_body_metrics, prompt_food, prompt_grams, prompt_yes_no, Action,
};
use macro_tracker_rs::models::BodyMetrics;
use macro_tracker_rs::state::Session;
use macro_tracker_rs::tracker::calculate_goals;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = Catalog::builtin();
    info!(foods = catalog.len(), "catalog loaded");

    match cli.command.unwrap_or_default() {
        Command::Track => cmd_track(&catalog),
        Command::Goals { metrics, json } => cmd_goals(&metrics, json),
        Command::Catalog { csv } => cmd_catalog(&catalog, csv),
        Command::Summary {
            entries,
            personalize,
            metrics,
            json,
        } => cmd_summary(&catalog, &entries, personalize, &metrics, json),
    }
}

/// Interactive tracking loop.
fn cmd_track(catalog: &Catalog) -> Result<()> {
    let mut session = Session::new(catalog);
    let mut metrics = BodyMetrics::default();

    println!("Calorie & Macro Tracker");
    println!("Track your daily nutrition with personalized goals!");
    println!();
    display_goals(session.goals());

    loop {
        match prompt_action()? {
            Action::AddFood => {
                let Some(food) = prompt_food(catalog)? else {
                    continue;
                };
                let grams = prompt_grams()?;

                match session.add_food(&food, grams) {
                    Ok(_) => println!("Added {}g of {}!", grams, food),
                    Err(TrackerError::InvalidInput(msg)) => {
                        println!("{}", msg);
                        continue;
                    }
                    Err(e) => return Err(e),
                }
            }
            Action::ResetDay => {
                if prompt_yes_no("Reset today's totals?", false)? {
                    session.reset();
                    println!("Day reset!");
                }
            }
            Action::SetGoals => {
                metrics = prompt_body_metrics(&metrics)?;
                let goals = session.recalculate_goals(&metrics);
                display_new_goals(&goals);
            }
            Action::ShowCatalog => {
                display_catalog(catalog);
                continue;
            }
            Action::Quit => return Ok(()),
        }

        display_goals(session.goals());
        display_session(&session);
    }
}

/// Print goals calculated from command-line metrics.
fn cmd_goals(args: &MetricsArgs, json: bool) -> Result<()> {
    let metrics = args.to_metrics()?;
    let goals = calculate_goals(&metrics);

    if json {
        println!("{}", serde_json::to_string_pretty(&goals)?);
    } else {
        println!("Activity: {}", metrics.activity_level.label());
        display_new_goals(&goals);
    }

    Ok(())
}

/// Print the food database.
fn cmd_catalog(catalog: &Catalog, csv: bool) -> Result<()> {
    if csv {
        catalog.write_csv(io::stdout().lock())?;
    } else {
        display_catalog(catalog);
    }
    Ok(())
}

/// Build a session from `FOOD=GRAMS` entries and report on it.
fn cmd_summary(
    catalog: &Catalog,
    entries: &[String],
    personalize: bool,
    metrics: &SummaryMetricsArgs,
    json: bool,
) -> Result<()> {
    let mut session = Session::new(catalog);

    if let Some(metrics) = metrics.resolve(personalize)? {
        session.recalculate_goals(&metrics);
    }

    for entry in entries {
        let (food, grams) = parse_entry(entry)?;
        session.add_food(&food, grams)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        display_goals(session.goals());
        display_session(&session);
    }

    Ok(())
}
