pub mod prompts;
pub mod render;

pub use prompts::{prompt_action, prompt_body_metrics, prompt_food, prompt_grams, prompt_yes_no, Action};
pub use render::{
    catalog_table, display_advice, display_catalog, display_entries, display_goals,
    display_new_goals, display_progress, display_session, display_totals, progress_bar,
};
