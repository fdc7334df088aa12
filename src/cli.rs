use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::MealType;

/// Weekly batch-cooking meal plans and shopping lists.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_automator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "data/recipes.json")]
    pub recipes: PathBuf,

    /// Directory holding the saved plan and settings.
    #[arg(short, long, default_value = ".meal_plan")]
    pub state_dir: PathBuf,
}

/// Addresses one batch item of a saved plan.
#[derive(clap::Args, Debug, Clone)]
pub struct ItemRef {
    /// Week number (1-based).
    #[arg(short, long, default_value = "1")]
    pub week: u32,

    /// Which list the item is in.
    #[arg(short, long, value_enum)]
    pub meal: MealType,

    /// Position of the item in that list (1-based).
    #[arg(short, long)]
    pub item: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new meal plan from the saved settings.
    Generate,

    /// Show the saved meal plan.
    Show {
        /// Only show this week.
        #[arg(short, long)]
        week: Option<u32>,
    },

    /// Build the shopping list for one week.
    Shopping {
        /// Week number (1-based).
        #[arg(short, long, default_value = "1")]
        week: u32,

        /// Also write the list to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List catalog recipes.
    Recipes {
        /// Only recipes with this protein (chicken, beef, pork, lamb, fish, other).
        #[arg(short, long)]
        protein: Option<String>,
    },

    /// Show one recipe in full.
    Recipe {
        /// Recipe id.
        id: String,
    },

    /// Swap the recipe of a batch item, keeping its days and portions.
    Swap {
        #[command(flatten)]
        target: ItemRef,

        /// Recipe id or name; prompts with close matches when not exact.
        #[arg(short, long)]
        recipe: Option<String>,
    },

    /// Move a batch item to different days and resize its portions.
    EditDays {
        #[command(flatten)]
        target: ItemRef,

        /// Comma-separated days, e.g. "Mon,Tue,Sat".
        #[arg(short, long, value_delimiter = ',', required = true)]
        days: Vec<String>,
    },

    /// Split a batch item into one item per day.
    Split {
        #[command(flatten)]
        target: ItemRef,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// View or change household and planning settings.
    Config {
        #[arg(long)]
        adults: Option<u32>,

        #[arg(long)]
        children: Option<u32>,

        #[arg(long)]
        lunch_portions: Option<u32>,

        #[arg(long)]
        dinner_recipes: Option<u32>,

        #[arg(long)]
        weekend_family_meals: Option<bool>,

        #[arg(long)]
        child_separate_weekdays: Option<bool>,

        /// Number of weeks to plan.
        #[arg(long)]
        weeks: Option<u32>,

        /// Prompt for every setting.
        #[arg(short, long)]
        interactive: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show { week: None }
    }
}
