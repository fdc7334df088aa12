use std::path::PathBuf;

use clap::Parser;

use meal_plan_automator_rs::audit::{
    print_summary, print_top_recipes, run_audit, write_csv, write_summary_json,
};
use meal_plan_automator_rs::state::{StateStore, load_catalog};

#[derive(Parser, Debug)]
#[command(name = "plan_audit")]
#[command(about = "Generate many plans from a seed and report how the planner behaves")]
struct Args {
    /// Number of plans to generate
    #[arg(long, default_value = "300")]
    iters: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Path to the recipe catalog JSON file
    #[arg(long, default_value = "data/recipes.json")]
    recipes: PathBuf,

    /// Directory holding the saved settings
    #[arg(long, default_value = ".meal_plan")]
    state_dir: PathBuf,

    /// Override the number of weeks per plan
    #[arg(long)]
    weeks: Option<u32>,

    /// Output CSV file with one row per plan
    #[arg(long, default_value = "audit_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "audit_summary.json")]
    json: PathBuf,

    /// Number of most-picked recipes to display
    #[arg(long, default_value = "10")]
    topk: usize,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let catalog = match load_catalog(&args.recipes) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Loaded {} recipes from {:?}", catalog.len(), args.recipes);

    let mut config = match StateStore::new(&args.state_dir).load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading settings: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(weeks) = args.weeks {
        config.number_of_weeks = weeks;
    }
    println!(
        "Auditing {} plans of {} week(s) for {}",
        args.iters,
        config.weeks_to_plan(),
        config.household_summary()
    );

    let summary = run_audit(&catalog, &config, args.iters, args.seed);

    print_summary(&summary);
    print_top_recipes(&summary, args.topk);

    if let Err(e) = write_csv(&summary, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote per-plan results to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&summary, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}
