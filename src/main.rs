use clap::Parser;
use log::{info, warn};

use meal_plan_automator_rs::cli::{Cli, Command, ItemRef};
use meal_plan_automator_rs::error::{PlanError, Result};
use meal_plan_automator_rs::interface::{
    display_config, display_plan, display_recipe, display_recipe_list, display_shopping_list,
    display_week, prompt_config, prompt_recipe, prompt_yes_no,
};
use meal_plan_automator_rs::models::{Day, PlanConfig, Protein};
use meal_plan_automator_rs::shopping::write_shopping_csv;
use meal_plan_automator_rs::state::{AppState, StateStore, load_catalog};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let store = StateStore::new(&cli.state_dir);
    let catalog = load_catalog(&cli.recipes)?;
    let config = store.load_config()?;
    let plan = store.load_plan()?;
    let mut state = AppState::new(catalog, config, plan);

    match command {
        Command::Generate => cmd_generate(&mut state, &store),
        Command::Show { week } => cmd_show(&state, week),
        Command::Shopping { week, csv } => cmd_shopping(&state, week, csv),
        Command::Recipes { protein } => cmd_recipes(&state, protein.as_deref()),
        Command::Recipe { id } => cmd_recipe(&state, &id),
        Command::Swap { target, recipe } => cmd_swap(&mut state, &store, &target, recipe.as_deref()),
        Command::EditDays { target, days } => cmd_edit_days(&mut state, &store, &target, &days),
        Command::Split { target, yes } => cmd_split(&mut state, &store, &target, yes),
        Command::Config {
            adults,
            children,
            lunch_portions,
            dinner_recipes,
            weekend_family_meals,
            child_separate_weekdays,
            weeks,
            interactive,
        } => {
            let current = state.config().clone();
            let updated = if interactive {
                Some(prompt_config(&current)?)
            } else {
                let merged = PlanConfig {
                    adults: adults.unwrap_or(current.adults),
                    children: children.unwrap_or(current.children),
                    lunch_portions: lunch_portions.unwrap_or(current.lunch_portions),
                    dinner_recipes: dinner_recipes.unwrap_or(current.dinner_recipes),
                    weekend_family_meals: weekend_family_meals
                        .unwrap_or(current.weekend_family_meals),
                    child_separate_weekdays: child_separate_weekdays
                        .unwrap_or(current.child_separate_weekdays),
                    number_of_weeks: weeks.unwrap_or(current.number_of_weeks),
                };
                (merged != current).then_some(merged)
            };
            cmd_config(&mut state, &store, updated)
        }
    }
}

/// Generate, save and show a new plan.
fn cmd_generate(state: &mut AppState, store: &StateStore) -> Result<()> {
    if state.catalog().is_empty() {
        warn!("Recipe catalog is empty, every slot will be left out");
    }

    println!(
        "Generating {} week(s) for {}...",
        state.config().weeks_to_plan(),
        state.config().household_summary()
    );

    let mut rng = rand::thread_rng();
    state.regenerate(&mut rng);

    if let Some(plan) = state.plan() {
        store.save_plan(plan)?;
        display_plan(plan, state.catalog(), None);
        println!("Meal plan saved to {}", store.dir().display());
    }
    Ok(())
}

/// Show the saved plan.
fn cmd_show(state: &AppState, week: Option<u32>) -> Result<()> {
    match state.plan() {
        Some(plan) => display_plan(plan, state.catalog(), week),
        None => {
            println!("No meal plan yet.");
            println!("Run 'generate' to create one.");
        }
    }
    Ok(())
}

/// Show (and optionally export) one week's shopping list.
fn cmd_shopping(state: &AppState, week: u32, csv: Option<std::path::PathBuf>) -> Result<()> {
    if state.plan().is_none() {
        return Err(PlanError::NoPlan);
    }
    let list = state.shopping_list(week).ok_or(PlanError::WeekNotFound(week))?;

    display_shopping_list(&list);

    if let Some(path) = csv {
        write_shopping_csv(&list, &path)?;
        println!("Wrote shopping list to {}", path.display());
    }
    Ok(())
}

/// List the catalog, optionally filtered by protein.
fn cmd_recipes(state: &AppState, protein: Option<&str>) -> Result<()> {
    let protein = protein.map(str::parse::<Protein>).transpose()?;
    let recipes = state.recipes_by_protein(protein);
    let title = match protein {
        Some(p) => format!("Recipes ({})", p),
        None => "Recipes".to_string(),
    };
    display_recipe_list(&recipes, &title);
    Ok(())
}

fn cmd_recipe(state: &AppState, id: &str) -> Result<()> {
    let recipe = state
        .recipe(id)
        .ok_or_else(|| PlanError::RecipeNotFound(id.to_string()))?;
    display_recipe(recipe);
    Ok(())
}

/// Save the plan after an edit and show the edited week.
fn save_and_show_week(state: &AppState, store: &StateStore, week: u32) -> Result<()> {
    if let Some(plan) = state.plan() {
        store.save_plan(plan)?;
        if let Some(w) = plan.week(week) {
            display_week(w, state.catalog());
        }
    }
    println!();
    Ok(())
}

fn cmd_swap(
    state: &mut AppState,
    store: &StateStore,
    target: &ItemRef,
    recipe: Option<&str>,
) -> Result<()> {
    let Some(recipe_id) = prompt_recipe(state.catalog(), recipe)? else {
        println!("No recipe chosen, plan unchanged.");
        return Ok(());
    };

    state.swap_recipe(target.week, target.meal, target.item, &recipe_id)?;
    println!("Recipe changed.");
    save_and_show_week(state, store, target.week)
}

fn cmd_edit_days(
    state: &mut AppState,
    store: &StateStore,
    target: &ItemRef,
    days: &[String],
) -> Result<()> {
    let days = days
        .iter()
        .filter(|d| !d.trim().is_empty())
        .map(|d| d.parse::<Day>())
        .collect::<Result<Vec<_>>>()?;

    let portions = state.reassign_days(target.week, target.meal, target.item, &days)?;
    let day_count = state
        .plan()
        .and_then(|plan| plan.week(target.week))
        .and_then(|week| week.items(target.meal).get(target.item - 1))
        .map_or(0, |item| item.days.len());
    println!(
        "Days updated: {} day(s), {} portions ({} per day).",
        day_count,
        portions,
        state.config().portions_per_day()
    );
    save_and_show_week(state, store, target.week)
}

fn cmd_split(state: &mut AppState, store: &StateStore, target: &ItemRef, yes: bool) -> Result<()> {
    if !yes
        && !prompt_yes_no(
            "This will split this batch recipe into separate daily entries. Continue?",
            false,
        )?
    {
        return Ok(());
    }

    let count = state.split_item(target.week, target.meal, target.item)?;
    println!("Split into {} daily entries.", count);
    save_and_show_week(state, store, target.week)
}

/// Show settings, or save new ones and regenerate if the week count changed.
fn cmd_config(state: &mut AppState, store: &StateStore, updated: Option<PlanConfig>) -> Result<()> {
    let Some(config) = updated else {
        display_config(state.config());
        return Ok(());
    };

    let weeks_changed = state.update_config(config);
    store.save_config(state.config())?;
    println!("Settings saved!");
    display_config(state.config());

    if weeks_changed && state.plan().is_some() {
        info!(
            "Week count changed to {}, regenerating plan",
            state.config().number_of_weeks
        );
        println!("Week count changed, regenerating the meal plan.");
        cmd_generate(state, store)?;
    } else {
        println!("Run 'generate' to create a new plan with these settings.");
    }
    Ok(())
}
