use log::debug;
use rand::Rng;

use crate::models::{BatchItem, Day, PlanConfig, Protein, Recipe, Week};
use crate::planner::constants::*;
use crate::planner::duration::parse_duration;
use crate::planner::selection::{SelectionCriteria, select_recipe};

/// Split the week into `runs` contiguous, non-empty day runs covering Mon..Sun.
///
/// Each run takes `ceil(remaining days / remaining runs)` days from the front.
/// `runs` is clamped to 1..=7.
pub fn partition_days(runs: usize) -> Vec<Vec<Day>> {
    let runs = runs.clamp(MIN_DINNER_RUNS, MAX_DINNER_RUNS);
    let mut remaining: &[Day] = &Day::ALL;
    let mut partition = Vec::with_capacity(runs);

    for i in 0..runs {
        let take = remaining.len().div_ceil(runs - i);
        let (run, rest) = remaining.split_at(take);
        partition.push(run.to_vec());
        remaining = rest;
    }

    partition
}

/// A batch item for `recipe`, with times parsed from its text.
pub fn batch_item(recipe: &Recipe, days: Vec<Day>, portions: u32, is_family_meal: bool) -> BatchItem {
    BatchItem {
        recipe_id: recipe.id.clone(),
        days,
        portions,
        prep_time: parse_duration(&recipe.prep_time),
        cook_time: parse_duration(&recipe.cook_time),
        is_family_meal,
    }
}

/// Generate one week: a Mon-Fri lunch batch and the dinner runs.
///
/// Proteins chosen earlier in the week are excluded from every later
/// dinner pick. A slot with no eligible recipe is left out.
pub fn plan_week<R: Rng + ?Sized>(
    catalog: &[Recipe],
    config: &PlanConfig,
    week_number: u32,
    rng: &mut R,
) -> Week {
    let mut used_proteins: Vec<Protein> = Vec::new();
    let mut lunches = Vec::new();
    let mut dinners = Vec::new();

    let lunch_criteria = SelectionCriteria {
        required_tags: &LUNCH_TAGS,
        ..Default::default()
    };
    match select_recipe(catalog, &lunch_criteria, rng) {
        Some(recipe) => {
            used_proteins.push(recipe.protein);
            lunches.push(batch_item(
                recipe,
                Day::WEEKDAYS.to_vec(),
                config.lunch_portions,
                false,
            ));
        }
        None => debug!("Week {}: no lunch recipe available", week_number),
    }

    for (i, days) in partition_days(config.dinner_recipes as usize)
        .into_iter()
        .enumerate()
    {
        let is_family_meal = config.weekend_family_meals && days.iter().any(Day::is_weekend);
        let tags: &[&str] = if is_family_meal {
            &FAMILY_DINNER_TAGS
        } else {
            &DINNER_TAGS
        };
        let criteria = SelectionCriteria {
            required_tags: tags,
            excluded_proteins: &used_proteins,
            preferred_protein: (i == 0).then_some(PREFERRED_FIRST_DINNER_PROTEIN),
        };

        let Some(recipe) = select_recipe(catalog, &criteria, rng) else {
            debug!(
                "Week {}: no dinner recipe for run {} ({} days), slot left empty",
                week_number,
                i + 1,
                days.len()
            );
            continue;
        };

        let portions = (days.len() as u32).saturating_mul(config.household_size());
        used_proteins.push(recipe.protein);
        dinners.push(batch_item(recipe, days, portions, is_family_meal));
    }

    Week::new(week_number, lunches, dinners)
}
