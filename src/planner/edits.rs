//! In-place edits of a generated plan.
//!
//! Every edit checks its target before touching anything, so an error
//! leaves the plan as it was. Every successful edit re-derives the
//! week's cooking-time summary.

use log::info;

use crate::error::{PlanError, Result};
use crate::models::{Day, MealType, Plan, PlanConfig, Recipe, Week};
use crate::planner::duration::parse_duration;

/// Resolve a week and check that `position` (1-based) exists in its `meal` list.
fn locate(plan: &mut Plan, week_number: u32, meal: MealType, position: usize) -> Result<&mut Week> {
    let week = plan
        .week_mut(week_number)
        .ok_or(PlanError::WeekNotFound(week_number))?;

    if position == 0 || position > week.items(meal).len() {
        return Err(PlanError::ItemNotFound {
            meal,
            index: position,
        });
    }

    Ok(week)
}

/// Deduplicate and order a day selection Mon..Sun; empty is an error.
pub fn normalize_days(days: &[Day]) -> Result<Vec<Day>> {
    if days.is_empty() {
        return Err(PlanError::EmptyDaySelection);
    }
    let mut days = days.to_vec();
    days.sort();
    days.dedup();
    Ok(days)
}

/// Replace an item's recipe, keeping its days and portions.
pub fn swap_recipe(
    plan: &mut Plan,
    week_number: u32,
    meal: MealType,
    position: usize,
    recipe: &Recipe,
) -> Result<()> {
    let week = locate(plan, week_number, meal, position)?;
    let item = &mut week.items_mut(meal)[position - 1];

    let previous = std::mem::replace(&mut item.recipe_id, recipe.id.clone());
    item.prep_time = parse_duration(&recipe.prep_time);
    item.cook_time = parse_duration(&recipe.cook_time);
    week.recompute_cooking_time();

    info!(
        "Week {} {} #{}: swapped {} for {}",
        week_number, meal, position, previous, recipe.id
    );
    Ok(())
}

/// Move an item onto a new set of days and resize it for the household.
///
/// Portions become `ceil((adults + 0.5 * children) * days)`. Returns the new portions.
pub fn reassign_days(
    plan: &mut Plan,
    week_number: u32,
    meal: MealType,
    position: usize,
    days: &[Day],
    config: &PlanConfig,
) -> Result<u32> {
    let days = normalize_days(days)?;
    let week = locate(plan, week_number, meal, position)?;
    let portions = config.portions_for_days(days.len());

    let item = &mut week.items_mut(meal)[position - 1];
    item.days = days;
    item.portions = portions;
    week.recompute_cooking_time();

    info!(
        "Week {} {} #{}: reassigned to {} day(s), {} portions",
        week_number,
        meal,
        position,
        week.items(meal)[position - 1].days.len(),
        portions
    );
    Ok(portions)
}

/// Break a batch item into one single-day item per day it covered.
///
/// The new items are appended to the end of the list in day order and
/// each is sized for one day of the household. Returns how many were made.
pub fn split_into_days(
    plan: &mut Plan,
    week_number: u32,
    meal: MealType,
    position: usize,
    config: &PlanConfig,
) -> Result<usize> {
    let week = locate(plan, week_number, meal, position)?;
    let items = week.items_mut(meal);
    let batch = items.remove(position - 1);
    let portions = config.portions_for_days(1);

    let count = batch.days.len();
    items.extend(batch.days.iter().map(|day| {
        let mut single = batch.clone();
        single.days = vec![*day];
        single.portions = portions;
        single
    }));
    week.recompute_cooking_time();

    info!(
        "Week {} {} #{}: split {} into {} daily items",
        week_number, meal, position, batch.recipe_id, count
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchItem, Protein};
    use chrono::Utc;

    fn recipe(id: &str, prep: &str, cook: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: id.to_string(),
            protein: Protein::Beef,
            servings: Default::default(),
            prep_time: prep.to_string(),
            cook_time: cook.to_string(),
            tags: vec![],
            ingredients: vec![],
            instructions: vec![],
            notes: None,
        }
    }

    fn sample_plan() -> Plan {
        let lunch = BatchItem {
            recipe_id: "soup".to_string(),
            days: Day::WEEKDAYS.to_vec(),
            portions: 10,
            prep_time: 15,
            cook_time: 30,
            is_family_meal: false,
        };
        let dinner = BatchItem {
            recipe_id: "roast".to_string(),
            days: vec![Day::Saturday, Day::Sunday],
            portions: 6,
            prep_time: 20,
            cook_time: 90,
            is_family_meal: true,
        };
        Plan {
            weeks: vec![Week::new(1, vec![lunch], vec![dinner])],
            config: PlanConfig::default(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_swap_keeps_days_and_portions() {
        let mut plan = sample_plan();
        swap_recipe(&mut plan, 1, MealType::Dinner, 1, &recipe("stew", "10 min", "2 hours")).unwrap();

        let week = &plan.weeks[0];
        let item = &week.dinners[0];
        assert_eq!(item.recipe_id, "stew");
        assert_eq!(item.days, vec![Day::Saturday, Day::Sunday]);
        assert_eq!(item.portions, 6);
        assert_eq!(item.prep_time, 10);
        assert_eq!(item.cook_time, 120);
        assert_eq!(week.total_cooking_time.prep, 25);
        assert_eq!(week.total_cooking_time.cook, 150);
        assert_eq!(week.total_cooking_time.total, 175);
    }

    #[test]
    fn test_reassign_days_recomputes_portions() {
        let mut plan = sample_plan();
        let config = PlanConfig::default();
        let portions = reassign_days(
            &mut plan,
            1,
            MealType::Dinner,
            1,
            &[Day::Friday, Day::Monday, Day::Friday],
            &config,
        )
        .unwrap();

        assert_eq!(portions, 5);
        let item = &plan.weeks[0].dinners[0];
        assert_eq!(item.days, vec![Day::Monday, Day::Friday]);
        assert_eq!(item.portions, 5);
    }

    #[test]
    fn test_reassign_rejects_empty_selection() {
        let mut plan = sample_plan();
        let before = plan.clone();
        let err = reassign_days(&mut plan, 1, MealType::Lunch, 1, &[], &PlanConfig::default());
        assert!(matches!(err, Err(PlanError::EmptyDaySelection)));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_split_into_daily_items() {
        let mut plan = sample_plan();
        let count = split_into_days(&mut plan, 1, MealType::Lunch, 1, &PlanConfig::default()).unwrap();

        assert_eq!(count, 5);
        let week = &plan.weeks[0];
        assert_eq!(week.lunches.len(), 5);
        assert!(week.lunches.iter().all(|i| i.days.len() == 1 && i.portions == 3));
        assert_eq!(week.lunches[0].days, vec![Day::Monday]);
        assert_eq!(week.lunches[4].days, vec![Day::Friday]);
        assert_eq!(week.total_cooking_time.prep, 5 * 15 + 20);
        assert_eq!(
            week.total_cooking_time.total,
            week.total_cooking_time.prep + week.total_cooking_time.cook
        );
    }

    #[test]
    fn test_missing_targets_leave_plan_untouched() {
        let mut plan = sample_plan();
        let before = plan.clone();
        let config = PlanConfig::default();

        assert!(matches!(
            split_into_days(&mut plan, 2, MealType::Lunch, 1, &config),
            Err(PlanError::WeekNotFound(2))
        ));
        assert!(matches!(
            split_into_days(&mut plan, 1, MealType::Dinner, 2, &config),
            Err(PlanError::ItemNotFound { index: 2, .. })
        ));
        assert!(matches!(
            swap_recipe(&mut plan, 1, MealType::Lunch, 0, &recipe("x", "", "")),
            Err(PlanError::ItemNotFound { index: 0, .. })
        ));
        assert_eq!(plan, before);
    }
}
