use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{PlanConfig, Recipe};

/// Minimum similarity for a fuzzy recipe match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Most fuzzy matches offered at once.
const FUZZY_LIMIT: usize = 5;

/// Prompt for a whole number, offering `default`.
pub fn prompt_u32(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through every setting, starting from `current`.
pub fn prompt_config(current: &PlanConfig) -> Result<PlanConfig> {
    let adults = prompt_u32("Adults in the household", current.adults)?;
    let children = prompt_u32("Children in the household", current.children)?;
    let number_of_weeks = prompt_u32("Weeks to plan", current.number_of_weeks)?;
    let lunch_portions = prompt_u32("Lunch portions per week", current.lunch_portions)?;
    let dinner_recipes = prompt_u32("Different dinners per week (1-7)", current.dinner_recipes)?;

    if adults + children == 0 {
        return Err(PlanError::InvalidInput(
            "Household needs at least one person".to_string(),
        ));
    }
    if !(1..=7).contains(&dinner_recipes) {
        return Err(PlanError::InvalidInput(
            "Different dinners per week must be between 1 and 7".to_string(),
        ));
    }

    let weekend_family_meals =
        prompt_yes_no("Cook family meals at the weekend?", current.weekend_family_meals)?;
    let child_separate_weekdays = prompt_yes_no(
        "Child eats separately on weekdays?",
        current.child_separate_weekdays,
    )?;

    Ok(PlanConfig {
        adults,
        children,
        lunch_portions,
        dinner_recipes,
        weekend_family_meals,
        child_separate_weekdays,
        number_of_weeks: number_of_weeks.max(1),
    })
}

/// Recipes whose name or id resembles `query`, best first.
pub fn fuzzy_matches<'a>(catalog: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();

    let mut scored: Vec<(&Recipe, f64)> = catalog
        .iter()
        .map(|r| {
            let by_name = jaro_winkler(&r.name.to_lowercase(), &query);
            let by_id = jaro_winkler(&r.id.to_lowercase(), &query);
            (r, by_name.max(by_id))
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(FUZZY_LIMIT).map(|(r, _)| r).collect()
}

/// Resolve a recipe id from an exact id/name or, failing that, a fuzzy pick.
///
/// With no query the user types one. `None` when nothing was chosen.
pub fn prompt_recipe(catalog: &[Recipe], query: Option<&str>) -> Result<Option<String>> {
    let query = match query {
        Some(q) => q.to_string(),
        None => Input::new()
            .with_prompt("Recipe to use (name or id)")
            .interact_text()?,
    };
    let wanted = query.trim().to_lowercase();

    let exact = catalog
        .iter()
        .find(|r| r.id.to_lowercase() == wanted || r.name.to_lowercase() == wanted);
    if let Some(recipe) = exact {
        return Ok(Some(recipe.id.clone()));
    }

    let candidates = fuzzy_matches(catalog, &query);
    if candidates.is_empty() {
        println!("No matching recipe found for '{}'", query);
        return Ok(None);
    }

    let mut options: Vec<String> = candidates
        .iter()
        .map(|r| format!("{} ({}, {})", r.name, r.id, r.protein))
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).map(|r| r.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Protein;

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            protein: Protein::Other,
            servings: Default::default(),
            prep_time: String::new(),
            cook_time: String::new(),
            tags: vec![],
            ingredients: vec![],
            instructions: vec![],
            notes: None,
        }
    }

    #[test]
    fn test_fuzzy_matches_ranks_closest_first() {
        let catalog = vec![
            recipe("beef-stew", "Beef Stew"),
            recipe("fish-pie", "Fish Pie"),
            recipe("beef-chili", "Beef Chili"),
        ];
        let found = fuzzy_matches(&catalog, "beef stw");
        assert!(!found.is_empty());
        assert_eq!(found[0].id, "beef-stew");
        assert!(found.iter().all(|r| r.id != "fish-pie"));
    }

    #[test]
    fn test_fuzzy_matches_nothing_close() {
        let catalog = vec![recipe("fish-pie", "Fish Pie")];
        assert!(fuzzy_matches(&catalog, "zzzzzzzz").is_empty());
    }
}
