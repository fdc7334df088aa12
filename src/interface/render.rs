use crate::models::recipe::DEFAULT_BASE_SERVINGS;
use crate::models::{BatchItem, Day, Plan, PlanConfig, Protein, Recipe, Week};
use crate::planner::format_duration;
use crate::shopping::ShoppingList;

/// Short label for a run of days: "Monday", "Mon-Fri", "Mon-Sun", "Thursday-Friday".
pub fn days_label(days: &[Day]) -> String {
    match days {
        [] => "-".to_string(),
        [only] => only.name().to_string(),
        _ if days.len() == 7 => "Mon-Sun".to_string(),
        [Day::Monday, ..] if days.len() == 5 => "Mon-Fri".to_string(),
        [first, .., last] => format!("{}-{}", first.name(), last.name()),
    }
}

/// How much of the recipe to make for `portions`.
///
/// "6 portions (as per recipe)" when it rounds to 1.0x, else "1.7x the recipe (10 portions)".
pub fn portions_label(portions: u32, base_servings: u32) -> String {
    let multiplier = format!("{:.1}", portions as f64 / base_servings.max(1) as f64);
    if multiplier == "1.0" {
        format!("{} portions (as per recipe)", portions)
    } else {
        format!("{}x the recipe ({} portions)", multiplier, portions)
    }
}

fn protein_icon(recipe: Option<&Recipe>) -> &'static str {
    match recipe.map(|r| r.protein) {
        Some(Protein::Chicken) => "🐔",
        Some(Protein::Beef) => "🐄",
        Some(Protein::Pork) => "🐷",
        Some(Protein::Lamb) => "🐑",
        Some(Protein::Fish) => "🐟",
        _ => "🍽️",
    }
}

fn display_batch_item(position: usize, item: &BatchItem, catalog: &[Recipe]) {
    let recipe = catalog.iter().find(|r| r.id == item.recipe_id);
    let name = recipe.map(|r| r.name.as_str()).unwrap_or("(unknown recipe)");
    let base = recipe.map(|r| r.servings.base()).unwrap_or(DEFAULT_BASE_SERVINGS);
    let family = if item.is_family_meal { "  [Family]" } else { "" };

    println!(
        "  {:>2}. {} {} ({}){}",
        position,
        protein_icon(recipe),
        name,
        item.recipe_id,
        family
    );
    println!("      Days: {}", days_label(&item.days));
    println!("      Make: {}", portions_label(item.portions, base));
    println!(
        "      Time: {} prep + {} cook",
        format_duration(item.prep_time),
        format_duration(item.cook_time)
    );
}

fn display_batch_section(title: &str, items: &[BatchItem], catalog: &[Recipe]) {
    println!("{}", title);
    if items.is_empty() {
        println!("  No items planned");
        return;
    }
    for (i, item) in items.iter().enumerate() {
        display_batch_item(i + 1, item, catalog);
    }
}

/// Display one week: time banner, lunches, dinners.
pub fn display_week(week: &Week, catalog: &[Recipe]) {
    let time = &week.total_cooking_time;

    println!();
    println!("=== Week {} ===", week.week_number);
    println!(
        "Total batch cooking time: {} ({} prep + {} cook)",
        time.formatted,
        format_duration(time.prep),
        format_duration(time.cook)
    );
    println!();
    display_batch_section("Lunches (Mon-Fri)", &week.lunches, catalog);
    println!();
    display_batch_section("Dinners", &week.dinners, catalog);
}

/// Display a plan, or just one week of it.
pub fn display_plan(plan: &Plan, catalog: &[Recipe], only_week: Option<u32>) {
    println!(
        "Meal plan generated {} for {}",
        plan.generated_at.format("%Y-%m-%d %H:%M"),
        plan.config.household_summary()
    );

    match only_week {
        Some(n) => match plan.week(n) {
            Some(week) => display_week(week, catalog),
            None => println!("Week {} is not in this plan ({} weeks).", n, plan.weeks.len()),
        },
        None => plan.weeks.iter().for_each(|w| display_week(w, catalog)),
    }
    println!();
}

/// Display a shopping list in walking order.
pub fn display_shopping_list(list: &ShoppingList) {
    println!();
    println!("=== Shopping List: Week {} ({} items) ===", list.week_number, list.item_count());

    if list.sections.is_empty() {
        println!("Nothing to buy.");
        return;
    }

    for section in list.in_display_order() {
        println!();
        println!("{}", section.category);
        for item in &section.items {
            println!("  [ ] {}", item);
        }
    }
    println!();
    println!("Quantities are per recipe; scale to the portions in your plan.");
    println!();
}

/// Display a list of recipes, one per line.
pub fn display_recipe_list(recipes: &[&Recipe], title: &str) {
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} recipes) ===", title, recipes.len());
    println!();

    let width = recipes.iter().map(|r| r.id.len()).max().unwrap_or(10);
    for recipe in recipes {
        println!(
            "  {:<width$}  {} {} [{}] serves {}, {} prep + {} cook",
            recipe.id,
            protein_icon(Some(*recipe)),
            recipe.name,
            recipe.tags.join(", "),
            recipe.servings,
            recipe.prep_time,
            recipe.cook_time,
            width = width
        );
    }
    println!();
}

/// Display one recipe in full.
pub fn display_recipe(recipe: &Recipe) {
    println!();
    println!("=== {} ===", recipe.name);
    println!(
        "Protein: {} | Serves: {} | Prep: {} | Cook: {}",
        recipe.protein, recipe.servings, recipe.prep_time, recipe.cook_time
    );
    if !recipe.tags.is_empty() {
        println!("Tags: {}", recipe.tags.join(", "));
    }

    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }

    println!();
    println!("Instructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if let Some(notes) = &recipe.notes {
        println!();
        println!("Notes: {}", notes);
    }
    println!();
}

/// Display the config with its household summary.
pub fn display_config(config: &PlanConfig) {
    println!();
    println!("=== Settings ===");
    println!("Household:               {}", config.household_summary());
    println!("Portions per day:        {}", config.portions_per_day());
    println!("Weeks to plan:           {}", config.number_of_weeks);
    println!("Lunch portions/week:     {}", config.lunch_portions);
    println!("Different dinners/week:  {}", config.dinner_recipes);
    println!("Weekend family meals:    {}", yes_no(config.weekend_family_meals));
    println!("Child separate weekdays: {}", yes_no(config.child_separate_weekdays));
    println!();
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_label() {
        assert_eq!(days_label(&[Day::Tuesday]), "Tuesday");
        assert_eq!(days_label(&Day::ALL), "Mon-Sun");
        assert_eq!(days_label(&Day::WEEKDAYS), "Mon-Fri");
        assert_eq!(days_label(&[Day::Thursday, Day::Friday]), "Thursday-Friday");
        assert_eq!(
            days_label(&[Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday, Day::Saturday]),
            "Tuesday-Saturday"
        );
    }

    #[test]
    fn test_portions_label() {
        assert_eq!(portions_label(6, 6), "6 portions (as per recipe)");
        assert_eq!(portions_label(10, 6), "1.7x the recipe (10 portions)");
        assert_eq!(portions_label(8, 4), "2.0x the recipe (8 portions)");
        assert_eq!(portions_label(10, 4), "2.5x the recipe (10 portions)");
    }
}
