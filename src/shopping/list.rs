use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{Plan, Recipe};
use crate::shopping::categories::ShoppingCategory;

/// One supermarket section and the ingredient lines shelved under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingSection {
    pub category: ShoppingCategory,
    pub items: Vec<String>,
}

/// Ingredients needed for one week, grouped by section.
///
/// Only presence is tracked: quantities are not scaled to portions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub week_number: u32,
    /// Non-empty sections in classification order.
    pub sections: Vec<ShoppingSection>,
}

impl ShoppingList {
    pub fn section(&self, category: ShoppingCategory) -> Option<&ShoppingSection> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Sections re-ordered for walking the shop.
    pub fn in_display_order(&self) -> Vec<&ShoppingSection> {
        ShoppingCategory::DISPLAY_ORDER
            .iter()
            .filter_map(|c| self.section(*c))
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Build the shopping list for `week_number` (1-based, positional).
///
/// Returns `None` when the plan has no such week. Ingredient lines are
/// deduplicated in first-seen order across lunches then dinners.
pub fn generate_shopping_list(
    plan: &Plan,
    week_number: u32,
    catalog: &[Recipe],
) -> Option<ShoppingList> {
    let week = plan.week(week_number)?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut ingredients: Vec<&str> = Vec::new();

    for item in week.all_items() {
        let Some(recipe) = catalog.iter().find(|r| r.id == item.recipe_id) else {
            continue;
        };
        for line in &recipe.ingredients {
            if seen.insert(line.as_str()) {
                ingredients.push(line.as_str());
            }
        }
    }

    let sections = ShoppingCategory::ALL
        .into_iter()
        .map(|category| ShoppingSection {
            category,
            items: ingredients
                .iter()
                .filter(|line| ShoppingCategory::classify(line) == category)
                .map(|line| line.to_string())
                .collect(),
        })
        .filter(|section| !section.items.is_empty())
        .collect();

    Some(ShoppingList {
        week_number,
        sections,
    })
}

/// Write a shopping list as `week,category,item` rows.
pub fn write_shopping_csv(list: &ShoppingList, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["week", "category", "item"])?;

    for section in list.in_display_order() {
        for item in &section.items {
            wtr.write_record([
                list.week_number.to_string().as_str(),
                section.category.as_str(),
                item.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
