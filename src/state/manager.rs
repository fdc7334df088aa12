use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::error::{PlanError, Result};
use crate::models::{Day, MealType, Plan, PlanConfig, Protein, Recipe};
use crate::planner::{self, generate_plan};
use crate::shopping::{ShoppingList, generate_shopping_list};

/// Owns the catalog, the current config and the current plan.
///
/// All planning goes through here; nothing is held in globals.
pub struct AppState {
    catalog: Vec<Recipe>,
    config: PlanConfig,
    plan: Option<Plan>,
}

impl AppState {
    pub fn new(catalog: Vec<Recipe>, config: PlanConfig, plan: Option<Plan>) -> Self {
        Self {
            catalog,
            config,
            plan,
        }
    }

    pub fn catalog(&self) -> &[Recipe] {
        &self.catalog
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Look up a recipe by id.
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.catalog.iter().find(|r| r.id == id)
    }

    /// Catalog recipes, optionally restricted to one protein.
    pub fn recipes_by_protein(&self, protein: Option<Protein>) -> Vec<&Recipe> {
        self.catalog
            .iter()
            .filter(|r| protein.is_none_or(|p| r.protein == p))
            .collect()
    }

    /// Replace the config. Returns whether the week count changed.
    pub fn update_config(&mut self, config: PlanConfig) -> bool {
        let weeks_changed = config.number_of_weeks != self.config.number_of_weeks;
        self.config = config;
        weeks_changed
    }

    /// Generate a fresh plan from the current config, replacing any existing one.
    ///
    /// The new plan's timestamp is strictly later than the one it replaces.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Plan {
        let mut plan = generate_plan(&self.catalog, &self.config, rng);
        if let Some(previous) = self.plan.as_ref().map(|p| p.generated_at) {
            plan.generated_at = later_than(previous, plan.generated_at);
        }
        self.plan.insert(plan)
    }

    fn plan_mut(&mut self) -> Result<&mut Plan> {
        self.plan.as_mut().ok_or(PlanError::NoPlan)
    }

    /// Swap the recipe of a batch item, keeping its days and portions.
    pub fn swap_recipe(
        &mut self,
        week_number: u32,
        meal: MealType,
        position: usize,
        recipe_id: &str,
    ) -> Result<()> {
        let recipe = self
            .catalog
            .iter()
            .find(|r| r.id == recipe_id)
            .ok_or_else(|| PlanError::RecipeNotFound(recipe_id.to_string()))?;
        let plan = self.plan.as_mut().ok_or(PlanError::NoPlan)?;
        planner::swap_recipe(plan, week_number, meal, position, recipe)
    }

    /// Reassign a batch item's days; portions follow the current household.
    pub fn reassign_days(
        &mut self,
        week_number: u32,
        meal: MealType,
        position: usize,
        days: &[Day],
    ) -> Result<u32> {
        let config = self.config.clone();
        let plan = self.plan_mut()?;
        planner::reassign_days(plan, week_number, meal, position, days, &config)
    }

    /// Split a batch item into single-day items.
    pub fn split_item(&mut self, week_number: u32, meal: MealType, position: usize) -> Result<usize> {
        let config = self.config.clone();
        let plan = self.plan_mut()?;
        planner::split_into_days(plan, week_number, meal, position, &config)
    }

    /// Shopping list for one week of the current plan.
    pub fn shopping_list(&self, week_number: u32) -> Option<ShoppingList> {
        generate_shopping_list(self.plan.as_ref()?, week_number, &self.catalog)
    }
}

/// `candidate`, nudged forward if it does not come after `previous`.
fn later_than(previous: DateTime<Utc>, candidate: DateTime<Utc>) -> DateTime<Utc> {
    if candidate > previous {
        candidate
    } else {
        previous + Duration::microseconds(1)
    }
}
