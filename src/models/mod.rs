pub mod config;
pub mod legacy;
pub mod plan;
pub mod recipe;

pub use config::PlanConfig;
pub use legacy::{LegacyDay, LegacyMeal, LegacyPlan, LegacyWeek};
pub use plan::{BatchItem, CookingTime, Day, MealType, Plan, Week};
pub use recipe::{Protein, Recipe, RecipeCatalog, Servings};
