pub mod prompts;
pub mod render;

pub use prompts::{fuzzy_matches, prompt_config, prompt_recipe, prompt_u32, prompt_yes_no};
pub use render::{
    days_label, display_config, display_plan, display_recipe, display_recipe_list,
    display_shopping_list, display_week, portions_label,
};
