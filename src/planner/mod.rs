pub mod constants;
pub mod duration;
pub mod edits;
pub mod generate;
pub mod selection;
pub mod week;

pub use constants::*;
pub use duration::{format_duration, parse_duration};
pub use edits::{normalize_days, reassign_days, split_into_days, swap_recipe};
pub use generate::generate_plan;
pub use selection::{SelectionCriteria, candidates, select_recipe};
pub use week::{batch_item, partition_days, plan_week};
