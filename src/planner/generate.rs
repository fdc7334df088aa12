use chrono::Utc;
use log::info;
use rand::Rng;

use crate::models::{Plan, PlanConfig, Recipe};
use crate::planner::week::plan_week;

/// Generate a full plan: one independent week per configured week.
///
/// No state crosses week boundaries, so weeks may repeat recipes.
pub fn generate_plan<R: Rng + ?Sized>(catalog: &[Recipe], config: &PlanConfig, rng: &mut R) -> Plan {
    let mut weeks = Vec::with_capacity(config.weeks_to_plan() as usize);
    for n in 1..=config.weeks_to_plan() {
        weeks.push(plan_week(catalog, config, n, rng));
    }

    let plan = Plan {
        weeks,
        config: config.clone(),
        generated_at: Utc::now(),
    };

    info!(
        "Generated {}-week plan from {} recipes at {}",
        plan.weeks.len(),
        catalog.len(),
        plan.generated_at
    );

    plan
}
