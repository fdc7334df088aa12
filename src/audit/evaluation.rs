use std::collections::{BTreeSet, HashMap};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::{Day, Plan, PlanConfig, Protein, Recipe};
use crate::planner::generate_plan;

/// Measurements of one generated plan.
#[derive(Debug, Clone)]
pub struct PlanMetrics {
    pub run: usize,
    pub weeks: usize,
    pub lunch_items: usize,
    pub dinner_items: usize,
    /// Mean batch cooking minutes per week.
    pub avg_cooking_minutes: f64,
    /// Weeks whose first dinner run is fish.
    pub fish_first_weeks: usize,
    /// Weeks where some protein appears in more than one batch.
    pub protein_repeat_weeks: usize,
    /// Dinner days left without a batch, summed over weeks.
    pub uncovered_dinner_days: usize,
    pub recipe_ids: Vec<String>,
}

/// Aggregate over all audited plans.
#[derive(Debug, Clone)]
pub struct AuditSummary {
    pub iterations: usize,
    pub seed: u64,
    pub avg_cooking_minutes: f64,
    /// Filled lunch slots per planned week.
    pub avg_lunch_items: f64,
    /// Filled dinner slots per planned week, against `dinner_recipes` configured.
    pub avg_dinner_items: f64,
    pub configured_dinners: u32,
    /// Share of planned weeks whose first dinner is fish.
    pub fish_first_share: f64,
    pub protein_repeat_weeks: usize,
    pub uncovered_dinner_days: usize,
    /// Recipe id and how many times it was picked, most picked first.
    pub pick_counts: Vec<(String, usize)>,
    pub runs: Vec<PlanMetrics>,
}

fn protein_of(catalog: &[Recipe], recipe_id: &str) -> Option<Protein> {
    catalog.iter().find(|r| r.id == recipe_id).map(|r| r.protein)
}

/// Measure one plan against the catalog it was built from.
pub fn evaluate_plan(run: usize, plan: &Plan, catalog: &[Recipe]) -> PlanMetrics {
    let mut metrics = PlanMetrics {
        run,
        weeks: plan.weeks.len(),
        lunch_items: 0,
        dinner_items: 0,
        avg_cooking_minutes: 0.0,
        fish_first_weeks: 0,
        protein_repeat_weeks: 0,
        uncovered_dinner_days: 0,
        recipe_ids: Vec::new(),
    };
    let mut total_minutes = 0u64;

    for week in &plan.weeks {
        metrics.lunch_items += week.lunches.len();
        metrics.dinner_items += week.dinners.len();
        total_minutes += u64::from(week.total_cooking_time.total);

        let first_dinner = week.dinners.first();
        if first_dinner.and_then(|d| protein_of(catalog, &d.recipe_id)) == Some(Protein::Fish) {
            metrics.fish_first_weeks += 1;
        }

        let mut seen = Vec::new();
        let mut repeated = false;
        for item in week.all_items() {
            if let Some(protein) = protein_of(catalog, &item.recipe_id) {
                if seen.contains(&protein) {
                    repeated = true;
                }
                seen.push(protein);
            }
            metrics.recipe_ids.push(item.recipe_id.clone());
        }
        if repeated {
            metrics.protein_repeat_weeks += 1;
        }

        let covered: BTreeSet<Day> = week.dinners.iter().flat_map(|d| d.days.iter().copied()).collect();
        metrics.uncovered_dinner_days += Day::ALL.len() - covered.len();
    }

    if metrics.weeks > 0 {
        metrics.avg_cooking_minutes = total_minutes as f64 / metrics.weeks as f64;
    }
    metrics
}

/// Generate `iterations` plans from a seeded RNG and aggregate their metrics.
pub fn run_audit(catalog: &[Recipe], config: &PlanConfig, iterations: usize, seed: u64) -> AuditSummary {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut runs = Vec::with_capacity(iterations);

    for run in 0..iterations {
        let plan = generate_plan(catalog, config, &mut rng);
        runs.push(evaluate_plan(run + 1, &plan, catalog));

        if (run + 1) % 100 == 0 {
            println!("Audited {}/{} plans", run + 1, iterations);
        }
    }

    let mut picks: HashMap<String, usize> = HashMap::new();
    for id in runs.iter().flat_map(|m| m.recipe_ids.iter()) {
        *picks.entry(id.clone()).or_insert(0) += 1;
    }
    let mut pick_counts: Vec<(String, usize)> = picks.into_iter().collect();
    pick_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let n = runs.len().max(1) as f64;
    let total_weeks: usize = runs.iter().map(|m| m.weeks).sum();
    let per_week = |count: usize| {
        if total_weeks > 0 {
            count as f64 / total_weeks as f64
        } else {
            0.0
        }
    };

    AuditSummary {
        iterations,
        seed,
        avg_cooking_minutes: runs.iter().map(|m| m.avg_cooking_minutes).sum::<f64>() / n,
        avg_lunch_items: per_week(runs.iter().map(|m| m.lunch_items).sum()),
        avg_dinner_items: per_week(runs.iter().map(|m| m.dinner_items).sum()),
        configured_dinners: config.dinner_recipes,
        fish_first_share: per_week(runs.iter().map(|m| m.fish_first_weeks).sum()),
        protein_repeat_weeks: runs.iter().map(|m| m.protein_repeat_weeks).sum(),
        uncovered_dinner_days: runs.iter().map(|m| m.uncovered_dinner_days).sum(),
        pick_counts,
        runs,
    }
}
