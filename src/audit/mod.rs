pub mod evaluation;
pub mod output;

pub use evaluation::{AuditSummary, PlanMetrics, evaluate_plan, run_audit};
pub use output::{print_summary, print_top_recipes, write_csv, write_summary_json};
