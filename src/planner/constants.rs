use crate::models::Protein;

// ─────────────────────────────────────────────────────────────────────────────
// Recipe tags
// ─────────────────────────────────────────────────────────────────────────────

pub const TAG_BATCH_COOKING: &str = "batch-cooking";
pub const TAG_FREEZER_FRIENDLY: &str = "freezer-friendly";
pub const TAG_WEEKNIGHT: &str = "weeknight";
pub const TAG_SUNDAY_SPECIAL: &str = "sunday-special";
pub const TAG_FAMILY_FAVORITE: &str = "family-favorite";

/// Tags wanted for the weekly lunch batch.
pub const LUNCH_TAGS: [&str; 2] = [TAG_BATCH_COOKING, TAG_FREEZER_FRIENDLY];

/// Tags wanted for an ordinary dinner run.
pub const DINNER_TAGS: [&str; 2] = [TAG_BATCH_COOKING, TAG_WEEKNIGHT];

/// Tags wanted for a dinner run that is a weekend family meal.
pub const FAMILY_DINNER_TAGS: [&str; 2] = [TAG_SUNDAY_SPECIAL, TAG_FAMILY_FAVORITE];

// ─────────────────────────────────────────────────────────────────────────────
// Week layout
// ─────────────────────────────────────────────────────────────────────────────

/// Protein nudged into the first dinner run of every week.
pub const PREFERRED_FIRST_DINNER_PROTEIN: Protein = Protein::Fish;

/// Bounds on dinner runs: at least one recipe, at most one per day.
pub const MIN_DINNER_RUNS: usize = 1;
pub const MAX_DINNER_RUNS: usize = 7;
