use serde::{Deserialize, Serialize};

/// Household and planning settings, read at generation time.
///
/// Missing keys in a persisted blob fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanConfig {
    pub adults: u32,

    pub children: u32,

    /// Lunch portions cooked in the weekly lunch batch.
    pub lunch_portions: u32,

    /// Distinct dinner recipes per week.
    pub dinner_recipes: u32,

    pub weekend_family_meals: bool,

    /// Persisted and editable, not consulted by generation.
    pub child_separate_weekdays: bool,

    pub number_of_weeks: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 1,
            lunch_portions: 10,
            dinner_recipes: 3,
            weekend_family_meals: true,
            child_separate_weekdays: true,
            number_of_weeks: 1,
        }
    }
}

impl PlanConfig {
    /// Head count used when sizing generated dinner batches.
    pub fn household_size(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }

    /// Per-day portions when editing: a child eats half an adult portion.
    pub fn portions_per_day(&self) -> f64 {
        self.adults as f64 + self.children as f64 * 0.5
    }

    /// `ceil(portions_per_day * days)`, computed in halves to stay exact.
    pub fn portions_for_days(&self, days: usize) -> u32 {
        let days = u32::try_from(days).unwrap_or(u32::MAX);
        let halves = self
            .adults
            .saturating_mul(2)
            .saturating_add(self.children)
            .saturating_mul(days);
        halves.div_ceil(2)
    }

    pub fn weeks_to_plan(&self) -> u32 {
        self.number_of_weeks.max(1)
    }

    /// e.g. "2 adults + 1 child", "1 adult + no children".
    pub fn household_summary(&self) -> String {
        let adults = if self.adults == 1 {
            "1 adult".to_string()
        } else {
            format!("{} adults", self.adults)
        };
        let children = match self.children {
            0 => "no children".to_string(),
            1 => "1 child".to_string(),
            n => format!("{} children", n),
        };
        format!("{} + {}", adults, children)
    }
}
