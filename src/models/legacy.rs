use serde::{Deserialize, Serialize};

/// The retired day-by-day plan layout: seven days per week, each with
/// its own lunch and dinner slots, many of them leftovers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyPlan {
    pub weeks: Vec<LegacyWeek>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyWeek {
    pub week_number: u32,
    pub days: Vec<LegacyDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyDay {
    pub name: String,

    #[serde(default)]
    pub meals: Vec<LegacyMeal>,

    /// "Batch Day", "Flexible", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMeal {
    #[serde(rename = "type")]
    pub meal_type: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,

    /// Slot served from a batch cooked on an earlier day.
    #[serde(default)]
    pub is_leftover: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_recipe_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
}

impl LegacyPlan {
    /// Meals that cook a fresh recipe rather than reuse leftovers.
    pub fn cooked_meal_count(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|w| &w.days)
            .flat_map(|d| &d.meals)
            .filter(|m| !m.is_leftover && m.recipe_id.is_some())
            .count()
    }
}
