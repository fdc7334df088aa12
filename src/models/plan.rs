use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::PlanConfig;
use crate::planner::duration::format_duration;

/// Day of the week, in natural Mon..Sun order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = PlanError;

    /// Accepts full names or three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase() == wanted || d.short_name().to_lowercase() == wanted)
            .ok_or_else(|| PlanError::InvalidInput(format!("Unknown day: {}", s)))
    }
}

/// Which batch list of a week an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Lunch,
    Dinner,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Lunch => f.write_str("lunch"),
            MealType::Dinner => f.write_str("dinner"),
        }
    }
}

/// One recipe cooked in bulk to cover a run of days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub recipe_id: String,

    /// Days served, in Mon..Sun order.
    pub days: Vec<Day>,

    pub portions: u32,

    /// Prep minutes parsed from the recipe.
    pub prep_time: u32,

    /// Cook minutes parsed from the recipe.
    pub cook_time: u32,

    #[serde(default)]
    pub is_family_meal: bool,
}

impl BatchItem {
    pub fn covers_weekend(&self) -> bool {
        self.days.iter().any(Day::is_weekend)
    }
}

/// Aggregate batch cooking time for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingTime {
    pub prep: u32,
    pub cook: u32,
    pub total: u32,
    pub formatted: String,
}

impl CookingTime {
    /// Sum prep/cook across items; `total` and `formatted` are always derived.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a BatchItem>) -> Self {
        let (prep, cook) = items
            .into_iter()
            .fold((0u32, 0u32), |(p, c), item| {
                (p.saturating_add(item.prep_time), c.saturating_add(item.cook_time))
            });
        Self::new(prep, cook)
    }

    pub fn new(prep: u32, cook: u32) -> Self {
        let total = prep.saturating_add(cook);
        Self {
            prep,
            cook,
            total,
            formatted: format_duration(total),
        }
    }
}

impl Default for CookingTime {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// A generated week: one lunch batch list and one dinner batch list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub lunches: Vec<BatchItem>,
    pub dinners: Vec<BatchItem>,
    pub total_cooking_time: CookingTime,
}

impl Week {
    pub fn new(week_number: u32, lunches: Vec<BatchItem>, dinners: Vec<BatchItem>) -> Self {
        let mut week = Self {
            week_number,
            lunches,
            dinners,
            total_cooking_time: CookingTime::default(),
        };
        week.recompute_cooking_time();
        week
    }

    /// Re-derive the time summary from the current items.
    pub fn recompute_cooking_time(&mut self) {
        self.total_cooking_time = CookingTime::from_items(self.lunches.iter().chain(&self.dinners));
    }

    pub fn items(&self, meal: MealType) -> &[BatchItem] {
        match meal {
            MealType::Lunch => &self.lunches,
            MealType::Dinner => &self.dinners,
        }
    }

    pub fn items_mut(&mut self, meal: MealType) -> &mut Vec<BatchItem> {
        match meal {
            MealType::Lunch => &mut self.lunches,
            MealType::Dinner => &mut self.dinners,
        }
    }

    /// Every batch item, lunches first.
    pub fn all_items(&self) -> impl Iterator<Item = &BatchItem> {
        self.lunches.iter().chain(&self.dinners)
    }
}

/// A full multi-week plan plus the configuration it was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub weeks: Vec<Week>,
    pub config: PlanConfig,
    pub generated_at: DateTime<Utc>,
}

impl Plan {
    /// Week by 1-based number (positional).
    pub fn week(&self, week_number: u32) -> Option<&Week> {
        let index = (week_number as usize).checked_sub(1)?;
        self.weeks.get(index)
    }

    pub fn week_mut(&mut self, week_number: u32) -> Option<&mut Week> {
        let index = (week_number as usize).checked_sub(1)?;
        self.weeks.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(prep: u32, cook: u32) -> BatchItem {
        BatchItem {
            recipe_id: "test".to_string(),
            days: vec![Day::Monday, Day::Tuesday],
            portions: 10,
            prep_time: prep,
            cook_time: cook,
            is_family_meal: false,
        }
    }

    #[test]
    fn test_day_parse() {
        assert_eq!("monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("SAT".parse::<Day>().unwrap(), Day::Saturday);
        assert_eq!(" Sunday ".parse::<Day>().unwrap(), Day::Sunday);
        assert!("funday".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_serializes_full_name() {
        assert_eq!(serde_json::to_string(&Day::Wednesday).unwrap(), "\"Wednesday\"");
    }

    #[test]
    fn test_week_total_is_prep_plus_cook() {
        let week = Week::new(1, vec![item(15, 30)], vec![item(20, 60), item(10, 0)]);
        let time = &week.total_cooking_time;
        assert_eq!(time.prep, 45);
        assert_eq!(time.cook, 90);
        assert_eq!(time.total, 135);
        assert_eq!(time.formatted, "2h 15min");
    }

    #[test]
    fn test_cooking_time_saturates_on_huge_durations() {
        let huge = crate::planner::parse_duration("80000000 hours");
        assert_eq!(huge, u32::MAX);

        let week = Week::new(1, vec![item(huge, huge)], vec![item(huge, 10)]);
        let time = &week.total_cooking_time;
        assert_eq!(time.prep, u32::MAX);
        assert_eq!(time.cook, u32::MAX);
        assert_eq!(time.total, u32::MAX);
    }

    #[test]
    fn test_plan_week_lookup_is_one_based() {
        let plan = Plan {
            weeks: vec![Week::new(1, vec![], vec![])],
            config: PlanConfig::default(),
            generated_at: Utc::now(),
        };
        assert!(plan.week(0).is_none());
        assert!(plan.week(1).is_some());
        assert!(plan.week(2).is_none());
    }

    #[test]
    fn test_batch_item_wire_format() {
        let json = serde_json::to_value(item(15, 30)).unwrap();
        assert_eq!(json["recipeId"], "test");
        assert_eq!(json["prepTime"], 15);
        assert_eq!(json["isFamilyMeal"], false);
        assert_eq!(json["days"][0], "Monday");
    }
}
