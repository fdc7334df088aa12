use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Base servings assumed when a recipe does not state a usable figure.
pub const DEFAULT_BASE_SERVINGS: u32 = 4;

/// Primary meat/fish classification used to enforce dinner variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protein {
    Chicken,
    Beef,
    Pork,
    Lamb,
    Fish,
    #[serde(other)]
    Other,
}

impl Protein {
    pub const ALL: [Protein; 6] = [
        Protein::Chicken,
        Protein::Beef,
        Protein::Pork,
        Protein::Lamb,
        Protein::Fish,
        Protein::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protein::Chicken => "chicken",
            Protein::Beef => "beef",
            Protein::Pork => "pork",
            Protein::Lamb => "lamb",
            Protein::Fish => "fish",
            Protein::Other => "other",
        }
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protein {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Protein::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| PlanError::InvalidInput(format!("Unknown protein: {}", s)))
    }
}

/// Servings as written in the catalog: a plain count, a fractional
/// amount, or free text like "4-6".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Servings {
    Count(u32),
    Amount(f64),
    Text(String),
}

impl Servings {
    /// The figure a batch multiplier is measured against.
    ///
    /// Amounts are floored, text takes its first integer ("4-6" -> 4);
    /// anything unusable falls back to 4.
    pub fn base(&self) -> u32 {
        let base = match self {
            Servings::Count(n) => *n,
            Servings::Amount(x) => x.floor() as u32,
            Servings::Text(text) => text
                .split(|c: char| !c.is_ascii_digit())
                .find(|part| !part.is_empty())
                .and_then(|digits| digits.parse().ok())
                .unwrap_or(DEFAULT_BASE_SERVINGS),
        };
        if base == 0 { DEFAULT_BASE_SERVINGS } else { base }
    }
}

impl Default for Servings {
    fn default() -> Self {
        Servings::Count(DEFAULT_BASE_SERVINGS)
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Servings::Count(n) => write!(f, "{}", n),
            Servings::Amount(x) => write!(f, "{}", x),
            Servings::Text(text) => f.write_str(text),
        }
    }
}

/// A catalog recipe. Reference data: the planner only ever points at it by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub name: String,

    pub protein: Protein,

    #[serde(default)]
    pub servings: Servings,

    #[serde(default)]
    pub prep_time: String,

    #[serde(default)]
    pub cook_time: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Recipe {
    /// Whether the recipe carries at least one of `tags`.
    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        self.tags.iter().any(|t| tags.contains(&t.as_str()))
    }
}

/// On-disk catalog document: the recipe list lives under a top-level key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCatalog {
    pub recipes: Vec<Recipe>,
}
