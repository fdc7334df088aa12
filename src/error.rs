use thiserror::Error;

use crate::models::MealType;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to load recipe catalog: {0}")]
    CatalogLoad(String),

    #[error("No meal plan yet, generate one first")]
    NoPlan,

    #[error("Week not found: {0}")]
    WeekNotFound(u32),

    #[error("No {meal} item at position {index}")]
    ItemNotFound { meal: MealType, index: usize },

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Please select at least one day")]
    EmptyDaySelection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
