pub mod audit;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod shopping;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{BatchItem, Plan, PlanConfig, Recipe, Week};
