mod manager;
mod persistence;

pub use manager::AppState;
pub use persistence::{
    CONFIG_KEY, PLAN_DATE_KEY, PLAN_KEY, SavedPlan, StateStore, load_catalog,
};
