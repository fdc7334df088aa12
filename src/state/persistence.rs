use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde_json::Value;

use crate::error::{PlanError, Result};
use crate::models::{LegacyPlan, Plan, PlanConfig, Recipe, RecipeCatalog};

/// Key holding the current plan.
pub const PLAN_KEY: &str = "meal_plan";

/// Key holding when the plan was last saved.
pub const PLAN_DATE_KEY: &str = "meal_plan_date";

/// Key holding the household/planning config.
pub const CONFIG_KEY: &str = "meal_plan_config";

/// Load the recipe catalog from a `{ "recipes": [...] }` JSON document.
///
/// Duplicate ids keep the first position but the last record wins.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| PlanError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
    let catalog: RecipeCatalog = serde_json::from_str(&content)
        .map_err(|e| PlanError::CatalogLoad(format!("{}: {}", path.display(), e)))?;

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut recipes: Vec<Recipe> = Vec::with_capacity(catalog.recipes.len());
    for recipe in catalog.recipes {
        match positions.get(&recipe.id) {
            Some(&pos) => {
                warn!("Duplicate recipe id '{}', keeping the later record", recipe.id);
                recipes[pos] = recipe;
            }
            None => {
                positions.insert(recipe.id.clone(), recipes.len());
                recipes.push(recipe);
            }
        }
    }

    info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// A persisted plan blob, classified by layout at the load boundary.
#[derive(Debug, Clone)]
pub enum SavedPlan {
    /// Current layout: weeks of lunch/dinner batch lists.
    Batch(Plan),
    /// Retired day-by-day layout.
    LegacyDaily(LegacyPlan),
}

impl SavedPlan {
    /// Classify a stored blob. `None` means unparseable or structurally invalid.
    ///
    /// A batch plan needs a non-empty week list whose first week has both
    /// `lunches` and `dinners` lists.
    pub fn classify(blob: &str) -> Option<SavedPlan> {
        let value: Value = serde_json::from_str(blob).ok()?;
        let first_week = value.get("weeks")?.as_array()?.first()?;

        let has_list = |key: &str| first_week.get(key).is_some_and(Value::is_array);

        if has_list("lunches") && has_list("dinners") {
            serde_json::from_value(value).ok().map(SavedPlan::Batch)
        } else if has_list("days") {
            serde_json::from_value(value).ok().map(SavedPlan::LegacyDaily)
        } else {
            None
        }
    }

    /// The plan consumers can use. Legacy plans are rejected: they carry no
    /// batch sizes to migrate from.
    pub fn into_current(self) -> Option<Plan> {
        match self {
            SavedPlan::Batch(plan) => Some(plan),
            SavedPlan::LegacyDaily(legacy) => {
                info!(
                    "Discarding legacy day-by-day plan ({} weeks, {} cooked meals)",
                    legacy.weeks.len(),
                    legacy.cooked_meal_count()
                );
                None
            }
        }
    }
}

/// Directory-backed key-value store, one JSON file per key.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Raw blob for `key`, if stored.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Saved config, or defaults when absent or unreadable as JSON.
    pub fn load_config(&self) -> Result<PlanConfig> {
        let Some(blob) = self.get(CONFIG_KEY)? else {
            return Ok(PlanConfig::default());
        };
        match serde_json::from_str(&blob) {
            Ok(config) => {
                debug!("Loaded config: {:?}", config);
                Ok(config)
            }
            Err(e) => {
                warn!("Ignoring corrupt config ({}), using defaults", e);
                Ok(PlanConfig::default())
            }
        }
    }

    pub fn save_config(&self, config: &PlanConfig) -> Result<()> {
        self.set(CONFIG_KEY, &serde_json::to_string_pretty(config)?)?;
        debug!("Saved config to {}", self.dir.display());
        Ok(())
    }

    /// Saved plan in the current layout.
    ///
    /// Anything else stored under the plan key is removed and treated as absent.
    pub fn load_plan(&self) -> Result<Option<Plan>> {
        let Some(blob) = self.get(PLAN_KEY)? else {
            return Ok(None);
        };

        let plan = match SavedPlan::classify(&blob) {
            Some(saved) => saved.into_current(),
            None => {
                info!("Invalid saved plan structure, clearing");
                None
            }
        };

        if plan.is_none() {
            self.remove(PLAN_KEY)?;
        }
        Ok(plan)
    }

    /// Persist the plan and stamp the save time.
    pub fn save_plan(&self, plan: &Plan) -> Result<()> {
        self.set(PLAN_KEY, &serde_json::to_string_pretty(plan)?)?;
        self.set(PLAN_DATE_KEY, &serde_json::to_string(&Utc::now())?)?;
        Ok(())
    }

    /// When the plan was last saved.
    pub fn plan_saved_at(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .get(PLAN_DATE_KEY)?
            .and_then(|blob| serde_json::from_str(&blob).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const LEGACY_PLAN: &str = r#"{
        "weeks": [{
            "weekNumber": 1,
            "days": [
                {"name": "Sunday", "special": "Batch Day", "meals": [
                    {"type": "Lunch", "name": "Leftovers", "isLeftover": true},
                    {"type": "Dinner", "name": "Roast", "recipeId": "roast", "protein": "beef"}
                ]}
            ]
        }]
    }"#;

    #[test]
    fn test_load_catalog_dedupes_ids() {
        let json = r#"{"recipes": [
            {"id": "a", "name": "First A", "protein": "beef"},
            {"id": "b", "name": "B", "protein": "fish", "servings": "4-6"},
            {"id": "a", "name": "Second A", "protein": "lamb"}
        ]}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let recipes = load_catalog(file.path()).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "Second A");
        assert_eq!(recipes[1].id, "b");
    }

    #[test]
    fn test_load_catalog_requires_top_level_key() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"id": "a", "name": "A", "protein": "beef"}]"#).unwrap();
        assert!(matches!(load_catalog(file.path()), Err(PlanError::CatalogLoad(_))));

        let missing = load_catalog("/definitely/not/here.json");
        assert!(matches!(missing, Err(PlanError::CatalogLoad(_))));
    }

    #[test]
    fn test_classify_legacy_plan() {
        let saved = SavedPlan::classify(LEGACY_PLAN).unwrap();
        match &saved {
            SavedPlan::LegacyDaily(legacy) => assert_eq!(legacy.cooked_meal_count(), 1),
            SavedPlan::Batch(_) => panic!("expected legacy plan"),
        }
        assert!(saved.into_current().is_none());
    }

    #[test]
    fn test_classify_rejects_bad_structure() {
        assert!(SavedPlan::classify("not json").is_none());
        assert!(SavedPlan::classify(r#"{"weeks": []}"#).is_none());
        assert!(SavedPlan::classify(r#"{"weeks": [{"lunches": []}]}"#).is_none());
        assert!(SavedPlan::classify(r#"{"plan": 1}"#).is_none());
    }

    #[test]
    fn test_config_defaults_when_missing_or_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        assert_eq!(store.load_config().unwrap(), PlanConfig::default());

        store.set(CONFIG_KEY, "{broken").unwrap();
        assert_eq!(store.load_config().unwrap(), PlanConfig::default());

        let config = PlanConfig {
            adults: 3,
            ..PlanConfig::default()
        };
        store.save_config(&config).unwrap();
        assert_eq!(store.load_config().unwrap(), config);
    }

    #[test]
    fn test_legacy_plan_is_cleared_on_load() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        store.set(PLAN_KEY, LEGACY_PLAN).unwrap();

        assert!(store.load_plan().unwrap().is_none());
        assert!(store.get(PLAN_KEY).unwrap().is_none());
    }
}
