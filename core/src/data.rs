use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::{
    ActivityLevel, FoodRecord, MinNutritionRatio, validate_activity_level, validate_food_record,
    validate_min_ratio,
};

/// File names the reference tables are read from, both for the embedded
/// defaults and inside a user data directory.
pub const FOODS_FILE: &str = "dry-foods.json";
pub const ACTIVITIES_FILE: &str = "activity-levels.json";
pub const MIN_RATIO_FILE: &str = "min-nutrition.json";

/// The immutable reference tables: dry foods, activity coefficients, and
/// the minimum nutrition ratios. Loaded once at startup, validated, and
/// passed by reference into the session and the presentation layer.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub foods: Vec<FoodRecord>,
    pub activity_levels: Vec<ActivityLevel>,
    pub min_ratio: MinNutritionRatio,
}

impl ReferenceData {
    /// Load the tables embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_documents(
            include_str!("../data/dry-foods.json"),
            include_str!("../data/activity-levels.json"),
            include_str!("../data/min-nutrition.json"),
        )
        .context("Built-in reference data is invalid")
    }

    /// Load the three table files from a directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| -> Result<String> {
            let path = dir.join(name);
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
        };
        Self::from_documents(
            &read(FOODS_FILE)?,
            &read(ACTIVITIES_FILE)?,
            &read(MIN_RATIO_FILE)?,
        )
        .with_context(|| format!("Invalid reference data in {}", dir.display()))
    }

    /// True when `dir` holds all three table files.
    #[must_use]
    pub fn dir_is_populated(dir: &Path) -> bool {
        [FOODS_FILE, ACTIVITIES_FILE, MIN_RATIO_FILE]
            .iter()
            .all(|name| dir.join(name).is_file())
    }

    fn from_documents(foods: &str, activities: &str, min_ratio: &str) -> Result<Self> {
        let foods: Vec<FoodRecord> =
            serde_json::from_str(foods).with_context(|| format!("Failed to parse {FOODS_FILE}"))?;
        let activity_levels: Vec<ActivityLevel> = serde_json::from_str(activities)
            .with_context(|| format!("Failed to parse {ACTIVITIES_FILE}"))?;
        let min_ratio: MinNutritionRatio = serde_json::from_str(min_ratio)
            .with_context(|| format!("Failed to parse {MIN_RATIO_FILE}"))?;

        let data = Self {
            foods,
            activity_levels,
            min_ratio,
        };
        data.validate()?;
        Ok(data)
    }

    // There is no partial load: any bad record fails the whole table.
    fn validate(&self) -> Result<()> {
        let mut food_ids = HashSet::new();
        for food in &self.foods {
            validate_food_record(food)
                .with_context(|| format!("Invalid food record {}", food.id))?;
            if !food_ids.insert(food.id) {
                bail!("Duplicate food id {}", food.id);
            }
        }

        let mut level_ids = HashSet::new();
        for level in &self.activity_levels {
            validate_activity_level(level)
                .with_context(|| format!("Invalid activity level {}", level.id))?;
            if !level_ids.insert(level.id) {
                bail!("Duplicate activity level id {}", level.id);
            }
        }

        validate_min_ratio(&self.min_ratio).context("Invalid minimum nutrition ratios")?;
        Ok(())
    }

    /// Look up a food by id.
    #[must_use]
    pub fn food_by_id(&self, id: i64) -> Option<&FoodRecord> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Look up an activity level by id.
    #[must_use]
    pub fn activity_by_id(&self, id: i64) -> Option<&ActivityLevel> {
        self.activity_levels.iter().find(|a| a.id == id)
    }
}
