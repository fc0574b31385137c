use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// One row of the dry-food table.
///
/// Nutrient fields are percent of dry matter; `calories` is kcal per 100g.
/// Any analysis value may be missing from the source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: i64,
    pub name: Option<String>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub moisture: Option<f64>,
    // Older data files abbreviate phosphorus as "P".
    #[serde(alias = "P")]
    pub phosphorus: Option<f64>,
    pub calories: Option<f64>,
}

/// An activity category and its multiplier over the resting energy
/// requirement (e.g. neutered adult = 1.6, growth = 3.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLevel {
    pub id: i64,
    pub name: String,
    pub coefficient: f64,
}

/// Minimum share of daily caloric intake that must come from each
/// macronutrient, in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MinNutritionRatio {
    pub protein: f64,
    pub fat: f64,
}

// --- Selector types ---

/// A `(label, value)` pair for populating a selector widget; `value` is the
/// record id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: i64,
}

/// A reference-table row that can populate a selector.
pub trait Named {
    fn id(&self) -> i64;
    fn name(&self) -> Option<&str>;
}

impl Named for FoodRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Named for ActivityLevel {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Map reference rows to selector options. Unnamed rows get an empty label.
#[must_use]
pub fn to_options<T: Named>(rows: &[T]) -> Vec<SelectOption> {
    rows.iter()
        .map(|row| SelectOption {
            label: row.name().unwrap_or_default().to_string(),
            value: row.id(),
        })
        .collect()
}

// --- Report types ---

/// Snapshot of every value the ration panel displays. Built by
/// `Session::report`; consumed by the text panel, the chart, and `--json`
/// output.
#[derive(Debug, Clone, Serialize)]
pub struct RationReport {
    pub body_weight_kg: f64,
    pub activity: Option<ActivityLevel>,
    pub food: Option<FoodRecord>,
    pub feeding_weight_g: f64,
    pub daily_energy_kcal: f64,
    pub required_protein_g: f64,
    pub required_fat_g: f64,
    pub supplied_calories_kcal: f64,
    pub supplied_protein_g: f64,
    pub supplied_fat_g: f64,
    pub suggested_portion_g: f64,
}

// --- Load-time validation ---

/// Validate a food record: percent-basis fields must lie in 0..=100 and
/// calories must not be negative, wherever present.
pub fn validate_food_record(food: &FoodRecord) -> Result<()> {
    for (field, value) in [
        ("protein", food.protein),
        ("carbohydrates", food.carbohydrates),
        ("fat", food.fat),
        ("fiber", food.fiber),
        ("moisture", food.moisture),
        ("phosphorus", food.phosphorus),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || !(0.0..=100.0).contains(&v) {
                bail!("{field} must be between 0 and 100 (got {v})");
            }
        }
    }
    if let Some(cal) = food.calories {
        if !cal.is_finite() || cal < 0.0 {
            bail!("calories must not be negative (got {cal})");
        }
    }
    Ok(())
}

/// Validate an activity level: name must not be empty, coefficient must be
/// a positive finite multiplier.
pub fn validate_activity_level(level: &ActivityLevel) -> Result<()> {
    if level.name.trim().is_empty() {
        bail!("Activity level name must not be empty");
    }
    let c = level.coefficient;
    if !c.is_finite() || c <= 0.0 {
        bail!("coefficient must be greater than 0 (got {c})");
    }
    Ok(())
}

/// Validate the minimum nutrition ratios: both shares must lie in 0..=100.
pub fn validate_min_ratio(ratio: &MinNutritionRatio) -> Result<()> {
    for (field, v) in [("protein", ratio.protein), ("fat", ratio.fat)] {
        if !v.is_finite() || !(0.0..=100.0).contains(&v) {
            bail!("minimum {field} ratio must be between 0 and 100 (got {v})");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodRecord {
        FoodRecord {
            id: 1,
            name: Some("Adult Chicken & Rice".to_string()),
            protein: Some(25.0),
            carbohydrates: Some(45.0),
            fat: Some(15.0),
            fiber: Some(3.0),
            moisture: Some(10.0),
            phosphorus: Some(1.0),
            calories: Some(350.0),
        }
    }

    #[test]
    fn test_validate_food_record_valid() {
        assert!(validate_food_record(&sample_food()).is_ok());
    }

    #[test]
    fn test_validate_food_record_all_fields_absent() {
        let food = FoodRecord {
            id: 2,
            name: None,
            protein: None,
            carbohydrates: None,
            fat: None,
            fiber: None,
            moisture: None,
            phosphorus: None,
            calories: None,
        };
        assert!(validate_food_record(&food).is_ok());
    }

    #[test]
    fn test_validate_food_record_percent_out_of_range() {
        let mut food = sample_food();
        food.protein = Some(101.0);
        assert!(validate_food_record(&food).is_err());

        let mut food = sample_food();
        food.fat = Some(-0.1);
        assert!(validate_food_record(&food).is_err());
    }

    #[test]
    fn test_validate_food_record_non_finite() {
        let mut food = sample_food();
        food.moisture = Some(f64::NAN);
        assert!(validate_food_record(&food).is_err());

        let mut food = sample_food();
        food.calories = Some(f64::INFINITY);
        assert!(validate_food_record(&food).is_err());
    }

    #[test]
    fn test_validate_food_record_negative_calories() {
        let mut food = sample_food();
        food.calories = Some(-50.0);
        assert!(validate_food_record(&food).is_err());
    }

    #[test]
    fn test_validate_activity_level() {
        let level = ActivityLevel {
            id: 1,
            name: "Neutered adult".to_string(),
            coefficient: 1.6,
        };
        assert!(validate_activity_level(&level).is_ok());

        let empty = ActivityLevel {
            name: "  ".to_string(),
            ..level.clone()
        };
        assert!(validate_activity_level(&empty).is_err());

        let zero = ActivityLevel {
            coefficient: 0.0,
            ..level.clone()
        };
        assert!(validate_activity_level(&zero).is_err());

        let nan = ActivityLevel {
            coefficient: f64::NAN,
            ..level
        };
        assert!(validate_activity_level(&nan).is_err());
    }

    #[test]
    fn test_validate_min_ratio() {
        assert!(
            validate_min_ratio(&MinNutritionRatio {
                protein: 18.0,
                fat: 5.5
            })
            .is_ok()
        );
        assert!(
            validate_min_ratio(&MinNutritionRatio {
                protein: 0.0,
                fat: 100.0
            })
            .is_ok()
        );
        assert!(
            validate_min_ratio(&MinNutritionRatio {
                protein: 100.5,
                fat: 5.5
            })
            .is_err()
        );
        assert!(
            validate_min_ratio(&MinNutritionRatio {
                protein: 18.0,
                fat: -1.0
            })
            .is_err()
        );
    }

    #[test]
    fn test_to_options_maps_label_and_value() {
        let levels = vec![
            ActivityLevel {
                id: 3,
                name: "Intact adult".to_string(),
                coefficient: 1.8,
            },
            ActivityLevel {
                id: 4,
                name: "Neutered adult".to_string(),
                coefficient: 1.6,
            },
        ];
        let options = to_options(&levels);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Intact adult");
        assert_eq!(options[0].value, 3);
        assert_eq!(options[1].label, "Neutered adult");
        assert_eq!(options[1].value, 4);
    }

    #[test]
    fn test_to_options_unnamed_food_gets_empty_label() {
        let mut food = sample_food();
        food.name = None;
        let options = to_options(&[food]);
        assert_eq!(options[0].label, "");
        assert_eq!(options[0].value, 1);
    }

    #[test]
    fn test_food_record_accepts_p_alias_for_phosphorus() {
        let json = r#"{
            "id": 7,
            "name": "Senior Light",
            "protein": 20.0,
            "carbohydrates": 50.0,
            "fat": 10.0,
            "fiber": 4.5,
            "moisture": 10.0,
            "P": 0.8,
            "calories": 330.0
        }"#;
        let food: FoodRecord = serde_json::from_str(json).unwrap();
        assert!((food.phosphorus.unwrap() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_food_record_missing_fields_deserialize_as_none() {
        let json = r#"{ "id": 9, "name": null, "calories": 360.0 }"#;
        let food: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, 9);
        assert!(food.name.is_none());
        assert!(food.protein.is_none());
        assert!((food.calories.unwrap() - 360.0).abs() < f64::EPSILON);
    }
}
