use anyhow::Result;
use std::process;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use kibble_core::data::ReferenceData;
use kibble_core::models::to_options;

use super::helpers::{fmt_opt, truncate};

/// List the dry-food table, one row per selector option.
pub(crate) fn cmd_foods(data: &ReferenceData, json: bool) -> Result<()> {
    #[derive(Tabled)]
    struct FoodRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Protein %")]
        protein: String,
        #[tabled(rename = "Carbs %")]
        carbs: String,
        #[tabled(rename = "Fat %")]
        fat: String,
        #[tabled(rename = "Fiber %")]
        fiber: String,
        #[tabled(rename = "Moisture %")]
        moisture: String,
        #[tabled(rename = "P %")]
        phosphorus: String,
        #[tabled(rename = "Cal/100g")]
        calories: String,
    }

    if data.foods.is_empty() {
        if json {
            println!("[]");
        } else {
            eprintln!("No foods in the reference table");
        }
        process::exit(2);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&data.foods)?);
    } else {
        let options = to_options(&data.foods);
        let rows: Vec<FoodRow> = options
            .iter()
            .zip(&data.foods)
            .map(|(option, f)| FoodRow {
                id: option.value,
                name: truncate(&option.label, 35),
                protein: fmt_opt(f.protein),
                carbs: fmt_opt(f.carbohydrates),
                fat: fmt_opt(f.fat),
                fiber: fmt_opt(f.fiber),
                moisture: fmt_opt(f.moisture),
                phosphorus: fmt_opt(f.phosphorus),
                calories: f.calories.map_or("-".into(), |v| format!("{v:.0}")),
            })
            .collect();

        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
            .to_string();
        println!("{table}");
    }

    Ok(())
}

/// List the activity-level table, one row per selector option.
pub(crate) fn cmd_activities(data: &ReferenceData, json: bool) -> Result<()> {
    #[derive(Tabled)]
    struct ActivityRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Coefficient")]
        coefficient: String,
    }

    if data.activity_levels.is_empty() {
        if json {
            println!("[]");
        } else {
            eprintln!("No activity levels in the reference table");
        }
        process::exit(2);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&data.activity_levels)?);
    } else {
        let options = to_options(&data.activity_levels);
        let rows: Vec<ActivityRow> = options
            .iter()
            .zip(&data.activity_levels)
            .map(|(option, level)| ActivityRow {
                id: option.value,
                name: truncate(&option.label, 35),
                coefficient: format!("{:.1}", level.coefficient),
            })
            .collect();

        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
            .to_string();
        println!("{table}");
    }

    Ok(())
}
