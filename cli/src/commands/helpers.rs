use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use kibble_core::models::{ActivityLevel, FoodRecord};

/// Display format for energy values: one decimal, unit glued on.
pub(crate) fn format_kcal(v: f64) -> String {
    format!("{v:.1}kcal")
}

/// Display format for weight values: one decimal, unit glued on.
pub(crate) fn format_grams(v: f64) -> String {
    format!("{v:.1}g")
}

/// Validate a body-weight argument. Zero is legal (the requirement is then
/// zero); negatives and non-numbers are not.
pub(crate) fn check_body_weight(weight_kg: f64) -> Result<()> {
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        bail!("Body weight must be a non-negative number of kilograms");
    }
    Ok(())
}

/// Validate a feeding-weight argument.
pub(crate) fn check_feeding_weight(grams: f64) -> Result<()> {
    if !grams.is_finite() || grams < 0.0 {
        bail!("Feeding weight must be a non-negative number of grams");
    }
    Ok(())
}

pub(crate) fn prompt_choice(noun: &str, count: usize) -> Result<usize> {
    eprint!("\nSelect a {noun} (1-{count}): ");
    io::stderr().flush()?;
    let stdin = io::stdin();
    let line = stdin.lock().lines().next().context("No input")??;
    let n: usize = line.trim().parse().context("Invalid number")?;
    if n < 1 || n > count {
        bail!("Selection out of range");
    }
    Ok(n - 1)
}

pub(crate) fn print_food_table(foods: &[&FoodRecord]) {
    #[derive(Tabled)]
    struct FoodRow {
        #[tabled(rename = "#")]
        idx: usize,
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

    let rows: Vec<FoodRow> = foods
        .iter()
        .enumerate()
        .map(|(i, f)| FoodRow {
            idx: i + 1,
            id: f.id,
            name: truncate(f.name.as_deref().unwrap_or(""), 35),
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
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

pub(crate) fn print_activity_table(levels: &[&ActivityLevel]) {
    #[derive(Tabled)]
    struct ActivityRow {
        #[tabled(rename = "#")]
        idx: usize,
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Coefficient")]
        coefficient: String,
    }

    let rows: Vec<ActivityRow> = levels
        .iter()
        .enumerate()
        .map(|(i, a)| ActivityRow {
            idx: i + 1,
            id: a.id,
            name: truncate(&a.name, 35),
            coefficient: format!("{:.1}", a.coefficient),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

pub(crate) fn fmt_opt(v: Option<f64>) -> String {
    v.map_or("-".into(), |v| format!("{v:.1}"))
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let end = s.char_indices().nth(max - 3).map_or(s.len(), |(i, _)| i);
        format!("{}...", &s[..end])
    }
}
