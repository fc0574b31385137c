use anyhow::Result;

use kibble_core::data::ReferenceData;
use kibble_core::session::Session;

use super::chart::render_chart;
use super::helpers::{check_body_weight, check_feeding_weight, format_grams, format_kcal};
use super::{resolve_activity, resolve_food};

pub(crate) fn cmd_ration(
    data: &ReferenceData,
    weight_kg: f64,
    activity: &str,
    food: Option<&str>,
    grams: f64,
    json: bool,
) -> Result<()> {
    check_body_weight(weight_kg)?;
    check_feeding_weight(grams)?;
    let level = resolve_activity(data, activity)?;
    let food = food.map(|query| resolve_food(data, query)).transpose()?;

    let mut session = Session::new(data);
    session.set_body_weight(weight_kg);
    session.set_activity_level(level.id);
    if let Some(f) = food {
        session.set_food_selection(f.id);
    }
    session.set_feeding_weight(grams);
    session.recompute_der();

    let report = session.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let name = &level.name;
    let coefficient = level.coefficient;
    println!("=== Daily ration ===\n");
    println!("  Body weight:        {weight_kg:.1} kg");
    println!("  Activity:           {name} (x{coefficient:.1})");
    println!(
        "  Daily energy:       {}",
        format_kcal(report.daily_energy_kcal)
    );
    println!(
        "  Required protein:   {}",
        format_grams(report.required_protein_g)
    );
    println!(
        "  Required fat:       {}",
        format_grams(report.required_fat_g)
    );
    println!();

    if let Some(f) = &report.food {
        let food_name = f.name.as_deref().unwrap_or("?");
        println!("  Food:               {food_name}");
        println!(
            "  Feeding weight:     {}",
            format_grams(report.feeding_weight_g)
        );
    } else {
        println!("  No food selected");
    }
    println!(
        "  Supplied energy:    {}",
        format_kcal(report.supplied_calories_kcal)
    );
    println!(
        "  Supplied protein:   {}",
        format_grams(report.supplied_protein_g)
    );
    println!(
        "  Supplied fat:       {}",
        format_grams(report.supplied_fat_g)
    );
    if report.suggested_portion_g > 0.0 {
        println!(
            "  Suggested portion:  {} per day",
            format_grams(report.suggested_portion_g)
        );
    }

    println!();
    print!("{}", render_chart(&report));

    Ok(())
}
