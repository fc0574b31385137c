use anyhow::Result;
use serde::Serialize;

use kibble_core::data::ReferenceData;
use kibble_core::engine;
use kibble_core::models::ActivityLevel;
use kibble_core::session::Session;

use super::helpers::{check_body_weight, format_kcal};
use super::resolve_activity;

pub(crate) fn cmd_energy(
    data: &ReferenceData,
    weight_kg: f64,
    activity: &str,
    json: bool,
) -> Result<()> {
    check_body_weight(weight_kg)?;
    let level = resolve_activity(data, activity)?;

    let mut session = Session::new(data);
    session.set_body_weight(weight_kg);
    session.set_activity_level(level.id);
    session.recompute_der();

    let resting = engine::resting_energy_kcal(weight_kg);
    let daily = session.der_kcal();

    if json {
        #[derive(Serialize)]
        struct EnergyReport<'a> {
            body_weight_kg: f64,
            activity: &'a ActivityLevel,
            resting_energy_kcal: f64,
            daily_energy_kcal: f64,
        }
        let report = EnergyReport {
            body_weight_kg: weight_kg,
            activity: level,
            resting_energy_kcal: resting,
            daily_energy_kcal: daily,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let name = &level.name;
    let coefficient = level.coefficient;
    println!("=== Daily energy requirement ===\n");
    println!("  Body weight:  {weight_kg:.1} kg");
    println!("  Activity:     {name} (x{coefficient:.1})");
    println!("  RER:          {}", format_kcal(resting));
    println!("  DER:          {}", format_kcal(daily));

    Ok(())
}
