mod chart;
mod energy;
mod helpers;
mod list;
mod ration;

use anyhow::{Context, Result, bail};

use kibble_core::data::ReferenceData;
use kibble_core::models::{ActivityLevel, FoodRecord};

use helpers::{print_activity_table, print_food_table, prompt_choice};

pub(crate) use energy::cmd_energy;
pub(crate) use list::{cmd_activities, cmd_foods};
pub(crate) use ration::cmd_ration;

/// Resolve an activity level from an id or a case-insensitive name. An
/// ambiguous name prints the candidates and prompts for a numbered choice.
pub(super) fn resolve_activity<'a>(
    data: &'a ReferenceData,
    query: &str,
) -> Result<&'a ActivityLevel> {
    if let Ok(id) = query.parse::<i64>() {
        return data
            .activity_by_id(id)
            .with_context(|| format!("No activity level with id {id}"));
    }

    if let Some(level) = data
        .activity_levels
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(query))
    {
        return Ok(level);
    }

    let lowered = query.to_lowercase();
    let matches: Vec<&ActivityLevel> = data
        .activity_levels
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&lowered))
        .collect();

    match matches.len() {
        0 => bail!("No activity level found for '{query}'"),
        1 => Ok(matches[0]),
        _ => {
            print_activity_table(&matches);
            let idx = prompt_choice("activity level", matches.len())?;
            Ok(matches[idx])
        }
    }
}

/// Resolve a dry food from an id or a case-insensitive name, with the same
/// prompt flow as `resolve_activity`.
pub(super) fn resolve_food<'a>(data: &'a ReferenceData, query: &str) -> Result<&'a FoodRecord> {
    if let Ok(id) = query.parse::<i64>() {
        return data
            .food_by_id(id)
            .with_context(|| format!("No food with id {id}"));
    }

    if let Some(food) = data
        .foods
        .iter()
        .find(|f| f.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(query)))
    {
        return Ok(food);
    }

    let lowered = query.to_lowercase();
    let matches: Vec<&FoodRecord> = data
        .foods
        .iter()
        .filter(|f| {
            f.name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&lowered))
        })
        .collect();

    match matches.len() {
        0 => bail!("No food found for '{query}'"),
        1 => Ok(matches[0]),
        _ => {
            print_food_table(&matches);
            let idx = prompt_choice("food", matches.len())?;
            Ok(matches[idx])
        }
    }
}
