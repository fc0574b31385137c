/// Resting energy requirement in kcal/day: `70 * kg^0.75`.
///
/// Returns 0.0 when the weight is not a finite non-negative number.
#[must_use]
pub fn resting_energy_kcal(body_weight_kg: f64) -> f64 {
    if !body_weight_kg.is_finite() || body_weight_kg < 0.0 {
        return 0.0;
    }
    70.0 * body_weight_kg.powf(0.75)
}

/// Daily energy requirement in kcal/day: activity coefficient times the
/// resting requirement.
///
/// Returns 0.0 for a non-numeric weight. Negative weights are rejected at
/// the edit boundary and never reach this function; sign is not re-checked.
#[must_use]
pub fn daily_energy_kcal(body_weight_kg: f64, activity_coefficient: f64) -> f64 {
    if body_weight_kg.is_nan() {
        return 0.0;
    }
    activity_coefficient * resting_energy_kcal(body_weight_kg)
}

/// Grams/day of a macronutrient whose minimum share of caloric intake is
/// `ratio_percent`. Returns 0.0 unless the daily energy is strictly positive.
#[must_use]
pub fn required_nutrient_grams(daily_energy_kcal: f64, ratio_percent: f64) -> f64 {
    if daily_energy_kcal > 0.0 {
        daily_energy_kcal * ratio_percent / 100.0
    } else {
        0.0
    }
}

/// Grams of a nutrient supplied by `feeding_weight_g` of a food declaring
/// `per_100g` of it per 100g. Returns 0.0 when the value is absent (no food
/// selected, or the food omits the field). The same formula serves calories:
/// `kcal_per_100g * grams / 100`.
///
/// A non-finite product degrades to 0.0 rather than reaching a display.
#[must_use]
pub fn supplied_nutrient_grams(per_100g: Option<f64>, feeding_weight_g: f64) -> f64 {
    let Some(value) = per_100g else {
        return 0.0;
    };
    let grams = value * feeding_weight_g / 100.0;
    if grams.is_finite() { grams } else { 0.0 }
}

/// Grams/day of a food that meet the given daily energy requirement.
///
/// Returns 0.0 when the requirement is not strictly positive or the food's
/// caloric density is absent or not strictly positive.
#[must_use]
pub fn portion_for_energy_g(daily_energy_kcal: f64, calories_per_100g: Option<f64>) -> f64 {
    if daily_energy_kcal <= 0.0 {
        return 0.0;
    }
    match calories_per_100g {
        Some(density) if density > 0.0 => daily_energy_kcal / density * 100.0,
        _ => 0.0,
    }
}
