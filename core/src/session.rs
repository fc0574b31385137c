use crate::data::ReferenceData;
use crate::engine;
use crate::models::{ActivityLevel, FoodRecord, RationReport};

/// Mutable per-invocation selection state: body weight, the chosen activity
/// level and food, the feeding weight, and the derived daily energy
/// requirement.
///
/// `der_kcal` is only ever written by the recompute paths; every other
/// displayed value is a pure projection of current state, evaluated on read.
/// Selections borrow rows from the reference tables and never own them.
#[derive(Debug)]
pub struct Session<'a> {
    data: &'a ReferenceData,
    body_weight_kg: f64,
    activity: Option<&'a ActivityLevel>,
    food: Option<&'a FoodRecord>,
    feeding_weight_g: f64,
    der_kcal: f64,
}

impl<'a> Session<'a> {
    /// A fresh session: numeric fields at zero, nothing selected.
    #[must_use]
    pub fn new(data: &'a ReferenceData) -> Self {
        Self {
            data,
            body_weight_kg: 0.0,
            activity: None,
            food: None,
            feeding_weight_g: 0.0,
            der_kcal: 0.0,
        }
    }

    // --- Edit protocol ---
    // Each edit is synchronous and immediate. A rejected edit returns false
    // and leaves the prior state untouched.

    /// Store a new body weight in kg. Rejected when negative or not a
    /// number. Recomputes the daily energy when an activity level is
    /// already selected.
    pub fn set_body_weight(&mut self, weight_kg: f64) -> bool {
        if weight_kg.is_nan() || weight_kg < 0.0 {
            return false;
        }
        self.body_weight_kg = weight_kg;
        if let Some(level) = self.activity {
            self.der_kcal = engine::daily_energy_kcal(weight_kg, level.coefficient);
        }
        true
    }

    /// Select an activity level by id. No-op when the id is unknown or the
    /// current body weight is not a number; otherwise stores the selection
    /// and recomputes the daily energy.
    pub fn set_activity_level(&mut self, id: i64) -> bool {
        let Some(level) = self.data.activity_by_id(id) else {
            return false;
        };
        if self.body_weight_kg.is_nan() {
            return false;
        }
        self.activity = Some(level);
        self.der_kcal = engine::daily_energy_kcal(self.body_weight_kg, level.coefficient);
        true
    }

    /// Select a food by id. No-op when the id is unknown. Does not itself
    /// recompute anything; the supplied displays re-evaluate on read.
    pub fn set_food_selection(&mut self, id: i64) -> bool {
        let Some(food) = self.data.food_by_id(id) else {
            return false;
        };
        self.food = Some(food);
        true
    }

    /// Store a new feeding weight in grams. Rejected when negative or not
    /// a number.
    pub fn set_feeding_weight(&mut self, grams: f64) -> bool {
        if grams.is_nan() || grams < 0.0 {
            return false;
        }
        self.feeding_weight_g = grams;
        true
    }

    /// Explicit recompute trigger, the "calculate" action. Without a
    /// selected activity level the prior value stays in place.
    pub fn recompute_der(&mut self) {
        if let Some(level) = self.activity {
            self.der_kcal = engine::daily_energy_kcal(self.body_weight_kg, level.coefficient);
        }
    }

    // --- Projections ---

    #[must_use]
    pub fn body_weight_kg(&self) -> f64 {
        self.body_weight_kg
    }

    #[must_use]
    pub fn activity(&self) -> Option<&'a ActivityLevel> {
        self.activity
    }

    #[must_use]
    pub fn food(&self) -> Option<&'a FoodRecord> {
        self.food
    }

    #[must_use]
    pub fn feeding_weight_g(&self) -> f64 {
        self.feeding_weight_g
    }

    /// The stored daily energy requirement, kcal/day.
    #[must_use]
    pub fn der_kcal(&self) -> f64 {
        self.der_kcal
    }

    /// Grams/day of protein required at the configured minimum ratio.
    #[must_use]
    pub fn required_protein_g(&self) -> f64 {
        engine::required_nutrient_grams(self.der_kcal, self.data.min_ratio.protein)
    }

    /// Grams/day of fat required at the configured minimum ratio.
    #[must_use]
    pub fn required_fat_g(&self) -> f64 {
        engine::required_nutrient_grams(self.der_kcal, self.data.min_ratio.fat)
    }

    /// Kcal supplied by the selected food at the current feeding weight.
    #[must_use]
    pub fn supplied_calories_kcal(&self) -> f64 {
        engine::supplied_nutrient_grams(self.food.and_then(|f| f.calories), self.feeding_weight_g)
    }

    /// Grams of protein supplied at the current feeding weight.
    #[must_use]
    pub fn supplied_protein_g(&self) -> f64 {
        engine::supplied_nutrient_grams(self.food.and_then(|f| f.protein), self.feeding_weight_g)
    }

    /// Grams of fat supplied at the current feeding weight.
    #[must_use]
    pub fn supplied_fat_g(&self) -> f64 {
        engine::supplied_nutrient_grams(self.food.and_then(|f| f.fat), self.feeding_weight_g)
    }

    /// Grams/day of the selected food that would meet the daily energy
    /// requirement.
    #[must_use]
    pub fn suggested_portion_g(&self) -> f64 {
        engine::portion_for_energy_g(self.der_kcal, self.food.and_then(|f| f.calories))
    }

    /// Snapshot every display value for rendering or JSON output.
    #[must_use]
    pub fn report(&self) -> RationReport {
        RationReport {
            body_weight_kg: self.body_weight_kg,
            activity: self.activity.cloned(),
            food: self.food.cloned(),
            feeding_weight_g: self.feeding_weight_g,
            daily_energy_kcal: self.der_kcal,
            required_protein_g: self.required_protein_g(),
            required_fat_g: self.required_fat_g(),
            supplied_calories_kcal: self.supplied_calories_kcal(),
            supplied_protein_g: self.supplied_protein_g(),
            supplied_fat_g: self.supplied_fat_g(),
            suggested_portion_g: self.suggested_portion_g(),
        }
    }
}
