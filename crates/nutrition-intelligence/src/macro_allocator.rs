// ABOUTME: Splits a calorie target into protein/carb/fat grams and computes the water target
// ABOUTME: Combines the energy model and dietary ratio table into a NutritionTarget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{EngineConfig, HydrationConfig};
use crate::energy::{compute_energy, round_to_u32};
use crate::errors::{NutritionError, NutritionResult};
use nutrition_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutrition_core::models::{
    DietaryPreferenceId, MacroGrams, MacroPercentages, MacroRatios, NutritionTarget, UserProfile,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Macro grams together with the ratios they were derived from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroAllocation {
    /// Rounded gram amounts
    pub grams: MacroGrams,
    /// Input ratios as percentages
    pub percentages: MacroPercentages,
}

/// Split a calorie budget into whole grams
///
/// Protein and carbohydrates carry 4 kcal/g, fat 9 kcal/g. The reported
/// percentages echo the input ratios rather than the rounded grams.
#[must_use]
pub fn allocate_macros(calories: u32, ratios: &MacroRatios) -> MacroAllocation {
    let calories = f64::from(calories);
    MacroAllocation {
        grams: MacroGrams {
            protein_g: round_to_u32(calories * ratios.protein / KCAL_PER_GRAM_PROTEIN),
            carbs_g: round_to_u32(calories * ratios.carbs / KCAL_PER_GRAM_CARBS),
            fat_g: round_to_u32(calories * ratios.fat / KCAL_PER_GRAM_FAT),
        },
        percentages: ratios.as_percentages(),
    }
}

/// Daily water target in liters, one decimal
#[must_use]
pub fn water_intake_liters(weight_kg: f64, config: &HydrationConfig) -> f64 {
    (weight_kg * config.water_ml_per_kg / 100.0).round() / 10.0
}

/// True caloric share of each macro after rounding to whole grams
///
/// All zeros when the grams carry no energy.
#[must_use]
pub fn actual_macro_percentages(grams: &MacroGrams) -> MacroPercentages {
    let protein_kcal = f64::from(grams.protein_g) * KCAL_PER_GRAM_PROTEIN;
    let carbs_kcal = f64::from(grams.carbs_g) * KCAL_PER_GRAM_CARBS;
    let fat_kcal = f64::from(grams.fat_g) * KCAL_PER_GRAM_FAT;
    let total = protein_kcal + carbs_kcal + fat_kcal;

    if total <= 0.0 {
        return MacroPercentages {
            protein_percent: 0.0,
            carbs_percent: 0.0,
            fat_percent: 0.0,
        };
    }

    MacroPercentages {
        protein_percent: protein_kcal / total * 100.0,
        carbs_percent: carbs_kcal / total * 100.0,
        fat_percent: fat_kcal / total * 100.0,
    }
}

/// Compute the full daily target for a profile under a dietary preference
///
/// # Errors
///
/// Returns `NutritionError::UnknownPreference` if `preference_id` is not in
/// the ratio table, or `NutritionError::Validation` if the profile is invalid
pub fn compute_nutrition_target(
    profile: &UserProfile,
    preference_id: &str,
    config: &EngineConfig,
) -> NutritionResult<NutritionTarget> {
    let preference = preference_id
        .parse::<DietaryPreferenceId>()
        .map_err(|_| {
            warn!(preference_id, "unknown dietary preference requested");
            NutritionError::unknown_preference("dietary preference", preference_id)
        })?;

    let energy = compute_energy(profile, config)?;
    let ratios = config.dietary_ratios.ratios_for(preference);
    let allocation = allocate_macros(energy.calories, &ratios);
    let water_l = water_intake_liters(profile.weight_kg, &config.hydration);

    debug!(
        calories = energy.calories,
        protein_g = allocation.grams.protein_g,
        carbs_g = allocation.grams.carbs_g,
        fat_g = allocation.grams.fat_g,
        water_l,
        preference = %preference,
        "computed nutrition target"
    );

    Ok(NutritionTarget {
        calories: energy.calories,
        protein_g: allocation.grams.protein_g,
        carbs_g: allocation.grams.carbs_g,
        fat_g: allocation.grams.fat_g,
        water_l,
        bmr: energy.bmr,
        tdee: energy.tdee,
        macro_percentages: allocation.percentages,
        dietary_preference: preference,
        warnings: energy.warnings,
    })
}
