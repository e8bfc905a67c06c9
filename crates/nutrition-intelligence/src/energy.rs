// ABOUTME: Energy model turning a validated profile into BMR, TDEE, and a daily calorie target
// ABOUTME: Mifflin-St Jeor BMR, activity multiplier, goal delta, and the calorie floor warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{EnergyConfig, EngineConfig, InsightConfidence};
use crate::errors::NutritionResult;
use crate::validation::parse_profile;
use nutrition_core::models::{
    ActivityLevel, Insight, InsightPriority, InsightType, Sex, UserProfile,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Identifier of the calorie floor warning insight
pub const BELOW_MINIMUM_CALORIE_WARNING_ID: &str = "below-minimum-calories";

/// Energy figures for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calorie target after goal adjustment and floor
    pub calories: u32,
    /// Advisory insights, e.g. the calorie floor warning
    pub warnings: Vec<Insight>,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// Inputs are expected to be validated; no clamping happens here.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &EnergyConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.factor()
}

/// Compute BMR, TDEE, and the daily calorie target for a profile
///
/// Targets under the configured floor are raised to it and carry a
/// high-priority warning insight.
///
/// # Errors
///
/// Returns `NutritionError::Validation` with every rejected field if the
/// profile is invalid
pub fn compute_energy(
    profile: &UserProfile,
    config: &EngineConfig,
) -> NutritionResult<EnergyEstimate> {
    let validated = parse_profile(profile)?;

    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        &config.energy,
    );
    let tdee = calculate_tdee(bmr, validated.activity_level);
    let adjusted = round_to_u32(tdee + f64::from(validated.goal.delta_kcal()));

    let floor = config.energy.calorie_floor;
    let mut warnings = Vec::new();
    let calories = if adjusted < floor {
        warn!(
            computed = adjusted,
            floor, "calorie target below minimum, raising to floor"
        );
        warnings.push(below_minimum_calorie_warning(
            adjusted,
            floor,
            &config.insights.confidence,
        ));
        floor
    } else {
        adjusted
    };

    debug!(bmr, tdee, calories, "computed energy estimate");

    Ok(EnergyEstimate {
        bmr,
        tdee,
        calories,
        warnings,
    })
}

/// Build the warning attached when a computed target falls below the floor
#[must_use]
pub fn below_minimum_calorie_warning(
    computed: u32,
    floor: u32,
    confidence: &InsightConfidence,
) -> Insight {
    Insight {
        id: BELOW_MINIMUM_CALORIE_WARNING_ID.to_owned(),
        insight_type: InsightType::Warning,
        title: "Calorie target raised to minimum".to_owned(),
        message: format!(
            "Your computed target of {computed} kcal is below the safe minimum of {floor} kcal. \
             The target has been set to {floor} kcal; consider a smaller deficit."
        ),
        confidence: confidence.calorie_floor,
        priority: InsightPriority::High,
        actionable: true,
        action_label: Some("Adjust goal".to_owned()),
    }
}

/// Round half away from zero into a non-negative whole number
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn round_to_u32(value: f64) -> u32 {
    // Saturating cast: negatives and NaN land on 0
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
