// ABOUTME: Integration tests for the energy model and macro allocation
// ABOUTME: Mifflin-St Jeor BMR, TDEE, calorie floor warnings, macro grams, and water targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, below_floor_profile, init_test_logging, male_profile, reference_profile};
use nutrition_engine::config::{EngineConfig, HydrationConfig};
use nutrition_engine::models::{
    DietaryPreferenceId, InsightPriority, InsightType, MacroGrams, MacroRatios, UserProfile,
};
use nutrition_engine::{NutritionEngine, NutritionError};
use nutrition_intelligence::energy::BELOW_MINIMUM_CALORIE_WARNING_ID;
use nutrition_intelligence::{
    actual_macro_percentages, allocate_macros, compute_energy, water_intake_liters,
};

// ============================================================================
// BMR AND TDEE TESTS
// ============================================================================

#[test]
fn test_reference_profile_energy() {
    init_test_logging();
    let estimate = compute_energy(&reference_profile(), &EngineConfig::default()).unwrap();
    assert_close(estimate.bmr, 1369.0);
    assert_close(estimate.tdee, 1_882.375);
    assert_eq!(estimate.calories, 1882);
    assert!(estimate.warnings.is_empty());
}

#[test]
fn test_male_bmr_uses_male_constant() {
    let estimate = compute_energy(&male_profile(), &EngineConfig::default()).unwrap();
    // 750 + 1125 - 150 + 5
    assert_close(estimate.bmr, 1730.0);
}

#[test]
fn test_goal_delta_applied_after_activity() {
    let config = EngineConfig::default();
    let lose = UserProfile {
        goal_delta_kcal: -500,
        ..reference_profile()
    };
    let gain = UserProfile {
        goal_delta_kcal: 500,
        ..reference_profile()
    };
    assert_eq!(compute_energy(&lose, &config).unwrap().calories, 1382);
    assert_eq!(compute_energy(&gain, &config).unwrap().calories, 2382);
}

#[test]
fn test_invalid_profile_is_an_error() {
    let profile = UserProfile {
        age: 3,
        ..reference_profile()
    };
    let err = compute_energy(&profile, &EngineConfig::default()).unwrap_err();
    match err {
        NutritionError::Validation(errors) => assert!(errors.get("age").is_some()),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ============================================================================
// CALORIE FLOOR TESTS
// ============================================================================

#[test]
fn test_below_floor_raised_with_warning() {
    let estimate = compute_energy(&below_floor_profile(), &EngineConfig::default()).unwrap();
    assert_eq!(estimate.calories, 800);
    assert_eq!(estimate.warnings.len(), 1);

    let warning = &estimate.warnings[0];
    assert_eq!(warning.id, BELOW_MINIMUM_CALORIE_WARNING_ID);
    assert_eq!(warning.insight_type, InsightType::Warning);
    assert_eq!(warning.priority, InsightPriority::High);
    assert!(warning.actionable);
    assert_eq!(warning.action_label.as_deref(), Some("Adjust goal"));
    // 776.5 * 1.2 - 500
    assert!(warning.message.contains("432 kcal"));
    assert!(warning.message.contains("800 kcal"));
}

#[test]
fn test_target_carries_floor_warning() {
    let target = NutritionEngine::default()
        .compute_nutrition_target(&below_floor_profile(), "none")
        .unwrap();
    assert_eq!(target.calories, 800);
    assert_eq!(target.warnings.len(), 1);
    assert_eq!(target.protein_g, 60);
    assert_eq!(target.carbs_g, 80);
    assert_eq!(target.fat_g, 27);
}

#[test]
fn test_custom_floor_respected() {
    let mut config = EngineConfig::default();
    config.energy.calorie_floor = 1900;
    let estimate = compute_energy(&reference_profile(), &config).unwrap();
    assert_eq!(estimate.calories, 1900);
    assert_eq!(estimate.warnings.len(), 1);
}

// ============================================================================
// MACRO ALLOCATION TESTS
// ============================================================================

#[test]
fn test_reference_nutrition_target() {
    let target = NutritionEngine::default()
        .compute_nutrition_target(&reference_profile(), "none")
        .unwrap();

    assert_eq!(target.calories, 1882);
    assert_eq!(target.protein_g, 141);
    assert_eq!(target.carbs_g, 188);
    assert_eq!(target.fat_g, 63);
    assert_close(target.water_l, 2.2);
    assert_close(target.bmr, 1369.0);
    assert_close(target.tdee, 1_882.375);
    assert_eq!(target.dietary_preference, DietaryPreferenceId::None);
    assert_close(target.macro_percentages.protein_percent, 30.0);
    assert_close(target.macro_percentages.carbs_percent, 40.0);
    assert_close(target.macro_percentages.fat_percent, 30.0);
}

#[test]
fn test_keto_split() {
    let target = NutritionEngine::default()
        .compute_nutrition_target(&reference_profile(), "keto")
        .unwrap();
    assert_eq!(target.calories, 1882);
    assert_eq!(target.protein_g, 118);
    assert_eq!(target.carbs_g, 24);
    assert_eq!(target.fat_g, 146);
    assert_eq!(target.dietary_preference, DietaryPreferenceId::Keto);
}

#[test]
fn test_unknown_preference_rejected() {
    let err = NutritionEngine::default()
        .compute_nutrition_target(&reference_profile(), "carnivore")
        .unwrap_err();
    match err {
        NutritionError::UnknownPreference { kind, value } => {
            assert_eq!(kind, "dietary preference");
            assert_eq!(value, "carnivore");
        }
        other => panic!("expected unknown preference, got {other:?}"),
    }
}

#[test]
fn test_every_ratio_row_sums_to_one() {
    let config = EngineConfig::default();
    for preference in config.dietary_ratios.all() {
        assert!(
            preference.macro_ratios.is_balanced(),
            "{:?} sums to {}",
            preference.id,
            preference.macro_ratios.sum()
        );
    }
}

#[test]
fn test_allocate_macros_rounds_to_whole_grams() {
    let allocation = allocate_macros(2000, &MacroRatios::new(0.30, 0.40, 0.30));
    assert_eq!(
        allocation.grams,
        MacroGrams {
            protein_g: 150,
            carbs_g: 200,
            fat_g: 67,
        }
    );
}

#[test]
fn test_allocate_zero_calories() {
    let allocation = allocate_macros(0, &MacroRatios::new(0.25, 0.05, 0.70));
    assert_eq!(allocation.grams, MacroGrams::default());
    assert_close(allocation.percentages.fat_percent, 70.0);
}

#[test]
fn test_actual_percentages_reflect_rounded_grams() {
    let grams = MacroGrams {
        protein_g: 100,
        carbs_g: 100,
        fat_g: 0,
    };
    let percentages = actual_macro_percentages(&grams);
    assert_close(percentages.protein_percent, 50.0);
    assert_close(percentages.carbs_percent, 50.0);
    assert_close(percentages.fat_percent, 0.0);

    let empty = actual_macro_percentages(&MacroGrams::default());
    assert_close(empty.protein_percent, 0.0);
    assert_close(empty.carbs_percent, 0.0);
    assert_close(empty.fat_percent, 0.0);
}

// ============================================================================
// HYDRATION TESTS
// ============================================================================

#[test]
fn test_water_one_decimal() {
    let config = HydrationConfig::default();
    assert_close(water_intake_liters(62.0, &config), 2.2);
    assert_close(water_intake_liters(100.0, &config), 3.5);
    assert_close(water_intake_liters(30.0, &config), 1.1);
}

#[test]
fn test_water_non_decreasing_in_weight() {
    let config = HydrationConfig::default();
    let mut previous = 0.0;
    for weight in 30..=250 {
        let water = water_intake_liters(f64::from(weight), &config);
        assert!(water >= previous, "{weight} kg gave {water} after {previous}");
        previous = water;
    }
}
