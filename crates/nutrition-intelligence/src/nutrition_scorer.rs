// ABOUTME: Scores a food item 0-100 from protein density, fiber, sugar, and micronutrient variety
// ABOUTME: Flags high-priority allergens and the user's declared allergies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Scorer
//!
//! The score is the sum of four capped components:
//!
//! | Component       | Rule                                                   | Cap |
//! |-----------------|--------------------------------------------------------|-----|
//! | Protein density | `protein x 4 / calories x 100`                         | 30  |
//! | Fiber           | `fiber_g x 2`                                          | 20  |
//! | Sugar           | 25 if absent or under 10 g, else `25 - sugar_g x 2`    | 25  |
//! | Variety         | 5 per vitamin or mineral line                          | 25  |
//!
//! Micronutrients are matched by case-insensitive substring on their name.

use crate::config::ScoringConfig;
use nutrition_core::constants::allergens::HIGH_PRIORITY;
use nutrition_core::constants::energy::KCAL_PER_GRAM_PROTEIN;
use nutrition_core::models::{FoodItem, Micronutrient, NutritionGrade, ScoreBreakdown, ScoreResult};
use tracing::debug;

/// Score a food item
#[must_use]
pub fn score_food(food: &FoodItem, config: &ScoringConfig) -> ScoreResult {
    let breakdown = ScoreBreakdown {
        protein: protein_density_points(food, config),
        fiber: fiber_points(&food.micros, config),
        sugar: sugar_points(&food.micros, config),
        variety: variety_points(&food.micros, config),
    };
    let score = clamp_score(breakdown.total());
    let high_priority_allergens = high_priority_allergens(&food.allergens);

    debug!(
        food = %food.name,
        score,
        allergens = food.allergens.len(),
        "scored food item"
    );

    ScoreResult {
        score,
        grade: grade(score),
        has_allergens: !food.allergens.is_empty(),
        high_priority_allergens,
        breakdown,
    }
}

/// Letter grade for a score
#[must_use]
pub const fn grade(score: u8) -> NutritionGrade {
    match score {
        80.. => NutritionGrade::A,
        60..=79 => NutritionGrade::B,
        40..=59 => NutritionGrade::C,
        20..=39 => NutritionGrade::D,
        _ => NutritionGrade::E,
    }
}

/// The user's declared allergies that this food contains
///
/// Returned in the order the user declared them.
#[must_use]
pub fn score_allergens_for(food: &FoodItem, user_allergies: &[String]) -> Vec<String> {
    user_allergies
        .iter()
        .filter(|allergy| {
            food.allergens
                .iter()
                .any(|allergen| allergen_matches(allergen, allergy))
        })
        .cloned()
        .collect()
}

fn protein_density_points(food: &FoodItem, config: &ScoringConfig) -> f64 {
    let calories = finite_or_zero(food.calories);
    if calories <= 0.0 {
        return 0.0;
    }
    let density = finite_or_zero(food.macros.protein) * KCAL_PER_GRAM_PROTEIN / calories * 100.0;
    density.clamp(0.0, config.protein_cap)
}

fn fiber_points(micros: &[Micronutrient], config: &ScoringConfig) -> f64 {
    find_micro(micros, "fiber").map_or(0.0, |fiber| {
        (finite_or_zero(fiber.value) * config.fiber_points_per_gram).clamp(0.0, config.fiber_cap)
    })
}

fn sugar_points(micros: &[Micronutrient], config: &ScoringConfig) -> f64 {
    let sugar = find_micro(micros, "sugar").map(|sugar| finite_or_zero(sugar.value));
    match sugar {
        Some(value) if value >= config.sugar_threshold_g => {
            (config.sugar_full_points - value * config.sugar_penalty_per_gram).max(0.0)
        }
        _ => config.sugar_full_points,
    }
}

fn variety_points(micros: &[Micronutrient], config: &ScoringConfig) -> f64 {
    let count = micros
        .iter()
        .filter(|micro| name_contains(&micro.name, "vitamin") || name_contains(&micro.name, "mineral"))
        .count();
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    (f64::from(count) * config.variety_points_per_micro).min(config.variety_cap)
}

/// NaN and infinite amounts count as zero
const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn find_micro<'a>(micros: &'a [Micronutrient], needle: &str) -> Option<&'a Micronutrient> {
    micros.iter().find(|micro| name_contains(&micro.name, needle))
}

fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

fn high_priority_allergens(allergens: &[String]) -> Vec<String> {
    HIGH_PRIORITY
        .iter()
        .filter(|priority| {
            allergens
                .iter()
                .any(|allergen| allergen_matches(allergen, priority))
        })
        .map(|priority| (*priority).to_owned())
        .collect()
}

/// Case-insensitive substring match in either direction; blank entries never match
fn allergen_matches(left: &str, right: &str) -> bool {
    let left = left.trim().to_lowercase();
    let right = right.trim().to_lowercase();
    if left.is_empty() || right.is_empty() {
        return false;
    }
    left.contains(&right) || right.contains(&left)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_score(total: f64) -> u8 {
    total.round().clamp(0.0, 100.0) as u8
}
