// ABOUTME: Nutrition calculation and recommendation algorithms
// ABOUTME: Validation, energy model, macro allocation, food scoring, meal plans, and insight rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Intelligence
//!
//! Deterministic, rule-based computations over the records defined in
//! `nutrition-core`. Every operation is a pure function of its inputs and an
//! [`EngineConfig`]; none of them perform I/O.
//!
//! ## Data flow
//!
//! - `UserProfile` -> [`energy`] -> [`macro_allocator`] -> `NutritionTarget`
//! - `AIPreferences` -> [`meal_plan`] -> `MealPlan`
//! - `FoodItem` -> [`nutrition_scorer`] -> `ScoreResult`
//! - `ProgressStats` + `Goal`s -> [`insights`] -> `Insight`s

/// Body composition figures (BMI, waist-to-hip, lean mass)
pub mod body_metrics;
/// Engine configuration with environment overrides
pub mod config;
/// BMR, TDEE, and calorie target
pub mod energy;
/// Domain errors
pub mod errors;
/// Injectable identifier generation
pub mod ids;
/// Rule-driven insight generation
pub mod insights;
/// Calorie split into macro grams, water target
pub mod macro_allocator;
/// Meal plan synthesis and shopping lists
pub mod meal_plan;
/// Food item scoring and allergen matching
pub mod nutrition_scorer;
/// Profile and preference validation
pub mod validation;

pub use body_metrics::{body_metrics, BmiCategory, BodyMetrics};
pub use config::{ConfigError, EngineConfig};
pub use energy::{compute_energy, EnergyEstimate};
pub use errors::{NutritionError, NutritionResult};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use insights::{InsightGenerator, InsightRule};
pub use macro_allocator::{
    actual_macro_percentages, allocate_macros, compute_nutrition_target, water_intake_liters,
    MacroAllocation,
};
pub use meal_plan::{build_shopping_list, MealPlanSynthesizer};
pub use nutrition_scorer::{grade, score_allergens_for, score_food};
pub use validation::{parse_profile, validate_preferences, validate_profile, ValidatedProfile};
