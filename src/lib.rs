// ABOUTME: Main library entry point for the nutrition calculation and recommendation engine
// ABOUTME: Engine facade, logging setup, profile repository, and profile state transitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Engine
//!
//! Deterministic, rule-based nutrition computations for a consumer
//! nutrition-tracking application:
//!
//! - **Targets**: BMR, TDEE, daily calories, macro grams, and water from a profile
//! - **Food scores**: 0-100 score, grade, and allergen flags for a food item
//! - **Meal plans**: a four-slot daily plan skeleton and its shopping list
//! - **Insights**: threshold-driven recommendations, warnings, and achievements
//!
//! ## Architecture
//!
//! - `nutrition-core`: plain data models, constants, and the `AppError` envelope
//! - `nutrition-intelligence`: the pure algorithms and the engine configuration
//! - this crate: the [`NutritionEngine`] facade, logging, storage seam, and state
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_engine::models::{Sex, UserProfile};
//! use nutrition_engine::NutritionEngine;
//!
//! let engine = NutritionEngine::from_global();
//! let profile = UserProfile {
//!     age: 28,
//!     sex: Sex::Female,
//!     height_cm: 168.0,
//!     weight_kg: 62.0,
//!     activity_factor: 1.375,
//!     goal_delta_kcal: 0,
//!     body_fat_pct: None,
//!     waist_cm: None,
//!     hip_cm: None,
//!     dietary_preference_id: "none".to_owned(),
//!     meals_per_day: 3,
//! };
//! let target = engine.compute_nutrition_target(&profile, "none")?;
//! println!("{} kcal", target.calories);
//! # Ok::<(), nutrition_engine::NutritionError>(())
//! ```

/// Engine facade and free-function entry points
pub mod engine;

/// Structured logging configuration
pub mod logging;

/// Profile and meal plan storage
pub mod repository;

/// Profile state transitions
pub mod state;

pub use nutrition_core::{constants, errors, models};
pub use nutrition_intelligence::{config, NutritionError, NutritionResult};

pub use engine::{
    compute_nutrition_target, generate_insights, score_food, synthesize_meal_plan,
    validate_profile, NutritionEngine,
};
pub use repository::{InMemoryRepository, ProfileRepository};
pub use state::{reduce, ProfileAction, ProfileSession, ProfileState};
