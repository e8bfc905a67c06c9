// ABOUTME: Shared fixtures and quiet logging setup for integration tests
// ABOUTME: Reference profiles, food items, preferences, and progress records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_engine`

use chrono::{Days, NaiveDate};
use nutrition_engine::models::{
    AIPreferences, FoodItem, FoodMacros, Goal, HealthGoal, Micronutrient, ProgressStats, Sex,
    UserProfile,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Female, 28y, 168 cm, 62 kg, lightly active, maintenance
pub fn reference_profile() -> UserProfile {
    UserProfile {
        age: 28,
        sex: Sex::Female,
        height_cm: 168.0,
        weight_kg: 62.0,
        activity_factor: 1.375,
        goal_delta_kcal: 0,
        body_fat_pct: None,
        waist_cm: None,
        hip_cm: None,
        dietary_preference_id: "none".to_owned(),
        meals_per_day: 3,
    }
}

/// Male, 30y, 180 cm, 75 kg, moderately active, maintenance
pub fn male_profile() -> UserProfile {
    UserProfile {
        age: 30,
        sex: Sex::Male,
        height_cm: 180.0,
        weight_kg: 75.0,
        activity_factor: 1.55,
        ..reference_profile()
    }
}

/// Small, older, sedentary profile on a deficit: computes to 432 kcal
pub fn below_floor_profile() -> UserProfile {
    UserProfile {
        age: 80,
        sex: Sex::Female,
        height_cm: 150.0,
        weight_kg: 40.0,
        activity_factor: 1.2,
        goal_delta_kcal: -500,
        ..reference_profile()
    }
}

/// 200 kcal, 15 g protein, 3 g fiber, one vitamin line
pub fn reference_food() -> FoodItem {
    FoodItem {
        name: "Protein Oat Bar".to_owned(),
        serving: "1 bar (50 g)".to_owned(),
        calories: 200.0,
        macros: FoodMacros {
            protein: 15.0,
            carbs: 22.0,
            fat: 6.0,
        },
        micros: vec![
            Micronutrient::new("Fiber", 3.0, "g"),
            Micronutrient::new("Vitamin C", 15.0, "mg"),
        ],
        ingredients: vec!["oats".to_owned(), "whey protein".to_owned()],
        allergens: Vec::new(),
    }
}

/// Weight loss only, household of one
pub fn weight_loss_preferences() -> AIPreferences {
    AIPreferences {
        goals: vec![HealthGoal::WeightLoss],
        ..AIPreferences::default()
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn stats(adherence_rate: f64, average_rating: f64) -> ProgressStats {
    ProgressStats {
        as_of: date(2025, 3, 1),
        adherence_rate,
        average_rating,
    }
}

/// Goal due `days` after the `stats` reference date
pub fn goal(id: &str, progress: f64, days: u64) -> Goal {
    Goal {
        id: id.to_owned(),
        title: format!("Goal {id}"),
        progress,
        deadline: date(2025, 3, 1).checked_add_days(Days::new(days)).unwrap(),
    }
}

/// Float equality within 1e-9
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
