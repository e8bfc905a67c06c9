// ABOUTME: Subcommand handlers for nutrition-cli
// ABOUTME: JSON input decoding, engine invocation, and pretty-printed JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_engine::errors::{AppError, AppResult};
use nutrition_engine::models::{
    AIPreferences, FoodItem, Goal, ProgressStats, ScoreResult, UserProfile,
};
use nutrition_engine::NutritionEngine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

type Result<T> = AppResult<T>;

/// Progress document accepted by `insights`
#[derive(Debug, Deserialize)]
struct ProgressInput {
    stats: ProgressStats,
    #[serde(default)]
    goals: Vec<Goal>,
}

/// Score output with the user's matched allergies alongside
#[derive(Debug, Serialize)]
struct ScoreOutput {
    #[serde(flatten)]
    result: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_allergies: Option<Vec<String>>,
}

/// Validate a profile
pub fn validate(engine: &NutritionEngine, input: Option<&Path>) -> Result<()> {
    let profile: UserProfile = read_json(input)?;
    let result = engine.validate_profile(&profile);
    info!(is_valid = result.is_valid, "validated profile");
    print_json(&result)
}

/// Compute daily targets
pub fn target(
    engine: &NutritionEngine,
    input: Option<&Path>,
    preference: Option<&str>,
) -> Result<()> {
    let profile: UserProfile = read_json(input)?;
    let preference = preference.unwrap_or(&profile.dietary_preference_id);
    let target = engine.compute_nutrition_target(&profile, preference)?;
    print_json(&target)
}

/// Score a food item
pub fn score(engine: &NutritionEngine, input: Option<&Path>, allergies: &[String]) -> Result<()> {
    let food: FoodItem = read_json(input)?;
    let output = ScoreOutput {
        result: engine.score_food(&food),
        user_allergies: (!allergies.is_empty()).then(|| engine.allergies_in(&food, allergies)),
    };
    print_json(&output)
}

/// Generate a meal plan
pub fn meal_plan(engine: &NutritionEngine, input: Option<&Path>) -> Result<()> {
    let preferences = read_preferences(engine, input)?;
    let plan = engine.synthesize_meal_plan(&preferences);
    print_json(&plan)
}

/// Generate insights
pub fn insights(engine: &NutritionEngine, input: Option<&Path>) -> Result<()> {
    let progress: ProgressInput = read_json(input)?;
    let insights = engine.generate_insights(&progress.stats, &progress.goals);
    print_json(&insights)
}

/// Generate a meal plan and print its shopping list
pub fn shopping_list(engine: &NutritionEngine, input: Option<&Path>) -> Result<()> {
    let preferences = read_preferences(engine, input)?;
    let plan = engine.synthesize_meal_plan(&preferences);
    let list = engine.build_shopping_list(&plan);
    print_json(&list)
}

fn read_preferences(engine: &NutritionEngine, input: Option<&Path>) -> Result<AIPreferences> {
    let preferences: AIPreferences = read_json(input)?;
    engine
        .validate_preferences(&preferences)
        .into_result()
        .map_err(AppError::from)?;
    Ok(preferences)
}

fn read_json<T: DeserializeOwned>(input: Option<&Path>) -> Result<T> {
    let raw = match input {
        Some(path) if path.as_os_str() != "-" => {
            debug!(path = %path.display(), "reading input file");
            fs::read_to_string(path).map_err(|e| {
                AppError::invalid_input(format!("cannot read {}: {e}", path.display()))
                    .with_source(e)
            })?
        }
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|e| {
                AppError::invalid_input(format!("cannot read stdin: {e}")).with_source(e)
            })?;
            buffer
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
