// ABOUTME: NutritionEngine facade bundling configuration, meal plan synthesis, and insight rules
// ABOUTME: Exposes the five engine operations as methods and as free functions over the global config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_core::models::{
    AIPreferences, FoodItem, Goal, Insight, MealPlan, NutritionTarget, ProgressStats, ScoreResult,
    ShoppingList, UserProfile, ValidationResult,
};
use nutrition_intelligence as intelligence;
use nutrition_intelligence::{
    BodyMetrics, EngineConfig, IdGenerator, InsightGenerator, InsightRule, MealPlanSynthesizer,
    NutritionResult,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Entry point for every engine computation
///
/// Holds an immutable configuration snapshot and the meal plan and insight
/// components built from it. Every method is a pure computation.
#[derive(Debug)]
pub struct NutritionEngine {
    config: EngineConfig,
    synthesizer: MealPlanSynthesizer,
    insights: InsightGenerator,
}

impl NutritionEngine {
    /// Build an engine from an explicit configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let synthesizer = MealPlanSynthesizer::new(config.meal_plan.clone());
        let insights = InsightGenerator::with_default_rules(&config.insights);
        Self {
            config,
            synthesizer,
            insights,
        }
    }

    /// Build an engine from the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(EngineConfig::global().clone())
    }

    /// Draw meal plan ids from `ids` instead of a fresh per-plan sequence
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.synthesizer = self.synthesizer.with_id_generator(ids);
        self
    }

    /// Append an insight rule after the default ones
    #[must_use]
    pub fn with_insight_rule(mut self, rule: InsightRule) -> Self {
        self.insights.register(rule);
        self
    }

    /// Configuration snapshot this engine computes with
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check every profile field, collecting all violations
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn validate_profile(&self, profile: &UserProfile) -> ValidationResult {
        let result = intelligence::validate_profile(profile);
        debug!(
            is_valid = result.is_valid,
            errors = result.errors.len(),
            "validated profile"
        );
        result
    }

    /// Check meal-planning preferences
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn validate_preferences(&self, preferences: &AIPreferences) -> ValidationResult {
        intelligence::validate_preferences(preferences)
    }

    /// Daily calorie, macro, and water targets
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is invalid or the preference is unknown
    #[instrument(skip(self, profile), fields(preference = %preference_id))]
    pub fn compute_nutrition_target(
        &self,
        profile: &UserProfile,
        preference_id: &str,
    ) -> NutritionResult<NutritionTarget> {
        intelligence::compute_nutrition_target(profile, preference_id, &self.config)
    }

    /// Score a food item 0-100
    #[must_use]
    pub fn score_food(&self, food: &FoodItem) -> ScoreResult {
        intelligence::score_food(food, &self.config.scoring)
    }

    /// Which of the user's allergies the food contains
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn allergies_in(&self, food: &FoodItem, user_allergies: &[String]) -> Vec<String> {
        intelligence::score_allergens_for(food, user_allergies)
    }

    /// Expand preferences into a plan skeleton
    #[must_use]
    pub fn synthesize_meal_plan(&self, preferences: &AIPreferences) -> MealPlan {
        self.synthesizer.synthesize(preferences)
    }

    /// Merge a plan's ingredients into one shopping list
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn build_shopping_list(&self, plan: &MealPlan) -> ShoppingList {
        intelligence::build_shopping_list(plan)
    }

    /// Evaluate the insight rules in order
    #[must_use]
    pub fn generate_insights(&self, stats: &ProgressStats, goals: &[Goal]) -> Vec<Insight> {
        self.insights.generate(stats, goals)
    }

    /// BMI, waist-to-hip ratio, and lean mass
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is invalid
    #[allow(clippy::unused_self)]
    pub fn body_metrics(&self, profile: &UserProfile) -> NutritionResult<BodyMetrics> {
        intelligence::body_metrics(profile)
    }
}

impl Default for NutritionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Validate a profile
#[must_use]
pub fn validate_profile(profile: &UserProfile) -> ValidationResult {
    intelligence::validate_profile(profile)
}

/// Compute daily targets using the global configuration
///
/// # Errors
///
/// Returns an error if the profile is invalid or the preference is unknown
pub fn compute_nutrition_target(
    profile: &UserProfile,
    preference_id: &str,
) -> NutritionResult<NutritionTarget> {
    intelligence::compute_nutrition_target(profile, preference_id, EngineConfig::global())
}

/// Score a food item using the global configuration
#[must_use]
pub fn score_food(food: &FoodItem) -> ScoreResult {
    intelligence::score_food(food, &EngineConfig::global().scoring)
}

/// Synthesize a meal plan using the global configuration
#[must_use]
pub fn synthesize_meal_plan(preferences: &AIPreferences) -> MealPlan {
    MealPlanSynthesizer::new(EngineConfig::global().meal_plan.clone()).synthesize(preferences)
}

/// Generate insights with the default rules and the global configuration
#[must_use]
pub fn generate_insights(stats: &ProgressStats, goals: &[Goal]) -> Vec<Insight> {
    InsightGenerator::with_default_rules(&EngineConfig::global().insights).generate(stats, goals)
}
