// ABOUTME: Core data models re-exported for the engine and its callers
// ABOUTME: Profiles, food items, meal plans, insights, and progress records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plain, serde-serializable records exchanged with the engine.

/// Food items and scoring results
pub mod food;
/// Generated insights
pub mod insight;
/// Meal-planning preferences, plans, and shopping lists
pub mod meal_plan;
/// User profiles, dietary preferences, and nutrition targets
pub mod profile;
/// Progress statistics and goals
pub mod progress;

pub use food::{FoodItem, FoodMacros, Micronutrient, NutritionGrade, ScoreBreakdown, ScoreResult};
pub use insight::{Insight, InsightPriority, InsightType};
pub use meal_plan::{
    AIPreferences, Budget, CookingSkill, DietaryRestriction, Difficulty, HealthGoal,
    MealCategory, MealPlan, MealPlanMetadata, MealSlot, MealType, ShoppingItem, ShoppingList,
    TemplateIngredient, TemplateMeal,
};
pub use profile::{
    ActivityLevel, DietaryPreference, DietaryPreferenceId, GoalAdjustment, MacroGrams,
    MacroPercentages, MacroRatios, NutritionTarget, Sex, UserProfile, ValidationResult,
};
pub use progress::{Goal, ProgressStats};
