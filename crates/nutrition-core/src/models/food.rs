// ABOUTME: Food item models handed over by the scanning/entry subsystem, and score results
// ABOUTME: FoodItem, FoodMacros, Micronutrient, ScoreResult, ScoreBreakdown, NutritionGrade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Macronutrient content of one serving, in grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodMacros {
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Fat (grams)
    pub fat: f64,
}

/// A single micronutrient line from the nutrition label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Micronutrient {
    /// Label name ("Dietary Fiber", "Vitamin C", ...)
    pub name: String,
    /// Amount per serving
    pub value: f64,
    /// Unit of `value` (g, mg, mcg)
    pub unit: String,
}

impl Micronutrient {
    /// Create a micronutrient entry
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }
}

/// Food item as returned by the external lookup collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Serving description ("1 cup (240ml)")
    #[serde(default)]
    pub serving: String,
    /// Calories per serving
    pub calories: f64,
    /// Macronutrients per serving
    #[serde(default)]
    pub macros: FoodMacros,
    /// Micronutrients in label order
    #[serde(default)]
    pub micros: Vec<Micronutrient>,
    /// Ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Declared allergens
    #[serde(default)]
    pub allergens: Vec<String>,
}

/// Capped points contributed by each scoring component
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Protein density points (0-30)
    pub protein: f64,
    /// Fiber points (0-20)
    pub fiber: f64,
    /// Sugar points (0-25)
    pub sugar: f64,
    /// Vitamin/mineral variety points (0-25)
    pub variety: f64,
}

impl ScoreBreakdown {
    /// Unrounded sum of all components
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.fiber + self.sugar + self.variety
    }
}

/// Letter grade derived from the numeric score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NutritionGrade {
    /// 80-100
    A,
    /// 60-79
    B,
    /// 40-59
    C,
    /// 20-39
    D,
    /// 0-19
    E,
}

/// Result of scoring a food item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Composite score (0-100)
    pub score: u8,
    /// Letter grade for display
    pub grade: NutritionGrade,
    /// Whether the item declares any allergen at all
    pub has_allergens: bool,
    /// Declared allergens that match the high-priority list
    pub high_priority_allergens: Vec<String>,
    /// Per-component points
    pub breakdown: ScoreBreakdown,
}
