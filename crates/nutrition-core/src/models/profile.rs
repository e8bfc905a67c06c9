// ABOUTME: User profile and dietary preference models for energy and macro targets
// ABOUTME: UserProfile, Sex, ActivityLevel, GoalAdjustment, DietaryPreference, NutritionTarget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::insight::Insight;
use crate::constants::{energy::RATIO_SUM_TOLERANCE, profile_limits::DEFAULT_MEALS_PER_DAY};
use crate::errors::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

/// User profile as received from the boundary
///
/// Enumerated fields (`activity_factor`, `goal_delta_kcal`,
/// `dietary_preference_id`) stay raw here so that validation can report
/// unknown values instead of a deserializer silently rejecting or defaulting
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in years (10-100)
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Weight in kilograms (30-250)
    pub weight_kg: f64,
    /// TDEE multiplier, one of 1.2, 1.375, 1.55, 1.725, 1.9
    pub activity_factor: f64,
    /// Daily calorie adjustment, one of -500, 0, +500
    pub goal_delta_kcal: i32,
    /// Body fat percentage (3-70)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
    /// Waist circumference in centimeters (40-200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters (50-200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    /// Dietary preference identifier (see [`DietaryPreferenceId`])
    #[serde(default = "default_preference_id")]
    pub dietary_preference_id: String,
    /// Planned meals per day (1-8)
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u32,
}

fn default_preference_id() -> String {
    DietaryPreferenceId::None.as_str().to_owned()
}

const fn default_meals_per_day() -> u32 {
    DEFAULT_MEALS_PER_DAY
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise): 1.2
    Sedentary,
    /// Lightly active (1-3 days/week): 1.375
    LightlyActive,
    /// Moderately active (3-5 days/week): 1.55
    ModeratelyActive,
    /// Very active (6-7 days/week): 1.725
    VeryActive,
    /// Extra active (hard training 2x/day): 1.9
    ExtraActive,
}

impl ActivityLevel {
    /// All activity levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// TDEE multiplier for this level
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    /// Match a raw multiplier against the enumerated set
    #[must_use]
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.factor() - factor).abs() < 1e-9)
    }
}

/// Daily calorie adjustment for the user's weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalAdjustment {
    /// 500 kcal deficit
    Lose,
    /// Energy balance
    Maintain,
    /// 500 kcal surplus
    Gain,
}

impl GoalAdjustment {
    /// All goal adjustments
    pub const ALL: [Self; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    /// Calorie delta applied on top of TDEE
    #[must_use]
    pub const fn delta_kcal(&self) -> i32 {
        match self {
            Self::Lose => -500,
            Self::Maintain => 0,
            Self::Gain => 500,
        }
    }

    /// Match a raw delta against the enumerated set
    #[must_use]
    pub fn from_delta(delta: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.delta_kcal() == delta)
    }
}

/// Dietary preference identifiers with a macro ratio row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreferenceId {
    /// No particular diet
    None,
    /// Fully plant-based
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// Very low carbohydrate, high fat
    Keto,
    /// Whole-food, grain-free
    Paleo,
    /// Reduced carbohydrate
    LowCarb,
    /// Elevated protein
    HighProtein,
}

impl DietaryPreferenceId {
    /// All preference identifiers in table order
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Vegan,
        Self::Vegetarian,
        Self::Keto,
        Self::Paleo,
        Self::LowCarb,
        Self::HighProtein,
    ];

    /// Wire identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
            Self::LowCarb => "low_carb",
            Self::HighProtein => "high_protein",
        }
    }
}

impl fmt::Display for DietaryPreferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryPreferenceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown dietary preference '{s}'"))
    }
}

/// Protein/carbohydrate/fat split of daily calories, as fractions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatios {
    /// Protein fraction
    pub protein: f64,
    /// Carbohydrate fraction
    pub carbs: f64,
    /// Fat fraction
    pub fat: f64,
}

impl MacroRatios {
    /// Create a ratio triple
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Sum of the three fractions
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Whether the fractions sum to 1.0 within tolerance
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (self.sum() - 1.0).abs() <= RATIO_SUM_TOLERANCE
    }

    /// The ratios expressed as percentages
    #[must_use]
    pub fn as_percentages(&self) -> MacroPercentages {
        MacroPercentages {
            protein_percent: self.protein * 100.0,
            carbs_percent: self.carbs * 100.0,
            fat_percent: self.fat * 100.0,
        }
    }
}

/// A named macro ratio profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DietaryPreference {
    /// Preference identifier
    pub id: DietaryPreferenceId,
    /// Calorie split
    pub macro_ratios: MacroRatios,
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

/// Whole-gram macronutrient amounts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroGrams {
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

/// Daily energy, macro, and water targets derived from a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionTarget {
    /// Daily calorie target (never below the configured floor)
    pub calories: u32,
    /// Daily protein (grams)
    pub protein_g: u32,
    /// Daily carbohydrates (grams)
    pub carbs_g: u32,
    /// Daily fat (grams)
    pub fat_g: u32,
    /// Daily water (liters, one decimal)
    pub water_l: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Input ratios as percentages
    pub macro_percentages: MacroPercentages,
    /// Preference the macros were split by
    pub dietary_preference: DietaryPreferenceId,
    /// Advisory insights raised while computing the target
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Insight>,
}

/// Outcome of validating a profile or preference set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    /// True when no field was rejected
    pub is_valid: bool,
    /// Field name to violation reason
    pub errors: ValidationErrors,
}

impl ValidationResult {
    /// Build a result from collected errors
    #[must_use]
    pub fn from_errors(errors: ValidationErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert into a `Result`, surfacing the field map on failure
    ///
    /// # Errors
    ///
    /// Returns the collected `ValidationErrors` if any field was rejected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
