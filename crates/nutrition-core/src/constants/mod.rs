// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Profile limits, energy conversion factors, and allergen reference lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Values that callers may want to
//! tune live in the engine configuration instead; these are the fixed facts.

/// Closed ranges accepted for profile fields
pub mod profile_limits {
    /// Minimum age in years
    pub const MIN_AGE: u32 = 10;
    /// Maximum age in years
    pub const MAX_AGE: u32 = 100;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum body weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 250.0;
    /// Minimum body fat percentage
    pub const MIN_BODY_FAT_PCT: f64 = 3.0;
    /// Maximum body fat percentage
    pub const MAX_BODY_FAT_PCT: f64 = 70.0;
    /// Minimum waist circumference in centimeters
    pub const MIN_WAIST_CM: f64 = 40.0;
    /// Maximum waist circumference in centimeters
    pub const MAX_WAIST_CM: f64 = 200.0;
    /// Minimum hip circumference in centimeters
    pub const MIN_HIP_CM: f64 = 50.0;
    /// Maximum hip circumference in centimeters
    pub const MAX_HIP_CM: f64 = 200.0;
    /// Minimum meals per day
    pub const MIN_MEALS_PER_DAY: u32 = 1;
    /// Maximum meals per day
    pub const MAX_MEALS_PER_DAY: u32 = 8;
    /// Default meals per day when a profile omits it
    pub const DEFAULT_MEALS_PER_DAY: u32 = 3;
}

/// Closed ranges accepted for meal-planning preferences
pub mod preference_limits {
    /// Minimum household size
    pub const MIN_FAMILY_SIZE: u32 = 1;
    /// Maximum household size
    pub const MAX_FAMILY_SIZE: u32 = 12;
    /// Shortest preparation time limit in minutes
    pub const MIN_PREP_MINUTES: u32 = 5;
    /// Longest preparation time limit in minutes
    pub const MAX_PREP_MINUTES: u32 = 240;
}

/// Energy density of macronutrients
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Tolerance when checking that macro ratios sum to one
    pub const RATIO_SUM_TOLERANCE: f64 = 0.01;
}

/// Allergens flagged with elevated priority on scored food items
pub mod allergens {
    /// The eight major food allergens
    pub const HIGH_PRIORITY: [&str; 8] = [
        "Peanuts",
        "Tree Nuts",
        "Milk",
        "Eggs",
        "Soy",
        "Wheat",
        "Fish",
        "Shellfish",
    ];
}

/// Body-composition thresholds
pub mod body_composition {
    /// Upper BMI bound of the underweight category
    pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;
    /// Upper BMI bound of the normal category
    pub const BMI_NORMAL_MAX: f64 = 25.0;
    /// Upper BMI bound of the overweight category
    pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;
}
