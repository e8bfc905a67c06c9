// ABOUTME: Meal plan synthesis configuration: base calories, goal deltas, and slot shares
// ABOUTME: Goal-specific macro ratios and the snack share factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use nutrition_core::models::MacroRatios;
use serde::{Deserialize, Serialize};

/// Meal plan synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Starting daily calories before goal and household adjustments (2000)
    pub base_calories: u32,
    /// Adjustment when weight loss is selected (-300)
    pub weight_loss_delta_kcal: i32,
    /// Adjustment when muscle gain is selected (+200)
    pub muscle_gain_delta_kcal: i32,
    /// Added per household member beyond the first (100)
    pub family_member_delta_kcal: u32,
    /// Snack slot size relative to a main meal quarter (0.6)
    pub snack_share_factor: f64,
    /// Ratios when muscle gain is selected: 35/40/25
    pub muscle_gain_ratios: MacroRatios,
    /// Ratios when weight loss is selected: 30/35/35
    pub weight_loss_ratios: MacroRatios,
    /// Ratios otherwise: 25/45/30
    pub default_ratios: MacroRatios,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            base_calories: 2000,
            weight_loss_delta_kcal: -300,
            muscle_gain_delta_kcal: 200,
            family_member_delta_kcal: 100,
            snack_share_factor: 0.6,
            muscle_gain_ratios: MacroRatios::new(0.35, 0.40, 0.25),
            weight_loss_ratios: MacroRatios::new(0.30, 0.35, 0.35),
            default_ratios: MacroRatios::new(0.25, 0.45, 0.30),
        }
    }
}

impl MealPlanConfig {
    /// Validate the plan configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the snack factor leaves (0, 1] or a ratio row is unbalanced
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snack_share_factor <= 0.0 || self.snack_share_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "snack_share_factor must be in (0, 1]",
            ));
        }
        if self.base_calories == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "base_calories must be positive",
            ));
        }

        let rows = [
            ("muscle_gain", &self.muscle_gain_ratios),
            ("weight_loss", &self.weight_loss_ratios),
            ("default", &self.default_ratios),
        ];
        for (name, ratios) in rows {
            if !ratios.is_balanced() {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} meal plan ratios must sum to 1.0, got {:.3}",
                    ratios.sum()
                )));
            }
        }

        Ok(())
    }
}
