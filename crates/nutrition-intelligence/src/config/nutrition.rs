// ABOUTME: Energy and macronutrient configuration for calorie and macro targets
// ABOUTME: Mifflin-St Jeor coefficients, calorie floor, water factor, dietary ratio table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy and Macronutrient Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use nutrition_core::models::{DietaryPreference, DietaryPreferenceId, MacroRatios};
use serde::{Deserialize, Serialize};

/// BMR and calorie target configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Lowest daily calorie target the engine will hand out (800)
    pub calorie_floor: u32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            calorie_floor: 800,
        }
    }
}

/// Hydration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Daily water per kilogram of body weight (ml): 35
    pub water_ml_per_kg: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            water_ml_per_kg: 35.0,
        }
    }
}

/// Macro ratio row for every dietary preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietaryRatiosConfig {
    /// No particular diet: 30/40/30
    pub none: MacroRatios,
    /// Vegan: 20/55/25
    pub vegan: MacroRatios,
    /// Vegetarian: 25/50/25
    pub vegetarian: MacroRatios,
    /// Keto: 25/5/70
    pub keto: MacroRatios,
    /// Paleo: 30/30/40
    pub paleo: MacroRatios,
    /// Low carb: 35/20/45
    pub low_carb: MacroRatios,
    /// High protein: 40/35/25
    pub high_protein: MacroRatios,
}

impl Default for DietaryRatiosConfig {
    fn default() -> Self {
        Self {
            none: MacroRatios::new(0.30, 0.40, 0.30),
            vegan: MacroRatios::new(0.20, 0.55, 0.25),
            vegetarian: MacroRatios::new(0.25, 0.50, 0.25),
            keto: MacroRatios::new(0.25, 0.05, 0.70),
            paleo: MacroRatios::new(0.30, 0.30, 0.40),
            low_carb: MacroRatios::new(0.35, 0.20, 0.45),
            high_protein: MacroRatios::new(0.40, 0.35, 0.25),
        }
    }
}

impl DietaryRatiosConfig {
    /// Ratio row for a preference
    #[must_use]
    pub const fn ratios_for(&self, id: DietaryPreferenceId) -> MacroRatios {
        match id {
            DietaryPreferenceId::None => self.none,
            DietaryPreferenceId::Vegan => self.vegan,
            DietaryPreferenceId::Vegetarian => self.vegetarian,
            DietaryPreferenceId::Keto => self.keto,
            DietaryPreferenceId::Paleo => self.paleo,
            DietaryPreferenceId::LowCarb => self.low_carb,
            DietaryPreferenceId::HighProtein => self.high_protein,
        }
    }

    /// Full preference record for an identifier
    #[must_use]
    pub const fn preference(&self, id: DietaryPreferenceId) -> DietaryPreference {
        DietaryPreference {
            id,
            macro_ratios: self.ratios_for(id),
        }
    }

    /// All preferences in table order
    #[must_use]
    pub fn all(&self) -> Vec<DietaryPreference> {
        DietaryPreferenceId::ALL
            .into_iter()
            .map(|id| self.preference(id))
            .collect()
    }

    /// Validate that every row sums to 1.0 within tolerance
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first unbalanced row
    pub fn validate(&self) -> Result<(), ConfigError> {
        for preference in self.all() {
            if !preference.macro_ratios.is_balanced() {
                return Err(ConfigError::InvalidWeights(format!(
                    "{} macro ratios must sum to 1.0, got {:.3}",
                    preference.id,
                    preference.macro_ratios.sum()
                )));
            }
        }
        Ok(())
    }
}
