// ABOUTME: Engine configuration orchestrating domain configs with env overrides and validation
// ABOUTME: Loaded once into a process-wide OnceLock and read-only afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR coefficients, calorie floor, hydration, dietary ratio table
//! - `scoring` - Food score component caps and multipliers
//! - `meal_plan` - Meal plan base calories, goal deltas, slot shares
//! - `insights` - Insight rule thresholds and confidence levels
//!
//! Defaults reproduce the reference formulas exactly; environment variables
//! prefixed `NUTRITION_` override individual values.

pub mod error;
pub mod insights;
pub mod meal_plan;
pub mod nutrition;
pub mod scoring;

pub use error::ConfigError;
pub use insights::{InsightConfidence, InsightConfig, InsightThresholds};
pub use meal_plan::MealPlanConfig;
pub use nutrition::{DietaryRatiosConfig, EnergyConfig, HydrationConfig};
pub use scoring::ScoringConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// BMR coefficients and calorie floor
    pub energy: EnergyConfig,
    /// Water target settings
    pub hydration: HydrationConfig,
    /// Macro ratio row per dietary preference
    pub dietary_ratios: DietaryRatiosConfig,
    /// Food score weights
    pub scoring: ScoringConfig,
    /// Meal plan synthesis settings
    pub meal_plan: MealPlanConfig,
    /// Insight rule thresholds
    pub insights: InsightConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.energy.calorie_floor == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_floor must be positive",
            ));
        }
        if self.energy.msj_weight_coef <= 0.0 || self.energy.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.hydration.water_ml_per_kg <= 0.0 || self.hydration.water_ml_per_kg > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "water_ml_per_kg must be between 0 and 100",
            ));
        }

        self.dietary_ratios.validate()?;
        self.validate_scoring()?;
        self.meal_plan.validate()?;
        self.validate_insights()?;

        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        let caps = [
            scoring.protein_cap,
            scoring.fiber_cap,
            scoring.sugar_full_points,
            scoring.variety_cap,
        ];
        if caps.iter().any(|cap| *cap < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Score component caps must be non-negative",
            ));
        }
        if scoring.max_total() > 100.0 {
            return Err(ConfigError::InvalidWeights(format!(
                "Score component caps must not exceed 100 in total, got {:.1}",
                scoring.max_total()
            )));
        }
        Ok(())
    }

    fn validate_insights(&self) -> Result<(), ConfigError> {
        let thresholds = &self.insights.thresholds;
        if !(0.0..=100.0).contains(&thresholds.low_adherence_rate) {
            return Err(ConfigError::ValueOutOfRange(
                "low_adherence_rate must be between 0 and 100",
            ));
        }
        if !(0.0..=5.0).contains(&thresholds.high_average_rating) {
            return Err(ConfigError::ValueOutOfRange(
                "high_average_rating must be between 0 and 5",
            ));
        }
        if thresholds.deadline_window_days < 0 {
            return Err(ConfigError::InvalidRange(
                "deadline_window_days must not be negative",
            ));
        }
        if !(0.0..=100.0).contains(&thresholds.deadline_progress_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "deadline_progress_threshold must be between 0 and 100",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy
        Self::apply_env_var("NUTRITION_CALORIE_FLOOR", &mut self.energy.calorie_floor)?;
        Self::apply_env_var(
            "NUTRITION_WATER_ML_PER_KG",
            &mut self.hydration.water_ml_per_kg,
        )?;

        // Meal plan
        Self::apply_env_var(
            "NUTRITION_MEAL_PLAN_BASE_CALORIES",
            &mut self.meal_plan.base_calories,
        )?;
        Self::apply_env_var(
            "NUTRITION_MEAL_PLAN_SNACK_FACTOR",
            &mut self.meal_plan.snack_share_factor,
        )?;

        // Insights
        Self::apply_env_var(
            "NUTRITION_INSIGHT_LOW_ADHERENCE",
            &mut self.insights.thresholds.low_adherence_rate,
        )?;
        Self::apply_env_var(
            "NUTRITION_INSIGHT_HIGH_RATING",
            &mut self.insights.thresholds.high_average_rating,
        )?;
        Self::apply_env_var(
            "NUTRITION_INSIGHT_DEADLINE_DAYS",
            &mut self.insights.thresholds.deadline_window_days,
        )?;
        Self::apply_env_var(
            "NUTRITION_INSIGHT_DEADLINE_PROGRESS",
            &mut self.insights.thresholds.deadline_progress_threshold,
        )?;

        Ok(self)
    }
}
