// ABOUTME: Food nutrition score configuration: component caps and per-unit multipliers
// ABOUTME: Protein density, fiber, sugar penalty, and micronutrient variety weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Weights and caps for the four food score components
///
/// Caps sum to 100 so a perfect food lands exactly on the top of the scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Maximum protein density points (30)
    pub protein_cap: f64,
    /// Points per gram of fiber (2)
    pub fiber_points_per_gram: f64,
    /// Maximum fiber points (20)
    pub fiber_cap: f64,
    /// Points granted when sugar is absent or below the threshold (25)
    pub sugar_full_points: f64,
    /// Sugar amount (g) at which the penalty starts (10)
    pub sugar_threshold_g: f64,
    /// Points removed per gram of total sugar once the threshold is reached (2)
    pub sugar_penalty_per_gram: f64,
    /// Points per vitamin or mineral line (5)
    pub variety_points_per_micro: f64,
    /// Maximum variety points (25)
    pub variety_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            protein_cap: 30.0,
            fiber_points_per_gram: 2.0,
            fiber_cap: 20.0,
            sugar_full_points: 25.0,
            sugar_threshold_g: 10.0,
            sugar_penalty_per_gram: 2.0,
            variety_points_per_micro: 5.0,
            variety_cap: 25.0,
        }
    }
}

impl ScoringConfig {
    /// Highest total the components can reach
    #[must_use]
    pub fn max_total(&self) -> f64 {
        self.protein_cap + self.fiber_cap + self.sugar_full_points + self.variety_cap
    }
}
