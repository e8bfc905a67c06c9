// ABOUTME: Insight rule configuration: thresholds and confidence levels for default rules
// ABOUTME: Adherence, rating, and goal-deadline triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Insight rule configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Values that trigger the default rules
    pub thresholds: InsightThresholds,
    /// Confidence reported by each default rule
    pub confidence: InsightConfidence,
}

/// Thresholds for triggering the default insight rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Adherence below this percentage triggers a recommendation (70)
    pub low_adherence_rate: f64,
    /// Average rating above this triggers an achievement (4.5)
    pub high_average_rating: f64,
    /// Goals due within this many days are checked (7)
    pub deadline_window_days: i64,
    /// Goals below this progress percentage near their deadline trigger a warning (90)
    pub deadline_progress_threshold: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            low_adherence_rate: 70.0,
            high_average_rating: 4.5,
            deadline_window_days: 7,
            deadline_progress_threshold: 90.0,
        }
    }
}

/// Confidence (0-100) attached to each default rule's insight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfidence {
    /// Low adherence recommendation
    pub low_adherence: u8,
    /// High satisfaction achievement
    pub high_rating: u8,
    /// Approaching deadline warning
    pub goal_deadline: u8,
    /// Calorie floor warning
    pub calorie_floor: u8,
}

impl Default for InsightConfidence {
    fn default() -> Self {
        Self {
            low_adherence: 85,
            high_rating: 90,
            goal_deadline: 95,
            calorie_floor: 100,
        }
    }
}
