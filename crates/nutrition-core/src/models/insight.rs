// ABOUTME: Insight records produced by rule evaluation over progress and energy data
// ABOUTME: Insight, InsightType, and InsightPriority definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Categories of insights that can be generated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Suggested change in behaviour
    Recommendation,
    /// Something needs attention soon
    Warning,
    /// Positive milestone
    Achievement,
    /// Observed recurring behaviour
    Pattern,
}

/// Display priority of an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    /// Informational
    Low,
    /// Worth acting on
    Medium,
    /// Act now
    High,
}

/// A generated, prioritized recommendation, warning, or achievement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    /// Stable identifier derived from the rule that produced it
    pub id: String,
    /// Type of insight
    pub insight_type: InsightType,
    /// Short headline
    pub title: String,
    /// Human-readable insight message
    pub message: String,
    /// Confidence level (0-100)
    pub confidence: u8,
    /// Display priority
    pub priority: InsightPriority,
    /// Whether the user can act on it directly
    pub actionable: bool,
    /// Label for the call-to-action, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
}
