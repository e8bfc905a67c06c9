// ABOUTME: Aggregated progress statistics and user goals evaluated by insight rules
// ABOUTME: ProgressStats and Goal definitions with deadline arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated adherence and satisfaction figures over a reporting window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressStats {
    /// Reference date the statistics were computed for
    pub as_of: NaiveDate,
    /// Share of planned meals actually followed (0-100)
    pub adherence_rate: f64,
    /// Mean meal rating given by the user (0-5)
    pub average_rating: f64,
}

/// A user goal with a deadline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Goal identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Completion percentage (0-100)
    pub progress: f64,
    /// Target completion date
    pub deadline: NaiveDate,
}

impl Goal {
    /// Whole days from `as_of` until the deadline (negative once overdue)
    #[must_use]
    pub fn days_until_deadline(&self, as_of: NaiveDate) -> i64 {
        (self.deadline - as_of).num_days()
    }
}
