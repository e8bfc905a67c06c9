// ABOUTME: Rule-driven insight generation over progress statistics and user goals
// ABOUTME: Ordered, registrable predicate/builder rules with deterministic insight ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for nutrition progress
//!
//! Rules run in registration order and every matching rule fires. A rule is
//! either evaluated once against the statistics or once per goal. Insight
//! ids are `rule-name` for statistics rules and `rule-name:goal-id` for goal
//! rules, so output depends only on input. A goal id repeated within one rule
//! gets an occurrence suffix: `rule-name:goal-id#2`, `#3`, ... Builders receive
//! the id and place it on the insight they return.

use crate::config::InsightConfig;
use nutrition_core::models::{Goal, Insight, InsightPriority, InsightType, ProgressStats};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Predicate over the statistics alone
pub type StatsPredicate = Box<dyn Fn(&ProgressStats) -> bool + Send + Sync>;
/// Builds an insight with the given id from the statistics alone
pub type StatsBuilder = Box<dyn Fn(String, &ProgressStats) -> Insight + Send + Sync>;
/// Predicate over the statistics and one goal
pub type GoalPredicate = Box<dyn Fn(&ProgressStats, &Goal) -> bool + Send + Sync>;
/// Builds an insight with the given id for one goal
pub type GoalBuilder = Box<dyn Fn(String, &ProgressStats, &Goal) -> Insight + Send + Sync>;

/// Name of the low adherence rule
pub const LOW_ADHERENCE_RULE: &str = "low-adherence";
/// Name of the high satisfaction rule
pub const HIGH_SATISFACTION_RULE: &str = "high-satisfaction";
/// Name of the approaching deadline rule
pub const GOAL_DEADLINE_RULE: &str = "goal-deadline";

enum RuleKind {
    Stats {
        predicate: StatsPredicate,
        build: StatsBuilder,
    },
    PerGoal {
        predicate: GoalPredicate,
        build: GoalBuilder,
    },
}

/// A named insight rule
pub struct InsightRule {
    name: String,
    kind: RuleKind,
}

impl InsightRule {
    /// Rule evaluated once against the statistics
    pub fn for_stats<P, B>(name: impl Into<String>, predicate: P, build: B) -> Self
    where
        P: Fn(&ProgressStats) -> bool + Send + Sync + 'static,
        B: Fn(String, &ProgressStats) -> Insight + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: RuleKind::Stats {
                predicate: Box::new(predicate),
                build: Box::new(build),
            },
        }
    }

    /// Rule evaluated once per goal, in goal order
    pub fn per_goal<P, B>(name: impl Into<String>, predicate: P, build: B) -> Self
    where
        P: Fn(&ProgressStats, &Goal) -> bool + Send + Sync + 'static,
        B: Fn(String, &ProgressStats, &Goal) -> Insight + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: RuleKind::PerGoal {
                predicate: Box::new(predicate),
                build: Box::new(build),
            },
        }
    }

    /// Rule name, used as the id stem of its insights
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, stats: &ProgressStats, goals: &[Goal], out: &mut Vec<Insight>) {
        match &self.kind {
            RuleKind::Stats { predicate, build } => {
                if predicate(stats) {
                    out.push(build(self.name.clone(), stats));
                }
            }
            RuleKind::PerGoal { predicate, build } => {
                let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
                for goal in goals.iter().filter(|goal| predicate(stats, goal)) {
                    let occurrence = seen.entry(goal.id.as_str()).or_insert(0);
                    *occurrence += 1;
                    let id = if *occurrence == 1 {
                        format!("{}:{}", self.name, goal.id)
                    } else {
                        format!("{}:{}#{occurrence}", self.name, goal.id)
                    };
                    out.push(build(id, stats, goal));
                }
            }
        }
    }
}

impl fmt::Debug for InsightRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            RuleKind::Stats { .. } => "stats",
            RuleKind::PerGoal { .. } => "per_goal",
        };
        f.debug_struct("InsightRule")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

/// Ordered rule table producing insights
#[derive(Debug, Default)]
pub struct InsightGenerator {
    rules: Vec<InsightRule>,
}

impl InsightGenerator {
    /// Create a generator with no rules
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a generator with the adherence, satisfaction, and deadline rules
    #[must_use]
    pub fn with_default_rules(config: &InsightConfig) -> Self {
        Self::new()
            .with_rule(low_adherence_rule(config))
            .with_rule(high_satisfaction_rule(config))
            .with_rule(goal_deadline_rule(config))
    }

    /// Append a rule after the existing ones
    pub fn register(&mut self, rule: InsightRule) {
        self.rules.push(rule);
    }

    /// Builder-style [`Self::register`]
    #[must_use]
    pub fn with_rule(mut self, rule: InsightRule) -> Self {
        self.register(rule);
        self
    }

    /// Names of the registered rules in evaluation order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(InsightRule::name)
    }

    /// Evaluate every rule in order
    #[must_use]
    pub fn generate(&self, stats: &ProgressStats, goals: &[Goal]) -> Vec<Insight> {
        let mut insights = Vec::new();
        for rule in &self.rules {
            rule.evaluate(stats, goals, &mut insights);
        }
        debug!(
            rules = self.rules.len(),
            goals = goals.len(),
            generated = insights.len(),
            "generated insights"
        );
        insights
    }
}

fn low_adherence_rule(config: &InsightConfig) -> InsightRule {
    let threshold = config.thresholds.low_adherence_rate;
    let confidence = config.confidence.low_adherence;
    InsightRule::for_stats(
        LOW_ADHERENCE_RULE,
        move |stats| stats.adherence_rate < threshold,
        move |id, stats| Insight {
            id,
            insight_type: InsightType::Recommendation,
            title: "Meal plan adherence is low".to_owned(),
            message: format!(
                "You followed {:.0}% of your planned meals. Simpler recipes or fewer planned \
                 meals can make the plan easier to stick to.",
                stats.adherence_rate
            ),
            confidence,
            priority: InsightPriority::Medium,
            actionable: true,
            action_label: Some("Simplify meal plan".to_owned()),
        },
    )
}

fn high_satisfaction_rule(config: &InsightConfig) -> InsightRule {
    let threshold = config.thresholds.high_average_rating;
    let confidence = config.confidence.high_rating;
    InsightRule::for_stats(
        HIGH_SATISFACTION_RULE,
        move |stats| stats.average_rating > threshold,
        move |id, stats| Insight {
            id,
            insight_type: InsightType::Achievement,
            title: "Great meal satisfaction".to_owned(),
            message: format!(
                "Your meals average {:.1} out of 5. Keep cooking what you enjoy.",
                stats.average_rating
            ),
            confidence,
            priority: InsightPriority::Low,
            actionable: false,
            action_label: None,
        },
    )
}

fn goal_deadline_rule(config: &InsightConfig) -> InsightRule {
    let window_days = config.thresholds.deadline_window_days;
    let progress_threshold = config.thresholds.deadline_progress_threshold;
    let confidence = config.confidence.goal_deadline;
    InsightRule::per_goal(
        GOAL_DEADLINE_RULE,
        move |stats, goal| {
            goal.days_until_deadline(stats.as_of) <= window_days
                && goal.progress < progress_threshold
        },
        move |id, stats, goal| Insight {
            id,
            insight_type: InsightType::Warning,
            title: format!("'{}' deadline approaching", goal.title),
            message: format!(
                "{} days left and {:.0}% complete.",
                goal.days_until_deadline(stats.as_of),
                goal.progress
            ),
            confidence,
            priority: InsightPriority::High,
            actionable: true,
            action_label: Some("Review goal".to_owned()),
        },
    )
}
