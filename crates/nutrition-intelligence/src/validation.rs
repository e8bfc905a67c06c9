// ABOUTME: Field-range and enumeration checks for profiles and meal-planning preferences
// ABOUTME: Collects every violation and converts valid profiles into typed form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Boundary validation
//!
//! Every numeric field is checked against its closed range and every
//! enumerated field against its set. Violations are collected, never
//! short-circuited, and unknown enumeration values are never defaulted.

use nutrition_core::constants::{preference_limits, profile_limits};
use nutrition_core::errors::ValidationErrors;
use nutrition_core::models::{
    AIPreferences, ActivityLevel, DietaryPreferenceId, GoalAdjustment, UserProfile,
    ValidationResult,
};
use std::fmt::Display;
use tracing::debug;

/// A profile whose enumerated fields have been resolved to their typed form
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProfile {
    /// The original profile
    pub profile: UserProfile,
    /// Resolved activity level
    pub activity_level: ActivityLevel,
    /// Resolved goal adjustment
    pub goal: GoalAdjustment,
    /// Resolved dietary preference
    pub dietary_preference: DietaryPreferenceId,
}

/// Validate every field of a profile
#[must_use]
pub fn validate_profile(profile: &UserProfile) -> ValidationResult {
    ValidationResult::from_errors(collect_profile_errors(profile))
}

/// Validate a profile and resolve its enumerated fields
///
/// # Errors
///
/// Returns every field violation if the profile is invalid
pub fn parse_profile(profile: &UserProfile) -> Result<ValidatedProfile, ValidationErrors> {
    let errors = collect_profile_errors(profile);

    match (
        ActivityLevel::from_factor(profile.activity_factor),
        GoalAdjustment::from_delta(profile.goal_delta_kcal),
        profile.dietary_preference_id.parse::<DietaryPreferenceId>(),
    ) {
        (Some(activity_level), Some(goal), Ok(dietary_preference)) if errors.is_empty() => {
            Ok(ValidatedProfile {
                profile: profile.clone(),
                activity_level,
                goal,
                dietary_preference,
            })
        }
        _ => {
            debug!(fields = errors.len(), "profile rejected at validation");
            Err(errors)
        }
    }
}

/// Validate meal-planning preferences
#[must_use]
pub fn validate_preferences(preferences: &AIPreferences) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    check_range(
        &mut errors,
        "family_size",
        preferences.family_size,
        preference_limits::MIN_FAMILY_SIZE,
        preference_limits::MAX_FAMILY_SIZE,
    );
    if let Some(minutes) = preferences.max_prep_minutes {
        check_range(
            &mut errors,
            "max_prep_minutes",
            minutes,
            preference_limits::MIN_PREP_MINUTES,
            preference_limits::MAX_PREP_MINUTES,
        );
    }
    if preferences
        .cuisine_preferences
        .iter()
        .any(|cuisine| cuisine.trim().is_empty())
    {
        errors.add("cuisine_preferences", "must not contain blank entries");
    }

    ValidationResult::from_errors(errors)
}

fn collect_profile_errors(profile: &UserProfile) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    check_range(
        &mut errors,
        "age",
        profile.age,
        profile_limits::MIN_AGE,
        profile_limits::MAX_AGE,
    );
    check_range(
        &mut errors,
        "height_cm",
        profile.height_cm,
        profile_limits::MIN_HEIGHT_CM,
        profile_limits::MAX_HEIGHT_CM,
    );
    check_range(
        &mut errors,
        "weight_kg",
        profile.weight_kg,
        profile_limits::MIN_WEIGHT_KG,
        profile_limits::MAX_WEIGHT_KG,
    );

    let optional_fields = [
        (
            "body_fat_pct",
            profile.body_fat_pct,
            profile_limits::MIN_BODY_FAT_PCT,
            profile_limits::MAX_BODY_FAT_PCT,
        ),
        (
            "waist_cm",
            profile.waist_cm,
            profile_limits::MIN_WAIST_CM,
            profile_limits::MAX_WAIST_CM,
        ),
        (
            "hip_cm",
            profile.hip_cm,
            profile_limits::MIN_HIP_CM,
            profile_limits::MAX_HIP_CM,
        ),
    ];
    for (field, value, min, max) in optional_fields {
        if let Some(value) = value {
            check_range(&mut errors, field, value, min, max);
        }
    }

    if ActivityLevel::from_factor(profile.activity_factor).is_none() {
        errors.add(
            "activity_factor",
            format!(
                "must be one of 1.2, 1.375, 1.55, 1.725, 1.9 (got {})",
                profile.activity_factor
            ),
        );
    }
    if GoalAdjustment::from_delta(profile.goal_delta_kcal).is_none() {
        errors.add(
            "goal_delta_kcal",
            format!(
                "must be one of -500, 0, 500 (got {})",
                profile.goal_delta_kcal
            ),
        );
    }
    if let Err(reason) = profile.dietary_preference_id.parse::<DietaryPreferenceId>() {
        errors.add("dietary_preference_id", reason);
    }

    check_range(
        &mut errors,
        "meals_per_day",
        profile.meals_per_day,
        profile_limits::MIN_MEALS_PER_DAY,
        profile_limits::MAX_MEALS_PER_DAY,
    );

    errors
}

/// Record a violation unless `min <= value <= max`; NaN always fails
fn check_range<T>(errors: &mut ValidationErrors, field: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display + Copy,
{
    if !(min..=max).contains(&value) {
        errors.add(
            field,
            format!("must be between {min} and {max} (got {value})"),
        );
    }
}
