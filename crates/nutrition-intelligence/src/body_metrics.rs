// ABOUTME: Body composition figures derived from a profile: BMI, waist-to-hip ratio, lean mass
// ABOUTME: BMI categories follow the WHO adult cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::NutritionResult;
use crate::validation::parse_profile;
use nutrition_core::constants::body_composition::{
    BMI_NORMAL_MAX, BMI_OVERWEIGHT_MAX, BMI_UNDERWEIGHT_MAX,
};
use nutrition_core::models::UserProfile;
use serde::{Deserialize, Serialize};

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI under 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Category for a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_MAX {
            Self::Underweight
        } else if bmi < BMI_NORMAL_MAX {
            Self::Normal
        } else if bmi < BMI_OVERWEIGHT_MAX {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Derived body composition figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyMetrics {
    /// Body mass index, one decimal
    pub bmi: f64,
    /// Category of the rounded BMI
    pub bmi_category: BmiCategory,
    /// Waist over hip circumference, two decimals, when both are known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_to_hip_ratio: Option<f64>,
    /// Fat-free mass in kilograms, one decimal, when body fat is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_mass_kg: Option<f64>,
}

/// Compute body metrics for a profile
///
/// # Errors
///
/// Returns `NutritionError::Validation` if the profile is invalid
pub fn body_metrics(profile: &UserProfile) -> NutritionResult<BodyMetrics> {
    parse_profile(profile)?;

    let height_m = profile.height_cm / 100.0;
    let bmi = round_to(profile.weight_kg / (height_m * height_m), 10.0);

    let waist_to_hip_ratio = match (profile.waist_cm, profile.hip_cm) {
        (Some(waist), Some(hip)) => Some(round_to(waist / hip, 100.0)),
        _ => None,
    };
    let lean_mass_kg = profile
        .body_fat_pct
        .map(|fat| round_to(profile.weight_kg * (1.0 - fat / 100.0), 10.0));

    Ok(BodyMetrics {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        waist_to_hip_ratio,
        lean_mass_kg,
    })
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
