// ABOUTME: Domain error taxonomy for engine operations
// ABOUTME: Validation, unknown preference, and configuration failures with AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ConfigError;
use nutrition_core::errors::{AppError, ErrorCode, ValidationErrors};
use thiserror::Error;

/// Errors returned by engine operations
///
/// Below-floor calorie targets are not errors; they surface as warning
/// insights on the computed target.
#[derive(Debug, Error)]
pub enum NutritionError {
    /// One or more profile fields were rejected
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A preference, activity level, or goal outside its enumerated set
    #[error("unknown {kind} '{value}'")]
    UnknownPreference {
        /// Which enumeration the value was checked against
        kind: &'static str,
        /// The rejected value
        value: String,
    },

    /// Engine configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl NutritionError {
    /// Create an unknown preference error
    pub fn unknown_preference(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownPreference {
            kind,
            value: value.into(),
        }
    }
}

/// Result alias for engine operations
pub type NutritionResult<T> = Result<T, NutritionError>;

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        match error {
            NutritionError::Validation(errors) => Self::from(errors),
            NutritionError::UnknownPreference { kind, value } => Self::new(
                ErrorCode::UnknownPreference,
                format!("unknown {kind} '{value}'"),
            )
            .with_details(serde_json::json!({ "kind": kind, "value": value })),
            NutritionError::Config(source) => Self::config(source.to_string()).with_source(source),
        }
    }
}
