// ABOUTME: Integration tests for the engine facade, body metrics, repository, and profile state
// ABOUTME: Target recomputation on state changes and session persistence through the repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging, reference_profile, weight_loss_preferences};
use nutrition_engine::config::EngineConfig;
use nutrition_engine::errors::ErrorCode;
use nutrition_engine::models::{AIPreferences, DietaryPreferenceId, UserProfile};
use nutrition_engine::{
    reduce, InMemoryRepository, NutritionEngine, ProfileAction, ProfileRepository,
    ProfileSession, ProfileState,
};
use nutrition_intelligence::BmiCategory;
use std::sync::Arc;

fn session_parts() -> (Arc<InMemoryRepository>, Arc<NutritionEngine>) {
    (
        Arc::new(InMemoryRepository::new()),
        Arc::new(NutritionEngine::default()),
    )
}

// ============================================================================
// FACADE TESTS
// ============================================================================

#[test]
fn test_facade_validates_profile() {
    init_test_logging();
    let engine = NutritionEngine::default();
    assert!(engine.validate_profile(&reference_profile()).is_valid);

    let invalid = UserProfile {
        meals_per_day: 9,
        ..reference_profile()
    };
    let result = engine.validate_profile(&invalid);
    assert!(!result.is_valid);
    assert!(result.errors.get("meals_per_day").is_some());
}

#[test]
fn test_engine_uses_its_own_config() {
    let mut config = EngineConfig::default();
    config.meal_plan.base_calories = 1800;
    let engine = NutritionEngine::new(config);
    assert_eq!(engine.config().meal_plan.base_calories, 1800);
    assert_eq!(
        engine
            .synthesize_meal_plan(&AIPreferences::default())
            .target_calories,
        1800
    );
}

// ============================================================================
// BODY METRICS TESTS
// ============================================================================

#[test]
fn test_body_metrics_without_optional_measurements() {
    let metrics = NutritionEngine::default()
        .body_metrics(&reference_profile())
        .unwrap();
    assert_close(metrics.bmi, 22.0);
    assert_eq!(metrics.bmi_category, BmiCategory::Normal);
    assert_eq!(metrics.waist_to_hip_ratio, None);
    assert_eq!(metrics.lean_mass_kg, None);
}

#[test]
fn test_body_metrics_with_measurements() {
    let profile = UserProfile {
        waist_cm: Some(70.0),
        hip_cm: Some(95.0),
        body_fat_pct: Some(25.0),
        ..reference_profile()
    };
    let metrics = NutritionEngine::default().body_metrics(&profile).unwrap();
    assert_close(metrics.waist_to_hip_ratio.unwrap(), 0.74);
    assert_close(metrics.lean_mass_kg.unwrap(), 46.5);
}

#[test]
fn test_bmi_categories() {
    assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_body_metrics_rejects_invalid_profile() {
    let profile = UserProfile {
        height_cm: 40.0,
        ..reference_profile()
    };
    assert!(NutritionEngine::default().body_metrics(&profile).is_err());
}

// ============================================================================
// REPOSITORY TESTS
// ============================================================================

#[test]
fn test_repository_profile_lifecycle() {
    let repository = InMemoryRepository::new();
    assert!(repository.get_profile("user-1").unwrap().is_none());

    repository
        .save_profile("user-1", reference_profile())
        .unwrap();
    assert_eq!(repository.profile_count(), 1);
    assert_eq!(
        repository.get_profile("user-1").unwrap(),
        Some(reference_profile())
    );

    repository.delete_profile("user-1").unwrap();
    assert_eq!(repository.profile_count(), 0);
}

#[test]
fn test_delete_missing_profile_is_not_found() {
    let err = InMemoryRepository::new()
        .delete_profile("ghost")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_repository_meal_plans() {
    let repository = InMemoryRepository::new();
    let engine = NutritionEngine::default();
    let mut plan = engine.synthesize_meal_plan(&AIPreferences::default());

    repository.save_meal_plan("user-1", plan.clone()).unwrap();
    plan.name = "Renamed".to_owned();
    repository.save_meal_plan("user-1", plan.clone()).unwrap();

    let plans = repository.list_meal_plans("user-1").unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "Renamed");
    assert_eq!(
        repository.get_meal_plan("user-1", &plan.id).unwrap(),
        Some(plan)
    );
    assert!(repository.list_meal_plans("user-2").unwrap().is_empty());
    assert!(repository
        .get_meal_plan("user-1", "missing")
        .unwrap()
        .is_none());
}

#[test]
fn test_delete_profile_removes_plans() {
    let repository = InMemoryRepository::new();
    let plan = NutritionEngine::default().synthesize_meal_plan(&AIPreferences::default());
    repository
        .save_profile("user-1", reference_profile())
        .unwrap();
    repository.save_meal_plan("user-1", plan).unwrap();

    repository.delete_profile("user-1").unwrap();
    assert!(repository.list_meal_plans("user-1").unwrap().is_empty());
}

// ============================================================================
// PROFILE STATE TESTS
// ============================================================================

#[test]
fn test_set_profile_computes_target() {
    let engine = NutritionEngine::default();
    let state = reduce(
        ProfileState::default(),
        ProfileAction::SetProfile(reference_profile()),
        &engine,
    );
    let target = state.target.unwrap();
    assert_eq!(target.calories, 1882);
    assert_eq!(state.target_error, None);
}

#[test]
fn test_preference_change_recomputes_target() {
    let engine = NutritionEngine::default();
    let state = reduce(
        ProfileState::default(),
        ProfileAction::SetProfile(reference_profile()),
        &engine,
    );
    let state = reduce(
        state,
        ProfileAction::SetPreference("keto".to_owned()),
        &engine,
    );
    let target = state.target.unwrap();
    assert_eq!(target.dietary_preference, DietaryPreferenceId::Keto);
    assert_eq!(target.carbs_g, 24);
}

#[test]
fn test_preference_without_profile_leaves_target_empty() {
    let engine = NutritionEngine::default();
    let state = reduce(
        ProfileState::default(),
        ProfileAction::SetPreference("vegan".to_owned()),
        &engine,
    );
    assert_eq!(state.preference_id, "vegan");
    assert_eq!(state.target, None);
    assert_eq!(state.target_error, None);
}

#[test]
fn test_invalid_profile_records_error() {
    let engine = NutritionEngine::default();
    let valid = reduce(
        ProfileState::default(),
        ProfileAction::SetProfile(reference_profile()),
        &engine,
    );
    let invalid = UserProfile {
        age: 4,
        ..reference_profile()
    };
    let state = reduce(valid, ProfileAction::SetProfile(invalid), &engine);
    assert_eq!(state.target, None);
    assert!(state.target_error.unwrap().contains("age"));

    let unknown = reduce(
        ProfileState::default(),
        ProfileAction::SetProfile(reference_profile()),
        &engine,
    );
    let state = reduce(
        unknown,
        ProfileAction::SetPreference("carnivore".to_owned()),
        &engine,
    );
    assert_eq!(state.target, None);
    assert_eq!(
        state.target_error.as_deref(),
        Some("unknown dietary preference 'carnivore'")
    );
}

#[test]
fn test_reset_returns_default_state() {
    let engine = NutritionEngine::default();
    let state = reduce(
        ProfileState::default(),
        ProfileAction::SetProfile(reference_profile()),
        &engine,
    );
    assert_eq!(
        reduce(state, ProfileAction::Reset, &engine),
        ProfileState::default()
    );
}

// ============================================================================
// SESSION TESTS
// ============================================================================

#[test]
fn test_session_persists_and_restores_profile() {
    let (repository, engine) = session_parts();

    let mut session =
        ProfileSession::open("user-1", repository.clone(), engine.clone()).unwrap();
    assert_eq!(session.user_id(), "user-1");
    assert_eq!(session.state().profile, None);

    session
        .dispatch(ProfileAction::SetProfile(reference_profile()))
        .unwrap();
    assert_eq!(repository.profile_count(), 1);

    let restored = ProfileSession::open("user-1", repository, engine).unwrap();
    assert_eq!(restored.state().profile, Some(reference_profile()));
    assert_eq!(restored.state().target.as_ref().unwrap().calories, 1882);
}

#[test]
fn test_session_generates_and_stores_meal_plan() {
    let (repository, engine) = session_parts();
    let mut session =
        ProfileSession::open("user-1", repository.clone(), engine).unwrap();

    let plan = session
        .generate_meal_plan(&weight_loss_preferences())
        .unwrap();
    assert_eq!(plan.target_calories, 1700);
    assert_eq!(session.state().meal_plan.as_ref(), Some(&plan));
    assert_eq!(repository.list_meal_plans("user-1").unwrap(), vec![plan]);
}

#[test]
fn test_session_keeps_every_generated_plan() {
    let (repository, engine) = session_parts();
    let mut session =
        ProfileSession::open("user-1", repository.clone(), engine.clone()).unwrap();

    let first = session
        .generate_meal_plan(&weight_loss_preferences())
        .unwrap();
    let second = session
        .generate_meal_plan(&AIPreferences::default())
        .unwrap();
    assert_eq!(first.id, "meal-plan-1");
    assert_eq!(second.id, "meal-plan-2");

    let mut reopened = ProfileSession::open("user-1", repository.clone(), engine).unwrap();
    let third = reopened
        .generate_meal_plan(&AIPreferences::default())
        .unwrap();
    assert_eq!(third.id, "meal-plan-3");

    let stored: Vec<String> = repository
        .list_meal_plans("user-1")
        .unwrap()
        .into_iter()
        .map(|plan| plan.id)
        .collect();
    assert_eq!(stored, vec!["meal-plan-1", "meal-plan-2", "meal-plan-3"]);
}

#[test]
fn test_session_rejects_invalid_preferences() {
    let (repository, engine) = session_parts();
    let mut session =
        ProfileSession::open("user-1", repository.clone(), engine).unwrap();

    let preferences = AIPreferences {
        family_size: 20,
        ..AIPreferences::default()
    };
    let err = session.generate_meal_plan(&preferences).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(session.state().meal_plan.is_none());
    assert!(repository.list_meal_plans("user-1").unwrap().is_empty());
}
