// ABOUTME: Pure profile state transitions and a session binding them to a repository
// ABOUTME: ProfileState, ProfileAction, reduce, and ProfileSession with target recomputation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile state
//!
//! State changes are expressed as actions reduced into a new value. Any
//! change to the profile or the dietary preference recomputes the nutrition
//! target; a rejected profile clears the target and records why.

use crate::engine::NutritionEngine;
use crate::repository::ProfileRepository;
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{
    AIPreferences, DietaryPreferenceId, MealPlan, NutritionTarget, UserProfile,
};
use nutrition_intelligence::meal_plan::MEAL_PLAN_ID_PREFIX;
use nutrition_intelligence::{IdGenerator, SequentialIdGenerator};
use serde::{Deserialize, Serialize};
use std::mem;
use std::sync::Arc;
use tracing::{debug, info};

/// Snapshot of one user's nutrition state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileState {
    /// Current profile, if any
    pub profile: Option<UserProfile>,
    /// Dietary preference the target is split by
    pub preference_id: String,
    /// Target derived from profile and preference
    pub target: Option<NutritionTarget>,
    /// Why the last recomputation failed
    pub target_error: Option<String>,
    /// Most recently generated meal plan
    pub meal_plan: Option<MealPlan>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: None,
            preference_id: DietaryPreferenceId::None.as_str().to_owned(),
            target: None,
            target_error: None,
            meal_plan: None,
        }
    }
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    /// Replace the profile
    SetProfile(UserProfile),
    /// Switch dietary preference
    SetPreference(String),
    /// Record a generated meal plan
    SetMealPlan(MealPlan),
    /// Back to the empty state
    Reset,
}

/// Apply an action, producing the next state
#[must_use]
pub fn reduce(
    state: ProfileState,
    action: ProfileAction,
    engine: &NutritionEngine,
) -> ProfileState {
    match action {
        ProfileAction::SetProfile(profile) => recompute(
            ProfileState {
                profile: Some(profile),
                ..state
            },
            engine,
        ),
        ProfileAction::SetPreference(preference_id) => recompute(
            ProfileState {
                preference_id,
                ..state
            },
            engine,
        ),
        ProfileAction::SetMealPlan(plan) => ProfileState {
            meal_plan: Some(plan),
            ..state
        },
        ProfileAction::Reset => ProfileState::default(),
    }
}

fn recompute(state: ProfileState, engine: &NutritionEngine) -> ProfileState {
    let Some(profile) = &state.profile else {
        return state;
    };
    match engine.compute_nutrition_target(profile, &state.preference_id) {
        Ok(target) => ProfileState {
            target: Some(target),
            target_error: None,
            ..state
        },
        Err(e) => {
            debug!(error = %e, "target recomputation rejected");
            ProfileState {
                target: None,
                target_error: Some(e.to_string()),
                ..state
            }
        }
    }
}

/// One user's state bound to a repository
pub struct ProfileSession {
    user_id: String,
    repository: Arc<dyn ProfileRepository>,
    engine: Arc<NutritionEngine>,
    plan_ids: SequentialIdGenerator,
    state: ProfileState,
}

impl ProfileSession {
    /// Open a session, restoring the stored profile if there is one
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub fn open(
        user_id: impl Into<String>,
        repository: Arc<dyn ProfileRepository>,
        engine: Arc<NutritionEngine>,
    ) -> AppResult<Self> {
        let user_id = user_id.into();
        let mut state = ProfileState::default();
        if let Some(profile) = repository.get_profile(&user_id)? {
            state = reduce(state, ProfileAction::SetProfile(profile), &engine);
        }
        info!(user_id = %user_id, restored = state.profile.is_some(), "opened profile session");
        Ok(Self {
            user_id,
            repository,
            engine,
            plan_ids: SequentialIdGenerator::new(),
            state,
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &ProfileState {
        &self.state
    }

    /// User this session belongs to
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Apply an action and persist what it changed
    ///
    /// Profiles and meal plans are saved; preference changes and resets only
    /// affect the in-memory state.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub fn dispatch(&mut self, action: ProfileAction) -> AppResult<&ProfileState> {
        match &action {
            ProfileAction::SetProfile(profile) => {
                self.repository.save_profile(&self.user_id, profile.clone())?;
            }
            ProfileAction::SetMealPlan(plan) => {
                self.repository.save_meal_plan(&self.user_id, plan.clone())?;
            }
            ProfileAction::SetPreference(_) | ProfileAction::Reset => {}
        }
        let state = mem::take(&mut self.state);
        self.state = reduce(state, action, &self.engine);
        Ok(&self.state)
    }

    /// Synthesize a meal plan from validated preferences and record it
    ///
    /// A plan whose id is already stored for this user is given the next
    /// free `meal-plan-N` id, so earlier plans are never replaced.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` with the rejected fields if the preferences are
    /// invalid, or an error if the repository fails
    pub fn generate_meal_plan(&mut self, preferences: &AIPreferences) -> AppResult<MealPlan> {
        self.engine
            .validate_preferences(preferences)
            .into_result()
            .map_err(AppError::from)?;
        let mut plan = self.engine.synthesize_meal_plan(preferences);
        let stored = self.repository.list_meal_plans(&self.user_id)?;
        while stored.iter().any(|existing| existing.id == plan.id) {
            plan.id = self.plan_ids.next_id(MEAL_PLAN_ID_PREFIX);
        }
        self.dispatch(ProfileAction::SetMealPlan(plan.clone()))?;
        Ok(plan)
    }
}
