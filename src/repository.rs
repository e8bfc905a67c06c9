// ABOUTME: Storage seam for user profiles and generated meal plans
// ABOUTME: ProfileRepository trait with a concurrent in-memory implementation backed by DashMap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dashmap::DashMap;
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{MealPlan, UserProfile};
use tracing::debug;

/// Persistence for profiles and meal plans, keyed by user id
pub trait ProfileRepository: Send + Sync {
    /// Fetch a user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>>;

    /// Insert or replace a user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    fn save_profile(&self, user_id: &str, profile: UserProfile) -> AppResult<()>;

    /// Remove a user's profile and their meal plans
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the user has no profile
    fn delete_profile(&self, user_id: &str) -> AppResult<()>;

    /// Store a meal plan for a user, replacing one with the same id
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    fn save_meal_plan(&self, user_id: &str, plan: MealPlan) -> AppResult<()>;

    /// Fetch one of a user's meal plans by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    fn get_meal_plan(&self, user_id: &str, plan_id: &str) -> AppResult<Option<MealPlan>>;

    /// All of a user's meal plans in the order they were first saved
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    fn list_meal_plans(&self, user_id: &str) -> AppResult<Vec<MealPlan>>;
}

/// Process-local repository; contents are lost when it is dropped
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    profiles: DashMap<String, UserProfile>,
    meal_plans: DashMap<String, Vec<MealPlan>>,
}

impl InMemoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    #[must_use]
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

impl ProfileRepository for InMemoryRepository {
    fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(user_id).map(|entry| entry.value().clone()))
    }

    fn save_profile(&self, user_id: &str, profile: UserProfile) -> AppResult<()> {
        self.profiles.insert(user_id.to_owned(), profile);
        debug!(user_id, "saved profile");
        Ok(())
    }

    fn delete_profile(&self, user_id: &str) -> AppResult<()> {
        self.profiles
            .remove(user_id)
            .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;
        self.meal_plans.remove(user_id);
        debug!(user_id, "deleted profile");
        Ok(())
    }

    fn save_meal_plan(&self, user_id: &str, plan: MealPlan) -> AppResult<()> {
        let mut plans = self.meal_plans.entry(user_id.to_owned()).or_default();
        match plans.iter_mut().find(|existing| existing.id == plan.id) {
            Some(existing) => *existing = plan,
            None => plans.push(plan),
        }
        Ok(())
    }

    fn get_meal_plan(&self, user_id: &str, plan_id: &str) -> AppResult<Option<MealPlan>> {
        Ok(self.meal_plans.get(user_id).and_then(|plans| {
            plans
                .value()
                .iter()
                .find(|plan| plan.id == plan_id)
                .cloned()
        }))
    }

    fn list_meal_plans(&self, user_id: &str) -> AppResult<Vec<MealPlan>> {
        Ok(self
            .meal_plans
            .get(user_id)
            .map_or_else(Vec::new, |plans| plans.value().clone()))
    }
}
