// ABOUTME: Meal planning models: preferences in, plan skeleton and shopping list out
// ABOUTME: AIPreferences, MealType, TemplateMeal, MealSlot, MealPlan, ShoppingList
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::MacroGrams;
use serde::{Deserialize, Serialize};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Slots in plan order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// Health goals a user can select for meal planning
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum HealthGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus, higher protein
    MuscleGain,
    /// Keep current weight
    Maintenance,
    /// Steadier daytime energy
    Energy,
    /// Cardiovascular health
    HeartHealth,
}

/// Dietary restrictions a user can select for meal planning
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten
    GlutenFree,
    /// No dairy
    DairyFree,
    /// Very low carbohydrate
    Keto,
    /// Whole-food, grain-free
    Paleo,
}

/// Self-reported cooking skill
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CookingSkill {
    /// Simple assembly recipes
    #[default]
    Beginner,
    /// Comfortable with most techniques
    Intermediate,
    /// Complex multi-step recipes
    Advanced,
}

/// Grocery budget band
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    /// Budget-conscious
    Low,
    /// Typical spend
    #[default]
    Medium,
    /// Premium ingredients welcome
    High,
}

/// Recipe difficulty shown on a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Beginner friendly
    Easy,
    /// Some technique required
    Medium,
    /// Advanced technique required
    Hard,
}

/// High-level plan category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MealCategory {
    /// Plant-based with dairy/eggs
    Vegetarian,
    /// Fully plant-based
    Vegan,
    /// Deficit-oriented
    WeightLoss,
    /// Surplus, protein-forward
    MuscleGain,
    /// Balanced
    Maintenance,
}

/// Meal-planning preferences collected from the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AIPreferences {
    /// Selected health goals
    #[serde(default)]
    pub goals: Vec<HealthGoal>,
    /// Selected dietary restrictions
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
    /// Preferred cuisines, most preferred first
    #[serde(default)]
    pub cuisine_preferences: Vec<String>,
    /// Cooking skill
    #[serde(default)]
    pub cooking_skill: CookingSkill,
    /// Longest acceptable preparation time per meal (minutes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_prep_minutes: Option<u32>,
    /// Grocery budget
    #[serde(default)]
    pub budget: Budget,
    /// Number of people the plan feeds
    #[serde(default = "default_family_size")]
    pub family_size: u32,
}

const fn default_family_size() -> u32 {
    1
}

impl Default for AIPreferences {
    fn default() -> Self {
        Self {
            goals: Vec::new(),
            dietary_restrictions: Vec::new(),
            cuisine_preferences: Vec::new(),
            cooking_skill: CookingSkill::default(),
            max_prep_minutes: None,
            budget: Budget::default(),
            family_size: default_family_size(),
        }
    }
}

impl AIPreferences {
    /// Whether a goal was selected
    #[must_use]
    pub fn has_goal(&self, goal: HealthGoal) -> bool {
        self.goals.contains(&goal)
    }

    /// Whether a restriction was selected
    #[must_use]
    pub fn has_restriction(&self, restriction: DietaryRestriction) -> bool {
        self.dietary_restrictions.contains(&restriction)
    }
}

/// One ingredient line of a template meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateIngredient {
    /// Ingredient name
    pub name: String,
    /// Amount for one serving
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
}

/// A meal copied from the fixed template table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateMeal {
    /// Template key
    pub template_id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Calories for this slot (overrides the template's nominal value)
    pub calories: u32,
    /// Preparation time in minutes
    pub prep_time_minutes: u32,
    /// Ingredients for one serving
    pub ingredients: Vec<TemplateIngredient>,
    /// Free-form tags
    pub tags: Vec<String>,
}

/// A single meal slot in a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSlot {
    /// Slot type
    pub meal_type: MealType,
    /// Fraction of the daily target assigned to this slot
    pub calorie_share: f64,
    /// Slot calories
    pub calories: u32,
    /// Slot macro grams
    pub macros: MacroGrams,
    /// Template meal filling the slot
    pub meal: TemplateMeal,
}

/// Descriptive metadata of a generated plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlanMetadata {
    /// Difficulty derived from cooking skill
    pub difficulty: Difficulty,
    /// Category derived from restrictions and goals
    pub category: MealCategory,
    /// Whether the plan was synthesized rather than hand-written
    pub ai_generated: bool,
    /// Preferred cuisine, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Preparation time limit, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_prep_minutes: Option<u32>,
    /// Grocery budget
    pub budget: Budget,
    /// Servings per meal (family size)
    pub servings: u32,
}

/// A generated daily meal plan skeleton
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    /// Plan identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Daily calorie target
    pub target_calories: u32,
    /// Daily macro targets
    pub target_macros: MacroGrams,
    /// Slots in breakfast, lunch, dinner, snack order
    pub slots: Vec<MealSlot>,
    /// Descriptive metadata
    pub metadata: MealPlanMetadata,
}

impl MealPlan {
    /// Slot of the given type
    #[must_use]
    pub fn slot(&self, meal_type: MealType) -> Option<&MealSlot> {
        self.slots.iter().find(|slot| slot.meal_type == meal_type)
    }

    /// Sum of slot calories
    #[must_use]
    pub fn allocated_calories(&self) -> u32 {
        self.slots.iter().map(|slot| slot.calories).sum()
    }
}

/// Aggregated grocery line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    /// Ingredient name
    pub name: String,
    /// Total quantity for the whole household
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
    /// Slots that use this ingredient
    pub used_in: Vec<MealType>,
}

/// Grocery list derived from a meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingList {
    /// Plan the list was built from
    pub plan_id: String,
    /// Items sorted by name
    pub items: Vec<ShoppingItem>,
}
