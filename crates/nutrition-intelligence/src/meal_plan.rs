// ABOUTME: Expands meal-planning preferences into a four-slot daily plan skeleton
// ABOUTME: Calorie and macro targets per goal, fixed slot templates, and shopping list merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Plan Synthesizer
//!
//! Plans are built in four steps:
//!
//! 1. Daily calories: base, adjusted for weight-loss / muscle-gain goals and
//!    for each household member beyond the first.
//! 2. Macro ratios by goal (muscle gain wins over weight loss).
//! 3. Category from dietary restrictions, then goals.
//! 4. Breakfast, lunch, and dinner each get a quarter of the day; the snack
//!    gets a quarter scaled by the snack factor. The remainder is left
//!    unallocated.

use crate::config::MealPlanConfig;
use crate::energy::round_to_u32;
use crate::ids::{IdGenerator, SequentialIdGenerator};
use crate::macro_allocator::allocate_macros;
use nutrition_core::models::{
    AIPreferences, CookingSkill, DietaryRestriction, Difficulty, HealthGoal, MacroGrams,
    MacroRatios, MealCategory, MealPlan, MealPlanMetadata, MealSlot, MealType, ShoppingItem,
    ShoppingList, TemplateIngredient, TemplateMeal,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Prefix of generated plan identifiers
pub const MEAL_PLAN_ID_PREFIX: &str = "meal-plan";

/// Fraction of the day's calories in one main-meal slot
const MAIN_MEAL_SHARE: f64 = 0.25;

struct IngredientSpec {
    name: &'static str,
    quantity: f64,
    unit: &'static str,
}

struct MealTemplateSpec {
    meal_type: MealType,
    template_id: &'static str,
    name: &'static str,
    description: &'static str,
    calories: u32,
    prep_time_minutes: u32,
    ingredients: &'static [IngredientSpec],
    tags: &'static [&'static str],
}

static MEAL_TEMPLATES: [MealTemplateSpec; 4] = [
    MealTemplateSpec {
        meal_type: MealType::Breakfast,
        template_id: "breakfast-overnight-oats",
        name: "Overnight Oats with Berries",
        description: "Rolled oats soaked overnight in milk, topped with blueberries and honey",
        calories: 420,
        prep_time_minutes: 10,
        ingredients: &[
            IngredientSpec {
                name: "rolled oats",
                quantity: 50.0,
                unit: "g",
            },
            IngredientSpec {
                name: "milk",
                quantity: 200.0,
                unit: "ml",
            },
            IngredientSpec {
                name: "blueberries",
                quantity: 75.0,
                unit: "g",
            },
            IngredientSpec {
                name: "honey",
                quantity: 10.0,
                unit: "g",
            },
        ],
        tags: &["make-ahead", "high-fiber"],
    },
    MealTemplateSpec {
        meal_type: MealType::Lunch,
        template_id: "lunch-chicken-quinoa-bowl",
        name: "Grilled Chicken Quinoa Bowl",
        description: "Grilled chicken breast over quinoa and baby spinach with olive oil",
        calories: 560,
        prep_time_minutes: 25,
        ingredients: &[
            IngredientSpec {
                name: "chicken breast",
                quantity: 120.0,
                unit: "g",
            },
            IngredientSpec {
                name: "quinoa",
                quantity: 80.0,
                unit: "g",
            },
            IngredientSpec {
                name: "baby spinach",
                quantity: 50.0,
                unit: "g",
            },
            IngredientSpec {
                name: "olive oil",
                quantity: 10.0,
                unit: "ml",
            },
        ],
        tags: &["high-protein", "meal-prep"],
    },
    MealTemplateSpec {
        meal_type: MealType::Dinner,
        template_id: "dinner-baked-salmon",
        name: "Baked Salmon with Roasted Vegetables",
        description: "Oven-baked salmon fillet with broccoli and sweet potato",
        calories: 610,
        prep_time_minutes: 35,
        ingredients: &[
            IngredientSpec {
                name: "salmon fillet",
                quantity: 150.0,
                unit: "g",
            },
            IngredientSpec {
                name: "broccoli",
                quantity: 150.0,
                unit: "g",
            },
            IngredientSpec {
                name: "sweet potato",
                quantity: 150.0,
                unit: "g",
            },
            IngredientSpec {
                name: "olive oil",
                quantity: 10.0,
                unit: "ml",
            },
        ],
        tags: &["omega-3", "one-pan"],
    },
    MealTemplateSpec {
        meal_type: MealType::Snack,
        template_id: "snack-greek-yogurt",
        name: "Greek Yogurt with Almonds",
        description: "Plain Greek yogurt with toasted almonds and a drizzle of honey",
        calories: 230,
        prep_time_minutes: 5,
        ingredients: &[
            IngredientSpec {
                name: "greek yogurt",
                quantity: 150.0,
                unit: "g",
            },
            IngredientSpec {
                name: "almonds",
                quantity: 20.0,
                unit: "g",
            },
            IngredientSpec {
                name: "honey",
                quantity: 10.0,
                unit: "g",
            },
        ],
        tags: &["quick", "high-protein"],
    },
];

impl MealTemplateSpec {
    fn to_template(&self) -> TemplateMeal {
        TemplateMeal {
            template_id: self.template_id.to_owned(),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            calories: self.calories,
            prep_time_minutes: self.prep_time_minutes,
            ingredients: self
                .ingredients
                .iter()
                .map(|ingredient| TemplateIngredient {
                    name: ingredient.name.to_owned(),
                    quantity: ingredient.quantity,
                    unit: ingredient.unit.to_owned(),
                })
                .collect(),
            tags: self.tags.iter().map(|tag| (*tag).to_owned()).collect(),
        }
    }
}

/// The fixed template meal for a slot type
#[must_use]
pub fn template_for(meal_type: MealType) -> Option<TemplateMeal> {
    MEAL_TEMPLATES
        .iter()
        .find(|spec| spec.meal_type == meal_type)
        .map(MealTemplateSpec::to_template)
}

/// Builds meal plan skeletons from preferences
pub struct MealPlanSynthesizer {
    config: MealPlanConfig,
    ids: Option<Arc<dyn IdGenerator>>,
}

impl MealPlanSynthesizer {
    /// Create a synthesizer that numbers every plan from a fresh sequence
    #[must_use]
    pub const fn new(config: MealPlanConfig) -> Self {
        Self { config, ids: None }
    }

    /// Draw plan identifiers from a shared generator instead
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Synthesize a plan; identical input yields an identical plan under the default generator
    #[must_use]
    pub fn synthesize(&self, preferences: &AIPreferences) -> MealPlan {
        let target_calories = self.daily_calories(preferences);
        let ratios = self.ratios_for(preferences);
        let target_macros = allocate_macros(target_calories, &ratios).grams;
        let category = category_for(preferences);

        let slots = MealType::ALL
            .into_iter()
            .filter_map(|meal_type| self.slot(meal_type, target_calories, &target_macros))
            .collect();

        let cuisine = preferences.cuisine_preferences.first().cloned();
        let plan = MealPlan {
            id: self.next_plan_id(),
            name: plan_name(cuisine.as_deref(), category),
            target_calories,
            target_macros,
            slots,
            metadata: MealPlanMetadata {
                difficulty: difficulty_for(preferences.cooking_skill),
                category,
                ai_generated: true,
                cuisine,
                max_prep_minutes: preferences.max_prep_minutes,
                budget: preferences.budget,
                servings: preferences.family_size,
            },
        };

        debug!(
            plan_id = %plan.id,
            target_calories,
            allocated = plan.allocated_calories(),
            ?category,
            "synthesized meal plan"
        );

        plan
    }

    fn daily_calories(&self, preferences: &AIPreferences) -> u32 {
        let mut calories = i64::from(self.config.base_calories);
        if preferences.has_goal(HealthGoal::WeightLoss) {
            calories += i64::from(self.config.weight_loss_delta_kcal);
        }
        if preferences.has_goal(HealthGoal::MuscleGain) {
            calories += i64::from(self.config.muscle_gain_delta_kcal);
        }
        if preferences.family_size > 1 {
            calories += i64::from(self.config.family_member_delta_kcal)
                * i64::from(preferences.family_size - 1);
        }
        u32::try_from(calories.max(0)).unwrap_or(u32::MAX)
    }

    fn ratios_for(&self, preferences: &AIPreferences) -> MacroRatios {
        if preferences.has_goal(HealthGoal::MuscleGain) {
            self.config.muscle_gain_ratios
        } else if preferences.has_goal(HealthGoal::WeightLoss) {
            self.config.weight_loss_ratios
        } else {
            self.config.default_ratios
        }
    }

    fn slot(
        &self,
        meal_type: MealType,
        target_calories: u32,
        target: &MacroGrams,
    ) -> Option<MealSlot> {
        let share_factor = match meal_type {
            MealType::Snack => self.config.snack_share_factor,
            MealType::Breakfast | MealType::Lunch | MealType::Dinner => 1.0,
        };
        let calorie_share = MAIN_MEAL_SHARE * share_factor;
        let calories = round_to_u32(f64::from(target_calories) / 4.0 * share_factor);

        let mut meal = template_for(meal_type)?;
        meal.calories = calories;

        Some(MealSlot {
            meal_type,
            calorie_share,
            calories,
            macros: MacroGrams {
                protein_g: round_to_u32(f64::from(target.protein_g) * calorie_share),
                carbs_g: round_to_u32(f64::from(target.carbs_g) * calorie_share),
                fat_g: round_to_u32(f64::from(target.fat_g) * calorie_share),
            },
            meal,
        })
    }

    fn next_plan_id(&self) -> String {
        match &self.ids {
            Some(ids) => ids.next_id(MEAL_PLAN_ID_PREFIX),
            None => SequentialIdGenerator::new().next_id(MEAL_PLAN_ID_PREFIX),
        }
    }
}

impl fmt::Debug for MealPlanSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MealPlanSynthesizer")
            .field("config", &self.config)
            .field("shared_ids", &self.ids.is_some())
            .finish()
    }
}

impl Default for MealPlanSynthesizer {
    fn default() -> Self {
        Self::new(MealPlanConfig::default())
    }
}

/// Merge the ingredients of every slot into one list, scaled by servings
///
/// Items are keyed by name and unit and sorted by name.
#[must_use]
pub fn build_shopping_list(plan: &MealPlan) -> ShoppingList {
    let servings = f64::from(plan.metadata.servings);
    let mut merged: BTreeMap<(String, String), ShoppingItem> = BTreeMap::new();

    for slot in &plan.slots {
        for ingredient in &slot.meal.ingredients {
            let item = merged
                .entry((ingredient.name.clone(), ingredient.unit.clone()))
                .or_insert_with(|| ShoppingItem {
                    name: ingredient.name.clone(),
                    quantity: 0.0,
                    unit: ingredient.unit.clone(),
                    used_in: Vec::new(),
                });
            item.quantity += ingredient.quantity * servings;
            if !item.used_in.contains(&slot.meal_type) {
                item.used_in.push(slot.meal_type);
            }
        }
    }

    ShoppingList {
        plan_id: plan.id.clone(),
        items: merged.into_values().collect(),
    }
}

fn category_for(preferences: &AIPreferences) -> MealCategory {
    if preferences.has_restriction(DietaryRestriction::Vegan) {
        MealCategory::Vegan
    } else if preferences.has_restriction(DietaryRestriction::Vegetarian) {
        MealCategory::Vegetarian
    } else if preferences.has_goal(HealthGoal::WeightLoss) {
        MealCategory::WeightLoss
    } else if preferences.has_goal(HealthGoal::MuscleGain) {
        MealCategory::MuscleGain
    } else {
        MealCategory::Maintenance
    }
}

const fn difficulty_for(skill: CookingSkill) -> Difficulty {
    match skill {
        CookingSkill::Beginner => Difficulty::Easy,
        CookingSkill::Intermediate => Difficulty::Medium,
        CookingSkill::Advanced => Difficulty::Hard,
    }
}

fn plan_name(cuisine: Option<&str>, category: MealCategory) -> String {
    let category = match category {
        MealCategory::Vegetarian => "Vegetarian",
        MealCategory::Vegan => "Vegan",
        MealCategory::WeightLoss => "Weight Loss",
        MealCategory::MuscleGain => "Muscle Gain",
        MealCategory::Maintenance => "Balanced",
    };
    match cuisine {
        Some(cuisine) => format!("{cuisine} {category} Meal Plan"),
        None => format!("{category} Meal Plan"),
    }
}
