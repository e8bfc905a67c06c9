// ABOUTME: Criterion benchmarks for the nutrition engine operations
// ABOUTME: Measures target computation, food scoring, meal plan synthesis, and insight generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition engine.
//!
//! Every operation is a pure computation, so these track allocation and
//! formatting overhead more than anything else.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrition_engine::models::{
    AIPreferences, DietaryPreferenceId, FoodItem, FoodMacros, Goal, HealthGoal, Micronutrient,
    ProgressStats, Sex, UserProfile,
};
use nutrition_engine::NutritionEngine;

/// Goal counts for insight generation scaling
const GOAL_COUNTS: [usize; 3] = [1, 10, 100];

fn profile() -> UserProfile {
    UserProfile {
        age: 34,
        sex: Sex::Male,
        height_cm: 178.0,
        weight_kg: 80.0,
        activity_factor: 1.55,
        goal_delta_kcal: -500,
        body_fat_pct: Some(18.0),
        waist_cm: Some(84.0),
        hip_cm: Some(98.0),
        dietary_preference_id: "none".to_owned(),
        meals_per_day: 3,
    }
}

fn food() -> FoodItem {
    FoodItem {
        name: "Granola Bar".to_owned(),
        serving: "1 bar (40 g)".to_owned(),
        calories: 190.0,
        macros: FoodMacros {
            protein: 4.0,
            carbs: 29.0,
            fat: 7.0,
        },
        micros: vec![
            Micronutrient::new("Dietary Fiber", 2.0, "g"),
            Micronutrient::new("Total Sugars", 12.0, "g"),
            Micronutrient::new("Vitamin E", 1.2, "mg"),
            Micronutrient::new("Iron Mineral", 1.1, "mg"),
        ],
        ingredients: vec!["oats".to_owned(), "honey".to_owned(), "almonds".to_owned()],
        allergens: vec!["Tree Nuts".to_owned(), "Soy Lecithin".to_owned()],
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn goals(count: usize, as_of: NaiveDate) -> Vec<Goal> {
    (0..count)
        .map(|index| Goal {
            id: format!("goal-{index}"),
            title: format!("Benchmark goal {index}"),
            progress: (index * 13 % 100) as f64,
            deadline: as_of
                .checked_add_days(Days::new((index % 14) as u64))
                .unwrap_or(as_of),
        })
        .collect()
}

fn bench_nutrition_target(c: &mut Criterion) {
    let engine = NutritionEngine::default();
    let profile = profile();
    let mut group = c.benchmark_group("nutrition_target");

    for preference in DietaryPreferenceId::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(preference),
            &preference.as_str(),
            |b, preference| {
                b.iter(|| engine.compute_nutrition_target(black_box(&profile), preference));
            },
        );
    }

    group.bench_function("body_metrics", |b| {
        b.iter(|| engine.body_metrics(black_box(&profile)));
    });

    group.finish();
}

fn bench_score_food(c: &mut Criterion) {
    let engine = NutritionEngine::default();
    let food = food();
    let allergies = vec!["peanut".to_owned(), "nuts".to_owned(), "soy".to_owned()];
    let mut group = c.benchmark_group("score_food");

    group.bench_function("single_item", |b| {
        b.iter(|| engine.score_food(black_box(&food)));
    });

    group.bench_function("user_allergies", |b| {
        b.iter(|| engine.allergies_in(black_box(&food), black_box(&allergies)));
    });

    group.finish();
}

fn bench_meal_plan(c: &mut Criterion) {
    let engine = NutritionEngine::default();
    let preferences = AIPreferences {
        goals: vec![HealthGoal::WeightLoss, HealthGoal::Energy],
        cuisine_preferences: vec!["Mediterranean".to_owned()],
        family_size: 4,
        ..AIPreferences::default()
    };
    let mut group = c.benchmark_group("meal_plan");

    group.bench_function("synthesize", |b| {
        b.iter(|| engine.synthesize_meal_plan(black_box(&preferences)));
    });

    let plan = engine.synthesize_meal_plan(&preferences);
    group.bench_function("shopping_list", |b| {
        b.iter(|| engine.build_shopping_list(black_box(&plan)));
    });

    group.finish();
}

fn bench_insights(c: &mut Criterion) {
    let engine = NutritionEngine::default();
    let Some(as_of) = NaiveDate::from_ymd_opt(2025, 3, 1) else {
        return;
    };
    let stats = ProgressStats {
        as_of,
        adherence_rate: 62.0,
        average_rating: 4.7,
    };
    let mut group = c.benchmark_group("insights");

    for count in GOAL_COUNTS {
        let goals = goals(count, as_of);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("goals", count), &goals, |b, goals| {
            b.iter(|| engine.generate_insights(black_box(&stats), black_box(goals)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_nutrition_target,
    bench_score_food,
    bench_meal_plan,
    bench_insights
);
criterion_main!(benches);
