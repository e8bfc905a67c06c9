// ABOUTME: nutrition-cli - command-line front end for the nutrition engine
// ABOUTME: Reads a JSON document from a file or stdin and prints the computed JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Validate a profile
//! nutrition-cli validate --input profile.json
//!
//! # Daily targets under a dietary preference
//! nutrition-cli target --input profile.json --preference vegan
//!
//! # Score a food item, also checking the user's allergies
//! nutrition-cli score --input food.json --allergy peanut --allergy milk
//!
//! # Meal plan and shopping list from preferences read on stdin
//! cat prefs.json | nutrition-cli meal-plan
//! cat prefs.json | nutrition-cli shopping-list
//!
//! # Insights from {"stats": {...}, "goals": [...]}
//! nutrition-cli insights --input progress.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use nutrition_engine::errors::ErrorResponse;
use nutrition_engine::logging::LoggingConfig;
use nutrition_engine::NutritionEngine;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Nutrition calculation and recommendation engine",
    long_about = "Computes nutrition targets, food scores, meal plans, and insights from JSON input."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate a user profile
    Validate {
        /// Profile JSON file (stdin when omitted or "-")
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Compute daily calorie, macro, and water targets
    Target {
        /// Profile JSON file (stdin when omitted or "-")
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Dietary preference (defaults to the profile's own)
        #[arg(long, short = 'p')]
        preference: Option<String>,
    },

    /// Score a food item
    Score {
        /// Food item JSON file (stdin when omitted or "-")
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// A declared allergy to check the food against (repeatable)
        #[arg(long = "allergy")]
        allergies: Vec<String>,
    },

    /// Generate a meal plan from preferences
    MealPlan {
        /// Preferences JSON file (stdin when omitted or "-")
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Generate insights from progress statistics and goals
    Insights {
        /// Progress JSON file (stdin when omitted or "-")
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Generate a meal plan and print its merged shopping list
    ShoppingList {
        /// Preferences JSON file (stdin when omitted or "-")
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("logging disabled: {e:#}");
    }

    let engine = NutritionEngine::from_global();
    let result = match cli.command {
        Command::Validate { input } => commands::validate(&engine, input.as_deref()),
        Command::Target { input, preference } => {
            commands::target(&engine, input.as_deref(), preference.as_deref())
        }
        Command::Score { input, allergies } => {
            commands::score(&engine, input.as_deref(), &allergies)
        }
        Command::MealPlan { input } => commands::meal_plan(&engine, input.as_deref()),
        Command::Insights { input } => commands::insights(&engine, input.as_deref()),
        Command::ShoppingList { input } => commands::shopping_list(&engine, input.as_deref()),
    };

    match result {
        Ok(()) => {
            info!("command completed");
            ExitCode::SUCCESS
        }
        Err(error) => {
            warn!(code = ?error.code, "command failed: {}", error.message);
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("failed to render error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
