// ABOUTME: End-to-end tests for the nutrition-cli binary
// ABOUTME: Runs each subcommand against JSON input files and stdin, checking stdout and exit status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{goal, reference_food, reference_profile, stats, weight_loss_preferences};
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

const CLI: &str = env!("CARGO_BIN_EXE_nutrition-cli");

fn input_file<T: Serialize>(value: &T) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, value).unwrap();
    file.flush().unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(CLI)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .output()
        .unwrap()
}

fn run_with_file<T: Serialize>(command: &str, value: &T, extra: &[&str]) -> Output {
    let file = input_file(value);
    let path = file.path().to_str().unwrap().to_owned();
    let mut args = vec![command, "--input", path.as_str()];
    args.extend_from_slice(extra);
    run(&args)
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// SUCCESS PATH TESTS
// ============================================================================

#[test]
fn test_validate_command() {
    let output = run_with_file("validate", &reference_profile(), &[]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["is_valid"], true);
}

#[test]
fn test_target_command() {
    let output = run_with_file("target", &reference_profile(), &[]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["calories"], 1882);
    assert_eq!(json["protein_g"], 141);
    assert_eq!(json["carbs_g"], 188);
    assert_eq!(json["fat_g"], 63);
    assert_eq!(json["dietary_preference"], "none");
}

#[test]
fn test_target_command_preference_override() {
    let output = run_with_file("target", &reference_profile(), &["--preference", "keto"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["dietary_preference"], "keto");
    assert_eq!(json["carbs_g"], 24);
}

#[test]
fn test_score_command_with_allergies() {
    let mut food = reference_food();
    food.allergens = vec!["Milk".to_owned()];
    let output = run_with_file("score", &food, &["--allergy", "milk", "--allergy", "peanut"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["score"], 66);
    assert_eq!(json["grade"], "B");
    assert_eq!(json["high_priority_allergens"], json!(["Milk"]));
    assert_eq!(json["user_allergies"], json!(["milk"]));
}

#[test]
fn test_meal_plan_command_from_stdin() {
    let mut child = Command::new(CLI)
        .arg("meal-plan")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let stdin = child.stdin.as_mut().unwrap();
        serde_json::to_writer(stdin, &weight_loss_preferences()).unwrap();
    }
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["target_calories"], 1700);
    assert_eq!(json["slots"].as_array().unwrap().len(), 4);
    assert_eq!(json["metadata"]["category"], "weight-loss");
}

#[test]
fn test_shopping_list_command() {
    let output = run_with_file("shopping-list", &json!({ "family_size": 2 }), &[]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 13);
    let honey = items.iter().find(|item| item["name"] == "honey").unwrap();
    assert_eq!(honey["quantity"], 40.0);
}

#[test]
fn test_insights_command() {
    let progress = json!({
        "stats": stats(60.0, 4.8),
        "goals": [goal("run-10k", 30.0, 3)],
    });
    let output = run_with_file("insights", &progress, &[]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|insight| insight["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["low-adherence", "high-satisfaction", "goal-deadline:run-10k"]
    );
}

// ============================================================================
// ERROR PATH TESTS
// ============================================================================

#[test]
fn test_unknown_preference_reports_error_json() {
    let output = run_with_file("target", &reference_profile(), &["--preference", "carnivore"]);
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["error"]["code"], "UNKNOWN_PREFERENCE");
    assert_eq!(json["error"]["details"]["value"], "carnivore");
}

#[test]
fn test_invalid_profile_target_lists_fields() {
    let mut profile = reference_profile();
    profile.age = 7;
    let output = run_with_file("target", &profile, &[]);
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert!(json["error"]["details"]["fields"]["age"].is_string());
}

#[test]
fn test_invalid_preferences_rejected() {
    let output = run_with_file("meal-plan", &json!({ "family_size": 40 }), &[]);
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert!(json["error"]["details"]["fields"]["family_size"].is_string());
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    file.flush().unwrap();
    let output = run(&["validate", "--input", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(stdout_json(&output)["error"]["code"], "SERIALIZATION_ERROR");
}

#[test]
fn test_missing_input_file() {
    let output = run(&["validate", "--input", "/nonexistent/profile.json"]);
    assert!(!output.status.success());
    assert_eq!(stdout_json(&output)["error"]["code"], "INVALID_INPUT");
}
