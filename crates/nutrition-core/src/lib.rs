// ABOUTME: Core types and constants for the nutrition calculation engine
// ABOUTME: Foundation crate with error handling, domain models, and reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! engine. Everything here is plain data: the calculation logic lives in
//! `nutrition-intelligence`, which depends on this crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and field-level validation errors
//! - **constants**: Profile limits, energy conversion factors, allergen lists
//! - **models**: Profiles, food items, meal plans, insights, progress records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profiles, food items, meal plans, insights)
pub mod models;
