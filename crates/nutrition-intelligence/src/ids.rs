// ABOUTME: Injectable identifier generation for generated records such as meal plans
// ABOUTME: Sequential generator for deterministic output, UUID generator for persisted records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of identifiers for generated records
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier, prefixed with `prefix`
    fn next_id(&self, prefix: &str) -> String;
}

/// Counter-based generator: `prefix-1`, `prefix-2`, ...
///
/// A fresh generator yields the same sequence every time.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator starting at 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n}")
    }
}

/// Random UUID v4 generator
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_start_at_one() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id("meal-plan"), "meal-plan-1");
        assert_eq!(ids.next_id("meal-plan"), "meal-plan-2");
    }

    #[test]
    fn test_fresh_sequential_generators_agree() {
        let first = SequentialIdGenerator::new().next_id("x");
        let second = SequentialIdGenerator::new().next_id("x");
        assert_eq!(first, second);
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidIdGenerator;
        let a = ids.next_id("meal-plan");
        let b = ids.next_id("meal-plan");
        assert!(a.starts_with("meal-plan-"));
        assert_ne!(a, b);
    }
}
