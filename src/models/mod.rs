// ABOUTME: Value types consumed by the volume engine
// ABOUTME: All entities are owned values with no shared mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! Core data models for exercise catalog entries and training plans
//!
//! Report types produced by the analysis calculators live next to their
//! calculators in [`crate::engine`]; this module holds the input side.

/// Exercise catalog value types (movement patterns, muscle contributions)
pub mod exercise;

/// Training plan value types (sets, days, week templates)
pub mod plan;

pub use exercise::{ContributionRole, ExerciseDefinition, MovementPattern, MuscleContribution};
pub use plan::{EffectiveVolumeMap, ExerciseEntry, SetSpec, TrainingDay, WeekTemplate};
