// ABOUTME: Exercise catalog value types: movement patterns, contribution roles, definitions
// ABOUTME: Immutable catalog data; never mutated at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

use crate::constants::contribution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Movement pattern an exercise belongs to
///
/// Used for push/pull/legs/core balance analysis; every catalog exercise
/// declares exactly one pattern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// Pressing movements (chest, shoulders, triceps)
    Push,
    /// Rowing and pulling movements (back, biceps)
    Pull,
    /// Lower-body movements (squats, hinges, lunges)
    Legs,
    /// Trunk and midline movements
    Core,
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Legs => "legs",
            Self::Core => "core",
        };
        write!(f, "{name}")
    }
}

/// How strongly an exercise stimulates a given muscle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContributionRole {
    /// Full stimulus; the muscle is a prime mover
    Direct,
    /// Significant secondary stimulus
    Partial,
    /// Low secondary stimulus
    Minimal,
}

impl ContributionRole {
    /// Canonical set-credit weight for this role
    #[must_use]
    pub const fn default_weight(self) -> f64 {
        match self {
            Self::Direct => contribution::DIRECT_WEIGHT,
            Self::Partial => contribution::PARTIAL_WEIGHT,
            Self::Minimal => contribution::MINIMAL_WEIGHT,
        }
    }
}

/// One muscle an exercise trains, with its set-credit weight
///
/// The weight is stored alongside the role because catalog data may tune
/// individual entries away from the role's canonical weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MuscleContribution {
    /// Muscle group name, e.g. "Chest" or "Front Delts"
    pub muscle: String,
    /// Stimulus classification
    pub role: ContributionRole,
    /// Effective-set credit per performed set (1.0, 0.5, or 0.25)
    pub weight: f64,
}

impl MuscleContribution {
    /// Build a contribution using the role's canonical weight
    #[must_use]
    pub fn new(muscle: impl Into<String>, role: ContributionRole) -> Self {
        Self {
            muscle: muscle.into(),
            role,
            weight: role.default_weight(),
        }
    }
}

/// A single catalog exercise definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseDefinition {
    /// Stable identifier, e.g. "barbell_bench_press"
    pub id: String,
    /// Display name, e.g. "Barbell Bench Press"
    pub name: String,
    /// Movement pattern for balance analysis
    pub pattern: MovementPattern,
    /// Equipment label, e.g. "Barbell" or "Bodyweight"
    pub equipment: String,
    /// Muscles trained, in descending stimulus order
    pub muscles: Vec<MuscleContribution>,
}

impl ExerciseDefinition {
    /// Names of the muscles this exercise trains directly
    #[must_use]
    pub fn direct_muscles(&self) -> Vec<String> {
        self.muscles
            .iter()
            .filter(|m| m.role == ContributionRole::Direct)
            .map(|m| m.muscle.clone())
            .collect()
    }
}
