// ABOUTME: Training plan value types: sets, exercise entries, days, and week templates
// ABOUTME: The week template is the primary input to every analysis function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weighted effective set counts per muscle for one training week
///
/// Derived, recomputed on every call; never persisted by the engine.
pub type EffectiveVolumeMap = HashMap<String, f64>;

/// One realized set within a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SetSpec {
    /// Target repetitions
    pub reps: u32,
    /// Target load in the caller's weight unit; 0.0 means bodyweight
    pub load: f64,
}

impl SetSpec {
    /// Build a set spec
    #[must_use]
    pub const fn new(reps: u32, load: f64) -> Self {
        Self { reps, load }
    }

    /// Whether this is a bodyweight set (no external load)
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.load <= 0.0
    }
}

/// One exercise slot in a training day with its explicit set list
///
/// Callers ingesting loosely-typed plans normalize to this form before
/// handing data to the engine; the set list is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseEntry {
    /// Catalog exercise id; unknown ids contribute zero volume
    pub exercise_id: String,
    /// Ordered realized sets; the count drives volume credit
    pub sets: Vec<SetSpec>,
}

impl ExerciseEntry {
    /// Build an entry from an exercise id and its set list
    #[must_use]
    pub fn new(exercise_id: impl Into<String>, sets: Vec<SetSpec>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            sets,
        }
    }

    /// Uniform entry helper: `count` sets of `reps` reps at `load`
    #[must_use]
    pub fn uniform(exercise_id: impl Into<String>, count: usize, reps: u32, load: f64) -> Self {
        Self::new(exercise_id, vec![SetSpec::new(reps, load); count])
    }
}

/// One day of a repeating training week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingDay {
    /// Display label, e.g. "Push A" or "Rest"
    pub label: String,
    /// Rest days carry no exercises
    pub is_rest: bool,
    /// Ordered exercise entries; empty on rest days
    pub exercises: Vec<ExerciseEntry>,
}

impl TrainingDay {
    /// Build a rest day
    ///
    /// The rest flag and empty exercise list are set together so the two
    /// can never disagree at construction.
    #[must_use]
    pub fn rest(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_rest: true,
            exercises: Vec::new(),
        }
    }

    /// Build a training day from its exercise entries
    ///
    /// A non-rest day with zero exercises is valid and contributes zero
    /// volume; it is not treated as a rest day.
    #[must_use]
    pub fn training(label: impl Into<String>, exercises: Vec<ExerciseEntry>) -> Self {
        Self {
            label: label.into(),
            is_rest: false,
            exercises,
        }
    }
}

/// A repeating training week: a fixed-length ordered sequence of days
///
/// Typically seven days, but the engine does not require it; analysis
/// iterates whatever days are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct WeekTemplate {
    days: Vec<TrainingDay>,
}

impl WeekTemplate {
    /// Build a week template from its days
    #[must_use]
    pub fn new(days: Vec<TrainingDay>) -> Self {
        Self { days }
    }

    /// The ordered days of the week
    #[must_use]
    pub fn days(&self) -> &[TrainingDay] {
        &self.days
    }

    /// Days that actually train (not rest), in order
    pub fn training_days(&self) -> impl Iterator<Item = &TrainingDay> {
        self.days.iter().filter(|d| !d.is_rest)
    }

    /// Ids of every exercise appearing anywhere in the week
    #[must_use]
    pub fn exercise_ids(&self) -> std::collections::HashSet<String> {
        self.days
            .iter()
            .flat_map(|d| d.exercises.iter())
            .map(|e| e.exercise_id.clone())
            .collect()
    }
}

impl From<Vec<TrainingDay>> for WeekTemplate {
    fn from(days: Vec<TrainingDay>) -> Self {
        Self::new(days)
    }
}
