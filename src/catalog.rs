// ABOUTME: Injected lookup tables: exercise catalog and volume-landmark table
// ABOUTME: Immutable once built; passed into the engine so tests can substitute fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Catalog and Landmark Lookups
//!
//! The engine consumes two read-only tables: the exercise catalog
//! (id → definition) and the volume-landmark table (muscle → weekly set
//! landmarks). Both lookups are total: absence is a valid, non-error
//! outcome. An exercise id missing from the catalog contributes zero
//! volume; a muscle missing from the landmark table is aggregated but
//! excluded from goal scoring and alerting.

use crate::models::ExerciseDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weekly set-count landmarks for one muscle group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VolumeLandmark {
    /// Minimum effective volume: below this is a training gap
    pub mev: f64,
    /// Maximum adaptive volume: the 100%-of-target reference
    pub mav: f64,
    /// Maximum recoverable volume: above this is flagged as excess
    pub mrv: f64,
}

impl VolumeLandmark {
    /// Build a landmark triple
    #[must_use]
    pub const fn new(mev: f64, mav: f64, mrv: f64) -> Self {
        Self { mev, mav, mrv }
    }
}

/// Immutable mapping of exercise id to definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    exercises: HashMap<String, ExerciseDefinition>,
}

impl ExerciseCatalog {
    /// Build a catalog from a list of definitions, keyed by id
    #[must_use]
    pub fn new(definitions: Vec<ExerciseDefinition>) -> Self {
        Self {
            exercises: definitions
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
        }
    }

    /// Look up a definition by id; `None` for unknown ids
    #[must_use]
    pub fn exercise_by_id(&self, id: &str) -> Option<&ExerciseDefinition> {
        self.exercises.get(id)
    }

    /// Every definition in the catalog, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &ExerciseDefinition> {
        self.exercises.values()
    }

    /// Number of catalog entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Immutable mapping of muscle name to volume landmarks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkTable {
    landmarks: HashMap<String, VolumeLandmark>,
}

impl LandmarkTable {
    /// Build a table from (muscle, landmark) pairs
    #[must_use]
    pub fn new(entries: Vec<(String, VolumeLandmark)>) -> Self {
        Self {
            landmarks: entries.into_iter().collect(),
        }
    }

    /// Look up the landmarks for a muscle; `None` excludes it from scoring
    #[must_use]
    pub fn landmark_for(&self, muscle: &str) -> Option<&VolumeLandmark> {
        self.landmarks.get(muscle)
    }

    /// Every (muscle, landmark) pair, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &VolumeLandmark)> {
        self.landmarks.iter()
    }

    /// Number of landmarked muscles
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}
