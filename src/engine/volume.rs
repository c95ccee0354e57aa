// ABOUTME: Volume aggregation: reduces a training week into effective sets per muscle
// ABOUTME: Also computes the weekly training frequency each muscle sees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Volume Aggregator
//!
//! Effective sets = raw sets x contribution weight (1.0 direct, 0.5
//! partial, 0.25 minimal). Only the set count matters for volume credit;
//! reps and load are irrelevant here.
//!
//! Unknown exercise ids are skipped silently: persisted plans referencing
//! removed catalog entries must degrade gracefully rather than fail
//! analysis.

use crate::catalog::ExerciseCatalog;
use crate::models::{EffectiveVolumeMap, WeekTemplate};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Reduces week templates into per-muscle volume totals
#[derive(Debug, Clone, Copy)]
pub struct VolumeAggregator<'a> {
    catalog: &'a ExerciseCatalog,
}

impl<'a> VolumeAggregator<'a> {
    /// Build an aggregator over the given catalog
    #[must_use]
    pub const fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self { catalog }
    }

    /// Weighted effective set count per muscle for one week
    ///
    /// The result contains only muscles that received at least one
    /// contribution; a rest day or an unknown exercise id contributes
    /// nothing.
    #[must_use]
    pub fn effective_volume(&self, week: &WeekTemplate) -> EffectiveVolumeMap {
        let mut volume = EffectiveVolumeMap::new();
        for day in week.training_days() {
            for entry in &day.exercises {
                let set_count = entry.sets.len() as f64;
                let Some(exercise) = self.catalog.exercise_by_id(&entry.exercise_id) else {
                    trace!(exercise_id = %entry.exercise_id, "unknown exercise id, skipping");
                    continue;
                };
                for m in &exercise.muscles {
                    *volume.entry(m.muscle.clone()).or_insert(0.0) += set_count * m.weight;
                }
            }
        }
        volume
    }

    /// Training days per week on which each muscle receives any stimulus
    ///
    /// A day counts once per muscle regardless of how many exercises or
    /// sets hit it.
    #[must_use]
    pub fn training_frequency(&self, week: &WeekTemplate) -> HashMap<String, u32> {
        let mut frequency: HashMap<String, u32> = HashMap::new();
        for day in week.training_days() {
            let mut day_muscles: HashSet<&str> = HashSet::new();
            for entry in &day.exercises {
                if let Some(exercise) = self.catalog.exercise_by_id(&entry.exercise_id) {
                    for m in &exercise.muscles {
                        day_muscles.insert(m.muscle.as_str());
                    }
                }
            }
            for muscle in day_muscles {
                *frequency.entry(muscle.to_owned()).or_insert(0) += 1;
            }
        }
        frequency
    }
}
