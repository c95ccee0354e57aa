// ABOUTME: Finds underserved muscles and ranks catalog exercises to fill them
// ABOUTME: Greedy single-pass heuristic; does not re-simulate volume after hypothetical additions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Gap & Suggestion Engine
//!
//! Screens at a looser bar than the alert generator: any muscle under 80%
//! of its weekly target is a candidate for better coverage, even when it
//! clears its minimum effective volume. Candidates are ranked by how much
//! instantaneous coverage they add to the lowest-scoring muscles, with
//! exercises not yet in the plan preferred for variety.

use crate::catalog::{ExerciseCatalog, LandmarkTable};
use crate::constants::suggestions::{
    COVERAGE_PCT_THRESHOLD, DIRECT_ROLE_MULTIPLIER, MAX_UNDERSERVED_MUSCLES,
    SECONDARY_ROLE_MULTIPLIER,
};
use crate::engine::scoring::GoalScorer;
use crate::engine::volume::VolumeAggregator;
use crate::models::{ContributionRole, MovementPattern, WeekTemplate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One ranked exercise recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSuggestion {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Movement pattern
    pub pattern: MovementPattern,
    /// Coverage value against the underserved set; higher is better
    pub score: f64,
    /// Muscles this exercise trains directly
    pub direct_muscles: Vec<String>,
    /// Whether the exercise is absent from the current plan
    pub is_new: bool,
}

/// Ranks catalog exercises against a week's volume gaps
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    catalog: &'a ExerciseCatalog,
    landmarks: &'a LandmarkTable,
}

impl<'a> SuggestionEngine<'a> {
    /// Build a suggestion engine over the given tables
    #[must_use]
    pub const fn new(catalog: &'a ExerciseCatalog, landmarks: &'a LandmarkTable) -> Self {
        Self { catalog, landmarks }
    }

    /// Up to `count` exercises ranked by coverage of the week's most
    /// underserved muscles
    ///
    /// Returns an empty list when every landmarked muscle is at or above
    /// the coverage threshold; an adequately covered plan gets no noise.
    #[must_use]
    pub fn suggest(&self, week: &WeekTemplate, count: usize) -> Vec<ExerciseSuggestion> {
        let volume = VolumeAggregator::new(self.catalog).effective_volume(week);
        let scores = GoalScorer::new(self.landmarks).score_goals(&volume);

        let mut gaps: Vec<(&String, u32)> = scores
            .iter()
            .filter(|(_, s)| s.percentage < COVERAGE_PCT_THRESHOLD)
            .map(|(muscle, s)| (muscle, s.percentage))
            .collect();
        if gaps.is_empty() {
            return Vec::new();
        }
        gaps.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        let underserved: HashSet<&str> = gaps
            .iter()
            .take(MAX_UNDERSERVED_MUSCLES)
            .map(|(muscle, _)| muscle.as_str())
            .collect();
        debug!(?underserved, "ranking suggestions for underserved muscles");

        let already_used = week.exercise_ids();

        let mut candidates: Vec<ExerciseSuggestion> = self
            .catalog
            .iter()
            .filter_map(|exercise| {
                let score: f64 = exercise
                    .muscles
                    .iter()
                    .filter(|m| underserved.contains(m.muscle.as_str()))
                    .map(|m| {
                        let multiplier = if m.role == ContributionRole::Direct {
                            DIRECT_ROLE_MULTIPLIER
                        } else {
                            SECONDARY_ROLE_MULTIPLIER
                        };
                        m.weight * multiplier
                    })
                    .sum();
                (score > 0.0).then(|| ExerciseSuggestion {
                    exercise_id: exercise.id.clone(),
                    name: exercise.name.clone(),
                    pattern: exercise.pattern,
                    score,
                    direct_muscles: exercise.direct_muscles(),
                    is_new: !already_used.contains(&exercise.id),
                })
            })
            .collect();

        // New exercises first for variety, then by descending coverage.
        candidates.sort_by(|a, b| {
            b.is_new
                .cmp(&a.is_new)
                .then_with(|| b.score.total_cmp(&a.score))
                .then_with(|| a.exercise_id.cmp(&b.exercise_id))
        });
        candidates.truncate(count);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_catalog, default_landmarks};
    use crate::models::{ExerciseEntry, TrainingDay};

    #[test]
    fn empty_week_suggests_gap_fillers() {
        let catalog = default_catalog();
        let landmarks = default_landmarks();
        let engine = SuggestionEngine::new(&catalog, &landmarks);

        let suggestions = engine.suggest(&WeekTemplate::default(), 3);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| s.score > 0.0));
        assert!(suggestions.iter().all(|s| s.is_new));
    }

    #[test]
    fn well_covered_plan_gets_no_suggestions() {
        let catalog = default_catalog();
        // Single-muscle table so full coverage is easy to construct.
        let landmarks = crate::catalog::LandmarkTable::new(vec![(
            "Chest".into(),
            crate::catalog::VolumeLandmark::new(8.0, 16.0, 22.0),
        )]);
        let engine = SuggestionEngine::new(&catalog, &landmarks);

        // 16 sets of bench = 100% of the Chest target.
        let week = WeekTemplate::new(vec![TrainingDay::training(
            "Push",
            vec![ExerciseEntry::uniform("barbell_bench_press", 16, 8, 135.0)],
        )]);
        assert!(engine.suggest(&week, 5).is_empty());
    }

    #[test]
    fn new_exercises_rank_before_already_planned_ones() {
        let catalog = default_catalog();
        let landmarks = default_landmarks();
        let engine = SuggestionEngine::new(&catalog, &landmarks);

        // A token amount of bench keeps Chest underserved while marking
        // the exercise as already used.
        let week = WeekTemplate::new(vec![TrainingDay::training(
            "Push",
            vec![ExerciseEntry::uniform("barbell_bench_press", 1, 8, 135.0)],
        )]);
        let suggestions = engine.suggest(&week, 200);
        let bench_rank = suggestions
            .iter()
            .position(|s| s.exercise_id == "barbell_bench_press")
            .unwrap();
        let first_old = suggestions.iter().position(|s| !s.is_new).unwrap();
        assert!(bench_rank >= first_old);
        assert!(suggestions[..first_old].iter().all(|s| s.is_new));
    }

    #[test]
    fn count_bounds_the_result() {
        let catalog = default_catalog();
        let landmarks = default_landmarks();
        let engine = SuggestionEngine::new(&catalog, &landmarks);
        assert_eq!(engine.suggest(&WeekTemplate::default(), 1).len(), 1);
        assert!(engine.suggest(&WeekTemplate::default(), 0).is_empty());
    }
}
