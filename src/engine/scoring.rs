// ABOUTME: Goal scoring against volume landmarks and volume-zone classification
// ABOUTME: Target is each muscle's maximum adaptive volume; percentages are capped when averaged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Goal Scorer
//!
//! Scores effective volume against the landmark table. Every landmarked
//! muscle is scored, including those with zero trained volume, so total
//! neglect surfaces as a 0% entry rather than a missing one.

use crate::catalog::LandmarkTable;
use crate::constants::scoring::OVERALL_PCT_CAP;
use crate::models::EffectiveVolumeMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One muscle's weekly volume measured against its target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalScore {
    /// Weighted effective sets for the week
    pub effective_sets: f64,
    /// Weekly target: the landmark's maximum adaptive volume
    pub target: f64,
    /// Rounded percentage of target; 0 when the target is 0
    pub percentage: u32,
}

/// Where a muscle's weekly volume sits relative to its landmarks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VolumeZone {
    /// Below minimum effective volume
    Below,
    /// Between minimum effective and maximum adaptive volume
    Productive,
    /// Between maximum adaptive and maximum recoverable volume
    High,
    /// Above maximum recoverable volume
    Over,
    /// Muscle has no landmark entry
    Unknown,
}

/// Scores effective-volume maps against a landmark table
#[derive(Debug, Clone, Copy)]
pub struct GoalScorer<'a> {
    landmarks: &'a LandmarkTable,
}

impl<'a> GoalScorer<'a> {
    /// Build a scorer over the given landmark table
    #[must_use]
    pub const fn new(landmarks: &'a LandmarkTable) -> Self {
        Self { landmarks }
    }

    /// Score every landmarked muscle against its weekly target
    ///
    /// Muscles with volume but no landmark are excluded; muscles with a
    /// landmark but no volume appear with zero effective sets and 0%.
    #[must_use]
    pub fn score_goals(&self, effective: &EffectiveVolumeMap) -> HashMap<String, GoalScore> {
        let mut scores = HashMap::new();
        for (muscle, landmark) in self.landmarks.iter() {
            let effective_sets = effective.get(muscle).copied().unwrap_or(0.0);
            let target = landmark.mav;
            let percentage = if target > 0.0 {
                (effective_sets / target * 100.0).round() as u32
            } else {
                0
            };
            scores.insert(
                muscle.clone(),
                GoalScore {
                    effective_sets,
                    target,
                    percentage,
                },
            );
        }
        scores
    }

    /// Composite plan score: the mean of per-muscle percentages, each
    /// capped at 100 so one over-trained muscle cannot mask neglect
    ///
    /// Returns 0 when no muscles have landmarks.
    #[must_use]
    pub fn overall_score(scores: &HashMap<String, GoalScore>) -> u32 {
        if scores.is_empty() {
            return 0;
        }
        let capped_sum: u32 = scores
            .values()
            .map(|s| s.percentage.min(OVERALL_PCT_CAP))
            .sum();
        (f64::from(capped_sum) / scores.len() as f64).round() as u32
    }

    /// Classify a weekly set count against a muscle's landmarks
    #[must_use]
    pub fn volume_zone(&self, muscle: &str, effective_sets: f64) -> VolumeZone {
        let Some(lm) = self.landmarks.landmark_for(muscle) else {
            return VolumeZone::Unknown;
        };
        if effective_sets < lm.mev {
            VolumeZone::Below
        } else if effective_sets <= lm.mav {
            VolumeZone::Productive
        } else if effective_sets <= lm.mrv {
            VolumeZone::High
        } else {
            VolumeZone::Over
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LandmarkTable, VolumeLandmark};

    fn table() -> LandmarkTable {
        LandmarkTable::new(vec![
            ("Chest".into(), VolumeLandmark::new(8.0, 16.0, 22.0)),
            ("Biceps".into(), VolumeLandmark::new(6.0, 12.0, 18.0)),
        ])
    }

    #[test]
    fn untrained_landmarked_muscle_scores_zero() {
        let table = table();
        let scorer = GoalScorer::new(&table);
        let scores = scorer.score_goals(&EffectiveVolumeMap::new());

        assert_eq!(scores.len(), 2);
        assert_eq!(scores["Chest"].percentage, 0);
        assert!(scores["Chest"].effective_sets.abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_rounds_against_mav_target() {
        let table = table();
        let scorer = GoalScorer::new(&table);
        let mut volume = EffectiveVolumeMap::new();
        volume.insert("Chest".into(), 4.0);

        let scores = scorer.score_goals(&volume);
        assert_eq!(scores["Chest"].percentage, 25);
        assert!((scores["Chest"].target - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unlandmarked_muscle_is_excluded() {
        let table = table();
        let scorer = GoalScorer::new(&table);
        let mut volume = EffectiveVolumeMap::new();
        volume.insert("Neck".into(), 10.0);

        let scores = scorer.score_goals(&volume);
        assert!(!scores.contains_key("Neck"));
    }

    #[test]
    fn zero_target_yields_zero_percentage() {
        let table = LandmarkTable::new(vec![(
            "Chest".into(),
            VolumeLandmark::new(0.0, 0.0, 0.0),
        )]);
        let scorer = GoalScorer::new(&table);
        let mut volume = EffectiveVolumeMap::new();
        volume.insert("Chest".into(), 10.0);

        assert_eq!(scorer.score_goals(&volume)["Chest"].percentage, 0);
    }

    #[test]
    fn overall_score_caps_individual_percentages() {
        let table = table();
        let scorer = GoalScorer::new(&table);
        let mut volume = EffectiveVolumeMap::new();
        volume.insert("Chest".into(), 96.0); // 600% of target
        volume.insert("Biceps".into(), 0.0);

        let scores = scorer.score_goals(&volume);
        assert_eq!(GoalScorer::overall_score(&scores), 50);
    }

    #[test]
    fn overall_score_of_empty_table_is_zero() {
        let scores = HashMap::new();
        assert_eq!(GoalScorer::overall_score(&scores), 0);
    }

    #[test]
    fn zones_partition_the_landmark_range() {
        let table = table();
        let scorer = GoalScorer::new(&table);
        assert_eq!(scorer.volume_zone("Chest", 4.0), VolumeZone::Below);
        assert_eq!(scorer.volume_zone("Chest", 12.0), VolumeZone::Productive);
        assert_eq!(scorer.volume_zone("Chest", 20.0), VolumeZone::High);
        assert_eq!(scorer.volume_zone("Chest", 25.0), VolumeZone::Over);
        assert_eq!(scorer.volume_zone("Neck", 5.0), VolumeZone::Unknown);
    }
}
