// ABOUTME: Composite plan analysis combining volume, scoring, balance, frequency, and alerts
// ABOUTME: One call returns everything a plan-review surface needs to render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Plan Analyzer
//!
//! Runs every analysis calculator over one week template and assembles a
//! single report. The calculators are independent consumers of the same
//! input; this module only composes their outputs.

use crate::catalog::{ExerciseCatalog, LandmarkTable};
use crate::constants::is_primary_muscle;
use crate::engine::alerts::{Alert, AlertGenerator};
use crate::engine::balance::{BalanceAnalyzer, PatternBalanceReport};
use crate::engine::scoring::{GoalScore, GoalScorer, VolumeZone};
use crate::engine::volume::VolumeAggregator;
use crate::models::{EffectiveVolumeMap, WeekTemplate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One muscle's volume finding within the gap or excess list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MuscleVolumeFinding {
    /// Muscle group name
    pub muscle: String,
    /// Weighted effective sets for the week
    pub effective_sets: f64,
    /// Weekly target (maximum adaptive volume)
    pub target: f64,
    /// Rounded percentage of target
    pub percentage: u32,
    /// Volume zone classification
    pub zone: VolumeZone,
    /// Whether this is a primary movement-pattern muscle
    pub is_primary: bool,
}

/// Full deterministic analysis of one training week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanAnalysis {
    /// Weighted effective sets per muscle
    pub effective_sets: EffectiveVolumeMap,
    /// Volume zone per muscle; landmarked muscles with zero volume read
    /// as below minimum
    pub volume_zones: HashMap<String, VolumeZone>,
    /// Goal score per landmarked muscle
    pub goal_scores: HashMap<String, GoalScore>,
    /// Mean capped goal percentage across all landmarked muscles
    pub overall_score: u32,
    /// Muscles below minimum effective volume, worst first
    pub gaps: Vec<MuscleVolumeFinding>,
    /// Muscles above maximum recoverable volume, worst first
    pub excesses: Vec<MuscleVolumeFinding>,
    /// Push/pull/legs/core balance
    pub pattern_balance: PatternBalanceReport,
    /// Training days per week each muscle is stimulated
    pub frequency: HashMap<String, u32>,
    /// Severity-ordered findings
    pub alerts: Vec<Alert>,
}

/// Runs the full analysis pipeline over a week template
#[derive(Debug, Clone, Copy)]
pub struct PlanAnalyzer<'a> {
    catalog: &'a ExerciseCatalog,
    landmarks: &'a LandmarkTable,
}

impl<'a> PlanAnalyzer<'a> {
    /// Build an analyzer over the given tables
    #[must_use]
    pub const fn new(catalog: &'a ExerciseCatalog, landmarks: &'a LandmarkTable) -> Self {
        Self { catalog, landmarks }
    }

    /// Analyze one training week end to end
    #[must_use]
    pub fn analyze(&self, week: &WeekTemplate) -> PlanAnalysis {
        let aggregator = VolumeAggregator::new(self.catalog);
        let scorer = GoalScorer::new(self.landmarks);

        let effective_sets = aggregator.effective_volume(week);
        let goal_scores = scorer.score_goals(&effective_sets);
        let overall_score = GoalScorer::overall_score(&goal_scores);

        let mut volume_zones: HashMap<String, VolumeZone> = effective_sets
            .iter()
            .map(|(muscle, &eff)| (muscle.clone(), scorer.volume_zone(muscle, eff)))
            .collect();
        // Landmarked muscles with no volume at all are still below minimum.
        for (muscle, _) in self.landmarks.iter() {
            volume_zones
                .entry(muscle.clone())
                .or_insert(VolumeZone::Below);
        }

        let gaps = self.findings(&goal_scores, VolumeZone::Below, |score, lm_mev, _| {
            score.effective_sets < lm_mev
        });
        let excesses = self.findings(&goal_scores, VolumeZone::Over, |score, _, lm_mrv| {
            score.effective_sets > lm_mrv
        });

        let pattern_balance = BalanceAnalyzer::new(self.catalog).analyze(week);
        let frequency = aggregator.training_frequency(week);
        let alerts = AlertGenerator::new(self.landmarks).generate(&goal_scores, &pattern_balance);

        debug!(
            overall_score,
            gaps = gaps.len(),
            excesses = excesses.len(),
            alerts = alerts.len(),
            "analyzed week template"
        );

        PlanAnalysis {
            effective_sets,
            volume_zones,
            goal_scores,
            overall_score,
            gaps,
            excesses,
            pattern_balance,
            frequency,
            alerts,
        }
    }

    fn findings<F>(
        &self,
        scores: &HashMap<String, GoalScore>,
        zone: VolumeZone,
        predicate: F,
    ) -> Vec<MuscleVolumeFinding>
    where
        F: Fn(&GoalScore, f64, f64) -> bool,
    {
        let mut findings: Vec<MuscleVolumeFinding> = scores
            .iter()
            .filter_map(|(muscle, score)| {
                let lm = self.landmarks.landmark_for(muscle)?;
                predicate(score, lm.mev, lm.mrv).then(|| MuscleVolumeFinding {
                    muscle: muscle.clone(),
                    effective_sets: score.effective_sets,
                    target: score.target,
                    percentage: score.percentage,
                    zone,
                    is_primary: is_primary_muscle(muscle),
                })
            })
            .collect();
        match zone {
            // Gaps: furthest below target first.
            VolumeZone::Below => findings.sort_by(|a, b| {
                a.percentage
                    .cmp(&b.percentage)
                    .then_with(|| a.muscle.cmp(&b.muscle))
            }),
            // Excesses: furthest above target first.
            _ => findings.sort_by(|a, b| {
                b.percentage
                    .cmp(&a.percentage)
                    .then_with(|| a.muscle.cmp(&b.muscle))
            }),
        }
        findings
    }
}
