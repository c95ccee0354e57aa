// ABOUTME: Push/pull/legs/core balance analysis over raw weekly set counts
// ABOUTME: Classifies the pull:push ratio against fixed design thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Pattern Balance Analyzer
//!
//! Sums raw (unweighted) set counts per movement pattern and classifies
//! the pull:push ratio. A week with neither push nor pull work is treated
//! as balanced by vacancy, not as a deficiency.

use crate::catalog::ExerciseCatalog;
use crate::constants::balance::{PULL_HEAVY_RATIO, PUSH_HEAVY_RATIO};
use crate::models::{MovementPattern, WeekTemplate};
use serde::{Deserialize, Serialize};

/// Raw weekly set totals per movement pattern
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternSetTotals {
    /// Pressing sets
    pub push: u32,
    /// Rowing/pulling sets
    pub pull: u32,
    /// Lower-body sets
    pub legs: u32,
    /// Trunk sets
    pub core: u32,
}

/// Severity of the balance classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Balanced, or out of scope (legs/core only)
    Ok,
    /// Meaningfully skewed toward pushing
    Warning,
    /// A whole pattern is missing
    Critical,
    /// Skewed toward pulling, which is generally benign
    Info,
}

/// Descriptive balance classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BalanceLabel {
    /// Pull:push ratio within the balanced band
    Balanced,
    /// No push or pull work at all
    LegsCoreOnly,
    /// Pull work present but no push work
    NoPush,
    /// Push work present but no pull work
    NoPull,
    /// Ratio below the push-heavy threshold
    PushHeavy,
    /// Ratio above the pull-heavy threshold
    PullHeavy,
}

/// Weekly movement-pattern balance report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PatternBalanceReport {
    /// Raw set totals per pattern
    pub sets: PatternSetTotals,
    /// Pull:push ratio rounded to 2 decimals; `None` when push is 0 and
    /// pull is positive (the ratio is unbounded)
    pub ratio: Option<f64>,
    /// Classification severity
    pub status: BalanceStatus,
    /// Classification label
    pub label: BalanceLabel,
}

/// Classifies the push/pull balance of a training week
#[derive(Debug, Clone, Copy)]
pub struct BalanceAnalyzer<'a> {
    catalog: &'a ExerciseCatalog,
}

impl<'a> BalanceAnalyzer<'a> {
    /// Build an analyzer over the given catalog
    #[must_use]
    pub const fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self { catalog }
    }

    /// Classify the week's pattern balance
    ///
    /// Classification precedence: both patterns absent, one pattern
    /// absent, push-heavy, pull-heavy, balanced.
    #[must_use]
    pub fn analyze(&self, week: &WeekTemplate) -> PatternBalanceReport {
        let sets = self.pattern_totals(week);

        let raw_ratio = if sets.push > 0 {
            f64::from(sets.pull) / f64::from(sets.push)
        } else if sets.pull > 0 {
            f64::INFINITY
        } else {
            1.0
        };

        let (status, label) = if sets.push == 0 && sets.pull == 0 {
            (BalanceStatus::Ok, BalanceLabel::LegsCoreOnly)
        } else if sets.push == 0 {
            (BalanceStatus::Critical, BalanceLabel::NoPush)
        } else if sets.pull == 0 {
            (BalanceStatus::Critical, BalanceLabel::NoPull)
        } else if raw_ratio < PUSH_HEAVY_RATIO {
            (BalanceStatus::Warning, BalanceLabel::PushHeavy)
        } else if raw_ratio > PULL_HEAVY_RATIO {
            (BalanceStatus::Info, BalanceLabel::PullHeavy)
        } else {
            (BalanceStatus::Ok, BalanceLabel::Balanced)
        };

        let ratio = raw_ratio
            .is_finite()
            .then(|| (raw_ratio * 100.0).round() / 100.0);

        PatternBalanceReport {
            sets,
            ratio,
            status,
            label,
        }
    }

    /// Raw set counts per pattern across all non-rest days
    #[must_use]
    pub fn pattern_totals(&self, week: &WeekTemplate) -> PatternSetTotals {
        let mut sets = PatternSetTotals::default();
        for day in week.training_days() {
            for entry in &day.exercises {
                let Some(exercise) = self.catalog.exercise_by_id(&entry.exercise_id) else {
                    continue;
                };
                let n = entry.sets.len() as u32;
                match exercise.pattern {
                    MovementPattern::Push => sets.push += n,
                    MovementPattern::Pull => sets.pull += n,
                    MovementPattern::Legs => sets.legs += n,
                    MovementPattern::Core => sets.core += n,
                }
            }
        }
        sets
    }
}
