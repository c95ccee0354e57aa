// ABOUTME: Analysis and projection calculators for training week templates
// ABOUTME: Each submodule holds one calculator plus the report types it produces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Analysis Engine
//!
//! Deterministic calculators over a [`crate::models::WeekTemplate`]. The
//! projector and the analysis calculators are independent consumers of the
//! same template; neither depends on the other's output. All calculators
//! are pure and synchronous, so concurrent callers need no coordination.

/// Effective-volume aggregation and weekly training frequency
pub mod volume;

/// Goal scoring against volume landmarks and volume-zone classification
pub mod scoring;

/// Push/pull/legs/core balance analysis
pub mod balance;

/// Severity-ordered alert generation from scores and balance
pub mod alerts;

/// Underserved-muscle detection and exercise suggestions
pub mod suggestions;

/// Mesocycle expansion with progressive overload
pub mod projection;

/// Composite plan analysis combining every calculator
pub mod analyzer;

pub use alerts::{Alert, AlertGenerator, AlertSeverity, AlertType};
pub use analyzer::{MuscleVolumeFinding, PlanAnalysis, PlanAnalyzer};
pub use balance::{
    BalanceAnalyzer, BalanceLabel, BalanceStatus, PatternBalanceReport, PatternSetTotals,
};
pub use projection::{
    DayInstance, Mesocycle, ProgressionProjector, ProjectedEntry, ProjectedSet, WeekInstance,
};
pub use scoring::{GoalScore, GoalScorer, VolumeZone};
pub use suggestions::{ExerciseSuggestion, SuggestionEngine};
pub use volume::VolumeAggregator;
