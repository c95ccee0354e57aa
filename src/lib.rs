// ABOUTME: Deterministic training volume analysis and progression engine for the Atlas platform
// ABOUTME: Pure computation layer; no I/O, no persistence, no UI concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

#![deny(unsafe_code)]

//! # Atlas Volume Engine
//!
//! Plans resistance-training programs and scores them against published
//! volume science (minimum/maximum effective and recoverable weekly set
//! counts per muscle group). Every entry point is a pure function of its
//! arguments: hand the engine a [`models::WeekTemplate`] and it returns
//! value-type reports the caller owns outright.
//!
//! ## Modules
//!
//! - **errors**: `EngineError` for the few hard programmer-error failures
//! - **constants**: named domain constants (contribution weights, balance
//!   thresholds, load increments)
//! - **models**: value types for plans and catalog entries
//! - **catalog**: injected exercise and volume-landmark lookup tables
//! - **data**: built-in default exercise database and landmark table
//! - **engine**: the analysis and projection calculators
//!
//! ## Quick start
//!
//! ```
//! use atlas_volume_engine::data::{default_catalog, default_landmarks};
//! use atlas_volume_engine::engine::PlanAnalyzer;
//! use atlas_volume_engine::models::WeekTemplate;
//!
//! let catalog = default_catalog();
//! let landmarks = default_landmarks();
//! let analyzer = PlanAnalyzer::new(&catalog, &landmarks);
//! let report = analyzer.analyze(&WeekTemplate::default());
//! assert_eq!(report.overall_score, 0);
//! ```

/// Hard-failure error types for programmer errors
pub mod errors;

/// Named domain constants organized by concern
pub mod constants;

/// Value types for catalog entries and training plans
pub mod models;

/// Injected exercise catalog and volume-landmark lookup tables
pub mod catalog;

/// Built-in exercise database and volume landmarks
pub mod data;

/// Analysis and projection calculators
pub mod engine;

pub use catalog::{ExerciseCatalog, LandmarkTable, VolumeLandmark};
pub use engine::{
    Alert, AlertGenerator, AlertSeverity, AlertType, BalanceAnalyzer, BalanceLabel, BalanceStatus,
    ExerciseSuggestion, GoalScore, GoalScorer, Mesocycle, MuscleVolumeFinding,
    PatternBalanceReport, PatternSetTotals, PlanAnalysis, PlanAnalyzer, ProgressionProjector,
    SuggestionEngine, VolumeAggregator, VolumeZone,
};
pub use errors::EngineError;
pub use models::{
    ContributionRole, EffectiveVolumeMap, ExerciseDefinition, ExerciseEntry, MovementPattern,
    MuscleContribution, SetSpec, TrainingDay, WeekTemplate,
};
