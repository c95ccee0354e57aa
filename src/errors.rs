// ABOUTME: Error types for the volume engine's hard-failure paths
// ABOUTME: Domain data irregularities are absorbed silently; only programmer errors surface here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Engine Errors
//!
//! The engine favors silent tolerance over errors for data-quality issues:
//! unknown exercise ids are skipped during aggregation, muscles without a
//! landmark entry are excluded from scoring, and empty or all-rest weeks
//! produce empty results. The variants below cover the remaining cases,
//! which are programmer errors in the projector's arguments.

use thiserror::Error;

/// Errors surfaced by the progression projector for invalid arguments
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Mesocycle length must be at least one week
    #[error("mesocycle must span at least 1 week, got {0}")]
    InvalidWeekCount(u32),

    /// Weekly progression rate must be a finite number
    #[error("progression rate must be finite, got {0}")]
    InvalidProgressRate(f64),
}
