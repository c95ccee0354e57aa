// ABOUTME: Named domain constants for volume analysis, balance classification, and projection
// ABOUTME: Values follow published hypertrophy volume-landmark research
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! Domain constants used throughout the volume engine
//!
//! These values are fixed design constants, not tunables. The volume
//! landmarks themselves live in [`crate::data`]; this module holds the
//! weights, ratios, and thresholds the algorithms apply to them.
//!
//! References:
//! - Israetel, M. et al. (2017). Training volume landmarks for muscle growth
//! - Schoenfeld, B.J., Ogborn, D., & Krieger, J.W. (2017). Dose-response
//!   relationship between weekly resistance training volume and hypertrophy

/// Per-muscle contribution weights by role
pub mod contribution {
    /// Full stimulus: the exercise trains this muscle directly
    pub const DIRECT_WEIGHT: f64 = 1.0;

    /// Significant secondary stimulus
    pub const PARTIAL_WEIGHT: f64 = 0.5;

    /// Low secondary stimulus
    pub const MINIMAL_WEIGHT: f64 = 0.25;
}

/// Push/pull balance classification thresholds
pub mod balance {
    /// Pull:push ratios below this are classified push-heavy
    pub const PUSH_HEAVY_RATIO: f64 = 0.75;

    /// Pull:push ratios above this are classified pull-heavy
    pub const PULL_HEAVY_RATIO: f64 = 1.4;
}

/// Goal scoring bounds
pub mod scoring {
    /// Per-muscle percentage cap applied when averaging the overall score,
    /// so one over-trained muscle cannot mask neglect elsewhere
    pub const OVERALL_PCT_CAP: u32 = 100;
}

/// Gap-suggestion screening parameters
///
/// The suggestion engine screens at a looser bar than the alert generator:
/// "could be better" (percentage of weekly target) rather than "below
/// minimum effective volume". The two thresholds serve different purposes
/// and are deliberately distinct constants.
pub mod suggestions {
    /// Muscles under this percentage of their weekly target are candidates
    /// for suggestion coverage
    pub const COVERAGE_PCT_THRESHOLD: u32 = 80;

    /// At most this many of the lowest-scoring muscles form the underserved set
    pub const MAX_UNDERSERVED_MUSCLES: usize = 5;

    /// Score multiplier for a direct-role contribution to an underserved muscle
    pub const DIRECT_ROLE_MULTIPLIER: f64 = 3.0;

    /// Score multiplier for partial/minimal contributions to an underserved muscle
    pub const SECONDARY_ROLE_MULTIPLIER: f64 = 1.0;
}

/// Progressive-overload projection parameters
pub mod projection {
    /// Projected loads round to the nearest multiple of this increment,
    /// matching plate and dumbbell availability
    pub const LOAD_ROUNDING_INCREMENT: f64 = 5.0;

    /// Mesocycles longer than this many weeks label their final week as a taper
    pub const MIN_WEEKS_FOR_TAPER: u32 = 2;

    /// Days per calendar week for date arithmetic
    pub const DAYS_PER_WEEK: u32 = 7;
}

/// Major movement-pattern muscles, flagged prominently when undertrained
///
/// Gap and excess alerts for these sort ahead of secondary/accessory
/// muscles at equal severity.
pub const PRIMARY_MUSCLES: [&str; 12] = [
    "Chest",
    "Upper Chest",
    "Lats",
    "Upper Back",
    "Quads",
    "Hamstrings",
    "Glutes",
    "Front Delts",
    "Side Delts",
    "Rear Delts",
    "Biceps",
    "Triceps",
];

/// Whether a muscle belongs to the primary movement-pattern set
#[must_use]
pub fn is_primary_muscle(muscle: &str) -> bool {
    PRIMARY_MUSCLES.contains(&muscle)
}
