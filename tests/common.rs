// ABOUTME: Shared test fixtures and setup helpers for integration tests
// ABOUTME: Provides catalog/landmark fixtures and common week-template builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength
#![allow(dead_code, clippy::must_use_candidate, clippy::missing_panics_doc)]

//! Shared test utilities for `atlas_volume_engine` integration tests.

use atlas_volume_engine::models::{ExerciseEntry, TrainingDay, WeekTemplate};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A seven-day week with one push day (4 sets of bench press) and six
/// rest days; matches the canonical single-exercise analysis scenario
pub fn bench_only_week() -> WeekTemplate {
    let mut days = vec![TrainingDay::training(
        "Push A",
        vec![ExerciseEntry::uniform("barbell_bench_press", 4, 8, 135.0)],
    )];
    days.extend(std::iter::repeat_with(|| TrainingDay::rest("Rest")).take(6));
    WeekTemplate::new(days)
}

/// A balanced three-day push/pull/legs week with four rest days
pub fn ppl_week() -> WeekTemplate {
    WeekTemplate::new(vec![
        TrainingDay::training(
            "Push",
            vec![
                ExerciseEntry::uniform("barbell_bench_press", 4, 8, 135.0),
                ExerciseEntry::uniform("incline_dumbbell_bench_press", 3, 10, 45.0),
                ExerciseEntry::uniform("overhead_press_barbell", 3, 8, 95.0),
                ExerciseEntry::uniform("lateral_raise", 3, 15, 15.0),
                ExerciseEntry::uniform("tricep_pushdown_rope", 3, 12, 50.0),
            ],
        ),
        TrainingDay::training(
            "Pull",
            vec![
                ExerciseEntry::uniform("barbell_row", 4, 8, 135.0),
                ExerciseEntry::uniform("lat_pulldown", 3, 10, 120.0),
                ExerciseEntry::uniform("face_pull", 3, 15, 30.0),
                ExerciseEntry::uniform("barbell_curl", 3, 10, 60.0),
            ],
        ),
        TrainingDay::training(
            "Legs",
            vec![
                ExerciseEntry::uniform("barbell_back_squat", 4, 6, 185.0),
                ExerciseEntry::uniform("romanian_deadlift", 3, 10, 155.0),
                ExerciseEntry::uniform("leg_curl_lying", 3, 12, 80.0),
                ExerciseEntry::uniform("standing_calf_raise", 3, 15, 135.0),
            ],
        ),
        TrainingDay::rest("Rest"),
        TrainingDay::rest("Rest"),
        TrainingDay::rest("Rest"),
        TrainingDay::rest("Rest"),
    ])
}

/// A week where every day is a rest day
pub fn all_rest_week() -> WeekTemplate {
    WeekTemplate::new(vec![TrainingDay::rest("Rest"); 7])
}
