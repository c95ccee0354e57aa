// ABOUTME: Built-in exercise database and volume-landmark table
// ABOUTME: Weekly set landmarks per muscle group, plus a catalog of common gym exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Default Exercise Data
//!
//! A built-in exercise catalog and volume-landmark table so the engine is
//! usable without an external data source. Callers with their own catalog
//! construct [`ExerciseCatalog`] and [`LandmarkTable`] directly and skip
//! this module entirely.
//!
//! Landmark values (weekly sets per muscle) follow published hypertrophy
//! volume research; see [`crate::constants`] for references.

use crate::catalog::{ExerciseCatalog, LandmarkTable, VolumeLandmark};
use crate::models::{
    ContributionRole as Role, ExerciseDefinition, MovementPattern as Pattern, MuscleContribution,
};

fn ex(
    id: &str,
    name: &str,
    pattern: Pattern,
    equipment: &str,
    muscles: &[(&str, Role)],
) -> ExerciseDefinition {
    ExerciseDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        pattern,
        equipment: equipment.to_owned(),
        muscles: muscles
            .iter()
            .map(|&(muscle, role)| MuscleContribution::new(muscle, role))
            .collect(),
    }
}

/// The built-in exercise catalog
///
/// Covers the common barbell, dumbbell, cable, machine, and bodyweight
/// movements across all four movement patterns.
#[must_use]
pub fn default_catalog() -> ExerciseCatalog {
    ExerciseCatalog::new(vec![
        // PUSH
        ex(
            "barbell_bench_press",
            "Barbell Bench Press",
            Pattern::Push,
            "Barbell",
            &[("Chest", Role::Direct), ("Triceps", Role::Partial), ("Front Delts", Role::Partial)],
        ),
        ex(
            "incline_barbell_bench_press",
            "Incline Barbell Bench Press",
            Pattern::Push,
            "Barbell",
            &[("Upper Chest", Role::Direct), ("Front Delts", Role::Partial), ("Triceps", Role::Partial)],
        ),
        ex(
            "close_grip_bench_press",
            "Close-Grip Bench Press",
            Pattern::Push,
            "Barbell",
            &[("Triceps", Role::Direct), ("Chest", Role::Partial), ("Front Delts", Role::Minimal)],
        ),
        ex(
            "dumbbell_bench_press",
            "Dumbbell Bench Press",
            Pattern::Push,
            "Dumbbells",
            &[("Chest", Role::Direct), ("Triceps", Role::Partial), ("Front Delts", Role::Partial)],
        ),
        ex(
            "incline_dumbbell_bench_press",
            "Incline Dumbbell Bench Press",
            Pattern::Push,
            "Dumbbells",
            &[("Upper Chest", Role::Direct), ("Front Delts", Role::Partial), ("Triceps", Role::Partial)],
        ),
        ex(
            "dumbbell_fly",
            "Dumbbell Fly",
            Pattern::Push,
            "Dumbbells",
            &[("Chest", Role::Direct), ("Front Delts", Role::Minimal)],
        ),
        ex(
            "cable_fly",
            "Cable Fly",
            Pattern::Push,
            "Cable",
            &[("Chest", Role::Direct), ("Front Delts", Role::Minimal)],
        ),
        ex(
            "machine_chest_press",
            "Machine Chest Press",
            Pattern::Push,
            "Machine",
            &[("Chest", Role::Direct), ("Triceps", Role::Partial), ("Front Delts", Role::Partial)],
        ),
        ex(
            "pec_deck",
            "Pec Deck",
            Pattern::Push,
            "Machine",
            &[("Chest", Role::Direct)],
        ),
        ex(
            "push_up",
            "Push-Up",
            Pattern::Push,
            "Bodyweight",
            &[("Chest", Role::Direct), ("Triceps", Role::Partial), ("Front Delts", Role::Partial), ("Core", Role::Minimal)],
        ),
        ex(
            "dip_chest_focus",
            "Dip (Chest Focus)",
            Pattern::Push,
            "Bodyweight",
            &[("Chest", Role::Direct), ("Triceps", Role::Partial), ("Front Delts", Role::Partial)],
        ),
        ex(
            "overhead_press_barbell",
            "Overhead Press (Barbell)",
            Pattern::Push,
            "Barbell",
            &[("Front Delts", Role::Direct), ("Triceps", Role::Partial), ("Side Delts", Role::Partial), ("Core", Role::Minimal)],
        ),
        ex(
            "dumbbell_shoulder_press",
            "Dumbbell Shoulder Press",
            Pattern::Push,
            "Dumbbells",
            &[("Front Delts", Role::Direct), ("Triceps", Role::Partial), ("Side Delts", Role::Partial)],
        ),
        ex(
            "arnold_press",
            "Arnold Press",
            Pattern::Push,
            "Dumbbells",
            &[("Front Delts", Role::Direct), ("Side Delts", Role::Direct), ("Triceps", Role::Partial)],
        ),
        ex(
            "lateral_raise",
            "Lateral Raise",
            Pattern::Push,
            "Dumbbells",
            &[("Side Delts", Role::Direct)],
        ),
        ex(
            "cable_lateral_raise",
            "Cable Lateral Raise",
            Pattern::Push,
            "Cable",
            &[("Side Delts", Role::Direct)],
        ),
        ex(
            "front_raise",
            "Front Raise",
            Pattern::Push,
            "Dumbbells",
            &[("Front Delts", Role::Direct)],
        ),
        ex(
            "machine_shoulder_press",
            "Machine Shoulder Press",
            Pattern::Push,
            "Machine",
            &[("Front Delts", Role::Direct), ("Triceps", Role::Partial), ("Side Delts", Role::Partial)],
        ),
        ex(
            "tricep_pushdown_rope",
            "Tricep Pushdown (Rope)",
            Pattern::Push,
            "Cable",
            &[("Triceps", Role::Direct)],
        ),
        ex(
            "overhead_tricep_extension_dumbbell",
            "Overhead Tricep Extension (Dumbbell)",
            Pattern::Push,
            "Dumbbells",
            &[("Triceps", Role::Direct)],
        ),
        ex(
            "skull_crushers",
            "Skull Crushers",
            Pattern::Push,
            "Barbell",
            &[("Triceps", Role::Direct)],
        ),
        // PULL
        ex(
            "barbell_row",
            "Barbell Row",
            Pattern::Pull,
            "Barbell",
            &[("Upper Back", Role::Direct), ("Lats", Role::Direct), ("Biceps", Role::Partial), ("Rear Delts", Role::Partial)],
        ),
        ex(
            "dumbbell_row",
            "Dumbbell Row",
            Pattern::Pull,
            "Dumbbells",
            &[("Lats", Role::Direct), ("Upper Back", Role::Direct), ("Biceps", Role::Partial), ("Rear Delts", Role::Partial)],
        ),
        ex(
            "chest_supported_row",
            "Chest-Supported Row",
            Pattern::Pull,
            "Dumbbells",
            &[("Upper Back", Role::Direct), ("Lats", Role::Direct), ("Biceps", Role::Partial), ("Rear Delts", Role::Partial)],
        ),
        ex(
            "seated_cable_row",
            "Seated Cable Row",
            Pattern::Pull,
            "Cable",
            &[("Upper Back", Role::Direct), ("Lats", Role::Direct), ("Biceps", Role::Partial), ("Rear Delts", Role::Partial)],
        ),
        ex(
            "t_bar_row",
            "T-Bar Row",
            Pattern::Pull,
            "Barbell",
            &[("Upper Back", Role::Direct), ("Lats", Role::Direct), ("Biceps", Role::Partial), ("Rear Delts", Role::Partial)],
        ),
        ex(
            "pull_up",
            "Pull-Up",
            Pattern::Pull,
            "Bodyweight",
            &[("Lats", Role::Direct), ("Biceps", Role::Partial), ("Core", Role::Minimal)],
        ),
        ex(
            "chin_up",
            "Chin-Up",
            Pattern::Pull,
            "Bodyweight",
            &[("Lats", Role::Direct), ("Biceps", Role::Direct), ("Core", Role::Minimal)],
        ),
        ex(
            "lat_pulldown",
            "Lat Pulldown",
            Pattern::Pull,
            "Cable",
            &[("Lats", Role::Direct), ("Biceps", Role::Partial)],
        ),
        ex(
            "straight_arm_pulldown",
            "Straight-Arm Pulldown",
            Pattern::Pull,
            "Cable",
            &[("Lats", Role::Direct), ("Core", Role::Minimal)],
        ),
        ex(
            "face_pull",
            "Face Pull",
            Pattern::Pull,
            "Cable",
            &[("Rear Delts", Role::Direct), ("Rotator Cuff", Role::Direct), ("Traps", Role::Minimal)],
        ),
        ex(
            "reverse_fly_dumbbell",
            "Reverse Fly (Dumbbell)",
            Pattern::Pull,
            "Dumbbells",
            &[("Rear Delts", Role::Direct), ("Upper Back", Role::Minimal)],
        ),
        ex(
            "barbell_shrug",
            "Barbell Shrug",
            Pattern::Pull,
            "Barbell",
            &[("Traps", Role::Direct)],
        ),
        ex(
            "barbell_curl",
            "Barbell Curl",
            Pattern::Pull,
            "Barbell",
            &[("Biceps", Role::Direct), ("Forearms", Role::Minimal)],
        ),
        ex(
            "dumbbell_curl",
            "Dumbbell Curl",
            Pattern::Pull,
            "Dumbbells",
            &[("Biceps", Role::Direct), ("Forearms", Role::Minimal)],
        ),
        ex(
            "hammer_curl",
            "Hammer Curl",
            Pattern::Pull,
            "Dumbbells",
            &[("Biceps", Role::Direct), ("Brachialis", Role::Direct), ("Forearms", Role::Partial)],
        ),
        ex(
            "preacher_curl",
            "Preacher Curl",
            Pattern::Pull,
            "Barbell",
            &[("Biceps", Role::Direct)],
        ),
        ex(
            "reverse_curl",
            "Reverse Curl",
            Pattern::Pull,
            "Barbell",
            &[("Brachialis", Role::Direct), ("Forearms", Role::Direct), ("Biceps", Role::Partial)],
        ),
        // LEGS
        ex(
            "barbell_back_squat",
            "Barbell Back Squat",
            Pattern::Legs,
            "Barbell",
            &[("Quads", Role::Direct), ("Glutes", Role::Direct), ("Hamstrings", Role::Minimal), ("Core", Role::Minimal)],
        ),
        ex(
            "barbell_front_squat",
            "Barbell Front Squat",
            Pattern::Legs,
            "Barbell",
            &[("Quads", Role::Direct), ("Glutes", Role::Partial), ("Core", Role::Partial)],
        ),
        ex(
            "goblet_squat",
            "Goblet Squat",
            Pattern::Legs,
            "Dumbbells",
            &[("Quads", Role::Direct), ("Glutes", Role::Partial), ("Core", Role::Minimal)],
        ),
        ex(
            "leg_press",
            "Leg Press",
            Pattern::Legs,
            "Machine",
            &[("Quads", Role::Direct), ("Glutes", Role::Partial), ("Hamstrings", Role::Minimal)],
        ),
        ex(
            "leg_extension",
            "Leg Extension",
            Pattern::Legs,
            "Machine",
            &[("Quads", Role::Direct)],
        ),
        ex(
            "bulgarian_split_squat",
            "Bulgarian Split Squat",
            Pattern::Legs,
            "Dumbbells",
            &[("Quads", Role::Direct), ("Glutes", Role::Direct), ("Hamstrings", Role::Minimal), ("Core", Role::Minimal)],
        ),
        ex(
            "walking_lunge",
            "Walking Lunge",
            Pattern::Legs,
            "Dumbbells",
            &[("Quads", Role::Direct), ("Glutes", Role::Direct), ("Hamstrings", Role::Minimal), ("Core", Role::Minimal)],
        ),
        ex(
            "conventional_deadlift",
            "Conventional Deadlift",
            Pattern::Legs,
            "Barbell",
            &[("Hamstrings", Role::Direct), ("Glutes", Role::Direct), ("Lower Back", Role::Direct), ("Quads", Role::Partial), ("Traps", Role::Partial), ("Core", Role::Minimal)],
        ),
        ex(
            "romanian_deadlift",
            "Romanian Deadlift",
            Pattern::Legs,
            "Barbell",
            &[("Hamstrings", Role::Direct), ("Glutes", Role::Direct), ("Lower Back", Role::Partial)],
        ),
        ex(
            "hip_thrust",
            "Hip Thrust",
            Pattern::Legs,
            "Barbell",
            &[("Glutes", Role::Direct), ("Hamstrings", Role::Partial)],
        ),
        ex(
            "glute_bridge",
            "Glute Bridge",
            Pattern::Legs,
            "Bodyweight",
            &[("Glutes", Role::Direct), ("Hamstrings", Role::Partial)],
        ),
        ex(
            "good_morning",
            "Good Morning",
            Pattern::Legs,
            "Barbell",
            &[("Hamstrings", Role::Direct), ("Lower Back", Role::Direct), ("Glutes", Role::Partial)],
        ),
        ex(
            "leg_curl_lying",
            "Leg Curl (Lying)",
            Pattern::Legs,
            "Machine",
            &[("Hamstrings", Role::Direct)],
        ),
        ex(
            "nordic_hamstring_curl",
            "Nordic Hamstring Curl",
            Pattern::Legs,
            "Bodyweight",
            &[("Hamstrings", Role::Direct)],
        ),
        ex(
            "standing_calf_raise",
            "Standing Calf Raise",
            Pattern::Legs,
            "Machine",
            &[("Calves", Role::Direct)],
        ),
        ex(
            "seated_calf_raise",
            "Seated Calf Raise",
            Pattern::Legs,
            "Machine",
            &[("Calves", Role::Direct)],
        ),
        // CORE
        ex(
            "plank",
            "Plank",
            Pattern::Core,
            "Bodyweight",
            &[("Core", Role::Direct)],
        ),
        ex(
            "side_plank",
            "Side Plank",
            Pattern::Core,
            "Bodyweight",
            &[("Obliques", Role::Direct), ("Core", Role::Partial)],
        ),
        ex(
            "ab_rollout",
            "Ab Rollout",
            Pattern::Core,
            "Bodyweight",
            &[("Core", Role::Direct), ("Lats", Role::Minimal)],
        ),
        ex(
            "hanging_leg_raise",
            "Hanging Leg Raise",
            Pattern::Core,
            "Bodyweight",
            &[("Core", Role::Direct), ("Hip Flexors", Role::Partial)],
        ),
        ex(
            "cable_crunch",
            "Cable Crunch",
            Pattern::Core,
            "Cable",
            &[("Core", Role::Direct)],
        ),
        ex(
            "cable_woodchop",
            "Cable Woodchop",
            Pattern::Core,
            "Cable",
            &[("Obliques", Role::Direct), ("Core", Role::Partial)],
        ),
        ex(
            "pallof_press",
            "Pallof Press",
            Pattern::Core,
            "Cable",
            &[("Core", Role::Direct), ("Obliques", Role::Direct)],
        ),
        ex(
            "dead_bug",
            "Dead Bug",
            Pattern::Core,
            "Bodyweight",
            &[("Core", Role::Direct)],
        ),
    ])
}

/// The built-in volume-landmark table: weekly sets per muscle group
#[must_use]
pub fn default_landmarks() -> LandmarkTable {
    let lm = VolumeLandmark::new;
    LandmarkTable::new(
        [
            ("Chest", lm(8.0, 16.0, 22.0)),
            ("Upper Chest", lm(4.0, 8.0, 12.0)),
            ("Lats", lm(8.0, 16.0, 22.0)),
            ("Upper Back", lm(8.0, 16.0, 22.0)),
            ("Front Delts", lm(4.0, 8.0, 14.0)),
            ("Side Delts", lm(8.0, 16.0, 22.0)),
            ("Rear Delts", lm(6.0, 12.0, 18.0)),
            ("Triceps", lm(6.0, 12.0, 18.0)),
            ("Biceps", lm(6.0, 12.0, 18.0)),
            ("Quads", lm(8.0, 16.0, 22.0)),
            ("Hamstrings", lm(6.0, 12.0, 18.0)),
            ("Glutes", lm(4.0, 10.0, 16.0)),
            ("Calves", lm(6.0, 12.0, 18.0)),
            ("Core", lm(4.0, 10.0, 16.0)),
            ("Lower Back", lm(2.0, 6.0, 10.0)),
            ("Traps", lm(4.0, 10.0, 16.0)),
            ("Forearms", lm(2.0, 8.0, 14.0)),
            ("Rotator Cuff", lm(2.0, 6.0, 10.0)),
            ("Brachialis", lm(2.0, 6.0, 10.0)),
            ("Obliques", lm(4.0, 10.0, 16.0)),
            ("Hip Flexors", lm(2.0, 6.0, 10.0)),
            ("Adductors", lm(4.0, 8.0, 14.0)),
        ]
        .into_iter()
        .map(|(muscle, landmark)| (muscle.to_owned(), landmark))
        .collect(),
    )
}
