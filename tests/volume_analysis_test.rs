// ABOUTME: End-to-end tests for volume aggregation, scoring, balance, alerts, and suggestions
// ABOUTME: Exercises the documented analysis properties against the built-in catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! Integration tests for the analysis pipeline.

mod common;

use atlas_volume_engine::data::{default_catalog, default_landmarks};
use atlas_volume_engine::{
    AlertSeverity, AlertType, BalanceAnalyzer, BalanceLabel, BalanceStatus, ExerciseEntry,
    GoalScorer, LandmarkTable, PlanAnalyzer, SuggestionEngine, TrainingDay, VolumeAggregator,
    VolumeLandmark, WeekTemplate,
};
use common::{all_rest_week, bench_only_week, init_test_logging, ppl_week};

#[test]
fn bench_press_week_end_to_end() {
    init_test_logging();
    let catalog = default_catalog();
    let landmarks = default_landmarks();

    let week = bench_only_week();
    let volume = VolumeAggregator::new(&catalog).effective_volume(&week);
    assert!((volume["Chest"] - 4.0).abs() < f64::EPSILON);
    assert!((volume["Triceps"] - 2.0).abs() < f64::EPSILON);
    assert!((volume["Front Delts"] - 2.0).abs() < f64::EPSILON);

    let scores = GoalScorer::new(&landmarks).score_goals(&volume);
    let chest = &scores["Chest"];
    assert!((chest.effective_sets - 4.0).abs() < f64::EPSILON);
    assert!((chest.target - 16.0).abs() < f64::EPSILON);
    assert_eq!(chest.percentage, 25);

    // 4 effective chest sets sit below the 8-set weekly minimum: a gap
    // alert at warning severity (volume is present, just low).
    let report = PlanAnalyzer::new(&catalog, &landmarks).analyze(&week);
    let chest_alert = report
        .alerts
        .iter()
        .find(|a| a.muscle.as_deref() == Some("Chest"))
        .expect("chest gap alert");
    assert_eq!(chest_alert.alert_type, AlertType::Gap);
    assert_eq!(chest_alert.severity, AlertSeverity::Warning);
    assert!(chest_alert.message.contains("below the minimum"));
    assert!(chest_alert.message.contains("8+ sets/week"));
}

#[test]
fn all_rest_week_produces_empty_results() {
    init_test_logging();
    let catalog = default_catalog();
    let landmarks = default_landmarks();

    let week = all_rest_week();
    let volume = VolumeAggregator::new(&catalog).effective_volume(&week);
    assert!(volume.is_empty());

    let report = PlanAnalyzer::new(&catalog, &landmarks).analyze(&week);
    assert_eq!(report.overall_score, 0);
    assert!(report.excesses.is_empty());
    // Zero-volume gaps are expected; there must be no excess or balance
    // alerts, and every gap alert is critical (nothing is trained).
    assert!(report
        .alerts
        .iter()
        .all(|a| a.alert_type == AlertType::Gap && a.severity == AlertSeverity::Critical));
}

#[test]
fn analysis_is_deterministic_across_calls() {
    init_test_logging();
    let catalog = default_catalog();
    let landmarks = default_landmarks();
    let analyzer = PlanAnalyzer::new(&catalog, &landmarks);

    let week = ppl_week();
    let first = analyzer.analyze(&week);
    for _ in 0..3 {
        assert_eq!(analyzer.analyze(&week), first);
    }
}

#[test]
fn adding_direct_sets_never_decreases_volume_or_percentage() {
    init_test_logging();
    let catalog = default_catalog();
    let landmarks = default_landmarks();
    let aggregator = VolumeAggregator::new(&catalog);
    let scorer = GoalScorer::new(&landmarks);

    let base = bench_only_week();
    let base_volume = aggregator.effective_volume(&base);
    let base_pct = scorer.score_goals(&base_volume)["Chest"].percentage;

    // Same week plus one more direct-chest set.
    let mut days = base.days().to_vec();
    days[0]
        .exercises
        .push(ExerciseEntry::uniform("pec_deck", 1, 12, 80.0));
    let grown = WeekTemplate::new(days);
    let grown_volume = aggregator.effective_volume(&grown);
    let grown_pct = scorer.score_goals(&grown_volume)["Chest"].percentage;

    assert!(grown_volume["Chest"] >= base_volume["Chest"]);
    assert!(grown_pct >= base_pct);
}

#[test]
fn overall_score_caps_at_100() {
    init_test_logging();
    let catalog = default_catalog();
    // A plan can only mask neglect if huge percentages leak through the
    // cap, so score a massively over-trained single-muscle table.
    let landmarks = LandmarkTable::new(vec![(
        "Chest".into(),
        VolumeLandmark::new(8.0, 16.0, 22.0),
    )]);

    let week = WeekTemplate::new(vec![TrainingDay::training(
        "Push",
        vec![ExerciseEntry::uniform("barbell_bench_press", 90, 8, 135.0)],
    )]);
    let volume = VolumeAggregator::new(&catalog).effective_volume(&week);
    let scores = GoalScorer::new(&landmarks).score_goals(&volume);
    assert!(scores["Chest"].percentage > 500);
    assert_eq!(GoalScorer::overall_score(&scores), 100);
}

#[test]
fn balance_boundary_at_exact_thresholds() {
    init_test_logging();
    let catalog = default_catalog();
    let analyzer = BalanceAnalyzer::new(&catalog);

    // 10 push vs 7 pull: ratio 0.70, push-heavy warning.
    let week = WeekTemplate::new(vec![TrainingDay::training(
        "Day",
        vec![
            ExerciseEntry::uniform("barbell_bench_press", 10, 8, 135.0),
            ExerciseEntry::uniform("barbell_row", 7, 8, 135.0),
        ],
    )]);
    let report = analyzer.analyze(&week);
    assert_eq!(report.status, BalanceStatus::Warning);
    assert_eq!(report.label, BalanceLabel::PushHeavy);

    // 25 push vs 19 pull: ratio 0.76, just above the bound, balanced.
    let week = WeekTemplate::new(vec![TrainingDay::training(
        "Day",
        vec![
            ExerciseEntry::uniform("barbell_bench_press", 25, 8, 135.0),
            ExerciseEntry::uniform("barbell_row", 19, 8, 135.0),
        ],
    )]);
    let report = analyzer.analyze(&week);
    assert_eq!(report.status, BalanceStatus::Ok);
    assert_eq!(report.label, BalanceLabel::Balanced);
}

#[test]
fn primary_gap_alerts_lead_secondary_and_info() {
    init_test_logging();
    let catalog = default_catalog();
    // Lats (primary) and Forearms (secondary) both untrained; the week is
    // pull-heavy so an info balance alert also fires.
    let landmarks = LandmarkTable::new(vec![
        ("Lats".into(), VolumeLandmark::new(8.0, 16.0, 22.0)),
        ("Forearms".into(), VolumeLandmark::new(2.0, 8.0, 14.0)),
        ("Chest".into(), VolumeLandmark::new(8.0, 16.0, 22.0)),
        ("Rear Delts".into(), VolumeLandmark::new(6.0, 12.0, 18.0)),
    ]);

    let week = WeekTemplate::new(vec![TrainingDay::training(
        "Day",
        vec![
            ExerciseEntry::uniform("barbell_bench_press", 10, 8, 135.0),
            ExerciseEntry::uniform("face_pull", 15, 15, 30.0),
        ],
    )]);
    let report = PlanAnalyzer::new(&catalog, &landmarks).analyze(&week);

    let lats = report
        .alerts
        .iter()
        .position(|a| a.muscle.as_deref() == Some("Lats"))
        .expect("lats alert");
    let forearms = report
        .alerts
        .iter()
        .position(|a| a.muscle.as_deref() == Some("Forearms"))
        .expect("forearms alert");
    let info = report
        .alerts
        .iter()
        .position(|a| a.severity == AlertSeverity::Info)
        .expect("pull-heavy info alert");

    assert!(lats < forearms, "primary gap must lead secondary gap");
    assert!(forearms < info, "gaps must lead info alerts");
}

#[test]
fn covered_plan_returns_no_suggestions() {
    init_test_logging();
    let catalog = default_catalog();
    let landmarks = LandmarkTable::new(vec![
        ("Chest".into(), VolumeLandmark::new(8.0, 16.0, 22.0)),
        ("Triceps".into(), VolumeLandmark::new(6.0, 12.0, 18.0)),
        ("Front Delts".into(), VolumeLandmark::new(4.0, 8.0, 14.0)),
    ]);
    let engine = SuggestionEngine::new(&catalog, &landmarks);

    // 16 bench sets: Chest 100%, Triceps 8/12 = 67%... keep pushing all
    // three muscles over 80% with direct work.
    let week = WeekTemplate::new(vec![TrainingDay::training(
        "Push",
        vec![
            ExerciseEntry::uniform("barbell_bench_press", 13, 8, 135.0),
            ExerciseEntry::uniform("tricep_pushdown_rope", 4, 12, 50.0),
            ExerciseEntry::uniform("front_raise", 1, 12, 15.0),
        ],
    )]);
    assert!(engine.suggest(&week, 10).is_empty());
}

#[test]
fn suggestions_target_lowest_scoring_muscles() {
    init_test_logging();
    let catalog = default_catalog();
    let landmarks = LandmarkTable::new(vec![
        ("Chest".into(), VolumeLandmark::new(8.0, 16.0, 22.0)),
        ("Lats".into(), VolumeLandmark::new(8.0, 16.0, 22.0)),
    ]);
    let engine = SuggestionEngine::new(&catalog, &landmarks);

    // Chest fully covered, Lats untouched: every suggestion should train
    // lats, and the top pick should train them directly.
    let week = WeekTemplate::new(vec![TrainingDay::training(
        "Push",
        vec![ExerciseEntry::uniform("barbell_bench_press", 16, 8, 135.0)],
    )]);
    let suggestions = engine.suggest(&week, 3);
    assert_eq!(suggestions.len(), 3);
    assert!(suggestions[0].direct_muscles.contains(&"Lats".to_owned()));
    assert!(suggestions.iter().all(|s| s.is_new));
}
