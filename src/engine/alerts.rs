// ABOUTME: Composes goal scores and balance reports into severity-ordered findings
// ABOUTME: Alert text is beginner-facing; landmark terminology never leaks into messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Alert Generator
//!
//! Gap alerts fire for muscles below their minimum effective volume,
//! excess alerts for muscles above their maximum recoverable volume, and
//! balance alerts for the problematic push/pull classifications.
//!
//! Ordering is significant: critical before warning before info, primary
//! muscles before secondary at equal severity, and within each partition
//! gaps ascend by goal percentage while excesses descend.

use crate::catalog::LandmarkTable;
use crate::constants::is_primary_muscle;
use crate::engine::balance::{BalanceLabel, PatternBalanceReport};
use crate::engine::scoring::GoalScore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Category of finding an alert reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Volume below minimum effective volume
    Gap,
    /// Volume above maximum recoverable volume
    Excess,
    /// Push/pull imbalance
    Balance,
    /// Informational note
    Info,
}

/// Alert severity, in descending order of urgency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Needs fixing before the plan is viable
    Critical,
    /// Should be addressed
    Warning,
    /// Worth knowing
    Info,
}

/// One human-readable finding about a training week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// Stable identifier, e.g. "gap_front_delts"
    pub id: String,
    /// Finding category
    pub alert_type: AlertType,
    /// Finding severity
    pub severity: AlertSeverity,
    /// Subject muscle; `None` for balance findings
    pub muscle: Option<String>,
    /// Whether the subject muscle is a primary movement-pattern muscle
    pub is_primary: bool,
    /// Short headline
    pub title: String,
    /// Full finding text
    pub message: String,
}

/// Builds severity-ordered alerts from scores and balance
#[derive(Debug, Clone, Copy)]
pub struct AlertGenerator<'a> {
    landmarks: &'a LandmarkTable,
}

impl<'a> AlertGenerator<'a> {
    /// Build a generator over the given landmark table
    #[must_use]
    pub const fn new(landmarks: &'a LandmarkTable) -> Self {
        Self { landmarks }
    }

    /// Compose gap, excess, and balance alerts in presentation order
    #[must_use]
    pub fn generate(
        &self,
        scores: &HashMap<String, GoalScore>,
        balance: &PatternBalanceReport,
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();
        self.push_gap_alerts(scores, &mut alerts);
        self.push_excess_alerts(scores, &mut alerts);
        push_balance_alerts(balance, &mut alerts);

        // Stable sort keeps the per-category percentage ordering intact
        // within each (severity, primary) partition.
        alerts.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then_with(|| b.is_primary.cmp(&a.is_primary))
        });

        debug!(count = alerts.len(), "generated plan alerts");
        alerts
    }

    fn push_gap_alerts(&self, scores: &HashMap<String, GoalScore>, alerts: &mut Vec<Alert>) {
        let mut gaps: Vec<(&String, &GoalScore, f64)> = scores
            .iter()
            .filter_map(|(muscle, score)| {
                let lm = self.landmarks.landmark_for(muscle)?;
                (score.effective_sets < lm.mev).then_some((muscle, score, lm.mev))
            })
            .collect();

        // Primary muscles first, then by how far below target.
        gaps.sort_by(|a, b| {
            let a_primary = is_primary_muscle(a.0);
            let b_primary = is_primary_muscle(b.0);
            b_primary
                .cmp(&a_primary)
                .then_with(|| a.1.percentage.cmp(&b.1.percentage))
                .then_with(|| a.0.cmp(b.0))
        });

        for (muscle, score, mev) in gaps {
            let untrained = score.effective_sets.abs() < f64::EPSILON;
            let got = score.effective_sets.round() as i64;
            let need = mev.round() as i64;
            alerts.push(Alert {
                id: format!("gap_{}", muscle_slug(muscle)),
                alert_type: AlertType::Gap,
                severity: if untrained {
                    AlertSeverity::Critical
                } else {
                    AlertSeverity::Warning
                },
                muscle: Some(muscle.clone()),
                is_primary: is_primary_muscle(muscle),
                title: if untrained {
                    format!("{muscle} not being trained")
                } else {
                    format!("{muscle} needs more volume")
                },
                message: if untrained {
                    format!("No sets targeting {muscle}. Aim for at least {need} sets per week.")
                } else {
                    format!(
                        "~{got} sets/week — below the minimum for consistent progress \
                         ({need}+ sets/week)."
                    )
                },
            });
        }
    }

    fn push_excess_alerts(&self, scores: &HashMap<String, GoalScore>, alerts: &mut Vec<Alert>) {
        let mut excesses: Vec<(&String, &GoalScore)> = scores
            .iter()
            .filter(|(muscle, score)| {
                self.landmarks
                    .landmark_for(muscle)
                    .is_some_and(|lm| score.effective_sets > lm.mrv)
            })
            .collect();

        // Worst overshoot first within each primary/secondary partition.
        excesses.sort_by(|a, b| {
            let a_primary = is_primary_muscle(a.0);
            let b_primary = is_primary_muscle(b.0);
            b_primary
                .cmp(&a_primary)
                .then_with(|| b.1.percentage.cmp(&a.1.percentage))
                .then_with(|| a.0.cmp(b.0))
        });

        for (muscle, score) in excesses {
            let got = score.effective_sets.round() as i64;
            alerts.push(Alert {
                id: format!("excess_{}", muscle_slug(muscle)),
                alert_type: AlertType::Excess,
                severity: AlertSeverity::Warning,
                muscle: Some(muscle.clone()),
                is_primary: is_primary_muscle(muscle),
                title: format!("{muscle} volume is very high"),
                message: format!(
                    "~{got} sets/week exceeds the recommended recovery limit. \
                     Consider removing one exercise or reducing sets."
                ),
            });
        }
    }
}

fn push_balance_alerts(balance: &PatternBalanceReport, alerts: &mut Vec<Alert>) {
    let alert = match balance.label {
        BalanceLabel::NoPull => Some(Alert {
            id: "balance_no_pull".to_owned(),
            alert_type: AlertType::Balance,
            severity: AlertSeverity::Critical,
            muscle: None,
            is_primary: false,
            title: "No pulling movements".to_owned(),
            message: "Your plan has no back or bicep work. Add rows, pulldowns, or pull-ups \
                      to avoid muscle imbalances."
                .to_owned(),
        }),
        BalanceLabel::NoPush => Some(Alert {
            id: "balance_no_push".to_owned(),
            alert_type: AlertType::Balance,
            severity: AlertSeverity::Critical,
            muscle: None,
            is_primary: false,
            title: "No pushing movements".to_owned(),
            message: "Your plan has no pressing exercises. Add bench press, overhead press, \
                      or push-ups."
                .to_owned(),
        }),
        BalanceLabel::PushHeavy => Some(Alert {
            id: "balance_push_heavy".to_owned(),
            alert_type: AlertType::Balance,
            severity: AlertSeverity::Warning,
            muscle: None,
            is_primary: false,
            title: "Plan is push-heavy".to_owned(),
            message: format!(
                "{} pull sets vs {} push sets. Adding more rows or pulldowns can prevent \
                 shoulder problems over time.",
                balance.sets.pull, balance.sets.push
            ),
        }),
        BalanceLabel::PullHeavy => Some(Alert {
            id: "balance_pull_heavy".to_owned(),
            alert_type: AlertType::Info,
            severity: AlertSeverity::Info,
            muscle: None,
            is_primary: false,
            title: "Plan is pull-heavy".to_owned(),
            message: format!(
                "{} pull sets vs {} push sets. This is generally fine, but consider matching \
                 with more pressing work.",
                balance.sets.pull, balance.sets.push
            ),
        }),
        BalanceLabel::Balanced | BalanceLabel::LegsCoreOnly => None,
    };
    if let Some(alert) = alert {
        alerts.push(alert);
    }
}

/// Lowercase id fragment for a muscle name ("Front Delts" -> "front_delts")
fn muscle_slug(muscle: &str) -> String {
    muscle
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
