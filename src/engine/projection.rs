// ABOUTME: Expands a week template into a dated mesocycle with progressive overload
// ABOUTME: Loads scale by a compounding weekly factor and round to plate increments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Atlas Strength

//! # Progression Projector
//!
//! For week index `wi` (0-based) the overload factor is
//! `1 + wi * rate / 100`. Loaded sets scale and round to the nearest
//! 5-unit increment; bodyweight sets and reps never scale. The final week
//! of a mesocycle longer than two weeks is labeled as a taper, which is a
//! label annotation only: callers wanting a genuinely lighter taper week
//! pre-author a lighter template for that slot.

use crate::constants::projection::{DAYS_PER_WEEK, LOAD_ROUNDING_INCREMENT, MIN_WEEKS_FOR_TAPER};
use crate::errors::EngineError;
use crate::models::WeekTemplate;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One projected set with its scaled load
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProjectedSet {
    /// Target repetitions, carried unscaled from the template
    pub reps: u32,
    /// Scaled load rounded to the nearest increment; 0.0 for bodyweight
    pub load: f64,
}

/// One projected exercise slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectedEntry {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Projected sets for this week
    pub sets: Vec<ProjectedSet>,
}

/// One dated day within a mesocycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayInstance {
    /// 1-based day number across the whole mesocycle
    pub day_number: u32,
    /// Calendar date (plain date arithmetic, no timezone handling)
    pub date: NaiveDate,
    /// Display label; rest days read "Rest"
    pub label: String,
    /// Whether this is a rest day
    pub is_rest: bool,
    /// Projected exercises; empty on rest days
    pub exercises: Vec<ProjectedEntry>,
}

/// One week of a mesocycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekInstance {
    /// 1-based week number
    pub week_number: u32,
    /// Display label, e.g. "Week 3" or "Week 4 (Taper)"
    pub label: String,
    /// Dated days in template order
    pub days: Vec<DayInstance>,
}

/// A multi-week training block expanded from one week template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mesocycle {
    /// Ordered week instances
    pub weeks: Vec<WeekInstance>,
}

/// Expands week templates into dated mesocycles
///
/// The mesocycle is a cache of the projection: safely rebuildable from the
/// template, rate, and start date at any time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressionProjector;

impl ProgressionProjector {
    /// Build a projector
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Expand `template` into `total_weeks` dated weeks starting at
    /// `start_date`, compounding `progress_rate_percent` per week
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWeekCount`] when `total_weeks` is 0
    /// and [`EngineError::InvalidProgressRate`] when the rate is NaN or
    /// infinite. These are programmer errors; domain-data irregularities
    /// never fail projection.
    pub fn project(
        &self,
        template: &WeekTemplate,
        total_weeks: u32,
        progress_rate_percent: f64,
        start_date: NaiveDate,
    ) -> Result<Mesocycle, EngineError> {
        if total_weeks == 0 {
            return Err(EngineError::InvalidWeekCount(total_weeks));
        }
        if !progress_rate_percent.is_finite() {
            return Err(EngineError::InvalidProgressRate(progress_rate_percent));
        }
        debug!(total_weeks, progress_rate_percent, %start_date, "projecting mesocycle");

        let weeks = (0..total_weeks)
            .map(|wi| {
                let overload_factor = 1.0 + f64::from(wi) * (progress_rate_percent / 100.0);
                let is_taper = wi == total_weeks - 1 && total_weeks > MIN_WEEKS_FOR_TAPER;
                WeekInstance {
                    week_number: wi + 1,
                    label: if is_taper {
                        format!("Week {} (Taper)", wi + 1)
                    } else {
                        format!("Week {}", wi + 1)
                    },
                    days: self.project_week(template, wi, overload_factor, start_date),
                }
            })
            .collect();

        Ok(Mesocycle { weeks })
    }

    fn project_week(
        &self,
        template: &WeekTemplate,
        week_index: u32,
        overload_factor: f64,
        start_date: NaiveDate,
    ) -> Vec<DayInstance> {
        template
            .days()
            .iter()
            .enumerate()
            .map(|(di, day)| {
                let offset = week_index * DAYS_PER_WEEK + di as u32;
                DayInstance {
                    day_number: offset + 1,
                    date: start_date
                        .checked_add_days(Days::new(u64::from(offset)))
                        .unwrap_or(start_date),
                    label: if day.is_rest {
                        "Rest".to_owned()
                    } else {
                        day.label.clone()
                    },
                    is_rest: day.is_rest,
                    exercises: day
                        .exercises
                        .iter()
                        .map(|entry| ProjectedEntry {
                            exercise_id: entry.exercise_id.clone(),
                            sets: entry
                                .sets
                                .iter()
                                .map(|set| ProjectedSet {
                                    reps: set.reps,
                                    load: scale_load(set.load, overload_factor),
                                })
                                .collect(),
                        })
                        .collect(),
                }
            })
            .collect()
    }
}

/// Scale a load by the overload factor and round to the plate increment
///
/// Bodyweight sets (load 0) never scale.
fn scale_load(load: f64, overload_factor: f64) -> f64 {
    if load > 0.0 {
        (load * overload_factor / LOAD_ROUNDING_INCREMENT).round() * LOAD_ROUNDING_INCREMENT
    } else {
        0.0
    }
}
