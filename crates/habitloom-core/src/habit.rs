//! Habit entity and its spaced-repetition state.
//!
//! A habit is a recurring behavior with a fixed per-session duration, a
//! priority/difficulty pair used by the scheduler, a set of preferred time
//! windows, and the (easiness, interval, repetitions) triple the adaptive
//! controller updates after each check-in. The spaced-repetition triple is
//! the only field group ever mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::TimeWindow;
use crate::error::ValidationError;
use crate::validate::normalize_windows;

/// Minimum habit duration in minutes.
pub const MIN_DURATION_MINUTES: u16 = 5;
/// Maximum habit duration in minutes.
pub const MAX_DURATION_MINUTES: u16 = 240;
/// Durations must land on this step.
pub const DURATION_STEP_MINUTES: u16 = 5;

/// Easiness factor floor (SM-2 convention).
pub const MIN_EASINESS: f64 = 1.3;
/// Easiness factor ceiling.
pub const MAX_EASINESS: f64 = 3.0;
/// Shortest allowed repeat interval in days.
pub const MIN_INTERVAL_DAYS: u32 = 1;
/// Longest allowed repeat interval in days.
pub const MAX_INTERVAL_DAYS: u32 = 365;

/// Spaced-repetition state: how soon the habit is "due" again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpacedRepState {
    /// Growth multiplier for the interval, bounded to [1.3, 3.0].
    pub easiness_factor: f64,
    /// Days until the next scheduled occurrence, bounded to [1, 365].
    pub interval_days: u32,
    /// Consecutive successful reviews since the last reset.
    pub repetitions: u32,
    /// Consecutive successful check-ins, for display and prediction features.
    pub streak: u32,
}

impl Default for SpacedRepState {
    fn default() -> Self {
        Self {
            easiness_factor: 2.5,
            interval_days: 1,
            repetitions: 0,
            streak: 0,
        }
    }
}

impl SpacedRepState {
    /// Check every bound on the triple.
    pub fn in_bounds(&self) -> bool {
        (MIN_EASINESS..=MAX_EASINESS).contains(&self.easiness_factor)
            && (MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(&self.interval_days)
    }

    /// Bound check that reports which field is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_EASINESS..=MAX_EASINESS).contains(&self.easiness_factor) {
            return Err(ValidationError::OutOfRange {
                field: "easiness_factor",
                value: self.easiness_factor,
                min: MIN_EASINESS,
                max: MAX_EASINESS,
            });
        }
        if !(MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(&self.interval_days) {
            return Err(ValidationError::OutOfRange {
                field: "interval_days",
                value: self.interval_days as f64,
                min: MIN_INTERVAL_DAYS as f64,
                max: MAX_INTERVAL_DAYS as f64,
            });
        }
        Ok(())
    }
}

/// A recurring behavior to track and schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Session length in minutes, 5-240 in steps of 5.
    pub duration_minutes: u16,
    /// Scheduling priority, 1 (lowest) to 5 (highest).
    pub priority: u8,
    /// Subjective difficulty, 1-5. A prediction feature, not a scheduler input.
    pub difficulty: u8,
    /// Canonical preferred-window set (see [`normalize_windows`]).
    pub preferred_windows: Vec<TimeWindow>,
    pub spaced_rep: SpacedRepState,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a habit, normalizing the window set and checking every bound.
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        duration_minutes: u16,
        priority: u8,
        difficulty: u8,
        preferred_windows: Vec<TimeWindow>,
    ) -> Result<Self, ValidationError> {
        validate_duration(duration_minutes)?;
        validate_scale(priority, "priority")?;
        validate_scale(difficulty, "difficulty")?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            duration_minutes,
            priority,
            difficulty,
            preferred_windows: normalize_windows(&preferred_windows),
            spaced_rep: SpacedRepState::default(),
            created_at: Utc::now(),
        })
    }

    /// Re-check every bound on an already-shaped habit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_duration(self.duration_minutes)?;
        validate_scale(self.priority, "priority")?;
        validate_scale(self.difficulty, "difficulty")?;
        self.spaced_rep.validate()
    }
}

/// Check the duration bound and its 5-minute alignment.
pub fn validate_duration(duration_minutes: u16) -> Result<(), ValidationError> {
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
        return Err(ValidationError::OutOfRange {
            field: "duration_minutes",
            value: duration_minutes as f64,
            min: MIN_DURATION_MINUTES as f64,
            max: MAX_DURATION_MINUTES as f64,
        });
    }
    if duration_minutes % DURATION_STEP_MINUTES != 0 {
        return Err(ValidationError::Misaligned {
            field: "duration_minutes",
            value: duration_minutes as i64,
            step: DURATION_STEP_MINUTES as i64,
        });
    }
    Ok(())
}

/// Check a 1-5 scale field (priority, difficulty).
pub fn validate_scale(value: u8, field: &'static str) -> Result<(), ValidationError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: value as f64,
            min: 1.0,
            max: 5.0,
        })
    }
}
