//! Failure-risk prediction entity.
//!
//! The predictor is an external collaborator; this module fixes the shape
//! it must emit: a probability in [0,1] over a fixed six-dimensional
//! feature vector.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Number of features the predictor consumes. Fixed by the model.
pub const FEATURE_COUNT: usize = 6;

/// The feature vector behind a prediction, in model order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionFeatures {
    /// Completion rate over the recent window, [0,1].
    pub recent_completion_rate: f64,
    /// Current streak length in days.
    pub streak: f64,
    /// Habit difficulty, 1-5.
    pub difficulty: f64,
    /// Days since the last successful check-in.
    pub days_since_success: f64,
    /// Mean quality grade over the recent window, 0-3.
    pub mean_quality: f64,
    /// Scheduled minute-of-day for the habit, normalized to [0,1].
    pub slot_position: f64,
}

impl PredictionFeatures {
    /// The vector in model order.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.recent_completion_rate,
            self.streak,
            self.difficulty,
            self.days_since_success,
            self.mean_quality,
            self.slot_position,
        ]
    }
}

/// Forecasted failure risk for one habit on one date. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub date: NaiveDate,
    /// Probability the habit will be missed, [0,1].
    pub failure_probability: f64,
    pub features: PredictionFeatures,
    pub computed_at: DateTime<Utc>,
}

impl Prediction {
    /// Create a prediction, rejecting probabilities outside [0,1].
    pub fn new(
        habit_id: Uuid,
        date: NaiveDate,
        failure_probability: f64,
        features: PredictionFeatures,
    ) -> Result<Self, ValidationError> {
        validate_probability(failure_probability, "failure_probability")?;
        Ok(Self {
            id: Uuid::new_v4(),
            habit_id,
            date,
            failure_probability,
            features,
            computed_at: Utc::now(),
        })
    }
}

/// Check that a value is a probability. NaN is out of range.
pub fn validate_probability(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> PredictionFeatures {
        PredictionFeatures {
            recent_completion_rate: 0.7,
            streak: 4.0,
            difficulty: 3.0,
            days_since_success: 1.0,
            mean_quality: 2.2,
            slot_position: 0.33,
        }
    }

    #[test]
    fn feature_vector_has_fixed_dimension() {
        assert_eq!(features().as_array().len(), FEATURE_COUNT);
    }

    #[test]
    fn probability_bounds_are_enforced() {
        let day = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        assert!(Prediction::new(Uuid::new_v4(), day, 0.0, features()).is_ok());
        assert!(Prediction::new(Uuid::new_v4(), day, 1.0, features()).is_ok());
        assert!(Prediction::new(Uuid::new_v4(), day, 1.01, features()).is_err());
        assert!(Prediction::new(Uuid::new_v4(), day, -0.2, features()).is_err());
        assert!(Prediction::new(Uuid::new_v4(), day, f64::NAN, features()).is_err());
    }
}
