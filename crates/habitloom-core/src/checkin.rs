//! Check-in entity: the outcome of one habit on one day.
//!
//! Quality is only meaningful conditioned on success. A failed check-in
//! carries no quality (or an explicit FAIL); a successful one carries
//! exactly one of HARD/GOOD/EASY. The coupling rule lives in
//! [`crate::validate::check_in_consistent`]; the constructor here refuses
//! to build an inconsistent record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::QualityRating;
use crate::error::ValidationError;
use crate::validate::check_in_consistent;

/// Outcome for one habit on one calendar day. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub date: NaiveDate,
    pub success: bool,
    /// Present iff the coupling rule allows it for `success`.
    pub quality: Option<QualityRating>,
    pub recorded_at: DateTime<Utc>,
}

impl CheckIn {
    /// Create a check-in, rejecting inconsistent success/quality pairs.
    pub fn new(
        habit_id: Uuid,
        date: NaiveDate,
        success: bool,
        quality: Option<QualityRating>,
    ) -> Result<Self, ValidationError> {
        if !check_in_consistent(success, quality) {
            return Err(ValidationError::Inconsistent(format!(
                "success={success} with quality={quality:?}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            habit_id,
            date,
            success,
            quality,
            recorded_at: Utc::now(),
        })
    }

    /// The spaced-repetition grade this check-in contributes.
    ///
    /// A failed check-in always grades as FAIL, whether or not the quality
    /// field was recorded. A successful check-in grades as its quality; if
    /// a record deserialized from outside ever carries `success=true` with
    /// no quality (the constructor refuses to build one), it grades as
    /// GOOD rather than panicking.
    pub fn grade(&self) -> QualityRating {
        if self.success {
            self.quality.unwrap_or(QualityRating::Good)
        } else {
            QualityRating::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn failed_checkin_without_quality_is_valid() {
        let c = CheckIn::new(Uuid::new_v4(), day(), false, None).unwrap();
        assert_eq!(c.grade(), QualityRating::Fail);
    }

    #[test]
    fn failed_checkin_with_explicit_fail_is_valid() {
        let c = CheckIn::new(Uuid::new_v4(), day(), false, Some(QualityRating::Fail)).unwrap();
        assert_eq!(c.grade(), QualityRating::Fail);
    }

    #[test]
    fn failed_checkin_with_success_quality_is_rejected() {
        let err =
            CheckIn::new(Uuid::new_v4(), day(), false, Some(QualityRating::Good)).unwrap_err();
        assert!(matches!(err, ValidationError::Inconsistent(_)));
    }

    #[test]
    fn deserialized_success_without_quality_grades_as_good() {
        let json = format!(
            r#"{{"id": "{}", "habit_id": "{}", "date": "2025-03-14",
                "success": true, "quality": null,
                "recorded_at": "2025-03-14T20:00:00Z"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let c: CheckIn = serde_json::from_str(&json).unwrap();
        assert_eq!(c.grade(), QualityRating::Good);
    }

    #[test]
    fn successful_checkin_requires_quality() {
        assert!(CheckIn::new(Uuid::new_v4(), day(), true, None).is_err());
        assert!(CheckIn::new(Uuid::new_v4(), day(), true, Some(QualityRating::Fail)).is_err());
        let c = CheckIn::new(Uuid::new_v4(), day(), true, Some(QualityRating::Easy)).unwrap();
        assert_eq!(c.grade(), QualityRating::Easy);
    }
}
