//! Create/update request shapes.
//!
//! Thin, partially-specified projections of the entities. They carry no
//! invariants of their own: `validate` only checks that any field present
//! satisfies the bound of the corresponding entity field. Cross-entity
//! checks stay with [`crate::validate`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{QualityRating, TimeWindow};
use crate::error::ValidationError;
use crate::habit::{validate_duration, validate_scale};
use crate::preferences::PartialPreferences;
use crate::schedule::Schedule;
use crate::user::{validate_email, validate_timezone};
use crate::validate::check_in_consistent;

/// Account-creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password_hash: String,
    pub timezone: String,
    #[serde(default)]
    pub preferences: PartialPreferences,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        validate_timezone(&self.timezone)?;
        crate::preferences::resolve(&self.preferences).map(|_| ())
    }
}

/// Habit-creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    pub duration_minutes: u16,
    pub priority: u8,
    pub difficulty: u8,
    #[serde(default)]
    pub preferred_windows: Vec<TimeWindow>,
}

impl CreateHabitRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_duration(self.duration_minutes)?;
        validate_scale(self.priority, "priority")?;
        validate_scale(self.difficulty, "difficulty")
    }
}

/// Habit-update request: only present fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHabitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_windows: Option<Vec<TimeWindow>>,
}

impl UpdateHabitRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(duration) = self.duration_minutes {
            validate_duration(duration)?;
        }
        if let Some(priority) = self.priority {
            validate_scale(priority, "priority")?;
        }
        if let Some(difficulty) = self.difficulty {
            validate_scale(difficulty, "difficulty")?;
        }
        Ok(())
    }
}

/// Check-in recording request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCheckInRequest {
    pub habit_id: Uuid,
    pub date: NaiveDate,
    pub success: bool,
    #[serde(default)]
    pub quality: Option<QualityRating>,
}

impl CreateCheckInRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if check_in_consistent(self.success, self.quality) {
            Ok(())
        } else {
            Err(ValidationError::Inconsistent(format!(
                "success={} with quality={:?}",
                self.success, self.quality
            )))
        }
    }
}

/// Schedule-generation request for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    pub user_id: Uuid,
    pub date: NaiveDate,
}

/// Schedule-generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleResponse {
    pub schedule: Schedule,
    /// Habits that could not be placed on the requested day.
    #[serde(default)]
    pub unplaced_habit_ids: Vec<Uuid>,
}
