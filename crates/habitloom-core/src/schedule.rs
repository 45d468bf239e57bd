//! Schedules, slots, and fixed commitments.
//!
//! A schedule is one day's generated plan: an ordered collection of up to 50
//! slots, each placing one habit at a 15-minute-aligned start/end. Slots are
//! owned by their schedule and have no independent lifecycle. Fixed
//! commitments are the immovable calendar blocks the scheduler must route
//! around; they are read-only inputs here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DayOfWeek;
use crate::error::ValidationError;

/// Upper bound on slots per schedule.
pub const MAX_SLOTS: usize = 50;
/// Slot boundaries land on this grid.
pub const SLOT_ALIGN_MINUTES: u16 = 15;
/// Last valid minute-of-day (23:59).
pub const LAST_MINUTE: u16 = 1439;

/// One habit's placement within a schedule. Half-open `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledSlot {
    pub habit_id: Uuid,
    /// Minutes since midnight, 15-minute aligned.
    pub start_minute: u16,
    /// Minutes since midnight, exclusive, 15-minute aligned.
    pub end_minute: u16,
}

impl ScheduledSlot {
    /// Wall-clock span in minutes.
    pub fn span_minutes(&self) -> u16 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Half-open interval intersection test.
    pub fn overlaps(&self, other: &ScheduledSlot) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    /// Both boundaries on the 15-minute grid.
    pub fn is_aligned(&self) -> bool {
        self.start_minute % SLOT_ALIGN_MINUTES == 0 && self.end_minute % SLOT_ALIGN_MINUTES == 0
    }
}

/// One day's generated plan. Append-only; slots are never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub slots: Vec<ScheduledSlot>,
    pub generated_at: DateTime<Utc>,
}

impl Schedule {
    /// Create an empty schedule for a day.
    pub fn new(user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            slots: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

/// An immovable, recurring calendar block (class, work, commute).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedCommitment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Day of week code, SUNDAY=0 .. SATURDAY=6.
    pub day: u8,
    pub start_minute: u16,
    pub end_minute: u16,
}

impl FixedCommitment {
    /// Create a commitment, checking the day code and time range.
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        day: u8,
        start_minute: u16,
        end_minute: u16,
    ) -> Result<Self, ValidationError> {
        if day > 6 {
            return Err(ValidationError::OutOfRange {
                field: "day",
                value: day as f64,
                min: 0.0,
                max: 6.0,
            });
        }
        if start_minute > LAST_MINUTE || end_minute > LAST_MINUTE {
            return Err(ValidationError::OutOfRange {
                field: "minute_of_day",
                value: start_minute.max(end_minute) as f64,
                min: 0.0,
                max: LAST_MINUTE as f64,
            });
        }
        if start_minute >= end_minute {
            return Err(ValidationError::InvalidTimeRange {
                field: "commitment",
                start: start_minute as i64,
                end: end_minute as i64,
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            day,
            start_minute,
            end_minute,
        })
    }

    /// The day code as a vocabulary value. Always `Some` for a record
    /// built through [`FixedCommitment::new`].
    pub fn day_of_week(&self) -> Option<DayOfWeek> {
        DayOfWeek::from_code(self.day as i64)
    }

    /// Half-open intersection with a slot, ignoring the day dimension.
    pub fn blocks(&self, slot: &ScheduledSlot) -> bool {
        self.start_minute < slot.end_minute && slot.start_minute < self.end_minute
    }
}
