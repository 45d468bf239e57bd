//! Invariant validators and normalizers.
//!
//! Every function here is a pure predicate over already-shaped data: no
//! I/O, no mutation, no panics on malformed-but-well-typed input. The
//! boolean predicates are the primitive layer; [`check_schedule`] composes
//! them and reports the first violated rule as a reason code.

use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{QualityRating, TimeWindow};
use crate::error::{InvariantViolation, ValidationError};
use crate::habit::Habit;
use crate::schedule::{Schedule, ScheduledSlot, MAX_SLOTS};

/// Canonicalize a preferred-window set.
///
/// Duplicates are removed; an empty set defaults to `[Any]`; if `Any`
/// appears alongside other windows it dominates and the set collapses to
/// `[Any]` alone. Output is sorted by window start, so the result is
/// independent of input order and normalizing twice equals normalizing
/// once.
pub fn normalize_windows(windows: &[TimeWindow]) -> Vec<TimeWindow> {
    if windows.is_empty() || windows.contains(&TimeWindow::Any) {
        return vec![TimeWindow::Any];
    }

    let mut out: Vec<TimeWindow> = Vec::with_capacity(windows.len());
    for w in windows {
        if !out.contains(w) {
            out.push(*w);
        }
    }
    out.sort_by_key(|w| (w.start_minute(), w.end_minute()));
    out
}

/// Check-in consistency: quality is only meaningful conditioned on success.
///
/// A failed check-in must carry no quality or an explicit FAIL; a
/// successful one must carry exactly one of HARD/GOOD/EASY.
pub fn check_in_consistent(success: bool, quality: Option<QualityRating>) -> bool {
    match (success, quality) {
        (false, None) | (false, Some(QualityRating::Fail)) => true,
        (true, Some(q)) => q != QualityRating::Fail,
        _ => false,
    }
}

/// Exact agreement between a slot's span and its habit's duration.
pub fn slot_duration_matches(slot: &ScheduledSlot, habit: &Habit) -> bool {
    slot.start_minute < slot.end_minute
        && slot.end_minute - slot.start_minute == habit.duration_minutes
}

/// No two slots' half-open `[start, end)` intervals intersect.
///
/// Sorts by start and scans adjacent pairs, so a slot ending exactly when
/// the next starts is not an overlap.
pub fn slots_non_overlapping(slots: &[ScheduledSlot]) -> bool {
    let mut sorted: Vec<&ScheduledSlot> = slots.iter().collect();
    sorted.sort_by_key(|s| (s.start_minute, s.end_minute));
    sorted.windows(2).all(|pair| pair[0].end_minute <= pair[1].start_minute)
}

/// Composite schedule check, reporting the first violated invariant.
///
/// `habits` maps habit ids to their records so slot durations can be
/// checked against the configured habit duration.
pub fn check_schedule(
    schedule: &Schedule,
    habits: &HashMap<Uuid, Habit>,
) -> Result<(), InvariantViolation> {
    if schedule.slots.len() > MAX_SLOTS {
        return Err(InvariantViolation::SlotLimitExceeded);
    }

    for slot in &schedule.slots {
        if slot.start_minute >= slot.end_minute {
            return Err(InvariantViolation::InvalidSlotRange);
        }
        if !slot.is_aligned() {
            return Err(InvariantViolation::MisalignedSlot);
        }
        let habit = habits
            .get(&slot.habit_id)
            .ok_or(InvariantViolation::UnknownHabit)?;
        if !slot_duration_matches(slot, habit) {
            return Err(InvariantViolation::SlotDurationMismatch);
        }
    }

    if !slots_non_overlapping(&schedule.slots) {
        return Err(InvariantViolation::SlotOverlap);
    }

    Ok(())
}

/// Caller-facing schedule check that folds the reason code into the error
/// taxonomy as a structural conflict.
pub fn validate_schedule(
    schedule: &Schedule,
    habits: &HashMap<Uuid, Habit>,
) -> Result<(), ValidationError> {
    check_schedule(schedule, habits).map_err(ValidationError::Structural)
}
