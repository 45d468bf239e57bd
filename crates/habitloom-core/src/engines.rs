//! Traits for the external engine collaborators.
//!
//! The constraint-solving scheduler and the regression-based failure
//! predictor are not implemented in this crate; these traits fix the
//! contract they must honor against the entity schema. The adaptive
//! controller and the stability simulator ship with small reference
//! implementations ([`crate::adaptive::Sm2Controller`],
//! [`crate::simulation::OrbitIntegrator`]) that the contract tests run
//! against.

use chrono::NaiveDate;

use crate::checkin::CheckIn;
use crate::domain::QualityRating;
use crate::error::EngineError;
use crate::habit::{Habit, SpacedRepState};
use crate::prediction::Prediction;
use crate::preferences::{AdaptivePrefs, SimulationPrefs};
use crate::schedule::{FixedCommitment, Schedule};
use crate::simulation::SimulationSnapshot;
use crate::user::User;

/// Generates one day's schedule from a user's habits and commitments.
///
/// Contract: every emitted slot satisfies the slot/duration and no-overlap
/// invariants ([`crate::validate::check_schedule`] passes), and no slot
/// intersects a fixed commitment on the schedule's day of week.
pub trait SlotScheduler {
    fn generate(
        &self,
        user: &User,
        habits: &[Habit],
        commitments: &[FixedCommitment],
        date: NaiveDate,
    ) -> Result<Schedule, EngineError>;
}

/// Forecasts the failure risk of a habit on a date.
///
/// Contract: `failure_probability` lies in [0,1] and the feature vector is
/// exactly six-dimensional (enforced by the [`Prediction`] shape).
pub trait FailurePredictor {
    fn predict(
        &self,
        habit: &Habit,
        history: &[CheckIn],
        date: NaiveDate,
    ) -> Result<Prediction, EngineError>;
}

/// Updates a habit's spaced-repetition triple after a check-in.
///
/// Contract: the returned state satisfies every bound on
/// [`SpacedRepState`]. A grade at or above GOOD increments repetitions
/// and streak; the first two passes use staged intervals (the configured
/// minimum, then six times it) and later passes grow the interval
/// multiplicatively by the easiness factor, clamped to the configured
/// bounds. A grade below GOOD resets repetitions and streak and drops
/// the interval to the configured minimum.
pub trait AdaptiveController {
    fn review(&self, state: &SpacedRepState, grade: QualityRating, prefs: &AdaptivePrefs)
        -> SpacedRepState;
}

/// Advances a habit's physical-analogy stability model by one step.
///
/// Contract: drag stays in [0,1] and the event-horizon distance keeps its
/// signed semantics (negative once the threshold is crossed).
pub trait StabilitySimulator {
    fn step(&self, snapshot: &SimulationSnapshot, prefs: &SimulationPrefs) -> SimulationSnapshot;
}
