//! # Habitloom Core Library
//!
//! This library provides the habit-scheduling domain model and its
//! invariant layer. It is deliberately small and pure: entity shapes,
//! bounded preference resolution, and the consistency rules that gate
//! every mutation, with the heavyweight engines (constraint-solving
//! scheduler, failure predictor) modeled as traits for external
//! collaborators.
//!
//! ## Architecture
//!
//! - **Enumerated domains**: closed vocabularies (time windows, quality
//!   ratings, integration methods, notification channels, days of week)
//! - **Entity schema**: User, Habit, FixedCommitment, CheckIn, Schedule,
//!   ScheduledSlot, Prediction, SimulationSnapshot
//! - **Preference resolver**: field-level merge of partial preferences
//!   against a fixed default table, never clamping
//! - **Invariant validators**: pure predicates for check-in consistency,
//!   slot/duration agreement, slot non-overlap, and window normalization
//! - **Engines**: collaborator traits plus reference implementations of
//!   the SM-2 controller and the stability integrator
//!
//! Everything is synchronous and side-effect-free over immutable borrows;
//! persistence, transport, and transaction semantics belong to callers.

pub mod adaptive;
pub mod checkin;
pub mod domain;
pub mod engines;
pub mod error;
pub mod habit;
pub mod prediction;
pub mod preferences;
pub mod requests;
pub mod schedule;
pub mod simulation;
pub mod user;
pub mod validate;

pub use adaptive::Sm2Controller;
pub use checkin::CheckIn;
pub use domain::{DayOfWeek, IntegrationMethod, NotificationChannel, QualityRating, TimeWindow};
pub use engines::{AdaptiveController, FailurePredictor, SlotScheduler, StabilitySimulator};
pub use error::{CoreError, EngineError, InvariantViolation, Result, ValidationError};
pub use habit::{Habit, SpacedRepState};
pub use prediction::{Prediction, PredictionFeatures, FEATURE_COUNT};
pub use preferences::{resolve, PartialPreferences, Preferences};
pub use requests::{
    CreateCheckInRequest, CreateHabitRequest, CreateUserRequest, GenerateScheduleRequest,
    GenerateScheduleResponse, UpdateHabitRequest,
};
pub use schedule::{FixedCommitment, Schedule, ScheduledSlot, MAX_SLOTS};
pub use simulation::{OrbitIntegrator, SimulationSnapshot};
pub use user::User;
pub use validate::{
    check_in_consistent, check_schedule, normalize_windows, slot_duration_matches,
    slots_non_overlapping, validate_schedule,
};
