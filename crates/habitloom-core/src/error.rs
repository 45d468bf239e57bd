//! Core error types for habitloom-core.
//!
//! This module defines the error hierarchy using thiserror. The taxonomy
//! follows the invariant layer: out-of-range field values, inconsistent
//! field combinations, and structural conflicts between otherwise valid
//! entities.

use thiserror::Error;

/// Core error type for habitloom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Engine (scheduler/predictor/controller/simulator) errors
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Validation errors.
///
/// Validators themselves return booleans or reason codes and never construct
/// these; the caller-facing layers (constructors, request validation, the
/// preference resolver) translate a failed check into one of these variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A field value violates its declared bound.
    #[error("Value {value} for '{field}' is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A field value must be a multiple of a fixed step.
    #[error("Value {value} for '{field}' must be a multiple of {step}")]
    Misaligned {
        field: &'static str,
        value: i64,
        step: i64,
    },

    /// Individually valid fields that violate a cross-field rule.
    #[error("Inconsistent combination: {0}")]
    Inconsistent(String),

    /// Valid individual entities whose combination violates a
    /// collection-level invariant.
    #[error("Structural conflict: {0}")]
    Structural(InvariantViolation),

    /// Malformed email address.
    #[error("Malformed email address: {0}")]
    MalformedEmail(String),

    /// Unknown IANA timezone identifier.
    #[error("Unknown IANA timezone: {0}")]
    UnknownTimezone(String),

    /// A time range where start does not precede end.
    #[error("Invalid time range for '{field}': start ({start}) must be before end ({end})")]
    InvalidTimeRange {
        field: &'static str,
        start: i64,
        end: i64,
    },
}

/// Reason codes identifying which schedule invariant failed.
///
/// The boolean predicates in [`crate::validate`] are the primitive layer;
/// composite checks report the first violated rule through one of these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// More than the maximum number of slots in one schedule.
    #[error("schedule exceeds the slot limit")]
    SlotLimitExceeded,

    /// Two slots in the same schedule overlap.
    #[error("two slots in the schedule overlap")]
    SlotOverlap,

    /// A slot's span does not equal its habit's configured duration.
    #[error("slot span does not match the habit duration")]
    SlotDurationMismatch,

    /// A slot references a habit that is not part of the input set.
    #[error("slot references an unknown habit")]
    UnknownHabit,

    /// A slot boundary is not aligned to the 15-minute grid.
    #[error("slot boundary is not 15-minute aligned")]
    MisalignedSlot,

    /// A slot or commitment where start >= end.
    #[error("slot start does not precede its end")]
    InvalidSlotRange,
}

/// Errors produced by the engine implementations shipped with the core.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine was given an entity that fails its invariants.
    #[error("Engine input rejected: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Not enough history to produce an output.
    #[error("Insufficient history: {have} check-ins, need at least {need}")]
    InsufficientHistory { have: usize, need: usize },

    /// The engine produced an output that fails its own contract.
    #[error("Engine output violates its contract: {0}")]
    ContractViolation(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
