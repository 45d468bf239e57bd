//! Stability-simulation snapshot and integrator.
//!
//! The marketing metaphor models a habit as a body orbiting a failure
//! threshold: `radius` is its distance from collapse, `drag` bleeds off
//! velocity, and the event-horizon distance is `radius` minus the collapse
//! threshold (negative once crossed). [`OrbitIntegrator`] is the reference
//! [`StabilitySimulator`]: it steps the damped radial model
//!
//! ```text
//! radius'   = velocity
//! velocity' = -drag * velocity - pull
//! ```
//!
//! with either Euler or classic RK4, selected by the resolved simulation
//! preferences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::IntegrationMethod;
use crate::engines::StabilitySimulator;
use crate::error::ValidationError;
use crate::preferences::SimulationPrefs;

/// Radius at which a habit counts as collapsed.
pub const EVENT_HORIZON_RADIUS: f64 = 1.0;
/// Constant inward pull toward the horizon.
const BASE_PULL: f64 = 0.1;

/// A stability reading for one habit. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationSnapshot {
    pub id: Uuid,
    pub habit_id: Uuid,
    /// Distance from collapse, >= 0.
    pub radius: f64,
    /// Radial velocity; sign is outward-positive.
    pub velocity: f64,
    /// Damping coefficient, [0,1].
    pub drag: f64,
    /// `radius - EVENT_HORIZON_RADIUS`; negative once the threshold is
    /// crossed.
    pub event_horizon_distance: f64,
    /// Set when the reading warrants an intervention alert.
    pub intervention_required: bool,
    pub captured_at: DateTime<Utc>,
}

impl SimulationSnapshot {
    /// Create a snapshot, checking the radius and drag bounds.
    pub fn new(
        habit_id: Uuid,
        radius: f64,
        velocity: f64,
        drag: f64,
    ) -> Result<Self, ValidationError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "radius",
                value: radius,
                min: 0.0,
                max: f64::MAX,
            });
        }
        validate_drag(drag)?;

        let event_horizon_distance = radius - EVENT_HORIZON_RADIUS;
        Ok(Self {
            id: Uuid::new_v4(),
            habit_id,
            radius,
            velocity,
            drag,
            event_horizon_distance,
            intervention_required: event_horizon_distance < 0.0,
            captured_at: Utc::now(),
        })
    }
}

/// Check that a drag coefficient lies in [0,1].
pub fn validate_drag(drag: f64) -> Result<(), ValidationError> {
    if drag.is_finite() && (0.0..=1.0).contains(&drag) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: "drag",
            value: drag,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Reference stability simulator stepping the damped radial model.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitIntegrator;

impl OrbitIntegrator {
    pub fn new() -> Self {
        Self
    }

    /// Derivatives of (radius, velocity) under the damped radial model.
    /// Neither depends on the radius itself.
    fn derivatives(velocity: f64, drag: f64) -> (f64, f64) {
        (velocity, -drag * velocity - BASE_PULL)
    }

    fn euler_step(radius: f64, velocity: f64, drag: f64, dt: f64) -> (f64, f64) {
        let (dr, dv) = Self::derivatives(velocity, drag);
        (radius + dr * dt, velocity + dv * dt)
    }

    fn rk4_step(radius: f64, velocity: f64, drag: f64, dt: f64) -> (f64, f64) {
        let (k1r, k1v) = Self::derivatives(velocity, drag);
        let (k2r, k2v) = Self::derivatives(velocity + k1v * dt / 2.0, drag);
        let (k3r, k3v) = Self::derivatives(velocity + k2v * dt / 2.0, drag);
        let (k4r, k4v) = Self::derivatives(velocity + k3v * dt, drag);

        (
            radius + dt / 6.0 * (k1r + 2.0 * k2r + 2.0 * k3r + k4r),
            velocity + dt / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v),
        )
    }
}

impl StabilitySimulator for OrbitIntegrator {
    fn step(&self, snapshot: &SimulationSnapshot, prefs: &SimulationPrefs) -> SimulationSnapshot {
        let dt = prefs.time_step_secs;
        let (radius, velocity) = match prefs.method {
            IntegrationMethod::Euler => {
                Self::euler_step(snapshot.radius, snapshot.velocity, snapshot.drag, dt)
            }
            IntegrationMethod::Rk4 => {
                Self::rk4_step(snapshot.radius, snapshot.velocity, snapshot.drag, dt)
            }
        };

        // Radius saturates at zero; the signed horizon distance carries the
        // collapse information.
        let radius = radius.max(0.0);
        let event_horizon_distance = radius - EVENT_HORIZON_RADIUS;

        SimulationSnapshot {
            id: Uuid::new_v4(),
            habit_id: snapshot.habit_id,
            radius,
            velocity,
            drag: snapshot.drag,
            event_horizon_distance,
            intervention_required: event_horizon_distance < 0.0,
            captured_at: Utc::now(),
        }
    }
}
