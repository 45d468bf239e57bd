//! User preferences and the preference resolver.
//!
//! Preferences come in five groups (scheduling, prediction, adaptive
//! frequency, simulation, notifications). Callers supply a
//! [`PartialPreferences`] with any subset of fields; [`resolve`] fills every
//! gap from the default table below, field by field, so supplying only
//! `scheduling.day_start_minute` keeps the other scheduling defaults.
//!
//! Out-of-range supplied values are a caller error and are reported, never
//! clamped. Resolution is total (the empty partial resolves) and idempotent
//! on complete inputs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{IntegrationMethod, NotificationChannel};
use crate::error::ValidationError;
use crate::habit::MAX_INTERVAL_DAYS;
use crate::prediction::validate_probability;

/// Default scheduling-day start, 06:00.
pub const DEFAULT_DAY_START_MINUTE: u16 = 360;
/// Default scheduling-day end, 23:00.
pub const DEFAULT_DAY_END_MINUTE: u16 = 1380;
/// Default slot granularity in minutes.
pub const DEFAULT_GRANULARITY_MINUTES: u16 = 15;
/// Granularities the slot grid supports.
pub const ALLOWED_GRANULARITIES: [u16; 5] = [5, 10, 15, 30, 60];

/// Default cold-start threshold in days of history.
pub const DEFAULT_COLD_START_THRESHOLD_DAYS: u16 = 7;
/// Default recent-history window in days.
pub const DEFAULT_RECENT_WINDOW_DAYS: u16 = 7;
/// Default failure-risk alerting threshold.
pub const DEFAULT_RISK_THRESHOLD: f64 = 0.8;

/// Default lower bound on the adaptive repeat interval.
pub const DEFAULT_MIN_INTERVAL_DAYS: u32 = 1;
/// Default upper bound on the adaptive repeat interval.
pub const DEFAULT_MAX_INTERVAL_DAYS: u32 = 90;

/// Default simulation time step in seconds.
pub const DEFAULT_TIME_STEP_SECS: f64 = 0.05;
/// Largest accepted simulation time step in seconds.
pub const MAX_TIME_STEP_SECS: f64 = 3600.0;

/// Default intervention-alert threshold.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 0.8;

/// Scheduling-window preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchedulingPrefs {
    /// First schedulable minute of the day.
    pub day_start_minute: u16,
    /// Last schedulable minute of the day (exclusive).
    pub day_end_minute: u16,
    /// Slot grid granularity in minutes.
    pub granularity_minutes: u16,
}

impl Default for SchedulingPrefs {
    fn default() -> Self {
        Self {
            day_start_minute: DEFAULT_DAY_START_MINUTE,
            day_end_minute: DEFAULT_DAY_END_MINUTE,
            granularity_minutes: DEFAULT_GRANULARITY_MINUTES,
        }
    }
}

/// Failure-predictor preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionPrefs {
    /// Days of history below which the predictor refuses to run.
    /// Independent of `recent_window_days` despite the shared default.
    pub cold_start_threshold_days: u16,
    /// Width of the recent-history window in days.
    pub recent_window_days: u16,
    /// Failure probability above which a habit counts as at-risk.
    pub risk_threshold: f64,
}

impl Default for PredictionPrefs {
    fn default() -> Self {
        Self {
            cold_start_threshold_days: DEFAULT_COLD_START_THRESHOLD_DAYS,
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
            risk_threshold: DEFAULT_RISK_THRESHOLD,
        }
    }
}

/// Adaptive-frequency (spaced repetition) preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdaptivePrefs {
    pub enabled: bool,
    /// Shortest repeat interval the controller may emit, in days.
    pub min_interval_days: u32,
    /// Longest repeat interval the controller may emit, in days.
    pub max_interval_days: u32,
}

impl Default for AdaptivePrefs {
    fn default() -> Self {
        Self {
            enabled: true,
            min_interval_days: DEFAULT_MIN_INTERVAL_DAYS,
            max_interval_days: DEFAULT_MAX_INTERVAL_DAYS,
        }
    }
}

/// Stability-simulation preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationPrefs {
    pub enabled: bool,
    pub method: IntegrationMethod,
    /// Integration step in seconds.
    pub time_step_secs: f64,
}

impl Default for SimulationPrefs {
    fn default() -> Self {
        Self {
            enabled: false,
            method: IntegrationMethod::Euler,
            time_step_secs: DEFAULT_TIME_STEP_SECS,
        }
    }
}

/// Notification preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationPrefs {
    /// Whether intervention alerts fire at all.
    pub intervention_alerts: bool,
    /// Failure probability at which an alert fires.
    pub alert_threshold: f64,
    /// Channels alerts are delivered on.
    pub channels: BTreeSet<NotificationChannel>,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            intervention_alerts: true,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            channels: BTreeSet::from([NotificationChannel::InApp]),
        }
    }
}

/// Fully resolved preferences: every field populated and in bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub scheduling: SchedulingPrefs,
    pub prediction: PredictionPrefs,
    pub adaptive: AdaptivePrefs,
    pub simulation: SimulationPrefs,
    pub notifications: NotificationPrefs,
    /// UI-only passthrough fields. Opaque to the core; kept as a typed side
    /// map so the schema above stays closed.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl Preferences {
    /// Re-check every bound on an already-resolved record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let s = &self.scheduling;
        if s.day_start_minute >= s.day_end_minute {
            return Err(ValidationError::InvalidTimeRange {
                field: "scheduling_day",
                start: s.day_start_minute as i64,
                end: s.day_end_minute as i64,
            });
        }
        if s.day_end_minute > 1440 {
            return Err(ValidationError::OutOfRange {
                field: "day_end_minute",
                value: s.day_end_minute as f64,
                min: 0.0,
                max: 1440.0,
            });
        }
        if !ALLOWED_GRANULARITIES.contains(&s.granularity_minutes) {
            return Err(ValidationError::OutOfRange {
                field: "granularity_minutes",
                value: s.granularity_minutes as f64,
                min: ALLOWED_GRANULARITIES[0] as f64,
                max: ALLOWED_GRANULARITIES[4] as f64,
            });
        }

        validate_probability(self.prediction.risk_threshold, "risk_threshold")?;
        validate_probability(self.notifications.alert_threshold, "alert_threshold")?;

        let a = &self.adaptive;
        if a.min_interval_days < 1 || a.min_interval_days > a.max_interval_days {
            return Err(ValidationError::OutOfRange {
                field: "min_interval_days",
                value: a.min_interval_days as f64,
                min: 1.0,
                max: a.max_interval_days as f64,
            });
        }
        if a.max_interval_days > MAX_INTERVAL_DAYS {
            return Err(ValidationError::OutOfRange {
                field: "max_interval_days",
                value: a.max_interval_days as f64,
                min: a.min_interval_days as f64,
                max: MAX_INTERVAL_DAYS as f64,
            });
        }

        let step = self.simulation.time_step_secs;
        if !step.is_finite() || step <= 0.0 || step > MAX_TIME_STEP_SECS {
            return Err(ValidationError::OutOfRange {
                field: "time_step_secs",
                value: step,
                min: f64::MIN_POSITIVE,
                max: MAX_TIME_STEP_SECS,
            });
        }

        Ok(())
    }
}

/// Partial scheduling preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialSchedulingPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_start_minute: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_end_minute: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity_minutes: Option<u16>,
}

/// Partial prediction preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartialPredictionPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cold_start_threshold_days: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_window_days: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_threshold: Option<f64>,
}

/// Partial adaptive preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialAdaptivePrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_interval_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_interval_days: Option<u32>,
}

/// Partial simulation preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartialSimulationPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<IntegrationMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_step_secs: Option<f64>,
}

/// Partial notification preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartialNotificationPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervention_alerts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<BTreeSet<NotificationChannel>>,
}

/// A partial preference object: any subset of the five groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartialPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling: Option<PartialSchedulingPrefs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PartialPredictionPrefs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive: Option<PartialAdaptivePrefs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation: Option<PartialSimulationPrefs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<PartialNotificationPrefs>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl PartialPreferences {
    /// Parse a partial preference object from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a partial preference object from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Project a complete record back to a fully-specified partial.
    pub fn from_resolved(prefs: &Preferences) -> Self {
        Self {
            scheduling: Some(PartialSchedulingPrefs {
                day_start_minute: Some(prefs.scheduling.day_start_minute),
                day_end_minute: Some(prefs.scheduling.day_end_minute),
                granularity_minutes: Some(prefs.scheduling.granularity_minutes),
            }),
            prediction: Some(PartialPredictionPrefs {
                cold_start_threshold_days: Some(prefs.prediction.cold_start_threshold_days),
                recent_window_days: Some(prefs.prediction.recent_window_days),
                risk_threshold: Some(prefs.prediction.risk_threshold),
            }),
            adaptive: Some(PartialAdaptivePrefs {
                enabled: Some(prefs.adaptive.enabled),
                min_interval_days: Some(prefs.adaptive.min_interval_days),
                max_interval_days: Some(prefs.adaptive.max_interval_days),
            }),
            simulation: Some(PartialSimulationPrefs {
                enabled: Some(prefs.simulation.enabled),
                method: Some(prefs.simulation.method),
                time_step_secs: Some(prefs.simulation.time_step_secs),
            }),
            notifications: Some(PartialNotificationPrefs {
                intervention_alerts: Some(prefs.notifications.intervention_alerts),
                alert_threshold: Some(prefs.notifications.alert_threshold),
                channels: Some(prefs.notifications.channels.clone()),
            }),
            extras: prefs.extras.clone(),
        }
    }
}

/// Resolve a partial preference object against the default table.
///
/// The merge is field-level: each present field overrides its default, each
/// absent field keeps it. The resolved record is then bound-checked as a
/// whole; a supplied out-of-range value surfaces as an error rather than
/// being clamped.
pub fn resolve(partial: &PartialPreferences) -> Result<Preferences, ValidationError> {
    let defaults = Preferences::default();

    let scheduling = match &partial.scheduling {
        Some(p) => SchedulingPrefs {
            day_start_minute: p.day_start_minute.unwrap_or(defaults.scheduling.day_start_minute),
            day_end_minute: p.day_end_minute.unwrap_or(defaults.scheduling.day_end_minute),
            granularity_minutes: p
                .granularity_minutes
                .unwrap_or(defaults.scheduling.granularity_minutes),
        },
        None => defaults.scheduling,
    };

    let prediction = match &partial.prediction {
        Some(p) => PredictionPrefs {
            cold_start_threshold_days: p
                .cold_start_threshold_days
                .unwrap_or(defaults.prediction.cold_start_threshold_days),
            recent_window_days: p
                .recent_window_days
                .unwrap_or(defaults.prediction.recent_window_days),
            risk_threshold: p.risk_threshold.unwrap_or(defaults.prediction.risk_threshold),
        },
        None => defaults.prediction,
    };

    let adaptive = match &partial.adaptive {
        Some(p) => AdaptivePrefs {
            enabled: p.enabled.unwrap_or(defaults.adaptive.enabled),
            min_interval_days: p
                .min_interval_days
                .unwrap_or(defaults.adaptive.min_interval_days),
            max_interval_days: p
                .max_interval_days
                .unwrap_or(defaults.adaptive.max_interval_days),
        },
        None => defaults.adaptive,
    };

    let simulation = match &partial.simulation {
        Some(p) => SimulationPrefs {
            enabled: p.enabled.unwrap_or(defaults.simulation.enabled),
            method: p.method.unwrap_or(defaults.simulation.method),
            time_step_secs: p.time_step_secs.unwrap_or(defaults.simulation.time_step_secs),
        },
        None => defaults.simulation,
    };

    let notifications = match &partial.notifications {
        Some(p) => NotificationPrefs {
            intervention_alerts: p
                .intervention_alerts
                .unwrap_or(defaults.notifications.intervention_alerts),
            alert_threshold: p
                .alert_threshold
                .unwrap_or(defaults.notifications.alert_threshold),
            channels: p
                .channels
                .clone()
                .unwrap_or(defaults.notifications.channels),
        },
        None => defaults.notifications,
    };

    let resolved = Preferences {
        scheduling,
        prediction,
        adaptive,
        simulation,
        notifications,
        extras: partial.extras.clone(),
    };
    resolved.validate()?;
    Ok(resolved)
}
