//! Enumerated domains shared by the entity schema.
//!
//! Each vocabulary here is fixed and closed: a value either belongs to the
//! enum or it does not, and the `from_code` constructors are the membership
//! tests. They return `None` for anything outside the vocabulary (including
//! correctly-typed but out-of-range numbers) and never panic.

use serde::{Deserialize, Serialize};

/// Coarse bucket of the day a habit may be scheduled into.
///
/// Windows are half-open `[start, end)` in minutes since midnight. `Any`
/// spans the whole schedulable day (06:00-24:00) and is a superset of every
/// other window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeWindow {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
    Any,
}

impl TimeWindow {
    /// All windows, narrowest buckets first.
    pub const ALL: [TimeWindow; 6] = [
        TimeWindow::EarlyMorning,
        TimeWindow::Morning,
        TimeWindow::Afternoon,
        TimeWindow::Evening,
        TimeWindow::Night,
        TimeWindow::Any,
    ];

    /// Window start in minutes since midnight.
    pub fn start_minute(&self) -> u16 {
        match self {
            TimeWindow::EarlyMorning => 6 * 60,
            TimeWindow::Morning => 9 * 60,
            TimeWindow::Afternoon => 12 * 60,
            TimeWindow::Evening => 17 * 60,
            TimeWindow::Night => 21 * 60,
            TimeWindow::Any => 6 * 60,
        }
    }

    /// Window end in minutes since midnight (exclusive).
    pub fn end_minute(&self) -> u16 {
        match self {
            TimeWindow::EarlyMorning => 9 * 60,
            TimeWindow::Morning => 12 * 60,
            TimeWindow::Afternoon => 17 * 60,
            TimeWindow::Evening => 21 * 60,
            TimeWindow::Night => 24 * 60,
            TimeWindow::Any => 24 * 60,
        }
    }

    /// Check whether a minute-of-day falls inside this window.
    pub fn contains(&self, minute: u16) -> bool {
        minute >= self.start_minute() && minute < self.end_minute()
    }

    /// Parse a window from its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "EARLY_MORNING" => Some(TimeWindow::EarlyMorning),
            "MORNING" => Some(TimeWindow::Morning),
            "AFTERNOON" => Some(TimeWindow::Afternoon),
            "EVENING" => Some(TimeWindow::Evening),
            "NIGHT" => Some(TimeWindow::Night),
            "ANY" => Some(TimeWindow::Any),
            _ => None,
        }
    }
}

/// Completion-quality rating for a check-in.
///
/// Ordered: `Fail < Hard < Good < Easy`. The same value doubles as the
/// spaced-repetition update grade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityRating {
    Fail,
    Hard,
    Good,
    Easy,
}

impl QualityRating {
    /// Numeric code as stored on the wire (FAIL=0 .. EASY=3).
    pub fn code(&self) -> i64 {
        match self {
            QualityRating::Fail => 0,
            QualityRating::Hard => 1,
            QualityRating::Good => 2,
            QualityRating::Easy => 3,
        }
    }

    /// Membership test over raw codes. Rejects anything outside 0..=3.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(QualityRating::Fail),
            1 => Some(QualityRating::Hard),
            2 => Some(QualityRating::Good),
            3 => Some(QualityRating::Easy),
            _ => None,
        }
    }

    /// A passing grade keeps the spaced-repetition streak alive.
    pub fn is_passing(&self) -> bool {
        *self >= QualityRating::Good
    }
}

/// Numerical-integration scheme for the stability simulator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrationMethod {
    Euler,
    Rk4,
}

impl Default for IntegrationMethod {
    fn default() -> Self {
        IntegrationMethod::Euler
    }
}

/// Delivery channel for intervention notifications. Multi-select.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationChannel {
    Email,
    Push,
    InApp,
}

/// Day of week, Sunday-based (SUNDAY=0 .. SATURDAY=6).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Numeric code (SUNDAY=0 .. SATURDAY=6).
    pub fn code(&self) -> u8 {
        match self {
            DayOfWeek::Sunday => 0,
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
        }
    }

    /// Membership test over raw codes. Rejects anything outside 0..=6.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(DayOfWeek::Sunday),
            1 => Some(DayOfWeek::Monday),
            2 => Some(DayOfWeek::Tuesday),
            3 => Some(DayOfWeek::Wednesday),
            4 => Some(DayOfWeek::Thursday),
            5 => Some(DayOfWeek::Friday),
            6 => Some(DayOfWeek::Saturday),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds() {
        assert_eq!(TimeWindow::EarlyMorning.start_minute(), 360);
        assert_eq!(TimeWindow::EarlyMorning.end_minute(), 540);
        assert_eq!(TimeWindow::Night.end_minute(), 1440);
        assert_eq!(TimeWindow::Any.start_minute(), 360);
        assert_eq!(TimeWindow::Any.end_minute(), 1440);
    }

    #[test]
    fn window_contains_is_half_open() {
        assert!(TimeWindow::Morning.contains(540));
        assert!(TimeWindow::Morning.contains(719));
        assert!(!TimeWindow::Morning.contains(720));
        assert!(!TimeWindow::Morning.contains(539));
    }

    #[test]
    fn any_covers_every_other_window() {
        for w in TimeWindow::ALL {
            assert!(TimeWindow::Any.start_minute() <= w.start_minute());
            assert!(TimeWindow::Any.end_minute() >= w.end_minute());
        }
    }

    #[test]
    fn quality_codes_round_trip() {
        for q in [
            QualityRating::Fail,
            QualityRating::Hard,
            QualityRating::Good,
            QualityRating::Easy,
        ] {
            assert_eq!(QualityRating::from_code(q.code()), Some(q));
        }
    }

    #[test]
    fn quality_rejects_out_of_range_codes() {
        assert_eq!(QualityRating::from_code(7), None);
        assert_eq!(QualityRating::from_code(-1), None);
        assert_eq!(QualityRating::from_code(4), None);
    }

    #[test]
    fn quality_is_ordered() {
        assert!(QualityRating::Fail < QualityRating::Hard);
        assert!(QualityRating::Hard < QualityRating::Good);
        assert!(QualityRating::Good < QualityRating::Easy);
        assert!(!QualityRating::Hard.is_passing());
        assert!(QualityRating::Good.is_passing());
    }

    #[test]
    fn day_of_week_rejects_out_of_range_codes() {
        assert_eq!(DayOfWeek::from_code(7), None);
        assert_eq!(DayOfWeek::from_code(-1), None);
        assert_eq!(DayOfWeek::from_code(6), Some(DayOfWeek::Saturday));
    }

    #[test]
    fn window_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&TimeWindow::EarlyMorning).unwrap();
        assert_eq!(json, "\"EARLY_MORNING\"");
        let parsed: TimeWindow = serde_json::from_str("\"ANY\"").unwrap();
        assert_eq!(parsed, TimeWindow::Any);
    }
}
