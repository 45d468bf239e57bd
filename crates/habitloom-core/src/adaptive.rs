//! SM-2 adaptive-frequency controller.
//!
//! Reference implementation of [`AdaptiveController`]: the classic SM-2
//! update over the (easiness, interval, repetitions) triple, with the
//! interval clamped to the user's configured bounds and the easiness factor
//! clamped to [1.3, 3.0].

use crate::domain::QualityRating;
use crate::engines::AdaptiveController;
use crate::habit::{SpacedRepState, MAX_EASINESS, MAX_INTERVAL_DAYS, MIN_EASINESS};
use crate::preferences::AdaptivePrefs;

/// SM-2 spaced-repetition controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sm2Controller;

impl Sm2Controller {
    pub fn new() -> Self {
        Self
    }

    /// SM-2 easiness update: EF' = EF + (0.1 - (3-q)*(0.08 + (3-q)*0.02)).
    ///
    /// The grade is on the 0-3 scale used by check-ins, so `3 - q` plays
    /// the role of SM-2's `5 - q` on its 0-5 scale.
    fn adjust_easiness(easiness: f64, grade: QualityRating) -> f64 {
        let q = grade.code() as f64;
        let delta = 0.1 - (3.0 - q) * (0.08 + (3.0 - q) * 0.02);
        (easiness + delta).clamp(MIN_EASINESS, MAX_EASINESS)
    }
}

impl AdaptiveController for Sm2Controller {
    fn review(
        &self,
        state: &SpacedRepState,
        grade: QualityRating,
        prefs: &AdaptivePrefs,
    ) -> SpacedRepState {
        let easiness_factor = Self::adjust_easiness(state.easiness_factor, grade);
        let min_interval = prefs.min_interval_days.max(1);
        let max_interval = prefs.max_interval_days.min(MAX_INTERVAL_DAYS).max(min_interval);

        if grade.is_passing() {
            let interval = match state.repetitions {
                0 => min_interval,
                1 => (min_interval * 6).min(max_interval),
                _ => {
                    let grown = (state.interval_days as f64 * easiness_factor).round() as u32;
                    grown.clamp(min_interval, max_interval)
                }
            };
            SpacedRepState {
                easiness_factor,
                interval_days: interval,
                repetitions: state.repetitions + 1,
                streak: state.streak + 1,
            }
        } else {
            SpacedRepState {
                easiness_factor,
                interval_days: min_interval,
                repetitions: 0,
                streak: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> AdaptivePrefs {
        AdaptivePrefs::default()
    }

    #[test]
    fn passing_grade_increments_repetitions_and_streak() {
        let controller = Sm2Controller::new();
        let state = SpacedRepState {
            easiness_factor: 2.5,
            interval_days: 10,
            repetitions: 3,
            streak: 5,
        };
        let next = controller.review(&state, QualityRating::Good, &prefs());
        assert_eq!(next.repetitions, 4);
        assert_eq!(next.streak, 6);
        assert!(next.interval_days > state.interval_days);
        assert!(next.in_bounds());
    }

    #[test]
    fn interval_grows_by_easiness_factor() {
        let controller = Sm2Controller::new();
        let state = SpacedRepState {
            easiness_factor: 2.0,
            interval_days: 10,
            repetitions: 2,
            streak: 2,
        };
        let next = controller.review(&state, QualityRating::Good, &prefs());
        // GOOD leaves easiness unchanged (delta is zero); the grown
        // interval is the old interval times the updated easiness.
        let expected = (10.0 * next.easiness_factor).round() as u32;
        assert_eq!(next.interval_days, expected);
    }

    #[test]
    fn early_repetitions_use_staged_intervals() {
        let controller = Sm2Controller::new();
        let mut p = prefs();
        p.min_interval_days = 3;

        let fresh = SpacedRepState {
            easiness_factor: 2.5,
            interval_days: 40,
            repetitions: 0,
            streak: 0,
        };
        let first = controller.review(&fresh, QualityRating::Good, &p);
        assert_eq!(first.interval_days, 3);

        let second = controller.review(&first, QualityRating::Good, &p);
        assert_eq!(second.interval_days, 18);

        // From the third pass on, growth is multiplicative.
        let third = controller.review(&second, QualityRating::Good, &p);
        assert_eq!(
            third.interval_days,
            (18.0 * third.easiness_factor).round() as u32
        );
    }

    #[test]
    fn failing_grade_resets_to_configured_minimum() {
        let controller = Sm2Controller::new();
        let state = SpacedRepState {
            easiness_factor: 2.5,
            interval_days: 42,
            repetitions: 7,
            streak: 12,
        };
        let mut p = prefs();
        p.min_interval_days = 2;
        let next = controller.review(&state, QualityRating::Fail, &p);
        assert_eq!(next.repetitions, 0);
        assert_eq!(next.streak, 0);
        assert_eq!(next.interval_days, 2);
        assert!(next.easiness_factor < state.easiness_factor);
        assert!(next.in_bounds());
    }

    #[test]
    fn hard_grade_also_resets() {
        let controller = Sm2Controller::new();
        let state = SpacedRepState {
            easiness_factor: 1.35,
            interval_days: 8,
            repetitions: 2,
            streak: 2,
        };
        let next = controller.review(&state, QualityRating::Hard, &prefs());
        assert_eq!(next.repetitions, 0);
        assert_eq!(next.interval_days, prefs().min_interval_days);
        // Easiness never drops below the floor.
        assert!(next.easiness_factor >= MIN_EASINESS);
    }

    #[test]
    fn easy_grade_raises_easiness_up_to_the_ceiling() {
        let controller = Sm2Controller::new();
        let mut state = SpacedRepState {
            easiness_factor: 2.95,
            interval_days: 30,
            repetitions: 4,
            streak: 4,
        };
        state = controller.review(&state, QualityRating::Easy, &prefs());
        assert!(state.easiness_factor <= MAX_EASINESS);
        state = controller.review(&state, QualityRating::Easy, &prefs());
        assert_eq!(state.easiness_factor, MAX_EASINESS);
    }

    #[test]
    fn interval_respects_configured_maximum() {
        let controller = Sm2Controller::new();
        let state = SpacedRepState {
            easiness_factor: 3.0,
            interval_days: 80,
            repetitions: 6,
            streak: 6,
        };
        let next = controller.review(&state, QualityRating::Easy, &prefs());
        assert_eq!(next.interval_days, prefs().max_interval_days);
    }
}
