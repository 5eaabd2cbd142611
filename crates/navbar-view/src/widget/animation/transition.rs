//! Time-driven transition of a single scalar.
//!
//! The visibility controller animates the bar's hidden fraction
//! (0.0 = fully shown, 1.0 = fully hidden) with a [`Transition`]. The caller
//! supplies every timestamp, which keeps the animation deterministic under
//! test and lets hosts drive it from their own frame clock.

use std::time::{Duration, Instant};

use super::easing::{ease, lerp_eased, Easing};

/// Default duration for a full-distance transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

/// Current state of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    /// No transition in progress.
    #[default]
    Idle,
    /// Transition is running.
    Running {
        /// Eased progress from 0.0 to 1.0.
        progress: f32,
        /// Current interpolated value.
        value: f32,
    },
    /// The transition reached its target during this update.
    Finished {
        /// The target value.
        value: f32,
    },
}

impl TransitionState {
    /// Check if a transition is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TransitionState::Running { .. })
    }
}

/// A transition animation controller for one scalar value.
///
/// The configured duration applies to a full-distance run (0.0 to 1.0).
/// Shorter runs, such as reversing halfway through, take proportionally less
/// time so the value moves at a consistent speed.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Easing function for the transition.
    easing: Easing,
    /// Duration of a full-distance run.
    duration: Duration,
    /// Duration of the current run.
    run_duration: Duration,
    /// When the current run started (if running).
    start_time: Option<Instant>,
    /// Value at the start of the current run.
    from: f32,
    /// Value at the end of the current run.
    to: f32,
}

impl Transition {
    /// Create a new transition with default settings.
    pub fn new() -> Self {
        Self {
            easing: Easing::EaseInOut,
            duration: DEFAULT_DURATION,
            run_duration: Duration::ZERO,
            start_time: None,
            from: 0.0,
            to: 0.0,
        }
    }

    /// Create a transition with a specific full-distance duration.
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::new()
        }
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing function. Applies from the next run.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Get the full-distance duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Set the full-distance duration. Applies from the next run.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Check if a transition is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    /// Start a run from `from` to `to` at `now`.
    ///
    /// Returns `false` if no run is needed because the values already match.
    /// Starting while running replaces the current run.
    pub fn start(&mut self, from: f32, to: f32, now: Instant) -> bool {
        if (from - to).abs() <= f32::EPSILON {
            self.stop();
            return false;
        }

        self.from = from;
        self.to = to;
        let distance = (to - from).abs();
        self.run_duration = if distance >= 1.0 {
            self.duration
        } else {
            self.duration.mul_f64(f64::from(distance))
        };
        self.start_time = Some(now);
        true
    }

    /// Stop the current run immediately, leaving the value where it is.
    pub fn stop(&mut self) {
        self.start_time = None;
    }

    /// Interpolated value at `now`, or the last target when idle.
    pub fn value_at(&self, now: Instant) -> f32 {
        match self.start_time {
            Some(start) => {
                lerp_eased(self.easing, self.from, self.to, self.raw_progress(start, now))
            }
            None => self.to,
        }
    }

    /// Advance the transition to `now` and report its state.
    ///
    /// Returns [`TransitionState::Finished`] exactly once, on the update that
    /// reaches the target.
    pub fn update(&mut self, now: Instant) -> TransitionState {
        let Some(start) = self.start_time else {
            return TransitionState::Idle;
        };

        let raw = self.raw_progress(start, now);
        if raw >= 1.0 {
            self.start_time = None;
            return TransitionState::Finished { value: self.to };
        }

        let progress = ease(self.easing, raw);
        TransitionState::Running {
            progress,
            value: self.from + (self.to - self.from) * progress,
        }
    }

    fn raw_progress(&self, start: Instant, now: Instant) -> f32 {
        if self.run_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / self.run_duration.as_secs_f32()).min(1.0)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration_ms: u64) -> Transition {
        let mut t = Transition::with_duration(Duration::from_millis(duration_ms));
        t.set_easing(Easing::Linear);
        t
    }

    #[test]
    fn test_transition_creation() {
        let t = Transition::new();
        assert_eq!(t.duration(), DEFAULT_DURATION);
        assert!(!t.is_running());
        assert_eq!(t.easing(), Easing::EaseInOut);
    }

    #[test]
    fn test_start_same_value_is_noop() {
        let mut t = Transition::new();
        assert!(!t.start(1.0, 1.0, Instant::now()));
        assert!(!t.is_running());
    }

    #[test]
    fn test_progress_and_finish() {
        let mut t = linear(200);
        let start = Instant::now();
        assert!(t.start(0.0, 1.0, start));
        assert!(t.is_running());

        match t.update(start + Duration::from_millis(100)) {
            TransitionState::Running { progress, value } => {
                assert!((progress - 0.5).abs() < 0.01);
                assert!((value - 0.5).abs() < 0.01);
            }
            other => panic!("expected running, got {other:?}"),
        }

        assert_eq!(
            t.update(start + Duration::from_millis(200)),
            TransitionState::Finished { value: 1.0 }
        );
        assert_eq!(t.update(start + Duration::from_millis(300)), TransitionState::Idle);
    }

    #[test]
    fn test_partial_run_is_shorter() {
        let mut t = linear(200);
        let start = Instant::now();
        // Half the distance takes half the time.
        t.start(0.5, 0.0, start);
        assert!(t.update(start + Duration::from_millis(50)).is_running());
        assert_eq!(
            t.update(start + Duration::from_millis(101)),
            TransitionState::Finished { value: 0.0 }
        );
    }

    #[test]
    fn test_zero_duration_finishes_on_first_update() {
        let mut t = linear(0);
        let start = Instant::now();
        assert!(t.start(0.0, 1.0, start));
        assert!(t.is_running());
        assert_eq!(t.update(start), TransitionState::Finished { value: 1.0 });
    }

    #[test]
    fn test_value_at_tracks_run() {
        let mut t = linear(100);
        let start = Instant::now();
        t.start(1.0, 0.0, start);
        assert!((t.value_at(start) - 1.0).abs() < 0.001);
        assert!((t.value_at(start + Duration::from_millis(25)) - 0.75).abs() < 0.01);

        t.stop();
        assert_eq!(t.value_at(start), 0.0);
    }

    #[test]
    fn test_transition_state_helpers() {
        let state = TransitionState::Running {
            progress: 0.5,
            value: 0.5,
        };
        assert!(state.is_running());
        assert!(!TransitionState::Idle.is_running());
        assert!(!TransitionState::Finished { value: 1.0 }.is_running());
    }
}
