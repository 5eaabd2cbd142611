//! Scroll-linked auto-hide behaviors.
//!
//! A [`Behavior`] is attached to the bar as a whole and receives the scroll
//! signals of the content the bar sits over. It decides when to request a
//! show or hide from the [`VisibilityController`] it is handed; it never owns
//! visibility state itself.
//!
//! [`LiftUpBehavior`] hides the bar while content scrolls up and brings it
//! back when content scrolls down.

use std::fmt;
use std::time::{Duration, Instant};

use navbar_view_core::logging::targets;

use super::visibility::{VisibilityController, VisibilityState};

/// A scroll event from the hosting container.
///
/// Positive values move content up, revealing what lies below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollSignal {
    /// Content scrolled by `delta_y` pixels.
    Scroll { delta_y: f32 },
    /// A fling started with `velocity_y` pixels per second.
    Fling { velocity_y: f32 },
    /// Scrolling stopped.
    Stop,
}

/// Strategy that turns scroll signals into visibility requests.
pub trait Behavior: Send + Sync + fmt::Debug {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Called when the behavior is installed on a bar.
    fn on_attached(&mut self, _visibility: &VisibilityController) {}

    /// Called when the behavior is removed from a bar.
    fn on_detached(&mut self) {}

    /// Handle a scroll signal. Returns `true` if a show or hide was requested.
    fn on_scroll(
        &mut self,
        signal: ScrollSignal,
        now: Instant,
        visibility: &mut VisibilityController,
    ) -> bool;
}

/// Tuning for [`LiftUpBehavior`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftUpSettings {
    /// Accumulated scroll distance in one direction that triggers a change.
    pub scroll_threshold: f32,
    /// Fling speed that triggers a change immediately.
    pub fling_velocity: f32,
    /// Minimum time between two triggered changes.
    pub debounce: Duration,
}

impl Default for LiftUpSettings {
    fn default() -> Self {
        Self {
            scroll_threshold: 8.0,
            fling_velocity: 1500.0,
            debounce: Duration::from_millis(150),
        }
    }
}

/// Hides the bar while content scrolls up, shows it while content scrolls down.
#[derive(Debug, Clone, Default)]
pub struct LiftUpBehavior {
    settings: LiftUpSettings,
    accumulated: f32,
    last_trigger: Option<Instant>,
}

impl LiftUpBehavior {
    /// Create a behavior with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a behavior with the given settings.
    pub fn with_settings(settings: LiftUpSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The active settings.
    pub fn settings(&self) -> &LiftUpSettings {
        &self.settings
    }

    /// Scroll distance accumulated towards the next change.
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    fn request(
        &mut self,
        target: VisibilityState,
        now: Instant,
        visibility: &mut VisibilityController,
    ) -> bool {
        if visibility.target_state() == target {
            self.accumulated = 0.0;
            return false;
        }
        if let Some(last) = self.last_trigger
            && now.saturating_duration_since(last) < self.settings.debounce
        {
            tracing::trace!(target: targets::BEHAVIOR, requested = ?target, "debounced");
            return false;
        }

        tracing::debug!(target: targets::BEHAVIOR, requested = ?target, "scroll triggered visibility change");
        self.accumulated = 0.0;
        self.last_trigger = Some(now);
        visibility.request(target, now, Box::new(|_: &VisibilityController| {}));
        true
    }
}

impl Behavior for LiftUpBehavior {
    fn name(&self) -> &'static str {
        "lift-up"
    }

    fn on_attached(&mut self, _visibility: &VisibilityController) {
        self.accumulated = 0.0;
        self.last_trigger = None;
    }

    fn on_detached(&mut self) {
        self.accumulated = 0.0;
    }

    fn on_scroll(
        &mut self,
        signal: ScrollSignal,
        now: Instant,
        visibility: &mut VisibilityController,
    ) -> bool {
        match signal {
            ScrollSignal::Stop => {
                self.accumulated = 0.0;
                false
            }
            ScrollSignal::Scroll { delta_y } if !delta_y.is_finite() => {
                tracing::trace!(target: targets::BEHAVIOR, delta_y, "ignored non-finite scroll delta");
                false
            }
            ScrollSignal::Fling { velocity_y } if !velocity_y.is_finite() => {
                tracing::trace!(target: targets::BEHAVIOR, velocity_y, "ignored non-finite fling velocity");
                false
            }
            ScrollSignal::Scroll { delta_y } => {
                // A direction change restarts accumulation.
                if delta_y * self.accumulated < 0.0 {
                    self.accumulated = 0.0;
                }
                self.accumulated += delta_y;

                if self.accumulated >= self.settings.scroll_threshold {
                    self.request(VisibilityState::Hidden, now, visibility)
                } else if self.accumulated <= -self.settings.scroll_threshold {
                    self.request(VisibilityState::Shown, now, visibility)
                } else {
                    false
                }
            }
            ScrollSignal::Fling { velocity_y } => {
                if velocity_y >= self.settings.fling_velocity {
                    self.request(VisibilityState::Hidden, now, visibility)
                } else if velocity_y <= -self.settings.fling_velocity {
                    self.request(VisibilityState::Shown, now, visibility)
                } else {
                    false
                }
            }
        }
    }
}

/// Layout parameters of the container hosting the bar.
///
/// Behaviors belong to the layout parameters in the hosting container, so
/// replacing the parameters drops the installed behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Height of the bar in pixels; the hide animation slides it by this much.
    pub height: f32,
    /// Extra space between the bar and the bottom edge.
    pub bottom_margin: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            height: 56.0,
            bottom_margin: 0.0,
        }
    }
}

impl LayoutParams {
    /// Create layout parameters for a bar of `height`.
    pub fn new(height: f32) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Set the bottom margin using builder pattern.
    pub fn with_bottom_margin(mut self, margin: f32) -> Self {
        self.bottom_margin = margin;
        self
    }

    /// Distance the bar must travel to be fully hidden.
    pub fn hide_distance(&self) -> f32 {
        self.height + self.bottom_margin
    }
}
