//! Animated shown/hidden state of the bar.
//!
//! [`VisibilityController`] animates the bar's hidden fraction between 0.0
//! (fully shown) and 1.0 (fully hidden). Hosts advance it by calling
//! [`tick`](VisibilityController::tick) from their frame loop; completion
//! callbacks of animated transitions run from there.
//!
//! A new request always wins over the one in flight. A request in the same
//! direction keeps the running animation and replaces its callback; a request
//! in the opposite direction reverses from the current offset. Superseded
//! callbacks are dropped without being invoked.

use std::fmt;
use std::time::{Duration, Instant};

use navbar_view_core::logging::targets;
use navbar_view_core::Signal;

use super::animation::{Easing, Transition, TransitionState};

/// Visibility state of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibilityState {
    /// Fully shown.
    #[default]
    Shown,
    /// Fully hidden.
    Hidden,
    /// Animating towards shown.
    Showing,
    /// Animating towards hidden.
    Hiding,
}

impl VisibilityState {
    /// Whether a transition is in flight.
    pub fn is_transient(self) -> bool {
        matches!(self, VisibilityState::Showing | VisibilityState::Hiding)
    }

    /// The state this one settles in.
    pub fn settled(self) -> Self {
        match self {
            VisibilityState::Shown | VisibilityState::Showing => VisibilityState::Shown,
            VisibilityState::Hidden | VisibilityState::Hiding => VisibilityState::Hidden,
        }
    }
}

/// Callback run once a show or hide request has completed.
pub type VisibilityCallback = Box<dyn FnOnce(&VisibilityController) + Send + Sync>;

/// Drives the show/hide animation of the bar.
pub struct VisibilityController {
    state: VisibilityState,
    hidden_fraction: f32,
    transition: Transition,
    pending: Option<VisibilityCallback>,

    /// Emitted whenever the state changes.
    pub visibility_changed: Signal<VisibilityState>,
}

impl VisibilityController {
    /// Create a controller in the shown state.
    pub fn new() -> Self {
        Self {
            state: VisibilityState::Shown,
            hidden_fraction: 0.0,
            transition: Transition::new(),
            pending: None,
            visibility_changed: Signal::new(),
        }
    }

    /// Set the full-distance animation duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.transition.set_duration(duration);
        self
    }

    /// Set the easing curve using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.transition.set_easing(easing);
        self
    }

    // =========================================================================
    // Animation Settings
    // =========================================================================

    /// Duration of a full show or hide.
    pub fn duration(&self) -> Duration {
        self.transition.duration()
    }

    /// Set the duration of a full show or hide. Applies from the next request.
    pub fn set_duration(&mut self, duration: Duration) {
        self.transition.set_duration(duration);
    }

    /// The easing curve.
    pub fn easing(&self) -> Easing {
        self.transition.easing()
    }

    /// Set the easing curve. Applies from the next request.
    pub fn set_easing(&mut self, easing: Easing) {
        self.transition.set_easing(easing);
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Current state.
    #[inline]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Whether the bar is fully shown.
    pub fn is_shown(&self) -> bool {
        self.state == VisibilityState::Shown
    }

    /// Whether the bar is fully hidden.
    pub fn is_hidden(&self) -> bool {
        self.state == VisibilityState::Hidden
    }

    /// Whether an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.state.is_transient()
    }

    /// The state the bar is at or heading to.
    pub fn target_state(&self) -> VisibilityState {
        self.state.settled()
    }

    /// Hidden fraction as of the last update, from 0.0 (shown) to 1.0 (hidden).
    pub fn hidden_fraction(&self) -> f32 {
        self.hidden_fraction
    }

    /// Vertical offset for a bar of `height`, pushing it below the edge.
    pub fn translation(&self, height: f32) -> f32 {
        self.hidden_fraction * height
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Show the bar, animating from the current offset.
    pub fn show<F>(&mut self, on_complete: F)
    where
        F: FnOnce(&VisibilityController) + Send + Sync + 'static,
    {
        self.show_at(Instant::now(), on_complete);
    }

    /// Hide the bar, animating from the current offset.
    pub fn hide<F>(&mut self, on_complete: F)
    where
        F: FnOnce(&VisibilityController) + Send + Sync + 'static,
    {
        self.hide_at(Instant::now(), on_complete);
    }

    /// Show the bar, with the request issued at `now`.
    pub fn show_at<F>(&mut self, now: Instant, on_complete: F)
    where
        F: FnOnce(&VisibilityController) + Send + Sync + 'static,
    {
        self.request(VisibilityState::Shown, now, Box::new(on_complete));
    }

    /// Hide the bar, with the request issued at `now`.
    pub fn hide_at<F>(&mut self, now: Instant, on_complete: F)
    where
        F: FnOnce(&VisibilityController) + Send + Sync + 'static,
    {
        self.request(VisibilityState::Hidden, now, Box::new(on_complete));
    }

    /// Request a settled state with a boxed callback.
    pub fn request(&mut self, target: VisibilityState, now: Instant, on_complete: VisibilityCallback) {
        let target = target.settled();
        // A run that has already elapsed settles and reports before this request.
        self.tick(now);

        if self.state == target {
            tracing::trace!(target: targets::VISIBILITY, state = ?target, "already settled");
            on_complete(&*self);
            return;
        }

        if self.target_state() == target {
            if self.pending.replace(on_complete).is_some() {
                tracing::debug!(target: targets::VISIBILITY, requested = ?target, "superseded pending callback");
            }
            return;
        }

        // Opposite direction, or a settled state on the other side.
        if self.transition.is_running() {
            self.hidden_fraction = self.transition.value_at(now);
        }
        if self.pending.take().is_some() {
            tracing::debug!(target: targets::VISIBILITY, requested = ?target, "reversed, dropping pending callback");
        }

        let to = match target {
            VisibilityState::Hidden => 1.0,
            _ => 0.0,
        };
        if self.transition.start(self.hidden_fraction, to, now) {
            self.pending = Some(on_complete);
            let moving = match target {
                VisibilityState::Hidden => VisibilityState::Hiding,
                _ => VisibilityState::Showing,
            };
            tracing::debug!(
                target: targets::VISIBILITY,
                from = self.hidden_fraction,
                to,
                duration_ms = self.transition.duration().as_millis() as u64,
                "transition started"
            );
            self.set_state(moving);
        } else {
            // Already at the target offset.
            self.hidden_fraction = to;
            self.set_state(target);
            on_complete(&*self);
        }
    }

    /// Advance the animation to `now`.
    ///
    /// Returns `true` if a transition completed during this call, in which
    /// case its callback has run.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.transition.update(now) {
            TransitionState::Idle => false,
            TransitionState::Running { value, .. } => {
                self.hidden_fraction = value;
                false
            }
            TransitionState::Finished { value } => {
                self.hidden_fraction = value;
                self.set_state(self.state.settled());
                tracing::debug!(target: targets::VISIBILITY, state = ?self.state, "transition finished");
                if let Some(on_complete) = self.pending.take() {
                    on_complete(&*self);
                }
                true
            }
        }
    }

    fn set_state(&mut self, state: VisibilityState) {
        if self.state != state {
            self.state = state;
            self.visibility_changed.emit(state);
        }
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VisibilityController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityController")
            .field("state", &self.state)
            .field("hidden_fraction", &self.hidden_fraction)
            .field("transition", &self.transition)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(VisibilityController: Send, Sync);
