//! Animation support for the navigation bar.
//!
//! This module provides easing functions and the scalar [`Transition`] used to
//! slide the bar in and out.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use navbar_view::widget::animation::{Easing, Transition, TransitionState};
//!
//! let mut slide = Transition::with_duration(Duration::from_millis(200));
//! slide.set_easing(Easing::EaseOutCubic);
//!
//! let start = Instant::now();
//! slide.start(0.0, 1.0, start);
//! assert!(slide.update(start + Duration::from_millis(50)).is_running());
//! assert_eq!(
//!     slide.update(start + Duration::from_millis(200)),
//!     TransitionState::Finished { value: 1.0 }
//! );
//! ```

mod easing;
mod transition;

pub use easing::{ease, lerp_eased, Easing};
pub use transition::{Transition, TransitionState, DEFAULT_DURATION};
