//! Easing functions for the show/hide slide.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking animations.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Available easing functions.
///
/// In configuration files easings are written in kebab-case
/// (`"ease-in-out"`, `"ease-out-cubic"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    #[default]
    EaseInOut,
    /// Cubic ease-in (more pronounced than quadratic).
    EaseInCubic,
    /// Cubic ease-out (more pronounced than quadratic).
    EaseOutCubic,
    /// Cubic ease-in-out (more pronounced than quadratic).
    EaseInOutCubic,
    /// Sinusoidal ease-in.
    EaseInSine,
    /// Sinusoidal ease-out.
    EaseOutSine,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to 0.0..=1.0 before the curve is evaluated.
///
/// # Example
///
/// ```
/// use navbar_view::widget::animation::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
///
/// // Ease-out: slower at end
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseInCubic => t * t * t,
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
        Easing::EaseInSine => 1.0 - ((t * PI) / 2.0).cos(),
        Easing::EaseOutSine => ((t * PI) / 2.0).sin(),
        Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
    ];

    #[test]
    fn test_every_curve_hits_endpoints() {
        for easing in ALL {
            assert!(ease(easing, 0.0).abs() < 0.001, "{easing:?} at 0");
            assert!((ease(easing, 1.0) - 1.0).abs() < 0.001, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
        assert!(ease(Easing::EaseIn, 0.5) < 0.5);
        assert!(ease(Easing::EaseOut, 0.5) > 0.5);
        assert!(ease(Easing::EaseInCubic, 0.5) < ease(Easing::EaseIn, 0.5));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Linear, 1.5), 1.0);
    }

    #[test]
    fn test_lerp_eased() {
        assert_eq!(lerp_eased(Easing::Linear, 0.0, 56.0, 0.5), 28.0);
        assert_eq!(lerp_eased(Easing::Linear, 1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_kebab_case_names() {
        #[derive(Deserialize)]
        struct Holder {
            easing: Easing,
        }

        let holder: Holder = toml::from_str(r#"easing = "ease-out-cubic""#).unwrap();
        assert_eq!(holder.easing, Easing::EaseOutCubic);
    }
}
