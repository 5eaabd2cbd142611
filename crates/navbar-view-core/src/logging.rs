//! Logging facilities for navbar-view.
//!
//! navbar-view uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in the host application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("navbar_view=debug"))
//!         .init();
//! }
//! ```
//!
//! The constants in [`targets`] name every target the workspace logs under, so
//! filters can be written against them instead of string literals.

/// Span names used throughout navbar-view for tracing.
pub mod span_names {
    /// Animation frame processing span.
    pub const ANIMATION: &str = "navbar_view::animation";
    /// Scroll signal dispatch span.
    pub const SCROLL: &str = "navbar_view::scroll";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "navbar_view_core::signal";
    /// Performance spans target.
    pub const PERF: &str = "navbar_view::perf";
    /// Item registry target.
    pub const REGISTRY: &str = "navbar_view::registry";
    /// Selection controller target.
    pub const SELECTION: &str = "navbar_view::selection";
    /// Visibility controller target.
    pub const VISIBILITY: &str = "navbar_view::visibility";
    /// Scroll behavior target.
    pub const BEHAVIOR: &str = "navbar_view::behavior";
    /// Configuration loading target.
    pub const CONFIG: &str = "navbar_view::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as a full
/// animation frame.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::REGISTRY,
            targets::SELECTION,
            targets::VISIBILITY,
            targets::BEHAVIOR,
            targets::CONFIG,
        ] {
            assert!(target.starts_with("navbar_view::"), "{target}");
        }
        assert!(targets::SIGNAL.starts_with("navbar_view_core::"));
    }

    #[test]
    fn test_perf_span() {
        let _subscriber = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new(span_names::ANIMATION);
        tracing::debug!(target: targets::PERF, step = 1, "inside perf span");
    }
}
