//! Prelude module for navbar-view.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use navbar_view::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `ListenerSlot`, `Property`)
//! - The bar and its capability traits (`BottomNavigationBar`, `NavigationBarView`, `Renderable`)
//! - Items (`NavigationItem`, `NavigationBarItem`, `ItemId`)
//! - Visibility and behaviors (`VisibilityState`, `LiftUpBehavior`, `ScrollSignal`)
//! - Value types and errors (`Color`, `Icon`, `NavBarError`)

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use navbar_view_core::{ConnectionId, ListenerSlot, Property, Signal};

// ============================================================================
// Navigation Bar
// ============================================================================

pub use crate::widget::widgets::BottomNavigationBar;
pub use crate::widget::{
    BarPresentation, CheckChange, ItemPresentation, ItemWidthMode, NavigationBarView, Renderable,
};

// ============================================================================
// Items
// ============================================================================

pub use crate::widget::{ItemId, LabelMode, NavigationBarItem, NavigationItem, SharedItem};

// ============================================================================
// Visibility & Behaviors
// ============================================================================

pub use crate::widget::animation::Easing;
pub use crate::widget::{
    Behavior, LayoutParams, LiftUpBehavior, ScrollSignal, VisibilityController, VisibilityState,
};

// ============================================================================
// Value Types, Configuration & Errors
// ============================================================================

pub use crate::config::NavigationBarConfig;
pub use crate::error::{ConfigError, NavBarError};
pub use crate::types::{Color, Icon};
