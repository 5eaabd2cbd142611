//! Navigation bar widget system.
//!
//! This module provides the pieces a bottom navigation bar is built from:
//!
//! - [`NavigationBarItem`] / [`NavigationItem`]: one selectable entry
//! - [`ItemRegistry`]: ordered items within count limits
//! - [`SelectionController`]: the single checked item and its listener
//! - [`VisibilityController`]: the animated shown/hidden state
//! - [`Behavior`]: scroll-linked auto-hide strategies
//! - [`BottomNavigationBar`](widgets::BottomNavigationBar): the widget composing them
//!
//! # Overview
//!
//! Hosts own a [`BottomNavigationBar`](widgets::BottomNavigationBar), forward
//! taps and scroll signals to it, and call `tick` from their frame loop. The
//! rendering collaborator reads a [`BarPresentation`] snapshot through
//! [`Renderable`].
//!
//! ```
//! use std::time::{Duration, Instant};
//! use navbar_view::prelude::*;
//!
//! let mut bar = BottomNavigationBar::new();
//! bar.add_item(NavigationItem::new(ItemId::new(0), "ic_home")).unwrap();
//! bar.add_item(NavigationItem::new(ItemId::new(1), "ic_inbox")).unwrap();
//! bar.on_item_tapped(ItemId::new(1)).unwrap();
//!
//! let start = Instant::now();
//! bar.hide_at(start, |vis| assert!(vis.is_hidden()));
//! bar.tick(start + Duration::from_secs(1));
//! assert_eq!(bar.presentation().visibility, VisibilityState::Hidden);
//! ```

pub mod animation;
mod behavior;
mod item;
mod registry;
mod selection;
mod traits;
mod visibility;
pub mod widgets;

pub use behavior::{Behavior, LayoutParams, LiftUpBehavior, LiftUpSettings, ScrollSignal};
pub use item::{
    ItemId, LabelMode, NavigationBarItem, NavigationItem, SharedItem, DEFAULT_UNCHECKED_COLOR,
};
pub use registry::{ItemLimits, ItemRegistry};
pub use selection::{CheckChange, SelectionController};
pub use traits::{
    BarPresentation, CheckListener, ItemPresentation, ItemWidthMode, NavigationBarView, Renderable,
};
pub use visibility::{VisibilityCallback, VisibilityController, VisibilityState};
