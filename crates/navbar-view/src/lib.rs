//! navbar-view - the state core of a bottom navigation bar.
//!
//! A bottom navigation bar is a horizontal strip of selectable items attached
//! to the bottom edge of a screen. This crate owns everything about it except
//! drawing: the items, the single checked item, item count limits, fixed or
//! flexible item widths, badges, and a show/hide animation that can follow the
//! scrolling of the content underneath.
//!
//! Rendering, gestures and the surrounding layout pass are left to the host,
//! which forwards taps and scroll signals, advances the animation clock with
//! `tick`, and draws from [`Renderable::presentation`](widget::Renderable).
//!
//! # Example
//!
//! ```
//! use navbar_view::prelude::*;
//!
//! let mut bar = BottomNavigationBar::new();
//! bar.set_item_limit(0, Some(5)).unwrap();
//!
//! bar.add_item(NavigationItem::new(ItemId::new(0), "ic_home").with_label("Home"))
//!     .unwrap();
//! bar.add_item(NavigationItem::new(ItemId::new(1), "ic_inbox").with_label("Inbox"))
//!     .unwrap();
//!
//! bar.check_changed.connect(|change| {
//!     println!("checked {:?} -> {:?}", change.old, change.new);
//! });
//!
//! assert!(bar.on_item_tapped(ItemId::new(1)).unwrap());
//! assert!(!bar.on_item_tapped(ItemId::new(1)).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
pub mod widget;

pub use navbar_view_core::*;

pub use config::NavigationBarConfig;
pub use error::{ConfigError, NavBarError, Result};
pub use widget::widgets::BottomNavigationBar;
