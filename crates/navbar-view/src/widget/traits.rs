//! Capability traits of a navigation bar.
//!
//! # Key Types
//!
//! - [`NavigationBarView`] - Commands a host issues to a bar
//! - [`Renderable`] - Snapshot consumed by the rendering collaborator
//! - [`BarPresentation`] / [`ItemPresentation`] - The snapshot itself
//!
//! # Related Types
//!
//! - [`super::widgets::BottomNavigationBar`] - The implementation of both traits

use super::behavior::Behavior;
use super::item::{ItemId, SharedItem};
use super::selection::CheckChange;
use super::visibility::{VisibilityCallback, VisibilityState};
use crate::error::Result;
use crate::types::{Color, Icon};

/// How item widths are distributed across the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemWidthMode {
    /// The checked item is wider than the others.
    #[default]
    Flexible,
    /// All items share the width equally.
    Fixed,
}

impl ItemWidthMode {
    /// The mode for a `fixed` flag.
    pub fn from_fixed(fixed: bool) -> Self {
        if fixed {
            ItemWidthMode::Fixed
        } else {
            ItemWidthMode::Flexible
        }
    }

    /// Whether this is [`ItemWidthMode::Fixed`].
    pub fn is_fixed(self) -> bool {
        self == ItemWidthMode::Fixed
    }
}

/// Listener for changes of the checked item.
pub type CheckListener = Box<dyn Fn(&CheckChange) + Send + Sync>;

/// What the renderer draws for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPresentation {
    /// Identifier of the item.
    pub id: ItemId,
    /// Whether this item is the checked one.
    pub checked: bool,
    /// Label to draw; `None` when the label mode hides it in this state.
    pub label: Option<String>,
    /// Icon tint for the current checked state.
    pub color: Color,
    /// Label color for the current checked state.
    pub text_color: Color,
    /// Icon resource to draw.
    pub icon: Icon,
    /// Badge text, if a badge is shown.
    pub badge: Option<String>,
}

impl ItemPresentation {
    /// Resolve an item's presentation for its checked state.
    pub fn of(item: &SharedItem, checked: bool) -> Self {
        Self {
            id: item.id(),
            checked,
            label: item.label(checked),
            color: item.color(checked),
            text_color: item.text_color(checked),
            icon: item.icon(),
            badge: item.badge_text(),
        }
    }
}

/// What the renderer draws for the whole bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPresentation {
    /// Items in display order.
    pub items: Vec<ItemPresentation>,
    /// How item widths are distributed.
    pub width_mode: ItemWidthMode,
    /// Current visibility state, including in-flight transitions.
    pub visibility: VisibilityState,
    /// Downward offset of the bar in pixels; 0.0 when fully shown.
    pub translation_y: f32,
}

impl BarPresentation {
    /// The checked item, if any.
    pub fn checked(&self) -> Option<&ItemPresentation> {
        self.items.iter().find(|item| item.checked)
    }
}

/// Produces a snapshot for the rendering collaborator.
pub trait Renderable {
    /// Snapshot of everything the renderer needs.
    fn presentation(&self) -> BarPresentation;
}

/// The host-facing command surface of a navigation bar.
///
/// Every fallible command either succeeds completely or returns an error and
/// leaves the bar unchanged.
pub trait NavigationBarView: Send + Sync {
    /// Number of items.
    fn len(&self) -> usize;

    /// Whether the bar holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an item, returning its index.
    fn add(&mut self, item: SharedItem) -> Result<usize>;

    /// Remove the item at `index`.
    fn remove_at(&mut self, index: usize) -> Result<SharedItem>;

    /// Bound the number of items to `min..=max` (`None` for no upper bound).
    fn set_item_limit(&mut self, min: usize, max: Option<usize>) -> Result<()>;

    /// Switch between fixed and flexible item widths.
    fn set_item_width_fixed(&mut self, fixed: bool);

    /// Whether item widths are fixed.
    fn is_item_width_fixed(&self) -> bool;

    /// Forward a tap on the item with `id`.
    ///
    /// Returns `Ok(true)` if the checked item changed.
    fn on_item_tapped(&mut self, id: ItemId) -> Result<bool>;

    /// The checked item's identifier.
    fn checked_id(&self) -> Option<ItemId>;

    /// Install the check-change listener, replacing any previous one.
    fn set_check_listener(&mut self, listener: CheckListener);

    /// Show the bar; `on_complete` runs once it is fully shown.
    fn show(&mut self, on_complete: VisibilityCallback);

    /// Hide the bar; `on_complete` runs once it is fully hidden.
    fn hide(&mut self, on_complete: VisibilityCallback);

    /// Install a scroll behavior, replacing any previous one.
    fn attach_behavior(&mut self, behavior: Box<dyn Behavior>);

    /// Remove the scroll behavior, returning it.
    fn detach_behavior(&mut self) -> Option<Box<dyn Behavior>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::item::{LabelMode, NavigationItem};

    #[test]
    fn test_width_mode_from_fixed() {
        assert_eq!(ItemWidthMode::from_fixed(true), ItemWidthMode::Fixed);
        assert!(!ItemWidthMode::from_fixed(false).is_fixed());
        assert_eq!(ItemWidthMode::default(), ItemWidthMode::Flexible);
    }

    #[test]
    fn test_item_presentation_follows_checked_state() {
        let item = NavigationItem::new(ItemId::new(3), "ic_star")
            .with_label("Starred")
            .with_label_mode(LabelMode::OnlyChecked)
            .with_badge("2")
            .into_shared();

        let checked = ItemPresentation::of(&item, true);
        assert_eq!(checked.label.as_deref(), Some("Starred"));
        assert_eq!(checked.badge.as_deref(), Some("2"));

        let unchecked = ItemPresentation::of(&item, false);
        assert_eq!(unchecked.label, None);
        assert_ne!(unchecked.color, checked.color);
    }
}
