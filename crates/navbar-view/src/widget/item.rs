//! Navigation items.
//!
//! The bar only needs what [`NavigationBarItem`] describes: a stable identifier
//! and presentation values derived from the item's checked state. Hosts that
//! want full control implement the trait themselves; [`NavigationItem`] covers
//! the common case with a builder.
//!
//! # Example
//!
//! ```
//! use navbar_view::types::Color;
//! use navbar_view::widget::{ItemId, LabelMode, NavigationBarItem, NavigationItem};
//!
//! let item = NavigationItem::new(ItemId::new(0), "ic_home")
//!     .with_label("Home")
//!     .with_label_mode(LabelMode::OnlyChecked)
//!     .with_color(Color::from_rgb8(0x3F, 0x51, 0xB5))
//!     .with_badge("1");
//!
//! assert_eq!(item.label(true).as_deref(), Some("Home"));
//! assert_eq!(item.label(false), None);
//! assert_eq!(item.badge_text().as_deref(), Some("1"));
//! ```

use std::fmt;
use std::sync::Arc;

use navbar_view_core::logging::targets;
use navbar_view_core::{Property, Signal};
use serde::{Deserialize, Serialize};

use crate::types::{Color, Icon};

/// Stable identifier of an item within a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Create an identifier from its raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// When an item shows its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelMode {
    /// Label is always shown.
    #[default]
    Always,
    /// Label is shown only while the item is checked.
    OnlyChecked,
    /// Label is never shown.
    Never,
}

impl LabelMode {
    /// Whether a label is visible in the given checked state.
    pub fn is_visible(self, is_checked: bool) -> bool {
        match self {
            LabelMode::Always => true,
            LabelMode::OnlyChecked => is_checked,
            LabelMode::Never => false,
        }
    }
}

/// What the navigation bar needs from an item.
///
/// Presentation methods are pure functions of the checked state. Badge text
/// is the only mutable value and is updated through a shared reference, so
/// listeners can clear a badge while the bar is borrowed.
pub trait NavigationBarItem: Send + Sync {
    /// The item's identifier. Must not change for the item's lifetime.
    fn id(&self) -> ItemId;

    /// Label text for the given checked state, or `None` to hide the label.
    fn label(&self, is_checked: bool) -> Option<String>;

    /// Icon tint for the given checked state.
    fn color(&self, is_checked: bool) -> Color;

    /// Label tint for the given checked state.
    fn text_color(&self, is_checked: bool) -> Color {
        self.color(is_checked)
    }

    /// The icon resource.
    fn icon(&self) -> Icon;

    /// Current badge text, if any.
    fn badge_text(&self) -> Option<String>;

    /// Replace the badge text. `None` removes the badge.
    fn set_badge_text(&self, text: Option<String>);
}

/// A shared handle to an item, as stored by the registry.
pub type SharedItem = Arc<dyn NavigationBarItem>;

/// Default tint of an unchecked item (black at 54% opacity).
pub const DEFAULT_UNCHECKED_COLOR: Color = Color::from_rgba8(0, 0, 0, 0x8A);

/// The standard item implementation.
pub struct NavigationItem {
    id: ItemId,
    icon: Icon,
    label: Option<String>,
    label_mode: LabelMode,
    checked_color: Color,
    unchecked_color: Color,
    text_colors: Option<(Color, Color)>,
    badge: Property<Option<String>>,

    /// Emitted when the badge text changes, with the new text.
    pub badge_changed: Signal<Option<String>>,
}

impl NavigationItem {
    /// Create an item with an icon and no label.
    pub fn new(id: ItemId, icon: impl Into<Icon>) -> Self {
        Self {
            id,
            icon: icon.into(),
            label: None,
            label_mode: LabelMode::default(),
            checked_color: Color::BLACK,
            unchecked_color: DEFAULT_UNCHECKED_COLOR,
            text_colors: None,
            badge: Property::new(None),
            badge_changed: Signal::new(),
        }
    }

    /// Set the label text using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the label mode using builder pattern.
    pub fn with_label_mode(mut self, mode: LabelMode) -> Self {
        self.label_mode = mode;
        self
    }

    /// Set the checked tint using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.checked_color = color;
        self
    }

    /// Set the unchecked tint using builder pattern.
    pub fn with_unchecked_color(mut self, color: Color) -> Self {
        self.unchecked_color = color;
        self
    }

    /// Use separate label tints instead of the icon tints.
    pub fn with_text_colors(mut self, checked: Color, unchecked: Color) -> Self {
        self.text_colors = Some((checked, unchecked));
        self
    }

    /// Set the initial badge text using builder pattern.
    pub fn with_badge(self, text: impl Into<String>) -> Self {
        self.badge.set_silent(Some(text.into()));
        self
    }

    /// The configured label mode.
    pub fn label_mode(&self) -> LabelMode {
        self.label_mode
    }

    /// Wrap the item in a shared handle for the registry.
    pub fn into_shared(self) -> SharedItem {
        Arc::new(self)
    }
}

impl NavigationBarItem for NavigationItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn label(&self, is_checked: bool) -> Option<String> {
        if self.label_mode.is_visible(is_checked) {
            self.label.clone()
        } else {
            None
        }
    }

    fn color(&self, is_checked: bool) -> Color {
        if is_checked {
            self.checked_color
        } else {
            self.unchecked_color
        }
    }

    fn text_color(&self, is_checked: bool) -> Color {
        match self.text_colors {
            Some((checked, _)) if is_checked => checked,
            Some((_, unchecked)) => unchecked,
            None => self.color(is_checked),
        }
    }

    fn icon(&self) -> Icon {
        self.icon.clone()
    }

    fn badge_text(&self) -> Option<String> {
        self.badge.get()
    }

    fn set_badge_text(&self, text: Option<String>) {
        if self.badge.set(text.clone()) {
            tracing::trace!(target: targets::REGISTRY, id = %self.id, badge = ?text, "badge changed");
            self.badge_changed.emit(text);
        }
    }
}

impl fmt::Debug for NavigationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationItem")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("label", &self.label)
            .field("label_mode", &self.label_mode)
            .field("badge", &self.badge.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(NavigationItem: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn home() -> NavigationItem {
        NavigationItem::new(ItemId::new(1), "ic_home").with_label("Home")
    }

    #[test]
    fn test_label_modes() {
        let always = home();
        assert_eq!(always.label(false).as_deref(), Some("Home"));
        assert_eq!(always.label(true).as_deref(), Some("Home"));

        let active = home().with_label_mode(LabelMode::OnlyChecked);
        assert_eq!(active.label(false), None);
        assert_eq!(active.label(true).as_deref(), Some("Home"));

        let never = home().with_label_mode(LabelMode::Never);
        assert_eq!(never.label(true), None);
    }

    #[test]
    fn test_unlabelled_item() {
        let item = NavigationItem::new(ItemId::new(2), "ic_search");
        assert_eq!(item.label(true), None);
        assert_eq!(item.icon().name(), "ic_search");
    }

    #[test]
    fn test_colors_follow_checked_state() {
        let accent = Color::from_rgb8(0x3F, 0x51, 0xB5);
        let item = home().with_color(accent);

        assert_eq!(item.color(true), accent);
        assert_eq!(item.color(false), DEFAULT_UNCHECKED_COLOR);
        // Label tint falls back to the icon tint.
        assert_eq!(item.text_color(true), accent);

        let item = item.with_text_colors(Color::WHITE, Color::BLACK);
        assert_eq!(item.text_color(true), Color::WHITE);
        assert_eq!(item.text_color(false), Color::BLACK);
        assert_eq!(item.color(true), accent);
    }

    #[test]
    fn test_badge_changes_emit_once() {
        let item = home().with_badge("1");
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        item.badge_changed.connect(move |text| {
            received_clone.lock().push(text.clone());
        });

        item.set_badge_text(Some("1".into())); // unchanged
        item.set_badge_text(None);
        item.set_badge_text(None); // unchanged

        assert_eq!(*received.lock(), vec![None]);
        assert_eq!(item.badge_text(), None);
    }

    #[test]
    fn test_shared_item_badge_update() {
        let shared = home().with_badge("3").into_shared();
        let handle = shared.clone();

        handle.set_badge_text(None);
        assert_eq!(shared.badge_text(), None);
        assert_eq!(shared.id(), ItemId::new(1));
    }

    #[test]
    fn test_label_mode_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: LabelMode,
        }

        let parsed: Wrapper = toml::from_str("mode = \"only-checked\"").unwrap();
        assert_eq!(parsed.mode, LabelMode::OnlyChecked);
    }
}
