//! BottomNavigationBar widget implementation.
//!
//! This module provides [`BottomNavigationBar`], the widget facade that
//! composes the item registry, single selection, animated visibility and an
//! optional scroll behavior.
//!
//! # Example
//!
//! ```
//! use navbar_view::prelude::*;
//!
//! let mut bar = BottomNavigationBar::new();
//! bar.set_item_limit(0, Some(5)).unwrap();
//!
//! for id in 0..3 {
//!     bar.add_item(NavigationItem::new(ItemId::new(id), "ic_item").with_badge("1"))
//!         .unwrap();
//! }
//!
//! // Clear the badge of whichever item becomes checked
//! let items: Vec<SharedItem> = bar.items().cloned().collect();
//! bar.set_check_listener(Box::new(move |change: &CheckChange| {
//!     if let Some(item) = items.iter().find(|item| Some(item.id()) == change.new) {
//!         item.set_badge_text(None);
//!     }
//! }));
//!
//! assert!(bar.on_item_tapped(ItemId::new(2)).unwrap());
//! assert_eq!(bar.checked_item().and_then(|item| item.badge_text()), None);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use navbar_view_core::logging::{span_names, targets};
use navbar_view_core::{PerfSpan, Signal};

use crate::config::NavigationBarConfig;
use crate::error::{ConfigError, Result};
use crate::widget::animation::Easing;
use crate::widget::behavior::{Behavior, LayoutParams, ScrollSignal};
use crate::widget::item::{ItemId, NavigationBarItem, SharedItem};
use crate::widget::registry::ItemRegistry;
use crate::widget::selection::{CheckChange, SelectionController};
use crate::widget::traits::{
    BarPresentation, CheckListener, ItemPresentation, ItemWidthMode, NavigationBarView, Renderable,
};
use crate::widget::visibility::{VisibilityCallback, VisibilityController, VisibilityState};

/// A bottom navigation bar.
///
/// Holds an ordered set of items of which at most one is checked, keeps the
/// item count within its limits, and slides in and out of view either on
/// request or driven by an attached [`Behavior`].
///
/// # Signals
///
/// - `layout_requested`: the items or their arrangement changed
/// - `item_added(index, id)`: an item was added
/// - `item_removed(index, id)`: an item was removed
/// - `check_changed(change)`: the checked item changed
/// - `width_mode_changed(mode)`: fixed/flexible width mode changed
pub struct BottomNavigationBar {
    registry: ItemRegistry,
    selection: SelectionController,
    visibility: VisibilityController,
    behavior: Option<Box<dyn Behavior>>,
    layout_params: LayoutParams,
    width_mode: ItemWidthMode,
    auto_check_first: bool,

    /// Emitted when the items or their arrangement changed.
    pub layout_requested: Signal<()>,
    /// Emitted after an item is added, with its index and identifier.
    pub item_added: Signal<(usize, ItemId)>,
    /// Emitted after an item is removed, with its former index and identifier.
    pub item_removed: Signal<(usize, ItemId)>,
    /// Emitted after the check-change listener, for every change of the checked item.
    pub check_changed: Signal<CheckChange>,
    /// Emitted when the item width mode changes.
    pub width_mode_changed: Signal<ItemWidthMode>,
}

impl BottomNavigationBar {
    /// Create an empty, shown bar with flexible item widths.
    pub fn new() -> Self {
        Self {
            registry: ItemRegistry::new(),
            selection: SelectionController::new(),
            visibility: VisibilityController::new(),
            behavior: None,
            layout_params: LayoutParams::default(),
            width_mode: ItemWidthMode::Flexible,
            auto_check_first: false,
            layout_requested: Signal::new(),
            item_added: Signal::new(),
            item_removed: Signal::new(),
            check_changed: Signal::new(),
            width_mode_changed: Signal::new(),
        }
    }

    /// Check the first item automatically whenever nothing is checked.
    pub fn with_auto_check_first(mut self, enabled: bool) -> Self {
        self.auto_check_first = enabled;
        self
    }

    /// Set fixed item widths using builder pattern.
    pub fn with_item_width_fixed(mut self, fixed: bool) -> Self {
        self.width_mode = ItemWidthMode::from_fixed(fixed);
        self
    }

    /// Set the layout parameters using builder pattern.
    pub fn with_layout_params(mut self, params: LayoutParams) -> Self {
        self.layout_params = params;
        self
    }

    /// Build a bar from a configuration.
    pub fn from_config(config: &NavigationBarConfig) -> std::result::Result<Self, ConfigError> {
        config.build()
    }

    /// Set the show/hide animation using builder pattern.
    pub fn with_animation(mut self, duration: Duration, easing: Easing) -> Self {
        self.visibility.set_duration(duration);
        self.visibility.set_easing(easing);
        self
    }

    // =========================================================================
    // Item Management
    // =========================================================================

    /// Append an item, returning its index.
    pub fn add_item<I>(&mut self, item: I) -> Result<usize>
    where
        I: NavigationBarItem + 'static,
    {
        self.add(Arc::new(item))
    }

    /// Insert an item at `index`, returning the index.
    pub fn insert(&mut self, index: usize, item: SharedItem) -> Result<usize> {
        let id = item.id();
        let index = self
            .registry
            .insert(index, item)
            .inspect_err(|err| tracing::debug!(target: targets::REGISTRY, %id, %err, "add rejected"))?;

        self.item_added.emit((index, id));
        if self.auto_check_first {
            let old = self.selection.checked();
            if self.selection.check_first(&self.registry) {
                self.emit_check_changed(old);
            }
        }
        self.layout_requested.emit(());
        Ok(index)
    }

    /// Remove the item with `id`.
    pub fn remove(&mut self, id: ItemId) -> Result<SharedItem> {
        let (index, item) = self
            .registry
            .remove(id)
            .inspect_err(|err| tracing::debug!(target: targets::REGISTRY, %id, %err, "remove rejected"))?;
        self.after_removal(index, &item);
        Ok(item)
    }

    /// Move the item at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        self.registry.move_item(from, to)?;
        if from != to {
            self.layout_requested.emit(());
        }
        Ok(())
    }

    fn after_removal(&mut self, index: usize, item: &SharedItem) {
        let id = item.id();
        self.item_removed.emit((index, id));
        if self.selection.item_removed(&self.registry, id, index) {
            self.emit_check_changed(Some(id));
        }
        self.layout_requested.emit(());
    }

    // =========================================================================
    // Item Queries
    // =========================================================================

    /// The smallest allowed item count.
    pub fn min_size(&self) -> usize {
        self.registry.min_size()
    }

    /// The largest allowed item count, or `None` when unbounded.
    pub fn max_size(&self) -> Option<usize> {
        self.registry.max_size()
    }

    /// Whether one more item would fit.
    pub fn can_add(&self) -> bool {
        self.registry.can_add()
    }

    /// Whether one item could be removed.
    pub fn can_remove(&self) -> bool {
        self.registry.can_remove()
    }

    /// The item at `index`.
    pub fn item(&self, index: usize) -> Option<&SharedItem> {
        self.registry.get(index)
    }

    /// The item with `id`.
    pub fn find(&self, id: ItemId) -> Option<&SharedItem> {
        self.registry.find(id)
    }

    /// Position of the item with `id`.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.registry.index_of(id)
    }

    /// Items in display order.
    pub fn items(&self) -> impl Iterator<Item = &SharedItem> + '_ {
        self.registry.iter()
    }

    /// Identifiers in display order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.registry.ids()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Check the item with `id` programmatically. Same semantics as a tap.
    pub fn check(&mut self, id: ItemId) -> Result<bool> {
        let old = self.selection.checked();
        let changed = self.selection.check(&self.registry, id)?;
        if changed {
            self.emit_check_changed(old);
        }
        Ok(changed)
    }

    /// The checked item.
    pub fn checked_item(&self) -> Option<&SharedItem> {
        self.selection
            .checked()
            .and_then(|id| self.registry.find(id))
    }

    /// Remove the check-change listener.
    pub fn clear_check_listener(&mut self) -> bool {
        self.selection.clear_listener()
    }

    fn emit_check_changed(&self, old: Option<ItemId>) {
        self.check_changed.emit(CheckChange {
            old,
            new: self.selection.checked(),
        });
    }

    // =========================================================================
    // Width Mode
    // =========================================================================

    /// Current item width mode.
    pub fn width_mode(&self) -> ItemWidthMode {
        self.width_mode
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// The visibility controller.
    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    /// Show the bar, with the request issued at `now`.
    pub fn show_at<F>(&mut self, now: Instant, on_complete: F)
    where
        F: FnOnce(&VisibilityController) + Send + Sync + 'static,
    {
        self.visibility.show_at(now, on_complete);
    }

    /// Hide the bar, with the request issued at `now`.
    pub fn hide_at<F>(&mut self, now: Instant, on_complete: F)
    where
        F: FnOnce(&VisibilityController) + Send + Sync + 'static,
    {
        self.visibility.hide_at(now, on_complete);
    }

    /// Advance the show/hide animation to `now`.
    ///
    /// Returns `true` if a transition completed during this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.visibility.is_animating() {
            return false;
        }
        let _span = PerfSpan::new(span_names::ANIMATION);
        self.visibility.tick(now)
    }

    /// Set the show/hide animation. Applies from the next request.
    pub fn set_animation(&mut self, duration: Duration, easing: Easing) {
        self.visibility.set_duration(duration);
        self.visibility.set_easing(easing);
    }

    // =========================================================================
    // Behavior & Layout
    // =========================================================================

    /// Whether a scroll behavior is attached.
    pub fn has_behavior(&self) -> bool {
        self.behavior.is_some()
    }

    /// Name of the attached behavior.
    pub fn behavior_name(&self) -> Option<&'static str> {
        self.behavior.as_ref().map(|behavior| behavior.name())
    }

    /// Forward a scroll signal to the attached behavior.
    ///
    /// Returns `true` if the behavior requested a show or hide.
    pub fn dispatch_scroll(&mut self, signal: ScrollSignal) -> bool {
        self.dispatch_scroll_at(signal, Instant::now())
    }

    /// Forward a scroll signal received at `now` to the attached behavior.
    pub fn dispatch_scroll_at(&mut self, signal: ScrollSignal, now: Instant) -> bool {
        let _span = tracing::trace_span!(target: targets::BEHAVIOR, span_names::SCROLL).entered();
        match self.behavior.as_mut() {
            Some(behavior) => behavior.on_scroll(signal, now, &mut self.visibility),
            None => false,
        }
    }

    /// The hosting container's layout parameters.
    pub fn layout_params(&self) -> &LayoutParams {
        &self.layout_params
    }

    /// Replace the layout parameters. Drops any attached behavior.
    pub fn set_layout_params(&mut self, params: LayoutParams) {
        if self.detach_behavior().is_some() {
            tracing::debug!(target: targets::BEHAVIOR, "behavior dropped with layout params");
        }
        self.layout_params = params;
        self.layout_requested.emit(());
    }
}

impl NavigationBarView for BottomNavigationBar {
    fn len(&self) -> usize {
        self.registry.len()
    }

    fn add(&mut self, item: SharedItem) -> Result<usize> {
        self.insert(self.registry.len(), item)
    }

    fn remove_at(&mut self, index: usize) -> Result<SharedItem> {
        let item = self
            .registry
            .remove_at(index)
            .inspect_err(|err| tracing::debug!(target: targets::REGISTRY, index, %err, "remove rejected"))?;
        self.after_removal(index, &item);
        Ok(item)
    }

    fn set_item_limit(&mut self, min: usize, max: Option<usize>) -> Result<()> {
        self.registry.set_limits(min, max)
    }

    fn set_item_width_fixed(&mut self, fixed: bool) {
        let mode = ItemWidthMode::from_fixed(fixed);
        if self.width_mode != mode {
            self.width_mode = mode;
            tracing::debug!(target: targets::REGISTRY, ?mode, "item width mode changed");
            self.width_mode_changed.emit(mode);
            self.layout_requested.emit(());
        }
    }

    fn is_item_width_fixed(&self) -> bool {
        self.width_mode.is_fixed()
    }

    fn on_item_tapped(&mut self, id: ItemId) -> Result<bool> {
        let old = self.selection.checked();
        let changed = self.selection.on_item_tapped(&self.registry, id)?;
        if changed {
            self.emit_check_changed(old);
        }
        Ok(changed)
    }

    fn checked_id(&self) -> Option<ItemId> {
        self.selection.checked()
    }

    fn set_check_listener(&mut self, listener: CheckListener) {
        self.selection.set_listener(listener);
    }

    fn show(&mut self, on_complete: VisibilityCallback) {
        self.visibility
            .request(VisibilityState::Shown, Instant::now(), on_complete);
    }

    fn hide(&mut self, on_complete: VisibilityCallback) {
        self.visibility
            .request(VisibilityState::Hidden, Instant::now(), on_complete);
    }

    fn attach_behavior(&mut self, mut behavior: Box<dyn Behavior>) {
        if let Some(mut previous) = self.behavior.take() {
            previous.on_detached();
        }
        tracing::debug!(target: targets::BEHAVIOR, name = behavior.name(), "behavior attached");
        behavior.on_attached(&self.visibility);
        self.behavior = Some(behavior);
    }

    fn detach_behavior(&mut self) -> Option<Box<dyn Behavior>> {
        let mut behavior = self.behavior.take()?;
        tracing::debug!(target: targets::BEHAVIOR, name = behavior.name(), "behavior detached");
        behavior.on_detached();
        Some(behavior)
    }
}

impl Renderable for BottomNavigationBar {
    fn presentation(&self) -> BarPresentation {
        let checked = self.selection.checked();
        BarPresentation {
            items: self
                .registry
                .iter()
                .map(|item| ItemPresentation::of(item, Some(item.id()) == checked))
                .collect(),
            width_mode: self.width_mode,
            visibility: self.visibility.state(),
            translation_y: self
                .visibility
                .translation(self.layout_params.hide_distance()),
        }
    }
}

impl Default for BottomNavigationBar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BottomNavigationBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BottomNavigationBar")
            .field("registry", &self.registry)
            .field("checked", &self.selection.checked())
            .field("visibility", &self.visibility.state())
            .field("behavior", &self.behavior)
            .field("width_mode", &self.width_mode)
            .finish()
    }
}

static_assertions::assert_impl_all!(BottomNavigationBar: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavBarError;
    use crate::widget::behavior::LiftUpBehavior;
    use crate::widget::item::NavigationItem;
    use parking_lot::Mutex;

    const MS: Duration = Duration::from_millis(1);

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw)
    }

    fn bar_with(ids: &[u32]) -> BottomNavigationBar {
        let mut bar = BottomNavigationBar::new()
            .with_animation(Duration::from_millis(100), Easing::Linear);
        for &raw in ids {
            bar.add_item(NavigationItem::new(id(raw), "ic_item").with_badge("1"))
                .unwrap();
        }
        bar
    }

    fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        signal.connect(move |value: &T| received_clone.lock().push(value.clone()));
        received
    }

    #[test]
    fn test_add_emits_signals() {
        let mut bar = bar_with(&[]);
        let added = record(&bar.item_added);
        let layouts = record(&bar.layout_requested);

        assert_eq!(bar.add_item(NavigationItem::new(id(4), "ic")).unwrap(), 0);
        assert_eq!(bar.add_item(NavigationItem::new(id(5), "ic")).unwrap(), 1);

        assert_eq!(*added.lock(), vec![(0, id(4)), (1, id(5))]);
        assert_eq!(layouts.lock().len(), 2);
        assert_eq!(bar.checked_id(), None);
    }

    #[test]
    fn test_rejected_add_is_silent() {
        let mut bar = bar_with(&[0]);
        bar.set_item_limit(0, Some(1)).unwrap();
        let added = record(&bar.item_added);

        assert_eq!(
            bar.add_item(NavigationItem::new(id(1), "ic")),
            Err(NavBarError::CapacityExceeded { max: 1 })
        );
        assert!(added.lock().is_empty());
        assert_eq!(bar.len(), 1);
    }

    #[test]
    fn test_auto_check_first() {
        let mut bar = BottomNavigationBar::new().with_auto_check_first(true);
        let changes = record(&bar.check_changed);

        bar.add_item(NavigationItem::new(id(9), "ic")).unwrap();
        bar.add_item(NavigationItem::new(id(8), "ic")).unwrap();

        assert_eq!(bar.checked_id(), Some(id(9)));
        assert_eq!(*changes.lock(), vec![CheckChange { old: None, new: Some(id(9)) }]);
    }

    #[test]
    fn test_listener_runs_before_signal() {
        let mut bar = bar_with(&[0, 1]);
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_clone = order.clone();
        bar.set_check_listener(Box::new(move |_: &CheckChange| order_clone.lock().push("listener")));
        let order_clone = order.clone();
        bar.check_changed.connect(move |_| order_clone.lock().push("signal"));

        bar.on_item_tapped(id(1)).unwrap();
        assert_eq!(*order.lock(), vec!["listener", "signal"]);
    }

    #[test]
    fn test_listener_clears_badge_of_new_item() {
        let mut bar = bar_with(&[0, 1, 2]);
        let items: Vec<SharedItem> = bar.items().cloned().collect();
        bar.set_check_listener(Box::new(move |change: &CheckChange| {
            if let Some(item) = items.iter().find(|item| Some(item.id()) == change.new) {
                item.set_badge_text(None);
            }
        }));

        bar.on_item_tapped(id(1)).unwrap();
        assert_eq!(bar.find(id(1)).and_then(|item| item.badge_text()), None);
        assert_eq!(
            bar.find(id(0)).and_then(|item| item.badge_text()).as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_remove_checked_item_falls_back() {
        let mut bar = bar_with(&[0, 1, 2]);
        bar.check(id(1)).unwrap();
        let changes = record(&bar.check_changed);
        let removed = record(&bar.item_removed);

        let item = bar.remove(id(1)).unwrap();
        assert_eq!(item.id(), id(1));
        assert_eq!(bar.checked_id(), Some(id(0)));
        assert_eq!(*removed.lock(), vec![(1, id(1))]);
        assert_eq!(
            *changes.lock(),
            vec![CheckChange { old: Some(id(1)), new: Some(id(0)) }]
        );
    }

    #[test]
    fn test_remove_last_item_clears_selection() {
        let mut bar = bar_with(&[3]);
        bar.check(id(3)).unwrap();

        bar.remove_at(0).unwrap();
        assert!(bar.is_empty());
        assert_eq!(bar.checked_id(), None);
        assert!(bar.checked_item().is_none());
    }

    #[test]
    fn test_move_item_keeps_selection() {
        let mut bar = bar_with(&[0, 1, 2]);
        bar.check(id(0)).unwrap();
        bar.move_item(0, 2).unwrap();

        assert_eq!(bar.ids(), vec![id(1), id(2), id(0)]);
        assert_eq!(bar.checked_id(), Some(id(0)));
        assert_eq!(bar.index_of(id(0)), Some(2));
    }

    #[test]
    fn test_width_mode_signal_only_on_change() {
        let mut bar = bar_with(&[0]);
        let modes = record(&bar.width_mode_changed);

        bar.set_item_width_fixed(true);
        bar.set_item_width_fixed(true);
        bar.set_item_width_fixed(false);

        assert_eq!(*modes.lock(), vec![ItemWidthMode::Fixed, ItemWidthMode::Flexible]);
        assert!(!bar.is_item_width_fixed());
    }

    #[test]
    fn test_behavior_drives_visibility() {
        let mut bar = bar_with(&[0, 1]);
        let start = Instant::now();

        // No behavior: scrolling never hides.
        assert!(!bar.dispatch_scroll_at(ScrollSignal::Scroll { delta_y: 100.0 }, start));
        assert!(bar.visibility().is_shown());

        bar.attach_behavior(Box::new(LiftUpBehavior::new()));
        assert_eq!(bar.behavior_name(), Some("lift-up"));
        assert!(bar.dispatch_scroll_at(ScrollSignal::Scroll { delta_y: 100.0 }, start));
        assert_eq!(bar.visibility().state(), VisibilityState::Hiding);

        // Detaching lets the animation finish but stops further changes.
        assert!(bar.detach_behavior().is_some());
        assert!(bar.tick(start + 100 * MS));
        assert!(bar.visibility().is_hidden());
        assert!(!bar.dispatch_scroll_at(ScrollSignal::Scroll { delta_y: -100.0 }, start + 500 * MS));
        assert!(bar.visibility().is_hidden());
    }

    #[test]
    fn test_layout_params_drop_behavior() {
        let mut bar = bar_with(&[0]);
        bar.attach_behavior(Box::new(LiftUpBehavior::new()));

        bar.set_layout_params(LayoutParams::new(64.0));
        assert!(!bar.has_behavior());
        assert_eq!(bar.layout_params().height, 64.0);
    }

    #[test]
    fn test_presentation_snapshot() {
        let mut bar = bar_with(&[0, 1]).with_layout_params(LayoutParams::new(50.0));
        bar.check(id(1)).unwrap();
        bar.set_item_width_fixed(true);

        let start = Instant::now();
        bar.hide_at(start, |_| {});
        bar.tick(start + 50 * MS);

        let snapshot = bar.presentation();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.checked().map(|item| item.id), Some(id(1)));
        assert_eq!(snapshot.width_mode, ItemWidthMode::Fixed);
        assert_eq!(snapshot.visibility, VisibilityState::Hiding);
        assert!((snapshot.translation_y - 25.0).abs() < 0.5);
    }
}
