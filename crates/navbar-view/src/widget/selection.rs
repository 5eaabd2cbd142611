//! Single selection over a registry's items.
//!
//! [`SelectionController`] holds at most one checked [`ItemId`] and reports
//! every actual change to a single listener as a [`CheckChange`]. Checking the
//! item that is already checked is a no-op and produces no notification.

use navbar_view_core::logging::targets;
use navbar_view_core::ListenerSlot;

use super::item::ItemId;
use super::registry::ItemRegistry;
use crate::error::{NavBarError, Result};

/// A change of the checked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckChange {
    /// Previously checked item.
    pub old: Option<ItemId>,
    /// Newly checked item. `None` only when the last item was removed.
    pub new: Option<ItemId>,
}

/// Tracks the checked item and notifies the check-change listener.
#[derive(Debug, Default)]
pub struct SelectionController {
    checked: Option<ItemId>,
    listener: ListenerSlot<CheckChange>,
}

impl SelectionController {
    /// Create a controller with nothing checked.
    pub fn new() -> Self {
        Self::default()
    }

    /// The checked item, if any.
    #[inline]
    pub fn checked(&self) -> Option<ItemId> {
        self.checked
    }

    /// Whether `id` is the checked item.
    pub fn is_checked(&self, id: ItemId) -> bool {
        self.checked == Some(id)
    }

    /// Install the check-change listener, replacing any previous one.
    pub fn set_listener<F>(&self, listener: F)
    where
        F: Fn(&CheckChange) + Send + Sync + 'static,
    {
        if self.listener.set(listener) {
            tracing::debug!(target: targets::SELECTION, "check-change listener replaced");
        }
    }

    /// Remove the check-change listener.
    pub fn clear_listener(&self) -> bool {
        self.listener.clear()
    }

    /// Whether a check-change listener is installed.
    pub fn has_listener(&self) -> bool {
        self.listener.is_set()
    }

    /// Handle a tap on the item with `id`.
    ///
    /// Returns `Ok(true)` if the checked item changed and the listener was
    /// notified, `Ok(false)` if `id` was already checked.
    pub fn on_item_tapped(&mut self, registry: &ItemRegistry, id: ItemId) -> Result<bool> {
        tracing::trace!(target: targets::SELECTION, %id, "item tapped");
        self.check(registry, id)
    }

    /// Check the item with `id` programmatically. Same semantics as a tap.
    pub fn check(&mut self, registry: &ItemRegistry, id: ItemId) -> Result<bool> {
        if !registry.contains(id) {
            tracing::debug!(target: targets::SELECTION, %id, "rejected check of unknown item");
            return Err(NavBarError::UnknownItem(id));
        }
        if self.checked == Some(id) {
            return Ok(false);
        }

        self.change_to(Some(id));
        Ok(true)
    }

    /// Check the first item if nothing is checked yet.
    pub fn check_first(&mut self, registry: &ItemRegistry) -> bool {
        match (self.checked, registry.get(0)) {
            (None, Some(first)) => {
                let id = first.id();
                self.change_to(Some(id));
                true
            }
            _ => false,
        }
    }

    /// Reset to nothing checked, notifying if something was.
    pub fn clear(&mut self) -> bool {
        if self.checked.is_none() {
            return false;
        }
        self.change_to(None);
        true
    }

    /// React to the removal of `removed` from position `removed_index`.
    ///
    /// `registry` must already reflect the removal. If the removed item was
    /// checked, the item that preceded it becomes checked (or the new first
    /// item when the first was removed); an empty registry leaves nothing
    /// checked. Returns `true` if the checked item changed.
    pub fn item_removed(
        &mut self,
        registry: &ItemRegistry,
        removed: ItemId,
        removed_index: usize,
    ) -> bool {
        if self.checked != Some(removed) {
            return false;
        }

        let fallback = registry
            .get(removed_index.saturating_sub(1))
            .map(|item| item.id());
        tracing::debug!(target: targets::SELECTION, %removed, fallback = ?fallback, "checked item removed");
        self.change_to(fallback);
        true
    }

    fn change_to(&mut self, new: Option<ItemId>) {
        let change = CheckChange {
            old: self.checked,
            new,
        };
        self.checked = new;
        tracing::debug!(target: targets::SELECTION, old = ?change.old, new = ?change.new, "checked item changed");
        self.listener.notify(&change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::item::NavigationItem;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn registry(ids: &[u32]) -> ItemRegistry {
        let mut registry = ItemRegistry::new();
        for &id in ids {
            registry
                .add(NavigationItem::new(ItemId::new(id), "ic").into_shared())
                .unwrap();
        }
        registry
    }

    fn recording(controller: &SelectionController) -> Arc<Mutex<Vec<CheckChange>>> {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let changes_clone = changes.clone();
        controller.set_listener(move |change| changes_clone.lock().push(*change));
        changes
    }

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw)
    }

    #[test]
    fn test_initially_unchecked() {
        let controller = SelectionController::new();
        assert_eq!(controller.checked(), None);
        assert!(!controller.has_listener());
    }

    #[test]
    fn test_tap_sequence_notifies_old_and_new() {
        let registry = registry(&[0, 1, 2, 3, 4]);
        let mut controller = SelectionController::new();
        let changes = recording(&controller);

        assert!(controller.on_item_tapped(&registry, id(2)).unwrap());
        assert!(controller.on_item_tapped(&registry, id(4)).unwrap());

        assert_eq!(
            *changes.lock(),
            vec![
                CheckChange { old: None, new: Some(id(2)) },
                CheckChange { old: Some(id(2)), new: Some(id(4)) },
            ]
        );
    }

    #[test]
    fn test_tap_checked_item_is_silent() {
        let registry = registry(&[0, 1]);
        let mut controller = SelectionController::new();
        controller.check(&registry, id(1)).unwrap();
        let changes = recording(&controller);

        assert!(!controller.on_item_tapped(&registry, id(1)).unwrap());
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_tap_unknown_item() {
        let registry = registry(&[0]);
        let mut controller = SelectionController::new();
        let changes = recording(&controller);

        assert_eq!(
            controller.on_item_tapped(&registry, id(9)),
            Err(NavBarError::UnknownItem(id(9)))
        );
        assert_eq!(controller.checked(), None);
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_last_listener_wins() {
        let registry = registry(&[0, 1]);
        let mut controller = SelectionController::new();
        let first = recording(&controller);
        let second = recording(&controller);

        controller.check(&registry, id(0)).unwrap();
        assert!(first.lock().is_empty());
        assert_eq!(second.lock().len(), 1);

        assert!(controller.clear_listener());
        controller.check(&registry, id(1)).unwrap();
        assert_eq!(second.lock().len(), 1);
    }

    #[test]
    fn test_removal_falls_back_to_previous_item() {
        let mut registry = registry(&[0, 1, 2]);
        let mut controller = SelectionController::new();
        controller.check(&registry, id(2)).unwrap();
        let changes = recording(&controller);

        let (index, _) = registry.remove(id(2)).unwrap();
        assert!(controller.item_removed(&registry, id(2), index));
        assert_eq!(controller.checked(), Some(id(1)));
        assert_eq!(
            *changes.lock(),
            vec![CheckChange { old: Some(id(2)), new: Some(id(1)) }]
        );
    }

    #[test]
    fn test_removal_of_first_checks_new_first() {
        let mut registry = registry(&[0, 1, 2]);
        let mut controller = SelectionController::new();
        controller.check(&registry, id(0)).unwrap();

        registry.remove_at(0).unwrap();
        assert!(controller.item_removed(&registry, id(0), 0));
        assert_eq!(controller.checked(), Some(id(1)));
    }

    #[test]
    fn test_removal_of_last_item_clears() {
        let mut registry = registry(&[5]);
        let mut controller = SelectionController::new();
        controller.check(&registry, id(5)).unwrap();
        let changes = recording(&controller);

        registry.remove_at(0).unwrap();
        assert!(controller.item_removed(&registry, id(5), 0));
        assert_eq!(controller.checked(), None);
        assert_eq!(*changes.lock(), vec![CheckChange { old: Some(id(5)), new: None }]);
    }

    #[test]
    fn test_removal_of_unchecked_item_is_silent() {
        let mut registry = registry(&[0, 1]);
        let mut controller = SelectionController::new();
        controller.check(&registry, id(0)).unwrap();
        let changes = recording(&controller);

        registry.remove_at(1).unwrap();
        assert!(!controller.item_removed(&registry, id(1), 1));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_check_first_and_clear() {
        let registry = registry(&[7, 8]);
        let mut controller = SelectionController::new();

        assert!(controller.check_first(&registry));
        assert_eq!(controller.checked(), Some(id(7)));
        assert!(!controller.check_first(&registry));

        assert!(controller.clear());
        assert!(!controller.clear());
        assert_eq!(controller.checked(), None);
    }
}
