//! Ordered item storage with count limits.
//!
//! [`ItemRegistry`] is the single owner of a bar's items. Items are addressed
//! by position or by [`ItemId`]; display order is insertion order unless an
//! item is moved. Every mutation keeps the item count within the configured
//! [`ItemLimits`], and a rejected mutation leaves the registry untouched.

use std::fmt;

use navbar_view_core::logging::targets;

use super::item::{ItemId, SharedItem};
use crate::error::{NavBarError, Result};

/// Inclusive bounds on the number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemLimits {
    min: usize,
    max: Option<usize>,
}

impl ItemLimits {
    /// No lower bound and no upper bound.
    pub const UNBOUNDED: Self = Self { min: 0, max: None };

    /// Create limits, rejecting `min > max`.
    pub fn new(min: usize, max: Option<usize>) -> Result<Self> {
        match max {
            Some(max) if min > max => Err(NavBarError::InvalidRange { min, max }),
            _ => Ok(Self { min, max }),
        }
    }

    /// The smallest allowed count.
    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    /// The largest allowed count, or `None` when unbounded.
    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Whether `len` satisfies these limits.
    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && self.max.is_none_or(|max| len <= max)
    }
}

/// The ordered collection of items shown by a bar.
#[derive(Default)]
pub struct ItemRegistry {
    items: Vec<SharedItem>,
    limits: ItemLimits,
}

impl ItemRegistry {
    /// Create an empty, unbounded registry.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Limits
    // =========================================================================

    /// Current limits.
    pub fn limits(&self) -> ItemLimits {
        self.limits
    }

    /// The smallest allowed item count.
    pub fn min_size(&self) -> usize {
        self.limits.min
    }

    /// The largest allowed item count, or `None` when unbounded.
    pub fn max_size(&self) -> Option<usize> {
        self.limits.max
    }

    /// Replace the limits.
    ///
    /// Fails with [`NavBarError::InvalidRange`] when `min > max`, and with
    /// [`NavBarError::SizeOutsideLimits`] when the current count does not fit.
    /// Items are never dropped to satisfy new limits.
    pub fn set_limits(&mut self, min: usize, max: Option<usize>) -> Result<()> {
        let limits = ItemLimits::new(min, max)?;
        if !limits.contains(self.items.len()) {
            return Err(NavBarError::SizeOutsideLimits {
                len: self.items.len(),
                min,
                max,
            });
        }

        tracing::debug!(target: targets::REGISTRY, min, ?max, "item limits changed");
        self.limits = limits;
        Ok(())
    }

    /// Whether one more item would fit.
    pub fn can_add(&self) -> bool {
        self.limits.max.is_none_or(|max| self.items.len() < max)
    }

    /// Whether one item could be removed.
    pub fn can_remove(&self) -> bool {
        self.items.len() > self.limits.min
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append an item, returning its index.
    pub fn add(&mut self, item: SharedItem) -> Result<usize> {
        self.insert(self.items.len(), item)
    }

    /// Insert an item at `index`, returning the index.
    pub fn insert(&mut self, index: usize, item: SharedItem) -> Result<usize> {
        if let Some(max) = self.limits.max.filter(|&max| self.items.len() >= max) {
            return Err(NavBarError::CapacityExceeded { max });
        }
        let id = item.id();
        if self.contains(id) {
            return Err(NavBarError::DuplicateItem(id));
        }
        if index > self.items.len() {
            return Err(NavBarError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        self.items.insert(index, item);
        tracing::debug!(target: targets::REGISTRY, %id, index, len = self.items.len(), "item added");
        Ok(index)
    }

    /// Remove the item at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<SharedItem> {
        self.check_can_remove()?;
        if index >= self.items.len() {
            return Err(NavBarError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        tracing::debug!(target: targets::REGISTRY, id = %item.id(), index, len = self.items.len(), "item removed");
        Ok(item)
    }

    /// Remove the item with `id`, returning its former index and the item.
    pub fn remove(&mut self, id: ItemId) -> Result<(usize, SharedItem)> {
        self.check_can_remove()?;
        let index = self.index_of(id).ok_or(NavBarError::UnknownItem(id))?;
        self.remove_at(index).map(|item| (index, item))
    }

    /// Move the item at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(NavBarError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let item = self.items.remove(from);
        tracing::debug!(target: targets::REGISTRY, id = %item.id(), from, to, "item moved");
        self.items.insert(to, item);
        Ok(())
    }

    fn check_can_remove(&self) -> Result<()> {
        if self.can_remove() {
            Ok(())
        } else {
            Err(NavBarError::CapacityUnderflow {
                min: self.limits.min,
            })
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`.
    pub fn get(&self, index: usize) -> Option<&SharedItem> {
        self.items.get(index)
    }

    /// The item with `id`.
    pub fn find(&self, id: ItemId) -> Option<&SharedItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Position of the item with `id`.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Whether an item with `id` is present.
    pub fn contains(&self, id: ItemId) -> bool {
        self.index_of(id).is_some()
    }

    /// Items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedItem> + '_ {
        self.items.iter()
    }

    /// Identifiers in display order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id()).collect()
    }
}

impl fmt::Debug for ItemRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("ids", &self.ids())
            .field("limits", &self.limits)
            .finish()
    }
}
