//! Reactive properties with change detection.
//!
//! A [`Property<T>`] wraps a value behind a lock and reports whether a write
//! actually changed it. Navigation items keep their badge text in a property
//! so a check-change listener can clear it through a shared handle while the
//! bar itself is borrowed.
//!
//! # Example
//!
//! ```
//! use navbar_view_core::{Property, Signal};
//!
//! struct Badge {
//!     text: Property<Option<String>>,
//!     text_changed: Signal<Option<String>>,
//! }
//!
//! impl Badge {
//!     fn set_text(&self, text: Option<String>) {
//!         if self.text.set(text.clone()) {
//!             self.text_changed.emit(text);
//!         }
//!     }
//! }
//!
//! let badge = Badge { text: Property::new(None), text_changed: Signal::new() };
//! badge.set_text(Some("3".into()));
//! assert_eq!(badge.text.get().as_deref(), Some("3"));
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// When `set()` is called, the new value is compared with the current one and
/// the return value says whether it actually changed, so callers only emit
/// notifications for real changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(10);

        // Same value - no change
        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        // Different value - changed
        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_property_replace() {
        let prop = Property::new(Some("1".to_string()));

        assert!(prop.replace(Some("1".to_string())).is_none());

        let old = prop.replace(None);
        assert_eq!(old, Some(Some("1".to_string())));
        assert_eq!(prop.get(), None);
    }

    #[test]
    fn test_property_with_closure() {
        let prop = Property::new(vec![1, 2, 3]);
        let sum: i32 = prop.with(|v| v.iter().sum());
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_property_shared_handle() {
        let prop = Arc::new(Property::new(Some("badge".to_string())));
        let handle = prop.clone();

        handle.set(None);
        assert_eq!(prop.get(), None);
    }

    #[test]
    fn test_property_default() {
        let prop: Property<Option<String>> = Property::default();
        assert_eq!(prop.get(), None);
    }
}
