//! Signal/slot system for navbar-view.
//!
//! This module provides the two notification primitives the navigation bar is
//! built on:
//!
//! - [`Signal<Args>`] - multi-subscriber broadcast; slots run in connection order
//! - [`ListenerSlot<Args>`] - a single listener slot where the last registration wins
//!
//! Both invoke their callbacks synchronously on the emitting thread. The bar is
//! driven from a single UI thread, so there is no queued or cross-thread
//! delivery; the types are still `Send + Sync` so a bar can be moved between
//! threads.
//!
//! # Example
//!
//! ```
//! use navbar_view_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type SlotFn<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with the provided
/// arguments, in the order they were connected.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(String, i32)` for multiple arguments.
///
/// # Re-entrancy
///
/// The connection list is snapshotted before slots run, so a slot may connect
/// or disconnect on the same signal. Slots connected during an emission are
/// first invoked on the next emission.
pub struct Signal<Args> {
    /// All active connections, paired with their connection sequence number.
    connections: Mutex<SlotMap<ConnectionId, (u64, SlotFn<Args>)>>,
    /// Monotonic sequence used to keep emission in connection order.
    next_sequence: Mutex<u64>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            next_sequence: Mutex::new(0),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use navbar_view_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let sequence = {
            let mut next = self.next_sequence.lock();
            let sequence = *next;
            *next += 1;
            sequence
        };
        self.connections.lock().insert((sequence, Arc::new(slot)))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Emit the signal, invoking all connected slots in connection order.
    #[tracing::instrument(skip_all, target = "navbar_view_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots = self.snapshot();
        tracing::trace!(target: targets::SIGNAL, slot_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }

    /// Clone the connected slots out of the lock, ordered by connection sequence.
    fn snapshot(&self) -> Vec<SlotFn<Args>> {
        let connections = self.connections.lock();
        let mut ordered: Vec<_> = connections
            .values()
            .map(|(sequence, slot)| (*sequence, slot.clone()))
            .collect();
        drop(connections);

        ordered.sort_by_key(|(sequence, _)| *sequence);
        ordered.into_iter().map(|(_, slot)| slot).collect()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .finish()
    }
}

/// A single-listener notification slot.
///
/// Unlike [`Signal`], a `ListenerSlot` holds at most one callback. Registering
/// a new listener replaces the previous one ("last listener wins"), which is
/// the model the navigation bar uses for its check-change listener.
///
/// # Example
///
/// ```
/// use navbar_view_core::ListenerSlot;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use std::sync::Arc;
///
/// let slot = ListenerSlot::<i32>::new();
/// let total = Arc::new(AtomicI32::new(0));
///
/// let first = total.clone();
/// slot.set(move |&n| { first.fetch_add(n, Ordering::SeqCst); });
///
/// let second = total.clone();
/// slot.set(move |&n| { second.fetch_add(n * 10, Ordering::SeqCst); });
///
/// slot.notify(&1);
/// assert_eq!(total.load(Ordering::SeqCst), 10);
/// ```
pub struct ListenerSlot<Args> {
    listener: Mutex<Option<SlotFn<Args>>>,
}

impl<Args: 'static> Default for ListenerSlot<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> ListenerSlot<Args> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            listener: Mutex::new(None),
        }
    }

    /// Install a listener, replacing any previously registered one.
    ///
    /// Returns `true` if a previous listener was replaced.
    pub fn set<F>(&self, listener: F) -> bool
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.listener.lock().replace(Arc::new(listener)).is_some()
    }

    /// Remove the current listener.
    ///
    /// Returns `true` if a listener was installed.
    pub fn clear(&self) -> bool {
        self.listener.lock().take().is_some()
    }

    /// Check whether a listener is installed.
    pub fn is_set(&self) -> bool {
        self.listener.lock().is_some()
    }

    /// Deliver `args` to the installed listener.
    ///
    /// Returns `true` if a listener was invoked. The lock is released before
    /// the listener runs, so the listener may replace itself.
    pub fn notify(&self, args: &Args) -> bool {
        let listener = self.listener.lock().clone();
        match listener {
            Some(listener) => {
                listener(args);
                true
            }
            None => false,
        }
    }
}

impl<Args> fmt::Debug for ListenerSlot<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("is_set", &self.listener.lock().is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<(u32, u32)>: Send, Sync);
static_assertions::assert_impl_all!(ListenerSlot<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        let values = received.lock();
        assert_eq!(*values, vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        let values = received.lock();
        assert_eq!(*values, vec![1]); // Only received before disconnect
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let ids: Vec<_> = (0..4)
            .map(|n| {
                let order = order.clone();
                signal.connect(move |_| order.lock().push(n))
            })
            .collect();

        // Free a slot and reconnect; the new slot must still run last.
        signal.disconnect(ids[1]);
        let order_clone = order.clone();
        signal.connect(move |_| order_clone.lock().push(99));

        signal.emit(());
        assert_eq!(*order.lock(), vec![0, 2, 3, 99]);
    }

    #[test]
    fn test_slot_may_reconnect_during_emit() {
        let signal = Arc::new(Signal::<i32>::new());
        let received = Arc::new(Mutex::new(Vec::new()));

        let signal_clone = signal.clone();
        let received_clone = received.clone();
        signal.connect(move |&value| {
            let received = received_clone.clone();
            signal_clone.connect(move |&later| received.lock().push(later));
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert_eq!(*received.lock(), vec![1]);

        // The slot connected during the first emission runs from the second on.
        signal.emit(2);
        assert_eq!(*received.lock(), vec![1, 2, 2]);
    }

    #[test]
    fn test_signal_with_multiple_args() {
        let signal = Signal::<(String, i32)>::new();
        let received = Arc::new(Mutex::new(None));

        let received_clone = received.clone();
        signal.connect(move |args| {
            *received_clone.lock() = Some(args.clone());
        });

        signal.emit(("hello".to_string(), 42));

        let value = received.lock().clone();
        assert_eq!(value, Some(("hello".to_string(), 42)));
    }

    #[test]
    fn test_listener_slot_last_wins() {
        let slot = ListenerSlot::<i32>::new();
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        let first_clone = first.clone();
        assert!(!slot.set(move |&v| first_clone.lock().push(v)));
        let second_clone = second.clone();
        assert!(slot.set(move |&v| second_clone.lock().push(v)));

        assert!(slot.notify(&7));
        assert!(first.lock().is_empty());
        assert_eq!(*second.lock(), vec![7]);
    }

    #[test]
    fn test_listener_slot_clear() {
        let slot = ListenerSlot::<()>::new();
        assert!(!slot.is_set());
        assert!(!slot.notify(&()));

        slot.set(|_| {});
        assert!(slot.is_set());
        assert!(slot.clear());
        assert!(!slot.clear());
        assert!(!slot.notify(&()));
    }
}
