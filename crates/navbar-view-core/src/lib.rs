//! Core systems for navbar-view.
//!
//! This crate provides the foundational primitives of the navigation bar:
//!
//! - **Signal/Slot System**: Type-safe multi-subscriber notifications
//! - **Listener Slots**: Single-listener callbacks where the last registration wins
//! - **Property System**: Reactive values with change detection
//! - **Logging**: Tracing targets, span names and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use navbar_view_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use navbar_view_core::{Property, Signal};
//!
//! // A reactive counter with change notification
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn new() -> Self {
//!         Self {
//!             value: Property::new(0),
//!             value_changed: Signal::new(),
//!         }
//!     }
//!
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, ListenerSlot, Signal};
