//! Signal/slot system for Horizon Cascade.
//!
//! This module provides a type-safe signal/slot mechanism for observing
//! layout-engine state changes. Signals are emitted by the layout layer when
//! something noteworthy happens (a reflow pass completed, the viewport
//! scrolled, a refresh gesture fired), and connected slots (callbacks) are
//! invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Invocation Model
//!
//! All column mutations happen on a single layout thread, so slots are always
//! invoked directly on the emitting thread, in connection order. Slots
//! connected or disconnected from within a running slot take effect from the
//! next emission onward.
//!
//! # Example
//!
//! ```
//! use horizon_cascade_core::Signal;
//!
//! // Create a signal that reports a pass's move count
//! let reflowed = Signal::<usize>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = reflowed.connect(|moves| {
//!     println!("pass moved {} cells", moves);
//! });
//!
//! // Emit the signal
//! reflowed.emit(3);
//!
//! // Disconnect when done
//! reflowed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke (Arc-wrapped so emission can run unlocked).
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a reference
/// to the provided arguments, in the order they were connected.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple like `(usize, f32)` for multiple
///   arguments.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync`; hosts that commit geometry from a
/// compositor thread can hold signals across threads, but slots always run on
/// whichever thread emits.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
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
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` will do nothing. This is useful
    /// during batch content updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// If the signal is blocked, this does nothing. The connection table is
    /// released before any slot runs, so slots may freely connect to or
    /// disconnect from this same signal; such changes apply from the next
    /// emission.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "horizon_cascade_core::signal", "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Arc<dyn Fn(&Args) + Send + Sync>> = {
            let connections = self.connections.lock();
            connections.iter().map(|(_, conn)| conn.slot.clone()).collect()
        };
        tracing::trace!(
            target: "horizon_cascade_core::signal",
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<usize>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_emit_invokes_connected_slots() {
        let signal = Signal::<i32>::new();
        let sum = Arc::new(AtomicUsize::new(0));

        let sum_a = sum.clone();
        signal.connect(move |&n| {
            sum_a.fetch_add(n as usize, Ordering::SeqCst);
        });
        let sum_b = sum.clone();
        signal.connect(move |&n| {
            sum_b.fetch_add(n as usize * 10, Ordering::SeqCst);
        });

        signal.emit(2);
        assert_eq!(sum.load(Ordering::SeqCst), 22);
    }

    #[test]
    fn test_disconnect_removes_slot() {
        let signal = Signal::<()>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let id = signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_blocked_signal_does_not_emit() {
        let signal = Signal::<()>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slot_may_connect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let signal_clone = signal.clone();
        let calls_clone = calls.clone();
        signal.connect(move |_| {
            let inner_calls = calls_clone.clone();
            signal_clone.connect(move |_| {
                inner_calls.fetch_add(1, Ordering::SeqCst);
            });
        });

        // Connection made by the slot applies from the next emission.
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
