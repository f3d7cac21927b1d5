//! Core systems for Horizon Cascade.
//!
//! This crate provides the foundational components of the Horizon Cascade
//! waterfall layout engine:
//!
//! - **Frame Queue**: Single-shot tasks deferred until the host commits the
//!   current render pass
//! - **Signal/Slot System**: Type-safe notifications from the layout layer
//! - **Logging**: Tracing target conventions shared across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_cascade_core::Signal;
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
//! # Frame Queue Example
//!
//! ```
//! use horizon_cascade_core::SharedFrameQueue;
//!
//! let queue = SharedFrameQueue::new();
//!
//! // Layout code posts work that needs committed geometry
//! queue.post(|| {
//!     println!("geometry is trustworthy now");
//! });
//!
//! // The host drains the queue once per render commit
//! let ran = queue.process_all();
//! assert_eq!(ran, 1);
//! ```

mod frame;
pub mod logging;
pub mod signal;

pub use frame::{FrameQueue, SharedFrameQueue, TaskId};
pub use signal::{ConnectionId, Signal};
