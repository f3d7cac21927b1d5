//! Multi-column waterfall layout engine for Horizon Cascade.
//!
//! A waterfall (masonry) surface renders a flat sequence of variable-height
//! cells into a fixed number of columns and keeps the column bottoms as
//! close to equal as possible, relocating as few cells as it can so the
//! host's already-placed visual nodes survive. This crate owns the layout
//! model and the balance algorithm; rendering, measurement, and scrolling
//! stay with the host behind small traits.
//!
//! # Setting Up a View
//!
//! Configuration arrives as raw host properties and resolves with
//! per-field fallback; content arrives as one tagged sequence:
//!
//! ```
//! use horizon_cascade::{
//!     CascadeConfig, CascadeView, ColumnGap, ConfigProps, NodeId, SlotNode, SlotTag,
//! };
//!
//! let config = CascadeConfig::resolve(&ConfigProps {
//!     column_count: Some("3"),
//!     column_width: Some("240"),
//!     column_gap: Some("-5"), // invalid, falls back
//! });
//! assert_eq!(config.column_count, 3);
//! assert_eq!(config.column_gap, ColumnGap::Normal);
//!
//! let mut view = CascadeView::new(config);
//! view.set_content(vec![
//!     SlotNode::new(NodeId::next(), SlotTag::Header { footer: false, sticky: true }),
//!     SlotNode::new(NodeId::next(), SlotTag::Cell),
//!     SlotNode::new(NodeId::next(), SlotTag::Cell),
//!     SlotNode::new(NodeId::next(), SlotTag::Cell),
//! ]);
//! assert_eq!(view.cell_count(), 3);
//! ```
//!
//! # The Render Cycle
//!
//! Cell geometry only exists after the host commits a frame, so balancing
//! is deferred: content changes latch a pass, the host builds and commits,
//! then the pass runs against fresh measurements and reports which cells
//! moved where:
//!
//! ```
//! use horizon_cascade::{
//!     CascadeConfig, CascadeView, CellId, CellMetrics, MeasureSource, NodeId,
//!     SlotNode, SlotTag,
//! };
//!
//! struct Committed;
//!
//! impl MeasureSource for Committed {
//!     fn cell_metrics(&self, _cell: CellId) -> Option<CellMetrics> {
//!         // Real hosts read the committed visual tree here.
//!         Some(CellMetrics::new(0.0, 120.0))
//!     }
//! }
//!
//! let mut view = CascadeView::new(CascadeConfig::with_columns(2));
//! view.set_content(vec![
//!     SlotNode::new(NodeId::next(), SlotTag::Cell),
//!     SlotNode::new(NodeId::next(), SlotTag::Cell),
//! ]);
//!
//! // After view.build(&mut host) and the host's commit:
//! let pass = view.on_frame_committed(&Committed).unwrap();
//! assert!(pass.is_noop()); // two equal cells are already balanced
//! ```
//!
//! For hosts that drain a task queue after commit,
//! [`schedule_reflow`] posts the deferred pass on a
//! [`SharedFrameQueue`] and coalesces repeated requests.
//!
//! # Scrolling and Gestures
//!
//! [`CascadeView::handle_scroll`] records scroll frames, drives sticky
//! header emulation on hosts without native pinning, and feeds the
//! pull-to-refresh tracker; touch events go to the `handle_touch_*`
//! methods and a completed pull emits
//! [`refresh_requested`](CascadeView::refresh_requested).

mod config;
mod error;
mod gesture;
mod geometry;
mod host;
mod id;
mod layout;
mod slot;
mod sticky;
mod view;

// Configuration
pub use config::{
    CascadeConfig, ColumnGap, ColumnStyle, ColumnWidth, ColumnWidthStyle, ConfigProps, NORMAL_GAP,
};
pub use error::{CascadeError, CascadeResult};

// Content model
pub use id::{CellId, NodeId};
pub use slot::{HeaderNode, Section, SlotGroups, SlotNode, SlotTag};

// Layout engine
pub use geometry::{CellMetrics, ScrollState};
pub use layout::{
    CellMove, Column, ColumnBatch, ColumnSet, ReflowPass, column_assignments, distribute, reflow,
    reflow_measured,
};

// Host integration
pub use gesture::{GestureTracker, PULL_THRESHOLD};
pub use host::{HostCapabilities, MeasureSource, RenderHost};
pub use sticky::{StickyMode, StickyTracker, StickyTransition};
pub use view::{CascadeView, schedule_reflow};

// Re-export the core primitives hosts wire the view up with.
pub use horizon_cascade_core::{ConnectionId, FrameQueue, SharedFrameQueue, Signal, TaskId};
