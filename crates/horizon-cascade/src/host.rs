//! Traits the host environment implements for the layout engine.
//!
//! The engine never owns a real visual tree. Measurements, node creation,
//! and capability detection all live on the host side, behind the seams
//! defined here:
//!
//! - [`MeasureSource`] - committed cell geometry, queried fresh each pass
//! - [`RenderHost`] - visual tree construction and batched cell attachment
//! - [`HostCapabilities`] - feature probes checked once at setup

use crate::config::ColumnStyle;
use crate::geometry::CellMetrics;
use crate::id::{CellId, NodeId};
use crate::slot::Section;

/// Access to committed cell geometry.
///
/// Implementations answer from the host's live visual tree, the equivalent
/// of a bounding-rect query. Results are only trustworthy after the host has
/// committed the current render pass, which is why reflow work is deferred
/// through the frame queue.
pub trait MeasureSource {
    /// Committed geometry for a cell.
    ///
    /// Returns `None` when the host has nothing to report; the engine treats
    /// that as [`CellMetrics::ZERO`], a valid zero-extent measurement.
    fn cell_metrics(&self, cell: CellId) -> Option<CellMetrics>;
}

/// Visual tree construction driven by the layout engine.
///
/// Implementations translate these calls into real node creation on their
/// display system. The engine guarantees `attach_cells` is invoked at most
/// once per column per reflow pass, so hosts can map each call to a single
/// batched tree mutation.
pub trait RenderHost {
    /// Create a structural section container holding `nodes` in order.
    ///
    /// Called once per [`Section`], in the fixed visual order, including for
    /// sections with no nodes (hosts may skip creating empty containers).
    fn place_section(&mut self, section: Section, nodes: &[NodeId]);

    /// Create the column containers of the grid, one per style entry,
    /// indexed left to right.
    fn place_columns(&mut self, styles: &[ColumnStyle]);

    /// Append `cells` to the end of column `column`, in order, as one
    /// operation.
    ///
    /// A cell already placed elsewhere in the tree moves; identity is the
    /// cell ID, never the position.
    fn attach_cells(&mut self, column: usize, cells: &[CellId]);
}

/// Feature probes for the host environment.
pub trait HostCapabilities {
    /// Whether the host supports native sticky positioning for headers.
    ///
    /// When `false`, the view emulates stickiness through
    /// [`StickyTracker`](crate::StickyTracker) on every scroll frame.
    fn native_sticky(&self) -> bool;
}
