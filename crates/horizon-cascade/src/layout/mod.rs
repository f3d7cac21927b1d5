//! Column model, initial assignment, and balance reflow.
//!
//! This module owns the layout state of the waterfall: an explicit set of
//! columns, each holding an ordered list of cell identifiers. Two operations
//! act on it:
//!
//! - [`distribute`] places new cells with a single round-robin pass, used
//!   when content first enters (no measurements exist yet).
//! - [`reflow`] rebalances placed cells once committed geometry is available,
//!   moving every cell found below the shortest column's bottom into
//!   whichever column is shortest at its turn.
//!
//! Structural nodes (headers, footers, indicators) never enter the column
//! model; see [`SlotGroups`](crate::SlotGroups).

mod column;
mod initializer;
mod reflow;

pub use column::{Column, ColumnSet};
pub use initializer::{column_assignments, distribute};
pub use reflow::{CellMove, ColumnBatch, ReflowPass, reflow, reflow_measured};
