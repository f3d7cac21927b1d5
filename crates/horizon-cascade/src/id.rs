//! Stable identifiers for layout content.
//!
//! Cells and structural nodes are re-located in the host's visual tree by
//! identity, never by position, so identifiers must stay stable across any
//! number of reflow passes. Both kinds are allocated from process-wide
//! monotonic counters; for cells the allocation order doubles as the
//! deterministic tie-break order the reflow engine sorts by.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// A unique identifier for a layout cell.
///
/// Assigned in creation order: sorting cells by `CellId` approximates the
/// original document order of their backing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(u64);

/// Global counter for generating unique cell IDs.
static NEXT_CELL_ID: AtomicU64 = AtomicU64::new(1);

impl CellId {
    /// Allocate the next cell ID in creation order.
    pub fn next() -> Self {
        CellId(NEXT_CELL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Build a cell ID from a raw value.
    ///
    /// Intended for hosts that persist identifiers and for tests; newly
    /// created cells should use [`CellId::next`] so creation order holds.
    pub const fn from_raw(raw: u64) -> Self {
        CellId(raw)
    }

    /// Get the raw u64 value of this cell ID.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}

/// A unique identifier for a structural slot node.
///
/// Structural nodes (headers, footers, indicators, passthrough content) sit
/// outside the column grid and are never balanced, so their IDs carry no
/// ordering meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

/// Global counter for generating unique node IDs.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

impl NodeId {
    /// Allocate the next node ID.
    pub fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Build a node ID from a raw value, typically one minted by the host.
    pub const fn from_raw(raw: u64) -> Self {
        NodeId(raw)
    }

    /// Get the raw u64 value of this node ID.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ids_are_monotonic() {
        let a = CellId::next();
        let b = CellId::next();
        let c = CellId::next();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_raw_round_trip() {
        let id = CellId::from_raw(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(id.to_string(), "cell#42");
        assert_eq!(NodeId::from_raw(7).to_string(), "node#7");
    }
}
