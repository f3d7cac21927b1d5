//! Error types for the cascade crate.

use thiserror::Error;

use crate::id::CellId;

/// Errors reported by id- and index-keyed layout accessors.
///
/// The engine itself never fails: invalid configuration falls back to
/// defaults and absent measurements read as zero. These errors exist only
/// for host code that asks about a cell or column the layout does not hold.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeError {
    /// The cell is not placed in any column.
    #[error("unknown cell id {0:?}")]
    UnknownCell(CellId),

    /// The column index does not exist in the current layout.
    #[error("column index {index} out of range for {count} columns")]
    ColumnOutOfRange {
        /// The requested column index.
        index: usize,
        /// The number of columns in the current layout.
        count: usize,
    },
}

/// Result type for cascade operations.
pub type CascadeResult<T> = Result<T, CascadeError>;
