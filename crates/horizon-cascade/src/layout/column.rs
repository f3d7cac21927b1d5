//! Column state bookkeeping.

use crate::error::{CascadeError, CascadeResult};
use crate::geometry::CellMetrics;
use crate::host::MeasureSource;
use crate::id::CellId;

/// One vertical bucket of the waterfall.
///
/// Cells are stored top to bottom; insertion order is visual order. The
/// column's bottom is never cached: it is derived from the last cell's
/// committed geometry whenever asked, so it cannot drift from the truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    cells: Vec<CellId>,
}

impl Column {
    pub(crate) fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// The cells in this column, top to bottom.
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Number of cells in this column.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether this column holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bottom-most cell, if any.
    pub fn last(&self) -> Option<CellId> {
        self.cells.last().copied()
    }

    /// The measured bottom edge of the last cell, or 0 for an empty column.
    ///
    /// An empty column reporting 0 is what makes it maximally attractive to
    /// the balance pass, which is the desired behavior: an empty column
    /// should receive the next cell.
    pub fn bottom<S: MeasureSource>(&self, source: &S) -> f32 {
        match self.cells.last() {
            Some(&cell) => source
                .cell_metrics(cell)
                .unwrap_or(CellMetrics::ZERO)
                .bottom(),
            None => 0.0,
        }
    }

    pub(crate) fn push(&mut self, cell: CellId) {
        self.cells.push(cell);
    }

    /// Append a batch of cells in order, as one operation.
    pub(crate) fn append(&mut self, cells: &[CellId]) {
        self.cells.extend_from_slice(cells);
    }

    /// Remove the given cells, keeping the remaining order intact.
    pub(crate) fn detach(&mut self, cells: &[CellId]) {
        self.cells.retain(|cell| !cells.contains(cell));
    }
}

/// The full set of columns for one layout.
///
/// Cardinality is fixed at construction for the lifetime of the layout; a
/// column count change means rebuilding the set from scratch. Columns are
/// addressed by integer index, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Create `column_count` empty columns.
    ///
    /// A zero count is rejected upstream at configuration validation; if one
    /// reaches here anyway it is clamped to a single column.
    pub fn new(column_count: usize) -> Self {
        Self {
            columns: vec![Column::new(); column_count.max(1)],
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns, left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column at `index`.
    pub fn column(&self, index: usize) -> CascadeResult<&Column> {
        self.columns.get(index).ok_or(CascadeError::ColumnOutOfRange {
            index,
            count: self.columns.len(),
        })
    }

    /// Total number of cells across all columns.
    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Which column currently holds `cell`.
    pub fn column_of(&self, cell: CellId) -> CascadeResult<usize> {
        self.columns
            .iter()
            .position(|column| column.cells.contains(&cell))
            .ok_or(CascadeError::UnknownCell(cell))
    }

    /// Whether any column holds `cell`.
    pub fn contains(&self, cell: CellId) -> bool {
        self.column_of(cell).is_ok()
    }

    /// Every placed cell, column by column.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.columns.iter().flat_map(|column| column.cells.iter().copied())
    }

    /// Snapshot of every column's measured bottom, left to right.
    pub fn bottoms<S: MeasureSource>(&self, source: &S) -> Vec<f32> {
        self.columns
            .iter()
            .map(|column| column.bottom(source))
            .collect()
    }

    pub(crate) fn push_cell(&mut self, index: usize, cell: CellId) {
        self.columns[index].push(cell);
    }

    pub(crate) fn append_cells(&mut self, index: usize, cells: &[CellId]) {
        self.columns[index].append(cells);
    }

    pub(crate) fn detach_cells(&mut self, index: usize, cells: &[CellId]) {
        self.columns[index].detach(cells);
    }
}
