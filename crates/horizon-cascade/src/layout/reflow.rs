//! The balance reflow engine.
//!
//! A pass takes the current columns plus a snapshot of each column's
//! last-cell bottom, finds the shortest column, pulls every cell across the
//! other columns whose top edge sits strictly below that boundary into one
//! pool, and re-appends the pool in cell creation order, each cell to
//! whichever column is shortest at its turn. Ties always resolve to the
//! first (left-most) column.
//!
//! The greedy assignment is a longest-processing-time-style bin-balancing
//! heuristic: O(k log k) for k pooled cells, no backtracking, and not
//! globally optimal packing. It only ever touches cells below the boundary,
//! so already-settled content keeps its visual nodes untouched.

use super::column::ColumnSet;
use crate::geometry::CellMetrics;
use crate::host::MeasureSource;
use crate::id::CellId;

/// One relocation decided by a balance pass.
///
/// `dest` may equal `source`: a pooled cell can be re-appended to the column
/// it came from, possibly at a new position within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMove {
    /// The relocated cell.
    pub cell: CellId,
    /// Column the cell was pulled from.
    pub source: usize,
    /// Column the cell was appended to.
    pub dest: usize,
}

/// Every cell one pass appended to a single column, in insertion order.
///
/// Hosts mirror a batch with one visual tree mutation per column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBatch {
    /// The receiving column.
    pub column: usize,
    /// Appended cells, top to bottom.
    pub cells: Vec<CellId>,
}

/// The outcome of one balance pass, applied in place to the [`ColumnSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReflowPass {
    /// All relocations in assignment order.
    pub moves: Vec<CellMove>,
    /// Per-column append batches; only columns that received cells appear.
    pub batches: Vec<ColumnBatch>,
    /// Final value of every column's bottom tracker, left to right. These
    /// are the values the assignment decisions were made against; the
    /// host's next committed measurement supersedes them.
    pub bottoms: Vec<f32>,
}

impl ReflowPass {
    /// Whether the pass moved nothing.
    pub fn is_noop(&self) -> bool {
        self.moves.is_empty()
    }
}

/// A cell pulled below the balance boundary, waiting for reassignment.
struct Candidate {
    cell: CellId,
    height: f32,
    source: usize,
}

/// Run a balance pass, measuring the bottoms snapshot fresh from `source`.
pub fn reflow_measured<S: MeasureSource>(columns: &mut ColumnSet, source: &S) -> ReflowPass {
    let bottoms = columns.bottoms(source);
    reflow(columns, bottoms, source)
}

/// Run a balance pass against an explicit bottoms snapshot.
///
/// `bottoms` holds the measured bottom edge of each column's last cell (0
/// for an empty column), left to right. The pass mutates `columns` in place
/// and reports what it did; with a single column or no cell below the
/// boundary it is a no-op.
///
/// Absent measurements read as zero extent, which keeps unrendered cells
/// where they are. A cell vanishing between measurement and append is a
/// precondition violation guarded by debug assertions, not repaired.
#[tracing::instrument(
    skip_all,
    target = "horizon_cascade::layout::reflow",
    level = "trace",
    fields(columns = columns.column_count(), cells = columns.cell_count())
)]
pub fn reflow<S: MeasureSource>(
    columns: &mut ColumnSet,
    mut bottoms: Vec<f32>,
    source: &S,
) -> ReflowPass {
    let column_count = columns.column_count();
    debug_assert_eq!(bottoms.len(), column_count, "one bottom per column");
    let cells_before = columns.cell_count();

    // A single column has no other columns to pull from.
    if column_count <= 1 {
        return ReflowPass {
            moves: Vec::new(),
            batches: Vec::new(),
            bottoms,
        };
    }

    let (min_index, min_bottom) = shortest_column(&bottoms);

    // Pool every cell sitting strictly below the shortest column's bottom,
    // scanning each other column from its visually last cell upward. A
    // candidate's height leaves its source tracker immediately; the actual
    // detach is deferred to the batched application below.
    let mut pool: Vec<Candidate> = Vec::new();
    for index in 0..column_count {
        if index == min_index {
            continue;
        }
        let mut displaced: Vec<CellId> = Vec::new();
        for &cell in columns.columns()[index].cells().iter().rev() {
            let metrics = source.cell_metrics(cell).unwrap_or(CellMetrics::ZERO);
            if metrics.top > min_bottom {
                bottoms[index] -= metrics.height;
                displaced.push(cell);
                pool.push(Candidate {
                    cell,
                    height: metrics.height,
                    source: index,
                });
            }
        }
        if !displaced.is_empty() {
            columns.detach_cells(index, &displaced);
        }
    }

    if pool.is_empty() {
        // Already balanced.
        return ReflowPass {
            moves: Vec::new(),
            batches: Vec::new(),
            bottoms,
        };
    }

    // Re-insertion order is cell creation order, independent of which
    // column a candidate came from.
    pool.sort_by_key(|candidate| candidate.cell);

    // Greedy assignment: each pooled cell lands in whichever column is
    // shortest at its turn, first column on ties.
    let mut pending: Vec<Vec<CellId>> = vec![Vec::new(); column_count];
    let mut moves = Vec::with_capacity(pool.len());
    for candidate in &pool {
        let (dest, _) = shortest_column(&bottoms);
        pending[dest].push(candidate.cell);
        bottoms[dest] += candidate.height;
        moves.push(CellMove {
            cell: candidate.cell,
            source: candidate.source,
            dest,
        });
    }

    // Apply each column's batch in one operation, after every assignment
    // decision is final.
    let mut batches = Vec::new();
    for (column, cells) in pending.into_iter().enumerate() {
        if cells.is_empty() {
            continue;
        }
        columns.append_cells(column, &cells);
        batches.push(ColumnBatch { column, cells });
    }

    debug_assert_eq!(
        columns.cell_count(),
        cells_before,
        "balance pass must conserve cells"
    );

    tracing::trace!(
        target: "horizon_cascade::layout::reflow",
        moves = moves.len(),
        min_column = min_index,
        min_bottom,
        "balance pass complete"
    );

    ReflowPass {
        moves,
        batches,
        bottoms,
    }
}

/// Index and value of the lowest bottom, first index on ties.
fn shortest_column(bottoms: &[f32]) -> (usize, f32) {
    let mut shortest = (0, f32::INFINITY);
    for (index, &bottom) in bottoms.iter().enumerate() {
        if bottom < shortest.1 {
            shortest = (index, bottom);
        }
    }
    shortest
}
