//! Initial item-to-column assignment.
//!
//! When content enters the layout nothing has been measured yet, so there is
//! nothing to balance against. Cells are placed with one stable round-robin
//! pass over the input sequence: item `i` goes to column `i mod N`. Heights
//! play no part; the deferred balance pass corrects any drift once geometry
//! has committed.
//!
//! The per-column width hint that accompanies this placement
//! (`100 / columnCount` percent) comes from
//! [`CascadeConfig::column_width_percent`](crate::CascadeConfig::column_width_percent).

use super::column::ColumnSet;
use crate::id::CellId;

/// Map each of `item_count` items to its initial column index.
///
/// `start_index` continues the stable pass across appends: an item appended
/// when `k` cells already exist is placed as if it were item `k` of the
/// original sequence. Column count 0 is rejected upstream; it is treated as
/// a single column here.
pub fn column_assignments(
    item_count: usize,
    column_count: usize,
    start_index: usize,
) -> Vec<usize> {
    let column_count = column_count.max(1);
    (0..item_count)
        .map(|i| (start_index + i) % column_count)
        .collect()
}

/// Place `cells` into the columns, continuing the round-robin pass from the
/// set's current cell total.
///
/// Produces no measurements and reads none; the placement is order-stable
/// and height-blind.
pub fn distribute(columns: &mut ColumnSet, cells: &[CellId]) {
    let assignments = column_assignments(cells.len(), columns.column_count(), columns.cell_count());
    for (&cell, &column) in cells.iter().zip(&assignments) {
        columns.push_cell(column, cell);
    }
    tracing::trace!(
        target: "horizon_cascade::layout",
        placed = cells.len(),
        columns = columns.column_count(),
        "distributed cells round-robin"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(raw: u64) -> CellId {
        CellId::from_raw(raw)
    }

    #[test]
    fn test_round_robin_over_three_columns() {
        assert_eq!(column_assignments(7, 3, 0), vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_single_column_takes_everything() {
        assert_eq!(column_assignments(4, 1, 0), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert!(column_assignments(0, 3, 0).is_empty());

        let mut columns = ColumnSet::new(3);
        distribute(&mut columns, &[]);
        assert_eq!(columns.cell_count(), 0);
    }

    #[test]
    fn test_distribute_fills_buckets_in_order() {
        let mut columns = ColumnSet::new(2);
        distribute(&mut columns, &[cell(1), cell(2), cell(3)]);

        assert_eq!(columns.columns()[0].cells(), &[cell(1), cell(3)]);
        assert_eq!(columns.columns()[1].cells(), &[cell(2)]);
    }

    #[test]
    fn test_append_continues_the_pass() {
        let mut columns = ColumnSet::new(3);
        distribute(&mut columns, &[cell(1), cell(2)]);
        // Two cells exist, so the next placement starts at column 2.
        distribute(&mut columns, &[cell(3), cell(4)]);

        assert_eq!(columns.columns()[0].cells(), &[cell(1), cell(4)]);
        assert_eq!(columns.columns()[1].cells(), &[cell(2)]);
        assert_eq!(columns.columns()[2].cells(), &[cell(3)]);
    }
}
