//! Tests for column balancing driven through the public API.

use std::collections::HashMap;

use parking_lot::Mutex;

use horizon_cascade::{
    CascadeConfig, CascadeView, CellId, CellMetrics, CellMove, ColumnBatch, ColumnSet,
    MeasureSource, NodeId, SlotNode, SlotTag, distribute, reflow,
};

struct MockMeasures {
    metrics: Mutex<HashMap<CellId, CellMetrics>>,
}

impl MockMeasures {
    fn new() -> Self {
        Self {
            metrics: Mutex::new(HashMap::new()),
        }
    }

    fn set(&self, cell: CellId, top: f32, height: f32) {
        self.metrics.lock().insert(cell, CellMetrics::new(top, height));
    }
}

impl MeasureSource for MockMeasures {
    fn cell_metrics(&self, cell: CellId) -> Option<CellMetrics> {
        self.metrics.lock().get(&cell).copied()
    }
}

fn cell(raw: u64) -> CellId {
    CellId::from_raw(raw)
}

fn cells(raws: &[u64]) -> Vec<CellId> {
    raws.iter().copied().map(CellId::from_raw).collect()
}

fn cell_content(count: usize) -> Vec<SlotNode> {
    (0..count)
        .map(|_| SlotNode::new(NodeId::next(), SlotTag::Cell))
        .collect()
}

/// The view's cell IDs in creation order. IDs come from a process-wide
/// counter, so tests recover them instead of assuming absolute values.
fn ids_in_creation_order(view: &CascadeView) -> Vec<CellId> {
    let mut ids: Vec<CellId> = view.columns().cell_ids().collect();
    ids.sort();
    ids
}

/// Re-measure every cell as a host would after committing the current
/// assignment: each column stacks its cells gaplessly from the origin.
fn restack(view: &CascadeView, measures: &MockMeasures, heights: &HashMap<CellId, f32>) {
    for index in 0..view.columns().column_count() {
        let mut top = 0.0;
        for &cell in view.column_cells(index).unwrap() {
            let height = heights[&cell];
            measures.set(cell, top, height);
            top += height;
        }
    }
}

/// Install the env-filtered subscriber once; `RUST_LOG` directives such as
/// `horizon_cascade::layout::reflow=trace` select the engine traces.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_boundary_walkthrough_with_explicit_snapshot() {
    init_tracing();
    // Distribution order puts cells 5 and 6 at the bottom of column 0 and
    // cell 7 at the bottom of column 2.
    let mut columns = ColumnSet::new(3);
    distribute(&mut columns, &cells(&[1, 2, 3, 5, 4, 7, 6, 8]));
    assert_eq!(columns.columns()[0].cells(), cells(&[1, 5, 6]).as_slice());
    assert_eq!(columns.columns()[1].cells(), cells(&[2, 4, 8]).as_slice());
    assert_eq!(columns.columns()[2].cells(), cells(&[3, 7]).as_slice());

    let measures = MockMeasures::new();
    measures.set(cell(1), 0.0, 40.0);
    measures.set(cell(5), 60.0, 20.0);
    measures.set(cell(6), 90.0, 30.0);
    measures.set(cell(2), 0.0, 20.0);
    measures.set(cell(4), 20.0, 15.0);
    measures.set(cell(8), 35.0, 15.0);
    measures.set(cell(3), 0.0, 70.0);
    measures.set(cell(7), 70.0, 10.0);

    // Boundary is column 1's bottom of 50. Cells 5, 6 and 7 sit strictly
    // below it; after provisional removal the trackers read [50, 50, 70].
    let pass = reflow(&mut columns, vec![100.0, 50.0, 80.0], &measures);

    assert_eq!(
        pass.moves,
        vec![
            CellMove { cell: cell(5), source: 0, dest: 0 },
            CellMove { cell: cell(6), source: 0, dest: 1 },
            CellMove { cell: cell(7), source: 2, dest: 0 },
        ]
    );
    assert_eq!(
        pass.batches,
        vec![
            ColumnBatch { column: 0, cells: cells(&[5, 7]) },
            ColumnBatch { column: 1, cells: cells(&[6]) },
        ]
    );
    assert_eq!(pass.bottoms, vec![80.0, 80.0, 70.0]);

    assert_eq!(columns.columns()[0].cells(), cells(&[1, 5, 7]).as_slice());
    assert_eq!(columns.columns()[1].cells(), cells(&[2, 4, 8, 6]).as_slice());
    assert_eq!(columns.columns()[2].cells(), cells(&[3]).as_slice());
}

#[test]
fn test_conservation_over_repeated_passes() {
    let mut view = CascadeView::new(CascadeConfig::with_columns(3));
    view.set_content(cell_content(12));
    let ids = ids_in_creation_order(&view);

    let raw_heights = [
        73.0, 21.0, 55.0, 34.0, 89.0, 13.0, 47.0, 62.0, 29.0, 91.0, 18.0, 40.0,
    ];
    let heights: HashMap<CellId, f32> = ids.iter().copied().zip(raw_heights).collect();

    let measures = MockMeasures::new();
    for _ in 0..3 {
        restack(&view, &measures, &heights);
        view.request_reflow();
        view.on_frame_committed(&measures).unwrap();

        // Every cell is still owned by exactly one column.
        assert_eq!(ids_in_creation_order(&view), ids);
        for &id in &ids {
            let column = view.column_of(id).unwrap();
            assert!(view.column_cells(column).unwrap().contains(&id));
        }
    }
}

#[test]
fn test_single_column_is_inert() {
    let mut view = CascadeView::new(CascadeConfig::with_columns(1));
    view.set_content(cell_content(5));
    let ids = ids_in_creation_order(&view);

    let measures = MockMeasures::new();
    let mut top = 0.0;
    for (index, &id) in ids.iter().enumerate() {
        let height = 30.0 + index as f32 * 10.0;
        measures.set(id, top, height);
        top += height;
    }

    let pass = view.on_frame_committed(&measures).unwrap();
    assert!(pass.is_noop());
    assert_eq!(view.column_cells(0).unwrap(), ids.as_slice());
}

#[test]
fn test_empty_content_is_inert() {
    let mut view = CascadeView::new(CascadeConfig::with_columns(3));
    view.set_content(Vec::new());

    let pass = view.on_frame_committed(&MockMeasures::new()).unwrap();
    assert!(pass.is_noop());
    assert_eq!(pass.bottoms, vec![0.0, 0.0, 0.0]);
    assert_eq!(view.cell_count(), 0);
}

#[test]
fn test_balanced_layout_stays_balanced() {
    let mut view = CascadeView::new(CascadeConfig::with_columns(2));
    view.set_content(cell_content(4));
    let ids = ids_in_creation_order(&view);

    let heights: HashMap<CellId, f32> = ids.iter().map(|&id| (id, 50.0)).collect();
    let measures = MockMeasures::new();
    restack(&view, &measures, &heights);

    let pass = view.on_frame_committed(&measures).unwrap();
    assert!(pass.is_noop());
    assert_eq!(view.column_cells(0).unwrap(), &[ids[0], ids[2]]);
    assert_eq!(view.column_cells(1).unwrap(), &[ids[1], ids[3]]);
}

#[test]
fn test_rebalance_reaches_a_fixpoint() {
    let mut view = CascadeView::new(CascadeConfig::with_columns(3));
    view.set_content(cell_content(7));
    let ids = ids_in_creation_order(&view);

    // Column 0 ends up twice as tall as the others; its bottom cell is the
    // only one below the shortest bottom.
    let raw_heights = [40.0, 30.0, 25.0, 40.0, 30.0, 25.0, 40.0];
    let heights: HashMap<CellId, f32> = ids.iter().copied().zip(raw_heights).collect();

    let measures = MockMeasures::new();
    restack(&view, &measures, &heights);
    let first = view.on_frame_committed(&measures).unwrap();
    assert_eq!(
        first.moves,
        vec![CellMove { cell: ids[6], source: 0, dest: 2 }]
    );

    // After the host re-stacks the new assignment nothing is left to move.
    restack(&view, &measures, &heights);
    view.request_reflow();
    let second = view.on_frame_committed(&measures).unwrap();
    assert!(second.is_noop());
}
