//! The waterfall view facade.
//!
//! [`CascadeView`] owns one waterfall surface: the classified structural
//! groups, the column model, the sticky and gesture trackers, and the
//! pending-reflow latch. Hosts drive it in a fixed rhythm: replace or append
//! content, mirror the model into their visual tree with [`build`], commit
//! geometry, then let the deferred balance pass run via
//! [`on_frame_committed`] and mirror the reported moves.
//!
//! The view is single-owner and never locks internally. For hosts that
//! drain a [`SharedFrameQueue`] after commit, [`schedule_reflow`] provides
//! the shared-ownership glue.
//!
//! [`build`]: CascadeView::build
//! [`on_frame_committed`]: CascadeView::on_frame_committed

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use static_assertions::assert_impl_all;

use horizon_cascade_core::{SharedFrameQueue, Signal};

use crate::config::CascadeConfig;
use crate::error::{CascadeError, CascadeResult};
use crate::geometry::ScrollState;
use crate::gesture::GestureTracker;
use crate::host::{HostCapabilities, MeasureSource, RenderHost};
use crate::id::{CellId, NodeId};
use crate::layout::{ColumnSet, ReflowPass, distribute, reflow_measured};
use crate::slot::{Section, SlotGroups, SlotNode};
use crate::sticky::{StickyMode, StickyTracker, StickyTransition};

/// One waterfall layout surface.
pub struct CascadeView {
    config: CascadeConfig,
    groups: SlotGroups,
    columns: ColumnSet,
    cell_nodes: HashMap<CellId, NodeId>,
    scroll: ScrollState,
    sticky: StickyTracker,
    gesture: GestureTracker,
    reflow_queued: bool,
    task_posted: bool,
    /// Emitted after every completed balance pass, no-ops included.
    pub reflowed: Signal<ReflowPass>,
    /// Emitted for every scroll frame the view is told about.
    pub scrolled: Signal<ScrollState>,
    /// Emitted once per completed pull-to-refresh gesture.
    pub refresh_requested: Signal<()>,
}

assert_impl_all!(CascadeView: Send, Sync);

impl CascadeView {
    /// Create a view with sticky emulation on.
    ///
    /// Use [`with_capabilities`](CascadeView::with_capabilities) when the
    /// host can report native sticky support.
    pub fn new(config: CascadeConfig) -> Self {
        let config = config.normalized();
        let columns = ColumnSet::new(config.column_count);
        Self {
            config,
            groups: SlotGroups::default(),
            columns,
            cell_nodes: HashMap::new(),
            scroll: ScrollState::new(0.0, 0.0, 0.0),
            sticky: StickyTracker::new(StickyMode::Emulated),
            gesture: GestureTracker::new(),
            reflow_queued: false,
            task_posted: false,
            reflowed: Signal::new(),
            scrolled: Signal::new(),
            refresh_requested: Signal::new(),
        }
    }

    /// Create a view whose sticky mode matches the host's capabilities.
    pub fn with_capabilities<C: HostCapabilities>(config: CascadeConfig, capabilities: &C) -> Self {
        let mut view = Self::new(config);
        view.sticky = StickyTracker::for_host(capabilities);
        view
    }

    /// The normalized configuration this view lays out with.
    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    /// The column model, read-only.
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// The structural groups of the current content.
    pub fn groups(&self) -> &SlotGroups {
        &self.groups
    }

    /// Number of cells currently owned by the column model.
    pub fn cell_count(&self) -> usize {
        self.columns.cell_count()
    }

    /// The scroll state most recently reported by the host.
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Whether a balance pass is latched for the next commit.
    pub fn is_reflow_queued(&self) -> bool {
        self.reflow_queued
    }

    /// Downward travel of an active refresh pull, 0 when idle.
    pub fn pull_distance(&self) -> f32 {
        self.gesture.pull_distance()
    }

    /// The host node backing a cell.
    pub fn cell_node(&self, cell: CellId) -> CascadeResult<NodeId> {
        self.cell_nodes
            .get(&cell)
            .copied()
            .ok_or(CascadeError::UnknownCell(cell))
    }

    /// The column currently holding a cell.
    pub fn column_of(&self, cell: CellId) -> CascadeResult<usize> {
        self.columns.column_of(cell)
    }

    /// The cells of one column, top to bottom.
    pub fn column_cells(&self, index: usize) -> CascadeResult<&[CellId]> {
        self.columns.column(index).map(|column| column.cells())
    }

    /// Replace the entire content with a freshly classified sequence.
    ///
    /// Every cell node is assigned a new [`CellId`] in input order and the
    /// cells are distributed round-robin across a rebuilt column model. The
    /// sticky tracker resets and waits for
    /// [`seed_sticky_headers`](CascadeView::seed_sticky_headers); any active
    /// touch sequence is abandoned. A balance pass is latched.
    pub fn set_content<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = SlotNode>,
    {
        self.groups = SlotGroups::classify(nodes);
        self.cell_nodes.clear();
        let backing: Vec<NodeId> = self.groups.cells.clone();
        let ids = self.allot_cells(&backing);

        self.columns = ColumnSet::new(self.config.column_count);
        distribute(&mut self.columns, &ids);

        self.sticky.clear();
        self.gesture = GestureTracker::new();

        tracing::debug!(
            target: "horizon_cascade::view",
            cells = ids.len(),
            nodes = self.groups.node_count(),
            columns = self.columns.column_count(),
            "content replaced"
        );
        self.request_reflow();
    }

    /// Append additional content to the existing surface.
    ///
    /// New cells continue the round-robin distribution exactly where the
    /// current cell count left off, so an append behaves like a longer
    /// initial sequence. Indicator slots stay first-wins across the whole
    /// surface; a second refresh or loading node demotes to passthrough.
    /// A balance pass is latched.
    pub fn append_content<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = SlotNode>,
    {
        let added = SlotGroups::classify(nodes);

        if let Some(node) = added.refresh {
            if self.groups.refresh.is_none() {
                self.groups.refresh = Some(node);
            } else {
                tracing::debug!(
                    target: "horizon_cascade::view",
                    %node,
                    "extra refresh indicator demoted to passthrough"
                );
                self.groups.other.push(node);
            }
        }
        if let Some(node) = added.loading {
            if self.groups.loading.is_none() {
                self.groups.loading = Some(node);
            } else {
                tracing::debug!(
                    target: "horizon_cascade::view",
                    %node,
                    "extra loading indicator demoted to passthrough"
                );
                self.groups.other.push(node);
            }
        }
        self.groups.headers.extend(added.headers);
        self.groups.footers.extend(added.footers);
        self.groups.other.extend(added.other);

        let ids = self.allot_cells(&added.cells);
        self.groups.cells.extend(added.cells);
        distribute(&mut self.columns, &ids);

        tracing::debug!(
            target: "horizon_cascade::view",
            appended = ids.len(),
            total = self.columns.cell_count(),
            "content appended"
        );
        self.request_reflow();
    }

    /// Rebuild the column model under a new configuration.
    ///
    /// A column count change invalidates every assignment, so all cells are
    /// redistributed from scratch in creation order and a balance pass is
    /// latched.
    pub fn set_config(&mut self, config: CascadeConfig) {
        self.config = config.normalized();

        let mut cells: Vec<CellId> = self.columns.cell_ids().collect();
        cells.sort();
        self.columns = ColumnSet::new(self.config.column_count);
        distribute(&mut self.columns, &cells);

        tracing::debug!(
            target: "horizon_cascade::view",
            columns = self.columns.column_count(),
            cells = cells.len(),
            "configuration changed, relayout from scratch"
        );
        self.request_reflow();
    }

    /// Mirror the current model into the host's visual tree.
    ///
    /// Sections are placed in their fixed visual order; the column grid is
    /// expanded into per-column styles plus one cell attachment per column.
    /// Building does not consume the reflow latch, because cell geometry
    /// only exists after the host commits what was built here.
    pub fn build<H: RenderHost>(&self, host: &mut H) {
        for section in Section::ORDER {
            if section == Section::ColumnGrid {
                let styles = vec![self.config.column_style(); self.columns.column_count()];
                host.place_columns(&styles);
                for (index, column) in self.columns.columns().iter().enumerate() {
                    host.attach_cells(index, column.cells());
                }
            } else {
                host.place_section(section, &self.groups.section_nodes(section));
            }
        }
        tracing::debug!(
            target: "horizon_cascade::view",
            columns = self.columns.column_count(),
            cells = self.columns.cell_count(),
            "visual tree built"
        );
    }

    /// Latch a balance pass for the next commit.
    ///
    /// Returns `true` when the latch was newly set and `false` when a pass
    /// was already queued, so repeated requests within one render cycle
    /// coalesce into a single deferred pass.
    pub fn request_reflow(&mut self) -> bool {
        if self.reflow_queued {
            return false;
        }
        self.reflow_queued = true;
        tracing::trace!(target: "horizon_cascade::view", "balance pass queued");
        true
    }

    /// Run the deferred balance pass against freshly committed geometry.
    ///
    /// Consumes the latch; returns `None` when no pass was queued. The
    /// completed pass is emitted on [`reflowed`](CascadeView::reflowed)
    /// before being returned, no-op passes included. A commit also settles
    /// the task bookkeeping of [`schedule_reflow`], so the next cycle posts
    /// a fresh task.
    pub fn on_frame_committed<S: MeasureSource>(&mut self, source: &S) -> Option<ReflowPass> {
        self.task_posted = false;
        if !self.reflow_queued {
            return None;
        }
        self.reflow_queued = false;

        let pass = reflow_measured(&mut self.columns, source);
        tracing::debug!(
            target: "horizon_cascade::view",
            moves = pass.moves.len(),
            "deferred balance pass ran"
        );
        self.reflowed.emit(pass.clone());
        Some(pass)
    }

    /// Register measured top offsets for this content's sticky headers.
    ///
    /// The host measures header positions after the first commit and feeds
    /// them here; non-sticky nodes in `tops` are ignored. Replaces whatever
    /// the tracker held before. Inert when the host pins natively.
    pub fn seed_sticky_headers<I>(&mut self, tops: I)
    where
        I: IntoIterator<Item = (NodeId, f32)>,
    {
        self.sticky.clear();
        if !self.sticky.is_emulating() {
            return;
        }
        let sticky: Vec<NodeId> = self.groups.sticky_headers().collect();
        for (node, top) in tops {
            if sticky.contains(&node) {
                self.sticky.track(node, top);
            }
        }
    }

    /// Record a scroll frame.
    ///
    /// Updates the gesture tracker, derives sticky transitions when
    /// emulating, and emits [`scrolled`](CascadeView::scrolled). The
    /// returned transitions are the pin changes the host must apply.
    pub fn handle_scroll(&mut self, state: ScrollState) -> Vec<StickyTransition> {
        self.scroll = state;
        self.gesture.on_scroll(&state);
        let transitions = self.sticky.update(state.offset);
        self.scrolled.emit(state);
        transitions
    }

    /// Begin a touch sequence at vertical position `y`.
    pub fn handle_touch_start(&mut self, y: f32) {
        self.gesture.touch_start(y, &self.scroll);
    }

    /// Continue a touch sequence at vertical position `y`.
    pub fn handle_touch_move(&mut self, y: f32) {
        self.gesture.touch_move(y);
    }

    /// End a touch sequence.
    ///
    /// Emits [`refresh_requested`](CascadeView::refresh_requested) and
    /// returns `true` when the sequence completed a refresh pull.
    pub fn handle_touch_end(&mut self) -> bool {
        if self.gesture.touch_end() {
            self.refresh_requested.emit(());
            true
        } else {
            false
        }
    }

    fn allot_cells(&mut self, nodes: &[NodeId]) -> Vec<CellId> {
        nodes
            .iter()
            .map(|&node| {
                let id = CellId::next();
                self.cell_nodes.insert(id, node);
                id
            })
            .collect()
    }
}

/// Queue the view's deferred balance pass on a shared frame queue.
///
/// Latches a pass, joining any pass a content change already latched, and
/// posts a single task that runs [`CascadeView::on_frame_committed`] when
/// the host drains the queue after commit. The post coalesces on the task,
/// not the latch: repeated calls before the drain return `false` without
/// posting again, and the commit clears that bookkeeping, so each cycle
/// keeps at most one task pending while a latched pass always has a task
/// to deliver it.
///
/// Returns `true` when this call posted the task.
///
/// Slots connected to the view's signals run while the task holds the view
/// lock and must not call back into it.
pub fn schedule_reflow<M>(
    view: &Arc<Mutex<CascadeView>>,
    measures: &Arc<M>,
    queue: &SharedFrameQueue,
) -> bool
where
    M: MeasureSource + Send + Sync + 'static,
{
    {
        let mut view = view.lock();
        view.request_reflow();
        if view.task_posted {
            return false;
        }
        view.task_posted = true;
    }
    let task_view = Arc::clone(view);
    let task_measures = Arc::clone(measures);
    queue.post(move || {
        task_view.lock().on_frame_committed(task_measures.as_ref());
    });
    true
}
