//! Structural slot classification.
//!
//! Host content arrives as one flat, ordered sequence of tagged nodes. Before
//! any layout happens the sequence is split once into its structural groups:
//! at most one refresh indicator, at most one loading indicator, headers,
//! footers (headers carrying an explicit footer marker), passthrough nodes,
//! and the cells that actually participate in column balancing.
//!
//! Everything except cells is positioned outside the column grid, in the
//! fixed section order refresh, headers, other, column grid, footers,
//! loading.

use crate::id::NodeId;

/// Role tag attached to each incoming slot node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTag {
    /// Pull-to-refresh indicator, revealed above all content.
    Refresh,
    /// Load-in-progress indicator, shown below all content.
    Loading,
    /// A header positioned above the column grid.
    Header {
        /// Explicit marker rerouting this header below the grid.
        footer: bool,
        /// Whether the header should stick to the viewport while scrolling.
        sticky: bool,
    },
    /// A content cell, eligible for column balancing.
    Cell,
    /// Any other node, passed through between headers and the grid.
    Other,
}

/// One node of host content plus its structural role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotNode {
    /// Stable handle to the host's content node.
    pub node: NodeId,
    /// The node's structural role.
    pub tag: SlotTag,
}

impl SlotNode {
    /// Create a tagged slot node.
    pub const fn new(node: NodeId, tag: SlotTag) -> Self {
        Self { node, tag }
    }
}

/// A header node together with its sticky flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderNode {
    /// Stable handle to the host's content node.
    pub node: NodeId,
    /// Whether this header sticks to the viewport while scrolling.
    pub sticky: bool,
}

/// The structural sections of a waterfall surface, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Pull-to-refresh indicator.
    Refresh,
    /// Headers above the grid.
    Headers,
    /// Passthrough nodes between headers and the grid.
    Other,
    /// The balanced column grid itself.
    ColumnGrid,
    /// Footers below the grid.
    Footers,
    /// Loading indicator at the very bottom.
    Loading,
}

impl Section {
    /// All sections in their fixed visual order, top to bottom.
    pub const ORDER: [Section; 6] = [
        Section::Refresh,
        Section::Headers,
        Section::Other,
        Section::ColumnGrid,
        Section::Footers,
        Section::Loading,
    ];
}

/// The result of classifying one content sequence.
///
/// Group contents keep their relative input order. Every input node appears
/// in exactly one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotGroups {
    /// The refresh indicator, if any.
    pub refresh: Option<NodeId>,
    /// The loading indicator, if any.
    pub loading: Option<NodeId>,
    /// Headers above the grid.
    pub headers: Vec<HeaderNode>,
    /// Footer-marked headers below the grid.
    pub footers: Vec<NodeId>,
    /// Passthrough nodes.
    pub other: Vec<NodeId>,
    /// Cells eligible for column balancing, in creation order.
    pub cells: Vec<NodeId>,
}

impl SlotGroups {
    /// Classify a flat content sequence into its structural groups.
    ///
    /// The refresh and loading groups hold at most one node each: the first
    /// node with the tag wins, and any later one is demoted to a passthrough
    /// node so nothing silently disappears.
    pub fn classify<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = SlotNode>,
    {
        let mut groups = SlotGroups::default();
        for SlotNode { node, tag } in nodes {
            match tag {
                SlotTag::Refresh => {
                    if groups.refresh.is_none() {
                        groups.refresh = Some(node);
                    } else {
                        tracing::debug!(
                            target: "horizon_cascade::slot",
                            %node,
                            "extra refresh indicator demoted to passthrough"
                        );
                        groups.other.push(node);
                    }
                }
                SlotTag::Loading => {
                    if groups.loading.is_none() {
                        groups.loading = Some(node);
                    } else {
                        tracing::debug!(
                            target: "horizon_cascade::slot",
                            %node,
                            "extra loading indicator demoted to passthrough"
                        );
                        groups.other.push(node);
                    }
                }
                SlotTag::Header { footer: true, .. } => groups.footers.push(node),
                SlotTag::Header { footer: false, sticky } => {
                    groups.headers.push(HeaderNode { node, sticky });
                }
                SlotTag::Cell => groups.cells.push(node),
                SlotTag::Other => groups.other.push(node),
            }
        }
        groups
    }

    /// Total number of classified nodes across all groups.
    pub fn node_count(&self) -> usize {
        self.refresh.is_some() as usize
            + self.loading.is_some() as usize
            + self.headers.len()
            + self.footers.len()
            + self.other.len()
            + self.cells.len()
    }

    /// The nodes belonging to a structural section, in visual order.
    ///
    /// [`Section::ColumnGrid`] reports no nodes here; the grid holds cells,
    /// which the column model owns once layout begins.
    pub fn section_nodes(&self, section: Section) -> Vec<NodeId> {
        match section {
            Section::Refresh => self.refresh.into_iter().collect(),
            Section::Headers => self.headers.iter().map(|h| h.node).collect(),
            Section::Other => self.other.clone(),
            Section::ColumnGrid => Vec::new(),
            Section::Footers => self.footers.clone(),
            Section::Loading => self.loading.into_iter().collect(),
        }
    }

    /// Headers flagged sticky, in visual order.
    pub fn sticky_headers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.headers.iter().filter(|h| h.sticky).map(|h| h.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(raw: u64) -> NodeId {
        NodeId::from_raw(raw)
    }

    #[test]
    fn test_groups_preserve_relative_order() {
        let groups = SlotGroups::classify(vec![
            SlotNode::new(node(1), SlotTag::Header { footer: false, sticky: true }),
            SlotNode::new(node(2), SlotTag::Cell),
            SlotNode::new(node(3), SlotTag::Other),
            SlotNode::new(node(4), SlotTag::Cell),
            SlotNode::new(node(5), SlotTag::Header { footer: true, sticky: false }),
            SlotNode::new(node(6), SlotTag::Refresh),
            SlotNode::new(node(7), SlotTag::Loading),
        ]);

        assert_eq!(groups.refresh, Some(node(6)));
        assert_eq!(groups.loading, Some(node(7)));
        assert_eq!(groups.headers, vec![HeaderNode { node: node(1), sticky: true }]);
        assert_eq!(groups.footers, vec![node(5)]);
        assert_eq!(groups.other, vec![node(3)]);
        assert_eq!(groups.cells, vec![node(2), node(4)]);
        assert_eq!(groups.node_count(), 7);
    }

    #[test]
    fn test_extra_indicators_demote_to_passthrough() {
        let groups = SlotGroups::classify(vec![
            SlotNode::new(node(1), SlotTag::Refresh),
            SlotNode::new(node(2), SlotTag::Refresh),
            SlotNode::new(node(3), SlotTag::Loading),
            SlotNode::new(node(4), SlotTag::Loading),
        ]);

        assert_eq!(groups.refresh, Some(node(1)));
        assert_eq!(groups.loading, Some(node(3)));
        assert_eq!(groups.other, vec![node(2), node(4)]);
        assert_eq!(groups.node_count(), 4);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let groups = SlotGroups::classify(vec![
            SlotNode::new(node(1), SlotTag::Loading),
            SlotNode::new(node(2), SlotTag::Cell),
            SlotNode::new(node(3), SlotTag::Header { footer: false, sticky: false }),
            SlotNode::new(node(4), SlotTag::Refresh),
        ]);

        let in_order: Vec<NodeId> = Section::ORDER
            .iter()
            .flat_map(|section| groups.section_nodes(*section))
            .collect();
        // Input order was loading, cell, header, refresh; sections reorder
        // them while the cell stays inside the grid.
        assert_eq!(in_order, vec![node(4), node(3), node(1)]);
    }

    #[test]
    fn test_sticky_headers_filtered() {
        let groups = SlotGroups::classify(vec![
            SlotNode::new(node(1), SlotTag::Header { footer: false, sticky: true }),
            SlotNode::new(node(2), SlotTag::Header { footer: false, sticky: false }),
            SlotNode::new(node(3), SlotTag::Header { footer: true, sticky: true }),
        ]);

        let sticky: Vec<NodeId> = groups.sticky_headers().collect();
        // The footer-marked header leaves the header group entirely.
        assert_eq!(sticky, vec![node(1)]);
        assert_eq!(groups.footers, vec![node(3)]);
    }

    #[test]
    fn test_empty_input_yields_empty_groups() {
        let groups = SlotGroups::classify(Vec::new());
        assert_eq!(groups, SlotGroups::default());
        assert_eq!(groups.node_count(), 0);
    }
}
