//! Scroll-driven sticky header emulation.
//!
//! Hosts with native sticky positioning pin headers themselves and the
//! tracker stays inert. Everywhere else the view records each sticky
//! header's initial top offset at content time and replays pin state from
//! scroll offsets, one transition per actual state change.

use crate::host::HostCapabilities;
use crate::id::NodeId;

/// How sticky headers are realized for the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyMode {
    /// The host pins sticky headers natively.
    Native,
    /// Pin state is derived here and mirrored by the host per transition.
    Emulated,
}

/// A pin state change for one tracked header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyTransition {
    /// The header's original position scrolled past the origin; pin it.
    Stick(NodeId),
    /// The header's original position came back into view; unpin it.
    Release(NodeId),
}

struct TrackedHeader {
    node: NodeId,
    initial_top: f32,
    stuck: bool,
}

/// Emulates sticky positioning for hosts without native support.
///
/// Headers register once per content pass with the top offset they were
/// laid out at. [`update`](StickyTracker::update) compares those offsets
/// against the current scroll offset and reports only the headers whose
/// pin state changed, so a host can apply each transition exactly once.
pub struct StickyTracker {
    mode: StickyMode,
    headers: Vec<TrackedHeader>,
}

impl StickyTracker {
    /// Create a tracker in the given mode.
    pub fn new(mode: StickyMode) -> Self {
        Self {
            mode,
            headers: Vec::new(),
        }
    }

    /// Create a tracker matching the host's sticky support.
    pub fn for_host<C: HostCapabilities>(capabilities: &C) -> Self {
        let mode = if capabilities.native_sticky() {
            StickyMode::Native
        } else {
            StickyMode::Emulated
        };
        Self::new(mode)
    }

    /// The mode this tracker was created with.
    pub fn mode(&self) -> StickyMode {
        self.mode
    }

    /// Whether this tracker drives pin state itself.
    pub fn is_emulating(&self) -> bool {
        self.mode == StickyMode::Emulated
    }

    /// Number of headers currently tracked.
    pub fn tracked_count(&self) -> usize {
        self.headers.len()
    }

    /// Forget all tracked headers, keeping the mode.
    ///
    /// Called on every full content replacement before headers re-register.
    pub fn clear(&mut self) {
        self.headers.clear();
    }

    /// Register a sticky header with the top offset it was laid out at.
    ///
    /// Inert in native mode. A freshly registered header starts unpinned;
    /// the next [`update`](StickyTracker::update) settles its state.
    pub fn track(&mut self, node: NodeId, initial_top: f32) {
        if !self.is_emulating() {
            return;
        }
        tracing::debug!(
            target: "horizon_cascade::sticky",
            node = %node,
            initial_top,
            "tracking sticky header"
        );
        self.headers.push(TrackedHeader {
            node,
            initial_top,
            stuck: false,
        });
    }

    /// Recompute pin state for the given scroll offset.
    ///
    /// A header pins while its initial top is at or above the offset. The
    /// returned transitions follow registration order and contain one entry
    /// per header that changed state, none for headers that did not.
    pub fn update(&mut self, scroll_offset: f32) -> Vec<StickyTransition> {
        if !self.is_emulating() {
            return Vec::new();
        }
        let mut transitions = Vec::new();
        for header in &mut self.headers {
            let should_stick = header.initial_top <= scroll_offset;
            if should_stick == header.stuck {
                continue;
            }
            header.stuck = should_stick;
            tracing::debug!(
                target: "horizon_cascade::sticky",
                node = %header.node,
                stuck = should_stick,
                "sticky state changed"
            );
            transitions.push(if should_stick {
                StickyTransition::Stick(header.node)
            } else {
                StickyTransition::Release(header.node)
            });
        }
        transitions
    }
}
