//! Basic geometry types for the layout engine.
//!
//! All offsets are in host pixels, measured downward from the layout's
//! scrolling origin.

/// Committed geometry of a single cell, as measured by the host.
///
/// `top` is the cell's upper edge relative to the scrolling origin; `height`
/// is its rendered extent. A cell that has not produced any content measures
/// as [`CellMetrics::ZERO`], which is a valid measurement, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellMetrics {
    pub top: f32,
    pub height: f32,
}

impl CellMetrics {
    /// Create new cell metrics.
    #[inline]
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Zero metrics, used when the host has nothing to report for a cell.
    pub const ZERO: Self = Self {
        top: 0.0,
        height: 0.0,
    };

    /// The cell's lower edge relative to the scrolling origin.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

impl From<(f32, f32)> for CellMetrics {
    fn from((top, height): (f32, f32)) -> Self {
        Self { top, height }
    }
}

/// A snapshot of the host viewport's scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Scroll offset from the top of the content, in pixels.
    pub offset: f32,
    /// Visible viewport height, in pixels.
    pub viewport: f32,
    /// Total content height, in pixels.
    pub content_height: f32,
}

impl ScrollState {
    /// Create a new scroll snapshot.
    #[inline]
    pub const fn new(offset: f32, viewport: f32, content_height: f32) -> Self {
        Self {
            offset,
            viewport,
            content_height,
        }
    }

    /// Whether the viewport is scrolled to the very top.
    #[inline]
    pub fn at_top(&self) -> bool {
        self.offset <= 0.0
    }

    /// Remaining scrollable distance below the viewport, clamped to zero.
    #[inline]
    pub fn distance_to_bottom(&self) -> f32 {
        (self.content_height - self.viewport - self.offset).max(0.0)
    }
}
