//! Pull-to-refresh gesture recognition.
//!
//! A refresh pull is a single touch sequence that begins with the viewport
//! at the scroll origin, travels downward at least [`PULL_THRESHOLD`], and
//! ends without the viewport leaving the origin. Everything else is an
//! ordinary scroll and never reaches the refresh signal.

use crate::geometry::ScrollState;

/// Minimum downward travel, in layout units, for a release to request a
/// refresh.
pub const PULL_THRESHOLD: f32 = 60.0;

enum PullState {
    Idle,
    Pulling { start_y: f32, distance: f32 },
}

/// Recognizes the pull-to-refresh gesture from raw touch events.
///
/// The tracker holds no timer and no velocity model. It arms on a touch
/// that starts at the top, follows vertical travel, and decides on release;
/// an upward drag or any scroll away from the top disarms the sequence.
pub struct GestureTracker {
    state: PullState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            state: PullState::Idle,
        }
    }

    /// Whether a refresh pull is currently being tracked.
    pub fn is_pulling(&self) -> bool {
        matches!(self.state, PullState::Pulling { .. })
    }

    /// Downward travel of the current pull, 0 when idle.
    ///
    /// Hosts use this to reveal the refresh indicator proportionally while
    /// the finger is down.
    pub fn pull_distance(&self) -> f32 {
        match self.state {
            PullState::Idle => 0.0,
            PullState::Pulling { distance, .. } => distance,
        }
    }

    /// Begin a touch sequence at vertical position `y`.
    ///
    /// Arms only when the viewport sits at the scroll origin; a touch that
    /// starts mid-scroll stays inert for its whole lifetime.
    pub fn touch_start(&mut self, y: f32, scroll: &ScrollState) {
        if scroll.at_top() {
            tracing::debug!(
                target: "horizon_cascade::gesture",
                y,
                "refresh pull armed"
            );
            self.state = PullState::Pulling {
                start_y: y,
                distance: 0.0,
            };
        } else {
            self.state = PullState::Idle;
        }
    }

    /// Continue a touch sequence at vertical position `y`.
    ///
    /// Net upward travel disarms; the sequence cannot re-arm until the next
    /// [`touch_start`](GestureTracker::touch_start).
    pub fn touch_move(&mut self, y: f32) {
        if let PullState::Pulling { start_y, .. } = self.state {
            let travel = y - start_y;
            if travel < 0.0 {
                tracing::debug!(
                    target: "horizon_cascade::gesture",
                    travel,
                    "refresh pull disarmed by upward drag"
                );
                self.state = PullState::Idle;
            } else {
                self.state = PullState::Pulling {
                    start_y,
                    distance: travel,
                };
            }
        }
    }

    /// End the touch sequence, reporting whether a refresh was requested.
    ///
    /// Returns `true` at most once per sequence; the tracker returns to
    /// idle either way.
    pub fn touch_end(&mut self) -> bool {
        let requested = match self.state {
            PullState::Pulling { distance, .. } => distance >= PULL_THRESHOLD,
            PullState::Idle => false,
        };
        self.state = PullState::Idle;
        if requested {
            tracing::debug!(
                target: "horizon_cascade::gesture",
                "refresh pull released past threshold"
            );
        }
        requested
    }

    /// Note a scroll frame; leaving the origin disarms any active pull.
    pub fn on_scroll(&mut self, scroll: &ScrollState) {
        if self.is_pulling() && !scroll.at_top() {
            tracing::debug!(
                target: "horizon_cascade::gesture",
                offset = scroll.offset,
                "refresh pull disarmed by scroll"
            );
            self.state = PullState::Idle;
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}
